//! Threshold surface regression test
//!
//! Builds threshold surfaces from the test images and checks window
//! thresholds, validity correction and smoothing.
//!
//! # Test images
//! - `blocks4.pgm`: 4x4, top-left 2x2 block at 10, the rest at 200
//! - `flat_corner.pgm`: 12x12, textured top-left 4x4 corner on a flat 150 field
//! - `shaded_text.pgm`: 36x36, dark strokes on a left-to-right brightness ramp

use winthresh_io::ImageFormat;
use winthresh_surface::{CorrectionStats, SurfaceOptions, build_surface};
use winthresh_test::{RegParams, load_test_image};

/// Thresholds of the 4x4 grid over `shaded_text.pgm`, row-major
const SHADED_THRESHOLDS: [u8; 16] = [
    49, 77, 104, 129, //
    50, 75, 103, 130, //
    48, 76, 103, 131, //
    49, 77, 104, 129,
];

/// The same grid after correction with tolerance 7.72
const SHADED_CORRECTED: [u8; 16] = [
    49, 50, 130, 130, //
    50, 70, 103, 130, //
    63, 76, 103, 112, //
    49, 77, 104, 104,
];

fn compare_stats(rp: &mut RegParams, expected: CorrectionStats, actual: Option<CorrectionStats>) {
    let actual = actual.unwrap_or_default();
    rp.compare_values(expected.iterations as f64, actual.iterations as f64, 0.0);
    rp.compare_values(expected.repaired as f64, actual.repaired as f64, 0.0);
    rp.compare_values(
        if expected.converged { 1.0 } else { 0.0 },
        if actual.converged { 1.0 } else { 0.0 },
        0.0,
    );
}

#[test]
fn surface_reg() {
    let mut rp = RegParams::new("surface");

    // --- Flat windows force the threshold to 128 ---
    eprintln!("=== Test 1: blocks4, N=2 ===");
    let pix = load_test_image("blocks4.pgm").expect("load blocks4.pgm");
    let result = build_surface(&pix, &SurfaceOptions::with_divisions(2)).expect("build");
    for w in result.windows.iter() {
        rp.compare_values(0.0, w.spread, 0.0);
        rp.compare_values(128.0, w.threshold as f64, 0.0);
    }

    // every window is invalid, so correction stops after one round
    let options = SurfaceOptions {
        enable_validation: true,
        ..SurfaceOptions::with_divisions(2)
    };
    let validated = build_surface(&pix, &options).expect("build validated");
    compare_stats(
        &mut rp,
        CorrectionStats {
            iterations: 1,
            repaired: 0,
            converged: false,
        },
        validated.correction,
    );
    rp.compare_pix(&result.surface, &validated.surface);

    // --- Correction spreads the only valid threshold ---
    eprintln!("=== Test 2: flat_corner, N=3 ===");
    let pix = load_test_image("flat_corner.pgm").expect("load flat_corner.pgm");
    let plain = build_surface(&pix, &SurfaceOptions::with_divisions(3)).expect("build");
    rp.compare_values(100.0, plain.windows[(0, 0)].threshold as f64, 0.0);
    rp.compare_values(18.604, plain.windows[(0, 0)].spread, 0.001);
    rp.compare_values(128.0, plain.windows[(2, 2)].threshold as f64, 0.0);

    let options = SurfaceOptions {
        enable_validation: true,
        ..SurfaceOptions::with_divisions(3)
    };
    let corrected = build_surface(&pix, &options).expect("build validated");
    compare_stats(
        &mut rp,
        CorrectionStats {
            iterations: 3,
            repaired: 8,
            converged: true,
        },
        corrected.correction,
    );
    for w in corrected.windows.iter() {
        rp.compare_values(100.0, w.threshold as f64, 0.0);
    }
    rp.compare_values(0.0, corrected.windows.invalid_count() as f64, 0.0);
    if let Some(validity) = &corrected.validity {
        rp.compare_values(255.0, validity.get_pixel(0, 0).unwrap_or(0) as f64, 0.0);
        rp.compare_values(0.0, validity.get_pixel(11, 11).unwrap_or(255) as f64, 0.0);
        rp.write_pix(validity, ImageFormat::Pnm).expect("write validity");
    }

    // --- Per-window thresholds follow the brightness ramp ---
    eprintln!("=== Test 3: shaded_text, N=4 ===");
    let pix = load_test_image("shaded_text.pgm").expect("load shaded_text.pgm");
    let plain = build_surface(&pix, &SurfaceOptions::with_divisions(4)).expect("build");
    for (w, &expected) in plain.windows.iter().zip(SHADED_THRESHOLDS.iter()) {
        rp.compare_values(expected as f64, w.threshold as f64, 0.0);
    }
    rp.write_pix(&plain.surface, ImageFormat::Pnm).expect("write surface");

    // --- Correction with a tolerance that rejects half the windows ---
    eprintln!("=== Test 4: shaded_text, N=4, tolerance 7.72 ===");
    let options = SurfaceOptions {
        enable_validation: true,
        tolerance: 7.72,
        ..SurfaceOptions::with_divisions(4)
    };
    let corrected = build_surface(&pix, &options).expect("build validated");
    compare_stats(
        &mut rp,
        CorrectionStats {
            iterations: 2,
            repaired: 8,
            converged: true,
        },
        corrected.correction,
    );
    for (w, &expected) in corrected.windows.iter().zip(SHADED_CORRECTED.iter()) {
        rp.compare_values(expected as f64, w.threshold as f64, 0.0);
    }

    // --- Smoothing starts each block at its window's threshold ---
    eprintln!("=== Test 5: shaded_text, N=4, smoothing ===");
    let options = SurfaceOptions {
        enable_smoothing: true,
        ..options
    };
    let smoothed = build_surface(&pix, &options).expect("build smoothed");
    for w in smoothed.windows.iter().filter(|w| w.gx < 3 && w.gy < 3) {
        let start = smoothed
            .surface
            .get_pixel(w.center_x + 1, w.center_y + 1)
            .unwrap_or(0);
        rp.compare_values(w.threshold as f64, start as f64, 0.0);
    }
    // the top-left center is outside every block
    rp.compare_values(
        49.0,
        smoothed.surface.get_pixel(5, 5).unwrap_or(0) as f64,
        0.0,
    );
    let again = build_surface(&pix, &options).expect("build smoothed again");
    rp.compare_pix(&smoothed.surface, &again.surface);
    rp.write_pix(&smoothed.surface, ImageFormat::Pnm).expect("write smoothed");

    assert!(rp.cleanup());
}

#[test]
fn surface_uncovered_strip_reg() {
    let mut rp = RegParams::new("surface_strip");

    // 36 / 5 = 7, so columns and rows 35 are outside every window
    let pix = load_test_image("shaded_text.pgm").expect("load shaded_text.pgm");
    let options = SurfaceOptions {
        enable_validation: true,
        enable_smoothing: true,
        tolerance: 7.72,
        ..SurfaceOptions::with_divisions(5)
    };
    let result = build_surface(&pix, &options).expect("build");
    rp.compare_values(35.0, result.windows.coverage().w as f64, 0.0);

    for i in 0..36 {
        let input = pix.get_pixel(35, i).unwrap_or(0) as f64;
        let surf = result.surface.get_pixel(35, i).unwrap_or(0) as f64;
        rp.compare_values(input, surf, 0.0);

        let input = pix.get_pixel(i, 35).unwrap_or(0) as f64;
        let surf = result.surface.get_pixel(i, 35).unwrap_or(0) as f64;
        rp.compare_values(input, surf, 0.0);
    }

    assert!(rp.cleanup());
}
