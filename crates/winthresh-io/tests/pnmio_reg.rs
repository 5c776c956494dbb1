//! Greymap I/O regression test
//!
//! Reads the ASCII test images and checks lossless binary PGM and PNG
//! roundtrips through files and memory.

use std::fs;
use winthresh_io::{
    ImageFormat, IoError, detect_format_from_bytes, read_image, read_image_mem, write_image,
    write_image_mem,
};
use winthresh_test::{RegParams, load_test_image, regout_dir};

const TEST_IMAGES: &[&str] = &["blocks4.pgm", "flat_corner.pgm", "shaded_text.pgm"];

#[test]
fn pnmio_reg() {
    let mut rp = RegParams::new("pnmio");

    let outdir = regout_dir();
    fs::create_dir_all(&outdir).expect("Failed to create output directory");

    for (i, name) in TEST_IMAGES.iter().enumerate() {
        eprintln!("=== Test {}: {} ===", i, name);
        let pix = load_test_image(name).expect("load test image");

        // file roundtrip, binary PGM
        let path = format!("{}/pnmio.{}.pgm", outdir, i);
        write_image(&pix, &path, ImageFormat::Pnm).expect("write PGM");
        let back = read_image(&path).expect("read PGM");
        rp.compare_pix(&pix, &back);

        // memory roundtrip, binary PGM
        let data = write_image_mem(&pix, ImageFormat::Pnm).expect("write PGM to memory");
        rp.compare_values(
            1.0,
            if data.starts_with(b"P5\n") { 1.0 } else { 0.0 },
            0.0,
        );
        let back = read_image_mem(&data).expect("read PGM from memory");
        rp.compare_pix(&pix, &back);

        // memory roundtrip, PNG
        let data = write_image_mem(&pix, ImageFormat::Png).expect("write PNG to memory");
        let format = detect_format_from_bytes(&data).expect("detect PNG");
        rp.compare_values(1.0, if format == ImageFormat::Png { 1.0 } else { 0.0 }, 0.0);
        let back = read_image_mem(&data).expect("read PNG from memory");
        rp.compare_pix(&pix, &back);
    }

    assert!(rp.cleanup());
}

#[test]
fn pnmio_maxval_reg() {
    let mut rp = RegParams::new("pnmio_maxval");

    // samples are kept as-is for maxval below 255
    let pix = read_image_mem(b"P2\n3 1\n15\n0 7 15\n").expect("read maxval 15");
    rp.compare_values(0.0, pix.get_pixel(0, 0).unwrap_or(99) as f64, 0.0);
    rp.compare_values(7.0, pix.get_pixel(1, 0).unwrap_or(99) as f64, 0.0);
    rp.compare_values(15.0, pix.get_pixel(2, 0).unwrap_or(99) as f64, 0.0);

    // a sample above maxval is an intensity error
    let err = read_image_mem(b"P2\n2 1\n100\n50 101\n").unwrap_err();
    rp.compare_values(
        1.0,
        if matches!(err, IoError::Core(winthresh_core::Error::InvalidIntensity { .. })) {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // unsupported formats are reported, not guessed
    let err = write_image_mem(&pix, ImageFormat::Unknown).unwrap_err();
    rp.compare_values(
        1.0,
        if matches!(err, IoError::UnsupportedFormat(_)) { 1.0 } else { 0.0 },
        0.0,
    );

    assert!(rp.cleanup());
}
