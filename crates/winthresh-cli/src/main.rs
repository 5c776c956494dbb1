//! winthresh - adaptive binarization of greyscale images
//!
//! Reads a PGM or PNG greymap, computes a windowed threshold surface and
//! writes the binarized image, the threshold surface and, when validation
//! is enabled, the window validity map.

use clap::{ArgAction, Parser};
use log::{error, info};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use winthresh_core::Pix;
use winthresh_io::{ImageFormat, IoError, read_image, write_image};
use winthresh_surface::{DEFAULT_DIVISIONS, SurfaceError, SurfaceOptions, adaptive_threshold};

#[derive(Parser, Debug)]
#[command(name = "winthresh", version)]
#[command(about = "Binarize a greyscale image with a locally adaptive threshold surface")]
struct Args {
    /// Input greyscale image (PGM or PNG)
    input: PathBuf,

    /// Number of windows along each image axis
    #[arg(short = 'n', long, default_value_t = DEFAULT_DIVISIONS)]
    divisions: u32,

    /// Interpolate thresholds between window centers
    #[arg(short, long)]
    smooth: bool,

    /// Repair low-contrast windows from their neighbors
    #[arg(long)]
    validate: bool,

    /// Windows with spread at or below this value are invalid
    #[arg(short, long, default_value_t = 0.0)]
    tolerance: f64,

    /// Binarized output image
    #[arg(short, long, default_value = "result.pgm")]
    output: PathBuf,

    /// Threshold surface output image
    #[arg(long, default_value = "threshold.pgm")]
    surface: PathBuf,

    /// Validity map output image, written only with --validate
    #[arg(long, default_value = "valid.pgm")]
    validity: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Error)]
enum CliError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: IoError,
    },

    #[error(transparent)]
    Surface(#[from] SurfaceError),
}

impl Args {
    fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions {
            divisions: self.divisions,
            tolerance: self.tolerance,
            enable_validation: self.validate,
            enable_smoothing: self.smooth,
        }
    }

    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }
}

/// Pick the encoding for an output path, PGM unless the extension says PNG
fn output_format(path: &Path) -> ImageFormat {
    match ImageFormat::from_path(path) {
        ImageFormat::Unknown => ImageFormat::Pnm,
        format => format,
    }
}

fn save(pix: &Pix, path: &Path) -> Result<(), CliError> {
    write_image(pix, path, output_format(path)).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    info!("wrote {}", path.display());
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let pix = read_image(&args.input).map_err(|source| CliError::Io {
        path: args.input.clone(),
        source,
    })?;
    info!(
        "read {} ({}x{})",
        args.input.display(),
        pix.width(),
        pix.height()
    );

    let (binary, surface) = adaptive_threshold(&pix, &args.surface_options())?;

    save(&binary, &args.output)?;
    save(&surface.surface, &args.surface)?;
    if let Some(validity) = &surface.validity {
        save(validity, &args.validity)?;
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_level()))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
