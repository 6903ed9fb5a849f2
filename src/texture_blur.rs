use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dotenv::dotenv;
use log::info;
use std::fs;
use std::path::Path;

use gauss_blur_lib::{logger, process_existing_files, BlurConfig, BlurParams, BoundaryMode};

#[derive(Parser, Debug)]
#[command(author, version, about = "Blurs every texture in a directory", long_about = None)]
struct Args {
    /// Directory containing textures to blur
    #[arg(long, env = "TEXTURE_INPUT_DIR", default_value = "originals")]
    input_dir: String,

    /// Directory to save blurred textures to
    #[arg(long, env = "TEXTURE_OUTPUT_DIR", default_value = "blurred")]
    output_dir: String,

    /// Kernel half-width in cells [default: 2, or derived from --sigma]
    #[arg(long, env = "GAUSS_BLUR_RADIUS")]
    radius: Option<usize>,

    /// Standard deviation of the Gaussian [default: radius / 3]
    #[arg(long, env = "GAUSS_BLUR_SIGMA", allow_hyphen_values = true)]
    sigma: Option<f32>,

    /// Boundary extension: constant, nearest, reflect, mirror or wrap
    #[arg(long, default_value = "constant", value_parser = parse_boundary)]
    boundary: BoundaryMode,

    /// Value read outside the texture in constant mode
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    cval: f32,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl BlurConfig for Args {
    fn input_dir(&self) -> &str {
        &self.input_dir
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn blur_params(&self) -> BlurParams {
        let boundary = match self.boundary {
            BoundaryMode::Constant(_) => BoundaryMode::Constant(self.cval),
            mode => mode,
        };
        BlurParams::resolve(self.radius, self.sigma).with_boundary(boundary)
    }
}

fn parse_boundary(name: &str) -> Result<BoundaryMode, String> {
    BoundaryMode::parse_with_cval(name, 0.0)
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    let args = Args::parse();
    logger::init(args.verbose).context("Failed to initialise logger")?;

    if !Path::new(&args.output_dir).exists() {
        fs::create_dir_all(&args.output_dir)
            .context("Failed to create output directory")?;
    }

    info!("Blurring textures from {} into {}", args.input_dir, args.output_dir);

    let written = process_existing_files(&args)?;
    println!("Blurred {} textures into {}", written, args.output_dir);

    Ok(())
}
