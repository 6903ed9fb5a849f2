use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use dotenv::dotenv;
use log::{debug, info};
use std::path::PathBuf;

use gauss_blur_lib::{
    gaussian_blur, logger, reference_input, render_report, BlurMethod, BlurParams, BoundaryMode,
    OutputFormat, RenderOptions, Texture,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Prints the Gaussian blur reference fixture", long_about = None)]
struct Args {
    /// Kernel half-width in cells [default: 2, or derived from --sigma]
    #[arg(long, env = "GAUSS_BLUR_RADIUS")]
    radius: Option<usize>,

    /// Standard deviation of the Gaussian [default: radius / 3]
    #[arg(long, env = "GAUSS_BLUR_SIGMA", allow_hyphen_values = true)]
    sigma: Option<f32>,

    /// Boundary extension: constant, nearest, reflect, mirror or wrap
    #[arg(long, default_value = "constant")]
    boundary: String,

    /// Value read outside the grid in constant mode
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    cval: f32,

    /// Kernel application: separable or direct
    #[arg(long, default_value = "separable")]
    method: BlurMethod,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: OutputFormat,

    /// Fractional digits printed per value
    #[arg(long, default_value_t = 1)]
    precision: usize,

    /// Blur the first channel of this image instead of the built-in 5x5 spike
    #[arg(long)]
    input: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn blur_params(&self) -> Result<BlurParams> {
        let params = BlurParams::resolve(self.radius, self.sigma);
        let boundary = BoundaryMode::parse_with_cval(&self.boundary, self.cval)
            .map_err(anyhow::Error::msg)?;

        Ok(params.with_boundary(boundary).with_method(self.method))
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    let args = Args::parse();
    logger::init(args.verbose).context("Failed to initialise logger")?;
    debug!("Args: {:?}", args);

    let params = args.blur_params()?;
    info!(
        "Blurring with sigma={}, radius={}, boundary={}",
        params.sigma, params.radius, params.boundary
    );

    let input = match &args.input {
        Some(path) => Texture::load(path)
            .and_then(|texture| texture.channel(0).cloned())
            .with_context(|| format!("Failed to load input texture {}", path.display()))?,
        None => reference_input(),
    };

    let output = gaussian_blur(&input, &params).context("Gaussian blur failed")?;

    let options = RenderOptions {
        format: args.format,
        precision: args.precision,
        ..RenderOptions::default()
    };
    let report = render_report(&output, &params, &options).context("Failed to render output")?;
    println!("{}", report);

    Ok(())
}
