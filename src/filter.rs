use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Instant;

use crate::boundary::BoundaryMode;
use crate::error::{BlurError, Result};
use crate::grid::Grid;
use crate::kernel::{self, GaussianKernel, DEFAULT_TRUNCATE};

/// How the 2-D kernel is applied
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurMethod {
    /// One 1-D pass along rows, then one along columns
    #[default]
    Separable,
    /// A single pass over the full `(2r+1)²` window
    Direct,
}

impl fmt::Display for BlurMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlurMethod::Separable => f.write_str("separable"),
            BlurMethod::Direct => f.write_str("direct"),
        }
    }
}

impl FromStr for BlurMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "separable" => Ok(BlurMethod::Separable),
            "direct" => Ok(BlurMethod::Direct),
            other => Err(format!(
                "unknown blur method '{}', expected separable or direct",
                other
            )),
        }
    }
}

/// Kernel half-width of the reference fixture
pub const DEFAULT_RADIUS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlurParams {
    pub sigma: f32,
    pub radius: usize,
    pub boundary: BoundaryMode,
    pub method: BlurMethod,
}

impl BlurParams {
    /// Kernel of half-width `radius` with `sigma = radius / 3`
    pub fn for_radius(radius: usize) -> Self {
        BlurParams {
            sigma: kernel::sigma_for_radius(radius),
            radius,
            boundary: BoundaryMode::default(),
            method: BlurMethod::default(),
        }
    }

    /// Fills in whichever of `radius` and `sigma` is missing.
    ///
    /// Radius alone gives `sigma = radius / 3`, sigma alone a radius of four
    /// sigmas, and neither the fixture parameters.
    pub fn resolve(radius: Option<usize>, sigma: Option<f32>) -> Self {
        match (radius, sigma) {
            (Some(radius), Some(sigma)) => BlurParams {
                sigma,
                ..BlurParams::for_radius(radius)
            },
            (Some(radius), None) => BlurParams::for_radius(radius),
            (None, Some(sigma)) => BlurParams::for_sigma(sigma),
            (None, None) => BlurParams::for_radius(DEFAULT_RADIUS),
        }
    }

    /// Kernel of standard deviation `sigma` truncated at four sigmas
    pub fn for_sigma(sigma: f32) -> Self {
        BlurParams {
            sigma,
            radius: kernel::radius_for_sigma(sigma, DEFAULT_TRUNCATE),
            boundary: BoundaryMode::default(),
            method: BlurMethod::default(),
        }
    }

    pub fn with_boundary(mut self, boundary: BoundaryMode) -> Self {
        self.boundary = boundary;
        self
    }

    pub fn with_method(mut self, method: BlurMethod) -> Self {
        self.method = method;
        self
    }

    pub fn kernel(&self) -> Result<GaussianKernel> {
        GaussianKernel::new(self.sigma, self.radius)
    }
}

impl Default for BlurParams {
    /// The fixture parameters: radius 2, sigma 2/3, zero padding
    fn default() -> Self {
        BlurParams::for_radius(DEFAULT_RADIUS)
    }
}

/// Blurs `input` with a truncated, normalised Gaussian kernel.
pub fn gaussian_blur(input: &Grid, params: &BlurParams) -> Result<Grid> {
    let mut output = Grid::zeros(input.width(), input.height());
    blur_into(input, &mut output, params)?;
    Ok(output)
}

/// Like [`gaussian_blur`], writing into an existing grid of the same shape.
pub fn blur_into(input: &Grid, output: &mut Grid, params: &BlurParams) -> Result<()> {
    if output.shape() != input.shape() {
        return Err(BlurError::DimensionMismatch {
            expected: input.shape(),
            actual: output.shape(),
        });
    }

    let kernel = params.kernel()?;
    let start = Instant::now();

    match params.method {
        BlurMethod::Separable => {
            let mut horizontal = Grid::zeros(input.width(), input.height());
            correlate_rows(input, &mut horizontal, &kernel, params.boundary);
            correlate_columns(&horizontal, output, &kernel, params.boundary);
        }
        BlurMethod::Direct => correlate_2d(input, output, &kernel, params.boundary),
    }

    debug!(
        "Blurred {}x{} grid ({}, sigma={}, radius={}, boundary={}) in {:?}",
        input.width(),
        input.height(),
        params.method,
        params.sigma,
        params.radius,
        params.boundary,
        start.elapsed()
    );

    Ok(())
}

/// Sample at `(x, y)` after boundary extension on both axes
fn sample(input: &Grid, x: isize, y: isize, boundary: BoundaryMode) -> f64 {
    match (
        boundary.resolve(x, input.width()),
        boundary.resolve(y, input.height()),
    ) {
        (Some(x), Some(y)) => input.get(x, y) as f64,
        _ => boundary.cval() as f64,
    }
}

fn correlate_rows(
    input: &Grid,
    output: &mut Grid,
    kernel: &GaussianKernel,
    boundary: BoundaryMode,
) {
    let radius = kernel.radius() as isize;
    for y in 0..input.height() {
        for x in 0..input.width() {
            let mut acc = 0.0f64;
            for k in -radius..=radius {
                acc += kernel.weight(k) * sample(input, x as isize + k, y as isize, boundary);
            }
            output.set(x, y, acc as f32);
        }
    }
    trace!("Row pass: {:?}", output.to_rows());
}

fn correlate_columns(
    input: &Grid,
    output: &mut Grid,
    kernel: &GaussianKernel,
    boundary: BoundaryMode,
) {
    let radius = kernel.radius() as isize;
    for x in 0..input.width() {
        for y in 0..input.height() {
            let mut acc = 0.0f64;
            for k in -radius..=radius {
                acc += kernel.weight(k) * sample(input, x as isize, y as isize + k, boundary);
            }
            output.set(x, y, acc as f32);
        }
    }
}

/// Single pass over the square window. Normalising `exp(-(i²+j²)/2σ²)` over
/// the window gives the product of the normalised 1-D taps.
fn correlate_2d(input: &Grid, output: &mut Grid, kernel: &GaussianKernel, boundary: BoundaryMode) {
    let radius = kernel.radius() as isize;
    for y in 0..input.height() {
        for x in 0..input.width() {
            let mut acc = 0.0f64;
            for j in -radius..=radius {
                let wj = kernel.weight(j);
                for i in -radius..=radius {
                    let w = wj * kernel.weight(i);
                    acc += w * sample(input, x as isize + i, y as isize + j, boundary);
                }
            }
            output.set(x, y, acc as f32);
        }
    }
}
