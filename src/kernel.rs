//! Discrete 1-D Gaussian kernels.
//!
//! A kernel of radius `r` has `2r + 1` taps covering offsets `-r..=r`.
//! Taps are `exp(-k² / (2σ²))` divided by their sum, so the tail beyond
//! the radius is dropped and the remaining weights still sum to one.

use crate::error::{BlurError, Result};

/// Number of standard deviations covered when only sigma is given
pub const DEFAULT_TRUNCATE: f32 = 4.0;

/// Largest accepted kernel half-width
pub const MAX_RADIUS: usize = 1 << 16;

#[derive(Debug, Clone, PartialEq)]
pub struct GaussianKernel {
    sigma: f32,
    radius: usize,
    taps: Vec<f64>,
}

impl GaussianKernel {
    /// Builds the kernel. A radius of zero is the identity filter and
    /// accepts any sigma.
    pub fn new(sigma: f32, radius: usize) -> Result<Self> {
        let half = validate_radius(radius)?;
        if radius == 0 {
            return Ok(GaussianKernel {
                sigma,
                radius,
                taps: vec![1.0],
            });
        }
        validate_sigma(sigma)?;

        let sigma = sigma as f64;
        let denom = 2.0 * sigma * sigma;
        let mut taps = (-half..=half)
            .map(|k| {
                let k = k as f64;
                (-(k * k) / denom).exp()
            })
            .collect::<Vec<f64>>();

        let sum: f64 = taps.iter().sum();
        for tap in &mut taps {
            *tap /= sum;
        }

        Ok(GaussianKernel {
            sigma: sigma as f32,
            radius,
            taps,
        })
    }

    pub fn sigma(&self) -> f32 {
        self.sigma
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Normalised taps, ordered from offset `-radius` to `+radius`
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Weight at `offset` from the centre, zero outside the support
    pub fn weight(&self, offset: isize) -> f64 {
        if offset.unsigned_abs() > self.radius {
            return 0.0;
        }
        self.taps[(offset + self.radius as isize) as usize]
    }

    pub fn sum(&self) -> f64 {
        self.taps.iter().sum()
    }
}

/// Checks that `radius` is within [`MAX_RADIUS`] and returns it as a signed
/// offset bound.
pub fn validate_radius(radius: usize) -> Result<isize> {
    let window = radius.checked_mul(2).and_then(|d| d.checked_add(1));
    match (window, isize::try_from(radius)) {
        (Some(_), Ok(half)) if radius <= MAX_RADIUS => Ok(half),
        _ => Err(BlurError::InvalidRadius(radius)),
    }
}

pub fn validate_sigma(sigma: f32) -> Result<()> {
    if sigma.is_finite() && sigma > 0.0 {
        Ok(())
    } else {
        Err(BlurError::InvalidSigma(sigma))
    }
}

/// Sigma that puts three standard deviations at the kernel edge.
///
/// About 99.7% of the continuous Gaussian's mass lies within `3σ`.
pub fn sigma_for_radius(radius: usize) -> f32 {
    radius as f32 / 3.0
}

/// Radius covering `truncate` standard deviations, rounded to the nearest cell
pub fn radius_for_sigma(sigma: f32, truncate: f32) -> usize {
    (truncate * sigma + 0.5).floor().max(0.0) as usize
}
