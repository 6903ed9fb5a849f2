use serde::{Deserialize, Serialize};

use crate::error::{BlurError, Result};

/// Side length of the reference input
pub const REFERENCE_SIZE: usize = 5;

/// Value of the single lit cell in the reference input
pub const REFERENCE_PEAK: f32 = 255.0;

/// A row-major matrix of `f32` samples.
///
/// `x` indexes columns and `y` indexes rows, so `get(x, y)` reads
/// `rows()[y][x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    width: usize,
    height: usize,
    data: Vec<f32>,
}

impl Grid {
    pub fn zeros(width: usize, height: usize) -> Self {
        Grid {
            width,
            height,
            data: vec![0.0; width * height],
        }
    }

    pub fn from_vec(width: usize, height: usize, data: Vec<f32>) -> Result<Self> {
        if data.len() != width * height {
            return Err(BlurError::DataLength {
                expected: width * height,
                actual: data.len(),
            });
        }
        Ok(Grid { width, height, data })
    }

    /// Builds a grid from nested rows. Every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        let mut data = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(BlurError::RaggedRows {
                    row,
                    expected: width,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }

        Ok(Grid { width, height, data })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.data[y * self.width + x]
    }

    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        self.data[y * self.width + x] = value;
    }

    pub fn row(&self, y: usize) -> &[f32] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        // chunks() panics on 0
        self.data.chunks(self.width.max(1)).take(self.height)
    }

    pub fn to_rows(&self) -> Vec<Vec<f32>> {
        self.rows().map(<[f32]>::to_vec).collect()
    }

    pub fn values(&self) -> &[f32] {
        &self.data
    }

    pub fn sum(&self) -> f64 {
        self.data.iter().map(|&v| v as f64).sum()
    }

    /// Largest absolute per-cell difference between two grids of equal shape
    pub fn max_abs_diff(&self, other: &Grid) -> Result<f32> {
        if self.shape() != other.shape() {
            return Err(BlurError::DimensionMismatch {
                expected: self.shape(),
                actual: other.shape(),
            });
        }

        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(a, b)| (a - b).abs())
            .fold(0.0, f32::max))
    }

    /// True if the grid is square and equal to its transpose within `tolerance`
    pub fn is_symmetric(&self, tolerance: f32) -> bool {
        if self.width != self.height {
            return false;
        }

        (0..self.height).all(|y| {
            (0..y).all(|x| (self.get(x, y) - self.get(y, x)).abs() <= tolerance)
        })
    }
}

/// The fixed fixture input: a 5x5 grid of zeros with 255.0 in the centre cell.
pub fn reference_input() -> Grid {
    let mut grid = Grid::zeros(REFERENCE_SIZE, REFERENCE_SIZE);
    let centre = REFERENCE_SIZE / 2;
    grid.set(centre, centre, REFERENCE_PEAK);
    grid
}
