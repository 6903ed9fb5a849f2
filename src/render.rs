//! Text and JSON rendering of blurred grids.
//!
//! Text output is a bracketed matrix with values aligned on the decimal
//! point and never printed with an exponent.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::boundary::BoundaryMode;
use crate::error::Result;
use crate::filter::BlurParams;
use crate::grid::Grid;

pub const DEFAULT_LABEL: &str = "Output Texture";
pub const DEFAULT_PRECISION: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{}', expected text or json", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub format: OutputFormat,
    pub precision: usize,
    pub label: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            format: OutputFormat::Text,
            precision: DEFAULT_PRECISION,
            label: DEFAULT_LABEL.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    label: &'a str,
    width: usize,
    height: usize,
    sigma: f32,
    radius: usize,
    boundary: BoundaryMode,
    values: Vec<Vec<f64>>,
}

/// Renders the labelled report: `"<label>:"` followed by the matrix, or a
/// JSON document carrying the same values.
pub fn render_report(grid: &Grid, params: &BlurParams, options: &RenderOptions) -> Result<String> {
    match options.format {
        OutputFormat::Text => Ok(format!(
            "{}:\n{}",
            options.label,
            render_text(grid, options.precision)
        )),
        OutputFormat::Json => {
            let scale = 10f64.powi(options.precision as i32);
            let values: Vec<Vec<f64>> = grid
                .rows()
                .map(|row| {
                    row.iter()
                        .map(|&v| (v as f64 * scale).round() / scale)
                        .collect()
                })
                .collect();

            let report = JsonReport {
                label: &options.label,
                width: grid.width(),
                height: grid.height(),
                sigma: params.sigma,
                radius: params.radius,
                boundary: params.boundary,
                values,
            };
            Ok(serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Renders the matrix alone, one row per line, without a trailing newline.
pub fn render_text(grid: &Grid, precision: usize) -> String {
    if grid.is_empty() {
        return "[]".to_string();
    }

    let cells = grid
        .rows()
        .map(|row| row.iter().map(|&v| split_value(v, precision)).collect())
        .collect::<Vec<Vec<(String, String)>>>();

    let int_width = cells.iter().flatten().map(|(i, _)| i.len()).max().unwrap_or(0);
    let frac_width = cells.iter().flatten().map(|(_, f)| f.len()).max().unwrap_or(0);

    let last = cells.len() - 1;
    let mut out = String::new();
    for (y, row) in cells.iter().enumerate() {
        out.push_str(if y == 0 { "[[" } else { " [" });
        let formatted = row
            .iter()
            .map(|(int, frac)| {
                format!("{:>iw$}.{:<fw$}", int, frac, iw = int_width, fw = frac_width)
            })
            .collect::<Vec<String>>();
        out.push_str(&formatted.join(" "));
        out.push_str(if y == last { "]]" } else { "]\n" });
    }
    out
}

/// Rounds `value` to `precision` places and splits it around the decimal
/// point, dropping trailing zeros from the fraction.
fn split_value(value: f32, precision: usize) -> (String, String) {
    let text = format!("{:.*}", precision, value);
    match text.split_once('.') {
        Some((int, frac)) => (int.to_string(), frac.trim_end_matches('0').to_string()),
        None => (text, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_zeros_and_pads() {
        let grid = Grid::from_rows(vec![vec![1.0, 0.24], vec![12.04, -3.5]]).unwrap();
        assert_eq!(render_text(&grid, 1), "[[ 1.   0.2]\n [12.  -3.5]]");
    }

    #[test]
    fn whole_numbers_keep_the_point() {
        let grid = Grid::from_rows(vec![vec![0.0, 0.0, 0.0]]).unwrap();
        assert_eq!(render_text(&grid, 1), "[[0. 0. 0.]]");
    }
}
