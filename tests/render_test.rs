use gauss_blur_lib::{
    gaussian_blur, reference_input, render_report, render_text, BlurParams, Grid, OutputFormat,
    RenderOptions,
};
use serde_json::Value;

/// What the fixture script prints
const REFERENCE_TEXT: &str = "Output Texture:
[[ 0.   0.3  1.   0.3  0. ]
 [ 0.3  9.6 29.6  9.6  0.3]
 [ 1.  29.6 91.3 29.6  1. ]
 [ 0.3  9.6 29.6  9.6  0.3]
 [ 0.   0.3  1.   0.3  0. ]]";

#[test]
fn test_reference_report_text() {
    let params = BlurParams::default();
    let output = gaussian_blur(&reference_input(), &params).unwrap();

    let report = render_report(&output, &params, &RenderOptions::default()).unwrap();
    assert_eq!(report, REFERENCE_TEXT);
}

#[test]
fn test_render_never_uses_scientific_notation() {
    let grid = Grid::from_rows(vec![vec![1e-7, 12345.678], vec![0.05, 3e6]]).unwrap();
    let text = render_text(&grid, 2);

    assert!(!text.contains('e'), "unexpected exponent in {}", text);
    assert_eq!(text, "[[      0.     12345.68]\n [      0.05 3000000.  ]]");
}

#[test]
fn test_precision_zero() {
    let grid = Grid::from_rows(vec![vec![91.27, 9.6]]).unwrap();
    assert_eq!(render_text(&grid, 0), "[[91. 10.]]");
}

#[test]
fn test_json_report() {
    let params = BlurParams::default();
    let output = gaussian_blur(&reference_input(), &params).unwrap();
    let options = RenderOptions {
        format: OutputFormat::Json,
        ..RenderOptions::default()
    };

    let report = render_report(&output, &params, &options).unwrap();
    let json: Value = serde_json::from_str(&report).unwrap();

    assert_eq!(json["label"], "Output Texture");
    assert_eq!(json["width"], 5);
    assert_eq!(json["height"], 5);
    assert_eq!(json["radius"], 2);
    assert_eq!(json["boundary"]["mode"], "constant");
    assert_eq!(json["boundary"]["cval"], 0.0);
    assert_eq!(json["values"][2][2], 91.3);
    assert_eq!(json["values"][2][1], 29.6);
    assert_eq!(json["values"][0][0], 0.0);
}
