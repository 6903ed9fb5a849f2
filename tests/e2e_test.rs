use anyhow::Result;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_reference(args: &[&str]) -> Result<Output> {
    let output = Command::new(env!("CARGO_BIN_EXE_gauss-blur-reference"))
        .args(args)
        .env_remove("GAUSS_BLUR_RADIUS")
        .env_remove("GAUSS_BLUR_SIGMA")
        .env_remove("RUST_LOG")
        .output()?;
    Ok(output)
}

#[test]
fn test_fixture_without_arguments() -> Result<()> {
    let output = run_reference(&[])?;

    assert!(output.status.success(), "gauss-blur-reference failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "Output Texture:\n\
         [[ 0.   0.3  1.   0.3  0. ]\n \
         [ 0.3  9.6 29.6  9.6  0.3]\n \
         [ 1.  29.6 91.3 29.6  1. ]\n \
         [ 0.3  9.6 29.6  9.6  0.3]\n \
         [ 0.   0.3  1.   0.3  0. ]]\n"
    );

    Ok(())
}

#[test]
fn test_invalid_sigma_exits_nonzero() -> Result<()> {
    let output = run_reference(&["--sigma", "-1"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr)?;
    assert!(stderr.contains("sigma"), "unexpected stderr: {}", stderr);

    Ok(())
}

#[test]
fn test_zero_radius_prints_input_unchanged() -> Result<()> {
    let output = run_reference(&["--radius", "0"])?;

    assert!(output.status.success(), "gauss-blur-reference failed: {:?}", output);
    let stdout = String::from_utf8(output.stdout)?;
    assert_eq!(
        stdout,
        "Output Texture:\n\
         [[  0.   0.   0.   0.   0.]\n \
         [  0.   0.   0.   0.   0.]\n \
         [  0.   0. 255.   0.   0.]\n \
         [  0.   0.   0.   0.   0.]\n \
         [  0.   0.   0.   0.   0.]]\n"
    );

    Ok(())
}

#[test]
fn test_oversized_radius_exits_nonzero() -> Result<()> {
    let output = run_reference(&["--radius", "1000000000"])?;

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8(output.stderr)?.contains("radius must be at most"));

    Ok(())
}

#[test]
fn test_unknown_boundary_exits_nonzero() -> Result<()> {
    let output = run_reference(&["--boundary", "clamp"])?;

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr)?.contains("unknown boundary mode"));

    Ok(())
}

#[test]
fn test_json_output() -> Result<()> {
    let output = run_reference(&["--format", "json", "--radius", "1"])?;

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(json["radius"], 1);
    assert_eq!(json["values"].as_array().map(Vec::len), Some(5));

    Ok(())
}

#[test]
fn test_blurs_texture_generated_by_create_test_texture() -> Result<()> {
    let test_dir = TempDir::new()?;
    let texture_path = test_dir.path().join("test_texture.png");
    let texture_path = texture_path.to_str().unwrap();

    let created = Command::new(env!("CARGO_BIN_EXE_create-test-texture"))
        .arg(texture_path)
        .output()?;
    assert!(created.status.success(), "create-test-texture failed: {:?}", created);

    let from_texture = run_reference(&["--input", texture_path])?;
    let builtin = run_reference(&[])?;

    assert!(from_texture.status.success());
    assert_eq!(from_texture.stdout, builtin.stdout);

    Ok(())
}

#[test]
fn test_texture_blur_directory() -> Result<()> {
    let test_dir = TempDir::new()?;
    let originals_dir = test_dir.path().join("originals");
    let blurred_dir = test_dir.path().join("blurred");
    std::fs::create_dir_all(&originals_dir)?;

    let created = Command::new(env!("CARGO_BIN_EXE_create-test-texture"))
        .arg(originals_dir.join("spike.png"))
        .output()?;
    assert!(created.status.success());

    let output = Command::new(env!("CARGO_BIN_EXE_texture-blur"))
        .args(["--input-dir", originals_dir.to_str().unwrap()])
        .args(["--output-dir", blurred_dir.to_str().unwrap()])
        .args(["--radius", "2"])
        .env_remove("GAUSS_BLUR_SIGMA")
        .output()?;

    assert!(output.status.success(), "texture-blur failed: {:?}", output);
    let blurred = image::open(blurred_dir.join("spike.png"))?.to_luma8();
    assert_eq!(blurred.get_pixel(2, 2).0[0], 91);

    Ok(())
}

#[test]
fn test_texture_blur_derives_radius_from_sigma() -> Result<()> {
    let test_dir = TempDir::new()?;
    let originals_dir = test_dir.path().join("originals");
    let blurred_dir = test_dir.path().join("blurred");
    std::fs::create_dir_all(&originals_dir)?;

    let created = Command::new(env!("CARGO_BIN_EXE_create-test-texture"))
        .arg(originals_dir.join("spike.png"))
        .output()?;
    assert!(created.status.success());

    let output = Command::new(env!("CARGO_BIN_EXE_texture-blur"))
        .args(["--input-dir", originals_dir.to_str().unwrap()])
        .args(["--output-dir", blurred_dir.to_str().unwrap()])
        .args(["--sigma", "1.5"])
        .env_remove("GAUSS_BLUR_RADIUS")
        .output()?;

    assert!(output.status.success(), "texture-blur failed: {:?}", output);
    // Radius 6 spreads the spike further than radius 2 would (centre 22)
    let blurred = image::open(blurred_dir.join("spike.png"))?.to_luma8();
    assert_eq!(blurred.get_pixel(2, 2).0[0], 18);

    Ok(())
}
