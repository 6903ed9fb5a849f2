use anyhow::Context;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::filter::BlurParams;
use crate::texture::Texture;

pub trait BlurConfig {
    fn input_dir(&self) -> &str;
    fn output_dir(&self) -> &str;
    fn blur_params(&self) -> BlurParams;
}

/// Blurs every file in the input directory into the output directory.
///
/// Returns the number of textures written. Files whose output already
/// exists are skipped.
pub fn process_existing_files<T: BlurConfig>(args: &T) -> anyhow::Result<usize> {
    let files = list_files(Path::new(args.input_dir()))?;

    info!("Found {} existing files to process", files.len());

    let mut written = 0;
    for file_path in &files {
        if process_file(file_path, args)? {
            written += 1;
        }
    }

    info!("Blurred {} of {} textures", written, files.len());

    Ok(written)
}

/// Regular files directly inside `dir`, sorted. Entries that cannot be read
/// are logged and left out.
pub fn list_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to read input directory {}", dir.display()))?;

    let mut files = entries
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                None
            }
        })
        .filter(|path| path.is_file())
        .collect::<Vec<PathBuf>>();
    files.sort();

    Ok(files)
}

/// Get the output path for a given input file path
pub fn get_output_path(file_path: &Path, output_dir: &str) -> anyhow::Result<PathBuf> {
    let file_stem = file_path
        .file_stem()
        .context("Failed to get file stem")?
        .to_string_lossy();

    Ok(Path::new(output_dir).join(format!("{}.png", file_stem)))
}

fn process_file<T: BlurConfig>(file_path: &Path, args: &T) -> anyhow::Result<bool> {
    let output_path = get_output_path(file_path, args.output_dir())?;

    if output_path.exists() {
        warn!("Output file already exists, skipping: {}", output_path.display());
        return Ok(false);
    }

    let texture = Texture::load(file_path)
        .with_context(|| format!("Failed to load texture {}", file_path.display()))?;
    texture
        .blur(&args.blur_params())
        .and_then(|blurred| blurred.save(&output_path))
        .with_context(|| format!("Failed to blur texture {}", file_path.display()))?;

    info!("Blurred: {}", output_path.display());

    Ok(true)
}
