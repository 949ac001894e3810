//! I/O helpers for grayscale images and JSON.
//!
//! - `load_grayscale_volume`: read a PNG/JPEG/etc. into a 2D `Volume`.
//! - `write_json_file`: pretty-print a serializable value to disk.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::volume::Volume;

/// Load an image from disk, convert to 8-bit grayscale, and store it as a
/// `[rows, cols]` volume of raw intensities in `[0, 255]`.
pub fn load_grayscale_volume(path: &Path) -> Result<Volume, String> {
    let img = image::open(path)
        .map_err(|e| format!("Failed to open {}: {e}", path.display()))?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    let data: Vec<f32> = img.into_raw().into_iter().map(f32::from).collect();
    Volume::from_shape_vec(&[height, width], data)
        .map_err(|e| format!("Failed to build volume from {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
