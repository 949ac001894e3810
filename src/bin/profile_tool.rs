use line_profile::io::{load_grayscale_volume, write_json_file};
use line_profile::{profile_line, ProfileOptions};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ProfileToolConfig {
    pub input: PathBuf,
    /// Scan-line start, (row, col).
    pub src: [f32; 2],
    /// Scan-line end, (row, col). Included in the profile by default.
    pub dst: [f32; 2],
    #[serde(default)]
    pub profile: ProfileOptions,
    pub profile_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<ProfileToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_grayscale_volume(&config.input)?;
    let profile = profile_line(&image, &config.src, &config.dst, &config.profile)
        .map_err(|e| format!("Profile extraction failed: {e}"))?;

    let summary = ProfileSummary {
        input: config.input.clone(),
        src: config.src,
        dst: config.dst,
        linewidth: config.profile.linewidth,
        order: config.profile.order,
        positions: profile.positions(),
        values: profile.values().to_vec(),
    };
    write_json_file(&config.profile_json, &summary)?;

    println!(
        "Sampled {} positions from ({:.1}, {:.1}) to ({:.1}, {:.1}); wrote {}",
        summary.positions,
        config.src[0],
        config.src[1],
        config.dst[0],
        config.dst[1],
        config.profile_json.display()
    );

    Ok(())
}

fn usage() -> String {
    "Usage: profile_tool <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProfileSummary {
    input: PathBuf,
    src: [f32; 2],
    dst: [f32; 2],
    linewidth: usize,
    order: usize,
    positions: usize,
    values: Vec<f32>,
}
