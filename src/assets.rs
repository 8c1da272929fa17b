// src/assets.rs
use std::fs;
use std::path::Path;
use log::{debug, info};

const TILE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

/// Asset paths discovered at startup and handed to the page renderer.
#[derive(Debug, Clone, Default)]
pub struct SiteAssets {
    pub tiles: Vec<String>,
}

impl SiteAssets {
    pub fn load(tiles_dir: &Path) -> Self {
        Self {
            tiles: discover_tiles(tiles_dir),
        }
    }
}

/// Lists background tile images under `dir` as `/tiles/<file>` URLs,
/// sorted by file name. A missing directory just means no tiles.
pub fn discover_tiles(dir: &Path) -> Vec<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("No tiles loaded from {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut tiles: Vec<String> = entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().map(|t| t.is_file()).unwrap_or(false))
        .filter_map(|entry| entry.file_name().into_string().ok())
        .filter(|name| is_tile(name))
        .map(|name| format!("/tiles/{}", name))
        .collect();
    tiles.sort();

    info!("Loaded {} background tiles from {}", tiles.len(), dir.display());
    tiles
}

fn is_tile(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| TILE_EXTENSIONS.iter().any(|t| ext.eq_ignore_ascii_case(t)))
        .unwrap_or(false)
}
