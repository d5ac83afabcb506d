use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use splatmap_render::{OverlayStyle, Rgb};

// ---------------------------------------------------------------------------
// Application preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    /// Where the rendered image goes when `--output` is not given.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
    #[serde(default = "default_stain_color")]
    pub stain_color: Rgb,
    #[serde(default = "default_border_color")]
    pub border_color: Rgb,
    /// Share of the stain color in the blend, 0.0..=1.0.
    #[serde(default = "default_stain_weight")]
    pub stain_weight: f64,
    /// Embed schedule and selection as PNG text chunks.
    #[serde(default = "default_true")]
    pub embed_metadata: bool,
}

fn default_output_path() -> PathBuf {
    PathBuf::from("selection.png")
}
fn default_stain_color() -> Rgb {
    OverlayStyle::default().stain
}
fn default_border_color() -> Rgb {
    OverlayStyle::default().border
}
fn default_stain_weight() -> f64 {
    OverlayStyle::default().stain_weight
}
fn default_true() -> bool {
    true
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            stain_color: default_stain_color(),
            border_color: default_border_color(),
            stain_weight: default_stain_weight(),
            embed_metadata: true,
        }
    }
}

impl AppPreferences {
    /// Load preferences from `path`, falling back to defaults on any failure.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    return prefs;
                }
                Err(e) => error!("Failed to parse preferences: {e}"),
            },
            Err(e) => error!("Failed to read preferences file: {e}"),
        }
        Self::default()
    }

    /// Persist preferences to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences to {}", path.display());
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    pub fn overlay_style(&self) -> OverlayStyle {
        OverlayStyle {
            stain: self.stain_color,
            border: self.border_color,
            stain_weight: self.stain_weight,
        }
    }
}

/// `preferences.json` in the platform config directory, or the working
/// directory when none is available.
pub fn config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "splatmap")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
        .join("preferences.json")
}
