//! User settings stored as settings.json in the app data directory

use crate::constants::TASKS_URL;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // Window geometry
    pub window_x: Option<f32>,
    pub window_y: Option<f32>,
    pub window_w: Option<f32>,
    pub window_h: Option<f32>,

    // Backend
    pub api_url: Option<String>,
}

impl Settings {
    pub fn load(data_dir: &Path) -> Self {
        let path = data_dir.join("settings.json");
        match std::fs::read_to_string(&path) {
            Ok(s) => Self::parse(&s).unwrap_or_else(|e| {
                warn!(error = %e, "Failed to parse settings, using defaults");
                Self::default()
            }),
            Err(_) => {
                debug!("No settings file found, using defaults");
                Self::default()
            }
        }
    }

    fn parse(raw: &str) -> serde_json::Result<Self> {
        let settings: Self = serde_json::from_str(raw)?;
        debug!(api_url = ?settings.api_url, "Settings loaded");
        Ok(settings)
    }

    pub fn save(&self, data_dir: &Path) {
        let path = data_dir.join("settings.json");
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    warn!(error = %e, "Failed to save settings");
                }
            }
            Err(e) => warn!(error = %e, "Failed to serialize settings"),
        }
    }

    /// Task endpoint, falling back to the built-in one when unset or blank
    pub fn api_url_or_default(&self) -> &str {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(TASKS_URL)
    }
}
