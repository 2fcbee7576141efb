//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wm_core::GeoPoint;

use crate::camera::{DEFAULT_ZOOM, MAX_ZOOM, MIN_ZOOM};
use crate::{AppError, AppResult};

pub const CONFIG_FILE_NAME: &str = "waymark.yaml";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Fallback position used when no environment override is present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub home: Option<GeoPoint>,
    #[serde(default = "default_zoom")]
    pub zoom: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

fn default_zoom() -> f64 {
    DEFAULT_ZOOM
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            home: None,
            zoom: DEFAULT_ZOOM,
            data_dir: None,
        }
    }
}

impl AppConfig {
    pub fn load_yaml(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load `waymark.yaml` from `dir` when present, defaults otherwise.
    pub fn load_or_default(dir: &Path) -> AppResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            Self::load_yaml(&path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if let Some(home) = self.home {
            GeoPoint::new(home.lat, home.lon).map_err(|e| AppError::Config(e.to_string()))?;
        }
        if !(MIN_ZOOM..=MAX_ZOOM).contains(&self.zoom) {
            return Err(AppError::Config(format!(
                "zoom {} outside {MIN_ZOOM}..={MAX_ZOOM}",
                self.zoom
            )));
        }
        Ok(())
    }
}
