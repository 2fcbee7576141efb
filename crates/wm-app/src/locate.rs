//! One-shot position capability.
//!
//! "Get current position" resolves exactly once, with success or denial.
//! Positions come from an explicit entry in configuration or from the
//! `WAYMARK_POSITION` environment override ("lat,lon"). No retry, no
//! timeout.

use wm_core::GeoPoint;

use crate::config::AppConfig;

pub const POSITION_ENV_VAR: &str = "WAYMARK_POSITION";

#[derive(Debug, thiserror::Error)]
pub enum LocateError {
    #[error("no position configured")]
    Unavailable,

    #[error("malformed position '{raw}'")]
    Malformed { raw: String },
}

pub trait Locator {
    /// Resolve the current position exactly once.
    fn current_position(&self) -> Result<GeoPoint, LocateError>;
}

/// Locator pinned to a known position (configuration, tests).
pub struct FixedLocator(pub GeoPoint);

impl Locator for FixedLocator {
    fn current_position(&self) -> Result<GeoPoint, LocateError> {
        Ok(self.0)
    }
}

/// Locator that always reports denial.
pub struct DeniedLocator;

impl Locator for DeniedLocator {
    fn current_position(&self) -> Result<GeoPoint, LocateError> {
        Err(LocateError::Unavailable)
    }
}

/// Resolve a position the way the frontends do: the environment override
/// wins, then the configured home position, otherwise denial.
pub fn resolve_position(config: &AppConfig) -> Result<GeoPoint, LocateError> {
    if let Ok(raw) = std::env::var(POSITION_ENV_VAR) {
        return parse_position(&raw);
    }
    match config.home {
        Some(home) => FixedLocator(home).current_position(),
        None => DeniedLocator.current_position(),
    }
}

fn parse_position(raw: &str) -> Result<GeoPoint, LocateError> {
    let mut parts = raw.splitn(2, ',');
    let lat = parts.next().and_then(|s| s.trim().parse::<f64>().ok());
    let lon = parts.next().and_then(|s| s.trim().parse::<f64>().ok());
    match (lat, lon) {
        (Some(lat), Some(lon)) => GeoPoint::new(lat, lon).map_err(|_| LocateError::Malformed {
            raw: raw.to_string(),
        }),
        _ => Err(LocateError::Malformed {
            raw: raw.to_string(),
        }),
    }
}
