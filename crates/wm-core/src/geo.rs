use core::fmt;

use serde::{Deserialize, Serialize};

use crate::{CoreError, CoreResult};

/// A latitude/longitude pair in degrees (WGS84).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    /// Build a point, rejecting non-finite or out-of-range coordinates.
    /// Latitude must lie in [-90, 90], longitude in [-180, 180].
    pub fn new(lat: f64, lon: f64) -> CoreResult<Self> {
        if !lat.is_finite() {
            return Err(CoreError::NonFinite {
                what: "latitude",
                value: lat,
            });
        }
        if !lon.is_finite() {
            return Err(CoreError::NonFinite {
                what: "longitude",
                value: lon,
            });
        }
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoreError::CoordinateRange {
                what: "latitude",
                value: lat,
            });
        }
        if !(-180.0..=180.0).contains(&lon) {
            return Err(CoreError::CoordinateRange {
                what: "longitude",
                value: lon,
            });
        }
        Ok(Self { lat, lon })
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lon)
    }
}
