//! The workout model: two activity variants with derived fields.

use core::fmt;

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

use crate::CoreResult;
use crate::geo::GeoPoint;
use crate::validate::ensure_positive;

/// Activity discriminator. Exactly two kinds exist; rendering and metric
/// computation switch over this tag rather than an open extension point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    #[default]
    Running,
    Cycling,
}

impl ActivityKind {
    /// Capitalized form used in descriptions and list headings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Cycling => write!(f, "cycling"),
        }
    }
}

/// Identifier derived from the creation timestamp: the last ten digits of
/// the unix-epoch millisecond count. Unique within a session, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    pub fn from_timestamp(at: DateTime<Local>) -> Self {
        let millis = at.timestamp_millis().unsigned_abs();
        Self(format!("{:010}", millis % 10_000_000_000))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for WorkoutId {
    fn from(raw: &str) -> Self {
        Self(raw.to_string())
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind-specific metric plus its derived companion, both fixed at
/// construction. The `type` tag rides along in the serialized form so
/// reloaded records come back as their original variant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ActivityDetail {
    Running {
        cadence_spm: f64,
        /// min/km
        pace_min_per_km: f64,
    },
    Cycling {
        elevation_gain_m: f64,
        /// km/h
        speed_kmh: f64,
    },
}

impl ActivityDetail {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Self::Running { .. } => ActivityKind::Running,
            Self::Cycling { .. } => ActivityKind::Cycling,
        }
    }
}

/// A single logged exercise event.
///
/// `description` and the derived metric inside `detail` are computed once at
/// construction and stored as-is; nothing here is mutated or recomputed
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    id: WorkoutId,
    recorded: DateTime<Local>,
    location: GeoPoint,
    distance_km: f64,
    duration_min: f64,
    description: String,
    #[serde(flatten)]
    detail: ActivityDetail,
}

impl Workout {
    /// Log a run. Distance, duration, and cadence must be finite and
    /// strictly positive.
    pub fn running(
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
        recorded: DateTime<Local>,
    ) -> CoreResult<Self> {
        let distance_km = ensure_positive(distance_km, "distance")?;
        let duration_min = ensure_positive(duration_min, "duration")?;
        let cadence_spm = ensure_positive(cadence_spm, "cadence")?;
        let detail = ActivityDetail::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Ok(Self::assemble(
            location,
            distance_km,
            duration_min,
            detail,
            recorded,
        ))
    }

    /// Log a ride. Distance, duration, and elevation gain must be finite
    /// and strictly positive.
    pub fn cycling(
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
        recorded: DateTime<Local>,
    ) -> CoreResult<Self> {
        let distance_km = ensure_positive(distance_km, "distance")?;
        let duration_min = ensure_positive(duration_min, "duration")?;
        let elevation_gain_m = ensure_positive(elevation_gain_m, "elevation gain")?;
        let detail = ActivityDetail::Cycling {
            elevation_gain_m,
            speed_kmh: distance_km / (duration_min / 60.0),
        };
        Ok(Self::assemble(
            location,
            distance_km,
            duration_min,
            detail,
            recorded,
        ))
    }

    fn assemble(
        location: GeoPoint,
        distance_km: f64,
        duration_min: f64,
        detail: ActivityDetail,
        recorded: DateTime<Local>,
    ) -> Self {
        let description = format!(
            "{} on {} {}",
            detail.kind().label(),
            recorded.format("%B"),
            recorded.day()
        );
        Self {
            id: WorkoutId::from_timestamp(recorded),
            recorded,
            location,
            distance_km,
            duration_min,
            description,
            detail,
        }
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn recorded(&self) -> DateTime<Local> {
        self.recorded
    }

    pub fn location(&self) -> GeoPoint {
        self.location
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn detail(&self) -> &ActivityDetail {
        &self.detail
    }

    pub fn kind(&self) -> ActivityKind {
        self.detail.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn place() -> GeoPoint {
        GeoPoint::new(41.3874, 2.1686).unwrap()
    }

    fn recorded() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 8, 4, 7, 30, 0).unwrap()
    }

    #[test]
    fn running_derives_pace_and_description() {
        let w = Workout::running(place(), 5.0, 30.0, 150.0, recorded()).unwrap();
        match w.detail() {
            ActivityDetail::Running {
                cadence_spm,
                pace_min_per_km,
            } => {
                assert_eq!(*cadence_spm, 150.0);
                assert_eq!(*pace_min_per_km, 6.0);
            }
            other => panic!("expected running detail, got {other:?}"),
        }
        assert!(w.description().starts_with("Running on "));
        assert_eq!(w.description(), "Running on August 4");
    }

    #[test]
    fn cycling_derives_speed() {
        let w = Workout::cycling(place(), 20.0, 60.0, 400.0, recorded()).unwrap();
        match w.detail() {
            ActivityDetail::Cycling { speed_kmh, .. } => assert_eq!(*speed_kmh, 20.0),
            other => panic!("expected cycling detail, got {other:?}"),
        }
        assert!(w.description().starts_with("Cycling on "));
    }

    #[test]
    fn rejects_nonpositive_inputs() {
        assert!(Workout::running(place(), -5.0, 30.0, 150.0, recorded()).is_err());
        assert!(Workout::running(place(), 5.0, 0.0, 150.0, recorded()).is_err());
        assert!(Workout::cycling(place(), 20.0, 60.0, f64::NAN, recorded()).is_err());
    }

    #[test]
    fn id_is_ten_digits_derived_from_time() {
        let w = Workout::running(place(), 5.0, 30.0, 150.0, recorded()).unwrap();
        assert_eq!(w.id().as_str().len(), 10);
        assert!(w.id().as_str().chars().all(|c| c.is_ascii_digit()));

        let later = recorded() + chrono::Duration::milliseconds(1);
        let w2 = Workout::running(place(), 5.0, 30.0, 150.0, later).unwrap();
        assert_ne!(w.id(), w2.id());
    }

    #[test]
    fn serde_round_trip_preserves_variant() {
        let w = Workout::cycling(place(), 12.5, 45.0, 210.0, recorded()).unwrap();
        let json = serde_json::to_string(&w).unwrap();
        assert!(json.contains("\"type\":\"cycling\""));
        let back: Workout = serde_json::from_str(&json).unwrap();
        assert_eq!(w, back);
    }
}
