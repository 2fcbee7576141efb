//! Entry-form state machine.
//!
//! hidden → (map click) → open, bound to the clicked coordinates →
//! (valid submit) → hidden plus a committed workout, or (invalid submit) →
//! unchanged and still open. Switching the activity kind swaps which
//! kind-specific field is active without touching open/hidden.
//!
//! Field values stay raw strings until submit so the frontends can bind
//! text inputs directly; parsing and validation happen in one place here.

use chrono::{DateTime, Local};
use wm_core::{ActivityKind, GeoPoint, Workout, all_positive_finite};

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("form is not open")]
    NotOpen,

    #[error("inputs have to be positive numbers")]
    InvalidInput,
}

#[derive(Debug, Clone, Default)]
pub struct EntryForm {
    anchor: Option<GeoPoint>,
    pub kind: ActivityKind,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl EntryForm {
    pub fn is_open(&self) -> bool {
        self.anchor.is_some()
    }

    /// The coordinates the form is bound to, when open.
    pub fn anchor(&self) -> Option<GeoPoint> {
        self.anchor
    }

    /// Bind to the clicked coordinates and show the form.
    pub fn open_at(&mut self, location: GeoPoint) {
        self.anchor = Some(location);
    }

    /// Hide and clear every field. The selected kind survives.
    pub fn dismiss(&mut self) {
        *self = Self {
            kind: self.kind,
            ..Self::default()
        };
    }

    /// Label of the kind-specific field currently active.
    pub fn metric_label(&self) -> &'static str {
        match self.kind {
            ActivityKind::Running => "Cadence",
            ActivityKind::Cycling => "Elev Gain",
        }
    }

    fn metric_text(&self) -> &str {
        match self.kind {
            ActivityKind::Running => &self.cadence,
            ActivityKind::Cycling => &self.elevation,
        }
    }

    /// Parse, validate, and commit. On success the form hides and clears;
    /// on failure nothing changes and the form stays open.
    pub fn submit(&mut self, now: DateTime<Local>) -> Result<Workout, FormError> {
        let anchor = self.anchor.ok_or(FormError::NotOpen)?;
        let distance = parse_field(&self.distance)?;
        let duration = parse_field(&self.duration)?;
        let metric = parse_field(self.metric_text())?;
        if !all_positive_finite(&[distance, duration, metric]) {
            return Err(FormError::InvalidInput);
        }
        let workout = match self.kind {
            ActivityKind::Running => Workout::running(anchor, distance, duration, metric, now),
            ActivityKind::Cycling => Workout::cycling(anchor, distance, duration, metric, now),
        }
        .map_err(|_| FormError::InvalidInput)?;
        self.dismiss();
        Ok(workout)
    }
}

fn parse_field(raw: &str) -> Result<f64, FormError> {
    raw.trim().parse::<f64>().map_err(|_| FormError::InvalidInput)
}
