//! Marker and popup specs derived from the workout collection.

use wm_core::{ActivityKind, GeoPoint, Workout, WorkoutId};

/// Popup width bounds, in points.
pub const POPUP_MIN_WIDTH: f32 = 100.0;
pub const POPUP_MAX_WIDTH: f32 = 250.0;

/// Everything a map surface needs to place one marker: where, what the
/// popup says, and which kind the style hooks key off. Popups stay open
/// until explicitly closed.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: WorkoutId,
    pub at: GeoPoint,
    pub label: String,
    pub kind: ActivityKind,
}

/// Project the collection to markers, one per workout, in collection order.
pub fn markers_for(workouts: &[Workout]) -> Vec<MarkerSpec> {
    workouts
        .iter()
        .map(|w| MarkerSpec {
            id: w.id().clone(),
            at: w.location(),
            label: w.description().to_string(),
            kind: w.kind(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Local, TimeZone};

    #[test]
    fn one_marker_per_workout_in_order() {
        let place = GeoPoint::new(41.39, 2.17).unwrap();
        let t0 = Local.with_ymd_and_hms(2024, 8, 4, 7, 0, 0).unwrap();
        let t1 = Local.with_ymd_and_hms(2024, 8, 5, 7, 0, 0).unwrap();
        let workouts = vec![
            Workout::running(place, 5.0, 30.0, 150.0, t0).unwrap(),
            Workout::cycling(place, 20.0, 60.0, 400.0, t1).unwrap(),
        ];

        let markers = markers_for(&workouts);
        assert_eq!(markers.len(), 2);
        assert_eq!(&markers[0].id, workouts[0].id());
        assert_eq!(markers[0].kind, ActivityKind::Running);
        assert_eq!(markers[0].label, "Running on August 4");
        assert_eq!(markers[1].kind, ActivityKind::Cycling);
    }
}
