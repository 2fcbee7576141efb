//! Entry-form state machine transitions.

use chrono::{DateTime, Local, TimeZone};
use wm_app::{EntryForm, FormError};
use wm_core::{ActivityDetail, ActivityKind, GeoPoint};

fn clicked() -> GeoPoint {
    GeoPoint::new(46.95, 7.45).unwrap()
}

fn now() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 5, 10, 18, 0, 0).unwrap()
}

#[test]
fn starts_hidden_and_refuses_submit() {
    let mut form = EntryForm::default();
    assert!(!form.is_open());
    assert_eq!(form.submit(now()), Err(FormError::NotOpen));
}

#[test]
fn map_click_binds_the_anchor() {
    let mut form = EntryForm::default();
    form.open_at(clicked());
    assert!(form.is_open());
    assert_eq!(form.anchor(), Some(clicked()));
}

#[test]
fn valid_running_submit_commits_and_hides() {
    let mut form = EntryForm::default();
    form.open_at(clicked());
    form.distance = "5".to_string();
    form.duration = "30".to_string();
    form.cadence = "150".to_string();

    let workout = form.submit(now()).unwrap();
    assert_eq!(workout.location(), clicked());
    assert_eq!(workout.description(), "Running on May 10");
    match workout.detail() {
        ActivityDetail::Running {
            pace_min_per_km, ..
        } => assert_eq!(*pace_min_per_km, 6.0),
        other => panic!("expected running detail, got {other:?}"),
    }

    assert!(!form.is_open());
    assert!(form.distance.is_empty());
    assert!(form.cadence.is_empty());
}

#[test]
fn valid_cycling_submit_uses_elevation_field() {
    let mut form = EntryForm::default();
    form.open_at(clicked());
    form.kind = ActivityKind::Cycling;
    form.distance = "20".to_string();
    form.duration = "60".to_string();
    form.elevation = "400".to_string();
    // Text left in the inactive field is ignored.
    form.cadence = "not a number".to_string();

    let workout = form.submit(now()).unwrap();
    match workout.detail() {
        ActivityDetail::Cycling { speed_kmh, .. } => assert_eq!(*speed_kmh, 20.0),
        other => panic!("expected cycling detail, got {other:?}"),
    }
}

#[test]
fn invalid_submit_leaves_state_untouched() {
    let mut form = EntryForm::default();
    form.open_at(clicked());
    form.distance = "-5".to_string();
    form.duration = "30".to_string();
    form.cadence = "150".to_string();

    assert_eq!(form.submit(now()), Err(FormError::InvalidInput));
    assert!(form.is_open());
    assert_eq!(form.distance, "-5");
    assert_eq!(form.anchor(), Some(clicked()));
}

#[test]
fn non_numeric_and_non_finite_inputs_reject() {
    for bad in ["abc", "", "inf", "NaN", "0"] {
        let mut form = EntryForm::default();
        form.open_at(clicked());
        form.distance = bad.to_string();
        form.duration = "30".to_string();
        form.cadence = "150".to_string();
        assert_eq!(form.submit(now()), Err(FormError::InvalidInput), "input {bad:?}");
        assert!(form.is_open());
    }
}

#[test]
fn switching_kind_swaps_the_active_metric_field() {
    let mut form = EntryForm::default();
    form.open_at(clicked());
    assert_eq!(form.metric_label(), "Cadence");

    form.kind = ActivityKind::Cycling;
    assert_eq!(form.metric_label(), "Elev Gain");
    // Still open; toggling never hides the form.
    assert!(form.is_open());
}

#[test]
fn dismiss_clears_fields_but_keeps_kind() {
    let mut form = EntryForm::default();
    form.open_at(clicked());
    form.kind = ActivityKind::Cycling;
    form.distance = "20".to_string();

    form.dismiss();
    assert!(!form.is_open());
    assert!(form.distance.is_empty());
    assert_eq!(form.kind, ActivityKind::Cycling);
}
