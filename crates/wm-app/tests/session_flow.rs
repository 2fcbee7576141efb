//! Session behavior over an in-memory store.

use chrono::{DateTime, Local, TimeZone};
use wm_app::Session;
use wm_core::{ActivityKind, GeoPoint, Workout};
use wm_store::{BlobStore, MemoryBlobStore, WORKOUTS_KEY, WorkoutStore};

fn place() -> GeoPoint {
    GeoPoint::new(41.3874, 2.1686).unwrap()
}

fn at(day: u32) -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 8, day, 7, 30, 0).unwrap()
}

fn run_on(day: u32) -> Workout {
    Workout::running(place(), 5.0, 30.0, 150.0, at(day)).unwrap()
}

#[test]
fn open_without_data_is_empty() {
    let session = Session::open(WorkoutStore::new(MemoryBlobStore::new())).unwrap();
    assert!(session.workouts().is_empty());
}

#[test]
fn added_workouts_survive_reopening() {
    let mut blob = MemoryBlobStore::new();

    {
        let mut session = Session::open(WorkoutStore::new(&mut blob)).unwrap();
        session.add(run_on(1)).unwrap();
        session
            .add(Workout::cycling(place(), 20.0, 60.0, 400.0, at(2)).unwrap())
            .unwrap();
    }

    let session = Session::open(WorkoutStore::new(&mut blob)).unwrap();
    assert_eq!(session.workouts().len(), 2);
    assert_eq!(session.workouts()[0].kind(), ActivityKind::Running);
    assert_eq!(session.workouts()[1].kind(), ActivityKind::Cycling);
}

#[test]
fn delete_removes_exactly_one_preserving_order() {
    let mut session = Session::open(WorkoutStore::new(MemoryBlobStore::new())).unwrap();
    let workouts = [run_on(1), run_on(2), run_on(3)];
    let victim = workouts[1].id().clone();
    for w in workouts.iter().cloned() {
        session.add(w).unwrap();
    }

    assert!(session.delete(&victim).unwrap());

    let remaining: Vec<_> = session.workouts().iter().map(|w| w.id().clone()).collect();
    assert_eq!(remaining, vec![workouts[0].id().clone(), workouts[2].id().clone()]);
    assert!(session.find(&victim).is_none());
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let mut session = Session::open(WorkoutStore::new(MemoryBlobStore::new())).unwrap();
    session.add(run_on(1)).unwrap();

    assert!(!session.delete(&"0000000000".into()).unwrap());
    assert_eq!(session.workouts().len(), 1);
}

#[test]
fn deletion_is_persisted() {
    let mut blob = MemoryBlobStore::new();

    let victim = {
        let mut session = Session::open(WorkoutStore::new(&mut blob)).unwrap();
        session.add(run_on(1)).unwrap();
        session.add(run_on(2)).unwrap();
        let victim = session.workouts()[0].id().clone();
        session.delete(&victim).unwrap();
        victim
    };

    let session = Session::open(WorkoutStore::new(&mut blob)).unwrap();
    assert_eq!(session.workouts().len(), 1);
    assert!(session.find(&victim).is_none());
}

#[test]
fn malformed_blob_fails_open() {
    let mut blob = MemoryBlobStore::new();
    blob.set(WORKOUTS_KEY, "][").unwrap();

    assert!(Session::open(WorkoutStore::new(&mut blob)).is_err());
}

#[test]
fn open_or_empty_surfaces_error_and_recovers_on_next_save() {
    let mut blob = MemoryBlobStore::new();
    blob.set(WORKOUTS_KEY, "][").unwrap();

    {
        let (mut session, err) = Session::open_or_empty(WorkoutStore::new(&mut blob));
        assert!(err.is_some());
        assert!(session.workouts().is_empty());
        session.add(run_on(1)).unwrap();
    }

    // The save overwrote the bad blob.
    let session = Session::open(WorkoutStore::new(&mut blob)).unwrap();
    assert_eq!(session.workouts().len(), 1);
}

#[test]
fn clear_wipes_memory_and_store() {
    let mut blob = MemoryBlobStore::new();

    {
        let mut session = Session::open(WorkoutStore::new(&mut blob)).unwrap();
        session.add(run_on(1)).unwrap();
        session.clear().unwrap();
        assert!(session.workouts().is_empty());
    }

    assert_eq!(blob.get(WORKOUTS_KEY).unwrap(), None);
}
