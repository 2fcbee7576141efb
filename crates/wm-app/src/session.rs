//! Session state: the ordered workout collection plus persistence.

use tracing::{info, warn};
use wm_core::{Workout, WorkoutId};
use wm_store::{BlobStore, WorkoutStore};

use crate::{AppError, AppResult};

/// Owns the in-memory collection and writes the whole collection back to
/// the store after every mutation. Insertion order is creation order; the
/// only reordering operation is deletion.
pub struct Session<B: BlobStore> {
    store: WorkoutStore<B>,
    workouts: Vec<Workout>,
}

impl<B: BlobStore> Session<B> {
    /// Open a session over `store`, loading any persisted collection.
    /// Malformed stored data propagates as an error.
    pub fn open(store: WorkoutStore<B>) -> AppResult<Self> {
        let workouts = store.load()?;
        info!(count = workouts.len(), "loaded persisted workouts");
        Ok(Self { store, workouts })
    }

    /// Open, falling back to an empty collection when the stored blob is
    /// unreadable. The error is returned alongside so callers can surface
    /// it; the next save overwrites the bad blob.
    pub fn open_or_empty(store: WorkoutStore<B>) -> (Self, Option<AppError>) {
        match store.load() {
            Ok(workouts) => (Self { store, workouts }, None),
            Err(err) => {
                warn!(%err, "stored workouts unreadable, starting empty");
                (
                    Self {
                        store,
                        workouts: Vec::new(),
                    },
                    Some(err.into()),
                )
            }
        }
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn find(&self, id: &WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    /// Append and persist. The write completes before this returns.
    pub fn add(&mut self, workout: Workout) -> AppResult<()> {
        info!(id = %workout.id(), kind = %workout.kind(), "workout added");
        self.workouts.push(workout);
        self.store.save(&self.workouts)?;
        Ok(())
    }

    /// Remove the record matching `id`, preserving the order of the rest.
    /// Returns false when nothing matched; nothing is written then.
    pub fn delete(&mut self, id: &WorkoutId) -> AppResult<bool> {
        let Some(index) = self.workouts.iter().position(|w| w.id() == id) else {
            return Ok(false);
        };
        self.workouts.remove(index);
        self.store.save(&self.workouts)?;
        info!(%id, "workout deleted");
        Ok(true)
    }

    /// Drop everything, in memory and in the store.
    pub fn clear(&mut self) -> AppResult<()> {
        self.workouts.clear();
        self.store.clear()?;
        Ok(())
    }
}
