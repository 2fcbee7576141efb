//! Workout collection snapshots over a blob store.

use wm_core::Workout;

use crate::blob::BlobStore;
use crate::{StoreError, StoreResult};

/// Fixed key the whole collection is snapshotted under.
pub const WORKOUTS_KEY: &str = "workouts";

/// Persistence adapter: the entire ordered collection is serialized to one
/// JSON string and fully overwritten on every save. No partial writes, no
/// versioning.
pub struct WorkoutStore<B: BlobStore> {
    blob: B,
}

impl<B: BlobStore> WorkoutStore<B> {
    pub fn new(blob: B) -> Self {
        Self { blob }
    }

    pub fn save(&mut self, workouts: &[Workout]) -> StoreResult<()> {
        let blob = serde_json::to_string(workouts)?;
        self.blob.set(WORKOUTS_KEY, &blob)
    }

    /// An absent key means no persisted workouts, not an error. Malformed
    /// data is rejected with [`StoreError::Malformed`] rather than silently
    /// dropped.
    pub fn load(&self) -> StoreResult<Vec<Workout>> {
        match self.blob.get(WORKOUTS_KEY)? {
            None => Ok(Vec::new()),
            Some(blob) => serde_json::from_str(&blob).map_err(|source| StoreError::Malformed {
                key: WORKOUTS_KEY.to_string(),
                source,
            }),
        }
    }

    pub fn clear(&mut self) -> StoreResult<()> {
        self.blob.remove(WORKOUTS_KEY)
    }
}
