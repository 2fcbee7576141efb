//! wm-store: string-keyed blob storage and the workout persistence adapter.

pub mod blob;
pub mod store;

pub use blob::{BlobStore, FileBlobStore, MemoryBlobStore};
pub use store::{WORKOUTS_KEY, WorkoutStore};

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed stored data under '{key}': {source}")]
    Malformed {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
