//! Error types for the wm-app service layer.

/// Application error type that wraps errors from the backend crates and
/// provides a unified error interface for both CLI and GUI.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Store error: {0}")]
    Store(String),

    #[error("Invalid workout input: {0}")]
    Workout(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Position unavailable: {0}")]
    Locate(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for wm-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<wm_store::StoreError> for AppError {
    fn from(err: wm_store::StoreError) -> Self {
        AppError::Store(err.to_string())
    }
}

impl From<wm_core::CoreError> for AppError {
    fn from(err: wm_core::CoreError) -> Self {
        AppError::Workout(err.to_string())
    }
}

impl From<crate::locate::LocateError> for AppError {
    fn from(err: crate::locate::LocateError) -> Self {
        AppError::Locate(err.to_string())
    }
}
