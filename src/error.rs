//! Error types for the progression core and the tracker that owns it.

use thiserror::Error;

/// Local validation failures of the core operations.
///
/// These are integration errors: surfaced to the caller immediately, never
/// retried and never swallowed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Invalid experience amount {amount}: must not be negative")]
    InvalidAmount { amount: i64 },

    #[error("Quest index {index} out of range for {len} quests")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Errors from [`Tracker`](crate::tracker::Tracker) operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Avatar(#[from] crate::avatar::AvatarError),

    #[error("Storage error: {0:#}")]
    Storage(#[from] anyhow::Error),
}

impl TrackerError {
    pub fn as_core(&self) -> Option<&CoreError> {
        match self {
            Self::Core(e) => Some(e),
            _ => None,
        }
    }
}
