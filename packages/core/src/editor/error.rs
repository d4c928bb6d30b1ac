//! Error types for editor sessions

use crate::models::{PropertyError, ValidationError};
use crate::operations::TreeError;
use thiserror::Error;

/// Errors surfaced by [`EditorSession`](crate::editor::EditorSession)
///
/// Every failed edit leaves the session's document unchanged; the host decides
/// whether to show a notification.
#[derive(Error, Debug)]
pub enum EditorError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Property(#[from] PropertyError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No component is selected")]
    NothingSelected,

    #[error("Drop received without an active drag")]
    NoActiveDrag,

    #[error("Insert would nest components {depth} levels deep (maximum {max})")]
    DepthExceeded { depth: usize, max: usize },

    #[error("Save failed: {0}")]
    SaveFailed(String),

    #[error("Cancel failed: {0}")]
    CancelFailed(String),
}

impl EditorError {
    /// Whether the error came from the persistence host rather than the edit itself
    pub fn is_save_failure(&self) -> bool {
        matches!(self, Self::SaveFailed(_))
    }

    /// Whether the host reported an error, on save or on cancel
    pub fn is_host_failure(&self) -> bool {
        matches!(self, Self::SaveFailed(_) | Self::CancelFailed(_))
    }
}
