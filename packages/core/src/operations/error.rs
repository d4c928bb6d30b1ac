//! Error types for structural tree operations
//!
//! Every structural operation is all-or-nothing: when one of these errors is
//! returned the component tree is exactly as it was before the call.

use thiserror::Error;

/// Errors raised by structural edits on a component tree
///
/// # Examples
///
/// ```rust
/// use sitedesk_core::operations::TreeError;
///
/// let err = TreeError::path_not_found(&["grid-1".to_string(), "columns-2".to_string()]);
/// assert_eq!(err.to_string(), "Container path not found: grid-1/columns-2");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// A path segment is missing, or names a node that cannot hold children
    #[error("Container path not found: {path}")]
    PathNotFound { path: String },

    /// No node with this id exists anywhere in the tree
    #[error("Component not found: {id}")]
    NodeNotFound { id: String },

    /// The edit would put two nodes with the same id into one document
    #[error("Duplicate component id: {id}")]
    DuplicateId { id: String },
}

impl TreeError {
    pub fn path_not_found(path: &[String]) -> Self {
        Self::PathNotFound {
            path: path.join("/"),
        }
    }

    pub fn node_not_found(id: impl Into<String>) -> Self {
        Self::NodeNotFound { id: id.into() }
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId { id: id.into() }
    }
}
