//! Store Error Types
//!
//! Errors raised by [`TemplateStore`](crate::db::TemplateStore) backends. The
//! trait itself returns `anyhow::Result`; these are the concrete causes the
//! in-process backends attach, so callers can `downcast_ref` when they need to
//! tell them apart.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    /// A lock guarding in-memory state was poisoned by a panicking writer
    #[error("Store lock poisoned: {0}")]
    LockPoisoned(String),

    /// `create` was given an id that is already stored
    #[error("Template already exists: {0}")]
    DuplicateId(String),

    /// `replace` was given an id that is not stored
    #[error("Template not found: {0}")]
    NotFound(String),

    /// Another stored template already holds the slug
    #[error("Slug already used by another template: {0}")]
    SlugTaken(String),

    /// The document has no id; the service assigns one before storing
    #[error("Template has no id")]
    MissingId,

    #[error("Template serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    pub fn lock_poisoned(e: impl std::fmt::Display) -> Self {
        Self::LockPoisoned(e.to_string())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    pub fn slug_taken(slug: impl Into<String>) -> Self {
        Self::SlugTaken(slug.into())
    }
}
