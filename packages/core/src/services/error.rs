//! Service Layer Error Types

use crate::config::ConfigError;
use crate::db::StoreError;
use crate::models::ValidationError;
use thiserror::Error;

/// Template service errors
#[derive(Error, Debug)]
pub enum TemplateServiceError {
    /// No template with this id or slug
    #[error("Template not found: {key}")]
    NotFound { key: String },

    #[error("Template validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),

    /// Another template already uses the slug
    #[error("Slug '{slug}' is already used by another template")]
    SlugTaken { slug: String },

    #[error("Invalid service configuration: {0}")]
    Config(#[from] ConfigError),

    /// The backing store failed
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl TemplateServiceError {
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::NotFound { key: key.into() }
    }

    pub fn slug_taken(slug: impl Into<String>) -> Self {
        Self::SlugTaken { slug: slug.into() }
    }

    /// Wrap a store failure, surfacing a slug conflict the store detected
    pub fn from_store(e: anyhow::Error) -> Self {
        match e.downcast_ref::<StoreError>() {
            Some(StoreError::SlugTaken(slug)) => Self::slug_taken(slug.clone()),
            _ => Self::Store(e),
        }
    }
}
