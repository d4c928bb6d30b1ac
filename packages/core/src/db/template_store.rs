//! TemplateStore Trait - Document Store Abstraction
//!
//! The editor persists whole template documents. `TemplateStore` is the thin
//! repository interface between [`TemplateService`](crate::services::TemplateService)
//! and a concrete backend:
//!
//! - [`InMemoryTemplateStore`](crate::db::InMemoryTemplateStore) for tests and
//!   ephemeral hosts
//! - `SurrealTemplateStore` (feature `surrealdb`) on embedded RocksDB
//!
//! Methods take ownership of documents and return `anyhow::Result` so
//! backends can attach their own error context.
//!
//! # Examples
//!
//! ```rust
//! use sitedesk_core::db::{InMemoryTemplateStore, TemplateStore};
//! use sitedesk_core::models::TemplateDocument;
//! use std::sync::Arc;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let store: Arc<dyn TemplateStore> = Arc::new(InMemoryTemplateStore::new());
//!
//! let mut doc = TemplateDocument::new("Home".to_string(), String::new());
//! doc.id = Some("t-1".to_string());
//! store.create_template(doc).await?;
//!
//! assert!(store.get_template_by_slug("home").await?.is_some());
//! # Ok(())
//! # }
//! ```

use crate::models::TemplateDocument;
use anyhow::Result;
use async_trait::async_trait;

/// Outcome of a delete; deletes are idempotent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub existed: bool,
}

/// Persistence for template documents
///
/// Implementations must be `Send + Sync`; the service shares one store across
/// tasks behind an `Arc<dyn TemplateStore>`.
#[async_trait]
pub trait TemplateStore: Send + Sync {
    /// Store a new document; its `id` must be set and unused
    async fn create_template(&self, document: TemplateDocument) -> Result<TemplateDocument>;

    async fn get_template(&self, id: &str) -> Result<Option<TemplateDocument>>;

    async fn get_template_by_slug(&self, slug: &str) -> Result<Option<TemplateDocument>>;

    /// Overwrite a stored document in full (no field merging)
    async fn replace_template(&self, document: TemplateDocument) -> Result<TemplateDocument>;

    async fn delete_template(&self, id: &str) -> Result<DeleteResult>;

    /// All documents ordered by name
    async fn list_templates(&self) -> Result<Vec<TemplateDocument>>;
}
