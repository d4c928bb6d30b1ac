//! Editor-to-host contract
//!
//! The editor does not persist anything itself. When the user saves or
//! cancels, the session hands control to an [`EditorHost`], which is usually
//! the [`TemplateService`](crate::services::TemplateService).

use crate::models::TemplateDocument;
use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait EditorHost: Send + Sync {
    /// Persist the document and return it as stored (id, timestamps)
    async fn on_save(&self, document: TemplateDocument) -> Result<TemplateDocument>;

    /// The user abandoned the edit
    async fn on_cancel(&self) -> Result<()>;
}
