//! Template Service
//!
//! Business layer between the editor and a [`TemplateStore`]:
//!
//! - `load_by_slug` / `load` - fetch a template for editing
//! - `save` - create on first save, full replace afterwards
//! - `delete` - idempotent removal
//! - `open_session` - load a template straight into an [`EditorSession`]
//!
//! Every change is announced on a broadcast channel as a [`TemplateEvent`];
//! hosts use it for transient notifications.
//!
//! # Save Semantics
//!
//! - A document without id is created under a fresh uuid.
//! - A document with id replaces the stored one in full; the stored
//!   `createdAt` wins over whatever the caller sent. An id the store does not
//!   know is created under that id.
//! - `updatedAt` is set to the save time.
//! - An empty slug is derived from the name; an explicit slug is normalised
//!   to its URL-safe form. A slug used by a different template is rejected
//!   with `SlugTaken`, both here and by the store under its own write lock.

use crate::config::EditorConfig;
use crate::db::{TemplateEvent, TemplateStore};
use crate::editor::{EditorHost, EditorSession};
use crate::models::{slugify, TemplateDocument, ValidationError};
use crate::services::error::TemplateServiceError;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::broadcast;

#[derive(Clone)]
pub struct TemplateService {
    store: Arc<dyn TemplateStore>,
    config: Arc<EditorConfig>,
    /// Broadcast channel for template events
    event_tx: broadcast::Sender<TemplateEvent>,
}

impl TemplateService {
    /// Create a service over `store`
    ///
    /// # Errors
    ///
    /// `Config` if the configuration does not validate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use sitedesk_core::config::EditorConfig;
    /// # use sitedesk_core::db::InMemoryTemplateStore;
    /// # use sitedesk_core::services::TemplateService;
    /// # use std::sync::Arc;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let service = TemplateService::new(
    ///     Arc::new(InMemoryTemplateStore::new()),
    ///     EditorConfig::default(),
    /// )?;
    /// let doc = service.create_template("Spring Sale", "").await?;
    /// assert_eq!(service.load_by_slug("spring-sale").await?.id, doc.id);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(
        store: Arc<dyn TemplateStore>,
        config: EditorConfig,
    ) -> Result<Self, TemplateServiceError> {
        config.validate()?;
        let (event_tx, _) = broadcast::channel(config.event_capacity);

        Ok(Self {
            store,
            config: Arc::new(config),
            event_tx,
        })
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn store(&self) -> &Arc<dyn TemplateStore> {
        &self.store
    }

    pub fn subscribe_to_events(&self) -> broadcast::Receiver<TemplateEvent> {
        self.event_tx.subscribe()
    }

    /// Ignores send errors; having no subscribers is normal
    fn emit_event(&self, event: TemplateEvent) {
        let _ = self.event_tx.send(event);
    }

    pub async fn load(&self, id: &str) -> Result<TemplateDocument, TemplateServiceError> {
        self.store
            .get_template(id)
            .await?
            .ok_or_else(|| TemplateServiceError::not_found(id))
    }

    pub async fn load_by_slug(
        &self,
        slug: &str,
    ) -> Result<TemplateDocument, TemplateServiceError> {
        self.store
            .get_template_by_slug(slug)
            .await?
            .ok_or_else(|| TemplateServiceError::not_found(slug))
    }

    pub async fn list(&self) -> Result<Vec<TemplateDocument>, TemplateServiceError> {
        Ok(self.store.list_templates().await?)
    }

    /// Create and store an empty template owned by the configured staff account
    pub async fn create_template(
        &self,
        name: &str,
        description: &str,
    ) -> Result<TemplateDocument, TemplateServiceError> {
        let mut document = TemplateDocument::new(name.to_string(), description.to_string());
        document.owner_id = self.config.owner_id.clone();
        self.save(document).await
    }

    /// Persist a template (see module docs for the rules)
    ///
    /// Failures are announced as [`TemplateEvent::SaveFailed`] before being
    /// returned.
    pub async fn save(
        &self,
        document: TemplateDocument,
    ) -> Result<TemplateDocument, TemplateServiceError> {
        let slug = document.slug.clone();
        match self.save_document(document).await {
            Ok(saved) => Ok(saved),
            Err(e) => {
                tracing::warn!("Failed to save template '{}': {}", slug, e);
                self.emit_event(TemplateEvent::SaveFailed {
                    slug,
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    async fn save_document(
        &self,
        mut document: TemplateDocument,
    ) -> Result<TemplateDocument, TemplateServiceError> {
        document.slug = if document.slug.is_empty() {
            slugify(&document.name)
        } else {
            slugify(&document.slug)
        };
        document.validate(self.config.max_depth)?;
        if document.slug.is_empty() {
            return Err(ValidationError::MissingField("slug".to_string()).into());
        }

        if let Some(other) = self.store.get_template_by_slug(&document.slug).await? {
            if other.id != document.id {
                return Err(TemplateServiceError::slug_taken(document.slug));
            }
        }

        let now = Utc::now();
        let existing = match &document.id {
            Some(id) => self.store.get_template(id).await?,
            None => None,
        };

        match existing {
            Some(stored) => {
                document.created_at = stored.created_at;
                document.updated_at = now;
                let saved = self
                    .store
                    .replace_template(document)
                    .await
                    .map_err(TemplateServiceError::from_store)?;
                tracing::info!(
                    "Updated template '{}' ({} components)",
                    saved.slug,
                    saved.component_count()
                );
                self.emit_event(TemplateEvent::TemplateUpdated(saved.clone()));
                Ok(saved)
            }
            None => {
                if document.id.is_none() {
                    document.id = Some(uuid::Uuid::new_v4().to_string());
                    document.created_at = now;
                }
                if document.owner_id.is_none() {
                    document.owner_id = self.config.owner_id.clone();
                }
                document.updated_at = now;
                let saved = self
                    .store
                    .create_template(document)
                    .await
                    .map_err(TemplateServiceError::from_store)?;
                tracing::info!("Created template '{}'", saved.slug);
                self.emit_event(TemplateEvent::TemplateCreated(saved.clone()));
                Ok(saved)
            }
        }
    }

    /// Delete a template; returns whether it existed
    pub async fn delete(&self, id: &str) -> Result<bool, TemplateServiceError> {
        let result = self.store.delete_template(id).await?;
        if result.existed {
            tracing::info!("Deleted template {}", id);
            self.emit_event(TemplateEvent::TemplateDeleted { id: id.to_string() });
        } else {
            tracing::debug!("Delete of unknown template {} ignored", id);
        }
        Ok(result.existed)
    }

    /// Load a template by slug into a fresh editor session
    pub async fn open_session(&self, slug: &str) -> Result<EditorSession, TemplateServiceError> {
        let document = self.load_by_slug(slug).await?;
        Ok(EditorSession::new(document, (*self.config).clone()))
    }

    /// Editor session over a new, unsaved template
    pub fn new_session(&self, name: &str) -> EditorSession {
        let mut document = TemplateDocument::new(name.to_string(), String::new());
        document.owner_id = self.config.owner_id.clone();
        EditorSession::new(document, (*self.config).clone())
    }
}

#[async_trait]
impl EditorHost for TemplateService {
    async fn on_save(&self, document: TemplateDocument) -> anyhow::Result<TemplateDocument> {
        Ok(self.save(document).await?)
    }

    async fn on_cancel(&self) -> anyhow::Result<()> {
        tracing::debug!("Template edit cancelled");
        Ok(())
    }
}

#[cfg(test)]
#[path = "template_service_test.rs"]
mod template_service_test;
