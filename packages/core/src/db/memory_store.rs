//! In-memory template store
//!
//! Backed by a `RwLock<HashMap>` keyed by template id. Used by tests, the
//! lint tool and hosts that keep templates elsewhere.

use crate::db::error::StoreError;
use crate::db::template_store::{DeleteResult, TemplateStore};
use crate::models::TemplateDocument;
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Debug, Default)]
pub struct InMemoryTemplateStore {
    templates: RwLock<HashMap<String, TemplateDocument>>,
}

impl InMemoryTemplateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored templates
    pub fn len(&self) -> Result<usize> {
        let templates = self.templates.read().map_err(StoreError::lock_poisoned)?;
        Ok(templates.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

/// Checked under the write lock so two racing saves cannot both claim a slug
fn check_slug_free(
    templates: &HashMap<String, TemplateDocument>,
    id: &str,
    slug: &str,
) -> Result<(), StoreError> {
    let taken = templates
        .values()
        .any(|doc| doc.slug == slug && doc.id.as_deref() != Some(id));
    if taken {
        return Err(StoreError::slug_taken(slug));
    }
    Ok(())
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn create_template(&self, document: TemplateDocument) -> Result<TemplateDocument> {
        let id = document.id.clone().ok_or(StoreError::MissingId)?;
        let mut templates = self.templates.write().map_err(StoreError::lock_poisoned)?;

        if templates.contains_key(&id) {
            return Err(StoreError::duplicate_id(id).into());
        }
        check_slug_free(&templates, &id, &document.slug)?;
        templates.insert(id, document.clone());
        Ok(document)
    }

    async fn get_template(&self, id: &str) -> Result<Option<TemplateDocument>> {
        let templates = self.templates.read().map_err(StoreError::lock_poisoned)?;
        Ok(templates.get(id).cloned())
    }

    async fn get_template_by_slug(&self, slug: &str) -> Result<Option<TemplateDocument>> {
        let templates = self.templates.read().map_err(StoreError::lock_poisoned)?;
        Ok(templates.values().find(|doc| doc.slug == slug).cloned())
    }

    async fn replace_template(&self, document: TemplateDocument) -> Result<TemplateDocument> {
        let id = document.id.clone().ok_or(StoreError::MissingId)?;
        let mut templates = self.templates.write().map_err(StoreError::lock_poisoned)?;

        if !templates.contains_key(&id) {
            return Err(StoreError::not_found(id).into());
        }
        check_slug_free(&templates, &id, &document.slug)?;

        templates.insert(id, document.clone());
        Ok(document)
    }

    async fn delete_template(&self, id: &str) -> Result<DeleteResult> {
        let mut templates = self.templates.write().map_err(StoreError::lock_poisoned)?;
        Ok(DeleteResult {
            existed: templates.remove(id).is_some(),
        })
    }

    async fn list_templates(&self) -> Result<Vec<TemplateDocument>> {
        let templates = self.templates.read().map_err(StoreError::lock_poisoned)?;
        let mut all: Vec<TemplateDocument> = templates.values().cloned().collect();
        all.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(all)
    }
}
