//! SurrealDB Template Store
//!
//! Embedded SurrealDB (RocksDB engine) implementation of [`TemplateStore`].
//!
//! # Storage Layout
//!
//! One SCHEMALESS `templates` table. Records are keyed `templates:<id>` and
//! carry the template id again in a `uuid` field so lookups do not depend on
//! record-id parsing. The component tree is stored as a nested JSON value in
//! its persisted `props.<type>` shape.
//!
//! # Examples
//!
//! ```rust,no_run
//! # use sitedesk_core::db::SurrealTemplateStore;
//! # use std::path::PathBuf;
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SurrealTemplateStore::new(PathBuf::from("./data/templates.db")).await?;
//! # Ok(())
//! # }
//! ```

use crate::db::error::StoreError;
use crate::db::template_store::{DeleteResult, TemplateStore};
use crate::models::{ComponentNode, TemplateDocument};
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;

const TABLE: &str = "templates";
const SLUG_INDEX: &str = "templates_slug";

/// Internal struct matching the stored record, with the template id in `uuid`
#[derive(Debug, Clone, Serialize, Deserialize)]
struct SurrealTemplate {
    uuid: String,
    name: String,
    slug: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    owner_id: Option<String>,
    #[serde(default)]
    components: Value,
    created_at: String,
    updated_at: String,
}

impl SurrealTemplate {
    fn from_document(document: &TemplateDocument) -> Result<Self> {
        let uuid = document.id.clone().ok_or(StoreError::MissingId)?;
        Ok(Self {
            uuid,
            name: document.name.clone(),
            slug: document.slug.clone(),
            description: document.description.clone(),
            owner_id: document.owner_id.clone(),
            components: serde_json::to_value(&document.components).map_err(StoreError::from)?,
            created_at: document.created_at.to_rfc3339(),
            updated_at: document.updated_at.to_rfc3339(),
        })
    }

    fn into_document(self) -> Result<TemplateDocument> {
        let components: Vec<ComponentNode> = match self.components {
            Value::Null => Vec::new(),
            value => serde_json::from_value(value).with_context(|| {
                format!("Stored components of template {} are invalid", self.uuid)
            })?,
        };

        Ok(TemplateDocument {
            id: Some(self.uuid),
            name: self.name,
            slug: self.slug,
            description: self.description,
            owner_id: self.owner_id,
            components,
            created_at: parse_timestamp(&self.uuid, "created_at", &self.created_at),
            updated_at: parse_timestamp(&self.uuid, "updated_at", &self.updated_at),
        })
    }
}

fn parse_timestamp(uuid: &str, field: &str, value: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(value) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(e) => {
            tracing::warn!(
                "Template {} has unreadable {} '{}' ({}), using current time",
                uuid,
                field,
                value,
                e
            );
            Utc::now()
        }
    }
}

/// Template store on embedded SurrealDB
pub struct SurrealTemplateStore {
    db: Arc<Surreal<Db>>,
}

impl SurrealTemplateStore {
    /// Open (or create) the RocksDB database at `db_path`
    ///
    /// # Errors
    ///
    /// Returns error if RocksDB initialization or schema setup fails.
    pub async fn new(db_path: PathBuf) -> Result<Self> {
        let db = Surreal::new::<RocksDb>(db_path)
            .await
            .context("Failed to initialize SurrealDB with RocksDB backend")?;

        db.use_ns("sitedesk")
            .use_db("templates")
            .await
            .context("Failed to set namespace/database")?;

        db.query("DEFINE TABLE IF NOT EXISTS templates SCHEMALESS;")
            .await
            .context("Failed to create templates table")?;

        // Slug uniqueness is enforced by the database so racing saves cannot
        // both claim one
        db.query(format!(
            "DEFINE INDEX IF NOT EXISTS {} ON TABLE templates FIELDS slug UNIQUE;",
            SLUG_INDEX
        ))
        .await
        .context("Failed to create slug index")?;

        Ok(Self { db: Arc::new(db) })
    }

    async fn select_one(
        &self,
        field: &'static str,
        value: &str,
    ) -> Result<Option<TemplateDocument>> {
        let query = format!("SELECT * FROM templates WHERE {} = $value LIMIT 1;", field);
        let mut response = self
            .db
            .query(query)
            .bind(("value", value.to_string()))
            .await
            .with_context(|| format!("Failed to query template by {}", field))?;

        let records: Vec<SurrealTemplate> = response
            .take(0)
            .context("Failed to extract query results")?;

        records
            .into_iter()
            .next()
            .map(SurrealTemplate::into_document)
            .transpose()
    }

    async fn write(&self, statement: &str, record: SurrealTemplate) -> Result<()> {
        let query = format!(
            "{} type::thing($table, $id) CONTENT {{
                uuid: $uuid,
                name: $name,
                slug: $slug,
                description: $description,
                owner_id: $owner_id,
                components: $components,
                created_at: $created_at,
                updated_at: $updated_at
            }};",
            statement
        );

        let slug = record.slug.clone();
        let response = self
            .db
            .query(query)
            .bind(("table", TABLE))
            .bind(("id", record.uuid.clone()))
            .bind(("uuid", record.uuid))
            .bind(("name", record.name))
            .bind(("slug", record.slug))
            .bind(("description", record.description))
            .bind(("owner_id", record.owner_id))
            .bind(("components", record.components))
            .bind(("created_at", record.created_at))
            .bind(("updated_at", record.updated_at))
            .await
            .with_context(|| format!("Failed to {} template", statement.to_lowercase()))?;

        match response.check() {
            Ok(_) => Ok(()),
            Err(e) if e.to_string().contains(SLUG_INDEX) => {
                Err(StoreError::slug_taken(slug).into())
            }
            Err(e) => Err(anyhow::Error::new(e).context("Template write rejected")),
        }
    }
}

#[async_trait]
impl TemplateStore for SurrealTemplateStore {
    async fn create_template(&self, document: TemplateDocument) -> Result<TemplateDocument> {
        let record = SurrealTemplate::from_document(&document)?;
        if self.select_one("uuid", &record.uuid).await?.is_some() {
            return Err(StoreError::duplicate_id(record.uuid).into());
        }

        self.write("CREATE", record).await?;
        Ok(document)
    }

    async fn get_template(&self, id: &str) -> Result<Option<TemplateDocument>> {
        self.select_one("uuid", id).await
    }

    async fn get_template_by_slug(&self, slug: &str) -> Result<Option<TemplateDocument>> {
        self.select_one("slug", slug).await
    }

    async fn replace_template(&self, document: TemplateDocument) -> Result<TemplateDocument> {
        let record = SurrealTemplate::from_document(&document)?;
        if self.select_one("uuid", &record.uuid).await?.is_none() {
            return Err(StoreError::not_found(record.uuid).into());
        }

        self.write("UPDATE", record).await?;
        Ok(document)
    }

    async fn delete_template(&self, id: &str) -> Result<DeleteResult> {
        if self.get_template(id).await?.is_none() {
            return Ok(DeleteResult { existed: false });
        }

        self.db
            .query("DELETE type::thing($table, $id);")
            .bind(("table", TABLE))
            .bind(("id", id.to_string()))
            .await
            .context("Failed to delete template")?;

        Ok(DeleteResult { existed: true })
    }

    async fn list_templates(&self) -> Result<Vec<TemplateDocument>> {
        let mut response = self
            .db
            .query("SELECT * FROM templates ORDER BY name ASC;")
            .await
            .context("Failed to list templates")?;

        let records: Vec<SurrealTemplate> = response
            .take(0)
            .context("Failed to extract query results")?;

        records
            .into_iter()
            .map(SurrealTemplate::into_document)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_timestamp_keeps_stored_value() {
        let parsed = parse_timestamp("t-1", "created_at", "2023-04-01T10:00:00+02:00");
        assert_eq!(parsed.to_rfc3339(), "2023-04-01T08:00:00+00:00");
    }

    #[test]
    fn test_unreadable_timestamp_falls_back_to_now() {
        let before = Utc::now();
        let parsed = parse_timestamp("t-1", "created_at", "last tuesday");
        assert!(parsed >= before);
    }
}
