//! Tests for TemplateService save/load/delete semantics and events

#[cfg(test)]
mod tests {
    use crate::config::EditorConfig;
    use crate::db::{DeleteResult, InMemoryTemplateStore, TemplateEvent, TemplateStore};
    use crate::editor::{DropTarget, EditorError, EditorState};
    use crate::models::{ComponentKind, TemplateDocument, ValidationError};
    use crate::services::{TemplateService, TemplateServiceError};
    use anyhow::Result;
    use async_trait::async_trait;
    use chrono::{Duration, Utc};
    use serde_json::json;
    use std::sync::Arc;

    fn create_service() -> TemplateService {
        TemplateService::new(Arc::new(InMemoryTemplateStore::new()), EditorConfig::default())
            .unwrap()
    }

    #[tokio::test]
    async fn test_first_save_assigns_id_and_timestamps() -> Result<()> {
        let service = create_service();
        let doc = TemplateDocument::new("My Great Page!!".to_string(), String::new());

        let saved = service.save(doc).await?;
        assert!(saved.id.is_some());
        assert_eq!(saved.slug, "my-great-page");
        assert!(saved.updated_at >= saved.created_at);
        Ok(())
    }

    #[tokio::test]
    async fn test_round_trip_preserves_components_and_created_at() -> Result<()> {
        let service = create_service();
        let mut session = service.new_session("Landing");
        let grid = session.insert(ComponentKind::Grid, &DropTarget::Root).unwrap();
        session
            .insert(ComponentKind::Button, &DropTarget::container(vec![grid]))
            .unwrap();
        session.insert(ComponentKind::Pricing, &DropTarget::Root).unwrap();

        let first = service.save(session.document().clone()).await?;
        let loaded = service.load_by_slug("landing").await?;
        assert_eq!(loaded.components, first.components);
        assert_eq!(loaded.created_at, first.created_at);

        let mut edited = loaded.clone();
        edited.description = "Spring campaign".to_string();
        edited.created_at = Utc::now() + Duration::days(30);
        let second = service.save(edited).await?;

        assert_eq!(second.created_at, first.created_at);
        assert!(second.updated_at >= first.updated_at);
        let reloaded = service.load(second.id.as_deref().unwrap()).await?;
        assert_eq!(reloaded.description, "Spring campaign");
        assert_eq!(reloaded.components, first.components);
        Ok(())
    }

    #[tokio::test]
    async fn test_scenario_c_edit_selected_button_and_save() -> Result<()> {
        let service = create_service();
        let mut session = service.new_session("Promo");
        let id = session.insert(ComponentKind::Button, &DropTarget::Root).unwrap();

        session.select(&id).unwrap();
        session
            .set_property_path(&id, "props.button.text", json!("Buy Now"))
            .unwrap();
        session.save_to(&service).await.unwrap();
        assert_eq!(session.state(), &EditorState::Idle);

        let reloaded = service.load_by_slug("promo").await?;
        let value = serde_json::to_value(&reloaded.components[0])?;
        assert_eq!(value["props"]["button"]["text"], "Buy Now");
        Ok(())
    }

    #[tokio::test]
    async fn test_open_session_loads_by_slug() -> Result<()> {
        let service = create_service();
        let created = service.create_template("About Us", "Team page").await?;

        let session = service.open_session("about-us").await?;
        assert_eq!(session.document().id, created.id);
        assert!(!session.is_dirty());

        let err = service.open_session("missing").await.err().unwrap();
        assert!(matches!(err, TemplateServiceError::NotFound { .. }));
        Ok(())
    }

    #[tokio::test]
    async fn test_slug_conflict_is_rejected() -> Result<()> {
        let service = create_service();
        service.create_template("Home", "").await?;

        let mut other = TemplateDocument::new("Homepage".to_string(), String::new());
        other.slug = "home".to_string();
        let err = service.save(other).await.unwrap_err();
        assert!(matches!(err, TemplateServiceError::SlugTaken { ref slug } if slug == "home"));
        Ok(())
    }

    #[tokio::test]
    async fn test_resaving_same_template_keeps_its_slug() -> Result<()> {
        let service = create_service();
        let created = service.create_template("Home", "").await?;
        let again = service.save(created.clone()).await?;
        assert_eq!(again.slug, "home");
        assert_eq!(again.id, created.id);
        Ok(())
    }

    #[tokio::test]
    async fn test_empty_slug_is_derived_from_name() -> Result<()> {
        let service = create_service();
        let mut doc = TemplateDocument::new("Blog Index".to_string(), String::new());
        doc.slug.clear();

        let saved = service.save(doc).await?;
        assert_eq!(saved.slug, "blog-index");
        Ok(())
    }

    #[tokio::test]
    async fn test_explicit_slug_is_normalised() -> Result<()> {
        let service = create_service();
        let mut doc = TemplateDocument::new("Hello".to_string(), String::new());
        doc.slug = "Hello World/../x?".to_string();

        let saved = service.save(doc).await?;
        assert_eq!(saved.slug, "hello-world-x");
        assert!(service.load_by_slug("hello-world-x").await.is_ok());
        assert!(service.load_by_slug("Hello World/../x?").await.is_err());
        Ok(())
    }

    /// Store whose slug lookup always misses, as when another writer claims
    /// the slug between the service's check and its write
    struct StaleSlugLookup(InMemoryTemplateStore);

    #[async_trait]
    impl TemplateStore for StaleSlugLookup {
        async fn create_template(&self, document: TemplateDocument) -> Result<TemplateDocument> {
            self.0.create_template(document).await
        }

        async fn get_template(&self, id: &str) -> Result<Option<TemplateDocument>> {
            self.0.get_template(id).await
        }

        async fn get_template_by_slug(&self, _slug: &str) -> Result<Option<TemplateDocument>> {
            Ok(None)
        }

        async fn replace_template(&self, document: TemplateDocument) -> Result<TemplateDocument> {
            self.0.replace_template(document).await
        }

        async fn delete_template(&self, id: &str) -> Result<DeleteResult> {
            self.0.delete_template(id).await
        }

        async fn list_templates(&self) -> Result<Vec<TemplateDocument>> {
            self.0.list_templates().await
        }
    }

    #[tokio::test]
    async fn test_slug_conflict_detected_by_store_is_slug_taken() -> Result<()> {
        let store = Arc::new(StaleSlugLookup(InMemoryTemplateStore::new()));
        let service = TemplateService::new(store.clone(), EditorConfig::default())?;
        service.create_template("Home", "").await?;

        let err = service.create_template("Home", "").await.unwrap_err();
        assert!(matches!(err, TemplateServiceError::SlugTaken { ref slug } if slug == "home"));
        assert_eq!(store.0.len()?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_unsluggable_name_is_rejected() {
        let service = create_service();
        let doc = TemplateDocument::new("!!!".to_string(), String::new());

        let err = service.save(doc).await.unwrap_err();
        assert!(matches!(
            err,
            TemplateServiceError::ValidationFailed(ValidationError::MissingField(ref f))
                if f == "slug"
        ));
    }

    #[tokio::test]
    async fn test_unknown_id_is_created_under_that_id() -> Result<()> {
        let service = create_service();
        let mut doc = TemplateDocument::new("Imported".to_string(), String::new());
        doc.id = Some("legacy-42".to_string());

        let saved = service.save(doc).await?;
        assert_eq!(saved.id.as_deref(), Some("legacy-42"));
        assert!(service.load("legacy-42").await.is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn test_owner_is_stamped_from_config() -> Result<()> {
        let config = EditorConfig {
            owner_id: Some("staff-7".to_string()),
            ..EditorConfig::default()
        };
        let service = TemplateService::new(Arc::new(InMemoryTemplateStore::new()), config)?;

        let created = service.create_template("Gallery", "").await?;
        assert_eq!(created.owner_id.as_deref(), Some("staff-7"));
        Ok(())
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() -> Result<()> {
        let service = create_service();
        let created = service.create_template("Temp", "").await?;
        let id = created.id.unwrap();

        assert!(service.delete(&id).await?);
        assert!(!service.delete(&id).await?);
        assert!(matches!(
            service.load(&id).await,
            Err(TemplateServiceError::NotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_events_are_emitted() -> Result<()> {
        let service = create_service();
        let mut rx = service.subscribe_to_events();

        let created = service.create_template("Events", "").await?;
        service.save(created.clone()).await?;
        service.delete(created.id.as_deref().unwrap()).await?;
        let _ = service
            .save(TemplateDocument::new(" ".to_string(), String::new()))
            .await;

        let types: Vec<String> = (0..4)
            .map(|_| rx.try_recv().map(|e| e.event_type().to_string()))
            .collect::<Result<_, _>>()?;
        assert_eq!(
            types,
            vec![
                "template:created",
                "template:updated",
                "template:deleted",
                "template:save-failed"
            ]
        );
        Ok(())
    }

    #[tokio::test]
    async fn test_save_failure_reaches_editor_and_keeps_document() -> Result<()> {
        let store = Arc::new(InMemoryTemplateStore::new());
        let service = TemplateService::new(store.clone(), EditorConfig::default())?;
        service.create_template("Taken", "").await?;

        let mut session = service.new_session("Draft");
        session.rename_template("Taken".to_string());
        session.insert(ComponentKind::Text, &DropTarget::Root).unwrap();
        let before = session.document().clone();

        let err = session.save_to(&service).await.unwrap_err();
        assert!(matches!(err, EditorError::SaveFailed(_)));
        assert_eq!(session.document(), &before);
        assert_eq!(store.list_templates().await?.len(), 1);

        let mut rx = service.subscribe_to_events();
        session.rename_template("Draft".to_string());
        session.save_to(&service).await.unwrap();
        assert!(matches!(rx.try_recv()?, TemplateEvent::TemplateCreated(_)));
        Ok(())
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = EditorConfig {
            event_capacity: 0,
            ..EditorConfig::default()
        };
        let result = TemplateService::new(Arc::new(InMemoryTemplateStore::new()), config);
        assert!(matches!(result, Err(TemplateServiceError::Config(_))));
    }
}
