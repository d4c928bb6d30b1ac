//! End-to-end editor workflows: compose, edit, save, reload
//!
//! These tests drive the public API the way an admin dashboard host does:
//! open a session, apply edits (directly and as JSON commands), hand the
//! session to the service for saving, and reload.

use anyhow::Result;
use serde_json::json;
use sitedesk_core::db::{InMemoryTemplateStore, TemplateEvent, TemplateStore};
use sitedesk_core::editor::{drop_zones, property_editor};
use sitedesk_core::models::{ComponentKind, SchemaRegistry, TemplateDocument};
use sitedesk_core::{
    DropTarget, EditorCommand, EditorConfig, EditorState, TemplateService, ThemeDefaults,
};
use std::sync::Arc;

fn create_service() -> (TemplateService, Arc<InMemoryTemplateStore>) {
    let store = Arc::new(InMemoryTemplateStore::new());
    let service = TemplateService::new(store.clone(), EditorConfig::default()).unwrap();
    (service, store)
}

#[tokio::test]
async fn test_compose_landing_page_and_reload() -> Result<()> {
    let (service, _store) = create_service();
    let created = service.create_template("Spring Landing", "Seasonal campaign").await?;

    let mut session = service.open_session(&created.slug).await?;
    let hero = session.insert(ComponentKind::Hero, &DropTarget::Root)?;
    let columns = session.insert(ComponentKind::Columns, &DropTarget::Root)?;
    let left = session.insert(
        ComponentKind::Paragraph,
        &DropTarget::container(vec![columns.clone()]),
    )?;
    session.insert(ComponentKind::Image, &DropTarget::container(vec![columns.clone()]))?;
    session.insert(ComponentKind::Pricing, &DropTarget::Root)?;

    session.select(&hero)?;
    session.set_selected_property("title", json!("Spring Sale"))?;
    session.set_property_path(&left, "props.paragraph.text", json!("Fresh deals every day."))?;

    let saved_created_at = created.created_at;
    session.save_to(&service).await?;
    assert_eq!(session.state(), &EditorState::Idle);
    assert!(!session.is_dirty());

    let reloaded = service.load_by_slug("spring-landing").await?;
    assert_eq!(reloaded.created_at, saved_created_at);
    assert_eq!(reloaded.component_count(), 5);
    assert_eq!(reloaded.components, session.document().components);

    let json = serde_json::to_value(&reloaded)?;
    assert_eq!(json["components"][0]["props"]["hero"]["title"], "Spring Sale");
    assert_eq!(
        json["components"][1]["props"]["columns"]["children"][0]["props"]["paragraph"]["text"],
        "Fresh deals every day."
    );
    Ok(())
}

#[tokio::test]
async fn test_legacy_document_loads_with_defaults() -> Result<()> {
    let (service, store) = create_service();

    let legacy: TemplateDocument = serde_json::from_value(json!({
        "id": "legacy-1",
        "name": "Old Gallery",
        "slug": "old-gallery",
        "createdAt": "2023-04-01T10:00:00Z",
        "updatedAt": "2023-04-01T10:00:00Z",
        "components": [
            { "id": "image-1", "type": "image", "props": {} },
            { "id": "grid-1", "type": "grid", "name": "Photos",
              "props": { "grid": { "children": [
                  { "id": "button-1", "type": "button", "props": { "button": { "text": "More" } } }
              ] } } }
        ]
    }))?;
    store.create_template(legacy).await?;

    let session = service.open_session("old-gallery").await?;
    let image = session.find("image-1").unwrap();
    assert_eq!(image.name, "Image");
    assert_eq!(property_editor::read(image, "src")?, json!(""));

    let grid = session.find("grid-1").unwrap();
    assert_eq!(property_editor::read(grid, "columns")?, json!(3));
    assert_eq!(
        property_editor::read(&grid.children()[0], "url")?,
        json!("#")
    );
    Ok(())
}

#[tokio::test]
async fn test_drop_zones_drive_inserts() -> Result<()> {
    let (service, _store) = create_service();
    let mut session = service.new_session("Zones");
    assert_eq!(drop_zones(&session.document().components), vec![DropTarget::Root]);

    let container = session.insert(ComponentKind::Container, &DropTarget::Root)?;
    session.insert(ComponentKind::Grid, &DropTarget::container(vec![container.clone()]))?;

    let zones = drop_zones(&session.document().components);
    assert_eq!(zones.len(), 3);

    for zone in &zones {
        session.begin_drag(ComponentKind::Badge);
        session.hover(zone.clone());
        session.drop_on(zone)?;
    }
    assert_eq!(session.document().component_count(), 5);
    Ok(())
}

#[tokio::test]
async fn test_json_commands_round_trip_through_session() -> Result<()> {
    let (service, _store) = create_service();
    let mut session = service.new_session("Commands");

    let insert: EditorCommand =
        serde_json::from_str(r#"{ "op": "insert", "kind": "alert" }"#)?;
    let id = session.apply(insert)?.unwrap();

    let commands = vec![
        json!({ "op": "select", "id": id }),
        json!({
            "op": "setProperty",
            "id": id,
            "key": "message",
            "value": "Site maintenance at 9pm"
        }),
        json!({ "op": "rename", "id": id, "name": "Maintenance banner" }),
    ];
    for command in commands {
        session.apply(serde_json::from_value(command)?)?;
    }

    let node = session.selected_node().unwrap();
    assert_eq!(node.name, "Maintenance banner");
    assert_eq!(
        property_editor::read(node, "message")?,
        json!("Site maintenance at 9pm")
    );

    session.apply(serde_json::from_value(json!({ "op": "delete", "id": id }))?)?;
    assert_eq!(session.state(), &EditorState::Idle);
    Ok(())
}

#[tokio::test]
async fn test_theme_flows_from_config_into_new_nodes() -> Result<()> {
    let config = EditorConfig {
        theme: ThemeDefaults {
            primary_color: "#e11d48".to_string(),
            ..ThemeDefaults::default()
        },
        ..EditorConfig::default()
    };
    let service = TemplateService::new(Arc::new(InMemoryTemplateStore::new()), config)?;
    let mut session = service.new_session("Themed");

    let button = session.insert(ComponentKind::Button, &DropTarget::Root)?;
    let node = session.find(&button).unwrap();
    assert_eq!(
        property_editor::read(node, "backgroundColor")?,
        json!("#e11d48")
    );

    let registry = SchemaRegistry::new(service.config().theme.clone());
    assert_eq!(registry.palette().len(), 7);
    Ok(())
}

#[tokio::test]
async fn test_subscribers_see_save_notifications() -> Result<()> {
    let (service, _store) = create_service();
    let mut rx = service.subscribe_to_events();

    let mut session = service.new_session("Notify");
    session.insert(ComponentKind::Text, &DropTarget::Root)?;
    session.save_to(&service).await?;
    session.insert(ComponentKind::Divider, &DropTarget::Root)?;
    session.save_to(&service).await?;

    let first = rx.recv().await?;
    let second = rx.recv().await?;
    assert!(matches!(first, TemplateEvent::TemplateCreated(_)));
    assert_eq!(second.notification(), "Template \"Notify\" saved");
    Ok(())
}

#[test]
fn test_delete_from_sync_context() {
    let (service, _store) = create_service();
    let existed = tokio_test::block_on(async {
        let created = service.create_template("Sync", "").await.unwrap();
        service.delete(created.id.as_deref().unwrap()).await.unwrap()
    });
    assert!(existed);
}
