//! Tests for ComponentNode serialization and tolerant loading

#[cfg(test)]
mod tests {
    use crate::models::{
        ButtonProps, ComponentKind, ComponentNode, ComponentProps, EditableProps, ImageProps,
        TemplateDocument, ValidationError,
    };
    use serde_json::json;

    #[test]
    fn test_serialized_shape_keys_props_by_type() {
        let node = ComponentNode::new(
            "button-1".to_string(),
            ComponentProps::default_for(ComponentKind::Button),
        );
        let value = serde_json::to_value(&node).unwrap();

        assert_eq!(value["id"], "button-1");
        assert_eq!(value["type"], "button");
        assert_eq!(value["name"], "Button");
        assert_eq!(value["props"]["button"]["text"], "Click me");
        assert_eq!(value["props"].as_object().unwrap().len(), 1);
    }

    #[test]
    fn test_camel_case_tags_round_trip() {
        let node = ComponentNode::new(
            "iconSet-1".to_string(),
            ComponentProps::default_for(ComponentKind::IconSet),
        );
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(value["type"], "iconSet");
        assert!(value["props"]["iconSet"].is_object());

        let back: ComponentNode = serde_json::from_value(value).unwrap();
        assert_eq!(back, node);
    }

    #[test]
    fn test_props_key_matches_type_for_every_schema() {
        for kind in ComponentKind::ALL {
            let node = ComponentNode::new(
                format!("{}-1", kind),
                ComponentProps::default_for(*kind),
            );
            let value = serde_json::to_value(&node).unwrap();
            let props = value["props"].as_object().unwrap();
            assert!(props.contains_key(kind.as_str()), "{} missing own key", kind);

            let has_children = value["props"][kind.as_str()].get("children").is_some();
            assert_eq!(has_children, kind.is_container(), "{} children", kind);
        }
    }

    #[test]
    fn test_missing_props_object_defaults_from_schema() {
        let node: ComponentNode = serde_json::from_value(json!({
            "id": "image-1",
            "type": "image",
            "name": "Hero shot",
            "props": {}
        }))
        .unwrap();

        assert_eq!(node.name, "Hero shot");
        assert_eq!(node.props, ComponentProps::Image(ImageProps::default()));
    }

    #[test]
    fn test_missing_fields_default_individually() {
        let node: ComponentNode = serde_json::from_value(json!({
            "id": "image-2",
            "type": "image",
            "props": { "image": { "alt": "Team photo" } }
        }))
        .unwrap();

        match &node.props {
            ComponentProps::Image(image) => {
                assert_eq!(image.src, "");
                assert_eq!(image.alt, "Team photo");
                assert_eq!(image.object_fit, "cover");
            }
            other => panic!("Expected image props, got {:?}", other),
        }
        assert_eq!(node.name, "Image");
    }

    #[test]
    fn test_foreign_props_keys_are_ignored() {
        let node: ComponentNode = serde_json::from_value(json!({
            "id": "button-9",
            "type": "button",
            "props": {
                "button": { "text": "Go" },
                "style": { "margin": "4px" }
            }
        }))
        .unwrap();

        assert_eq!(node.props.get_field("text"), Some(json!("Go")));
    }

    #[test]
    fn test_nested_children_load_recursively() {
        let node: ComponentNode = serde_json::from_value(json!({
            "id": "grid-1",
            "type": "grid",
            "name": "Grid",
            "props": { "grid": { "columns": 2, "children": [
                { "id": "button-1", "type": "button", "name": "Button",
                  "props": { "button": { "text": "Buy Now" } } }
            ] } }
        }))
        .unwrap();

        assert_eq!(node.children().len(), 1);
        let child = &node.children()[0];
        assert_eq!(child.kind(), ComponentKind::Button);
        assert_eq!(child.props.get_field("text"), Some(json!("Buy Now")));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result: Result<ComponentNode, _> = serde_json::from_value(json!({
            "id": "marquee-1",
            "type": "marquee",
            "props": {}
        }));
        let err = result.unwrap_err().to_string();
        assert!(err.contains("Invalid component type: marquee"));
    }

    #[test]
    fn test_missing_id_is_rejected() {
        let result: Result<ComponentNode, _> = serde_json::from_value(json!({
            "type": "text",
            "props": {}
        }));
        assert!(result.unwrap_err().to_string().contains("Missing required field: id"));
    }

    #[test]
    fn test_wrongly_typed_field_falls_back_to_default() {
        let node: ComponentNode = serde_json::from_value(json!({
            "id": "text-1",
            "type": "text",
            "props": { "text": { "content": "Hi", "fontSize": "16px" } }
        }))
        .unwrap();
        assert_eq!(node.props.get_field("content"), Some(json!("Hi")));
        assert_eq!(node.props.get_field("fontSize"), Some(json!(16)));

        let button: ComponentNode = serde_json::from_value(json!({
            "id": "button-1",
            "type": "button",
            "props": { "button": { "text": "Go", "openInNewTab": "yes" } }
        }))
        .unwrap();
        assert_eq!(button.props.get_field("openInNewTab"), Some(json!(false)));
        assert_eq!(button.props.get_field("text"), Some(json!("Go")));
    }

    #[test]
    fn test_bad_field_inside_container_keeps_the_template_loadable() {
        let doc: TemplateDocument = serde_json::from_value(json!({
            "name": "Legacy",
            "slug": "legacy",
            "createdAt": "2023-04-01T10:00:00Z",
            "updatedAt": "2023-04-01T10:00:00Z",
            "components": [
                { "id": "grid-1", "type": "grid", "props": { "grid": {
                    "columns": "three",
                    "children": [
                        { "id": "text-1", "type": "text",
                          "props": { "text": { "fontSize": "16px" } } }
                    ]
                } } }
            ]
        }))
        .unwrap();
        assert_eq!(doc.component_count(), 2);
        assert_eq!(doc.components[0].props.get_field("columns"), Some(json!(3)));
    }

    #[test]
    fn test_invalid_child_still_fails_its_container() {
        let result: Result<ComponentNode, _> = serde_json::from_value(json!({
            "id": "grid-1",
            "type": "grid",
            "props": { "grid": { "children": [ { "id": "x-1", "type": "marquee" } ] } }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_subtree_size_and_height() {
        let mut container = ComponentNode::new(
            "container-1".to_string(),
            ComponentProps::default_for(ComponentKind::Container),
        );
        let mut grid = ComponentNode::new(
            "grid-1".to_string(),
            ComponentProps::default_for(ComponentKind::Grid),
        );
        grid.props.children_mut().unwrap().push(ComponentNode::new(
            "text-1".to_string(),
            ComponentProps::default_for(ComponentKind::Text),
        ));
        container.props.children_mut().unwrap().push(grid);

        assert_eq!(container.subtree_size(), 3);
        assert_eq!(container.height(), 3);
        assert!(container.is_container());
    }

    #[test]
    fn test_validate_requires_id() {
        let node = ComponentNode::with_name(
            String::new(),
            "Nameless".to_string(),
            ComponentProps::Button(ButtonProps::default()),
        );
        assert_eq!(
            node.validate(),
            Err(ValidationError::MissingField("id".to_string()))
        );
        assert_eq!(ButtonProps::FIELDS[0].key, "text");
    }
}
