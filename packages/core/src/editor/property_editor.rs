//! Property Editor
//!
//! Reads and writes individual fields of a node's typed property record. The
//! field list of a type is fixed by its schema; values travel as JSON and must
//! deserialize into the field's Rust type.
//!
//! [`set_property_path`] accepts the dot paths older hosts send
//! (`"props.button.text"`, `"name"`) and resolves them to the same typed
//! assignment.

use crate::models::{ComponentNode, FieldSpec, PropertyError};
use serde_json::Value;

/// Editable fields of the node's type, in panel order
pub fn fields_for(node: &ComponentNode) -> &'static [FieldSpec] {
    node.kind().fields()
}

/// Current value of a property field
pub fn read(node: &ComponentNode, key: &str) -> Result<Value, PropertyError> {
    node.props
        .get_field(key)
        .ok_or_else(|| PropertyError::unknown_field(key))
}

/// Assign one property field
///
/// # Errors
///
/// - `UnknownField` if the type has no field `key`
/// - `InvalidValue` if `value` does not fit the field's type
pub fn set_property(
    node: &mut ComponentNode,
    key: &str,
    value: Value,
) -> Result<(), PropertyError> {
    node.props.set_field(key, value)
}

/// Assign a value addressed by a dot path
///
/// Supported forms:
///
/// - `name` - the node's display label (must be a string)
/// - `props.<type>.<field>` - a property field; `<type>` must be the node's type
/// - `props.<type>.<field>.<index|key>...` - an element inside a list or record
///   field, e.g. `props.pricing.plans.1.price`
pub fn set_property_path(
    node: &mut ComponentNode,
    path: &str,
    value: Value,
) -> Result<(), PropertyError> {
    let segments: Vec<&str> = path.split('.').collect();

    match segments.as_slice() {
        ["name"] => match value {
            Value::String(name) => {
                node.name = name;
                Ok(())
            }
            other => Err(PropertyError::InvalidValue {
                key: "name".to_string(),
                message: format!("expected a string, got {}", other),
            }),
        },
        ["props", kind, field, rest @ ..] if !field.is_empty() => {
            if *kind != node.kind().as_str() {
                return Err(PropertyError::KindMismatch {
                    expected: node.kind().to_string(),
                    found: kind.to_string(),
                });
            }

            if rest.is_empty() {
                return set_property(node, field, value);
            }

            let mut current = read(node, field)?;
            let pointer = format!("/{}", rest.join("/"));
            let slot = current
                .pointer_mut(&pointer)
                .ok_or_else(|| PropertyError::InvalidPath(path.to_string()))?;
            *slot = value;
            set_property(node, field, current)
        }
        _ => Err(PropertyError::InvalidPath(path.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComponentKind, ComponentProps, FieldKind};
    use serde_json::json;

    fn node(kind: ComponentKind) -> ComponentNode {
        ComponentNode::new(format!("{}-1", kind), ComponentProps::default_for(kind))
    }

    #[test]
    fn test_fields_follow_node_type() {
        let button = node(ComponentKind::Button);
        let keys: Vec<&str> = fields_for(&button).iter().map(|f| f.key).collect();
        assert!(keys.contains(&"text"));
        assert!(keys.contains(&"backgroundColor"));

        let grid = node(ComponentKind::Grid);
        assert!(fields_for(&grid).iter().all(|f| f.key != "children"));
        assert!(fields_for(&grid)
            .iter()
            .any(|f| f.key == "columns" && f.kind == FieldKind::Number));
    }

    #[test]
    fn test_set_and_read_typed_field() {
        let mut button = node(ComponentKind::Button);
        set_property(&mut button, "text", json!("Buy Now")).unwrap();
        assert_eq!(read(&button, "text").unwrap(), json!("Buy Now"));
    }

    #[test]
    fn test_wrong_value_type_is_rejected() {
        let mut grid = node(ComponentKind::Grid);
        let before = grid.clone();

        let err = set_property(&mut grid, "columns", json!("three")).unwrap_err();
        assert!(matches!(err, PropertyError::InvalidValue { ref key, .. } if key == "columns"));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let mut text = node(ComponentKind::Text);
        assert_eq!(
            set_property(&mut text, "href", json!("/")),
            Err(PropertyError::unknown_field("href"))
        );
        assert_eq!(read(&text, "href"), Err(PropertyError::unknown_field("href")));
    }

    #[test]
    fn test_dot_path_sets_field() {
        let mut button = node(ComponentKind::Button);
        set_property_path(&mut button, "props.button.text", json!("Buy Now")).unwrap();
        assert_eq!(read(&button, "text").unwrap(), json!("Buy Now"));
    }

    #[test]
    fn test_dot_path_type_segment_must_match() {
        let mut button = node(ComponentKind::Button);
        let err = set_property_path(&mut button, "props.image.src", json!("a.png")).unwrap_err();
        assert_eq!(
            err,
            PropertyError::KindMismatch {
                expected: "button".to_string(),
                found: "image".to_string()
            }
        );
    }

    #[test]
    fn test_dot_path_name_sets_label() {
        let mut hero = node(ComponentKind::Hero);
        set_property_path(&mut hero, "name", json!("Top banner")).unwrap();
        assert_eq!(hero.name, "Top banner");

        assert!(set_property_path(&mut hero, "name", json!(42)).is_err());
    }

    #[test]
    fn test_dot_path_into_list_element() {
        let mut pricing = node(ComponentKind::Pricing);
        set_property_path(&mut pricing, "props.pricing.plans.1.price", json!("49")).unwrap();
        assert_eq!(read(&pricing, "plans").unwrap()[1]["price"], json!("49"));

        let err = set_property_path(&mut pricing, "props.pricing.plans.7.price", json!("1"))
            .unwrap_err();
        assert!(matches!(err, PropertyError::InvalidPath(_)));
    }

    #[test]
    fn test_malformed_paths() {
        let mut text = node(ComponentKind::Text);
        for path in ["", "props", "props.text", "props.text.", "id", "style.color"] {
            assert!(
                matches!(
                    set_property_path(&mut text, path, json!("x")),
                    Err(PropertyError::InvalidPath(_))
                ),
                "{} should be invalid",
                path
            );
        }
    }
}
