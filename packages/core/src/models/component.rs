//! Component Node
//!
//! A template is a tree of `ComponentNode`s. Each node has an id, a display
//! name and a typed property record; the node's type tag is derived from the
//! record, so a node can never carry props for a type other than its own.
//!
//! # Persisted Shape
//!
//! ```json
//! {
//!   "id": "grid-7f9c...",
//!   "type": "grid",
//!   "name": "Grid",
//!   "props": {
//!     "grid": {
//!       "columns": 3,
//!       "gap": 16,
//!       "children": [
//!         { "id": "button-1a2b...", "type": "button", "name": "Button",
//!           "props": { "button": { "text": "Buy Now" } } }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Nodes written by older schema versions are tolerated: a missing
//! `props.<type>` object or missing fields fall back to schema defaults, and
//! a missing `name` falls back to the type's display name.
//!
//! # Examples
//!
//! ```rust
//! use sitedesk_core::models::{ComponentKind, ComponentNode, ComponentProps};
//!
//! let node = ComponentNode::new(
//!     "text-1".to_string(),
//!     ComponentProps::default_for(ComponentKind::Text),
//! );
//! assert_eq!(node.kind(), ComponentKind::Text);
//! assert_eq!(node.name, "Text");
//! ```

use crate::models::kind::{ComponentKind, ComponentProps};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::convert::TryFrom;
use thiserror::Error;

/// Validation errors for component and template data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid component type: {0}")]
    InvalidComponentType(String),

    #[error("Properties validation failed: {0}")]
    InvalidProperties(String),

    #[error("Duplicate component id: {0}")]
    DuplicateComponentId(String),

    #[error("Component nesting depth {depth} exceeds maximum of {max}")]
    NestingTooDeep { depth: usize, max: usize },
}

/// One node of a template's component tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawComponentNode")]
pub struct ComponentNode {
    /// Unique within one template document
    pub id: String,

    /// Display label shown in the canvas outline
    pub name: String,

    /// Typed property record (also determines the node's type)
    pub props: ComponentProps,
}

impl ComponentNode {
    /// Create a node named after its type's display name
    pub fn new(id: String, props: ComponentProps) -> Self {
        let name = props.kind().display_name().to_string();
        Self { id, name, props }
    }

    /// Create a node with an explicit display name
    pub fn with_name(id: String, name: String, props: ComponentProps) -> Self {
        Self { id, name, props }
    }

    pub fn kind(&self) -> ComponentKind {
        self.props.kind()
    }

    pub fn is_container(&self) -> bool {
        self.kind().is_container()
    }

    /// Direct children (empty for leaf types)
    pub fn children(&self) -> &[ComponentNode] {
        self.props.children().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes in this subtree, including this node
    pub fn subtree_size(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ComponentNode::subtree_size)
            .sum::<usize>()
    }

    /// Height of this subtree (a leaf has height 1)
    pub fn height(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(ComponentNode::height)
            .max()
            .unwrap_or(0)
    }

    /// Validate this node (not its descendants)
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }
        Ok(())
    }
}

impl Serialize for ComponentNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ComponentNode", 4)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", &self.kind())?;
        state.serialize_field("name", &self.name)?;
        state.serialize_field("props", &self.props)?;
        state.end()
    }
}

/// Wire form of a node before type dispatch
#[derive(Debug, Deserialize)]
struct RawComponentNode {
    #[serde(default)]
    id: String,
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    props: Value,
}

impl TryFrom<RawComponentNode> for ComponentNode {
    type Error = ValidationError;

    fn try_from(raw: RawComponentNode) -> Result<Self, Self::Error> {
        if raw.id.is_empty() {
            return Err(ValidationError::MissingField("id".to_string()));
        }

        let kind: ComponentKind = raw.kind.parse()?;

        let body = match raw.props {
            Value::Object(mut map) => map.remove(kind.as_str()).unwrap_or(Value::Null),
            Value::Null => Value::Null,
            other => {
                return Err(ValidationError::InvalidProperties(format!(
                    "props of '{}' must be an object, got {}",
                    raw.id, other
                )))
            }
        };

        let props = match body {
            Value::Null => ComponentProps::default_for(kind),
            value @ Value::Object(_) => ComponentProps::from_value(kind, value).map_err(|e| {
                ValidationError::InvalidProperties(format!("{} ({}): {}", raw.id, kind, e))
            })?,
            other => {
                return Err(ValidationError::InvalidProperties(format!(
                    "props.{} of '{}' must be an object, got {}",
                    kind, raw.id, other
                )))
            }
        };

        let name = raw
            .name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| kind.display_name().to_string());

        Ok(Self {
            id: raw.id,
            name,
            props,
        })
    }
}

// Comprehensive tests in separate module
#[cfg(test)]
#[path = "component_test.rs"]
mod component_test;
