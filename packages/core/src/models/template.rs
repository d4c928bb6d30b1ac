//! Template Documents
//!
//! A `TemplateDocument` is the aggregate that gets persisted: a named,
//! slugged, ordered list of root components plus timestamps.
//!
//! # Examples
//!
//! ```rust
//! use sitedesk_core::models::{slugify, TemplateDocument};
//!
//! let doc = TemplateDocument::new("My Great Page!!".to_string(), String::new());
//! assert_eq!(doc.slug, "my-great-page");
//! assert!(doc.id.is_none());
//! assert_eq!(slugify("--Already--Slug--"), "already-slug");
//! ```

use crate::models::component::{ComponentNode, ValidationError};
use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Derive a URL-safe slug from a display name
///
/// Lowercases the name, replaces every run of characters outside `[a-z0-9]`
/// with a single `-`, and trims leading and trailing `-`.
pub fn slugify(name: &str) -> String {
    static NON_ALNUM: OnceLock<Regex> = OnceLock::new();
    let re = NON_ALNUM.get_or_init(|| Regex::new(r"[^a-z0-9]+").expect("valid slug regex"));

    re.replace_all(&name.to_lowercase(), "-")
        .trim_matches('-')
        .to_string()
}

/// A named template: the persisted unit of the component editor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateDocument {
    /// Store-assigned id; `None` until the first save
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub name: String,

    /// URL-safe key used to look the template up
    #[serde(default)]
    pub slug: String,

    #[serde(default)]
    pub description: String,

    /// Staff account that created the template
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,

    /// Root components in canvas order
    #[serde(default)]
    pub components: Vec<ComponentNode>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,
}

impl TemplateDocument {
    /// Create an unsaved, empty template with the slug derived from `name`
    pub fn new(name: String, description: String) -> Self {
        let now = Utc::now();
        Self {
            id: None,
            slug: slugify(&name),
            name,
            description,
            owner_id: None,
            components: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Rename the template
    ///
    /// The slug follows the name only while it is still the auto-derived one;
    /// a slug that was edited by hand is left alone.
    pub fn rename(&mut self, name: String) {
        if self.slug == slugify(&self.name) {
            self.slug = slugify(&name);
        }
        self.name = name;
    }

    /// Bump `updated_at` to now
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Depth-first, pre-order walk over every node of the tree
    pub fn iter(&self) -> ComponentIter<'_> {
        ComponentIter::new(&self.components)
    }

    /// Total number of nodes in the tree
    pub fn component_count(&self) -> usize {
        self.components.iter().map(ComponentNode::subtree_size).sum()
    }

    /// Deepest nesting level (0 for an empty template)
    pub fn depth(&self) -> usize {
        self.components
            .iter()
            .map(ComponentNode::height)
            .max()
            .unwrap_or(0)
    }

    /// Validate document-wide invariants
    ///
    /// # Errors
    ///
    /// - `MissingField("name")` if the name is blank
    /// - `MissingField("id")` for a node without id
    /// - `DuplicateComponentId` if two nodes share an id
    /// - `NestingTooDeep` if the tree is deeper than `max_depth`
    pub fn validate(&self, max_depth: usize) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name".to_string()));
        }

        let mut seen = HashSet::new();
        for node in self.iter() {
            node.validate()?;
            if !seen.insert(node.id.as_str()) {
                return Err(ValidationError::DuplicateComponentId(node.id.clone()));
            }
        }

        let depth = self.depth();
        if depth > max_depth {
            return Err(ValidationError::NestingTooDeep {
                depth,
                max: max_depth,
            });
        }

        Ok(())
    }
}

/// Pre-order iterator over a component forest
pub struct ComponentIter<'a> {
    stack: Vec<&'a ComponentNode>,
}

impl<'a> ComponentIter<'a> {
    pub fn new(roots: &'a [ComponentNode]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for ComponentIter<'a> {
    type Item = &'a ComponentNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}
