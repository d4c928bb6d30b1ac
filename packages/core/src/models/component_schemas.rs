//! Component Schema Registry
//!
//! Canonical catalog of the component types the editor ships with. These
//! schemas are fixed; users cannot add or modify them.
//!
//! The registry answers three questions:
//!
//! - what does a freshly inserted node of type X look like (`default_for`)
//! - which fields of type X are editable (`schema`)
//! - how is the palette grouped (`palette`)
//!
//! Site-wide colours and fonts come from the [`ThemeDefaults`] the registry is
//! built with rather than from constants, so two sites can share the binary.

use crate::config::ThemeDefaults;
use crate::models::component::ValidationError;
use crate::models::fields::FieldSpec;
use crate::models::kind::{ComponentCategory, ComponentKind, ComponentProps};
use serde::Serialize;

/// Static description of one component type
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSchema {
    #[serde(rename = "type")]
    pub kind: ComponentKind,
    pub name: &'static str,
    pub category: ComponentCategory,
    pub is_container: bool,
    pub fields: &'static [FieldSpec],
}

/// Name and props a new node of some type starts with
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentDefault {
    pub name: String,
    pub props: ComponentProps,
}

/// One palette section
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteGroup {
    pub category: ComponentCategory,
    pub label: &'static str,
    pub entries: Vec<ComponentSchema>,
}

/// Lookup table from type tag to schema and defaults
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    theme: ThemeDefaults,
}

impl SchemaRegistry {
    pub fn new(theme: ThemeDefaults) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &ThemeDefaults {
        &self.theme
    }

    /// Schema for a type
    pub fn schema(&self, kind: ComponentKind) -> ComponentSchema {
        ComponentSchema {
            kind,
            name: kind.display_name(),
            category: kind.category(),
            is_container: kind.is_container(),
            fields: kind.fields(),
        }
    }

    /// Every schema, in catalog order
    pub fn schemas(&self) -> Vec<ComponentSchema> {
        ComponentKind::ALL.iter().map(|kind| self.schema(*kind)).collect()
    }

    /// Default name and themed props for a new node of `kind`
    pub fn default_for(&self, kind: ComponentKind) -> ComponentDefault {
        let mut props = ComponentProps::default_for(kind);
        props.apply_theme(&self.theme);
        ComponentDefault {
            name: kind.display_name().to_string(),
            props,
        }
    }

    /// Like [`default_for`](Self::default_for) but keyed by the persisted tag
    ///
    /// # Errors
    ///
    /// `ValidationError::InvalidComponentType` for a tag outside the catalog.
    pub fn default_for_tag(&self, tag: &str) -> Result<ComponentDefault, ValidationError> {
        let kind: ComponentKind = tag.parse()?;
        Ok(self.default_for(kind))
    }

    /// Schemas grouped by category in palette order; empty groups are omitted
    pub fn palette(&self) -> Vec<PaletteGroup> {
        ComponentCategory::ALL
            .iter()
            .map(|category| PaletteGroup {
                category: *category,
                label: category.label(),
                entries: ComponentKind::ALL
                    .iter()
                    .filter(|kind| kind.category() == *category)
                    .map(|kind| self.schema(*kind))
                    .collect(),
            })
            .filter(|group| !group.entries.is_empty())
            .collect()
    }
}
