//! Data Models
//!
//! This module contains the core data structures of the component editor:
//!
//! - `ComponentNode` - one node of a template's component tree
//! - `ComponentKind` / `ComponentProps` - closed set of type tags and the
//!   typed property union keyed by them
//! - `TemplateDocument` - the persisted aggregate (name, slug, root components)
//! - `SchemaRegistry` - defaults, editable fields and palette per type

mod component;
mod component_schemas;
mod fields;
mod kind;
mod props;
mod template;

pub use component::{ComponentNode, ValidationError};
pub use component_schemas::{ComponentDefault, ComponentSchema, PaletteGroup, SchemaRegistry};
pub use fields::{EditableProps, FieldKind, FieldSpec, PropertyError};
pub use kind::{ComponentCategory, ComponentKind, ComponentProps};
pub use props::*;
pub use template::{slugify, ComponentIter, TemplateDocument};
