//! SiteDesk Core - Component Template Editor
//!
//! This crate provides the visual component-template editor of the SiteDesk
//! admin dashboard: staff compose a tree of typed UI components into a named
//! template, edit each component's properties, and save the template through
//! a document store.
//!
//! # Architecture
//!
//! - **Closed component catalog**: 35 component types, each with a typed
//!   property record (`ComponentProps` is a tagged union keyed by type)
//! - **Tolerant persistence**: documents written by older schema versions load
//!   with schema defaults for anything missing
//! - **All-or-nothing edits**: structural edits either apply fully or return an
//!   error with the tree unchanged
//! - **Explicit configuration**: owner, id scheme and theme come from
//!   [`config::EditorConfig`], never from globals
//!
//! # Modules
//!
//! - [`models`] - Component nodes, property records, templates, schema registry
//! - [`operations`] - Structural tree operations
//! - [`editor`] - Editor session, drag-insert protocol, property editor
//! - [`db`] - `TemplateStore` trait and backends
//! - [`services`] - `TemplateService` (load/save/delete, events)
//! - [`config`] - Editor configuration

pub mod config;
pub mod db;
pub mod editor;
pub mod models;
pub mod operations;
pub mod services;

// Re-export commonly used types
pub use config::{ConfigError, EditorConfig, IdStrategy, ThemeDefaults};
pub use editor::{DropTarget, EditorCommand, EditorError, EditorHost, EditorSession, EditorState};
pub use models::{
    ComponentKind, ComponentNode, ComponentProps, SchemaRegistry, TemplateDocument,
    ValidationError,
};
pub use operations::TreeError;
pub use services::{TemplateService, TemplateServiceError};
