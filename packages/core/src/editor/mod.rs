//! Component Template Editor
//!
//! - [`session`] - live document, selection state and edit dispatch
//! - [`drag`] - palette drag payloads and drop zones
//! - [`property_editor`] - typed field reads and writes
//! - [`commands`] - edits as serializable data
//! - [`host`] - save/cancel handoff to the persistence layer

pub mod commands;
pub mod drag;
pub mod error;
pub mod host;
pub mod property_editor;
pub mod session;

pub use commands::EditorCommand;
pub use drag::{drop_zones, DragPayload, DragState, DropTarget};
pub use error::EditorError;
pub use host::EditorHost;
pub use session::{EditorSession, EditorState};
