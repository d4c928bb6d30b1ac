//! Editor commands as data
//!
//! Hosts that talk to the editor over a message channel (IPC, websocket)
//! send these instead of calling session methods directly.
//!
//! ```json
//! { "op": "insert", "kind": "button", "target": { "zone": "container", "path": ["grid-1"] } }
//! { "op": "setProperty", "id": "button-1", "key": "text", "value": "Buy Now" }
//! ```

use crate::editor::drag::DropTarget;
use crate::models::{ComponentKind, ComponentNode};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum EditorCommand {
    Select {
        id: String,
    },
    Deselect,
    Insert {
        kind: ComponentKind,
        #[serde(default)]
        target: DropTarget,
    },
    Delete {
        id: String,
    },
    Replace {
        id: String,
        node: ComponentNode,
    },
    SetProperty {
        id: String,
        key: String,
        value: Value,
    },
    /// Legacy dot-path form, e.g. `props.button.text`
    SetPropertyPath {
        id: String,
        path: String,
        value: Value,
    },
    Rename {
        id: String,
        name: String,
    },
}

impl EditorCommand {
    /// Whether applying the command can change the document
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Self::Select { .. } | Self::Deselect)
    }
}
