//! Drag-Insert Protocol
//!
//! Components enter a template by dragging a palette entry onto a drop zone.
//! Every template has a root zone (append to the top level) and one trailing
//! zone per container (append to that container's children).
//!
//! Drag state is presentational only: it tracks what is being dragged and
//! which zone is hovered so a host can highlight it. The structural edit
//! happens when the drop is handed to the session.

use crate::editor::error::EditorError;
use crate::models::{ComponentKind, ComponentNode, ComponentProps, SchemaRegistry};
use serde::{Deserialize, Serialize};

/// What a palette drag carries
#[derive(Debug, Clone, PartialEq)]
pub struct DragPayload {
    pub kind: ComponentKind,
    pub name: String,
    pub props: ComponentProps,
}

impl DragPayload {
    /// Payload for the palette entry of `kind`, with themed defaults
    pub fn from_palette(registry: &SchemaRegistry, kind: ComponentKind) -> Self {
        let default = registry.default_for(kind);
        Self {
            kind,
            name: default.name,
            props: default.props,
        }
    }

    /// Materialize the dragged component under a fresh id
    pub fn into_node(self, id: String) -> ComponentNode {
        ComponentNode::with_name(id, self.name, self.props)
    }
}

/// Where a dragged component can land
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "zone", rename_all = "camelCase")]
pub enum DropTarget {
    /// Append to the template's root sequence
    #[default]
    Root,
    /// Append to the children of the container at `path` (ids root first)
    Container { path: Vec<String> },
}

impl DropTarget {
    pub fn container(path: Vec<String>) -> Self {
        if path.is_empty() {
            Self::Root
        } else {
            Self::Container { path }
        }
    }

    /// Container path; empty for the root zone
    pub fn path(&self) -> &[String] {
        match self {
            Self::Root => &[],
            Self::Container { path } => path,
        }
    }

    /// Depth a node dropped here ends up at (root level is 1)
    pub fn landing_depth(&self) -> usize {
        self.path().len() + 1
    }
}

/// Every drop zone of a template: the root zone first, then each container's
/// trailing zone in depth-first order
pub fn drop_zones(roots: &[ComponentNode]) -> Vec<DropTarget> {
    let mut zones = vec![DropTarget::Root];
    collect_zones(roots, &mut Vec::new(), &mut zones);
    zones
}

fn collect_zones(nodes: &[ComponentNode], prefix: &mut Vec<String>, zones: &mut Vec<DropTarget>) {
    for node in nodes.iter().filter(|node| node.is_container()) {
        prefix.push(node.id.clone());
        zones.push(DropTarget::Container {
            path: prefix.clone(),
        });
        collect_zones(node.children(), prefix, zones);
        prefix.pop();
    }
}

/// In-flight drag of a palette entry
#[derive(Debug, Clone, Default)]
pub struct DragState {
    payload: Option<DragPayload>,
    hovered: Option<DropTarget>,
}

impl DragState {
    pub fn begin(&mut self, payload: DragPayload) {
        self.payload = Some(payload);
        self.hovered = None;
    }

    pub fn hover(&mut self, target: DropTarget) {
        if self.payload.is_some() {
            self.hovered = Some(target);
        }
    }

    /// Pointer left every zone
    pub fn leave(&mut self) {
        self.hovered = None;
    }

    pub fn cancel(&mut self) {
        self.payload = None;
        self.hovered = None;
    }

    pub fn is_dragging(&self) -> bool {
        self.payload.is_some()
    }

    pub fn payload(&self) -> Option<&DragPayload> {
        self.payload.as_ref()
    }

    pub fn hovered(&self) -> Option<&DropTarget> {
        self.hovered.as_ref()
    }

    /// End the drag, handing back its payload
    pub fn finish(&mut self) -> Result<DragPayload, EditorError> {
        self.hovered = None;
        self.payload.take().ok_or(EditorError::NoActiveDrag)
    }
}
