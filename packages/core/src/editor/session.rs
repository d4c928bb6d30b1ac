//! Editor Session
//!
//! An `EditorSession` owns the live document of one template editor and the
//! selection state:
//!
//! ```text
//!   Idle --select(x)--> Editing{x} --select(y)--> Editing{y}
//!     ^                    |
//!     +-- deselect / delete(x or ancestor) / save / cancel
//! ```
//!
//! All edits are synchronous and apply to the live tree immediately. Only
//! save and cancel go through the async [`EditorHost`].

use crate::config::EditorConfig;
use crate::editor::commands::EditorCommand;
use crate::editor::drag::{DragPayload, DragState, DropTarget};
use crate::editor::error::EditorError;
use crate::editor::host::EditorHost;
use crate::editor::property_editor;
use crate::models::{ComponentIter, ComponentKind, ComponentNode, SchemaRegistry, TemplateDocument};
use crate::operations::{self, TreeError};
use serde_json::Value;

/// Selection state of the editor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Editing { node_id: String },
}

pub struct EditorSession {
    document: TemplateDocument,
    state: EditorState,
    drag: DragState,
    registry: SchemaRegistry,
    config: EditorConfig,
    dirty: bool,
}

impl EditorSession {
    pub fn new(document: TemplateDocument, config: EditorConfig) -> Self {
        Self {
            document,
            state: EditorState::Idle,
            drag: DragState::default(),
            registry: SchemaRegistry::new(config.theme.clone()),
            config,
            dirty: false,
        }
    }

    pub fn document(&self) -> &TemplateDocument {
        &self.document
    }

    pub fn into_document(self) -> TemplateDocument {
        self.document
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn drag(&self) -> &DragState {
        &self.drag
    }

    /// Unsaved edits since the session was opened or last saved
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn selected_id(&self) -> Option<&str> {
        match &self.state {
            EditorState::Idle => None,
            EditorState::Editing { node_id } => Some(node_id),
        }
    }

    pub fn selected_node(&self) -> Option<&ComponentNode> {
        self.selected_id()
            .and_then(|id| operations::find_node(&self.document.components, id))
    }

    pub fn find(&self, id: &str) -> Option<&ComponentNode> {
        operations::find_node(&self.document.components, id)
    }

    // ---- selection ----

    /// Select a node for property editing (re-selecting switches the target)
    pub fn select(&mut self, id: &str) -> Result<(), EditorError> {
        if self.find(id).is_none() {
            return Err(TreeError::node_not_found(id).into());
        }
        tracing::debug!("Selected component {}", id);
        self.state = EditorState::Editing {
            node_id: id.to_string(),
        };
        Ok(())
    }

    pub fn deselect(&mut self) {
        self.state = EditorState::Idle;
    }

    // ---- structural edits ----

    /// A fresh node of `kind` with themed defaults and a new id
    pub fn new_node(&self, kind: ComponentKind) -> ComponentNode {
        let default = self.registry.default_for(kind);
        let id = self.config.id_strategy.next_id(kind);
        ComponentNode::with_name(id, default.name, default.props)
    }

    /// Insert a default node of `kind` at `target`, returning its id
    pub fn insert(
        &mut self,
        kind: ComponentKind,
        target: &DropTarget,
    ) -> Result<String, EditorError> {
        let node = self.new_node(kind);
        let id = node.id.clone();
        self.insert_node(node, target)?;
        Ok(id)
    }

    /// Insert a prepared node (and its subtree) at `target`
    ///
    /// The target path is resolved before the depth limit is checked, so a
    /// stale path reports `PathNotFound`.
    pub fn insert_node(
        &mut self,
        node: ComponentNode,
        target: &DropTarget,
    ) -> Result<(), EditorError> {
        operations::resolve_path(&self.document.components, target.path())?;
        let depth = target.path().len() + node.height();
        if depth > self.config.max_depth {
            return Err(EditorError::DepthExceeded {
                depth,
                max: self.config.max_depth,
            });
        }

        let id = node.id.clone();
        operations::insert_into_container(&mut self.document.components, target.path(), node)?;
        tracing::debug!("Inserted component {} at {:?}", id, target);
        self.dirty = true;
        Ok(())
    }

    /// Remove a node and its subtree
    ///
    /// If the selected node is removed (directly or through an ancestor) the
    /// editor returns to `Idle`.
    pub fn delete(&mut self, id: &str) -> Result<ComponentNode, EditorError> {
        let removed = operations::delete_node(&mut self.document.components, id)?;

        if let Some(selected) = self.selected_id() {
            if ComponentIter::new(std::slice::from_ref(&removed)).any(|node| node.id == selected) {
                self.state = EditorState::Idle;
            }
        }

        tracing::debug!("Deleted component {} ({} nodes)", id, removed.subtree_size());
        self.dirty = true;
        Ok(removed)
    }

    pub fn delete_selected(&mut self) -> Result<ComponentNode, EditorError> {
        let id = self
            .selected_id()
            .ok_or(EditorError::NothingSelected)?
            .to_string();
        self.delete(&id)
    }

    /// Replace a node in place, returning the previous one
    pub fn replace(&mut self, id: &str, node: ComponentNode) -> Result<ComponentNode, EditorError> {
        let parent_depth = operations::depth_of(&self.document.components, id)
            .ok_or_else(|| TreeError::node_not_found(id))?
            - 1;
        let depth = parent_depth + node.height();
        if depth > self.config.max_depth {
            return Err(EditorError::DepthExceeded {
                depth,
                max: self.config.max_depth,
            });
        }

        let previous = operations::replace_node(&mut self.document.components, id, node)?;

        if self.selected_node().is_none() {
            self.state = EditorState::Idle;
        }

        tracing::debug!("Replaced component {}", id);
        self.dirty = true;
        Ok(previous)
    }

    // ---- drag and drop ----

    pub fn begin_drag(&mut self, kind: ComponentKind) {
        let payload = DragPayload::from_palette(&self.registry, kind);
        self.drag.begin(payload);
    }

    pub fn hover(&mut self, target: DropTarget) {
        self.drag.hover(target);
    }

    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Complete the active drag on `target`, returning the new node's id
    ///
    /// The drag ends whether or not the insert succeeds.
    pub fn drop_on(&mut self, target: &DropTarget) -> Result<String, EditorError> {
        let payload = self.drag.finish()?;
        let id = self.config.id_strategy.next_id(payload.kind);
        self.insert_node(payload.into_node(id.clone()), target)?;
        Ok(id)
    }

    // ---- property edits ----

    pub fn rename(&mut self, id: &str, name: String) -> Result<(), EditorError> {
        let node = self.node_mut(id)?;
        node.name = name;
        self.dirty = true;
        Ok(())
    }

    pub fn set_property(&mut self, id: &str, key: &str, value: Value) -> Result<(), EditorError> {
        let node = self.node_mut(id)?;
        property_editor::set_property(node, key, value)?;
        tracing::debug!("Set {}.{}", id, key);
        self.dirty = true;
        Ok(())
    }

    pub fn set_property_path(
        &mut self,
        id: &str,
        path: &str,
        value: Value,
    ) -> Result<(), EditorError> {
        let node = self.node_mut(id)?;
        property_editor::set_property_path(node, path, value)?;
        tracing::debug!("Set {} via path {}", id, path);
        self.dirty = true;
        Ok(())
    }

    /// Set a field on the selected node
    pub fn set_selected_property(&mut self, key: &str, value: Value) -> Result<(), EditorError> {
        let id = self
            .selected_id()
            .ok_or(EditorError::NothingSelected)?
            .to_string();
        self.set_property(&id, key, value)
    }

    // ---- template metadata ----

    pub fn rename_template(&mut self, name: String) {
        self.document.rename(name);
        self.dirty = true;
    }

    pub fn set_description(&mut self, description: String) {
        self.document.description = description;
        self.dirty = true;
    }

    // ---- host handoff ----

    /// Validate and hand the document to the host for persistence
    ///
    /// On success the session adopts the stored document (id, timestamps),
    /// clears the dirty flag and returns to `Idle`. On failure the document
    /// and selection are left as they were so the user can retry.
    pub async fn save_to(
        &mut self,
        host: &dyn EditorHost,
    ) -> Result<&TemplateDocument, EditorError> {
        self.document.validate(self.config.max_depth)?;

        match host.on_save(self.document.clone()).await {
            Ok(saved) => {
                tracing::info!("Saved template '{}'", saved.slug);
                self.document = saved;
                self.dirty = false;
                self.state = EditorState::Idle;
                self.drag.cancel();
                Ok(&self.document)
            }
            Err(e) => {
                tracing::warn!("Saving template '{}' failed: {}", self.document.slug, e);
                Err(EditorError::SaveFailed(e.to_string()))
            }
        }
    }

    /// Abandon the edit and notify the host
    pub async fn cancel_to(&mut self, host: &dyn EditorHost) -> Result<(), EditorError> {
        self.state = EditorState::Idle;
        self.drag.cancel();
        host.on_cancel()
            .await
            .map_err(|e| EditorError::CancelFailed(e.to_string()))
    }

    // ---- command dispatch ----

    /// Apply a command sent by the host
    ///
    /// Returns the new node's id for `Insert`, `None` otherwise.
    pub fn apply(&mut self, command: EditorCommand) -> Result<Option<String>, EditorError> {
        match command {
            EditorCommand::Select { id } => self.select(&id).map(|_| None),
            EditorCommand::Deselect => {
                self.deselect();
                Ok(None)
            }
            EditorCommand::Insert { kind, target } => self.insert(kind, &target).map(Some),
            EditorCommand::Delete { id } => self.delete(&id).map(|_| None),
            EditorCommand::Replace { id, node } => self.replace(&id, node).map(|_| None),
            EditorCommand::SetProperty { id, key, value } => {
                self.set_property(&id, &key, value).map(|_| None)
            }
            EditorCommand::SetPropertyPath { id, path, value } => {
                self.set_property_path(&id, &path, value).map(|_| None)
            }
            EditorCommand::Rename { id, name } => self.rename(&id, name).map(|_| None),
        }
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut ComponentNode, EditorError> {
        operations::find_node_mut(&mut self.document.components, id)
            .ok_or_else(|| TreeError::node_not_found(id).into())
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;
