//! Structural operations on a component forest
//!
//! All functions take the root sequence of a template (`&mut Vec<ComponentNode>`)
//! and either apply the whole edit or return a [`TreeError`] without touching
//! the tree. Container paths list node ids from the root down to the target
//! container; an empty path addresses the root sequence itself.
//!
//! # Examples
//!
//! ```rust
//! use sitedesk_core::models::{ComponentKind, ComponentNode, ComponentProps};
//! use sitedesk_core::operations::{insert_at_root, insert_into_container};
//!
//! let mut roots = Vec::new();
//! let grid = ComponentProps::default_for(ComponentKind::Grid);
//! let grid = ComponentNode::new("grid-1".into(), grid);
//! let button = ComponentProps::default_for(ComponentKind::Button);
//! let button = ComponentNode::new("button-1".into(), button);
//!
//! insert_at_root(&mut roots, grid).unwrap();
//! insert_into_container(&mut roots, &["grid-1".to_string()], button).unwrap();
//! assert_eq!(roots[0].children().len(), 1);
//! ```

use crate::models::{ComponentIter, ComponentNode};
use crate::operations::error::TreeError;
use std::collections::HashSet;

/// Depth-first, pre-order walk over every node
pub fn iter(roots: &[ComponentNode]) -> ComponentIter<'_> {
    ComponentIter::new(roots)
}

/// Every id in the forest, in pre-order
pub fn collect_ids(roots: &[ComponentNode]) -> Vec<String> {
    iter(roots).map(|node| node.id.clone()).collect()
}

pub fn find_node<'a>(roots: &'a [ComponentNode], id: &str) -> Option<&'a ComponentNode> {
    iter(roots).find(|node| node.id == id)
}

pub fn find_node_mut<'a>(
    roots: &'a mut [ComponentNode],
    id: &str,
) -> Option<&'a mut ComponentNode> {
    for node in roots.iter_mut() {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = node.props.children_mut() {
            if let Some(found) = find_node_mut(children, id) {
                return Some(found);
            }
        }
    }
    None
}

/// Ids of the containers enclosing `id`, root first
///
/// A root node has an empty path. `None` if the id is not in the tree.
pub fn path_to(roots: &[ComponentNode], id: &str) -> Option<Vec<String>> {
    for node in roots {
        if node.id == id {
            return Some(Vec::new());
        }
        if let Some(mut path) = path_to(node.children(), id) {
            path.insert(0, node.id.clone());
            return Some(path);
        }
    }
    None
}

/// Nesting level of a node (roots are at depth 1)
pub fn depth_of(roots: &[ComponentNode], id: &str) -> Option<usize> {
    path_to(roots, id).map(|path| path.len() + 1)
}

/// Children of the container addressed by `path`; an empty path is the root
///
/// # Errors
///
/// `PathNotFound` if a segment is missing or names a non-container.
pub fn resolve_path<'a>(
    roots: &'a [ComponentNode],
    path: &[String],
) -> Result<&'a [ComponentNode], TreeError> {
    let mut current = roots;
    for segment in path {
        current = current
            .iter()
            .find(|node| &node.id == segment)
            .and_then(|node| node.props.children())
            .map(Vec::as_slice)
            .ok_or_else(|| TreeError::path_not_found(path))?;
    }
    Ok(current)
}

/// Append `node` to the root sequence
///
/// # Errors
///
/// `DuplicateId` if any id of the new subtree is already in use.
pub fn insert_at_root(
    roots: &mut Vec<ComponentNode>,
    node: ComponentNode,
) -> Result<(), TreeError> {
    check_unique(&existing_ids(roots, None), &node)?;
    roots.push(node);
    Ok(())
}

/// Append `node` to the children of the container at `path`
///
/// # Errors
///
/// - `PathNotFound` if a path segment is missing or is not a container
/// - `DuplicateId` if any id of the new subtree is already in use
pub fn insert_into_container(
    roots: &mut Vec<ComponentNode>,
    path: &[String],
    node: ComponentNode,
) -> Result<(), TreeError> {
    if path.is_empty() {
        return insert_at_root(roots, node);
    }

    check_unique(&existing_ids(roots, None), &node)?;

    let children = resolve_container(roots, path).ok_or_else(|| TreeError::path_not_found(path))?;
    children.push(node);
    Ok(())
}

/// Replace the node with id `id` in place, keeping its sibling position
///
/// The replacement may carry a different id, but none of its ids may clash
/// with nodes outside the replaced subtree. Returns the previous node.
pub fn replace_node(
    roots: &mut Vec<ComponentNode>,
    id: &str,
    node: ComponentNode,
) -> Result<ComponentNode, TreeError> {
    let existing = {
        let old = find_node(roots, id).ok_or_else(|| TreeError::node_not_found(id))?;
        existing_ids(roots, Some(old))
    };
    check_unique(&existing, &node)?;

    let slot = find_node_mut(roots, id).ok_or_else(|| TreeError::node_not_found(id))?;
    Ok(std::mem::replace(slot, node))
}

/// Remove the node with id `id` together with its subtree
///
/// Returns the removed node. On `NodeNotFound` the tree is unchanged.
pub fn delete_node(roots: &mut Vec<ComponentNode>, id: &str) -> Result<ComponentNode, TreeError> {
    remove_from(roots, id).ok_or_else(|| TreeError::node_not_found(id))
}

fn remove_from(nodes: &mut Vec<ComponentNode>, id: &str) -> Option<ComponentNode> {
    if let Some(pos) = nodes.iter().position(|node| node.id == id) {
        return Some(nodes.remove(pos));
    }
    nodes
        .iter_mut()
        .filter_map(|node| node.props.children_mut())
        .find_map(|children| remove_from(children, id))
}

fn resolve_container<'a>(
    roots: &'a mut Vec<ComponentNode>,
    path: &[String],
) -> Option<&'a mut Vec<ComponentNode>> {
    let mut current = roots;
    for segment in path {
        let node = current.iter_mut().find(|node| &node.id == segment)?;
        current = node.props.children_mut()?;
    }
    Some(current)
}

/// Ids in use, leaving out the subtree rooted at `skip`
fn existing_ids<'a>(
    roots: &'a [ComponentNode],
    skip: Option<&ComponentNode>,
) -> HashSet<&'a str> {
    let skipped: HashSet<&str> = skip
        .map(|node| {
            ComponentIter::new(std::slice::from_ref(node))
                .map(|n| n.id.as_str())
                .collect()
        })
        .unwrap_or_default();

    iter(roots)
        .map(|node| node.id.as_str())
        .filter(|id| !skipped.contains(*id))
        .collect()
}

fn check_unique(existing: &HashSet<&str>, node: &ComponentNode) -> Result<(), TreeError> {
    let mut incoming = HashSet::new();
    for candidate in ComponentIter::new(std::slice::from_ref(node)) {
        let id = candidate.id.as_str();
        if existing.contains(id) || !incoming.insert(id) {
            return Err(TreeError::duplicate_id(id));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "tree_test.rs"]
mod tree_test;
