//! Component Tree Operations
//!
//! Structural edits over the ordered root sequence of a template. Property
//! edits live in [`crate::editor::property_editor`]; this module only moves
//! whole nodes in and out of the tree.

pub mod error;
pub mod tree;

pub use error::TreeError;
pub use tree::{
    collect_ids, delete_node, depth_of, find_node, find_node_mut, insert_at_root,
    insert_into_container, iter, path_to, replace_node, resolve_path,
};
