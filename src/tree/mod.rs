// src/tree/mod.rs
// =============================================================================
// This module models the arf.json catalog tree.
//
// Submodules:
// - node: the Document / Node types and loading from disk
// - walk: depth-first flattening of url nodes into WorkItems
//
// The tree is read once at startup and never mutated afterwards, so every
// function here takes shared references.
// =============================================================================

mod node;
mod walk;

pub use node::{load_document, parse_document, Document, Node, NodeKind, DEFAULT_ARF_PATH};
pub use walk::{child_path, collect_work_items, WorkItem, ROOT_PATH};
