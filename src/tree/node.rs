// src/tree/node.rs
// =============================================================================
// Types for the arf.json document.
//
// Shape of the file:
//   { "type": "folder", "children": [ Node, ... ] }
//
// Shape of a Node:
//   { "name": "...", "type": "folder" | "url", "url": "...", "children": [...] }
//
// Every field is optional at the serde level. The validator needs to *see* a
// node with a missing name or type in order to report it, so a missing field
// must never make the whole parse fail. Empty strings are treated the same as
// missing ones.
// =============================================================================

use crate::error::{ArfError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where the catalog lives relative to the repository root.
pub const DEFAULT_ARF_PATH: &str = "public/arf.json";

/// Label used in breadcrumbs for a node that has no name.
const UNNAMED: &str = "(unnamed)";

/// The implicit root of the catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

/// One entry in the catalog tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Node {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
}

/// The interpreted `type` field of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// A container; may carry children
    Folder,
    /// A link; must carry a url
    Url,
    /// Any other non-empty type string
    Other,
}

impl Document {
    pub fn has_type(&self) -> bool {
        non_empty(&self.kind).is_some()
    }

    /// Top-level nodes, or an empty slice when `children` is absent.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }
}

impl Node {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn kind(&self) -> Option<NodeKind> {
        non_empty(&self.kind).map(|kind| match kind {
            "folder" => NodeKind::Folder,
            "url" => NodeKind::Url,
            _ => NodeKind::Other,
        })
    }

    pub fn url(&self) -> Option<&str> {
        non_empty(&self.url)
    }

    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Name used when building breadcrumb paths and messages.
    pub fn label(&self) -> &str {
        self.name().unwrap_or(UNNAMED)
    }

    /// Convenience constructor for a url node (mostly used by tests).
    pub fn link(name: &str, url: &str) -> Self {
        Node {
            name: Some(name.to_string()),
            kind: Some("url".to_string()),
            url: Some(url.to_string()),
            children: None,
        }
    }

    /// Convenience constructor for a folder node (mostly used by tests).
    pub fn folder(name: &str, children: Vec<Node>) -> Self {
        Node {
            name: Some(name.to_string()),
            kind: Some("folder".to_string()),
            url: None,
            children: Some(children),
        }
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|value| !value.is_empty())
}

// Parses arf.json text into a Document
//
// Returns ArfError::Parse on malformed JSON or on fields of the wrong JSON
// type (e.g. a numeric name).
pub fn parse_document(text: &str) -> Result<Document> {
    Ok(serde_json::from_str(text)?)
}

// Reads and parses the catalog at `path`
pub fn load_document(path: &Path) -> Result<Document> {
    let text = std::fs::read_to_string(path).map_err(|source| ArfError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!("read {} bytes from {}", text.len(), path.display());
    parse_document(&text)
}
