// src/validate/structure.rs
// =============================================================================
// Rules checked for every node:
// - it has a name
// - it has a type
// - a "url" node has a url
// - a "folder" node's children are validated too (children hanging off any
//   other kind of node are never visited)
//
// Duplicate tracking happens in the same pass:
// - names: recorded once, the moment a name is seen for the second time
// - urls: recorded on every repeat after the first sighting
//
// Duplicates are advisory; only structural errors make the report invalid.
// =============================================================================

use crate::tree::{child_path, Document, Node, NodeKind, ROOT_PATH};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Which rule a node broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructuralErrorKind {
    MissingName,
    MissingType,
    MissingUrl,
}

/// One structural violation, located by its breadcrumb path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructuralError {
    pub kind: StructuralErrorKind,
    /// The node's name, or "(unnamed)"
    pub name: String,
    pub path: String,
}

impl fmt::Display for StructuralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            StructuralErrorKind::MissingName => write!(f, "Node missing name at {}", self.path),
            StructuralErrorKind::MissingType => {
                write!(f, "Node '{}' missing type at {}", self.name, self.path)
            }
            StructuralErrorKind::MissingUrl => write!(
                f,
                "Node '{}' is type 'url' but missing url field at {}",
                self.name, self.path
            ),
        }
    }
}

/// A url that had already been seen elsewhere in the tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateUrl {
    pub name: String,
    pub url: String,
}

/// Everything the validator learned in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    pub root_missing_type: bool,
    pub errors: Vec<StructuralError>,
    pub duplicate_names: Vec<String>,
    pub duplicate_urls: Vec<DuplicateUrl>,
}

impl ValidationReport {
    /// Pass/fail flag. Duplicates never affect it.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

// Running state of a single validation pass
#[derive(Default)]
struct Validator {
    report: ValidationReport,
    name_count: HashMap<String, usize>,
    seen_urls: HashSet<String>,
}

impl Validator {
    fn error(&mut self, kind: StructuralErrorKind, node: &Node, path: &str) {
        let error = StructuralError {
            kind,
            name: node.label().to_string(),
            path: path.to_string(),
        };
        tracing::debug!("structural error: {}", error);
        self.report.errors.push(error);
    }

    fn visit(&mut self, node: &Node, path: &str) {
        match node.name() {
            None => self.error(StructuralErrorKind::MissingName, node, path),
            Some(name) => {
                let count = self.name_count.entry(name.to_string()).or_insert(0);
                *count += 1;
                if *count == 2 {
                    self.report.duplicate_names.push(name.to_string());
                }
            }
        }

        let kind = node.kind();
        if kind.is_none() {
            self.error(StructuralErrorKind::MissingType, node, path);
        }

        match kind {
            Some(NodeKind::Url) => match node.url() {
                None => self.error(StructuralErrorKind::MissingUrl, node, path),
                Some(url) => {
                    // insert() returns false when the url was already present
                    if !self.seen_urls.insert(url.to_string()) {
                        self.report.duplicate_urls.push(DuplicateUrl {
                            name: node.label().to_string(),
                            url: url.to_string(),
                        });
                    }
                }
            },
            Some(NodeKind::Folder) => {
                let children = node.children();
                if !children.is_empty() {
                    let next = child_path(path, node);
                    for child in children {
                        self.visit(child, &next);
                    }
                }
            }
            Some(NodeKind::Other) | None => {}
        }
    }
}

// Validates the whole document in a single depth-first pass
//
// The root only gets a presence check on `type` (a warning); the full node
// contract applies from its children downwards.
pub fn validate_document(document: &Document) -> ValidationReport {
    let mut validator = Validator::default();
    validator.report.root_missing_type = !document.has_type();

    for node in document.children() {
        validator.visit(node, ROOT_PATH);
    }

    tracing::info!(
        errors = validator.report.errors.len(),
        duplicate_names = validator.report.duplicate_names.len(),
        duplicate_urls = validator.report.duplicate_urls.len(),
        "validation finished"
    );
    validator.report
}
