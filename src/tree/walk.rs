// src/tree/walk.rs
// =============================================================================
// Depth-first flattening of the catalog into a worklist.
//
// How it works:
// 1. Start at the root's children with the breadcrumb "Root"
// 2. Every url node with a non-empty url becomes a WorkItem
// 3. Descend into a node's children (if any) with the breadcrumb extended by
//    that node's name: "Root" -> "Root > Tools" -> "Root > Tools > CLI"
//
// Order is child array order, so the worklist is stable between runs.
// Nothing is deduplicated: the same URL under two nodes is checked twice.
// =============================================================================

use super::node::{Document, Node, NodeKind};
use serde::{Deserialize, Serialize};

/// Breadcrumb given to top-level nodes.
pub const ROOT_PATH: &str = "Root";

/// A url node queued for probing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItem {
    pub name: String,
    pub url: String,
    /// Breadcrumb of the node's ancestors, e.g. "Root > Tools"
    pub path: String,
}

// Builds the breadcrumb handed to the children of `parent`
//
// Example:
//   child_path("Root", <node named "Tools">) -> "Root > Tools"
pub fn child_path(parent_path: &str, parent: &Node) -> String {
    format!("{} > {}", parent_path, parent.label())
}

// Flattens every url node of the document into a WorkItem list
//
// Unlike the validator, this descends into the children of *any* node that
// has them, whatever its type.
pub fn collect_work_items(document: &Document) -> Vec<WorkItem> {
    let mut items = Vec::new();
    for node in document.children() {
        collect_node(node, ROOT_PATH, &mut items);
    }
    items
}

fn collect_node(node: &Node, path: &str, items: &mut Vec<WorkItem>) {
    if node.kind() == Some(NodeKind::Url) {
        if let Some(url) = node.url() {
            items.push(WorkItem {
                name: node.label().to_string(),
                url: url.to_string(),
                path: path.to_string(),
            });
        }
    }

    let children = node.children();
    if !children.is_empty() {
        let next = child_path(path, node);
        for child in children {
            collect_node(child, &next, items);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(children: Vec<Node>) -> Document {
        Document {
            kind: Some("folder".to_string()),
            children: Some(children),
        }
    }

    #[test]
    fn test_top_level_link_has_root_path() {
        let doc = document(vec![Node::link("Rust", "https://www.rust-lang.org")]);
        let items = collect_work_items(&doc);
        assert_eq!(
            items,
            vec![WorkItem {
                name: "Rust".to_string(),
                url: "https://www.rust-lang.org".to_string(),
                path: "Root".to_string(),
            }]
        );
    }

    #[test]
    fn test_breadcrumbs_follow_ancestors() {
        let doc = document(vec![Node::folder(
            "A",
            vec![Node::folder("B", vec![Node::link("deep", "https://deep.example")])],
        )]);
        let items = collect_work_items(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].path, "Root > A > B");
    }

    #[test]
    fn test_order_is_depth_first_in_array_order() {
        let doc = document(vec![
            Node::folder(
                "A",
                vec![
                    Node::link("a1", "https://a1.example"),
                    Node::folder("A2", vec![Node::link("a2x", "https://a2x.example")]),
                    Node::link("a3", "https://a3.example"),
                ],
            ),
            Node::link("b", "https://b.example"),
        ]);
        let names: Vec<_> = collect_work_items(&doc).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["a1", "a2x", "a3", "b"]);
    }

    #[test]
    fn test_duplicates_are_kept() {
        let doc = document(vec![
            Node::link("one", "https://same.example"),
            Node::folder("F", vec![Node::link("two", "https://same.example")]),
        ]);
        assert_eq!(collect_work_items(&doc).len(), 2);
    }

    #[test]
    fn test_url_node_without_url_is_skipped() {
        let mut broken = Node::link("broken", "");
        broken.url = None;
        let doc = document(vec![broken, Node::link("ok", "https://ok.example")]);
        let items = collect_work_items(&doc);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "ok");
    }

    #[test]
    fn test_children_of_url_nodes_are_collected() {
        let mut parent = Node::link("parent", "https://parent.example");
        parent.children = Some(vec![Node::link("child", "https://child.example")]);
        let items = collect_work_items(&document(vec![parent]));
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].path, "Root > parent");
    }

    #[test]
    fn test_empty_document() {
        assert!(collect_work_items(&Document::default()).is_empty());
    }
}
