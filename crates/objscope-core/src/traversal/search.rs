//! Label search over an expanded node tree.
//!
//! Mirrors the browser's filter box: a node is retained when its label
//! matches the query or when any descendant matches. A node that matches
//! directly keeps its whole subtree; otherwise only matching branches
//! survive.

use crate::model::Node;

/// Filter a node forest by a label query.
///
/// An empty query returns the forest unchanged. Matching is substring
/// containment, case-folded unless `case_sensitive` is set.
pub fn filter_nodes(nodes: &[Node], query: &str, case_sensitive: bool) -> Vec<Node> {
    if query.is_empty() {
        return nodes.to_vec();
    }
    let needle = if case_sensitive {
        query.to_string()
    } else {
        query.to_lowercase()
    };
    nodes
        .iter()
        .filter_map(|node| filter_node(node, &needle, case_sensitive))
        .collect()
}

fn filter_node(node: &Node, needle: &str, case_sensitive: bool) -> Option<Node> {
    let haystack = if case_sensitive {
        node.label.clone()
    } else {
        node.label.to_lowercase()
    };

    if haystack.contains(needle) {
        return Some(node.clone());
    }

    let children: Vec<Node> = node
        .children
        .iter()
        .filter_map(|child| filter_node(child, needle, case_sensitive))
        .collect();

    if children.is_empty() {
        None
    } else {
        Some(Node {
            label: node.label.clone(),
            path: node.path.clone(),
            declared_type: node.declared_type.clone(),
            children,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::ObjectPath;

    fn forest() -> Vec<Node> {
        let mut parent = Node::leaf("📁 settings: map", ObjectPath::root("root"), "map");
        parent.children.push(Node::leaf(
            "🔑 Theme: text = \"dark\"",
            ObjectPath::root("root").key("Theme"),
            "text",
        ));
        parent.children.push(Node::leaf(
            "🔑 depth: int = 6",
            ObjectPath::root("root").key("depth"),
            "int",
        ));
        let other = Node::leaf("📊 count: int = 3", ObjectPath::root("root").field("count"), "int");
        vec![parent, other]
    }

    #[test]
    fn test_empty_query_is_identity() {
        let nodes = forest();
        assert_eq!(filter_nodes(&nodes, "", false), nodes);
    }

    #[test]
    fn test_matching_descendant_retains_branch() {
        let filtered = filter_nodes(&forest(), "theme", false);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].children.len(), 1);
        assert!(filtered[0].children[0].label.contains("Theme"));
    }

    #[test]
    fn test_case_sensitivity() {
        assert!(filter_nodes(&forest(), "theme", true).is_empty());
        assert_eq!(filter_nodes(&forest(), "Theme", true).len(), 1);
    }

    #[test]
    fn test_direct_match_keeps_subtree() {
        let filtered = filter_nodes(&forest(), "settings", false);
        assert_eq!(filtered.len(), 1);
        // Whole subtree survives when the parent itself matches.
        assert_eq!(filtered[0].children.len(), 2);
    }

    #[test]
    fn test_no_match_empties_forest() {
        assert!(filter_nodes(&forest(), "nonexistent", false).is_empty());
    }
}
