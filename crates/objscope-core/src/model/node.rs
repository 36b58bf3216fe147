use serde::Serialize;

use crate::path::ObjectPath;

/// One entry in the displayed introspection tree.
///
/// Node trees are owned by the display layer and rebuilt wholesale on
/// every refresh; nothing here is incrementally diffed. The `path` is
/// only guaranteed to resolve while the underlying graph is unchanged —
/// staleness surfaces later as a resolution error, never here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Display text: kind glyph + name + inferred type + optional preview
    pub label: String,

    /// Address that re-locates the underlying value
    pub path: ObjectPath,

    /// Runtime type name at enumeration time
    pub declared_type: String,

    /// Eagerly expanded children; empty at the depth bound
    pub children: Vec<Node>,
}

impl Node {
    /// Create a leaf node
    pub fn leaf(label: impl Into<String>, path: ObjectPath, declared_type: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path,
            declared_type: declared_type.into(),
            children: Vec::new(),
        }
    }

    /// Total number of nodes in this subtree, including self
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(Node::subtree_len).sum::<usize>()
    }
}

/// Member classification used by the detail view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MemberCategory {
    Property,
    Callable,
    ReservedProperty,
    ReservedCallable,
}

/// One row in the member table for a selected value.
///
/// Derived fresh on every selection; never cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    /// Member name as enumerated
    pub name: String,

    /// Property/callable, reserved or not
    pub category: MemberCategory,

    /// Runtime type name of the member value
    pub type_name: String,

    /// Scalar repr, bracketed type placeholder, or callable signature
    pub preview: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leaf_has_no_children() {
        let node = Node::leaf("📊 x: int = 1", ObjectPath::root("root").field("x"), "int");
        assert!(node.children.is_empty());
        assert_eq!(node.subtree_len(), 1);
    }

    #[test]
    fn test_subtree_len_counts_descendants() {
        let mut parent = Node::leaf("📁 m: map", ObjectPath::root("root"), "map");
        parent.children.push(Node::leaf(
            "🔑 a: int = 1",
            ObjectPath::root("root").key("a"),
            "int",
        ));
        assert_eq!(parent.subtree_len(), 2);
    }
}
