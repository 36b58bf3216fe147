//! Bounded recursive expansion of a value graph into a node tree.
//!
//! Expansion is eager and wholesale: every refresh rebuilds the full
//! tree down to the depth bound. There is no cycle detection — a
//! self-referential composite is re-visited at every level until the
//! bound cuts it off. That re-visiting is a known, accepted boundary
//! condition: the bound guarantees termination, not minimal output.

use tracing::trace;

use crate::classify::{classify, kind_glyph, ValueKind};
use crate::model::{Node, SharedValue, Value};
use crate::path::ObjectPath;

/// Default expansion depth, matching the `browser.max_depth` default.
pub const DEFAULT_MAX_DEPTH: usize = 6;

/// Member names starting with this marker are reserved/private.
pub const RESERVED_MARKER: char = '_';

/// Expand a value into its child nodes, recursing to `max_depth`.
///
/// Returns an empty list at the bound, for leaves, and for callables.
/// Individual children that cannot be read are skipped; their siblings
/// still enumerate.
pub fn expand(value: &SharedValue, path: &ObjectPath, depth: usize, max_depth: usize) -> Vec<Node> {
    if depth >= max_depth {
        return Vec::new();
    }

    let guard = match value.try_borrow() {
        Ok(guard) => guard,
        Err(_) => {
            trace!(path = %path, "skipping busy value during expansion");
            return Vec::new();
        }
    };

    match &*guard {
        Value::Map(entries) => entries
            .iter()
            .filter_map(|(key, child)| {
                map_entry_node(key, child, path, depth, max_depth)
            })
            .collect(),
        Value::Seq(items) => items
            .iter()
            .enumerate()
            .filter_map(|(index, child)| seq_entry_node(index, child, path, depth, max_depth))
            .collect(),
        Value::Object(obj) => obj
            .fields
            .iter()
            .filter(|(name, _)| depth == 0 || !name.starts_with(RESERVED_MARKER))
            .filter_map(|(name, child)| member_node(name, child, path, depth, max_depth))
            .collect(),
        // Scalars, null, bytes, callables: leaves.
        _ => Vec::new(),
    }
}

/// Expand a root value into a single labeled node with children.
pub fn expand_root(
    label: impl Into<String>,
    value: &SharedValue,
    path: ObjectPath,
    max_depth: usize,
) -> Node {
    let declared_type = match value.try_borrow() {
        Ok(guard) => guard.type_name(),
        Err(_) => "<busy>".to_string(),
    };
    let children = expand(value, &path, 0, max_depth);
    Node {
        label: label.into(),
        path,
        declared_type,
        children,
    }
}

fn map_entry_node(
    key: &str,
    child: &SharedValue,
    parent: &ObjectPath,
    depth: usize,
    max_depth: usize,
) -> Option<Node> {
    let (type_name, kind, preview) = inspect(child, parent)?;
    let mut label = format!("🔑 {}: {}", key, type_name);
    if let Some(preview) = preview {
        label.push_str(&format!(" = {}", preview));
    }
    let child_path = parent.key(key);
    Some(build(label, child_path, type_name, kind, child, depth, max_depth))
}

fn seq_entry_node(
    index: usize,
    child: &SharedValue,
    parent: &ObjectPath,
    depth: usize,
    max_depth: usize,
) -> Option<Node> {
    let (type_name, kind, preview) = inspect(child, parent)?;
    let mut label = format!("[{}]: {}", index, type_name);
    if let Some(preview) = preview {
        label.push_str(&format!(" = {}", preview));
    }
    let child_path = parent.index(index);
    Some(build(label, child_path, type_name, kind, child, depth, max_depth))
}

fn member_node(
    name: &str,
    child: &SharedValue,
    parent: &ObjectPath,
    depth: usize,
    max_depth: usize,
) -> Option<Node> {
    let (type_name, kind, preview) = inspect(child, parent)?;
    let mut label = format!("{} {}: {}", kind_glyph(kind), name, type_name);
    if let Some(preview) = preview {
        label.push_str(&format!(" = {}", preview));
    }
    let child_path = parent.field(name);
    Some(build(label, child_path, type_name, kind, child, depth, max_depth))
}

/// Read a child's type and classification; `None` skips the entry.
fn inspect(
    child: &SharedValue,
    parent: &ObjectPath,
) -> Option<(String, ValueKind, Option<String>)> {
    match child.try_borrow() {
        Ok(guard) => {
            let (kind, preview) = classify(&guard);
            Some((guard.type_name(), kind, preview))
        }
        Err(_) => {
            trace!(parent = %parent, "skipping busy child during expansion");
            None
        }
    }
}

fn build(
    label: String,
    path: ObjectPath,
    declared_type: String,
    kind: ValueKind,
    child: &SharedValue,
    depth: usize,
    max_depth: usize,
) -> Node {
    let children = if kind.is_expandable() {
        expand(child, &path, depth + 1, max_depth)
    } else {
        Vec::new()
    };
    Node {
        label,
        path,
        declared_type,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CallableValue, ObjectValue};

    fn root_path() -> ObjectPath {
        ObjectPath::root("root")
    }

    #[test]
    fn test_example_scenario_map_with_nested_seq() {
        // {"a": 1, "b": [2, 3]} at max_depth 2
        let root = Value::map(vec![
            ("a", Value::Int(1)),
            ("b", Value::seq(vec![Value::Int(2), Value::Int(3)])),
        ])
        .into_shared();

        let nodes = expand(&root, &root_path(), 0, 2);
        assert_eq!(nodes.len(), 2);

        let a = &nodes[0];
        assert_eq!(a.label, "🔑 a: int = 1");
        assert!(a.children.is_empty());

        let b = &nodes[1];
        assert_eq!(b.label, "🔑 b: seq");
        assert_eq!(b.children.len(), 2);
        assert_eq!(b.children[0].label, "[0]: int = 2");
        assert_eq!(b.children[1].label, "[1]: int = 3");
        assert!(b.children[0].children.is_empty());
    }

    #[test]
    fn test_depth_bound_cuts_deep_nesting() {
        // Nested deeper than the bound: root -> s -> s -> s -> leaf
        let deep = Value::map(vec![(
            "s",
            Value::map(vec![("s", Value::map(vec![("s", Value::Int(1))]))]),
        )])
        .into_shared();

        let nodes = expand(&deep, &root_path(), 0, 2);
        assert_eq!(nodes.len(), 1);
        assert_eq!(nodes[0].children.len(), 1);
        // Third level is past the bound.
        assert!(nodes[0].children[0].children.is_empty());
    }

    #[test]
    fn test_self_referential_map_terminates() {
        let cell = Value::Map(Default::default()).into_shared();
        if let Value::Map(entries) = &mut *cell.borrow_mut() {
            entries.insert("me".to_string(), cell.clone());
        }

        let nodes = expand(&cell, &root_path(), 0, 4);
        // One child per level, re-visited down to the bound.
        let mut level = &nodes;
        let mut depth = 0;
        while !level.is_empty() {
            assert_eq!(level.len(), 1);
            level = &level[0].children;
            depth += 1;
        }
        assert_eq!(depth, 4);
    }

    #[test]
    fn test_reserved_members_hidden_below_root() {
        let mut inner = ObjectValue::new("Inner");
        inner.set("_secret", Value::Int(1));
        inner.set("open", Value::Int(2));

        let mut host = ObjectValue::new("Host");
        host.set("_internal", Value::Int(0));
        host.set("inner", Value::Object(inner));

        let nodes = expand(&Value::Object(host).into_shared(), &root_path(), 0, 3);

        // Depth 0 (the host itself) is exempt: _internal is visible.
        let labels: Vec<&str> = nodes.iter().map(|n| n.label.as_str()).collect();
        assert!(labels.iter().any(|l| l.contains("_internal")));

        // Depth 1 hides _secret.
        let inner_node = nodes.iter().find(|n| n.label.contains("inner")).unwrap();
        assert_eq!(inner_node.children.len(), 1);
        assert!(inner_node.children[0].label.contains("open"));
    }

    #[test]
    fn test_callables_shown_but_not_expanded() {
        let mut host = ObjectValue::new("Host");
        host.set(
            "refresh",
            Value::Callable(CallableValue::new("refresh", &[])),
        );

        let nodes = expand(&Value::Object(host).into_shared(), &root_path(), 0, 3);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].label.starts_with("⚙️ refresh"));
        assert!(nodes[0].children.is_empty());
    }

    #[test]
    fn test_paths_resolve_back_to_values() {
        use crate::resolve::{resolve, RootBindings};

        let root = Value::map(vec![
            ("b", Value::seq(vec![Value::Int(2), Value::Int(3)])),
        ])
        .into_shared();

        let mut roots = RootBindings::new();
        roots.bind("root", root.clone());

        let nodes = expand(&root, &root_path(), 0, 3);
        let leaf = &nodes[0].children[1];
        let value = resolve(&leaf.path, &roots).unwrap();
        assert_eq!(*value.borrow(), Value::Int(3));
    }

    #[test]
    fn test_expand_root_wraps_children() {
        let root = Value::map(vec![("a", Value::Int(1))]).into_shared();
        let node = expand_root("root: map", &root, root_path(), 2);
        assert_eq!(node.declared_type, "map");
        assert_eq!(node.children.len(), 1);
    }
}
