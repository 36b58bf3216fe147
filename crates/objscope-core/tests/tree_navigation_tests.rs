//! End-to-end navigation: expand a graph, ship paths across the UI
//! boundary as text, and resolve them back against live state.

use objscope_core::model::{Introspectable, ObjectValue, Value};
use objscope_core::named_store::{NamedObjectStore, STORE_ROOT};
use objscope_core::resolve::{resolve_text, RootBindings};
use objscope_core::traversal::{expand, expand_root};
use objscope_core::{ErrorClass, Node, ObjectPath};

struct Workbench {
    title: String,
    retries: i64,
}

impl Introspectable for Workbench {
    fn type_name(&self) -> &str {
        "Workbench"
    }

    fn reflect(&self) -> ObjectValue {
        let mut obj = ObjectValue::new(self.type_name());
        obj.set("title", Value::from(self.title.clone()));
        obj.set("retries", Value::Int(self.retries));
        obj.set("_dirty", Value::Bool(false));
        obj.method("rebuild", &["depth"]);
        obj
    }
}

fn collect_paths(nodes: &[Node], out: &mut Vec<String>) {
    for node in nodes {
        out.push(node.path.to_string());
        collect_paths(&node.children, out);
    }
}

#[test]
fn test_every_emitted_path_resolves_while_graph_unchanged() {
    let bench = Workbench {
        title: "main".to_string(),
        retries: 3,
    };
    let root = bench.reflect_value();

    let mut roots = RootBindings::new();
    roots.bind("root", root.clone());

    let nodes = expand(&root, &ObjectPath::root("root"), 0, 4);
    let mut paths = Vec::new();
    collect_paths(&nodes, &mut paths);
    assert!(!paths.is_empty());

    for path in paths {
        resolve_text(&path, &roots)
            .unwrap_or_else(|e| panic!("path {path} should resolve: {e}"));
    }
}

#[test]
fn test_loaded_objects_walk_under_their_own_root() {
    let mut store = NamedObjectStore::new();
    store
        .put(
            "snapshot",
            Value::map(vec![("count", Value::Int(5))]).into_shared(),
        )
        .unwrap();

    let mut roots = RootBindings::new();
    roots.bind(STORE_ROOT, store.as_value());

    let tree = expand_root(
        "📦 Loaded Objects",
        &store.as_value(),
        ObjectPath::root(STORE_ROOT),
        3,
    );
    assert_eq!(tree.children.len(), 1);

    let leaf = &tree.children[0].children[0];
    assert_eq!(leaf.path.to_string(), "loaded['snapshot']['count']");

    let value = resolve_text(&leaf.path.to_string(), &roots).unwrap();
    assert_eq!(*value.borrow(), Value::Int(5));
}

#[test]
fn test_stale_selection_is_resolution_class() {
    let mut store = NamedObjectStore::new();
    store
        .put("data", Value::seq(vec![Value::Int(1), Value::Int(2)]).into_shared(),)
        .unwrap();

    let mut roots = RootBindings::new();
    roots.bind(STORE_ROOT, store.as_value());

    let path = "loaded['data'][1]";
    assert!(resolve_text(path, &roots).is_ok());

    // Replace the entry with a shorter sequence; the old path goes stale.
    store.put_overwrite("data", Value::seq(vec![Value::Int(1)]).into_shared());

    let err = resolve_text(path, &roots).unwrap_err();
    assert_eq!(err.class(), ErrorClass::Resolution);
}

#[test]
fn test_reserved_members_visible_only_at_host_root() {
    let bench = Workbench {
        title: "main".to_string(),
        retries: 0,
    };
    let host = bench.reflect_value();

    // As the inspected root, internals show.
    let at_root = expand(&host, &ObjectPath::root("root"), 0, 2);
    assert!(at_root.iter().any(|n| n.label.contains("_dirty")));

    // Nested one level down, the same object hides them.
    let wrapper = Value::map(vec![]).into_shared();
    if let Value::Map(entries) = &mut *wrapper.borrow_mut() {
        entries.insert("bench".to_string(), host);
    }
    let nested = expand(&wrapper, &ObjectPath::root("root"), 0, 3);
    let bench_node = &nested[0];
    assert!(!bench_node
        .children
        .iter()
        .any(|n| n.label.contains("_dirty")));
}
