//! Path resolution: re-locating a live value from a path expression.
//!
//! Resolution re-executes the same field/key/index steps the walker used
//! to build the path. Any step can fail if the graph mutated since
//! enumeration — callers treat that as "selection stale" and keep their
//! previous state.

use std::collections::BTreeMap;

use crate::errors::{ObjScopeError, Result};
use crate::model::{SharedValue, Value};
use crate::path::{ObjectPath, PathStep};

/// The identifiers a path may begin with, bound to live handles.
///
/// Typically two bindings exist: the inspected root and the named object
/// store's backing map.
#[derive(Debug, Clone, Default)]
pub struct RootBindings {
    entries: BTreeMap<String, SharedValue>,
}

impl RootBindings {
    /// Create an empty binding set
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind an identifier to a handle, replacing any previous binding
    pub fn bind(&mut self, name: impl Into<String>, value: SharedValue) {
        self.entries.insert(name.into(), value);
    }

    /// Look up a root identifier.
    ///
    /// # Errors
    ///
    /// Returns `UnknownRoot` when the identifier is not bound.
    pub fn get(&self, name: &str) -> Result<SharedValue> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| ObjScopeError::UnknownRoot {
                root: name.to_string(),
            })
    }
}

/// Resolve a path against the given root bindings.
///
/// # Errors
///
/// Returns a resolution-class error naming the failing step when the
/// path no longer denotes a value: unknown root, missing field/key,
/// index out of range, or a step applied to a value of the wrong shape.
pub fn resolve(path: &ObjectPath, roots: &RootBindings) -> Result<SharedValue> {
    let mut current = roots.get(path.root_name())?;
    let mut walked = ObjectPath::root(path.root_name());

    for step in path.steps() {
        let next = apply_step(&current, step, &walked)?;
        walked = extend(&walked, step);
        current = next;
    }

    Ok(current)
}

/// Parse path text and resolve it in one call (the UI boundary form).
///
/// # Errors
///
/// Returns `PathSyntax` for unparseable text, then anything [`resolve`]
/// can return.
pub fn resolve_text(text: &str, roots: &RootBindings) -> Result<SharedValue> {
    let path = ObjectPath::parse(text)?;
    resolve(&path, roots)
}

fn extend(path: &ObjectPath, step: &PathStep) -> ObjectPath {
    match step {
        PathStep::Field(name) => path.field(name),
        PathStep::Index(i) => path.index(*i),
        PathStep::Key(k) => path.key(k),
    }
}

fn apply_step(current: &SharedValue, step: &PathStep, walked: &ObjectPath) -> Result<SharedValue> {
    let guard = current
        .try_borrow()
        .map_err(|_| ObjScopeError::ValueBusy {
            path: walked.to_string(),
        })?;

    match (&*guard, step) {
        (Value::Object(obj), PathStep::Field(name)) => {
            obj.field(name).ok_or_else(|| ObjScopeError::MissingField {
                path: walked.to_string(),
                field: name.clone(),
            })
        }
        (Value::Map(entries), PathStep::Key(key)) => {
            entries
                .get(key)
                .cloned()
                .ok_or_else(|| ObjScopeError::MissingKey {
                    path: walked.to_string(),
                    key: key.clone(),
                })
        }
        (Value::Seq(items), PathStep::Index(index)) => {
            items
                .get(*index)
                .cloned()
                .ok_or_else(|| ObjScopeError::IndexOutOfRange {
                    path: walked.to_string(),
                    index: *index,
                    len: items.len(),
                })
        }
        (other, step) => Err(ObjScopeError::NotTraversable {
            path: walked.to_string(),
            type_name: other.type_name(),
            step: step_name(step).to_string(),
        }),
    }
}

fn step_name(step: &PathStep) -> &'static str {
    match step {
        PathStep::Field(_) => "field access",
        PathStep::Index(_) => "index access",
        PathStep::Key(_) => "key access",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ObjectValue;

    fn sample_roots() -> RootBindings {
        let mut obj = ObjectValue::new("Host");
        obj.set("items", Value::seq(vec![Value::Int(10), Value::Int(20)]));
        obj.set(
            "settings",
            Value::map(vec![("theme", Value::from("dark"))]),
        );

        let mut roots = RootBindings::new();
        roots.bind("root", Value::Object(obj).into_shared());
        roots
    }

    #[test]
    fn test_resolve_chained_steps() {
        let roots = sample_roots();
        let value = resolve_text("root.items[1]", &roots).unwrap();
        assert_eq!(*value.borrow(), Value::Int(20));

        let value = resolve_text("root.settings['theme']", &roots).unwrap();
        assert_eq!(*value.borrow(), Value::Text("dark".to_string()));
    }

    #[test]
    fn test_unknown_root() {
        let roots = sample_roots();
        let err = resolve_text("ghost.items", &roots).unwrap_err();
        assert_eq!(err.code(), "ERR_UNKNOWN_ROOT");
    }

    #[test]
    fn test_index_out_of_range_reports_len() {
        let roots = sample_roots();
        let err = resolve_text("root.items[5]", &roots).unwrap_err();
        assert_eq!(
            err,
            ObjScopeError::IndexOutOfRange {
                path: "root.items".to_string(),
                index: 5,
                len: 2,
            }
        );
    }

    #[test]
    fn test_step_on_wrong_shape() {
        let roots = sample_roots();
        let err = resolve_text("root.items['oops']", &roots).unwrap_err();
        assert_eq!(err.code(), "ERR_NOT_TRAVERSABLE");
    }

    #[test]
    fn test_stale_path_after_mutation() {
        let roots = sample_roots();
        let host = roots.get("root").unwrap();

        // Shrink the sequence after the path was built.
        if let Value::Object(obj) = &mut *host.borrow_mut() {
            obj.set("items", Value::seq(vec![Value::Int(10)]));
        }

        let err = resolve_text("root.items[1]", &roots).unwrap_err();
        assert_eq!(err.class(), crate::errors::ErrorClass::Resolution);
    }
}
