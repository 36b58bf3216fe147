//! Value summary for the info view: type, shape, and an approximate
//! in-memory footprint.

use std::collections::HashSet;

use serde::Serialize;

use crate::classify::{classify, ValueKind};
use crate::model::{SharedValue, Value};
use crate::path::ObjectPath;

/// Summary report for a selected value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueSummary {
    /// Rendered path of the selection
    pub path: String,

    /// Runtime type name
    pub type_name: String,

    /// Structural kind
    pub kind: ValueKind,

    /// Direct element/field count for containers, character count for text
    pub len: Option<usize>,

    /// Approximate total bytes held by the subtree (shared values counted once)
    pub approx_bytes: usize,
}

/// Summarize a value for the info view.
pub fn summarize(path: &ObjectPath, value: &SharedValue) -> ValueSummary {
    let guard = value.borrow();
    let (kind, _) = classify(&guard);
    let mut seen = HashSet::new();
    ValueSummary {
        path: path.to_string(),
        type_name: guard.type_name(),
        kind,
        len: guard.len(),
        approx_bytes: approx_size(value, &mut seen),
    }
}

/// Rough byte estimate. Each shared handle is visited once, so
/// self-referential graphs are counted, not chased forever.
fn approx_size(value: &SharedValue, seen: &mut HashSet<*const ()>) -> usize {
    let ptr = std::rc::Rc::as_ptr(value) as *const ();
    if !seen.insert(ptr) {
        return 0;
    }
    let guard = match value.try_borrow() {
        Ok(guard) => guard,
        Err(_) => return 0,
    };
    let own = std::mem::size_of::<Value>();
    own + match &*guard {
        Value::Text(s) => s.len(),
        Value::Bytes(b) => b.len(),
        Value::Seq(items) => items.iter().map(|v| approx_size(v, seen)).sum(),
        Value::Map(entries) => entries
            .iter()
            .map(|(k, v)| k.len() + approx_size(v, seen))
            .sum(),
        Value::Object(obj) => {
            obj.type_name.len()
                + obj
                    .fields
                    .iter()
                    .map(|(k, v)| k.len() + approx_size(v, seen))
                    .sum::<usize>()
        }
        Value::Callable(c) => c.name.len(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_fields() {
        let value = Value::map(vec![
            ("a", Value::Int(1)),
            ("b", Value::from("xyz")),
        ])
        .into_shared();
        let summary = summarize(&ObjectPath::root("root"), &value);
        assert_eq!(summary.path, "root");
        assert_eq!(summary.type_name, "map");
        assert_eq!(summary.kind, ValueKind::Mapping);
        assert_eq!(summary.len, Some(2));
        assert!(summary.approx_bytes > 0);
    }

    #[test]
    fn test_shared_subtrees_counted_once() {
        let shared = Value::from("payload-payload-payload").into_shared();
        let mut entries = std::collections::BTreeMap::new();
        entries.insert("x".to_string(), shared.clone());
        entries.insert("y".to_string(), shared.clone());
        let doubled = Value::Map(entries).into_shared();

        let single = Value::map(vec![("x", Value::from("payload-payload-payload"))]).into_shared();

        let doubled_size = summarize(&ObjectPath::root("root"), &doubled).approx_bytes;
        let single_size = summarize(&ObjectPath::root("root"), &single).approx_bytes;
        // The aliased payload adds only a key's worth of extra bytes.
        assert!(doubled_size < single_size * 2);
    }

    #[test]
    fn test_cyclic_value_does_not_hang() {
        let cell = Value::Map(Default::default()).into_shared();
        if let Value::Map(entries) = &mut *cell.borrow_mut() {
            entries.insert("me".to_string(), cell.clone());
        }
        let summary = summarize(&ObjectPath::root("root"), &cell);
        assert_eq!(summary.kind, ValueKind::Mapping);
    }
}
