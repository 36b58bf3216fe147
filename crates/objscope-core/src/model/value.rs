use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::object::{CallableValue, ObjectValue};

/// Shared handle to a dynamic value.
///
/// Containers hold handles rather than owned children so that the same
/// value can appear in more than one place — including inside itself.
/// Handles are deliberately not `Send`; the whole graph lives on one
/// thread.
pub type SharedValue = Rc<RefCell<Value>>;

/// The dynamic runtime representation every browser component operates on.
///
/// Scalars and `Null` are leaves. `Seq`, `Map`, and `Object` are
/// containers eligible for expansion. `Callable` is displayed but never
/// expanded and never serialized.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    /// Ordered sequence of shared handles.
    Seq(Vec<SharedValue>),
    /// String-keyed, key-ordered mapping.
    Map(BTreeMap<String, SharedValue>),
    /// Composite with a runtime type tag and named fields.
    Object(ObjectValue),
    /// A function-like member; carries a best-effort signature.
    Callable(CallableValue),
}

impl Value {
    /// Wrap this value in a fresh shared handle.
    pub fn into_shared(self) -> SharedValue {
        Rc::new(RefCell::new(self))
    }

    /// Runtime type name as shown in tree labels and member tables.
    ///
    /// Objects report their own type tag; everything else reports a
    /// fixed structural name.
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Int(_) => "int".to_string(),
            Value::Float(_) => "float".to_string(),
            Value::Text(_) => "text".to_string(),
            Value::Bytes(_) => "bytes".to_string(),
            Value::Seq(_) => "seq".to_string(),
            Value::Map(_) => "map".to_string(),
            Value::Object(obj) => obj.type_name.clone(),
            Value::Callable(_) => "callable".to_string(),
        }
    }

    /// Canonical rendering used for scalar previews.
    ///
    /// Text is quoted like a source literal; containers and composites
    /// render as a bracketed type placeholder.
    pub fn repr(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => f.to_string(),
            Value::Text(s) => format!("{:?}", s),
            Value::Bytes(b) => format!("<bytes {}>", b.len()),
            other => format!("<{}>", other.type_name()),
        }
    }

    /// Number of direct children a container holds; `None` for leaves.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Seq(items) => Some(items.len()),
            Value::Map(entries) => Some(entries.len()),
            Value::Object(obj) => Some(obj.fields.len()),
            Value::Bytes(b) => Some(b.len()),
            Value::Text(s) => Some(s.chars().count()),
            _ => None,
        }
    }

    /// Build a sequence from owned values, wrapping each in a handle.
    pub fn seq(items: Vec<Value>) -> Value {
        Value::Seq(items.into_iter().map(Value::into_shared).collect())
    }

    /// Build a mapping from owned pairs, wrapping each value in a handle.
    pub fn map(pairs: Vec<(&str, Value)>) -> Value {
        Value::Map(
            pairs
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.into_shared()))
                .collect(),
        )
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Value::Null.type_name(), "null");
        assert_eq!(Value::Int(3).type_name(), "int");
        assert_eq!(Value::seq(vec![]).type_name(), "seq");
        assert_eq!(Value::map(vec![]).type_name(), "map");
    }

    #[test]
    fn test_repr_quotes_text() {
        assert_eq!(Value::Text("hi".to_string()).repr(), "\"hi\"");
        assert_eq!(Value::Bool(true).repr(), "true");
        assert_eq!(Value::Int(-7).repr(), "-7");
    }

    #[test]
    fn test_repr_placeholders_for_containers() {
        assert_eq!(Value::seq(vec![Value::Int(1)]).repr(), "<seq>");
        assert_eq!(Value::Bytes(vec![1, 2, 3]).repr(), "<bytes 3>");
    }

    #[test]
    fn test_len() {
        assert_eq!(Value::seq(vec![Value::Int(1), Value::Int(2)]).len(), Some(2));
        assert_eq!(Value::Int(1).len(), None);
        assert_eq!(Value::Text("abc".to_string()).len(), Some(3));
    }

    #[test]
    fn test_shared_handle_aliases() {
        let handle = Value::Int(1).into_shared();
        let alias = Rc::clone(&handle);
        *alias.borrow_mut() = Value::Int(2);
        assert_eq!(*handle.borrow(), Value::Int(2));
    }
}
