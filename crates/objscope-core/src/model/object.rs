use std::collections::BTreeMap;

use super::value::{SharedValue, Value};

/// Composite value: a runtime type tag plus named fields.
///
/// Fields are key-ordered, so enumeration order is deterministic and
/// matches what a sorted member listing would show. A field may hold
/// any value, including a `Callable` — methods are just fields that
/// happen to be callable.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectValue {
    /// Runtime type tag (e.g. "BrowserSession")
    pub type_name: String,

    /// Named fields in key order
    pub fields: BTreeMap<String, SharedValue>,
}

impl ObjectValue {
    /// Create an empty composite with the given type tag
    pub fn new(type_name: impl Into<String>) -> Self {
        Self {
            type_name: type_name.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Set a field, wrapping the value in a fresh handle
    pub fn set(&mut self, name: impl Into<String>, value: Value) -> &mut Self {
        self.fields.insert(name.into(), value.into_shared());
        self
    }

    /// Set a field to an existing shared handle (aliases the handle)
    pub fn set_shared(&mut self, name: impl Into<String>, value: SharedValue) -> &mut Self {
        self.fields.insert(name.into(), value);
        self
    }

    /// Get a field handle by name
    pub fn field(&self, name: &str) -> Option<SharedValue> {
        self.fields.get(name).cloned()
    }

    /// Attach a callable member with a known parameter list
    pub fn method(&mut self, name: &str, params: &[&str]) -> &mut Self {
        self.fields.insert(
            name.to_string(),
            Value::Callable(CallableValue::new(name, params)).into_shared(),
        );
        self
    }
}

/// A function-like value. Never expanded, never serialized.
#[derive(Debug, Clone, PartialEq)]
pub struct CallableValue {
    /// Member name the callable was enumerated under
    pub name: String,

    /// Parameter names, if known; `None` renders as the empty-signature marker
    pub params: Option<Vec<String>>,
}

impl CallableValue {
    /// Create a callable with a known parameter list
    pub fn new(name: impl Into<String>, params: &[&str]) -> Self {
        Self {
            name: name.into(),
            params: Some(params.iter().map(|p| p.to_string()).collect()),
        }
    }

    /// Create a callable whose signature could not be determined
    pub fn opaque(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: None,
        }
    }

    /// Best-effort signature text; `()` when the parameter list is unknown
    pub fn signature(&self) -> String {
        match &self.params {
            Some(params) => format!("({})", params.join(", ")),
            None => "()".to_string(),
        }
    }
}

/// Capability interface live Rust types implement to project themselves
/// into the dynamic graph.
///
/// This replaces runtime reflection: a type that wants to be browsable
/// describes its own fields. Reserved internals should be named with a
/// leading underscore so the walker hides them below the root level.
pub trait Introspectable {
    /// Stable runtime type tag
    fn type_name(&self) -> &str;

    /// Project the current state into a composite value
    fn reflect(&self) -> ObjectValue;

    /// Convenience: reflect and wrap in a shared handle
    fn reflect_value(&self) -> SharedValue {
        Value::Object(self.reflect()).into_shared()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_key_ordered() {
        let mut obj = ObjectValue::new("Sample");
        obj.set("zeta", Value::Int(1));
        obj.set("alpha", Value::Int(2));
        let names: Vec<&String> = obj.fields.keys().collect();
        assert_eq!(names, ["alpha", "zeta"]);
    }

    #[test]
    fn test_signature_rendering() {
        let known = CallableValue::new("refresh", &["depth", "query"]);
        assert_eq!(known.signature(), "(depth, query)");

        let unknown = CallableValue::opaque("mystery");
        assert_eq!(unknown.signature(), "()");
    }

    #[test]
    fn test_method_helper_stores_callable() {
        let mut obj = ObjectValue::new("Sample");
        obj.method("run", &["input"]);
        let field = obj.field("run").expect("method should be a field");
        match &*field.borrow() {
            Value::Callable(c) => assert_eq!(c.signature(), "(input)"),
            other => panic!("expected callable, got {other:?}"),
        };
    }
}
