//! Serde-friendly mirror of the dynamic value graph.
//!
//! The live graph uses shared, interiorly-mutable handles; a byte
//! encoding needs an owned tree. `PlainValue` is that tree. Converting
//! into it rejects callables (nothing to serialize) and cycles (a tree
//! cannot represent sharing); converting out of it checks composite
//! type tags against the registry, so a stream cannot materialize a
//! composite this process has no definition for.

use std::collections::{BTreeMap, HashSet};
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use objscope_core::errors::{ObjScopeError, Result};
use objscope_core::model::{ObjectValue, SharedValue, Value};
use objscope_core::registry::TypeRegistry;

/// Owned, serializable form of a value graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlainValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Seq(Vec<PlainValue>),
    Map(BTreeMap<String, PlainValue>),
    Object {
        type_name: String,
        fields: BTreeMap<String, PlainValue>,
    },
}

impl PlainValue {
    /// Convert a live value graph into the owned mirror.
    ///
    /// # Errors
    ///
    /// - `UnsupportedValue` when the graph holds a callable
    /// - `CyclicValue` when a handle is reached again while still being
    ///   converted (shared acyclic references are fine and are copied)
    pub fn from_value(value: &SharedValue) -> Result<Self> {
        let mut visiting = HashSet::new();
        convert_in(value, &mut visiting)
    }

    /// Convert the owned mirror back into a live value graph.
    ///
    /// # Errors
    ///
    /// Returns `UnknownTypeTag` when a composite carries a tag the
    /// registry has never seen.
    pub fn into_value(self, registry: &TypeRegistry) -> Result<SharedValue> {
        Ok(self.into_plain_value(registry)?.into_shared())
    }

    fn into_plain_value(self, registry: &TypeRegistry) -> Result<Value> {
        match self {
            PlainValue::Null => Ok(Value::Null),
            PlainValue::Bool(b) => Ok(Value::Bool(b)),
            PlainValue::Int(i) => Ok(Value::Int(i)),
            PlainValue::Float(f) => Ok(Value::Float(f)),
            PlainValue::Text(s) => Ok(Value::Text(s)),
            PlainValue::Bytes(b) => Ok(Value::Bytes(b)),
            PlainValue::Seq(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(item.into_plain_value(registry)?.into_shared());
                }
                Ok(Value::Seq(out))
            }
            PlainValue::Map(entries) => {
                let mut out = BTreeMap::new();
                for (key, item) in entries {
                    out.insert(key, item.into_plain_value(registry)?.into_shared());
                }
                Ok(Value::Map(out))
            }
            PlainValue::Object { type_name, fields } => {
                registry.require(&type_name)?;
                let mut obj = ObjectValue::new(type_name);
                for (name, item) in fields {
                    obj.set_shared(name, item.into_plain_value(registry)?.into_shared());
                }
                Ok(Value::Object(obj))
            }
        }
    }
}

fn convert_in(value: &SharedValue, visiting: &mut HashSet<*const ()>) -> Result<PlainValue> {
    let guard = value
        .try_borrow()
        .map_err(|_| ObjScopeError::UnsupportedValue {
            type_name: "<busy>".to_string(),
        })?;

    let ptr = Rc::as_ptr(value) as *const ();
    if !visiting.insert(ptr) {
        return Err(ObjScopeError::CyclicValue {
            type_name: guard.type_name(),
        });
    }

    let result = match &*guard {
        Value::Null => Ok(PlainValue::Null),
        Value::Bool(b) => Ok(PlainValue::Bool(*b)),
        Value::Int(i) => Ok(PlainValue::Int(*i)),
        Value::Float(f) => Ok(PlainValue::Float(*f)),
        Value::Text(s) => Ok(PlainValue::Text(s.clone())),
        Value::Bytes(b) => Ok(PlainValue::Bytes(b.clone())),
        Value::Seq(items) => items
            .iter()
            .map(|item| convert_in(item, visiting))
            .collect::<Result<Vec<_>>>()
            .map(PlainValue::Seq),
        Value::Map(entries) => entries
            .iter()
            .map(|(key, item)| Ok((key.clone(), convert_in(item, visiting)?)))
            .collect::<Result<BTreeMap<_, _>>>()
            .map(PlainValue::Map),
        Value::Object(obj) => obj
            .fields
            .iter()
            .map(|(name, item)| Ok((name.clone(), convert_in(item, visiting)?)))
            .collect::<Result<BTreeMap<_, _>>>()
            .map(|fields| PlainValue::Object {
                type_name: obj.type_name.clone(),
                fields,
            }),
        Value::Callable(c) => Err(ObjScopeError::UnsupportedValue {
            type_name: format!("callable {}", c.name),
        }),
    };

    visiting.remove(&ptr);
    result
}
