//! Portable binary format: type-directed save, format-sniffing load.
//!
//! The save side converts a value to bytes through a fixed chain, first
//! match wins: raw bytes, UTF-8 text, decimal number text, key-ordered
//! structured text (JSON), native format. The load side sniffs the same
//! space in reverse preference: native decode, JSON parse, UTF-8 text,
//! and finally the raw bytes themselves — which never fail, so a
//! portable load is total. Every failed attempt is recorded and handed
//! back to the caller as diagnostic context.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use objscope_core::errors::{ObjScopeError, Result};
use objscope_core::model::{SharedValue, Value};
use objscope_core::registry::TypeRegistry;

use crate::codec::native::{decode_native, encode_native};
use crate::codec::plain::PlainValue;

/// How the save chain converted a value to bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SaveMethod {
    RawBytes,
    Utf8Text,
    NumberText,
    StructuredText,
    Native,
}

impl fmt::Display for SaveMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SaveMethod::RawBytes => "raw bytes",
            SaveMethod::Utf8Text => "UTF-8 encoded text",
            SaveMethod::NumberText => "number as UTF-8 text",
            SaveMethod::StructuredText => "structured text",
            SaveMethod::Native => "native format",
        };
        write!(f, "{}", label)
    }
}

/// Which interpretation won the load-side sniff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Interpretation {
    Native,
    StructuredText,
    Utf8Text,
    RawBytes,
}

impl fmt::Display for Interpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Interpretation::Native => "native format",
            Interpretation::StructuredText => "structured text",
            Interpretation::Utf8Text => "UTF-8 text",
            Interpretation::RawBytes => "raw bytes",
        };
        write!(f, "{}", label)
    }
}

/// Diagnostic record of a portable load.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadReport {
    /// The interpretation that succeeded
    pub interpretation: Interpretation,

    /// Human-readable record of each attempted-and-failed step
    pub attempts: Vec<String>,

    /// Size of the input buffer
    pub byte_len: usize,
}

/// Convert a value to portable bytes via the type-directed chain.
///
/// # Errors
///
/// Only the chain's terminal arms can fail: a mapping/sequence whose
/// native fallback is itself unrepresentable, or any other value the
/// native format rejects. In both cases nothing is written.
pub fn encode_portable(value: &SharedValue, version: u32) -> Result<(Vec<u8>, SaveMethod)> {
    enum Conversion {
        Done(Vec<u8>, SaveMethod),
        Structured,
        Fallback,
    }

    let conversion = {
        let guard = value
            .try_borrow()
            .map_err(|_| ObjScopeError::UnsupportedValue {
                type_name: "<busy>".to_string(),
            })?;

        match &*guard {
            Value::Bytes(b) => Conversion::Done(b.clone(), SaveMethod::RawBytes),
            // A Rust string is UTF-8 by construction; the encoding-failure
            // arm of the chain is unreachable from here.
            Value::Text(s) => Conversion::Done(s.clone().into_bytes(), SaveMethod::Utf8Text),
            Value::Int(i) => Conversion::Done(i.to_string().into_bytes(), SaveMethod::NumberText),
            Value::Float(f) => Conversion::Done(f.to_string().into_bytes(), SaveMethod::NumberText),
            Value::Map(_) | Value::Seq(_) => Conversion::Structured,
            _ => Conversion::Fallback,
        }
    };

    match conversion {
        Conversion::Done(bytes, method) => Ok((bytes, method)),
        Conversion::Structured => match structured_text(value) {
            Ok(bytes) => Ok((bytes, SaveMethod::StructuredText)),
            Err(err) => {
                debug!(error = %err, "structured encoding failed, falling back to native");
                let bytes = encode_native(value, version)?;
                Ok((bytes, SaveMethod::Native))
            }
        },
        Conversion::Fallback => {
            let bytes = encode_native(value, version)?;
            Ok((bytes, SaveMethod::Native))
        }
    }
}

/// Sniff portable bytes into a value. Never fails: the final raw-bytes
/// interpretation accepts anything.
pub fn decode_portable(
    bytes: &[u8],
    registry: &TypeRegistry,
    memory_limit_bytes: u64,
) -> (SharedValue, LoadReport) {
    let mut attempts = Vec::new();

    match decode_native(bytes, registry, memory_limit_bytes) {
        Ok(value) => {
            return (
                value,
                LoadReport {
                    interpretation: Interpretation::Native,
                    attempts,
                    byte_len: bytes.len(),
                },
            );
        }
        Err(err) => attempts.push(format!("native format: {}", err.code())),
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => {
            match serde_json::from_str::<serde_json::Value>(text) {
                Ok(json) => {
                    return (
                        from_json(&json).into_shared(),
                        LoadReport {
                            interpretation: Interpretation::StructuredText,
                            attempts,
                            byte_len: bytes.len(),
                        },
                    );
                }
                Err(err) => attempts.push(format!("structured text: {}", err)),
            }
            (
                Value::Text(text.to_string()).into_shared(),
                LoadReport {
                    interpretation: Interpretation::Utf8Text,
                    attempts,
                    byte_len: bytes.len(),
                },
            )
        }
        Err(err) => {
            attempts.push(format!("UTF-8 text: invalid after byte {}", err.valid_up_to()));
            (
                Value::Bytes(bytes.to_vec()).into_shared(),
                LoadReport {
                    interpretation: Interpretation::RawBytes,
                    attempts,
                    byte_len: bytes.len(),
                },
            )
        }
    }
}

/// Key-ordered, human-readable structured encoding of a mapping or
/// sequence. Fails when the graph holds anything JSON cannot carry.
fn structured_text(value: &SharedValue) -> Result<Vec<u8>> {
    let plain = PlainValue::from_value(value)?;
    let json = to_json(&plain)?;
    serde_json::to_vec_pretty(&json).map_err(|e| ObjScopeError::Io {
        op: "structured_text".to_string(),
        message: e.to_string(),
    })
}

fn to_json(plain: &PlainValue) -> Result<serde_json::Value> {
    match plain {
        PlainValue::Null => Ok(serde_json::Value::Null),
        PlainValue::Bool(b) => Ok(serde_json::Value::Bool(*b)),
        PlainValue::Int(i) => Ok(serde_json::Value::Number((*i).into())),
        PlainValue::Float(f) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .ok_or(ObjScopeError::UnsupportedValue {
                type_name: "non-finite float".to_string(),
            }),
        PlainValue::Text(s) => Ok(serde_json::Value::String(s.clone())),
        PlainValue::Seq(items) => items
            .iter()
            .map(to_json)
            .collect::<Result<Vec<_>>>()
            .map(serde_json::Value::Array),
        PlainValue::Map(entries) => {
            let mut out = serde_json::Map::new();
            for (key, item) in entries {
                out.insert(key.clone(), to_json(item)?);
            }
            Ok(serde_json::Value::Object(out))
        }
        PlainValue::Bytes(_) => Err(ObjScopeError::UnsupportedValue {
            type_name: "bytes".to_string(),
        }),
        PlainValue::Object { type_name, .. } => Err(ObjScopeError::UnsupportedValue {
            type_name: type_name.clone(),
        }),
    }
}

/// Interpret parsed structured text (or any JSON document) as a value
/// graph. Also used to project the configuration document into the
/// browsable tree.
pub fn from_json(json: &serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::Int(i)
            } else {
                Value::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        serde_json::Value::String(s) => Value::Text(s.clone()),
        serde_json::Value::Array(items) => {
            Value::Seq(items.iter().map(|i| from_json(i).into_shared()).collect())
        }
        serde_json::Value::Object(entries) => Value::Map(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), from_json(v).into_shared()))
                .collect(),
        ),
    }
}
