//! Structural classification of dynamic values.
//!
//! The classifier drives both the walker (what expands, what is a leaf)
//! and label rendering (glyphs, previews). It never fails: anything it
//! does not recognize degrades to `Composite` with no preview.

use serde::Serialize;

use crate::model::Value;

/// Preview text is cut at this many characters in tree labels.
pub const PREVIEW_LIMIT: usize = 50;

/// Structural kind of a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValueKind {
    Mapping,
    Sequence,
    Callable,
    Scalar,
    Null,
    Composite,
}

impl ValueKind {
    /// Whether the walker recurses into values of this kind.
    ///
    /// Scalars and null are leaves; callables are shown but never
    /// expanded.
    pub fn is_expandable(self) -> bool {
        matches!(
            self,
            ValueKind::Mapping | ValueKind::Sequence | ValueKind::Composite
        )
    }
}

/// Classify a value, returning its kind and an optional scalar preview.
///
/// The preview is populated only for string/number/boolean scalars, as
/// the value's canonical repr truncated to [`PREVIEW_LIMIT`] characters.
pub fn classify(value: &Value) -> (ValueKind, Option<String>) {
    match value {
        Value::Null => (ValueKind::Null, None),
        Value::Bool(_) | Value::Int(_) | Value::Float(_) | Value::Text(_) => {
            (ValueKind::Scalar, Some(truncate(&value.repr(), PREVIEW_LIMIT)))
        }
        // Raw byte buffers are leaves but carry no literal preview.
        Value::Bytes(_) => (ValueKind::Scalar, None),
        Value::Seq(_) => (ValueKind::Sequence, None),
        Value::Map(_) => (ValueKind::Mapping, None),
        Value::Callable(_) => (ValueKind::Callable, None),
        Value::Object(_) => (ValueKind::Composite, None),
    }
}

/// Glyph prefix used in tree labels for a member of the given kind.
pub fn kind_glyph(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Callable => "⚙️",
        ValueKind::Scalar | ValueKind::Null => "📊",
        ValueKind::Mapping => "📁",
        ValueKind::Sequence => "📋",
        ValueKind::Composite => "●",
    }
}

/// Truncate to a character budget (not bytes, so multi-byte text is safe).
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        text.chars().take(limit).collect()
    }
}
