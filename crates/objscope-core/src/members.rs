//! Member enumeration for the detail view.
//!
//! For a selected composite, every field becomes one member row:
//! callables with their best-effort signature, properties with a scalar
//! repr or a bracketed type placeholder. Reserved members (leading
//! underscore) are categorized, not hidden — the detail view shows them
//! under their own heading.

use crate::classify::{classify, truncate, ValueKind};
use crate::model::{Member, MemberCategory, SharedValue, Value};
use crate::traversal::RESERVED_MARKER;

/// Member previews are cut at this many characters (wider than tree labels).
pub const MEMBER_PREVIEW_LIMIT: usize = 100;

/// Enumerate the accessible members of a value, in name order.
///
/// Non-composite values have no members; the result is empty. A member
/// whose handle cannot be read is skipped; the call itself never fails.
pub fn members(value: &SharedValue) -> Vec<Member> {
    let guard = match value.try_borrow() {
        Ok(guard) => guard,
        Err(_) => return Vec::new(),
    };

    let obj = match &*guard {
        Value::Object(obj) => obj,
        _ => return Vec::new(),
    };

    obj.fields
        .iter()
        .filter_map(|(name, handle)| member_row(name, handle))
        .collect()
}

fn member_row(name: &str, handle: &SharedValue) -> Option<Member> {
    let guard = handle.try_borrow().ok()?;
    let reserved = name.starts_with(RESERVED_MARKER);

    match &*guard {
        Value::Callable(callable) => Some(Member {
            name: name.to_string(),
            category: if reserved {
                MemberCategory::ReservedCallable
            } else {
                MemberCategory::Callable
            },
            type_name: guard.type_name(),
            preview: callable.signature(),
        }),
        other => {
            let (kind, _) = classify(other);
            let preview = match kind {
                ValueKind::Scalar | ValueKind::Null => {
                    truncate(&other.repr(), MEMBER_PREVIEW_LIMIT)
                }
                _ => format!("<{}>", other.type_name()),
            };
            Some(Member {
                name: name.to_string(),
                category: if reserved {
                    MemberCategory::ReservedProperty
                } else {
                    MemberCategory::Property
                },
                type_name: other.type_name(),
                preview,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CallableValue, ObjectValue};

    fn sample() -> SharedValue {
        let mut obj = ObjectValue::new("Host");
        obj.set("title", Value::from("browser"));
        obj.set("_state", Value::Int(3));
        obj.method("refresh", &["depth"]);
        obj.set(
            "_rebuild",
            Value::Callable(CallableValue::opaque("_rebuild")),
        );
        obj.set("entries", Value::seq(vec![Value::Int(1)]));
        Value::Object(obj).into_shared()
    }

    #[test]
    fn test_categories() {
        let rows = members(&sample());
        let category = |name: &str| {
            rows.iter()
                .find(|m| m.name == name)
                .unwrap_or_else(|| panic!("missing member {name}"))
                .category
        };
        assert_eq!(category("title"), MemberCategory::Property);
        assert_eq!(category("_state"), MemberCategory::ReservedProperty);
        assert_eq!(category("refresh"), MemberCategory::Callable);
        assert_eq!(category("_rebuild"), MemberCategory::ReservedCallable);
    }

    #[test]
    fn test_callable_previews_are_signatures() {
        let rows = members(&sample());
        let refresh = rows.iter().find(|m| m.name == "refresh").unwrap();
        assert_eq!(refresh.preview, "(depth)");
        let rebuild = rows.iter().find(|m| m.name == "_rebuild").unwrap();
        assert_eq!(rebuild.preview, "()");
    }

    #[test]
    fn test_property_previews() {
        let rows = members(&sample());
        let title = rows.iter().find(|m| m.name == "title").unwrap();
        assert_eq!(title.preview, "\"browser\"");
        let entries = rows.iter().find(|m| m.name == "entries").unwrap();
        assert_eq!(entries.preview, "<seq>");
    }

    #[test]
    fn test_non_composites_have_no_members() {
        assert!(members(&Value::Int(3).into_shared()).is_empty());
        assert!(members(&Value::seq(vec![Value::Int(1)]).into_shared()).is_empty());
    }

    #[test]
    fn test_rows_are_name_ordered() {
        let rows = members(&sample());
        let names: Vec<&str> = rows.iter().map(|m| m.name.as_str()).collect();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
    }
}
