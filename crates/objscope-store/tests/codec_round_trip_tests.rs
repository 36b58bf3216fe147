//! Property coverage for the native codec: whenever encoding succeeds,
//! decoding reproduces a structurally equal value.

use objscope_core::model::Value;
use objscope_core::registry::TypeRegistry;
use objscope_store::codec::{decode_native, encode_native, NATIVE_FORMAT_VERSION};
use proptest::prelude::*;

const LIMIT: u64 = 64 * 1024 * 1024;

/// Generator for serializable value trees (no callables, no cycles).
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Int),
        // Finite floats only so equality comparison is meaningful.
        (-1e12f64..1e12f64).prop_map(Value::Float),
        "[ -~]{0,24}".prop_map(Value::Text),
        proptest::collection::vec(any::<u8>(), 0..24).prop_map(Value::Bytes),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::seq),
            proptest::collection::btree_map("[a-z]{1,8}", inner, 0..6).prop_map(|entries| {
                Value::Map(
                    entries
                        .into_iter()
                        .map(|(k, v)| (k, v.into_shared()))
                        .collect(),
                )
            }),
        ]
    })
}

proptest! {
    #[test]
    fn native_round_trip_is_identity(value in value_strategy()) {
        let registry = TypeRegistry::new();
        let handle = value.into_shared();

        let bytes = encode_native(&handle, NATIVE_FORMAT_VERSION).unwrap();
        let back = decode_native(&bytes, &registry, LIMIT).unwrap();

        prop_assert_eq!(&*back.borrow(), &*handle.borrow());
    }

    #[test]
    fn valid_native_buffers_always_sniff_as_native(value in value_strategy()) {
        let registry = TypeRegistry::new();
        let handle = value.into_shared();

        let bytes = encode_native(&handle, NATIVE_FORMAT_VERSION).unwrap();
        let (_, report) = objscope_store::codec::decode_portable(&bytes, &registry, LIMIT);

        prop_assert_eq!(report.interpretation, objscope_store::codec::Interpretation::Native);
        prop_assert!(report.attempts.is_empty());
    }

    #[test]
    fn portable_load_is_total(bytes in proptest::collection::vec(any::<u8>(), 0..256)) {
        let registry = TypeRegistry::new();
        let (_, report) = objscope_store::codec::decode_portable(&bytes, &registry, LIMIT);
        prop_assert_eq!(report.byte_len, bytes.len());
    }
}
