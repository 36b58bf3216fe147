//! Persistence codec: native and portable byte formats.

pub mod native;
pub mod plain;
pub mod portable;

pub use native::{decode_native, encode_native, NATIVE_FORMAT_VERSION};
pub use plain::PlainValue;
pub use portable::{
    decode_portable, encode_portable, from_json, Interpretation, LoadReport, SaveMethod,
};
