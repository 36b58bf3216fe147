//! ObjScope Store - Persistence layer
//!
//! Byte codecs for the native and portable formats, atomic file writes,
//! load preflight (empty/oversized checks), and the configuration
//! document. Everything here works on values from `objscope-core`; the
//! orchestration that decides *when* to persist lives in
//! `objscope-engine`.

pub mod atomic;
pub mod codec;
pub mod config;
pub mod errors;
pub mod preflight;

pub use atomic::{atomic_write, read_bytes};
pub use codec::{
    decode_native, decode_portable, encode_native, encode_portable, Interpretation, LoadReport,
    PlainValue, SaveMethod, NATIVE_FORMAT_VERSION,
};
pub use config::{Config, CONFIG_FILE};
pub use preflight::{preflight, Preflight};
