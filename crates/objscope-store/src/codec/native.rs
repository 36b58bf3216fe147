//! Native serialization format: full-fidelity structural byte encoding.
//!
//! The payload is a versioned envelope around [`PlainValue`], encoded
//! with a compact structural codec. There is no application-level file
//! header — the version stamp is part of the encoding itself, and
//! integrity relies entirely on the decoder's own validation.

use bincode::Options;
use serde::{Deserialize, Serialize};

use objscope_core::errors::{ObjScopeError, Result};
use objscope_core::model::SharedValue;
use objscope_core::registry::TypeRegistry;

use crate::codec::plain::PlainValue;
use crate::errors::classify_decode_failure;

/// Highest envelope version this build reads and writes.
pub const NATIVE_FORMAT_VERSION: u32 = 4;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    value: PlainValue,
}

fn codec_options() -> impl Options {
    bincode::options()
}

/// Encode a value graph to native-format bytes.
///
/// Serialization happens entirely in memory; callers write the returned
/// buffer (atomically) only on success, so a failed save never touches
/// disk.
///
/// # Errors
///
/// - `UnsupportedValue` / `CyclicValue` when the graph is not representable
/// - `UnsupportedFormatVersion` when asked for a version this build
///   does not produce
pub fn encode_native(value: &SharedValue, version: u32) -> Result<Vec<u8>> {
    if version > NATIVE_FORMAT_VERSION {
        return Err(ObjScopeError::UnsupportedFormatVersion {
            found: version,
            supported: NATIVE_FORMAT_VERSION,
        });
    }

    let envelope = Envelope {
        version,
        value: PlainValue::from_value(value)?,
    };

    codec_options()
        .serialize(&envelope)
        .map_err(|e| ObjScopeError::Io {
            op: "encode_native".to_string(),
            message: e.to_string(),
        })
}

/// Decode native-format bytes back into a value graph.
///
/// # Errors
///
/// Failures are classified into the deserialization taxonomy:
/// truncated stream, malformed stream, memory limit exceeded,
/// unsupported format version, or unknown composite type tag.
pub fn decode_native(
    bytes: &[u8],
    registry: &TypeRegistry,
    memory_limit_bytes: u64,
) -> Result<SharedValue> {
    let envelope: Envelope = codec_options()
        .with_limit(memory_limit_bytes)
        .deserialize(bytes)
        .map_err(|e| classify_decode_failure(e, memory_limit_bytes))?;

    if envelope.version > NATIVE_FORMAT_VERSION {
        return Err(ObjScopeError::UnsupportedFormatVersion {
            found: envelope.version,
            supported: NATIVE_FORMAT_VERSION,
        });
    }

    envelope.value.into_value(registry)
}
