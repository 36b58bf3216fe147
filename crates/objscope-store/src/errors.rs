//! Error handling for objscope-store
//!
//! Wraps objscope-core errors with store-specific constructors and the
//! decode failure classifier.

use objscope_core::errors::ObjScopeError;

pub use objscope_core::errors::Result;

/// Create an IO error tagged with the failing operation
pub fn io_error(operation: &str, err: std::io::Error) -> ObjScopeError {
    ObjScopeError::Io {
        op: operation.to_string(),
        message: err.to_string(),
    }
}

/// Create a configuration error
pub fn config_error(reason: impl Into<String>) -> ObjScopeError {
    ObjScopeError::InvalidConfig {
        reason: reason.into(),
    }
}

/// Classify a byte-decoder failure into the deserialization taxonomy.
///
/// - premature end of input → truncated/corrupted stream
/// - size-limit breach → memory limit exceeded
/// - invalid tags/encodings → malformed stream
pub fn classify_decode_failure(err: bincode::Error, limit_bytes: u64) -> ObjScopeError {
    use bincode::ErrorKind;

    match *err {
        ErrorKind::Io(ref io) if io.kind() == std::io::ErrorKind::UnexpectedEof => {
            ObjScopeError::TruncatedStream {
                detail: io.to_string(),
            }
        }
        ErrorKind::Io(io) => ObjScopeError::Io {
            op: "decode_native".to_string(),
            message: io.to_string(),
        },
        ErrorKind::SizeLimit => ObjScopeError::MemoryLimitExceeded { limit_bytes },
        ErrorKind::InvalidUtf8Encoding(e) => ObjScopeError::MalformedStream {
            detail: e.to_string(),
        },
        ErrorKind::InvalidBoolEncoding(b) => ObjScopeError::MalformedStream {
            detail: format!("invalid bool byte {b}"),
        },
        ErrorKind::InvalidCharEncoding => ObjScopeError::MalformedStream {
            detail: "invalid char encoding".to_string(),
        },
        ErrorKind::InvalidTagEncoding(tag) => ObjScopeError::MalformedStream {
            detail: format!("invalid variant tag {tag}"),
        },
        ErrorKind::DeserializeAnyNotSupported => ObjScopeError::MalformedStream {
            detail: "self-describing decode unsupported".to_string(),
        },
        ErrorKind::SequenceMustHaveLength => ObjScopeError::MalformedStream {
            detail: "unsized sequence in stream".to_string(),
        },
        ErrorKind::Custom(detail) => ObjScopeError::MalformedStream { detail },
    }
}
