use thiserror::Error;

/// Result type alias using ObjScopeError
pub type Result<T> = std::result::Result<T, ObjScopeError>;

/// Coarse error families used by callers that only care about the
/// category of a failure (e.g. "is this a stale selection?").
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// A path could not be parsed or re-resolved against the live graph.
    /// Callers treat these as "selection stale" no-ops.
    Resolution,
    /// A value could not be turned into bytes. The save was aborted and
    /// no file was written.
    Serialization,
    /// Bytes could not be turned back into a value.
    Deserialization,
    /// Named object store bookkeeping (duplicate or missing names).
    Store,
    /// Configuration document problems.
    Config,
    /// Session-level misuse (e.g. save with nothing selected).
    Session,
    /// Operating system I/O.
    Io,
}

/// Comprehensive error taxonomy for ObjScope operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ObjScopeError {
    // ===== Resolution Errors =====
    /// Path begins with an identifier no root is bound to
    #[error("Unknown root identifier: {root}")]
    UnknownRoot { root: String },

    /// Path text could not be parsed back into steps
    #[error("Path syntax error in '{path}': {reason}")]
    PathSyntax { path: String, reason: String },

    /// Composite has no field with this name (stale or never existed)
    #[error("No field '{field}' at {path}")]
    MissingField { path: String, field: String },

    /// Mapping has no entry under this key
    #[error("No key '{key}' at {path}")]
    MissingKey { path: String, key: String },

    /// Sequence index past the end
    #[error("Index {index} out of range at {path} (len {len})")]
    IndexOutOfRange {
        path: String,
        index: usize,
        len: usize,
    },

    /// Step applied to a value of the wrong shape (e.g. key lookup on a scalar)
    #[error("Cannot apply {step} to {type_name} at {path}")]
    NotTraversable {
        path: String,
        type_name: String,
        step: String,
    },

    /// Value handle is mutably borrowed elsewhere during resolution
    #[error("Value at {path} is busy")]
    ValueBusy { path: String },

    // ===== Named Store Errors =====
    /// Insert under a name that is already taken (overwrite needs confirmation)
    #[error("An object named '{name}' already exists")]
    DuplicateName { name: String },

    /// Lookup of a name the store has never seen
    #[error("No loaded object named '{name}'")]
    NameNotFound { name: String },

    // ===== Serialization Errors =====
    /// Value graph contains something the byte encoding cannot carry
    #[error("Value of type {type_name} cannot be serialized")]
    UnsupportedValue { type_name: String },

    /// Value graph references itself; the tree encoding cannot represent sharing
    #[error("Value graph contains a reference cycle through {type_name}")]
    CyclicValue { type_name: String },

    // ===== Deserialization Errors =====
    /// Stream structure is invalid (bad tag, bad UTF-8 inside the container)
    #[error("Malformed stream: {detail}")]
    MalformedStream { detail: String },

    /// Stream ended early or is internally inconsistent
    #[error("Truncated or corrupted stream: {detail}")]
    TruncatedStream { detail: String },

    /// Stream carries a composite whose type tag is not registered here
    #[error("Stream references unknown type '{type_name}'")]
    UnknownTypeTag { type_name: String },

    /// Stream was written by a newer format revision than this build reads
    #[error("Unsupported format version {found} (this build reads up to {supported})")]
    UnsupportedFormatVersion { found: u32, supported: u32 },

    /// Decode would exceed the configured memory ceiling
    #[error("Decode memory limit exceeded ({limit_bytes} bytes)")]
    MemoryLimitExceeded { limit_bytes: u64 },

    /// Zero-byte input file rejected before any interpretation is attempted
    #[error("File is empty: {path}")]
    EmptyFile { path: String },

    /// Confirmation gate declined the operation
    #[error("Operation cancelled: {reason}")]
    Cancelled { reason: String },

    // ===== Session Errors =====
    /// Save requested while nothing is selected
    #[error("No object selected")]
    NoSelection,

    // ===== Config Errors =====
    /// Configuration document is not the expected shape
    #[error("Invalid configuration document: {reason}")]
    InvalidConfig { reason: String },

    // ===== I/O Errors =====
    /// Operating system error, tagged with the operation that hit it
    #[error("I/O failure during {op}: {message}")]
    Io { op: String, message: String },
}

impl ObjScopeError {
    /// Get the stable machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            ObjScopeError::UnknownRoot { .. } => "ERR_UNKNOWN_ROOT",
            ObjScopeError::PathSyntax { .. } => "ERR_PATH_SYNTAX",
            ObjScopeError::MissingField { .. } => "ERR_MISSING_FIELD",
            ObjScopeError::MissingKey { .. } => "ERR_MISSING_KEY",
            ObjScopeError::IndexOutOfRange { .. } => "ERR_INDEX_OUT_OF_RANGE",
            ObjScopeError::NotTraversable { .. } => "ERR_NOT_TRAVERSABLE",
            ObjScopeError::ValueBusy { .. } => "ERR_VALUE_BUSY",
            ObjScopeError::DuplicateName { .. } => "ERR_DUPLICATE_NAME",
            ObjScopeError::NameNotFound { .. } => "ERR_NAME_NOT_FOUND",
            ObjScopeError::UnsupportedValue { .. } => "ERR_UNSUPPORTED_VALUE",
            ObjScopeError::CyclicValue { .. } => "ERR_CYCLIC_VALUE",
            ObjScopeError::MalformedStream { .. } => "ERR_MALFORMED_STREAM",
            ObjScopeError::TruncatedStream { .. } => "ERR_TRUNCATED_STREAM",
            ObjScopeError::UnknownTypeTag { .. } => "ERR_UNKNOWN_TYPE_TAG",
            ObjScopeError::UnsupportedFormatVersion { .. } => "ERR_UNSUPPORTED_FORMAT_VERSION",
            ObjScopeError::MemoryLimitExceeded { .. } => "ERR_MEMORY_LIMIT",
            ObjScopeError::EmptyFile { .. } => "ERR_EMPTY_FILE",
            ObjScopeError::Cancelled { .. } => "ERR_CANCELLED",
            ObjScopeError::NoSelection => "ERR_NO_SELECTION",
            ObjScopeError::InvalidConfig { .. } => "ERR_INVALID_CONFIG",
            ObjScopeError::Io { .. } => "ERR_IO",
        }
    }

    /// Get the error family this error belongs to
    pub fn class(&self) -> ErrorClass {
        match self {
            ObjScopeError::UnknownRoot { .. }
            | ObjScopeError::PathSyntax { .. }
            | ObjScopeError::MissingField { .. }
            | ObjScopeError::MissingKey { .. }
            | ObjScopeError::IndexOutOfRange { .. }
            | ObjScopeError::NotTraversable { .. }
            | ObjScopeError::ValueBusy { .. } => ErrorClass::Resolution,

            ObjScopeError::DuplicateName { .. } | ObjScopeError::NameNotFound { .. } => {
                ErrorClass::Store
            }

            ObjScopeError::UnsupportedValue { .. } | ObjScopeError::CyclicValue { .. } => {
                ErrorClass::Serialization
            }

            ObjScopeError::MalformedStream { .. }
            | ObjScopeError::TruncatedStream { .. }
            | ObjScopeError::UnknownTypeTag { .. }
            | ObjScopeError::UnsupportedFormatVersion { .. }
            | ObjScopeError::MemoryLimitExceeded { .. }
            | ObjScopeError::EmptyFile { .. }
            | ObjScopeError::Cancelled { .. } => ErrorClass::Deserialization,

            ObjScopeError::NoSelection => ErrorClass::Session,

            ObjScopeError::InvalidConfig { .. } => ErrorClass::Config,

            ObjScopeError::Io { .. } => ErrorClass::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_errors_share_class() {
        let cases = [
            ObjScopeError::UnknownRoot {
                root: "ghost".to_string(),
            },
            ObjScopeError::MissingField {
                path: "root.x".to_string(),
                field: "x".to_string(),
            },
            ObjScopeError::IndexOutOfRange {
                path: "root[9]".to_string(),
                index: 9,
                len: 2,
            },
        ];
        for err in cases {
            assert_eq!(err.class(), ErrorClass::Resolution, "wrong class for {err}");
        }
    }

    #[test]
    fn test_codes_are_stable() {
        let cases = [
            (
                ObjScopeError::DuplicateName {
                    name: "cfg".to_string(),
                },
                "ERR_DUPLICATE_NAME",
            ),
            (
                ObjScopeError::CyclicValue {
                    type_name: "map".to_string(),
                },
                "ERR_CYCLIC_VALUE",
            ),
            (
                ObjScopeError::UnsupportedFormatVersion {
                    found: 9,
                    supported: 4,
                },
                "ERR_UNSUPPORTED_FORMAT_VERSION",
            ),
            (ObjScopeError::NoSelection, "ERR_NO_SELECTION"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.code(), expected);
        }
    }

    #[test]
    fn test_deserialization_class_covers_gate_outcomes() {
        let cancelled = ObjScopeError::Cancelled {
            reason: "large file declined".to_string(),
        };
        assert_eq!(cancelled.class(), ErrorClass::Deserialization);
        assert_eq!(cancelled.code(), "ERR_CANCELLED");
    }
}
