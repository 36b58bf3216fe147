//! Confirmation gating for destructive or expensive operations.
//!
//! The session never overwrites a named object or loads an oversized
//! file on its own authority — it asks the gate. A GUI shell implements
//! this with a dialog; headless callers pick one of the fixed gates.

/// What the session is asking the user to confirm.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfirmRequest {
    /// File exceeds the configured size threshold
    LargeFile {
        path: String,
        byte_len: u64,
        threshold_bytes: u64,
    },
    /// A loaded object with this name already exists
    OverwriteName { name: String },
}

impl ConfirmRequest {
    /// Short reason string used in cancellation errors and logs.
    pub fn reason(&self) -> String {
        match self {
            ConfirmRequest::LargeFile { path, byte_len, .. } => {
                format!("large file {} ({} bytes) declined", path, byte_len)
            }
            ConfirmRequest::OverwriteName { name } => {
                format!("overwrite of '{}' declined", name)
            }
        }
    }
}

/// Yes/no hook consulted before an operation proceeds.
pub trait ConfirmGate {
    /// Return `true` to let the operation proceed.
    fn confirm(&mut self, request: &ConfirmRequest) -> bool;
}

/// Gate that declines everything. Used as the default when no
/// interactive surface is attached.
pub struct DenyAllGate;

impl ConfirmGate for DenyAllGate {
    fn confirm(&mut self, _: &ConfirmRequest) -> bool {
        false
    }
}

/// Gate that approves everything. For scripted callers and tests.
pub struct ApproveAllGate;

impl ConfirmGate for ApproveAllGate {
    fn confirm(&mut self, _: &ConfirmRequest) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_gates() {
        let request = ConfirmRequest::OverwriteName {
            name: "cfg".to_string(),
        };
        assert!(!DenyAllGate.confirm(&request));
        assert!(ApproveAllGate.confirm(&request));
    }

    #[test]
    fn test_reason_mentions_subject() {
        let request = ConfirmRequest::LargeFile {
            path: "big.bin".to_string(),
            byte_len: 1024,
            threshold_bytes: 100,
        };
        assert!(request.reason().contains("big.bin"));
    }
}
