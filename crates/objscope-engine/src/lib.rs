//! ObjScope Engine - Orchestration layer
//!
//! Provides the `BrowserSession` controller that coordinates between
//! the core introspection kernel and the persistence layer, plus the
//! confirmation gating destructive operations route through.

pub mod gate;
pub mod session;

pub use gate::{ApproveAllGate, ConfirmGate, ConfirmRequest, DenyAllGate};
pub use session::{
    BrowserSession, LoadOutcome, SaveOutcome, Selection, SelectionView, SESSION_ROOT,
};
