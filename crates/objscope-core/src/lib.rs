//! ObjScope Core - Object-graph introspection kernel
//!
//! This crate provides the foundational data structures and operations for
//! ObjScope, including:
//! - The dynamic `Value` graph with shared, interiorly-mutable handles
//! - Structural classification with scalar previews
//! - Bounded recursive expansion into navigable node trees
//! - Path expressions (AST + text round-trip) and live re-resolution
//! - Member enumeration and value summaries for the detail views
//! - The named object store that holds loaded values
//! - The composite type registry consulted when decoding native streams
//!
//! No file I/O happens here; persistence lives in `objscope-store`.

pub mod classify;
pub mod errors;
pub mod logging_facility;
pub mod members;
pub mod model;
pub mod named_store;
pub mod path;
pub mod registry;
pub mod resolve;
pub mod summary;
pub mod traversal;

// Re-export commonly used types
pub use classify::{classify, ValueKind};
pub use errors::{ErrorClass, ObjScopeError, Result};
pub use members::members;
pub use model::{CallableValue, Introspectable, Member, MemberCategory, Node, ObjectValue, SharedValue, Value};
pub use named_store::NamedObjectStore;
pub use path::{ObjectPath, PathStep};
pub use registry::TypeRegistry;
pub use resolve::{resolve, resolve_text, RootBindings};
pub use summary::{summarize, ValueSummary};
pub use traversal::{expand, expand_root, filter_nodes, DEFAULT_MAX_DEPTH};
