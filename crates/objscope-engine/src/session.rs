//! The browser session: single controller object owning the inspected
//! root, the named object store, the current selection, and the
//! configuration.
//!
//! A UI shell holds one `BrowserSession` and calls through it; nothing
//! in the stack keeps ambient global state. The session is itself
//! `Introspectable` and serves as the default inspected root, so the
//! tree always has something to show — including the session's own
//! reserved internals at the root level.

use std::path::Path;

use serde::Serialize;

use objscope_core::errors::{ObjScopeError, Result};
use objscope_core::members::members;
use objscope_core::model::{Introspectable, Member, Node, ObjectValue, SharedValue, Value};
use objscope_core::named_store::{NamedObjectStore, STORE_ROOT};
use objscope_core::path::ObjectPath;
use objscope_core::registry::TypeRegistry;
use objscope_core::resolve::{resolve, RootBindings};
use objscope_core::summary::{summarize, ValueSummary};
use objscope_core::traversal::{expand_root, filter_nodes};
use objscope_core::{log_op_end, log_op_error, log_op_start};
use objscope_store::codec::{
    decode_native, decode_portable, encode_native, encode_portable, from_json, LoadReport,
    SaveMethod,
};
use objscope_store::config::Config;
use objscope_store::preflight::{preflight, Preflight};
use objscope_store::{atomic_write, read_bytes};

use crate::gate::{ConfirmGate, ConfirmRequest};

/// Identifier the session's own reflection is bound to in paths.
pub const SESSION_ROOT: &str = "root";

/// The current selection: a path and the handle it resolved to.
#[derive(Debug, Clone)]
pub struct Selection {
    pub path: ObjectPath,
    pub value: SharedValue,
}

/// Detail views derived from a successful selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectionView {
    pub path: String,
    pub type_name: String,
    pub members: Vec<Member>,
    pub summary: ValueSummary,
}

/// Result of a save operation.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveOutcome {
    pub path: String,
    pub byte_len: usize,
    pub method: SaveMethod,
}

/// Result of a load operation.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub name: String,
    pub type_name: String,
    pub byte_len: u64,
    /// Sniffing diagnostics; present only for portable loads
    pub report: Option<LoadReport>,
}

/// Controller object the UI layer drives.
pub struct BrowserSession {
    config: Config,
    registry: TypeRegistry,
    loaded: NamedObjectStore,
    selection: Option<Selection>,
}

impl BrowserSession {
    /// Create a session with the given configuration.
    pub fn new(config: Config) -> Self {
        let mut registry = TypeRegistry::new();
        registry.register("BrowserSession", "the browser controller");
        Self {
            config,
            registry,
            loaded: NamedObjectStore::new(),
            selection: None,
        }
    }

    /// The effective configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Mutable configuration access (settings editor)
    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.config
    }

    /// Re-read the configuration document from disk.
    pub fn reload_config(&mut self, path: &Path) {
        self.config = Config::load(path);
    }

    /// The composite type registry; callers register their own types here
    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// The named object store
    pub fn store(&self) -> &NamedObjectStore {
        &self.loaded
    }

    /// The current selection, if any
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Root bindings for path resolution: the session's reflection plus
    /// the named store.
    pub fn bindings(&self) -> RootBindings {
        let mut roots = RootBindings::new();
        roots.bind(SESSION_ROOT, self.reflect_value());
        roots.bind(STORE_ROOT, self.loaded.as_value());
        roots
    }

    /// Rebuild the full display tree: the inspected root first, then one
    /// subtree per loaded object. Wholesale on every call.
    pub fn tree(&self) -> Vec<Node> {
        let depth = self.config.max_depth();
        let root_label = format!("{} (root)", Introspectable::type_name(self));
        let mut nodes = vec![expand_root(
            root_label,
            &self.reflect_value(),
            ObjectPath::root(SESSION_ROOT),
            depth,
        )];
        if !self.loaded.is_empty() {
            nodes.push(expand_root(
                format!("📦 Loaded Objects ({})", self.loaded.len()),
                &self.loaded.as_value(),
                ObjectPath::root(STORE_ROOT),
                depth,
            ));
        }
        nodes
    }

    /// Rebuild the tree and filter it by a label query.
    pub fn search(&self, query: &str) -> Vec<Node> {
        filter_nodes(&self.tree(), query, self.config.search_case_sensitive())
    }

    /// Resolve a path string and make it the current selection.
    ///
    /// On failure the previous selection is left untouched — a stale
    /// path is a no-op, not a crash.
    ///
    /// # Errors
    ///
    /// `PathSyntax` or any resolution error from the live graph.
    pub fn select(&mut self, path_text: &str) -> Result<SelectionView> {
        let outcome = (|| {
            let path = ObjectPath::parse(path_text)?;
            let value = resolve(&path, &self.bindings())?;
            let view = SelectionView {
                path: path.to_string(),
                type_name: value.borrow().type_name(),
                members: members(&value),
                summary: summarize(&path, &value),
            };
            self.selection = Some(Selection { path, value });
            Ok(view)
        })();
        if let Err(err) = &outcome {
            log_op_error!("select", err);
        }
        outcome
    }

    /// Derive the member table for the current selection.
    pub fn selection_members(&self) -> Result<Vec<Member>> {
        let selection = self.selection.as_ref().ok_or(ObjScopeError::NoSelection)?;
        Ok(members(&selection.value))
    }

    /// Save the current selection in the native format.
    ///
    /// Serialization happens fully in memory first; on failure nothing
    /// is written.
    ///
    /// # Errors
    ///
    /// `NoSelection`, serialization errors, or `Io`.
    pub fn save_native(&self, file: &Path) -> Result<SaveOutcome> {
        log_op_start!("save_native", file = %file.display());
        let outcome = (|| {
            let selection = self.selection.as_ref().ok_or(ObjScopeError::NoSelection)?;
            let bytes = encode_native(&selection.value, self.config.format_version())?;
            atomic_write(file, &bytes)?;
            Ok(SaveOutcome {
                path: file.display().to_string(),
                byte_len: bytes.len(),
                method: SaveMethod::Native,
            })
        })();
        self.finish("save_native", outcome)
    }

    /// Save the current selection in the portable format (type-directed
    /// conversion chain).
    ///
    /// # Errors
    ///
    /// `NoSelection`, serialization errors, or `Io`.
    pub fn save_portable(&self, file: &Path) -> Result<SaveOutcome> {
        log_op_start!("save_portable", file = %file.display());
        let outcome = (|| {
            let selection = self.selection.as_ref().ok_or(ObjScopeError::NoSelection)?;
            let (bytes, method) =
                encode_portable(&selection.value, self.config.format_version())?;
            atomic_write(file, &bytes)?;
            Ok(SaveOutcome {
                path: file.display().to_string(),
                byte_len: bytes.len(),
                method,
            })
        })();
        self.finish("save_portable", outcome)
    }

    /// Load a native-format file into the store under `name`.
    ///
    /// # Errors
    ///
    /// Preflight, gating, decode, or store errors. The store is only
    /// touched after a fully successful decode.
    pub fn load_native(
        &mut self,
        file: &Path,
        name: &str,
        gate: &mut dyn ConfirmGate,
    ) -> Result<LoadOutcome> {
        log_op_start!("load_native", file = %file.display(), name = name);
        let outcome = (|| {
            let pre = preflight(file, self.config.large_file_warning_mb())?;
            confirm_size(&pre, gate)?;
            let bytes = read_bytes(file)?;
            let value = decode_native(&bytes, &self.registry, self.config.memory_limit_bytes())?;
            let type_name = value.borrow().type_name();
            self.insert_gated(name, value, gate)?;
            Ok(LoadOutcome {
                name: name.to_string(),
                type_name,
                byte_len: pre.byte_len,
                report: None,
            })
        })();
        self.finish("load_native", outcome)
    }

    /// Load a portable-format file into the store under `name`,
    /// returning the sniffing report alongside the outcome.
    ///
    /// # Errors
    ///
    /// Preflight, gating, or store errors. Interpretation itself is
    /// total and cannot fail.
    pub fn load_portable(
        &mut self,
        file: &Path,
        name: &str,
        gate: &mut dyn ConfirmGate,
    ) -> Result<LoadOutcome> {
        log_op_start!("load_portable", file = %file.display(), name = name);
        let outcome = (|| {
            let pre = preflight(file, self.config.large_file_warning_mb())?;
            confirm_size(&pre, gate)?;
            let bytes = read_bytes(file)?;
            let (value, report) =
                decode_portable(&bytes, &self.registry, self.config.memory_limit_bytes());
            let type_name = value.borrow().type_name();
            self.insert_gated(name, value, gate)?;
            Ok(LoadOutcome {
                name: name.to_string(),
                type_name,
                byte_len: pre.byte_len,
                report: Some(report),
            })
        })();
        self.finish("load_portable", outcome)
    }

    fn insert_gated(
        &mut self,
        name: &str,
        value: SharedValue,
        gate: &mut dyn ConfirmGate,
    ) -> Result<()> {
        if self.loaded.contains(name) {
            let request = ConfirmRequest::OverwriteName {
                name: name.to_string(),
            };
            if !gate.confirm(&request) {
                return Err(ObjScopeError::Cancelled {
                    reason: request.reason(),
                });
            }
            self.loaded.put_overwrite(name, value);
            Ok(())
        } else {
            self.loaded.put(name, value)
        }
    }

    fn finish<T>(&self, op: &'static str, outcome: Result<T>) -> Result<T> {
        match &outcome {
            Ok(_) => log_op_end!(op),
            Err(err) => log_op_error!(op, err),
        }
        outcome
    }
}

fn confirm_size(pre: &Preflight, gate: &mut dyn ConfirmGate) -> Result<()> {
    if !pre.oversized {
        return Ok(());
    }
    let request = ConfirmRequest::LargeFile {
        path: pre.path.display().to_string(),
        byte_len: pre.byte_len,
        threshold_bytes: pre.threshold_bytes,
    };
    if gate.confirm(&request) {
        Ok(())
    } else {
        Err(ObjScopeError::Cancelled {
            reason: request.reason(),
        })
    }
}

impl Introspectable for BrowserSession {
    fn type_name(&self) -> &str {
        "BrowserSession"
    }

    fn reflect(&self) -> ObjectValue {
        let mut obj = ObjectValue::new(Introspectable::type_name(self));
        obj.set("config", from_json(self.config.document()));
        obj.set_shared("loaded_objects", self.loaded.as_value());
        obj.set(
            "selected_path",
            match &self.selection {
                Some(selection) => Value::from(selection.path.to_string()),
                None => Value::Null,
            },
        );
        obj.set(
            "_registered_types",
            Value::Seq(
                self.registry
                    .entries()
                    .map(|entry| Value::from(entry.type_name.as_str()).into_shared())
                    .collect(),
            ),
        );
        obj.method("select", &["path"]);
        obj.method("search", &["query"]);
        obj.method("_rebuild_tree", &["depth"]);
        obj
    }
}
