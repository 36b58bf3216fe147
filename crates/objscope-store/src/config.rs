//! Configuration document: category → key → scalar-or-list values.
//!
//! The effective document is always the hard-coded defaults with a
//! persisted document deep-merged on top: every default key is present
//! after a load, and keys the defaults have never heard of are
//! preserved, not discarded. Saves are atomic and pretty-printed.

use std::path::Path;

use serde_json::{json, Value as JsonValue};
use tracing::warn;

use objscope_core::errors::Result;

use crate::atomic::atomic_write;
use crate::errors::{config_error, io_error};

/// Default configuration file name, resolved in the working directory.
pub const CONFIG_FILE: &str = "settings.json";

/// The effective configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    doc: JsonValue,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// The hard-coded default document.
    pub fn defaults() -> Self {
        Self {
            doc: default_document(),
        }
    }

    /// Load from a file, deep-merging the persisted document under the
    /// defaults. A missing file yields the defaults; an unreadable or
    /// unparseable file is logged and also yields the defaults, so the
    /// application always starts.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            return Self::defaults();
        }
        match std::fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<JsonValue>(&text) {
                Ok(loaded) => Self::from_document(loaded),
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "config parse failed, using defaults");
                    Self::defaults()
                }
            },
            Err(err) => {
                warn!(file = %path.display(), error = %err, "config read failed, using defaults");
                Self::defaults()
            }
        }
    }

    /// Build an effective document from a loaded one (defaults merged under).
    /// A non-object document cannot merge; it is logged and ignored.
    pub fn from_document(loaded: JsonValue) -> Self {
        if !loaded.is_object() {
            warn!("config document root is not an object, using defaults");
            return Self::defaults();
        }
        let mut doc = default_document();
        deep_merge(&mut doc, loaded);
        Self { doc }
    }

    /// Persist the document (atomic, pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns an `Io` error when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = serde_json::to_vec_pretty(&self.doc)
            .map_err(|e| io_error("render_config", std::io::Error::other(e)))?;
        atomic_write(path, &text)
    }

    /// Import a document from an arbitrary path, strictly validated.
    ///
    /// # Errors
    ///
    /// - `Io` when the file cannot be read
    /// - `InvalidConfig` when the content is not a JSON object
    pub fn import(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| io_error("import_config", e))?;
        let loaded: JsonValue =
            serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))?;
        if !loaded.is_object() {
            return Err(config_error("document root must be an object"));
        }
        Ok(Self::from_document(loaded))
    }

    /// Export is a save to an arbitrary path.
    ///
    /// # Errors
    ///
    /// Same as [`save`](Config::save).
    pub fn export(&self, path: &Path) -> Result<()> {
        self.save(path)
    }

    /// Replace the document with the defaults.
    pub fn reset(&mut self) {
        self.doc = default_document();
    }

    /// The full effective document.
    pub fn document(&self) -> &JsonValue {
        &self.doc
    }

    /// Read one setting.
    pub fn get(&self, category: &str, key: &str) -> Option<&JsonValue> {
        self.doc.get(category)?.get(key)
    }

    /// Write one setting, creating the category if needed.
    pub fn set(&mut self, category: &str, key: &str, value: JsonValue) {
        let root = self
            .doc
            .as_object_mut()
            .expect("config document root is an object");
        let entry = root
            .entry(category.to_string())
            .or_insert_with(|| json!({}));
        if let Some(map) = entry.as_object_mut() {
            map.insert(key.to_string(), value);
        }
    }

    // ----- typed accessors for consumed keys -----

    /// Graph expansion depth bound (`browser.max_depth`)
    pub fn max_depth(&self) -> usize {
        self.get("browser", "max_depth")
            .and_then(JsonValue::as_u64)
            .unwrap_or(6) as usize
    }

    /// Tree search case sensitivity (`browser.search_case_sensitive`)
    pub fn search_case_sensitive(&self) -> bool {
        self.get("browser", "search_case_sensitive")
            .and_then(JsonValue::as_bool)
            .unwrap_or(false)
    }

    /// Load-size confirmation threshold (`advanced.large_file_warning_mb`)
    pub fn large_file_warning_mb(&self) -> u64 {
        self.get("advanced", "large_file_warning_mb")
            .and_then(JsonValue::as_u64)
            .unwrap_or(100)
    }

    /// Decode memory ceiling (`advanced.memory_limit_mb`)
    pub fn memory_limit_bytes(&self) -> u64 {
        self.get("advanced", "memory_limit_mb")
            .and_then(JsonValue::as_u64)
            .unwrap_or(500)
            .saturating_mul(1024 * 1024)
    }

    /// Native serialization version hint (`persistence.format_version`)
    pub fn format_version(&self) -> u32 {
        self.get("persistence", "format_version")
            .and_then(JsonValue::as_u64)
            .unwrap_or(4) as u32
    }

    /// External editor invocation template (`advanced.editor_command`)
    pub fn editor_command(&self) -> String {
        self.get("advanced", "editor_command")
            .and_then(JsonValue::as_str)
            .unwrap_or("nano {filename}")
            .to_string()
    }

    /// Substitute the `{filename}` placeholder in the editor template.
    pub fn editor_invocation(&self, filename: &str) -> String {
        self.editor_command().replace("{filename}", filename)
    }
}

/// Deep merge: `overlay` wins on leaves, objects merge recursively,
/// and overlay keys absent from `base` are inserted as-is.
fn deep_merge(base: &mut JsonValue, overlay: JsonValue) {
    match (base, overlay) {
        (JsonValue::Object(base_map), JsonValue::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base_slot, overlay_value) => *base_slot = overlay_value,
    }
}

fn default_document() -> JsonValue {
    json!({
        "browser": {
            "max_depth": 6,
            "show_private": false,
            "show_magic": true,
            "expand_on_select": true,
            "auto_refresh": false,
            "search_case_sensitive": false
        },
        "display": {
            "theme": "default",
            "font_family": "monospace",
            "font_size": 10,
            "tree_font_size": 9,
            "window_width": 1400,
            "window_height": 900,
            "status_bar_visible": true,
            "line_numbers": false
        },
        "editor": {
            "syntax_highlighting": true,
            "word_wrap": false,
            "tab_size": 4,
            "auto_indent": true
        },
        "persistence": {
            "auto_save_loaded_objects": false,
            "loaded_objects_file": "loaded_objects.dat",
            "remember_window_position": true,
            "max_recent_files": 10,
            "format_version": 4
        },
        "advanced": {
            "editor_command": "nano {filename}",
            "debug_mode": false,
            "log_file": "objscope.log",
            "enable_logging": false,
            "performance_mode": false,
            "large_file_warning_mb": 100,
            "memory_limit_mb": 500
        },
        "colors": {
            "background": "white",
            "foreground": "black",
            "keyword_color": "blue",
            "string_color": "green",
            "comment_color": "gray",
            "function_color": "purple",
            "selection_bg": "lightblue",
            "error_color": "red"
        }
    })
}
