//! Loading, transforming, and rewriting `package.json`.
//!
//! The transform applies fixed defaults, forces a few fields to canonical
//! values, ensures the standard script set, and finally projects the manifest
//! onto a fixed key order. The projection is destructive: top-level keys
//! outside [`CANONICAL_KEY_ORDER`] are dropped from the rewritten file. That
//! matches the behavior this tool has always had; callers relying on extra
//! top-level fields (e.g. `keywords`) will lose them.
//!
//! Field ordering is significant throughout, so the manifest is held in a
//! [`serde_json::Map`] with insertion-order preservation enabled.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value, json};

use crate::error::ManifestError;
use crate::templates;

/// File name of the manifest inside the project directory.
pub const MANIFEST_FILE: &str = "package.json";

/// The fixed key order of the rewritten manifest. Keys absent after the
/// transform are omitted; keys present in the input but not listed here are
/// dropped.
pub const CANONICAL_KEY_ORDER: [&str; 14] = [
    "name",
    "version",
    "packageManager",
    "description",
    "license",
    "author",
    "repository",
    "main",
    "types",
    "type",
    "scripts",
    "devDependencies",
    "dependencies",
    "bin",
];

/// JavaScript truthiness for JSON values: `null`, `false`, `0`, and `""` are
/// falsy, everything else (including empty objects and arrays) is truthy.
#[allow(clippy::float_cmp)] // exact zero check, as in JS
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// An in-memory `package.json`, keyed in file order.
#[derive(Debug, Clone)]
pub struct Manifest {
    path: PathBuf,
    fields: Map<String, Value>,
}

impl Manifest {
    /// Load the manifest from `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Missing`] if the file does not exist (the
    /// precondition guard — nothing has been written at that point),
    /// [`ManifestError::Io`] if it cannot be read, and
    /// [`ManifestError::Parse`] / [`ManifestError::NotAnObject`] if the
    /// content is not a JSON object.
    pub fn load(dir: &Path) -> Result<Self, ManifestError> {
        let path = dir.join(MANIFEST_FILE);
        if !path.exists() {
            return Err(ManifestError::Missing {
                dir: dir.display().to_string(),
            });
        }
        let text = fs::read_to_string(&path).map_err(|source| ManifestError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let value: Value =
            serde_json::from_str(&text).map_err(|source| ManifestError::Parse {
                path: path.display().to_string(),
                source,
            })?;
        match value {
            Value::Object(fields) => Ok(Self { path, fields }),
            _ => Err(ManifestError::NotAnObject {
                path: path.display().to_string(),
            }),
        }
    }

    /// Path of the underlying file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read a top-level field.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Top-level keys in their current order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Apply the full transform: defaults, forced fields, script set, and
    /// the canonical key projection.
    pub fn transform(&mut self) {
        self.apply_defaults();
        self.force_module_layout();
        self.ensure_scripts();
        self.ensure_dev_dependencies();
        self.project_canonical();
    }

    /// Write the manifest back to disk with two-space indentation and no
    /// trailing newline, overwriting the original file.
    ///
    /// # Errors
    ///
    /// Returns [`ManifestError::Io`] if the file cannot be written.
    pub fn save(&self) -> Result<(), ManifestError> {
        let body =
            serde_json::to_string_pretty(&self.fields).map_err(|source| ManifestError::Io {
                path: self.path.display().to_string(),
                source: source.into(),
            })?;
        fs::write(&self.path, body).map_err(|source| ManifestError::Io {
            path: self.path.display().to_string(),
            source,
        })
    }

    /// Assign `fallback` to `key` unless the existing value is truthy.
    fn default_if_falsy(&mut self, key: &str, fallback: Value) {
        if !self.fields.get(key).is_some_and(is_truthy) {
            self.fields.insert(key.to_string(), fallback);
        }
    }

    /// Defaults for metadata fields: kept when truthy, assigned otherwise.
    /// `packageManager` is deliberately left untouched, including absence.
    fn apply_defaults(&mut self) {
        self.default_if_falsy("description", json!(""));
        self.default_if_falsy("license", json!("MIT"));
        self.default_if_falsy("author", json!(""));
        self.default_if_falsy("repository", json!({ "type": "", "url": "" }));
    }

    /// Forced overwrites, regardless of prior content: the scaffolded project
    /// is always an ES module built into `dist/`.
    fn force_module_layout(&mut self) {
        self.fields.insert("type".to_string(), json!("module"));
        self.fields.insert("main".to_string(), json!("dist/index.js"));
        self.fields.insert("types".to_string(), json!("dist/index.d.ts"));
    }

    /// Merge the standard script set into `scripts`.
    ///
    /// Pre-existing entries keep their position and, when truthy, their
    /// value; new entries are appended in fallback order. `test` is special:
    /// it is also replaced when its trimmed value equals the `pnpm init`
    /// placeholder. A `scripts` value that is not an object is discarded.
    fn ensure_scripts(&mut self) {
        let mut scripts = match self.fields.get("scripts") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        for (name, fallback) in templates::SCRIPT_FALLBACKS {
            let current = scripts.get(name);
            let placeholder = name == "test"
                && current
                    .and_then(Value::as_str)
                    .is_some_and(|s| s.trim() == templates::PLACEHOLDER_TEST_SCRIPT);
            if placeholder || !current.is_some_and(is_truthy) {
                scripts.insert(name.to_string(), Value::String(fallback.to_string()));
            }
        }
        self.fields.insert("scripts".to_string(), Value::Object(scripts));
    }

    /// Ensure `devDependencies` is an object, defaulting to `{}`. Existing
    /// entries pass through unchanged.
    fn ensure_dev_dependencies(&mut self) {
        let deps = match self.fields.get("devDependencies") {
            Some(Value::Object(map)) => map.clone(),
            _ => Map::new(),
        };
        self.fields
            .insert("devDependencies".to_string(), Value::Object(deps));
    }

    /// Rebuild the field map in [`CANONICAL_KEY_ORDER`], dropping everything
    /// else.
    fn project_canonical(&mut self) {
        let mut out = Map::new();
        for key in CANONICAL_KEY_ORDER {
            if let Some(value) = self.fields.get(key) {
                out.insert(key.to_string(), value.clone());
            }
        }
        self.fields = out;
    }
}
