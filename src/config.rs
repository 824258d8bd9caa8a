// Config merger: read-modify-write of config.json that only touches the
// `logo_path` key. The rest of the document belongs to the application
// that reads it, so every other key is carried through untouched.

use crate::error::ConfigWriteError;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// The single key this tool manages.
pub const LOGO_PATH_KEY: &str = "logo_path";

/// A config document is an open-ended JSON object.
pub type ConfigDocument = Map<String, Value>;

/// Load the document at `path`, falling back to an empty object when the
/// file is missing, unreadable, not valid JSON, or not a JSON object.
/// A broken config never blocks updating the logo.
pub fn load_document(path: &Path) -> ConfigDocument {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("no config at {}, starting empty", path.display());
            return ConfigDocument::new();
        }
        Err(e) => {
            tracing::warn!("could not read {}: {}; starting empty", path.display(), e);
            return ConfigDocument::new();
        }
    };

    match serde_json::from_str::<Value>(&data) {
        Ok(Value::Object(map)) => map,
        Ok(other) => {
            tracing::warn!(
                "{} is not a JSON object (found {}); starting empty",
                path.display(),
                json_kind(&other)
            );
            ConfigDocument::new()
        }
        Err(e) => {
            tracing::warn!("could not parse {}: {}; starting empty", path.display(), e);
            ConfigDocument::new()
        }
    }
}

/// Set `logo_path` to `value`. Existing keys keep their values and order.
pub fn merge_logo_path(mut doc: ConfigDocument, value: &str) -> ConfigDocument {
    doc.insert(LOGO_PATH_KEY.to_string(), Value::String(value.to_string()));
    doc
}

/// Overwrite `path` with `doc` as 2-space indented JSON, no trailing newline.
/// Numbers are written back exactly as they were read.
pub fn write_document(path: &Path, doc: &ConfigDocument) -> Result<(), ConfigWriteError> {
    let text = serde_json::to_string_pretty(doc)?;
    fs::write(path, text).map_err(|source| ConfigWriteError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Load, merge and write back in one go.
pub fn update_logo_path(path: &Path, value: &str) -> Result<(), ConfigWriteError> {
    let doc = merge_logo_path(load_document(path), value);
    write_document(path, &doc)?;
    tracing::info!("{} updated: {}={}", path.display(), LOGO_PATH_KEY, value);
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
