//! Import and export payload handling.
//!
//! This module parses host-supplied import payloads into typed items and
//! produces the export payload written back out for the user. Import is
//! deliberately permissive at the field level (absent fields become empty
//! strings, unknown fields are ignored) but strict about shape: anything
//! other than a JSON array of records rejects the whole payload.

use crate::domain::error::{FluxlineError, Result};
use crate::domain::item::Item;
use std::path::{Path, PathBuf};

/// File name suggested to the host for saved exports.
pub const EXPORT_FILE_NAME: &str = "launcher-export.json";

/// Parses an import payload into an item list.
///
/// The payload must be a JSON array whose entries are objects. Entry fields
/// follow the [`Item`] model: absent fields deserialize to empty strings and
/// unrecognized fields are dropped. Identifiers are taken as given.
///
/// # Errors
///
/// Returns [`FluxlineError::DataFormat`] when the payload is not valid JSON,
/// when the top-level value is not an array, or when any entry is not an
/// object. A rejected payload leaves the caller's state untouched.
///
/// # Examples
///
/// ```
/// use fluxline::storage::parse_import;
///
/// let items = parse_import(r#"[{"id":"a","name":"Docs"}]"#).unwrap();
/// assert_eq!(items[0].name, "Docs");
///
/// assert!(parse_import(r#"{"not":"a list"}"#).is_err());
/// ```
pub fn parse_import(payload: &str) -> Result<Vec<Item>> {
    let value: serde_json::Value = serde_json::from_str(payload)
        .map_err(|e| FluxlineError::DataFormat(format!("import payload is not valid JSON: {e}")))?;

    if !value.is_array() {
        return Err(FluxlineError::DataFormat(
            "import payload is not a list".to_string(),
        ));
    }

    serde_json::from_value(value)
        .map_err(|e| FluxlineError::DataFormat(format!("import entry is not a record: {e}")))
}

/// Serializes the item list as the pretty-printed export payload.
///
/// # Errors
///
/// Returns [`FluxlineError::Storage`] if serialization fails.
pub fn export_payload(items: &[Item]) -> Result<String> {
    serde_json::to_string_pretty(items)
        .map_err(|e| FluxlineError::Storage(format!("failed to serialize export: {e}")))
}

/// Writes the export payload into the given directory.
///
/// Convenience for hosts that save exports straight to disk rather than
/// handing the payload to the user some other way. Returns the path of the
/// written file, named [`EXPORT_FILE_NAME`].
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_export(dir: &Path, items: &[Item]) -> Result<PathBuf> {
    let payload = export_payload(items)?;
    let path = dir.join(EXPORT_FILE_NAME);
    std::fs::write(&path, payload)?;
    tracing::debug!(path = ?path, count = items.len(), "export written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn import_accepts_an_array_of_records() {
        let items = parse_import(
            r#"[
                {"id":"a1","name":"Alpha","tags":"t","url":"https://a.example"},
                {"id":"b2","name":"Beta"}
            ]"#,
        )
        .unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Alpha");
        assert_eq!(items[1].url, "");
    }

    #[test]
    fn import_normalizes_absent_fields_and_ignores_unknown_ones() {
        let items = parse_import(r#"[{"id":"a1","name":"Alpha","starred":true}]"#).unwrap();

        assert_eq!(items[0].tags, "");
        assert_eq!(items[0].description, "");
    }

    #[test]
    fn import_rejects_non_array_payloads() {
        assert!(matches!(
            parse_import(r#"{"id":"a1"}"#),
            Err(FluxlineError::DataFormat(_))
        ));
        assert!(matches!(
            parse_import("42"),
            Err(FluxlineError::DataFormat(_))
        ));
        assert!(matches!(
            parse_import("not json at all"),
            Err(FluxlineError::DataFormat(_))
        ));
    }

    #[test]
    fn import_rejects_arrays_with_non_record_entries() {
        assert!(matches!(
            parse_import(r#"[{"id":"a1"}, 7]"#),
            Err(FluxlineError::DataFormat(_))
        ));
    }

    #[test]
    fn export_is_a_pretty_printed_array() {
        let items = parse_import(r#"[{"id":"a1","name":"Alpha"}]"#).unwrap();
        let payload = export_payload(&items).unwrap();

        assert!(payload.starts_with("[\n"));
        assert!(payload.contains("\"name\": \"Alpha\""));

        let round_tripped = parse_import(&payload).unwrap();
        assert_eq!(round_tripped, items);
    }

    #[test]
    fn write_export_uses_the_fixed_file_name() {
        let dir = tempfile::TempDir::new().unwrap();
        let items = parse_import("[]").unwrap();

        let path = write_export(dir.path(), &items).unwrap();

        assert!(path.ends_with(EXPORT_FILE_NAME));
        assert!(path.exists());
    }
}
