//! JSON export of the password collection.

use vaultic_core::{defaults, PasswordEntry, Result};

/// Render the export document: the full entry list as pretty-printed JSON
/// with two-space indentation. Suggested download name is
/// [`defaults::EXPORT_FILE_NAME`].
pub fn render_export(entries: &[PasswordEntry]) -> Result<String> {
    let doc = serde_json::to_string_pretty(entries)?;
    tracing::info!(
        subsystem = "store",
        op = "export",
        result_count = entries.len(),
        "Password collection exported"
    );
    Ok(doc)
}

/// The suggested file name for a rendered export document.
pub fn export_file_name() -> &'static str {
    defaults::EXPORT_FILE_NAME
}
