//! Dataset saving

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tracing::info;

use super::error::DatasetError;

/// Serialize a value as pretty-printed JSON and write it to disk
///
/// Uses 4-space indentation and a trailing newline. Per-record key order
/// is whatever the value's `Serialize` implementation emits, which for
/// the record structs in this crate is their declared field order.
pub fn save_json_pretty<T: Serialize>(path: &Path, value: &T) -> Result<(), DatasetError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|source| DatasetError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    buf.push(b'\n');

    fs::write(path, &buf).map_err(|source| DatasetError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote {}", path.display());
    Ok(())
}
