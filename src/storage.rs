use std::fs::File;
use std::path::Path;

use serde::Serialize;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize document: {0}")]
    Json(#[from] serde_json::Error)
}

/// Write a document as pretty-printed JSON (4 spaces indentation,
/// non-ASCII preserved as is, no trailing newline)
///
/// The file is overwritten in place. Both loaders shape the whole
/// document in memory first, so the only write happens here at the
/// very end of a run
#[tracing::instrument(level = "debug", skip(value))]
pub fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = File::create(path)?;

    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut file, formatter);

    value.serialize(&mut serializer)?;

    Ok(())
}
