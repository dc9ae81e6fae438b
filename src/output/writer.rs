use crate::domain::FeatureDocument;
use crate::errors::FetchError;
use log::info;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::path::Path;

/// Write the aggregate document as pretty-printed JSON: 4-space indent,
/// UTF-8, non-ASCII characters emitted literally. The file is written in one
/// shot, overwriting whatever was there.
pub fn write_document(path: &Path, document: &FeatureDocument) -> Result<(), FetchError> {
    let json = render(document, path)?;

    fs::write(path, json).map_err(|source| FetchError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    info!("Wrote output file: {}", path.display());
    Ok(())
}

fn render(document: &FeatureDocument, path: &Path) -> Result<Vec<u8>, FetchError> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);

    document
        .serialize(&mut serializer)
        .map_err(|source| FetchError::Io {
            path: path.to_path_buf(),
            source: source.into(),
        })?;

    Ok(buffer)
}
