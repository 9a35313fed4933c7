use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::core::document::DatasetDocument;
use crate::error::Result;
use crate::types::OutputFormat;

/// Serialize a document in the requested format
pub fn render_document(document: &DatasetDocument, format: OutputFormat) -> Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(document)?,
        OutputFormat::Json => {
            let mut s = serde_json::to_string_pretty(document)?;
            s.push('\n');
            s
        }
    };
    Ok(rendered)
}

/// Location of the document for `document` inside `dir`
pub fn document_path(dir: &Path, document: &DatasetDocument, format: OutputFormat) -> PathBuf {
    dir.join(format!("{}.{}", document.name, format.extension()))
}

/// Render and write the document next to its rasters.
/// Nothing is created on disk unless rendering succeeds.
pub fn write_document(
    dir: &Path,
    document: &DatasetDocument,
    format: OutputFormat,
) -> Result<PathBuf> {
    let rendered = render_document(document, format)?;
    let path = document_path(dir, document, format);
    info!("Writing {:?}", path);
    fs::write(&path, rendered)?;
    Ok(path)
}

/// Read a previously written document back
pub fn read_document(path: &Path) -> Result<DatasetDocument> {
    let content = fs::read_to_string(path)?;
    let is_json = path.extension().is_some_and(|e| e == "json");
    let document = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    Ok(document)
}
