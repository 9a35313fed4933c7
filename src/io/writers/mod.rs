//! Output writers for prepared dataset documents.
pub mod metadata;

pub use metadata::{document_path, read_document, render_document, write_document};
