//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, GDAL and serialization errors, and provides semantic
//! variants for input-format and metadata failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("GDAL error: {0}")]
    Gdal(#[from] crate::io::GdalError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No YYYY-MM-DD_YYYY-MM-DD date range found in: {name}")]
    MissingTimeWindow { name: String },

    #[error("Invalid timestamp: {value}")]
    InvalidTimestamp { value: String },

    #[error("Unrecognized band (no VV or VH marker): {path:?}")]
    UnrecognizedBand { path: PathBuf },

    #[error("Duplicate band {band}: {first:?} and {second:?}")]
    DuplicateBand {
        band: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("No *.{extension} rasters found in {dir:?}")]
    NoRasters { dir: PathBuf, extension: String },

    #[error("Directory name {name:?} does not match platform pattern {pattern}")]
    PlatformMismatch { name: String, pattern: String },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Unknown ground station code: {code}")]
    UnknownGroundStation { code: String },

    #[error("Configuration error: {0}")]
    Config(String),
}
