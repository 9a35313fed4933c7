//! High-level library API: prepare a dataset directory into a document,
//! write it next to the rasters, and drive a sequential batch over several
//! directories. Prefer these entrypoints over the low-level modules.
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, warn};
use uuid::Uuid;

use crate::core::bands::discover_bands;
use crate::core::constants::{
    FIELD_LEVEL, FIELD_TYPE, FORMAT_NAME, INSTRUMENT_NAME, PLATFORM_CODE, PLATFORM_PATTERN,
    PROCESSING_LEVEL, PRODUCT_TYPE, RASTER_EXTENSION, SATELLITE,
};
use crate::core::document::{
    DatasetDocument, DatasetFields, Extent, FormatTag, GridSpatial, Image, Instrument, Platform,
};
use crate::core::naming::display_name;
use crate::core::params::PrepareParams;
use crate::core::time_window::parse_time_window;
use crate::error::{Error, Result};
use crate::io::reproject::reproject_corners;
use crate::io::{read_projection, writers};

/// A fully assembled document together with its source directory
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    pub document: DatasetDocument,
    pub fields: DatasetFields,
    pub directory: PathBuf,
}

/// Batch processing report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub errors: usize,
}

static PLATFORM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PLATFORM_PATTERN).expect("platform pattern is valid"));

/// Platform identifier matched at the start of the directory stem
pub fn match_platform(dir: &Path) -> Result<String> {
    let stem = dir
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    PLATFORM_RE
        .captures(&stem)
        .and_then(|c| c.name("platform"))
        .map(|m| m.as_str().to_string())
        .ok_or(Error::PlatformMismatch {
            name: stem.clone(),
            pattern: PLATFORM_PATTERN.to_string(),
        })
}

/// Build the document for the rasters in `dir`. Performs no writes.
pub fn prepare_dataset(dir: &Path, params: &PrepareParams) -> Result<DatasetDocument> {
    let band_set = discover_bands(dir, RASTER_EXTENSION)?;
    let (_, first_path) = band_set.first().ok_or_else(|| Error::NoRasters {
        dir: dir.to_path_buf(),
        extension: RASTER_EXTENSION.to_string(),
    })?;

    let first_name = first_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let window = parse_time_window(&first_name)?;

    let relative = first_path
        .strip_prefix(dir)
        .unwrap_or(first_path)
        .to_string_lossy()
        .into_owned();
    let name = display_name(&relative);

    let projection = read_projection(first_path)?;
    let coord = reproject_corners(&projection.geo_ref_points, &projection.spatial_reference)?;

    let document = DatasetDocument {
        id: Uuid::new_v4(),
        name,
        processing_level: PROCESSING_LEVEL.to_string(),
        product_type: PRODUCT_TYPE.to_string(),
        creation_dt: window.start.clone(),
        platform: Platform {
            code: PLATFORM_CODE.to_string(),
        },
        instrument: Instrument {
            name: INSTRUMENT_NAME.to_string(),
        },
        extent: Extent {
            from_dt: window.start.clone(),
            to_dt: window.end.clone(),
            center_dt: params.center_dt.then(|| window.start.clone()),
            coord,
        },
        format: FormatTag {
            name: FORMAT_NAME.to_string(),
        },
        grid_spatial: GridSpatial { projection },
        image: Image {
            bands: band_set.bands,
        },
    };
    Ok(document)
}

/// Validate the directory name and prepare its document
pub fn prepare_directory(dir: &Path, params: &PrepareParams) -> Result<PreparedDataset> {
    let platform = match_platform(dir)?;
    let document = prepare_dataset(dir, params)?;
    let fields = DatasetFields {
        platform,
        satellite: SATELLITE.to_string(),
        level: FIELD_LEVEL.to_string(),
        kind: FIELD_TYPE.to_string(),
        creation_dt: document.creation_dt.clone(),
        id: document.id,
    };
    Ok(PreparedDataset {
        document,
        fields,
        directory: dir.to_path_buf(),
    })
}

/// Prepare `dir` and write its document alongside the rasters
pub fn prepare_and_write(dir: &Path, params: &PrepareParams) -> Result<PathBuf> {
    info!("Processing {:?}", dir);
    let prepared = prepare_directory(dir, params)?;
    writers::write_document(&prepared.directory, &prepared.document, params.format)
}

/// Process directories one after another.
/// If `continue_on_error` is true, failures are counted and the loop goes on;
/// otherwise the first error is returned.
pub fn process_directories<P: AsRef<Path>>(
    dirs: &[P],
    params: &PrepareParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let mut report = BatchReport::default();
    for dir in dirs {
        let dir = dir.as_ref();
        match prepare_and_write(dir, params) {
            Ok(_) => report.processed += 1,
            Err(e) => {
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                warn!("Error processing {:?}: {}", dir, e);
            }
        }
    }
    Ok(report)
}
