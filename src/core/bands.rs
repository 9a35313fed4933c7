//! Polarization band discovery inside a dataset directory.
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::types::Polarization;

/// Band entry as written in the document: path relative to the dataset directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandPath {
    pub path: String,
}

/// Discovered rasters of one dataset, keyed by polarization
#[derive(Debug, Clone)]
pub struct BandSet {
    /// Rasters in file-name order
    pub files: Vec<(Polarization, PathBuf)>,
    pub bands: BTreeMap<Polarization, BandPath>,
}

impl BandSet {
    /// First raster in file-name order; used for naming, timing and projection
    pub fn first(&self) -> Option<&(Polarization, PathBuf)> {
        self.files.first()
    }
}

/// Classify a raster by the polarization marker anywhere in its path.
/// `VV` takes precedence when both markers are present.
pub fn classify_band(path: &Path) -> Result<Polarization> {
    let name = path.to_string_lossy();

    if name.contains(Polarization::Vv.marker()) {
        Ok(Polarization::Vv)
    } else if name.contains(Polarization::Vh.marker()) {
        Ok(Polarization::Vh)
    } else {
        Err(Error::UnrecognizedBand {
            path: path.to_path_buf(),
        })
    }
}

/// Scan `dir` (non-recursively) for `*.{extension}` rasters and classify each.
pub fn discover_bands(dir: &Path, extension: &str) -> Result<BandSet> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|e| e == extension) {
            paths.push(path);
        }
    }
    paths.sort();

    if paths.is_empty() {
        return Err(Error::NoRasters {
            dir: dir.to_path_buf(),
            extension: extension.to_string(),
        });
    }

    let mut files: Vec<(Polarization, PathBuf)> = Vec::with_capacity(paths.len());
    let mut bands = BTreeMap::new();
    for path in paths {
        // Markers in the dataset directory's own name must not leak into tiles
        let relative = path.strip_prefix(dir).unwrap_or(&path).to_path_buf();
        let band = classify_band(&relative)?;

        if let Some((_, first)) = files.iter().find(|(b, _)| *b == band) {
            return Err(Error::DuplicateBand {
                band: band.label().to_string(),
                first: first.clone(),
                second: path,
            });
        }
        debug!("Found {} band: {:?}", band, relative);

        bands.insert(
            band,
            BandPath {
                path: relative.to_string_lossy().into_owned(),
            },
        );
        files.push((band, path));
    }

    Ok(BandSet { files, bands })
}
