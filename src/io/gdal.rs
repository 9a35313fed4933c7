use gdal::{Dataset, errors::GdalError as GdalCrateError};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::document::Projection;
use crate::types::Bounds;

/// Errors encountered when reading rasters through GDAL
#[derive(Debug, Error)]
pub enum GdalError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalCrateError),
    #[error("Raster has no CRS metadata: {0:?}")]
    MissingCrs(PathBuf),
}

/// Georeferencing read from a GDAL-supported raster
#[derive(Debug, Clone)]
pub struct RasterMetadata {
    /// Width (pixels) of the raster
    pub size_x: usize,
    /// Height (lines) of the raster
    pub size_y: usize,
    /// Affine geotransform
    /// `[origin_x, pixel_width, rot_x, origin_y, rot_y, pixel_height]`
    pub geotransform: [f64; 6],
    /// Projection in WKT format; empty when the raster carries none
    pub projection: String,
}

/// Georeferencing of a single raster tile, read eagerly on open
#[derive(Debug, Clone)]
pub struct RasterReader {
    pub path: PathBuf,
    pub metadata: RasterMetadata,
}

// Helper to extract EPSG code from WKT authority tag
fn parse_epsg(wkt: &str) -> Option<String> {
    const KEY: &str = "AUTHORITY[\"EPSG\",\"";
    let idx = wkt.rfind(KEY)?;
    let start = idx + KEY.len();
    let end = wkt[start..].find('"')?;
    Some(format!("EPSG:{}", &wkt[start..start + end]))
}

/// Map pixel/line coordinates through a GDAL geotransform
fn apply_geotransform(gt: &[f64; 6], col: f64, row: f64) -> (f64, f64) {
    (
        gt[0] + col * gt[1] + row * gt[2],
        gt[3] + col * gt[4] + row * gt[5],
    )
}

impl RasterReader {
    /// Open a GDAL-supported raster (GeoTIFF for SENTINEL-1A tiles).
    /// The GDAL handle is closed before returning.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GdalError> {
        let path = path.as_ref().to_path_buf();
        let dataset = Dataset::open(&path)?;
        let (size_x, size_y) = dataset.raster_size();
        let geotransform = match dataset.geo_transform() {
            Ok(gt) => gt,
            Err(_) => {
                warn!("No geotransform in {:?}; using pixel coordinates", path);
                [0.0, 1.0, 0.0, 0.0, 0.0, 1.0]
            }
        };
        let projection = dataset.projection();
        Ok(RasterReader {
            path,
            metadata: RasterMetadata {
                size_x,
                size_y,
                geotransform,
                projection,
            },
        })
    }

    /// Bounding rectangle of the full raster in native units
    pub fn bounds(&self) -> Bounds {
        let gt = &self.metadata.geotransform;
        let (left, top) = apply_geotransform(gt, 0.0, 0.0);
        let (right, bottom) = apply_geotransform(
            gt,
            self.metadata.size_x as f64,
            self.metadata.size_y as f64,
        );
        Bounds {
            left,
            bottom,
            right,
            top,
        }
    }

    /// CRS of the raster as WKT
    pub fn crs_wkt(&self) -> Result<&str, GdalError> {
        let wkt = self.metadata.projection.trim();
        if wkt.is_empty() {
            return Err(GdalError::MissingCrs(self.path.clone()));
        }
        Ok(wkt)
    }

    /// Native corners paired with the CRS
    pub fn projection(&self) -> Result<Projection, GdalError> {
        let spatial_reference = self.crs_wkt()?.to_string();
        let bounds = self.bounds();
        debug!(
            "Bounds of {:?}: {:?} ({})",
            self.path,
            bounds,
            parse_epsg(&spatial_reference).unwrap_or_else(|| "custom CRS".to_string())
        );
        Ok(Projection {
            spatial_reference,
            geo_ref_points: bounds.corners(),
        })
    }
}

/// Open `path` and read its projection block
pub fn read_projection(path: &Path) -> Result<Projection, GdalError> {
    RasterReader::open(path)?.projection()
}
