//! I/O layer: GDAL-backed raster georeferencing, geographic reprojection of
//! raster corners, and `writers` for the prepared dataset documents.
pub mod gdal;
pub use self::gdal::{GdalError, RasterMetadata, RasterReader, read_projection};

pub mod reproject;
pub use self::reproject::{GeographicTransform, reproject_corners};

pub mod writers;
