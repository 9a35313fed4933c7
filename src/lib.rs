#![doc = r#"
s1prepare — turn a directory of SENTINEL-1A gamma0 GeoTIFF tiles into a dataset
document for data-cube ingestion.

For each dataset directory the crate discovers the polarization bands, reads the
acquisition window embedded in the tile names, reads the raster bounds and CRS
through GDAL, reprojects the four corners to geographic lon/lat on the raster's
own datum, and writes one YAML (or JSON) document next to the tiles.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Quick start
-----------
```rust,no_run
use std::path::Path;
use s1prepare::{prepare_directory, write_document, PrepareParams};

fn main() -> s1prepare::Result<()> {
    let params = PrepareParams::default();
    let dir = Path::new("/data/SENTINEL_1A_T33_20200101");
    let prepared = prepare_directory(dir, &params)?;
    println!("{} bands", prepared.document.image.bands.len());
    write_document(dir, &prepared.document, params.format)?;
    Ok(())
}
```

Batch helper
------------
```rust,no_run
use s1prepare::{process_directories, PrepareParams};

fn main() -> s1prepare::Result<()> {
    let dirs = ["/data/SENTINEL_1A_a", "/data/SENTINEL_1A_b"];
    let report = process_directories(&dirs, &PrepareParams::default(), true)?;
    println!("processed={} errors={}", report.processed, report.errors);
    Ok(())
}
```

Error handling
--------------
All public functions return `s1prepare::Result<T>`; match on `s1prepare::Error`
to tell input-format problems (missing date range, unrecognized band) from
GDAL or I/O failures.

Useful modules
--------------
- [`api`] — high-level entry points.
- [`core`] — band discovery, time windows, naming, the document model.
- [`io`] — GDAL reader, reprojection and document writers.
- [`types`] — `Polarization`, `OutputFormat`, corner and point types.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Types
pub use crate::core::document::{DatasetDocument, DatasetFields, Projection};
pub use crate::core::naming::{FolderNameFields, StationTable, format_dataset_folder};
pub use crate::core::params::PrepareParams;
pub use crate::core::time_window::{TimeWindow, parse_time_window, parse_timestamp};
pub use crate::error::{Error, Result};
pub use crate::types::{Bounds, Corners, GeoRefPoint, LonLat, OutputFormat, Polarization};

// Readers and writers
pub use crate::io::gdal::{GdalError, RasterReader};
pub use crate::io::reproject::reproject_corners;
pub use crate::io::writers::{read_document, write_document};

// High-level API re-exports
pub use crate::api::{
    BatchReport, PreparedDataset, prepare_and_write, prepare_dataset, prepare_directory,
    process_directories,
};
