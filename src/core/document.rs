//! Dataset document written for data-cube ingestion, and the directory-derived
//! field set that accompanies it.
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::bands::BandPath;
use crate::types::{Corners, GeoRefPoint, LonLat, Polarization};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetDocument {
    pub id: Uuid,
    pub name: String,
    pub processing_level: String,
    pub product_type: String,
    pub creation_dt: String,
    pub platform: Platform,
    pub instrument: Instrument,
    pub extent: Extent,
    pub format: FormatTag,
    pub grid_spatial: GridSpatial,
    pub image: Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Platform {
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instrument {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatTag {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub from_dt: String,
    pub to_dt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center_dt: Option<String>,
    pub coord: Corners<LonLat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridSpatial {
    pub projection: Projection,
}

/// Native CRS (WKT) and the raster corners in its units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub spatial_reference: String,
    pub geo_ref_points: Corners<GeoRefPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub bands: BTreeMap<Polarization, BandPath>,
}

/// Fields derived from the dataset directory name and the preparation run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetFields {
    pub platform: String,
    pub satellite: String,
    pub level: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub creation_dt: String,
    pub id: Uuid,
}
