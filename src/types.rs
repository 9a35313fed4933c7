//! Shared types used across s1prepare.
//! Includes `Polarization`, `OutputFormat`, and the corner/point types that
//! carry a raster footprint through projection and reprojection.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Polarization bands recognised in SENTINEL-1A tile names
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarization {
    Vv,
    Vh,
}

impl Polarization {
    /// Marker as it appears in file names
    pub fn marker(&self) -> &'static str {
        match self {
            Polarization::Vv => "VV",
            Polarization::Vh => "VH",
        }
    }

    /// Band label used as key in the document band map
    pub fn label(&self) -> &'static str {
        match self {
            Polarization::Vv => "vv",
            Polarization::Vh => "vh",
        }
    }

    pub fn all() -> [Polarization; 2] {
        [Polarization::Vv, Polarization::Vh]
    }
}

impl std::fmt::Display for Polarization {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Yaml => "yaml",
            OutputFormat::Json => "json",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// Point in the raster's native projected coordinate space
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GeoRefPoint {
    pub x: f64,
    pub y: f64,
}

/// Geographic point in degrees
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    pub lon: f64,
    pub lat: f64,
}

/// The four named corners of a raster footprint
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Corners<T> {
    pub ul: T,
    pub ur: T,
    pub ll: T,
    pub lr: T,
}

impl<T> Corners<T> {
    /// Apply a fallible conversion to every corner, stopping at the first error
    pub fn try_map<U, E, F>(&self, mut f: F) -> Result<Corners<U>, E>
    where
        F: FnMut(&T) -> Result<U, E>,
    {
        Ok(Corners {
            ul: f(&self.ul)?,
            ur: f(&self.ur)?,
            ll: f(&self.ll)?,
            lr: f(&self.lr)?,
        })
    }

    /// Corners paired with their names, in `ul, ur, ll, lr` order
    pub fn named(&self) -> [(&'static str, &T); 4] {
        [
            ("ul", &self.ul),
            ("ur", &self.ur),
            ("ll", &self.ll),
            ("lr", &self.lr),
        ]
    }
}

/// Axis-aligned bounding rectangle in native units
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
    pub top: f64,
}

impl Bounds {
    pub fn corners(&self) -> Corners<GeoRefPoint> {
        Corners {
            ul: GeoRefPoint {
                x: self.left,
                y: self.top,
            },
            ur: GeoRefPoint {
                x: self.right,
                y: self.top,
            },
            ll: GeoRefPoint {
                x: self.left,
                y: self.bottom,
            },
            lr: GeoRefPoint {
                x: self.right,
                y: self.bottom,
            },
        }
    }
}
