//! Dataset naming: the display name written into documents, and the canonical
//! folder label built from vehicle/instrument/product/station fields.
use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::Polarization;

/// Immutable ground-station code -> name lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationTable(BTreeMap<String, String>);

impl StationTable {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self(entries)
    }

    pub fn lookup(&self, code: &str) -> Option<&str> {
        self.0.get(code).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for StationTable {
    fn default() -> Self {
        const STATIONS: [(&str, &str); 28] = [
            ("001", "AGS"),
            ("002", "ASN"),
            ("003", "BJC"),
            ("004", "BKT"),
            ("005", "CHM"),
            ("006", "CUB"),
            ("007", "DKI"),
            ("008", "EDC"),
            ("009", "GLC"),
            ("010", "GNC"),
            ("011", "HOA"),
            ("012", "HEOC"),
            ("013", "IKR"),
            ("014", "KIS"),
            ("015", "LGS"),
            ("016", "MGR"),
            ("017", "MOR"),
            ("018", "MPS"),
            ("019", "MTI"),
            ("020", "PAC"),
            ("021", "PFS"),
            ("022", "SGS"),
            ("023", "TKSC"),
            ("028", "COA"),
            ("029", "JSA"),
            ("030", "KHC"),
            ("031", "MLK"),
            ("032", "LGN"),
        ];
        Self(
            STATIONS
                .iter()
                .map(|(code, name)| (code.to_string(), name.to_string()))
                .collect(),
        )
    }
}

/// Display name: relative band path without extension and polarization markers
pub fn display_name(relative_path: &str) -> String {
    let stem = Path::new(relative_path)
        .with_extension("")
        .to_string_lossy()
        .into_owned();
    Polarization::all()
        .iter()
        .fold(stem, |name, pol| name.replace(pol.marker(), ""))
}

/// Fields of the canonical dataset folder label
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderNameFields {
    pub vehicle: Option<String>,
    pub instrument: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub level: Option<String>,
    pub product: Option<String>,
    /// Three-digit station code or station name
    pub ground_station: Option<String>,
    pub path: Option<String>,
    pub row: Option<String>,
    pub date: Option<String>,
}

fn required<'a>(value: &'a Option<String>, field: &'static str) -> Result<&'a str> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or(Error::MissingField { field })
}

/// Render a dataset folder label:
/// `{vehicle}_{instrument}_{type}_{level}_{type}{product}-{groundstation}_{path}_{row}_{date}`
///
/// All fields are checked before anything is formatted. Numeric station
/// codes are resolved through `stations`.
pub fn format_dataset_folder(fields: &FolderNameFields, stations: &StationTable) -> Result<String> {
    let vehicle = required(&fields.vehicle, "vehicle")?;
    let instrument = required(&fields.instrument, "instrument")?;
    let kind = required(&fields.kind, "type")?;
    let level = required(&fields.level, "level")?;
    let product = required(&fields.product, "product")?;
    let station = required(&fields.ground_station, "groundstation")?;
    let path = required(&fields.path, "path")?;
    let row = required(&fields.row, "row")?;
    let date = required(&fields.date, "date")?;

    let station = if station.chars().all(|c| c.is_ascii_digit()) {
        stations
            .lookup(station)
            .ok_or_else(|| Error::UnknownGroundStation {
                code: station.to_string(),
            })?
    } else {
        station
    };

    Ok(format!(
        "{vehicle}_{instrument}_{kind}_{level}_{kind}{product}-{station}_{path}_{row}_{date}"
    ))
}
