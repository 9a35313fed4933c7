use std::fs;
use std::path::{Path, PathBuf};

use approx::assert_abs_diff_eq;
use gdal::DriverManager;
use gdal::spatial_ref::SpatialRef;
use tempfile::TempDir;

use s1prepare::{
    Error, OutputFormat, Polarization, PrepareParams, prepare_and_write, prepare_directory,
    process_directories, read_document,
};

const VV_TILE: &str = "S1A_gamma0_VV_2020-01-01_2020-01-15.tif";
const VH_TILE: &str = "S1A_gamma0_VH_2020-01-01_2020-01-15.tif";

fn write_tile(path: &Path, epsg: u32) {
    let driver = DriverManager::get_driver_by_name("GTiff").unwrap();
    let mut ds = driver
        .create_with_band_type::<f32, _>(path, 100, 100, 1)
        .unwrap();
    // 3 km square, west edge on the UTM 33N central meridian
    ds.set_geo_transform(&[500000.0, 30.0, 0.0, 5000000.0, 0.0, -30.0])
        .unwrap();
    let wkt = SpatialRef::from_epsg(epsg).unwrap().to_wkt().unwrap();
    ds.set_projection(&wkt).unwrap();
}

fn dataset_dir(root: &Path, name: &str, tiles: &[&str]) -> PathBuf {
    let dir = root.join(name);
    fs::create_dir(&dir).unwrap();
    for tile in tiles {
        write_tile(&dir.join(tile), 32633);
    }
    dir
}

#[test]
fn two_polarizations_end_to_end() {
    let tmp = TempDir::new().unwrap();
    let dir = dataset_dir(tmp.path(), "SENTINEL_1A_T33_2020", &[VV_TILE, VH_TILE]);

    let written = prepare_and_write(&dir, &PrepareParams::default()).unwrap();
    assert_eq!(written, dir.join("S1A_gamma0__2020-01-01_2020-01-15.yaml"));

    let doc = read_document(&written).unwrap();
    assert_eq!(doc.name, "S1A_gamma0__2020-01-01_2020-01-15");
    assert!(!doc.name.contains("VV") && !doc.name.contains("VH"));
    assert_eq!(doc.image.bands.len(), 2);
    assert_eq!(doc.image.bands[&Polarization::Vv].path, VV_TILE);
    assert_eq!(doc.image.bands[&Polarization::Vh].path, VH_TILE);

    assert_eq!(doc.extent.from_dt, "2020-01-01");
    assert_eq!(doc.extent.to_dt, "2020-01-15");
    assert_eq!(doc.creation_dt, "2020-01-01");
    assert_eq!(doc.extent.center_dt, None);
    assert_eq!(doc.platform.code, "SENTINEL_1");
    assert_eq!(doc.instrument.name, "SAR_C");
    assert_eq!(doc.format.name, "GeoTIF");
    assert_eq!(doc.processing_level, "terrain");
    assert_eq!(doc.product_type, "gamma0");

    let native = &doc.grid_spatial.projection.geo_ref_points;
    assert_eq!(native.ul.x, 500000.0);
    assert_eq!(native.ul.y, 5000000.0);
    assert_eq!(native.lr.x, 503000.0);
    assert_eq!(native.lr.y, 4997000.0);

    // West edge lies on 15E; the east edge is further east, north above south
    let coord = &doc.extent.coord;
    assert_abs_diff_eq!(coord.ul.lon, 15.0, epsilon = 1e-7);
    assert_abs_diff_eq!(coord.ll.lon, 15.0, epsilon = 1e-7);
    assert!(coord.ur.lon > coord.ul.lon);
    assert!(coord.ul.lat > coord.ll.lat);
    assert!(coord.ul.lat > 45.0 && coord.ul.lat < 45.2);
}

#[test]
fn each_run_gets_a_fresh_id() {
    let tmp = TempDir::new().unwrap();
    let dir = dataset_dir(tmp.path(), "SENTINEL_1A_fresh", &[VV_TILE]);

    let a = prepare_directory(&dir, &PrepareParams::default()).unwrap();
    let b = prepare_directory(&dir, &PrepareParams::default()).unwrap();
    assert_ne!(a.document.id, b.document.id);
    assert_eq!(a.fields.id, a.document.id);
    assert_eq!(a.fields.platform, "SENTINEL_1A");
    assert_eq!(a.fields.kind, "intensity");
    assert_eq!(a.document.extent.coord, b.document.extent.coord);
}

#[test]
fn json_output_with_center_dt() {
    let tmp = TempDir::new().unwrap();
    let dir = dataset_dir(tmp.path(), "SENTINEL_1A_json", &[VH_TILE]);
    let params = PrepareParams {
        format: OutputFormat::Json,
        center_dt: true,
        ..Default::default()
    };

    let written = prepare_and_write(&dir, &params).unwrap();
    assert_eq!(written.extension().unwrap(), "json");

    let text = fs::read_to_string(&written).unwrap();
    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(raw["extent"]["center_dt"], "2020-01-01");
    assert_eq!(raw["image"]["bands"]["vh"]["path"], VH_TILE);
    assert!(raw["grid_spatial"]["projection"]["spatial_reference"]
        .as_str()
        .unwrap()
        .contains("UTM"));
}

#[test]
fn wrong_platform_directory_writes_nothing() {
    let tmp = TempDir::new().unwrap();
    let dir = dataset_dir(tmp.path(), "SENTINEL_1B_T33", &[VV_TILE]);

    let err = prepare_and_write(&dir, &PrepareParams::default()).unwrap_err();
    assert!(matches!(err, Error::PlatformMismatch { .. }));
    let yaml_count = fs::read_dir(&dir)
        .unwrap()
        .filter(|e| {
            e.as_ref()
                .unwrap()
                .path()
                .extension()
                .is_some_and(|x| x == "yaml")
        })
        .count();
    assert_eq!(yaml_count, 0);
}

#[test]
fn polarization_in_directory_name_is_not_applied_to_tiles() {
    let tmp = TempDir::new().unwrap();
    let dir = dataset_dir(tmp.path(), "SENTINEL_1A_VV_archive", &[VH_TILE]);

    let prepared = prepare_directory(&dir, &PrepareParams::default()).unwrap();
    let bands = &prepared.document.image.bands;
    assert_eq!(bands.len(), 1);
    assert_eq!(bands[&Polarization::Vh].path, VH_TILE);
}

#[test]
fn tile_without_date_range_fails() {
    let tmp = TempDir::new().unwrap();
    let dir = dataset_dir(tmp.path(), "SENTINEL_1A_nodate", &["S1A_gamma0_VV.tif"]);

    let err = prepare_directory(&dir, &PrepareParams::default()).unwrap_err();
    assert!(matches!(err, Error::MissingTimeWindow { .. }));
}

#[test]
fn batch_continues_past_failures() {
    let tmp = TempDir::new().unwrap();
    let good = dataset_dir(tmp.path(), "SENTINEL_1A_good", &[VV_TILE, VH_TILE]);
    let bad = dataset_dir(
        tmp.path(),
        "SENTINEL_1A_bad",
        &["S1A_gamma0_HH_2020-01-01_2020-01-15.tif"],
    );

    let report = process_directories(&[&bad, &good], &PrepareParams::default(), true).unwrap();
    assert_eq!(report.processed, 1);
    assert_eq!(report.errors, 1);

    let err = process_directories(&[&bad, &good], &PrepareParams::default(), false).unwrap_err();
    assert!(matches!(err, Error::UnrecognizedBand { .. }));
}
