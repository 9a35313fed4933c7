//! Reprojection of native raster corners into geographic lon/lat on the
//! datum of the raster's own CRS.
use gdal::spatial_ref::{AxisMappingStrategy, CoordTransform, SpatialRef};
use tracing::debug;

use super::gdal::GdalError;
use crate::types::{Corners, GeoRefPoint, LonLat};

/// Forward transform from a projected CRS to its geographic counterpart
pub struct GeographicTransform {
    transform: CoordTransform,
}

impl GeographicTransform {
    /// Build from a WKT (or any GDAL-accepted) CRS definition
    pub fn from_definition(definition: &str) -> Result<Self, GdalError> {
        let mut source = SpatialRef::from_definition(definition)?;
        let mut target = source.geog_cs()?;

        // lon/lat order regardless of the authority's axis definition
        source.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);
        target.set_axis_mapping_strategy(AxisMappingStrategy::TraditionalGisOrder);

        let transform = CoordTransform::new(&source, &target)?;
        Ok(Self { transform })
    }

    pub fn transform_point(&self, point: &GeoRefPoint) -> Result<LonLat, GdalError> {
        let mut xs = [point.x];
        let mut ys = [point.y];
        let mut zs = [0.0];
        self.transform.transform_coords(&mut xs, &mut ys, &mut zs)?;
        Ok(LonLat {
            lon: xs[0],
            lat: ys[0],
        })
    }
}

/// Transform each of the four corners independently
pub fn reproject_corners(
    corners: &Corners<GeoRefPoint>,
    definition: &str,
) -> Result<Corners<LonLat>, GdalError> {
    let transform = GeographicTransform::from_definition(definition)?;
    let coords = corners.try_map(|p| transform.transform_point(p))?;
    for (name, c) in coords.named() {
        debug!("{}: lon={} lat={}", name, c.lon, c.lat);
    }
    Ok(coords)
}
