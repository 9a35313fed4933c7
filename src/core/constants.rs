//! Fixed tags of the SENTINEL-1A gamma0 product family.

/// Directory stems must start with this platform identifier
pub const PLATFORM_PATTERN: &str = r"^(?P<platform>SENTINEL_1A)";

pub const SATELLITE: &str = "SENTINEL_1A";
pub const PLATFORM_CODE: &str = "SENTINEL_1";
pub const INSTRUMENT_NAME: &str = "SAR_C";
pub const PROCESSING_LEVEL: &str = "terrain";
pub const PRODUCT_TYPE: &str = "gamma0";
pub const FORMAT_NAME: &str = "GeoTIF";

/// Level and type recorded in the directory-derived field set
pub const FIELD_LEVEL: &str = "gamma0";
pub const FIELD_TYPE: &str = "intensity";

/// Extension of the raster tiles scanned in each dataset directory
pub const RASTER_EXTENSION: &str = "tif";
