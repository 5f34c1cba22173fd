/// Comfort band bounds (degrees Celsius, inclusive)
pub const COMFORT_MIN_TEMP: f32 = 18.0;
pub const COMFORT_MAX_TEMP: f32 = 25.0;

/// Extreme heat threshold (exclusive lower bound)
pub const EXTREME_HEAT_TEMP: f32 = 35.0;

/// Fixed denominator for the comfort ratio. Leap years are not adjusted for;
/// the ratio is a presentation figure, not a calendar computation.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Temperature plausibility constraints
pub const MIN_VALID_TEMP: f32 = -60.0;
pub const MAX_VALID_TEMP: f32 = 60.0;

/// Default dataset location (Islamabad)
pub const DEFAULT_LOCATION_NAME: &str = "Islamabad";
pub const DEFAULT_LATITUDE: f64 = 33.6844;
pub const DEFAULT_LONGITUDE: f64 = 73.0479;

/// Column naming accepted by the loader
pub const DATE_COLUMN: &str = "date";
pub const TEMP_COLUMN: &str = "temp_c";
pub const TEMP_COLUMN_HINT: &str = "temp";

/// Output file names
pub const YEARLY_TABLE_FILE: &str = "yearly.json";
pub const MATRIX_TABLE_FILE: &str = "comfort_matrix.json";
pub const SUMMARY_TABLE_FILE: &str = "summary.json";
pub const SUMMARY_CSV_FILE: &str = "summary.csv";
pub const MAP_MARKER_FILE: &str = "map_marker.json";
