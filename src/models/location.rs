use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::constants::{DEFAULT_LATITUDE, DEFAULT_LOCATION_NAME, DEFAULT_LONGITUDE};

/// Static metadata for the (single) location a dataset covers.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct Location {
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl Location {
    pub fn new(name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
        }
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new(
            DEFAULT_LOCATION_NAME.to_string(),
            DEFAULT_LATITUDE,
            DEFAULT_LONGITUDE,
        )
    }
}
