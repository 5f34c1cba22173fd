use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::{PipelineError, Result};
use crate::utils::constants::{MAX_VALID_TEMP, MIN_VALID_TEMP};

/// One daily observation. Immutable once loaded; the coordinates are constant
/// across a dataset (single-location series) and are attached at load time.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DailyRecord {
    pub date: NaiveDate,

    #[validate(range(min = -60.0, max = 60.0))]
    pub temp_c: f32,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, temp_c: f32, latitude: f64, longitude: f64) -> Self {
        Self {
            date,
            temp_c,
            latitude,
            longitude,
        }
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    /// Month ordinal, 1-12.
    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn is_plausible_temperature(&self) -> bool {
        (MIN_VALID_TEMP..=MAX_VALID_TEMP).contains(&self.temp_c)
    }

    pub fn check(&self) -> Result<()> {
        if !self.is_plausible_temperature() {
            return Err(PipelineError::TemperatureValidation {
                message: format!(
                    "Temperature {} is outside valid range [{}, {}]",
                    self.temp_c, MIN_VALID_TEMP, MAX_VALID_TEMP
                ),
            });
        }
        self.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_and_month_accessors() {
        let record = DailyRecord::new(
            NaiveDate::from_ymd_opt(2017, 6, 21).unwrap(),
            24.5,
            33.6844,
            73.0479,
        );
        assert_eq!(record.year(), 2017);
        assert_eq!(record.month(), 6);
    }

    #[test]
    fn test_temperature_plausibility() {
        let date = NaiveDate::from_ymd_opt(2017, 6, 21).unwrap();

        let valid = DailyRecord::new(date, 24.5, 33.6844, 73.0479);
        assert!(valid.check().is_ok());

        let invalid = DailyRecord::new(date, 72.0, 33.6844, 73.0479);
        assert!(invalid.check().is_err());
    }

    #[test]
    fn test_coordinate_validation() {
        let date = NaiveDate::from_ymd_opt(2017, 6, 21).unwrap();

        let record = DailyRecord::new(date, 24.5, 123.0, 73.0479);
        assert!(record.check().is_err());
    }
}
