use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::error::{PipelineError, Result};
use crate::models::{DailyRecord, Location};
use crate::utils::constants::{DATE_COLUMN, TEMP_COLUMN, TEMP_COLUMN_HINT};

/// Loads a single-location daily temperature series from a delimited file.
///
/// Column names are matched case-insensitively after trimming: the date column
/// must be named `date`; the temperature column is `temp_c` if present,
/// otherwise the first column whose name contains `temp`. The configured
/// location's coordinates are attached to every record.
///
/// The dataset is assumed clean: any row with an unparseable date or
/// temperature aborts the whole load. There is no partial-success mode.
pub struct DailyCsvReader {
    location: Location,
    strict_validation: bool,
}

impl DailyCsvReader {
    pub fn new() -> Self {
        Self {
            location: Location::default(),
            strict_validation: false,
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Additionally run coordinate/temperature plausibility checks per record.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict_validation = strict;
        self
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Read all daily records from `path`, failing on the first bad row.
    pub fn read(&self, path: &Path) -> Result<Vec<DailyRecord>> {
        let file = File::open(path)?;
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(BufReader::new(file));

        let headers = reader.headers()?.clone();
        let (date_idx, temp_idx) = self.resolve_columns(&headers)?;
        debug!(date_idx, temp_idx, "resolved input columns");

        let mut records = Vec::new();

        for (i, row_result) in reader.records().enumerate() {
            let row = row_result?;
            // 1-based data row number, header excluded
            let row_number = (i + 1) as u64;

            let record = self.parse_row(&row, date_idx, temp_idx, row_number)?;
            if self.strict_validation {
                record.check()?;
            }
            records.push(record);
        }

        info!(
            records = records.len(),
            location = %self.location.name,
            "loaded daily temperature series"
        );

        Ok(records)
    }

    /// Locate the date and temperature columns in the normalized header row.
    fn resolve_columns(&self, headers: &StringRecord) -> Result<(usize, usize)> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let date_idx = normalized
            .iter()
            .position(|h| h == DATE_COLUMN)
            .ok_or_else(|| PipelineError::Schema {
                message: format!(
                    "no '{}' column found (columns: {})",
                    DATE_COLUMN,
                    normalized.join(", ")
                ),
            })?;

        // Exact temp_c wins; otherwise accept the first temperature-like name
        let temp_idx = normalized
            .iter()
            .position(|h| h == TEMP_COLUMN)
            .or_else(|| normalized.iter().position(|h| h.contains(TEMP_COLUMN_HINT)))
            .ok_or_else(|| PipelineError::Schema {
                message: format!(
                    "no temperature column found: expected '{}' or a name containing '{}' (columns: {})",
                    TEMP_COLUMN,
                    TEMP_COLUMN_HINT,
                    normalized.join(", ")
                ),
            })?;

        Ok((date_idx, temp_idx))
    }

    fn parse_row(
        &self,
        row: &StringRecord,
        date_idx: usize,
        temp_idx: usize,
        row_number: u64,
    ) -> Result<DailyRecord> {
        let date_str = row.get(date_idx).unwrap_or("");
        let date = parse_date(date_str, row_number)?;

        let temp_str = row.get(temp_idx).unwrap_or("");
        let temp_c =
            temp_str
                .parse::<f32>()
                .map_err(|_| PipelineError::InvalidTemperature {
                    value: temp_str.to_string(),
                    row: row_number,
                })?;

        Ok(DailyRecord::new(
            date,
            temp_c,
            self.location.latitude,
            self.location.longitude,
        ))
    }
}

impl Default for DailyCsvReader {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a calendar date in ISO `YYYY-MM-DD` form, accepting compact
/// `YYYYMMDD` as a fallback.
fn parse_date(value: &str, row_number: u64) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y%m%d"))
        .map_err(|_| PipelineError::DateParse {
            value: value.to_string(),
            row: row_number,
        })
}
