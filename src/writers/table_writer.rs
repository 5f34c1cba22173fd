use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::error::Result;
use crate::models::{MapMarker, SummaryRow};
use crate::processors::DashboardReport;
use crate::utils::constants::{
    MAP_MARKER_FILE, MATRIX_TABLE_FILE, SUMMARY_CSV_FILE, SUMMARY_TABLE_FILE, YEARLY_TABLE_FILE,
};

/// Serializes the indicator tables for the presentation layer: pretty JSON for
/// each logical table plus a CSV rendition of the summary. Output is
/// deterministic, so re-running on unchanged input produces identical files.
pub struct TableWriter;

impl TableWriter {
    pub fn new() -> Self {
        Self
    }

    /// Write yearly, matrix, and summary tables into `output_dir`, creating it
    /// if needed.
    pub fn write_tables(&self, report: &DashboardReport, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir)?;

        self.write_json(&report.yearly, &output_dir.join(YEARLY_TABLE_FILE))?;
        self.write_json(&report.matrix, &output_dir.join(MATRIX_TABLE_FILE))?;
        self.write_json(&report.summary, &output_dir.join(SUMMARY_TABLE_FILE))?;
        self.write_summary_csv(&report.summary, &output_dir.join(SUMMARY_CSV_FILE))?;

        info!(dir = %output_dir.display(), "wrote dashboard tables");
        Ok(())
    }

    /// Write the single-row map table for a selected year.
    pub fn write_map_marker(&self, marker: &MapMarker, output_dir: &Path) -> Result<()> {
        fs::create_dir_all(output_dir)?;
        self.write_json(marker, &output_dir.join(MAP_MARKER_FILE))
    }

    fn write_json<T: Serialize>(&self, value: &T, path: &Path) -> Result<()> {
        let mut bytes = serde_json::to_vec_pretty(value)?;
        bytes.push(b'\n');
        fs::write(path, bytes)?;
        Ok(())
    }

    fn write_summary_csv(&self, rows: &[SummaryRow], path: &Path) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for row in rows {
            writer.serialize(row)?;
        }
        writer.flush()?;
        Ok(())
    }
}

impl Default for TableWriter {
    fn default() -> Self {
        Self::new()
    }
}
