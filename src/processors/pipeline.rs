use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::analyzers::{join_summary, map_marker, monthly_comfort, top_month_per_year, yearly_summary};
use crate::error::Result;
use crate::models::{ComfortMatrix, Location, MapMarker, SummaryRow, YearlySummary};
use crate::readers::DailyCsvReader;

/// Runs the whole indicator pipeline sequentially: load and normalize, classify
/// into bands, aggregate by year and by month, join the summary. Every
/// aggregate is a pure function of the immutable daily set; re-running on an
/// unchanged file yields byte-identical tables.
pub struct ComfortPipeline {
    reader: DailyCsvReader,
}

impl ComfortPipeline {
    pub fn new() -> Self {
        Self {
            reader: DailyCsvReader::new(),
        }
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.reader = self.reader.with_location(location);
        self
    }

    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.reader = self.reader.with_strict_validation(strict);
        self
    }

    pub fn run(&self, input: &Path) -> Result<DashboardReport> {
        let records = self.reader.read(input)?;

        let yearly = yearly_summary(&records);
        let monthly = monthly_comfort(&records);

        let years: Vec<i32> = yearly.iter().map(|row| row.year).collect();
        let matrix = ComfortMatrix::from_monthly(&monthly, &years);

        let top_months = top_month_per_year(&monthly)?;
        let summary = join_summary(&yearly, &top_months);

        info!(
            records = records.len(),
            years = yearly.len(),
            monthly_rows = monthly.len(),
            "computed climate indicator tables"
        );

        Ok(DashboardReport {
            location: self.reader.location().clone(),
            record_count: records.len(),
            yearly,
            matrix,
            summary,
        })
    }
}

impl Default for ComfortPipeline {
    fn default() -> Self {
        Self::new()
    }
}

/// The tables handed to the presentation layer: yearly trend rows, the dense
/// year x month comfortable-day matrix, and the joined summary. The map
/// marker is derived on demand from the stored yearly rows, so interactive
/// year selection never recomputes the pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardReport {
    pub location: Location,
    pub record_count: usize,
    pub yearly: Vec<YearlySummary>,
    pub matrix: ComfortMatrix,
    pub summary: Vec<SummaryRow>,
}

impl DashboardReport {
    pub fn map_marker(&self, year: i32) -> Option<MapMarker> {
        map_marker(&self.yearly, &self.location, year)
    }

    pub fn years(&self) -> Vec<i32> {
        self.yearly.iter().map(|row| row.year).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn fixture() -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "date,temp_c\n\
             2000-01-01,20.0\n\
             2000-01-02,36.0\n\
             2000-01-03,15.0\n\
             2001-06-01,40.0\n\
             2001-06-02,41.0\n"
        )
        .unwrap();
        file
    }

    #[test]
    fn test_full_pipeline_tables() {
        let file = fixture();
        let report = ComfortPipeline::new().run(file.path()).unwrap();

        assert_eq!(report.record_count, 5);
        assert_eq!(report.years(), vec![2000, 2001]);

        assert_eq!(report.yearly[0].comfortable_days, 1);
        assert_eq!(report.yearly[0].hot_days, 1);
        assert_eq!(report.yearly[1].comfortable_days, 0);
        assert_eq!(report.yearly[1].hot_days, 2);

        // Matrix covers both years even though 2001 has no comfortable days
        assert_eq!(report.matrix.get(2000, 1), 1);
        assert_eq!(report.matrix.counts[1], [0u32; 12]);

        assert_eq!(report.summary[0].top_month.as_deref(), Some("January"));
        assert_eq!(report.summary[1].top_month, None);
        assert_eq!(report.summary[1].top_month_days, 0);
    }

    #[test]
    fn test_map_marker_from_report() {
        let file = fixture();
        let report = ComfortPipeline::new().run(file.path()).unwrap();

        let marker = report.map_marker(2000).unwrap();
        assert_eq!(marker.comfortable_days, 1);
        assert_eq!(marker.latitude, report.location.latitude);

        assert!(report.map_marker(1995).is_none());
    }
}
