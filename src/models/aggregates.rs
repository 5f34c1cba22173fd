use serde::{Serialize, Serializer};

/// Serialize NaN as JSON null so single-record years survive serialization.
fn nan_as_null<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    if value.is_nan() {
        serializer.serialize_none()
    } else {
        serializer.serialize_some(value)
    }
}

/// One row per calendar year present in the source data.
///
/// `temp_std` is the sample standard deviation; a year with a single record
/// yields NaN, serialized as null; no special-casing.
/// `avg_temp_c` and `comfort_ratio` are pre-rounded presentation figures
/// (2 dp and 1 dp respectively) and are not reused in further computation.
#[derive(Debug, Clone, Serialize)]
pub struct YearlySummary {
    pub year: i32,
    pub avg_temp_c: f64,
    #[serde(serialize_with = "nan_as_null")]
    pub temp_std: f64,
    pub comfortable_days: u32,
    pub hot_days: u32,
    pub comfort_ratio: f64,
}

/// One row per (year, month) pair with at least one comfortable day.
/// Zero-count rows are never emitted; the dense heatmap reshape happens in
/// [`ComfortMatrix`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyComfort {
    pub year: i32,
    pub month: u32,
    pub count: u32,
}

/// Dense year x month comfortable-day matrix for heatmap display.
///
/// Rows cover every supplied year; all twelve months are present per row with
/// zero fill for (year, month) pairs that have no comfortable days.
#[derive(Debug, Clone, Serialize)]
pub struct ComfortMatrix {
    pub years: Vec<i32>,
    pub counts: Vec<[u32; 12]>,
}

impl ComfortMatrix {
    /// Reshape sparse monthly rows into a dense matrix over `years` (the full
    /// source-year list, so the heatmap rows line up with the yearly chart
    /// even for years with no comfortable days).
    pub fn from_monthly(monthly: &[MonthlyComfort], years: &[i32]) -> Self {
        let mut counts = vec![[0u32; 12]; years.len()];
        for row in monthly {
            if let Some(i) = years.iter().position(|&y| y == row.year) {
                if (1..=12).contains(&row.month) {
                    counts[i][(row.month - 1) as usize] = row.count;
                }
            }
        }
        Self {
            years: years.to_vec(),
            counts,
        }
    }

    /// Count for a (year, month) cell. Any combination outside the stored
    /// rows, including an unknown year, reads as zero.
    pub fn get(&self, year: i32, month: u32) -> u32 {
        if !(1..=12).contains(&month) {
            return 0;
        }
        self.years
            .iter()
            .position(|&y| y == year)
            .map(|i| self.counts[i][(month - 1) as usize])
            .unwrap_or(0)
    }
}

/// Per year, the month with the highest comfortable-day count. Ties go to the
/// lowest month ordinal (first occurrence under ascending scan).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopComfortMonth {
    pub year: i32,
    pub month_name: String,
    pub monthly_days: u32,
}

/// YearlySummary left-joined with TopComfortMonth on year. A year with zero
/// comfortable days has no top month; the join carries None/0, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryRow {
    pub year: i32,
    pub avg_temp_c: f64,
    pub comfortable_days: u32,
    pub comfort_ratio: f64,
    pub hot_days: u32,
    pub top_month: Option<String>,
    pub top_month_days: u32,
}

/// Single-point map payload: the comfortable-day count for one selected year
/// at the dataset's location.
#[derive(Debug, Clone, Serialize)]
pub struct MapMarker {
    pub year: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub comfortable_days: u32,
}
