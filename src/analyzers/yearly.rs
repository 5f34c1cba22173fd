use std::collections::BTreeMap;

use tracing::debug;

use crate::analyzers::classifier::band_subset;
use crate::models::{Band, DailyRecord, YearlySummary};
use crate::utils::constants::DAYS_PER_YEAR;
use crate::utils::round_dp;

/// Reduce the full daily set to one row per calendar year, ascending.
///
/// Band counts are joined onto the per-year statistics with fill-zero
/// semantics: a year with no comfortable or extreme-heat days still appears,
/// with those counts at zero. The comfort ratio uses a fixed 365-day
/// denominator, uncorrected for leap years.
pub fn yearly_summary(records: &[DailyRecord]) -> Vec<YearlySummary> {
    let mut temps_by_year: BTreeMap<i32, Vec<f64>> = BTreeMap::new();
    for record in records {
        temps_by_year
            .entry(record.year())
            .or_default()
            .push(record.temp_c as f64);
    }

    let comfortable_by_year = count_by_year(band_subset(records, Band::Comfortable));
    let hot_by_year = count_by_year(band_subset(records, Band::ExtremeHeat));
    debug!(
        years = temps_by_year.len(),
        comfortable_years = comfortable_by_year.len(),
        hot_years = hot_by_year.len(),
        "grouped daily records by year"
    );

    temps_by_year
        .into_iter()
        .map(|(year, temps)| {
            let mean = temps.iter().sum::<f64>() / temps.len() as f64;
            let comfortable_days = comfortable_by_year.get(&year).copied().unwrap_or(0);
            let hot_days = hot_by_year.get(&year).copied().unwrap_or(0);

            YearlySummary {
                year,
                avg_temp_c: round_dp(mean, 2),
                temp_std: sample_std(&temps, mean),
                comfortable_days,
                hot_days,
                comfort_ratio: round_dp(comfortable_days as f64 / DAYS_PER_YEAR * 100.0, 1),
            }
        })
        .collect()
}

fn count_by_year(subset: Vec<&DailyRecord>) -> BTreeMap<i32, u32> {
    let mut counts = BTreeMap::new();
    for record in subset {
        *counts.entry(record.year()).or_insert(0) += 1;
    }
    counts
}

/// Sample standard deviation (n - 1 denominator). A single-value slice yields
/// NaN, which downstream serialization maps to null.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    let sum_sq = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    (sum_sq / (values.len() as f64 - 1.0)).sqrt()
}
