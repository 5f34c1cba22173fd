use std::collections::HashMap;

use crate::models::{Location, MapMarker, SummaryRow, TopComfortMonth, YearlySummary};

/// Left-join the yearly rows with the per-year top comfort month. Every yearly
/// row survives; a year absent from `top_months` (zero comfortable days)
/// carries a None month name and a zero day count.
pub fn join_summary(yearly: &[YearlySummary], top_months: &[TopComfortMonth]) -> Vec<SummaryRow> {
    let by_year: HashMap<i32, &TopComfortMonth> =
        top_months.iter().map(|t| (t.year, t)).collect();

    yearly
        .iter()
        .map(|row| {
            let top = by_year.get(&row.year);
            SummaryRow {
                year: row.year,
                avg_temp_c: row.avg_temp_c,
                comfortable_days: row.comfortable_days,
                comfort_ratio: row.comfort_ratio,
                hot_days: row.hot_days,
                top_month: top.map(|t| t.month_name.clone()),
                top_month_days: top.map(|t| t.monthly_days).unwrap_or(0),
            }
        })
        .collect()
}

/// The single map-view row: comfortable-day count for one selected year at the
/// dataset location. Interactive year selection re-filters the already
/// computed yearly rows; nothing is recomputed.
pub fn map_marker(
    yearly: &[YearlySummary],
    location: &Location,
    year: i32,
) -> Option<MapMarker> {
    yearly.iter().find(|row| row.year == year).map(|row| MapMarker {
        year,
        latitude: location.latitude,
        longitude: location.longitude,
        comfortable_days: row.comfortable_days,
    })
}
