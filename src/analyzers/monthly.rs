use std::collections::BTreeMap;

use chrono::Month;
use tracing::debug;

use crate::analyzers::classifier::band_subset;
use crate::error::{PipelineError, Result};
use crate::models::{Band, DailyRecord, MonthlyComfort, TopComfortMonth};

/// Count comfortable days per (year, month), ascending by year then month.
/// Combinations with a zero count are never emitted; the dense heatmap
/// reshape is [`crate::models::ComfortMatrix::from_monthly`].
pub fn monthly_comfort(records: &[DailyRecord]) -> Vec<MonthlyComfort> {
    let mut counts: BTreeMap<(i32, u32), u32> = BTreeMap::new();
    for record in band_subset(records, Band::Comfortable) {
        *counts.entry((record.year(), record.month())).or_insert(0) += 1;
    }
    debug!(groups = counts.len(), "grouped comfortable days by month");

    counts
        .into_iter()
        .map(|((year, month), count)| MonthlyComfort { year, month, count })
        .collect()
}

/// For each year, the month with the highest comfortable-day count.
///
/// Months are scanned in ascending order and a later month only replaces the
/// running maximum on a strictly greater count, so ties go to the lowest
/// ordinal.
pub fn top_month_per_year(monthly: &[MonthlyComfort]) -> Result<Vec<TopComfortMonth>> {
    let mut ordered: Vec<&MonthlyComfort> = monthly.iter().collect();
    ordered.sort_by_key(|m| (m.year, m.month));

    let mut best: BTreeMap<i32, (u32, u32)> = BTreeMap::new();
    for row in ordered {
        let entry = best.entry(row.year).or_insert((row.month, row.count));
        if row.count > entry.1 {
            *entry = (row.month, row.count);
        }
    }

    best.into_iter()
        .map(|(year, (month, count))| {
            Ok(TopComfortMonth {
                year,
                month_name: month_name(month)?.to_string(),
                monthly_days: count,
            })
        })
        .collect()
}

/// Calendar lookup from month ordinal (1-12) to its English name. An ordinal
/// outside the range cannot occur with valid input dates; the error is
/// defensive only.
pub fn month_name(month: u32) -> Result<&'static str> {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .ok_or(PipelineError::InvalidMonth(month))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn record(year: i32, month: u32, day: u32, temp_c: f32) -> DailyRecord {
        DailyRecord::new(
            NaiveDate::from_ymd_opt(year, month, day).unwrap(),
            temp_c,
            33.6844,
            73.0479,
        )
    }

    #[test]
    fn test_monthly_counts_skip_zero_months() {
        let records = vec![
            record(2000, 1, 1, 20.0),
            record(2000, 1, 2, 21.0),
            record(2000, 2, 1, 40.0), // not comfortable, month omitted
            record(2000, 3, 1, 19.0),
        ];

        let monthly = monthly_comfort(&records);
        assert_eq!(
            monthly,
            vec![
                MonthlyComfort {
                    year: 2000,
                    month: 1,
                    count: 2
                },
                MonthlyComfort {
                    year: 2000,
                    month: 3,
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_monthly_sum_equals_yearly_comfortable_days() {
        let records = vec![
            record(2000, 1, 1, 20.0),
            record(2000, 2, 1, 22.0),
            record(2000, 2, 2, 23.0),
            record(2000, 6, 1, 45.0),
        ];

        let monthly = monthly_comfort(&records);
        let total: u32 = monthly.iter().map(|m| m.count).sum();

        let yearly = crate::analyzers::yearly_summary(&records);
        assert_eq!(total, yearly[0].comfortable_days);
    }

    #[test]
    fn test_top_month_single_row() {
        let monthly = vec![MonthlyComfort {
            year: 2000,
            month: 1,
            count: 1,
        }];

        let top = top_month_per_year(&monthly).unwrap();
        assert_eq!(
            top,
            vec![TopComfortMonth {
                year: 2000,
                month_name: "January".to_string(),
                monthly_days: 1
            }]
        );
    }

    #[test]
    fn test_top_month_tie_goes_to_earlier_month() {
        let monthly = vec![
            MonthlyComfort {
                year: 2000,
                month: 3,
                count: 5,
            },
            MonthlyComfort {
                year: 2000,
                month: 10,
                count: 5,
            },
        ];

        let top = top_month_per_year(&monthly).unwrap();
        assert_eq!(top[0].month_name, "March");
        assert_eq!(top[0].monthly_days, 5);
    }

    #[test]
    fn test_top_month_per_year_is_independent() {
        let monthly = vec![
            MonthlyComfort {
                year: 2000,
                month: 4,
                count: 10,
            },
            MonthlyComfort {
                year: 2001,
                month: 11,
                count: 3,
            },
            MonthlyComfort {
                year: 2001,
                month: 2,
                count: 8,
            },
        ];

        let top = top_month_per_year(&monthly).unwrap();
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].month_name, "April");
        assert_eq!(top[1].month_name, "February");
        assert_eq!(top[1].monthly_days, 8);
    }

    #[test]
    fn test_month_name_lookup() {
        assert_eq!(month_name(1).unwrap(), "January");
        assert_eq!(month_name(12).unwrap(), "December");
        assert!(matches!(
            month_name(0),
            Err(PipelineError::InvalidMonth(0))
        ));
        assert!(matches!(
            month_name(13),
            Err(PipelineError::InvalidMonth(13))
        ));
    }
}
