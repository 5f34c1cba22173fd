use crate::models::{Band, DailyRecord};

/// Select the daily records falling in `band`. Pure filter over the immutable
/// record set; nothing is materialized as owned storage and input order is
/// preserved (consumers re-group by year or month regardless).
pub fn band_subset<'a>(records: &'a [DailyRecord], band: Band) -> Vec<&'a DailyRecord> {
    records
        .iter()
        .filter(|record| band.contains(record.temp_c))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, temp_c: f32) -> DailyRecord {
        DailyRecord::new(
            NaiveDate::from_ymd_opt(2000, 1, day).unwrap(),
            temp_c,
            33.6844,
            73.0479,
        )
    }

    #[test]
    fn test_band_subset_partitions_by_predicate() {
        let records = vec![record(1, 20.0), record(2, 36.0), record(3, 15.0)];

        let comfortable = band_subset(&records, Band::Comfortable);
        assert_eq!(comfortable.len(), 1);
        assert_eq!(comfortable[0].temp_c, 20.0);

        let hot = band_subset(&records, Band::ExtremeHeat);
        assert_eq!(hot.len(), 1);
        assert_eq!(hot[0].temp_c, 36.0);
    }

    #[test]
    fn test_band_subset_empty_input() {
        let records: Vec<DailyRecord> = vec![];
        assert!(band_subset(&records, Band::Comfortable).is_empty());
    }
}
