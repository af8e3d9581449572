//! Re-derives the visible subset of a [`ResultSet`] from the current [`FilterCriteria`].

use crate::types::day_record::DayRecord;
use crate::types::filter_criteria::{FilterCriteria, ALL_PHASES};
use crate::types::result_set::ResultSet;
use serde::Serialize;
use std::slice;

/// Records of a [`ResultSet`] that pass every active filter, in the original order.
///
/// Borrows from the result set it was derived from and is rebuilt on every call to
/// [`filter`]; it has no identity of its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FilteredView<'a> {
    records: Vec<&'a DayRecord>,
}

impl<'a> FilteredView<'a> {
    pub fn records(&self) -> &[&'a DayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// An empty view is shown as "No data matches your filters.", not as an empty table.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, &'a DayRecord>> {
        self.records.iter().copied()
    }
}

pub fn matches_date_query(record: &DayRecord, query: &str) -> bool {
    record
        .date_key()
        .to_lowercase()
        .contains(&query.to_lowercase())
}

/// True if `record` satisfies the date, phase and temperature conditions together.
pub fn matches(record: &DayRecord, criteria: &FilterCriteria) -> bool {
    matches_date_query(record, &criteria.date_query)
        && criteria.phase.matches(&record.moon_phase)
        && criteria.temperature.contains(record.temperature_f)
}

/// Full scan of `result_set`, keeping the records that match `criteria`.
///
/// # Examples
///
/// ```
/// # use astrodash::{filter, FilterCriteria, ResultSet};
/// let empty = ResultSet::default();
/// let view = filter(&empty, &FilterCriteria::default());
/// assert!(view.is_empty());
/// ```
pub fn filter<'a>(result_set: &'a ResultSet, criteria: &FilterCriteria) -> FilteredView<'a> {
    FilteredView {
        records: result_set
            .iter()
            .filter(|record| matches(record, criteria))
            .collect(),
    }
}

/// Options for the phase select control: `"All"`, then each distinct phase in
/// the order it first appears.
pub fn phase_options(result_set: &ResultSet) -> Vec<String> {
    let mut options = vec![ALL_PHASES.to_owned()];
    for record in result_set {
        if !options[1..].contains(&record.moon_phase) {
            options.push(record.moon_phase.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{result_set_from, sample_result_set};
    use crate::types::filter_criteria::{PhaseSelector, TemperatureRange};

    fn dates(view: &FilteredView) -> Vec<String> {
        view.iter().map(|r| r.date_key()).collect()
    }

    #[test]
    fn test_default_criteria_keep_everything() {
        let set = sample_result_set();
        let view = filter(&set, &FilterCriteria::default());
        assert_eq!(view.len(), set.len());
    }

    #[test]
    fn test_date_substring_filter() {
        let set = sample_result_set();
        let criteria = FilterCriteria::builder().date_query("04-0").build();
        assert_eq!(
            dates(&filter(&set, &criteria)),
            vec!["2025-04-01", "2025-04-02", "2025-04-03", "2025-04-04"]
        );

        let criteria = FilterCriteria::builder().date_query("2025-03-3").build();
        assert_eq!(
            dates(&filter(&set, &criteria)),
            vec!["2025-03-30", "2025-03-31"]
        );
    }

    #[test]
    fn test_empty_date_query_matches_all_dates() {
        let set = sample_result_set();
        assert!(set.iter().all(|record| matches_date_query(record, "")));
    }

    #[test]
    fn test_phase_filter_is_exact_and_case_sensitive() {
        let set = sample_result_set();
        let exact = FilterCriteria::builder()
            .phase(PhaseSelector::from("New Moon"))
            .build();
        assert_eq!(
            dates(&filter(&set, &exact)),
            vec!["2025-03-28", "2025-03-29"]
        );

        let lowercase = FilterCriteria::builder()
            .phase(PhaseSelector::from("new moon"))
            .build();
        assert!(filter(&set, &lowercase).is_empty());
    }

    #[test]
    fn test_absent_phase_yields_empty_view() {
        let set = sample_result_set();
        let criteria = FilterCriteria::builder()
            .phase(PhaseSelector::from("Full Moon"))
            .build();
        assert!(filter(&set, &criteria).is_empty());
    }

    #[test]
    fn test_single_point_temperature_range() {
        let set = result_set_from(&[
            (42.0, "06:00 AM", "New Moon"),
            (42.5, "06:00 AM", "New Moon"),
            (42.0, "06:00 AM", "New Moon"),
            (41.9, "06:00 AM", "New Moon"),
        ]);
        let criteria = FilterCriteria::builder()
            .temperature(TemperatureRange::new(42.0, 42.0).unwrap())
            .build();
        let view = filter(&set, &criteria);
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|r| r.temperature_f == 42.0));
    }

    #[test]
    fn test_criteria_are_combined_with_and() {
        let set = sample_result_set();
        let criteria = FilterCriteria::builder()
            .date_query("2025-03")
            .phase(PhaseSelector::from("Waxing Crescent"))
            .temperature(TemperatureRange::new(40.0, 46.0).unwrap())
            .build();
        assert_eq!(dates(&filter(&set, &criteria)), vec!["2025-03-30", "2025-03-31"]);
    }

    #[test]
    fn test_view_partitions_result_set() {
        let set = sample_result_set();
        let criteria = FilterCriteria::builder()
            .date_query("03")
            .temperature(TemperatureRange::new(39.0, 45.0).unwrap())
            .build();
        let view = filter(&set, &criteria);

        for record in &set {
            let shown = view.iter().any(|r| std::ptr::eq(r, record));
            assert_eq!(shown, matches(record, &criteria), "record {}", record.date_key());
        }
        // Order is preserved.
        let positions: Vec<usize> = view
            .iter()
            .map(|r| set.iter().position(|s| std::ptr::eq(s, r)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let set = sample_result_set();
        let criteria = FilterCriteria::builder()
            .phase(PhaseSelector::from("Waxing Crescent"))
            .build();
        assert_eq!(filter(&set, &criteria), filter(&set, &criteria));
    }

    #[test]
    fn test_phase_options_first_seen_order() {
        let set = sample_result_set();
        assert_eq!(
            phase_options(&set),
            vec!["All", "Waning Crescent", "New Moon", "Waxing Crescent", "First Quarter"]
        );
        assert_eq!(phase_options(&ResultSet::default()), vec!["All"]);
    }
}
