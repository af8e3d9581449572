//! Summary figures over the whole [`ResultSet`] (not the filtered view).

use crate::types::result_set::ResultSet;
use ordered_float::OrderedFloat;

/// Lowest average temperature across all days, `None` for an empty set.
pub fn lowest_temp(result_set: &ResultSet) -> Option<f64> {
    result_set
        .iter()
        .map(|record| OrderedFloat(record.temperature_f))
        .min()
        .map(OrderedFloat::into_inner)
}

/// The moonrise string that sorts first.
///
/// This compares the provider's text directly, so `"10:30 PM"` sorts before
/// `"6:45 AM"`. It is not a chronological minimum.
pub fn earliest_moon_rise(result_set: &ResultSet) -> Option<&str> {
    result_set
        .iter()
        .map(|record| record.moon_rise.as_str())
        .min()
}

/// The phase occurring on the most days. On a tie, the phase seen first wins.
pub fn most_common_moon_phase(result_set: &ResultSet) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in result_set {
        match counts.iter_mut().find(|(phase, _)| *phase == record.moon_phase) {
            Some((_, count)) => *count += 1,
            None => counts.push((record.moon_phase.as_str(), 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (phase, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((phase, count));
        }
    }
    best.map(|(phase, _)| phase)
}

/// The three figures shown in the dashboard's summary area.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SummaryStats {
    pub lowest_temp: Option<f64>,
    pub earliest_moon_rise: Option<String>,
    pub most_common_moon_phase: Option<String>,
}

impl SummaryStats {
    pub fn from_result_set(result_set: &ResultSet) -> Self {
        Self {
            lowest_temp: lowest_temp(result_set),
            earliest_moon_rise: earliest_moon_rise(result_set).map(str::to_owned),
            most_common_moon_phase: most_common_moon_phase(result_set).map(str::to_owned),
        }
    }
}
