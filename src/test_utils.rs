use crate::types::day_record::DayRecord;
use crate::types::result_set::ResultSet;
use chrono::{Days, NaiveDate};

pub(crate) fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 26).unwrap()
}

pub(crate) fn record(date: NaiveDate, temperature_f: f64, moon_rise: &str, phase: &str) -> DayRecord {
    DayRecord {
        date,
        temperature_f,
        moon_rise: moon_rise.to_string(),
        moon_set: "03:15 PM".to_string(),
        moon_phase: phase.to_string(),
    }
}

/// Builds consecutive days from `start_date()`, one per `(temperature, moon_rise, phase)` tuple.
pub(crate) fn result_set_from(rows: &[(f64, &str, &str)]) -> ResultSet {
    let records = rows
        .iter()
        .enumerate()
        .map(|(offset, (temperature, moon_rise, phase))| {
            let date = start_date() + Days::new(offset as u64);
            record(date, *temperature, moon_rise, phase)
        })
        .collect();
    ResultSet::new(records).unwrap()
}

/// Ten days resembling late March in New York.
pub(crate) fn sample_result_set() -> ResultSet {
    result_set_from(&[
        (40.0, "05:41 AM", "Waning Crescent"),
        (42.0, "06:08 AM", "Waning Crescent"),
        (38.0, "06:34 AM", "New Moon"),
        (50.0, "07:00 AM", "New Moon"),
        (45.0, "07:29 AM", "Waxing Crescent"),
        (41.0, "08:02 AM", "Waxing Crescent"),
        (39.0, "08:41 AM", "Waxing Crescent"),
        (48.0, "09:27 AM", "Waxing Crescent"),
        (44.0, "10:22 AM", "Waxing Crescent"),
        (43.0, "11:24 AM", "First Quarter"),
    ])
}
