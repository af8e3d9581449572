use chrono::NaiveDate;
use serde::Serialize;

/// Weather and lunar observations for a single calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRecord {
    pub date: NaiveDate,            // requested date, unique within a ResultSet
    pub temperature_f: f64,         // day.avgtemp_f
    pub moon_rise: String,          // astro.moonrise, e.g. "06:45 AM"
    pub moon_set: String,           // astro.moonset
    pub moon_phase: String,         // astro.moon_phase, kept verbatim
}

impl DayRecord {
    /// The `YYYY-MM-DD` form of the date, used for searching and display.
    pub fn date_key(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
