//! Subset of the WeatherAPI `history.json` payload that the dashboard reads.
//!
//! Only `forecast.forecastday[0].day.avgtemp_f` and the three `astro` moon fields
//! are modelled; serde ignores everything else in the body.

use crate::provider::error::ProviderError;
use crate::types::day_record::DayRecord;
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct HistoryResponse {
    forecast: Option<Forecast>,
}

#[derive(Debug, Deserialize)]
struct Forecast {
    #[serde(default)]
    forecastday: Vec<ForecastDay>,
}

#[derive(Debug, Deserialize)]
struct ForecastDay {
    day: Option<DaySummary>,
    astro: Option<Astro>,
}

#[derive(Debug, Deserialize)]
struct DaySummary {
    avgtemp_f: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Astro {
    moonrise: Option<String>,
    moonset: Option<String>,
    moon_phase: Option<String>,
}

impl HistoryResponse {
    /// Pulls the single day's record out of the response, failing on the first
    /// missing field rather than substituting defaults.
    pub(crate) fn into_day_record(self, date: NaiveDate) -> Result<DayRecord, ProviderError> {
        let missing = |missing| ProviderError::MalformedResponse { date, missing };

        let forecast_day = self
            .forecast
            .ok_or_else(|| missing("forecast"))?
            .forecastday
            .into_iter()
            .next()
            .ok_or_else(|| missing("forecast.forecastday[0]"))?;
        let temperature_f = forecast_day
            .day
            .and_then(|day| day.avgtemp_f)
            .ok_or_else(|| missing("day.avgtemp_f"))?;
        let astro = forecast_day.astro.ok_or_else(|| missing("astro"))?;

        Ok(DayRecord {
            date,
            temperature_f,
            moon_rise: astro.moonrise.ok_or_else(|| missing("astro.moonrise"))?,
            moon_set: astro.moonset.ok_or_else(|| missing("astro.moonset"))?,
            moon_phase: astro.moon_phase.ok_or_else(|| missing("astro.moon_phase"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 28).unwrap()
    }

    #[test]
    fn test_extracts_record_from_full_payload() {
        let body = json!({
            "location": { "name": "New York" },
            "forecast": { "forecastday": [{
                "date": "2025-03-28",
                "day": { "maxtemp_f": 51.2, "avgtemp_f": 44.6 },
                "astro": {
                    "sunrise": "06:53 AM",
                    "moonrise": "06:34 AM",
                    "moonset": "06:21 PM",
                    "moon_phase": "Waning Crescent",
                    "moon_illumination": 3
                }
            }]}
        });
        let response: HistoryResponse = serde_json::from_value(body).unwrap();
        let record = response.into_day_record(date()).unwrap();
        assert_eq!(record.date, date());
        assert_eq!(record.temperature_f, 44.6);
        assert_eq!(record.moon_rise, "06:34 AM");
        assert_eq!(record.moon_set, "06:21 PM");
        assert_eq!(record.moon_phase, "Waning Crescent");
    }

    #[test]
    fn test_empty_forecastday_is_malformed() {
        let response: HistoryResponse =
            serde_json::from_value(json!({ "forecast": { "forecastday": [] } })).unwrap();
        assert!(matches!(
            response.into_day_record(date()),
            Err(ProviderError::MalformedResponse { missing: "forecast.forecastday[0]", .. })
        ));
    }

    #[test]
    fn test_missing_astro_field_is_malformed() {
        let body = json!({ "forecast": { "forecastday": [{
            "day": { "avgtemp_f": 40.0 },
            "astro": { "moonrise": "06:34 AM", "moonset": "06:21 PM" }
        }]}});
        let response: HistoryResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(
            response.into_day_record(date()),
            Err(ProviderError::MalformedResponse { missing: "astro.moon_phase", .. })
        ));
    }

    #[test]
    fn test_error_body_without_forecast_is_malformed() {
        let body = json!({ "error": { "code": 1006, "message": "No matching location found." } });
        let response: HistoryResponse = serde_json::from_value(body).unwrap();
        assert!(matches!(
            response.into_day_record(date()),
            Err(ProviderError::MalformedResponse { missing: "forecast", .. })
        ));
    }
}
