use crate::config::ProviderConfig;
use crate::provider::error::ProviderError;
use crate::provider::response::HistoryResponse;
use crate::provider::HistoryProvider;
use crate::types::day_record::DayRecord;
use chrono::NaiveDate;
use log::{debug, warn};
use reqwest::Client;

/// Async client for the WeatherAPI `history.json` endpoint, one request per date.
///
/// No request timeout is configured; a request runs until the server answers or
/// the connection fails.
pub struct WeatherApiClient {
    config: ProviderConfig,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(config: ProviderConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Fetches the average temperature and moon data for `date` in the configured city.
    pub async fn fetch_day(&self, date: NaiveDate) -> Result<DayRecord, ProviderError> {
        let dt = date.format("%Y-%m-%d").to_string();
        debug!("Requesting history for {} on {}", self.config.city, dt);

        let response = self
            .http
            .get(self.config.history_url())
            .query(&[
                ("key", self.config.api_key.as_str()),
                ("q", self.config.city.as_str()),
                ("dt", dt.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::NetworkRequest { date, source: e })?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error fetching history for {}: {:?}", dt, e.status());
                return Err(if let Some(status) = e.status() {
                    ProviderError::HttpStatus {
                        date,
                        status,
                        source: e,
                    }
                } else {
                    ProviderError::NetworkRequest { date, source: e }
                });
            }
        };

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::NetworkRequest { date, source: e })?;
        let parsed: HistoryResponse = serde_json::from_str(&body)
            .map_err(|e| ProviderError::InvalidJson { date, source: e })?;
        parsed.into_day_record(date)
    }
}

impl HistoryProvider for WeatherApiClient {
    async fn day_history(&self, date: NaiveDate) -> Result<DayRecord, ProviderError> {
        self.fetch_day(date).await
    }
}
