use chrono::NaiveDate;
use thiserror::Error;

/// Failure to obtain one day's record from the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Network request failed for {date}")]
    NetworkRequest {
        date: NaiveDate,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to fetch data for {date}: HTTP status {status}")]
    HttpStatus {
        date: NaiveDate,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Provider returned invalid JSON for {date}")]
    InvalidJson {
        date: NaiveDate,
        #[source]
        source: serde_json::Error,
    },

    // Valid JSON, but without the nested forecast fields we need
    #[error("Provider response for {date} is missing {missing}")]
    MalformedResponse {
        date: NaiveDate,
        missing: &'static str,
    },
}

impl ProviderError {
    pub fn date(&self) -> NaiveDate {
        match self {
            ProviderError::NetworkRequest { date, .. }
            | ProviderError::HttpStatus { date, .. }
            | ProviderError::InvalidJson { date, .. }
            | ProviderError::MalformedResponse { date, .. } => *date,
        }
    }
}
