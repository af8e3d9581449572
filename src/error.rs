use crate::provider::error::ProviderError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AstroDashError {
    #[error(transparent)]
    Fetch(#[from] ProviderError),

    #[error("Result set dates must be consecutive days, found {previous} followed by {next}")]
    InvalidResultSet { previous: NaiveDate, next: NaiveDate },

    #[error("Temperature range is empty: low bound {low} is above high bound {high}")]
    InvalidTemperatureRange { low: f64, high: f64 },

    #[error("Weather data has already been loaded for this session")]
    AlreadyLoaded,

    #[error("Provider API key not set, expected environment variable '{0}'")]
    MissingApiKey(&'static str),

    #[error("Failed to serialize records to JSON")]
    Serialize(#[from] serde_json::Error),
}
