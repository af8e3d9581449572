//! This module provides the main entry point: a client that fetches a run of days
//! from WeatherAPI for the configured city and hands back either the raw
//! [`ResultSet`] or a ready [`Dashboard`].

use crate::batch_fetcher::{fetch_result_set, DEFAULT_DAY_COUNT, DEFAULT_START_DATE};
use crate::config::ProviderConfig;
use crate::dashboard::Dashboard;
use crate::error::AstroDashError;
use crate::provider::client::WeatherApiClient;
use crate::types::result_set::ResultSet;
use bon::bon;
use chrono::NaiveDate;
use log::warn;

/// The main client for fetching historic weather and moon data.
///
/// Create an instance using [`AstroDash::new()`] to read the provider settings from
/// the environment, or [`AstroDash::with_config()`] to pass them explicitly.
///
/// # Examples
///
/// ```rust
/// use astrodash::{AstroDash, ProviderConfig};
///
/// let client = AstroDash::with_config(
///     ProviderConfig::builder().api_key("my-key").city("Boston").build(),
/// );
/// assert_eq!(client.config().city, "Boston");
/// ```
pub struct AstroDash {
    client: WeatherApiClient,
}

#[bon]
impl AstroDash {
    /// Creates a client from `WEATHERAPI_KEY`, `ASTRODASH_CITY` and `ASTRODASH_BASE_URL`.
    ///
    /// # Errors
    ///
    /// Returns [`AstroDashError::MissingApiKey`] if `WEATHERAPI_KEY` is not set.
    pub fn new() -> Result<Self, AstroDashError> {
        Ok(Self::with_config(ProviderConfig::from_env()?))
    }

    pub fn with_config(config: ProviderConfig) -> Self {
        Self {
            client: WeatherApiClient::new(config),
        }
    }

    pub fn config(&self) -> &ProviderConfig {
        self.client.config()
    }

    /// Fetches one record per day, all days requested concurrently.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.start(NaiveDate)`: Optional. First day of the range. Defaults to 2025-03-26.
    /// * `.days(usize)`: Optional. Number of consecutive days. Defaults to `10`.
    ///
    /// # Errors
    ///
    /// Returns [`AstroDashError::Fetch`] with the first failed day if any request fails
    /// (transport error, non-2xx status, or a response missing the expected fields).
    /// No partial result is returned.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use astrodash::{AstroDash, AstroDashError};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), AstroDashError> {
    /// let client = AstroDash::new()?;
    /// let days = client.fetch_days().call().await?;
    /// for day in &days {
    ///     println!("{} {}°F {}", day.date, day.temperature_f, day.moon_phase);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    #[builder]
    pub async fn fetch_days(
        &self,
        start: Option<NaiveDate>,
        days: Option<usize>,
    ) -> Result<ResultSet, AstroDashError> {
        let start = start.unwrap_or(DEFAULT_START_DATE);
        let days = days.unwrap_or(DEFAULT_DAY_COUNT);
        fetch_result_set(&self.client, start, days).await
    }

    /// Runs the fetch batch once and returns a dashboard in either the ready or the
    /// failed state. Takes the same optional `.start()` and `.days()` as [`AstroDash::fetch_days`].
    #[builder]
    pub async fn load_dashboard(
        &self,
        start: Option<NaiveDate>,
        days: Option<usize>,
    ) -> Dashboard {
        let outcome = self
            .fetch_days()
            .maybe_start(start)
            .maybe_days(days)
            .call()
            .await;
        let mut dashboard = Dashboard::new();
        if let Err(e) = dashboard.complete(outcome) {
            // A fresh dashboard is always loading, so this cannot happen.
            warn!("Discarding fetch outcome: {}", e);
        }
        dashboard
    }
}
