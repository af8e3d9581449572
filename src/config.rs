//! Provider settings: which city to query, where the API lives and the key to use.

use crate::error::AstroDashError;
use bon::Builder;
use std::fmt;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";
pub const DEFAULT_CITY: &str = "New York";

pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";
pub const CITY_ENV: &str = "ASTRODASH_CITY";
pub const BASE_URL_ENV: &str = "ASTRODASH_BASE_URL";

/// Connection settings for the WeatherAPI history endpoint.
///
/// Build one with [`ProviderConfig::builder`] or read it from the environment with
/// [`ProviderConfig::from_env`]. Fields left unset on the builder fall back to
/// [`DEFAULT_CITY`] and [`DEFAULT_BASE_URL`].
///
/// # Examples
///
/// ```
/// use astrodash::ProviderConfig;
///
/// let config = ProviderConfig::builder().api_key("my-key").build();
/// assert_eq!(config.city, "New York");
/// assert_eq!(config.base_url, "http://api.weatherapi.com/v1");
///
/// let london = ProviderConfig::builder()
///     .api_key("my-key")
///     .city("London")
///     .build();
/// assert_eq!(london.city, "London");
/// ```
#[derive(Clone, PartialEq, Eq, Builder)]
pub struct ProviderConfig {
    #[builder(into)]
    pub api_key: String,
    #[builder(into, default = DEFAULT_CITY.to_owned())]
    pub city: String,
    #[builder(into, default = DEFAULT_BASE_URL.to_owned())]
    pub base_url: String,
}

impl ProviderConfig {
    /// Reads `WEATHERAPI_KEY` (required), `ASTRODASH_CITY` and `ASTRODASH_BASE_URL` (optional).
    ///
    /// # Errors
    ///
    /// Returns [`AstroDashError::MissingApiKey`] if `WEATHERAPI_KEY` is unset or not valid unicode.
    pub fn from_env() -> Result<Self, AstroDashError> {
        let api_key =
            std::env::var(API_KEY_ENV).map_err(|_| AstroDashError::MissingApiKey(API_KEY_ENV))?;
        Ok(Self::builder()
            .api_key(api_key)
            .maybe_city(std::env::var(CITY_ENV).ok())
            .maybe_base_url(std::env::var(BASE_URL_ENV).ok())
            .build())
    }

    pub(crate) fn history_url(&self) -> String {
        format!("{}/history.json", self.base_url.trim_end_matches('/'))
    }
}

// The key is a credential, keep it out of logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("city", &self.city)
            .field("base_url", &self.base_url)
            .finish()
    }
}
