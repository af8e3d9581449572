pub mod client;
pub mod error;
pub(crate) mod response;

use crate::provider::error::ProviderError;
use crate::types::day_record::DayRecord;
use chrono::NaiveDate;
use std::future::Future;

/// A source of one [`DayRecord`] per calendar date.
///
/// [`client::WeatherApiClient`] is the HTTP implementation. The batch fetcher is
/// generic over this trait, so any other source (a fixture, a different API) can
/// stand in for it.
pub trait HistoryProvider {
    fn day_history(
        &self,
        date: NaiveDate,
    ) -> impl Future<Output = Result<DayRecord, ProviderError>> + Send;
}
