//! Issues one provider request per day concurrently and assembles the results
//! into a [`ResultSet`], all or nothing.

use crate::error::AstroDashError;
use crate::provider::HistoryProvider;
use crate::types::result_set::ResultSet;
use chrono::NaiveDate;
use futures_util::future::try_join_all;
use log::{info, warn};

/// Number of days fetched per session.
pub const DEFAULT_DAY_COUNT: usize = 10;

/// First day of the fetched range.
pub const DEFAULT_START_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2025, 3, 26) {
    Some(date) => date,
    None => panic!("invalid default start date"),
};

/// `count` consecutive dates starting at `start` (inclusive).
pub fn day_sequence(start: NaiveDate, count: usize) -> Vec<NaiveDate> {
    start.iter_days().take(count).collect()
}

/// Fetches every day of the range concurrently.
///
/// All requests are in flight at the same time. Records come back in date order
/// regardless of which response arrived first. If any request fails, the first
/// failure observed is returned and the remaining requests are dropped; there is
/// no partial result and no retry.
pub async fn fetch_result_set<P: HistoryProvider>(
    provider: &P,
    start: NaiveDate,
    count: usize,
) -> Result<ResultSet, AstroDashError> {
    let dates = day_sequence(start, count);
    info!(
        "Fetching {} days of history starting at {}",
        dates.len(),
        start
    );

    let records = try_join_all(dates.iter().map(|&date| provider.day_history(date)))
        .await
        .map_err(|e| {
            warn!("Fetch batch failed at {}: {}", e.date(), e);
            AstroDashError::Fetch(e)
        })?;

    info!("Fetched {} day records", records.len());
    ResultSet::new(records)
}
