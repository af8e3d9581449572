mod astrodash;
mod batch_fetcher;
mod config;
mod dashboard;
mod error;
mod filtering;
mod provider;
mod render;
mod statistics;
mod types;

#[cfg(test)]
mod test_utils;

pub use astrodash::*;
pub use error::AstroDashError;

pub use batch_fetcher::{day_sequence, fetch_result_set, DEFAULT_DAY_COUNT, DEFAULT_START_DATE};
pub use config::*;
pub use dashboard::{Dashboard, DashboardState};
pub use filtering::{filter, matches, matches_date_query, phase_options, FilteredView};
pub use render::{render, LOADING_TEXT, NO_MATCHES_TEXT};
pub use statistics::{earliest_moon_rise, lowest_temp, most_common_moon_phase, SummaryStats};

pub use provider::client::WeatherApiClient;
pub use provider::error::ProviderError;
pub use provider::HistoryProvider;

pub use types::day_record::DayRecord;
pub use types::filter_criteria::{FilterCriteria, PhaseSelector, TemperatureRange, ALL_PHASES};
pub use types::moon_phase::{moon_glyph, MoonPhase, DEFAULT_GLYPH};
pub use types::result_set::ResultSet;
