//! Session state: the write-once result set (or its loading/error state) plus the
//! filter criteria the user edits. Statistics and the filtered view are derived on read.

use crate::error::AstroDashError;
use crate::filtering::{filter, phase_options, FilteredView};
use crate::statistics::SummaryStats;
use crate::types::filter_criteria::{FilterCriteria, PhaseSelector, TemperatureRange};
use crate::types::result_set::ResultSet;
use log::{debug, error};

/// The three mutually exclusive top-level states of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardState {
    /// The fetch batch is still in flight.
    Loading,
    /// The fetch batch failed; holds the message shown to the user.
    Failed(String),
    /// All days were fetched.
    Ready(ResultSet),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    state: DashboardState,
    criteria: FilterCriteria,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Dashboard {
    /// A dashboard waiting for its fetch batch, with default filters.
    pub fn new() -> Self {
        Self {
            state: DashboardState::Loading,
            criteria: FilterCriteria::default(),
        }
    }

    /// Records the outcome of the fetch batch. Only the first call has an effect.
    ///
    /// # Errors
    ///
    /// Returns [`AstroDashError::AlreadyLoaded`] if the dashboard has left the loading state.
    pub fn complete(
        &mut self,
        outcome: Result<ResultSet, AstroDashError>,
    ) -> Result<(), AstroDashError> {
        if self.state != DashboardState::Loading {
            return Err(AstroDashError::AlreadyLoaded);
        }
        self.state = match outcome {
            Ok(result_set) => {
                debug!("Dashboard ready with {} records", result_set.len());
                DashboardState::Ready(result_set)
            }
            Err(e) => {
                error!("Error fetching data: {}", e);
                DashboardState::Failed(e.to_string())
            }
        };
        Ok(())
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    pub fn result_set(&self) -> Option<&ResultSet> {
        match &self.state {
            DashboardState::Ready(result_set) => Some(result_set),
            _ => None,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn set_date_query(&mut self, query: impl Into<String>) {
        self.criteria.date_query = query.into();
    }

    pub fn set_phase(&mut self, phase: PhaseSelector) {
        self.criteria.phase = phase;
    }

    /// Replaces the temperature bounds; the previous bounds stay if the new ones are invalid.
    pub fn set_temperature_range(&mut self, low: f64, high: f64) -> Result<(), AstroDashError> {
        self.criteria.temperature = TemperatureRange::new(low, high)?;
        Ok(())
    }

    /// The records matching the current criteria, or `None` until data is loaded.
    pub fn filtered(&self) -> Option<FilteredView<'_>> {
        self.result_set()
            .map(|result_set| filter(result_set, &self.criteria))
    }

    pub fn summary(&self) -> Option<SummaryStats> {
        self.result_set().map(SummaryStats::from_result_set)
    }

    /// `"All"` plus the distinct phases in the loaded data.
    pub fn phase_options(&self) -> Vec<String> {
        match self.result_set() {
            Some(result_set) => phase_options(result_set),
            None => phase_options(&ResultSet::default()),
        }
    }
}
