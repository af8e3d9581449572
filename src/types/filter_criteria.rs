//! User-controlled filter state: date search text, moon phase selector and
//! temperature bounds.

use crate::error::AstroDashError;
use bon::Builder;
use std::fmt;

/// Label of the selector option that disables phase filtering.
pub const ALL_PHASES: &str = "All";

/// Either every phase, or one exact (case-sensitive) phase name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhaseSelector {
    #[default]
    All,
    Exact(String),
}

impl PhaseSelector {
    pub fn matches(&self, phase: &str) -> bool {
        match self {
            PhaseSelector::All => true,
            PhaseSelector::Exact(wanted) => wanted == phase,
        }
    }

    /// The option label as shown in the phase select control.
    pub fn label(&self) -> &str {
        match self {
            PhaseSelector::All => ALL_PHASES,
            PhaseSelector::Exact(phase) => phase,
        }
    }
}

/// Maps a select option back to a selector; only the literal `"All"` means every phase.
impl From<&str> for PhaseSelector {
    fn from(option: &str) -> Self {
        if option == ALL_PHASES {
            PhaseSelector::All
        } else {
            PhaseSelector::Exact(option.to_owned())
        }
    }
}

impl fmt::Display for PhaseSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive temperature bounds in °F. `low <= high` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    low: f64,
    high: f64,
}

impl TemperatureRange {
    pub const SLIDER_MIN: f64 = 0.0;
    pub const SLIDER_MAX: f64 = 100.0;

    /// # Errors
    ///
    /// Returns [`AstroDashError::InvalidTemperatureRange`] if `low > high` or either bound is NaN.
    pub fn new(low: f64, high: f64) -> Result<Self, AstroDashError> {
        // Written this way round so NaN bounds are rejected too.
        if !(low <= high) {
            return Err(AstroDashError::InvalidTemperatureRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, temperature_f: f64) -> bool {
        self.low <= temperature_f && temperature_f <= self.high
    }
}

impl Default for TemperatureRange {
    fn default() -> Self {
        Self {
            low: Self::SLIDER_MIN,
            high: Self::SLIDER_MAX,
        }
    }
}

/// The active filters. All three conditions must hold for a record to be shown.
///
/// # Examples
///
/// ```
/// use astrodash::{FilterCriteria, PhaseSelector, TemperatureRange};
///
/// let criteria = FilterCriteria::builder()
///     .date_query("2025-03")
///     .phase(PhaseSelector::from("Full Moon"))
///     .temperature(TemperatureRange::new(30.0, 60.0).unwrap())
///     .build();
/// assert_eq!(criteria.phase.label(), "Full Moon");
///
/// // Unset fields fall back to "match everything in the slider range".
/// let defaults = FilterCriteria::builder().build();
/// assert_eq!(defaults, FilterCriteria::default());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Builder)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the `YYYY-MM-DD` date. Empty matches everything.
    #[builder(into, default)]
    pub date_query: String,
    #[builder(default)]
    pub phase: PhaseSelector,
    #[builder(default)]
    pub temperature: TemperatureRange,
}
