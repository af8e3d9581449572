//! The ordered, write-once collection of fetched day records.

use crate::error::AstroDashError;
use crate::types::day_record::DayRecord;
use serde::Serialize;
use std::slice;

/// All records fetched in one session, ordered by ascending date.
///
/// Dates are always consecutive calendar days, which also makes them distinct.
/// A `ResultSet` is never modified once built; filtering and statistics borrow it.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct ResultSet {
    records: Vec<DayRecord>,
}

impl ResultSet {
    /// Builds a result set, checking that each record is exactly one day after the previous one.
    ///
    /// # Errors
    ///
    /// Returns [`AstroDashError::InvalidResultSet`] for the first pair of neighbouring
    /// records that are not consecutive days (this covers duplicates and out-of-order dates).
    pub fn new(records: Vec<DayRecord>) -> Result<Self, AstroDashError> {
        if let Some(pair) = records
            .windows(2)
            .find(|pair| pair[0].date.succ_opt() != Some(pair[1].date))
        {
            return Err(AstroDashError::InvalidResultSet {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }
        Ok(Self { records })
    }

    pub fn records(&self) -> &[DayRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, DayRecord> {
        self.records.iter()
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a DayRecord;
    type IntoIter = slice::Iter<'a, DayRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
