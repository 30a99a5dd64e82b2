use std::str::FromStr;

use thiserror::Error;

use super::model::{Roster, StudentRecord};

/// Highest threshold the console accepts: three marks of 100.
pub const MAX_THRESHOLD: i64 = 300;

// ---------------------------------------------------------------------------
// Threshold – a validated cutoff entered at the prompt
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThresholdError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("threshold {0} is outside 0..=300")]
    OutOfRange(i64),
}

/// A cutoff in `0..=MAX_THRESHOLD`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threshold(i64);

impl Threshold {
    pub fn new(value: i64) -> Result<Self, ThresholdError> {
        if (0..=MAX_THRESHOLD).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ThresholdError::OutOfRange(value))
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

impl FromStr for Threshold {
    type Err = ThresholdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let value = s
            .parse::<i64>()
            .map_err(|_| ThresholdError::NotANumber(s.to_string()))?;
        Self::new(value)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Return indices of students whose total is strictly below `limit`.
///
/// Students without a computed total are never selected. Roster order is
/// left untouched.
pub fn filtered_indices(roster: &Roster, limit: i64) -> Vec<usize> {
    roster
        .students
        .iter()
        .enumerate()
        .filter(|(_, s)| matches!(s.total, Some(total) if total < limit))
        .map(|(i, _)| i)
        .collect()
}

impl Roster {
    /// Students with total strictly below `limit`, in current order.
    pub fn below_threshold(&self, limit: i64) -> Vec<&StudentRecord> {
        filtered_indices(self, limit)
            .into_iter()
            .map(|i| &self.students[i])
            .collect()
    }
}
