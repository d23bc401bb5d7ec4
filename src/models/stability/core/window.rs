//! Chemical potential windows between transition potentials.

use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Offset from the last transition to the potential used to sample the
/// unbounded last window, in eV.
pub const LAST_WINDOW_OFFSET: f64 = 0.1;

/// Width given to the unbounded last window, in eV.
///
/// This is a display convention, not a physical bound.
pub const LAST_WINDOW_EXTENT: f64 = 2.0;

/// A strictly monotonic sequence of transition chemical potentials (eV).
///
/// The usual order is descending: index 0 is the least negative (most
/// oxidizing for oxygen) boundary. Ascending sequences are accepted too, in
/// which case the last window extends upward instead of downward.
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionPotentials {
    values: Vec<f64>,
    /// `-1.0` when descending, `1.0` when ascending.
    direction: f64,
}

impl TransitionPotentials {
    /// Validates a sequence of transition potentials.
    ///
    /// An empty sequence is valid and yields no windows.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] if a value is not finite or if the
    /// sequence is not strictly monotonic.
    pub fn new(values: Vec<f64>) -> Result<Self, ValidationError> {
        if let Some((index, &value)) = values.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(ValidationError::NonFinite { index, value });
        }

        let direction = match values.as_slice() {
            [first, second, ..] if second > first => 1.0,
            _ => -1.0,
        };

        for (index, pair) in values.windows(2).enumerate() {
            let (previous, current) = (pair[0], pair[1]);
            if (current - previous) * direction <= 0.0 {
                return Err(ValidationError::NonMonotonic {
                    index: index + 1,
                    previous,
                    current,
                });
            }
        }

        Ok(Self { values, direction })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    /// Windows in sequence order, one per transition potential.
    pub fn windows(&self) -> impl Iterator<Item = ChemicalPotentialWindow> + '_ {
        let last = self.values.len().saturating_sub(1);
        self.values.iter().enumerate().map(move |(index, &start)| {
            if index < last {
                let end = self.values[index + 1];
                ChemicalPotentialWindow {
                    index,
                    start,
                    end,
                    representative: 0.5 * (start + end),
                }
            } else {
                ChemicalPotentialWindow {
                    index,
                    start,
                    end: start + self.direction * LAST_WINDOW_EXTENT,
                    representative: start + self.direction * LAST_WINDOW_OFFSET,
                }
            }
        })
    }
}

/// The chemical potential range between two adjacent transitions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChemicalPotentialWindow {
    pub index: usize,
    pub start: f64,
    pub end: f64,
    /// Potential strictly inside the window at which its phases are sampled.
    pub representative: f64,
}
