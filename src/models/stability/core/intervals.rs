//! Per-phase stability intervals.

use serde::{Deserialize, Serialize};

use super::ChemicalPotentialWindow;

/// The range of the open element's chemical potential over which a phase is stable.
///
/// `start` belongs to the first window the phase appears in and `end` to the
/// last one, so the pair follows the window order rather than numeric order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseInterval {
    pub phase: String,
    pub start: f64,
    pub end: f64,
}

/// Stability intervals of all phases, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StabilityIntervals {
    phases: Vec<PhaseInterval>,
}

impl StabilityIntervals {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `phase` as stable in `window`.
    ///
    /// A phase seen for the first time takes the window's range. A phase
    /// already recorded keeps its start and moves its end to the window's end.
    ///
    /// Phases are assumed to occupy one contiguous run of windows. A phase
    /// that reappears after a gap gets an interval spanning the gap.
    pub fn record(&mut self, phase: &str, window: &ChemicalPotentialWindow) {
        match self.phases.iter_mut().find(|interval| interval.phase == phase) {
            Some(interval) => interval.end = window.end,
            None => self.phases.push(PhaseInterval {
                phase: phase.to_owned(),
                start: window.start,
                end: window.end,
            }),
        }
    }

    #[must_use]
    pub fn get(&self, phase: &str) -> Option<&PhaseInterval> {
        self.phases.iter().find(|interval| interval.phase == phase)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PhaseInterval> {
        self.phases.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }
}

impl<'a> IntoIterator for &'a StabilityIntervals {
    type Item = &'a PhaseInterval;
    type IntoIter = std::slice::Iter<'a, PhaseInterval>;

    fn into_iter(self) -> Self::IntoIter {
        self.phases.iter()
    }
}

impl FromIterator<PhaseInterval> for StabilityIntervals {
    fn from_iter<I: IntoIterator<Item = PhaseInterval>>(iter: I) -> Self {
        Self {
            phases: iter.into_iter().collect(),
        }
    }
}
