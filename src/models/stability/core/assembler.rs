//! Assembly of per-phase stability intervals from grand potential diagrams.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::support::phase::{ChemicalPotentials, Element, GrandPotentialDiagram, PhaseDiagram};

use super::{ChemicalPotentialWindow, StabilityError, StabilityIntervals, TransitionPotentials};

/// Phases stable within one chemical potential window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowPhases {
    pub window: ChemicalPotentialWindow,
    pub phases: Vec<String>,
}

/// Builds stability intervals of a system open to one element.
///
/// For each window between consecutive transition potentials of the open
/// element, a grand potential diagram is built at a potential inside the
/// window and its stable phases are recorded. The windows are then merged
/// into one interval per phase with [`merge`].
pub struct GrandPotentialAssembler<'a, D> {
    diagram: &'a D,
    open: Element,
}

impl<'a, D: PhaseDiagram> GrandPotentialAssembler<'a, D> {
    #[must_use]
    pub fn new(diagram: &'a D, open: Element) -> Self {
        Self { diagram, open }
    }

    /// Transition potentials of the open element, validated.
    ///
    /// # Errors
    ///
    /// Returns [`StabilityError`] if the diagram cannot report the
    /// transitions or if they are not strictly monotonic.
    pub fn transitions(&self) -> Result<TransitionPotentials, StabilityError> {
        let values = self
            .diagram
            .transition_chempots(&self.open)
            .map_err(|err| {
                StabilityError::diagram_failed(
                    format!("transition potentials of {}", self.open),
                    err,
                )
            })?;
        Ok(TransitionPotentials::new(values)?)
    }

    /// Phases stable in each window of `transitions`.
    ///
    /// # Errors
    ///
    /// Returns [`StabilityError::DiagramFailed`] if a grand potential
    /// diagram cannot be built.
    pub fn window_phases(
        &self,
        transitions: &TransitionPotentials,
    ) -> Result<Vec<WindowPhases>, StabilityError> {
        transitions
            .windows()
            .map(|window| {
                let chempots = ChemicalPotentials::from([(self.open.clone(), window.representative)]);
                let grand = self.diagram.grand_potential(&chempots).map_err(|err| {
                    StabilityError::diagram_failed(
                        format!(
                            "grand potential diagram at mu_{}={}",
                            self.open, window.representative
                        ),
                        err,
                    )
                })?;

                let phases = grand.stable_phase_names();
                trace!(
                    index = window.index,
                    mu = window.representative,
                    ?phases,
                    "grand potential window"
                );

                Ok(WindowPhases { window, phases })
            })
            .collect()
    }

    /// Stability interval of every phase, from the diagram's own transitions.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Self::transitions`] and
    /// [`Self::window_phases`].
    pub fn assemble(&self) -> Result<StabilityIntervals, StabilityError> {
        let transitions = self.transitions()?;
        self.assemble_with(&transitions)
    }

    /// Stability interval of every phase, from the given transitions.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Self::window_phases`].
    pub fn assemble_with(
        &self,
        transitions: &TransitionPotentials,
    ) -> Result<StabilityIntervals, StabilityError> {
        Ok(merge(&self.window_phases(transitions)?))
    }
}

/// Merges window records into one interval per phase, walking windows in order.
#[must_use]
pub fn merge(windows: &[WindowPhases]) -> StabilityIntervals {
    let mut intervals = StabilityIntervals::new();
    for record in windows {
        for phase in &record.phases {
            intervals.record(phase, &record.window);
        }
    }
    intervals
}
