use std::cell::RefCell;

use thiserror::Error;

use crate::support::phase::{
    ChemicalPotentials, Composition, Decomposition, Element, GrandPotentialDiagram, PhaseDiagram,
    PhaseEntry,
};

#[derive(Debug, Error)]
#[error("mock diagram: {0}")]
pub(crate) struct MockError(String);

/// Phase diagram whose grand potential diagrams are looked up by window.
///
/// The window of a sampled potential is found from the transitions: in
/// descending order, window `i` holds potentials between transition `i`
/// and transition `i + 1`.
pub(crate) struct MockDiagram {
    elements: Vec<Element>,
    transitions: Vec<f64>,
    windows: Vec<Vec<PhaseEntry>>,
    stable: Vec<PhaseEntry>,
    unstable: Vec<(PhaseEntry, Decomposition, f64)>,
    unstable_entries: Vec<PhaseEntry>,
    fail_at: Option<usize>,
    sampled: RefCell<Vec<f64>>,
}

pub(crate) struct MockGrand {
    chempots: ChemicalPotentials,
    stable: Vec<PhaseEntry>,
}

pub(crate) fn entry(formula: &[(&str, f64)], id: &str) -> PhaseEntry {
    PhaseEntry::new(id, Composition::new(formula.iter().copied()), -1.0)
}

/// Transitions `[-4, -5, -6]` with windows `{A, B}`, `{B, C}`, `{C}`.
pub(crate) fn abc_diagram() -> MockDiagram {
    MockDiagram::new(
        vec![-4.0, -5.0, -6.0],
        vec![vec!["A", "B"], vec!["B", "C"], vec!["C"]],
    )
}

impl MockDiagram {
    pub(crate) fn new(transitions: Vec<f64>, windows: Vec<Vec<&str>>) -> Self {
        let windows: Vec<Vec<PhaseEntry>> = windows
            .into_iter()
            .map(|names| {
                names
                    .into_iter()
                    .map(|name| entry(&[(name, 1.0)], &format!("mock-{name}")))
                    .collect()
            })
            .collect();

        let mut stable: Vec<PhaseEntry> = Vec::new();
        for phase in windows.iter().flatten() {
            if !stable.contains(phase) {
                stable.push(phase.clone());
            }
        }

        Self {
            elements: vec![Element::oxygen()],
            transitions,
            windows,
            stable,
            unstable: Vec::new(),
            unstable_entries: Vec::new(),
            fail_at: None,
            sampled: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing_at(mut self, window: usize) -> Self {
        self.fail_at = Some(window);
        self
    }

    pub(crate) fn with_stable(mut self, stable: Vec<PhaseEntry>) -> Self {
        self.stable = stable;
        self
    }

    pub(crate) fn with_unstable(
        mut self,
        entry: PhaseEntry,
        decomposition: Decomposition,
        e_above_hull: f64,
    ) -> Self {
        self.unstable_entries.push(entry.clone());
        self.unstable.push((entry, decomposition, e_above_hull));
        self
    }

    /// Potentials at which grand potential diagrams were requested.
    pub(crate) fn sampled(&self) -> Vec<f64> {
        self.sampled.borrow().clone()
    }

    fn window_of(&self, mu: f64) -> usize {
        self.transitions
            .iter()
            .filter(|&&t| t >= mu)
            .count()
            .saturating_sub(1)
    }
}

impl PhaseDiagram for MockDiagram {
    type Grand = MockGrand;
    type Error = MockError;

    fn elements(&self) -> &[Element] {
        &self.elements
    }

    fn stable_entries(&self) -> &[PhaseEntry] {
        &self.stable
    }

    fn unstable_entries(&self) -> &[PhaseEntry] {
        &self.unstable_entries
    }

    fn decomposition_and_e_above_hull(
        &self,
        entry: &PhaseEntry,
    ) -> Result<(Decomposition, f64), Self::Error> {
        self.unstable
            .iter()
            .find(|(candidate, _, _)| candidate == entry)
            .map(|(_, decomposition, e)| (decomposition.clone(), *e))
            .ok_or_else(|| MockError(format!("{} is not on the diagram", entry.id)))
    }

    fn transition_chempots(&self, element: &Element) -> Result<Vec<f64>, Self::Error> {
        if !self.elements.contains(element) {
            return Err(MockError(format!("{element} is not in the system")));
        }
        Ok(self.transitions.clone())
    }

    fn grand_potential(&self, chempots: &ChemicalPotentials) -> Result<Self::Grand, Self::Error> {
        let mu = chempots.values().next().copied().unwrap_or(0.0);
        self.sampled.borrow_mut().push(mu);

        let window = self.window_of(mu);
        if self.fail_at == Some(window) {
            return Err(MockError(format!("no hull at {mu}")));
        }

        Ok(MockGrand {
            chempots: chempots.clone(),
            stable: self.windows.get(window).cloned().unwrap_or_default(),
        })
    }
}

impl GrandPotentialDiagram for MockGrand {
    fn chempots(&self) -> &ChemicalPotentials {
        &self.chempots
    }

    fn stable_entries(&self) -> &[PhaseEntry] {
        &self.stable
    }
}
