use std::collections::BTreeMap;

use super::{Element, PhaseEntry};

/// Fixed chemical potentials (eV per atom) of the open elements.
pub type ChemicalPotentials = BTreeMap<Element, f64>;

/// Stable phases an unstable entry decomposes into, with their fractions.
pub type Decomposition = Vec<(PhaseEntry, f64)>;

/// A closed-system phase diagram built from computed entries.
///
/// Implementations typically wrap a convex hull construction. The stability
/// models only query it; they never build one.
pub trait PhaseDiagram {
    /// Grand potential diagram produced by [`PhaseDiagram::grand_potential`].
    type Grand: GrandPotentialDiagram;

    /// Error raised by the diagram backend.
    type Error: std::error::Error + Send + Sync + 'static;

    /// All elements of the chemical system.
    fn elements(&self) -> &[Element];

    /// Entries on the convex hull.
    fn stable_entries(&self) -> &[PhaseEntry];

    /// Entries above the convex hull.
    fn unstable_entries(&self) -> &[PhaseEntry];

    /// Decomposition of `entry` into stable phases and its energy above the
    /// hull in eV per atom.
    ///
    /// # Errors
    ///
    /// Returns the backend error if the entry cannot be placed on the diagram.
    fn decomposition_and_e_above_hull(
        &self,
        entry: &PhaseEntry,
    ) -> Result<(Decomposition, f64), Self::Error>;

    /// Chemical potentials of `element` at which the set of stable phases
    /// changes, ordered from the least to the most negative.
    ///
    /// # Errors
    ///
    /// Returns the backend error if `element` is not part of the system.
    fn transition_chempots(&self, element: &Element) -> Result<Vec<f64>, Self::Error>;

    /// Builds the grand potential diagram of this diagram's entries with the
    /// given chemical potentials fixed, over all of [`PhaseDiagram::elements`].
    ///
    /// # Errors
    ///
    /// Returns the backend error if the grand potential diagram cannot be built.
    fn grand_potential(&self, chempots: &ChemicalPotentials) -> Result<Self::Grand, Self::Error>;
}

/// A phase diagram at fixed chemical potential of one or more open elements.
pub trait GrandPotentialDiagram {
    /// The fixed chemical potentials.
    fn chempots(&self) -> &ChemicalPotentials;

    /// Entries stable at the fixed chemical potentials.
    fn stable_entries(&self) -> &[PhaseEntry];

    /// Names of the stable entries, in the diagram's order.
    fn stable_phase_names(&self) -> Vec<String> {
        self.stable_entries().iter().map(PhaseEntry::name).collect()
    }
}
