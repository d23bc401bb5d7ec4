use serde::{Deserialize, Serialize};

use super::Composition;

/// A computed phase: a composition, its energy, and a stable identifier
/// (e.g. a materials database id).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseEntry {
    pub id: String,
    pub composition: Composition,
    /// Total energy of the formula unit, in eV.
    pub energy: f64,
}

impl PhaseEntry {
    #[must_use]
    pub fn new(id: impl Into<String>, composition: Composition, energy: f64) -> Self {
        Self {
            id: id.into(),
            composition,
            energy,
        }
    }

    /// Display name of the phase, its reduced formula.
    #[must_use]
    pub fn name(&self) -> String {
        self.composition.reduced_formula()
    }

    /// Energy per atom, in eV.
    #[must_use]
    pub fn energy_per_atom(&self) -> f64 {
        self.energy / self.composition.num_atoms()
    }
}
