//! Phase diagram capability consumed by the stability models.
//!
//! Building a closed-system phase diagram (convex hull construction, grand
//! potential diagrams) is delegated to the caller through the
//! [`PhaseDiagram`] and [`GrandPotentialDiagram`] traits. This module only
//! defines the vocabulary those traits speak: elements, compositions and
//! computed entries.
//!
//! Chemical potentials are plain `f64` values in eV per atom, as produced by
//! the diagram backend.

mod composition;
mod diagram;
mod element;
mod entry;

pub use composition::Composition;
pub use diagram::{ChemicalPotentials, Decomposition, GrandPotentialDiagram, PhaseDiagram};
pub use element::Element;
pub use entry::PhaseEntry;
