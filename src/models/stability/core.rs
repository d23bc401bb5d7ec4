//! Stability intervals of a system open to one element.
//!
//! The closed phase diagram's transition potentials for the open element cut
//! the chemical potential axis into windows. Each window is sampled with a
//! grand potential diagram, the stable phases of all windows are merged
//! into one interval per phase, and the intervals can finally be projected
//! onto a temperature, voltage, or relative chemical potential axis.

mod assembler;
mod error;
mod intervals;
mod projection;
mod report;
mod window;

#[cfg(test)]
pub(crate) mod test_support;

pub use assembler::{GrandPotentialAssembler, WindowPhases, merge};
pub use error::{ConfigurationError, ProjectionError, StabilityError, ValidationError};
pub use intervals::{PhaseInterval, StabilityIntervals};
pub use projection::{
    Bar, Chart, Conversion, DisplayRange, LITHIUM_METAL_MU, ProjectedInterval, ProjectionConfig,
    ResolvedProjection, SODIUM_METAL_MU, StabilityRangeProjector, Y_LABEL,
};
pub use report::{StabilityReport, StablePhase, UnstablePhase};
pub use window::{
    ChemicalPotentialWindow, LAST_WINDOW_EXTENT, LAST_WINDOW_OFFSET, TransitionPotentials,
};
