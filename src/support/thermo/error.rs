use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that may occur when converting between chemical potential and temperature.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservoirError {
    /// The fixed-point iteration did not settle within the iteration cap.
    ///
    /// No partial result is returned; `last_temperature` is reported only
    /// to help diagnose the input.
    #[error(
        "temperature iteration diverged for mu={chemical_potential} eV after {iters} iterations (last T={last_temperature} K)"
    )]
    NumericDivergence {
        /// Chemical potential in eV per atom.
        chemical_potential: f64,

        /// Temperature in kelvin at the last iteration.
        last_temperature: f64,

        /// Iteration count performed.
        iters: usize,
    },

    /// An input was NaN or infinite.
    #[error("non-finite {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },
}

/// Errors that may occur when building a [`GasReservoir`](super::GasReservoir).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReservoirParametersError {
    #[error("invalid operating pressure: {pressure_mpa} MPa")]
    Pressure {
        pressure_mpa: f64,
        #[source]
        source: ConstraintError,
    },
    #[error("invalid atom count per molecule: {atoms}")]
    AtomsPerMolecule { atoms: u32 },
    #[error("iteration cap must allow at least one iteration")]
    MaxIters {
        #[source]
        source: ConstraintError,
    },
    #[error("invalid temperature tolerance: {tol_kelvin} K")]
    Tolerance {
        tol_kelvin: f64,
        #[source]
        source: ConstraintError,
    },
    #[error("shomate fit has no temperature bands")]
    NoBands,
    #[error("shomate band {index} ends at {upper} K, not above {lower} K")]
    BandOrder { index: usize, lower: f64, upper: f64 },
}
