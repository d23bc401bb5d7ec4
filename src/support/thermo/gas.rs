//! Reservoir gases and the constants that describe them.
//!
//! A gas type names a substance, and [`ReservoirGas`] supplies the constant
//! set a [`GasReservoir`](super::GasReservoir) is built from.

mod oxygen;

pub use oxygen::Oxygen;

use uom::si::{f64::Energy, f64::Pressure};

use super::ShomateFit;

/// Constant set for a [`GasReservoir`](super::GasReservoir).
///
/// Energies are per molecule. `ground_state_energy` is the 0 K energy used as
/// the absolute reference (typically a DFT total energy), and
/// `reference_enthalpy_offset` is `H(298.15 K) − H(0 K)` from tables.
#[derive(Debug, Clone, PartialEq)]
pub struct ReservoirParameters {
    pub fit: ShomateFit,
    pub ground_state_energy: Energy,
    pub reference_enthalpy_offset: Energy,
    pub pressure: Pressure,
    pub atoms_per_molecule: u32,
}

impl ReservoirParameters {
    /// Returns these parameters at a different operating partial pressure.
    #[must_use]
    pub fn with_pressure(mut self, pressure: Pressure) -> Self {
        self.pressure = pressure;
        self
    }
}

/// Gas constants required by [`GasReservoir`](super::GasReservoir).
pub trait ReservoirGas {
    /// Returns the constant set for this gas.
    fn parameters() -> ReservoirParameters;
}
