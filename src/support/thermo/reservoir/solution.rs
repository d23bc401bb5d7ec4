use serde::{Deserialize, Serialize};

use crate::support::units::{kelvin_to_celsius, round_to};

/// A chemical potential and the reservoir temperature that imposes it.
///
/// Values are rounded for reporting: the chemical potential to 3 decimals,
/// temperatures to 2 decimals. Celsius is `K − 273.0`.
///
/// `chemical_potential` is per atom of the open element, the quantity a phase
/// diagram's transition potentials are expressed in. Gas tables usually
/// quote the per-molecule value instead, twice as large for O₂ (about
/// −10.45 eV rather than −5.227 eV at 298.15 K); see
/// [`GasReservoir::temperature_to_molecular_mu`](super::GasReservoir::temperature_to_molecular_mu).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureSolution {
    #[serde(rename = "ChemPot_eV")]
    pub chemical_potential: f64,
    #[serde(rename = "T_Celsius")]
    pub celsius: f64,
    #[serde(rename = "T_Kelvin")]
    pub kelvin: f64,
}

impl TemperatureSolution {
    /// Rounds an unrounded chemical potential (eV) and temperature (K) pair.
    #[must_use]
    pub fn new(chemical_potential: f64, kelvin: f64) -> Self {
        Self {
            chemical_potential: round_to(chemical_potential, 3),
            celsius: round_to(kelvin_to_celsius(kelvin), 2),
            kelvin: round_to(kelvin, 2),
        }
    }
}
