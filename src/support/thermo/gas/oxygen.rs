use uom::si::{f64::Pressure, pressure::atmosphere};

use crate::support::{
    thermo::{ShomateBand, ShomateCoefficients, ShomateFit},
    units::{KJ_PER_MOL_TO_EV, ev},
};

use super::{ReservoirGas, ReservoirParameters};

/// Shomate coefficients for O₂ (NIST Chemistry WebBook, ID C7782447).
const LOW: ShomateCoefficients = ShomateCoefficients::new([
    31.32234, -20.23531, 57.86644, -36.50624, -0.007374, -8.903471, 246.7945,
]);
const MID: ShomateCoefficients = ShomateCoefficients::new([
    30.03235, 8.772972, -3.988133, 0.788313, -0.741599, -11.32468, 236.1663,
]);
const HIGH: ShomateCoefficients = ShomateCoefficients::new([
    20.91111, 10.72071, -2.020498, 0.146449, 9.245722, 5.337651, 237.6185,
]);

/// Energy per O atom at 0 K in eV (Materials Project, mp-12957).
const GROUND_STATE_PER_ATOM_EV: f64 = -4.935_527_918_75;

/// `H(298.15 K) − H(0 K)` for O₂ in kJ/mol (NIST-JANAF Thermochemical Tables, 4th ed.).
const REFERENCE_OFFSET_KJ_PER_MOL: f64 = 8.683;

/// Default operating partial pressure: O₂ in air.
const PRESSURE_ATM: f64 = 0.21;

/// Canonical identifier for molecular oxygen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Oxygen;

impl ReservoirGas for Oxygen {
    fn parameters() -> ReservoirParameters {
        let fit = ShomateFit::new_unchecked(
            100.0,
            vec![
                ShomateBand {
                    upper: 700.0,
                    coefficients: LOW,
                },
                ShomateBand {
                    upper: 2000.0,
                    coefficients: MID,
                },
                ShomateBand {
                    upper: 6000.0,
                    coefficients: HIGH,
                },
            ],
        );

        ReservoirParameters {
            fit,
            ground_state_energy: ev(GROUND_STATE_PER_ATOM_EV * 2.0),
            reference_enthalpy_offset: ev(REFERENCE_OFFSET_KJ_PER_MOL * KJ_PER_MOL_TO_EV),
            pressure: Pressure::new::<atmosphere>(PRESSURE_ATM),
            atoms_per_molecule: 2,
        }
    }
}
