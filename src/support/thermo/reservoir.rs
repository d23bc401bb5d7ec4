//! Chemical potential of a gas reservoir as a function of temperature.
//!
//! For a reservoir of `n`-atomic molecules at partial pressure `p`, the
//! chemical potential per atom is
//!
//! ```text
//! n·μ(T) = H₀ + [H(298.15) − H₀] + [H(T) − H(298.15)] − T·S°(T) + k_B·T·ln(p/p₀)
//! ```
//!
//! with `p₀ = 0.1 MPa` and `S°`, `H(T) − H(298.15)` taken from a Shomate fit.
//! [`GasReservoir::temperature_to_mu`] evaluates this directly.
//! [`GasReservoir::mu_to_temperature`] solves it for `T` by fixed-point
//! iteration on
//!
//! ```text
//! T ← (n·μ − [H(T) − H(298.15)] − H(298.15)) / (k_B·ln(p/p₀) − S°(T))
//! ```
//!
//! starting from 298 K. Negative intermediate temperatures are clamped to 0 K.

mod config;
mod solution;

pub use config::FixedPointConfig;
pub use solution::TemperatureSolution;

use std::marker::PhantomData;

use tracing::debug;
use uom::si::{
    energy::electronvolt,
    f64::{Energy, HeatCapacity, Pressure, ThermodynamicTemperature},
    pressure::megapascal,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constraint, StrictlyPositive},
    units::{
        BOLTZMANN_EV_PER_K, J_PER_MOL_K_TO_EV_PER_K, KJ_PER_MOL_TO_EV, STANDARD_PRESSURE_MPA, ev,
        ev_per_kelvin,
    },
};

use super::{
    ReservoirError, ReservoirParametersError, ShomateFit,
    gas::{ReservoirGas, ReservoirParameters},
};

/// A gas reservoir that fixes the chemical potential of an open element.
///
/// Built once from a [`ReservoirGas`] constant set and never mutated, so a
/// single instance can be shared by reference across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct GasReservoir<Gas> {
    fit: ShomateFit,
    atoms: f64,
    /// `H₀ + [H(298.15) − H₀]`, eV per molecule.
    h_ref: f64,
    /// `k_B·ln(p/p₀)`, eV/K per molecule.
    pressure_term: f64,
    pressure: Pressure,
    config: FixedPointConfig,
    _marker: PhantomData<Gas>,
}

impl<Gas: ReservoirGas> GasReservoir<Gas> {
    /// Creates a reservoir using the constants defined by `Gas`.
    ///
    /// # Errors
    ///
    /// Returns [`ReservoirParametersError`] if the constants are invalid.
    pub fn new() -> Result<Self, ReservoirParametersError> {
        Self::from_parameters(Gas::parameters())
    }

    /// Creates a reservoir using the constants defined by `Gas` at a
    /// different operating partial pressure.
    ///
    /// # Errors
    ///
    /// Returns [`ReservoirParametersError::Pressure`] if the pressure is not
    /// strictly positive.
    pub fn at_pressure(pressure: Pressure) -> Result<Self, ReservoirParametersError> {
        Self::from_parameters(Gas::parameters().with_pressure(pressure))
    }
}

impl<Gas> GasReservoir<Gas> {
    /// Creates a reservoir from an explicit constant set.
    ///
    /// # Errors
    ///
    /// Returns [`ReservoirParametersError`] if the pressure is not strictly
    /// positive or if the molecule has no atoms.
    pub fn from_parameters(
        parameters: ReservoirParameters,
    ) -> Result<Self, ReservoirParametersError> {
        let pressure_mpa = parameters.pressure.get::<megapascal>();
        StrictlyPositive::check(&pressure_mpa).map_err(|source| {
            ReservoirParametersError::Pressure {
                pressure_mpa,
                source,
            }
        })?;

        if parameters.atoms_per_molecule == 0 {
            return Err(ReservoirParametersError::AtomsPerMolecule { atoms: 0 });
        }

        let h_ref = parameters.ground_state_energy.get::<electronvolt>()
            + parameters.reference_enthalpy_offset.get::<electronvolt>();

        Ok(Self {
            fit: parameters.fit,
            atoms: f64::from(parameters.atoms_per_molecule),
            h_ref,
            pressure_term: BOLTZMANN_EV_PER_K * (pressure_mpa / STANDARD_PRESSURE_MPA).ln(),
            pressure: parameters.pressure,
            config: FixedPointConfig::default(),
            _marker: PhantomData,
        })
    }

    /// Returns this reservoir with different iteration settings.
    ///
    /// # Errors
    ///
    /// Returns [`ReservoirParametersError::MaxIters`] if `config.max_iters` is
    /// zero and [`ReservoirParametersError::Tolerance`] if `config.temp_tol`
    /// is not strictly positive.
    pub fn with_config(
        mut self,
        config: FixedPointConfig,
    ) -> Result<Self, ReservoirParametersError> {
        self.config = config.validate()?;
        Ok(self)
    }

    /// Operating partial pressure of the reservoir gas.
    #[must_use]
    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    /// Standard-state entropy per molecule at `temperature`.
    ///
    /// The temperature is clamped into the range of the Shomate fit.
    #[must_use]
    pub fn entropy(&self, temperature: ThermodynamicTemperature) -> HeatCapacity {
        ev_per_kelvin(self.entropy_ev(temperature.get::<kelvin>()))
    }

    /// Enthalpy per molecule at `temperature` minus the one at 298.15 K.
    ///
    /// The temperature is clamped into the range of the Shomate fit.
    #[must_use]
    pub fn enthalpy_minus_ref(&self, temperature: ThermodynamicTemperature) -> Energy {
        ev(self.enthalpy_ev(temperature.get::<kelvin>()))
    }

    /// Chemical potential per atom imposed by the reservoir at `temperature`.
    #[must_use]
    pub fn temperature_to_mu(&self, temperature: ThermodynamicTemperature) -> Energy {
        ev(self.mu_ev(temperature.get::<kelvin>()))
    }

    /// Chemical potential per gas molecule at `temperature`.
    ///
    /// This is [`GasReservoir::temperature_to_mu`] times the atoms per
    /// molecule, the value published O₂ tables report.
    #[must_use]
    pub fn temperature_to_molecular_mu(&self, temperature: ThermodynamicTemperature) -> Energy {
        ev(self.mu_ev(temperature.get::<kelvin>()) * self.atoms)
    }

    /// Temperature at which the reservoir imposes the per-atom chemical potential `mu`.
    ///
    /// # Errors
    ///
    /// Returns [`ReservoirError::NonFinite`] if `mu` is NaN or infinite, and
    /// [`ReservoirError::NumericDivergence`] if the iteration has not
    /// converged after [`FixedPointConfig::max_iters`] updates.
    pub fn mu_to_temperature(&self, mu: Energy) -> Result<ThermodynamicTemperature, ReservoirError> {
        let temperature = self.temperature_k(mu.get::<electronvolt>())?;
        Ok(ThermodynamicTemperature::new::<kelvin>(temperature))
    }

    /// Reports the temperature that corresponds to `mu`.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`GasReservoir::mu_to_temperature`].
    pub fn solution_for_mu(&self, mu: Energy) -> Result<TemperatureSolution, ReservoirError> {
        let mu = mu.get::<electronvolt>();
        let temperature = self.temperature_k(mu)?;
        Ok(TemperatureSolution::new(mu, temperature))
    }

    /// Reports the per-atom chemical potential that corresponds to `temperature`.
    ///
    /// Use [`GasReservoir::temperature_to_molecular_mu`] for the per-molecule value.
    #[must_use]
    pub fn solution_for_temperature(
        &self,
        temperature: ThermodynamicTemperature,
    ) -> TemperatureSolution {
        let temperature = temperature.get::<kelvin>();
        TemperatureSolution::new(self.mu_ev(temperature), temperature)
    }

    fn entropy_ev(&self, temperature: f64) -> f64 {
        self.fit.entropy(temperature) * J_PER_MOL_K_TO_EV_PER_K
    }

    fn enthalpy_ev(&self, temperature: f64) -> f64 {
        self.fit.enthalpy_minus_ref(temperature) * KJ_PER_MOL_TO_EV
    }

    fn mu_ev(&self, temperature: f64) -> f64 {
        let molecular = self.h_ref + self.enthalpy_ev(temperature)
            - temperature * self.entropy_ev(temperature)
            + temperature * self.pressure_term;
        molecular / self.atoms
    }

    fn temperature_k(&self, mu: f64) -> Result<f64, ReservoirError> {
        if !mu.is_finite() {
            return Err(ReservoirError::NonFinite {
                what: "chemical potential",
                value: mu,
            });
        }

        let tol = self.config.temp_tol.get::<delta_kelvin>();
        let mut temperature = self.config.initial_guess.get::<kelvin>();

        for iter in 1..=self.config.max_iters {
            let previous = temperature;
            temperature = (self.atoms * mu - self.enthalpy_ev(previous) - self.h_ref)
                / (self.pressure_term - self.entropy_ev(previous));

            if temperature < 0.0 {
                temperature = 0.0;
            }

            if (temperature - previous).abs() <= tol {
                debug!(mu, temperature, iter, "reservoir temperature converged");
                return Ok(temperature);
            }
        }

        debug!(mu, temperature, "reservoir temperature iteration diverged");
        Err(ReservoirError::NumericDivergence {
            chemical_potential: mu,
            last_temperature: temperature,
            iters: self.config.max_iters,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use uom::si::{
        f64::TemperatureInterval, heat_capacity::joule_per_kelvin, pressure::atmosphere,
    };

    use crate::support::{thermo::gas::Oxygen, units::in_ev_per_kelvin};

    fn oxygen() -> GasReservoir<Oxygen> {
        GasReservoir::<Oxygen>::new().expect("oxygen constants must be valid")
    }

    fn kelvin_t(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<kelvin>(value)
    }

    #[test]
    fn standard_state_values() {
        let thermo = oxygen();
        let t = kelvin_t(298.15);

        // S°(298.15 K) ≈ 205.15 J/(mol·K), H − H(298.15) ≈ 0.
        assert_relative_eq!(
            in_ev_per_kelvin(thermo.entropy(t)),
            0.002_126_202_257_846_118_4,
            max_relative = 1e-9
        );
        assert_abs_diff_eq!(
            thermo.enthalpy_minus_ref(t).get::<electronvolt>(),
            0.0,
            epsilon = 1e-5
        );
    }

    #[test]
    fn continuous_across_band_boundaries() {
        let thermo = oxygen();
        let eps = 1.0e-9;

        for boundary in [700.0, 2000.0] {
            let below = kelvin_t(boundary - eps);
            let above = kelvin_t(boundary + eps);

            assert_abs_diff_eq!(
                in_ev_per_kelvin(thermo.entropy(below)),
                in_ev_per_kelvin(thermo.entropy(above)),
                epsilon = 1e-7
            );
            assert_abs_diff_eq!(
                thermo.enthalpy_minus_ref(below).get::<electronvolt>(),
                thermo.enthalpy_minus_ref(above).get::<electronvolt>(),
                epsilon = 5e-5
            );
        }
    }

    #[test]
    fn clamps_outside_fitted_range() {
        let thermo = oxygen();
        assert_eq!(thermo.entropy(kelvin_t(20.0)), thermo.entropy(kelvin_t(100.0)));
        assert_eq!(
            thermo.entropy(kelvin_t(8000.0)).get::<joule_per_kelvin>(),
            thermo.entropy(kelvin_t(6000.0)).get::<joule_per_kelvin>()
        );
    }

    #[test]
    fn reference_temperatures() {
        let thermo = oxygen();

        let cases = [
            (-6.468, 1270.91, 997.91),
            (-5.323, 381.35, 108.35),
            (-5.803, 771.33, 498.33),
        ];
        for (mu, kelvin_expected, celsius_expected) in cases {
            let solution = thermo.solution_for_mu(ev(mu)).unwrap();
            assert_relative_eq!(solution.chemical_potential, mu);
            assert_relative_eq!(solution.kelvin, kelvin_expected, epsilon = 1e-9);
            assert_relative_eq!(solution.celsius, celsius_expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn reference_chemical_potentials() {
        let thermo = oxygen();

        let cases = [(298.15, -5.227), (1000.0, -6.102), (1623.0, -6.960)];
        for (t, mu_expected) in cases {
            let solution = thermo.solution_for_temperature(kelvin_t(t));
            assert_relative_eq!(solution.chemical_potential, mu_expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn molecular_potential_is_per_atom_times_two() {
        let thermo = oxygen();
        let t = kelvin_t(298.15);

        let per_atom = thermo.temperature_to_mu(t).get::<electronvolt>();
        let per_molecule = thermo.temperature_to_molecular_mu(t).get::<electronvolt>();
        assert_relative_eq!(per_molecule, 2.0 * per_atom, max_relative = 1e-12);
        assert_abs_diff_eq!(per_molecule, -10.4548, epsilon = 1e-3);
    }

    #[test]
    fn high_chemical_potential_clamps_to_zero_kelvin() {
        let thermo = oxygen();
        let t = thermo.mu_to_temperature(ev(-4.0)).unwrap();
        assert_eq!(t.get::<kelvin>(), 0.0);
    }

    #[test]
    fn iteration_cap_reports_divergence() {
        let thermo = oxygen()
            .with_config(FixedPointConfig {
                max_iters: 1,
                ..FixedPointConfig::default()
            })
            .unwrap();

        let err = thermo.mu_to_temperature(ev(-6.468)).unwrap_err();
        assert!(matches!(
            err,
            ReservoirError::NumericDivergence { iters: 1, .. }
        ));
    }

    #[test]
    fn rejects_settings_that_cannot_converge() {
        let no_iterations = oxygen().with_config(FixedPointConfig {
            max_iters: 0,
            ..FixedPointConfig::default()
        });
        assert!(matches!(
            no_iterations,
            Err(ReservoirParametersError::MaxIters { .. })
        ));

        let negative_tol = oxygen().with_config(FixedPointConfig {
            temp_tol: TemperatureInterval::new::<delta_kelvin>(-1.0),
            ..FixedPointConfig::default()
        });
        assert!(matches!(
            negative_tol,
            Err(ReservoirParametersError::Tolerance { tol_kelvin, .. }) if tol_kelvin == -1.0
        ));
    }

    #[test]
    fn looser_tolerance_still_converges() {
        let thermo = oxygen()
            .with_config(FixedPointConfig {
                temp_tol: TemperatureInterval::new::<delta_kelvin>(1.0),
                ..FixedPointConfig::default()
            })
            .unwrap();

        let t = thermo.mu_to_temperature(ev(-6.468)).unwrap();
        assert_abs_diff_eq!(t.get::<kelvin>(), 1270.91, epsilon = 5.0);
    }

    #[test]
    fn rejects_non_finite_chemical_potential() {
        let thermo = oxygen();
        assert!(matches!(
            thermo.mu_to_temperature(ev(f64::NAN)),
            Err(ReservoirError::NonFinite { .. })
        ));
    }

    #[test]
    fn higher_pressure_raises_temperature_for_same_mu() {
        let air = oxygen();
        let pure = GasReservoir::<Oxygen>::at_pressure(Pressure::new::<atmosphere>(1.0)).unwrap();

        let t_air = air.mu_to_temperature(ev(-6.0)).unwrap();
        let t_pure = pure.mu_to_temperature(ev(-6.0)).unwrap();
        assert!(t_pure > t_air);
    }

    #[test]
    fn rejects_non_positive_pressure() {
        let result = GasReservoir::<Oxygen>::at_pressure(Pressure::new::<atmosphere>(0.0));
        assert!(matches!(
            result,
            Err(ReservoirParametersError::Pressure { .. })
        ));
    }

    #[test]
    fn rejects_zero_atom_molecules() {
        let mut parameters = Oxygen::parameters();
        parameters.atoms_per_molecule = 0;
        assert_eq!(
            GasReservoir::<Oxygen>::from_parameters(parameters),
            Err(ReservoirParametersError::AtomsPerMolecule { atoms: 0 })
        );
    }

    #[test]
    fn shared_across_threads() {
        let thermo = oxygen();
        let expected = thermo.mu_to_temperature(ev(-6.468)).unwrap();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| thermo.mu_to_temperature(ev(-6.468)).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
