use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive},
    thermo::ReservoirParametersError,
};

/// Iteration settings for solving temperature from chemical potential.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointConfig {
    /// Maximum iteration count before reporting divergence. Must be at least one.
    pub max_iters: usize,

    /// Convergence threshold on the change in temperature between iterations.
    /// Must be strictly positive.
    pub temp_tol: TemperatureInterval,

    /// Starting temperature for the iteration.
    pub initial_guess: ThermodynamicTemperature,
}

impl Default for FixedPointConfig {
    fn default() -> Self {
        Self {
            max_iters: 10_000,
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1.0e-3),
            initial_guess: ThermodynamicTemperature::new::<kelvin>(298.0),
        }
    }
}

impl FixedPointConfig {
    /// Checks the iteration cap and tolerance.
    ///
    /// # Errors
    ///
    /// Returns [`ReservoirParametersError::MaxIters`] if `max_iters` is zero and
    /// [`ReservoirParametersError::Tolerance`] if `temp_tol` is not strictly
    /// positive.
    pub(super) fn validate(self) -> Result<Self, ReservoirParametersError> {
        Constrained::<usize, StrictlyPositive>::new(self.max_iters)
            .map_err(|source| ReservoirParametersError::MaxIters { source })?;

        let tol_kelvin = self.temp_tol.get::<delta_kelvin>();
        Constrained::<f64, StrictlyPositive>::new(tol_kelvin).map_err(|source| {
            ReservoirParametersError::Tolerance { tol_kelvin, source }
        })?;

        Ok(self)
    }
}
