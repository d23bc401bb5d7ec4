//! Gas reservoir models.
//!
//! This module provides [`twine_core::Model`] implementations that convert
//! between the chemical potential imposed by a gas reservoir and the
//! reservoir temperature. The thermodynamics live in
//! [`crate::support::thermo::GasReservoir`].

use std::convert::Infallible;

use twine_core::Model;
use uom::si::f64::{Energy, ThermodynamicTemperature};

use crate::support::thermo::{GasReservoir, ReservoirError, TemperatureSolution};

/// Reservoir temperature that imposes the input chemical potential (per atom).
#[derive(Debug, Clone)]
pub struct ChemicalPotentialToTemperature<'a, Gas> {
    reservoir: &'a GasReservoir<Gas>,
}

impl<'a, Gas> ChemicalPotentialToTemperature<'a, Gas> {
    #[must_use]
    pub fn new(reservoir: &'a GasReservoir<Gas>) -> Self {
        Self { reservoir }
    }
}

impl<Gas> Model for ChemicalPotentialToTemperature<'_, Gas> {
    type Input = Energy;
    type Output = TemperatureSolution;
    type Error = ReservoirError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.reservoir.solution_for_mu(*input)
    }
}

/// Chemical potential (per atom) imposed by the reservoir at the input temperature.
#[derive(Debug, Clone)]
pub struct TemperatureToChemicalPotential<'a, Gas> {
    reservoir: &'a GasReservoir<Gas>,
}

impl<'a, Gas> TemperatureToChemicalPotential<'a, Gas> {
    #[must_use]
    pub fn new(reservoir: &'a GasReservoir<Gas>) -> Self {
        Self { reservoir }
    }
}

impl<Gas> Model for TemperatureToChemicalPotential<'_, Gas> {
    type Input = ThermodynamicTemperature;
    type Output = TemperatureSolution;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.reservoir.solution_for_temperature(*input))
    }
}
