//! Gas reservoir thermodynamics for open-system phase diagrams.
//!
//! A system open to a gas exchanges atoms with a reservoir whose chemical
//! potential depends on temperature and partial pressure. This module
//! evaluates that dependence from piecewise Shomate fits and inverts it, so a
//! chemical potential read off a phase diagram can be reported as the
//! temperature at which the reservoir imposes it.

mod error;

pub mod gas;
pub mod reservoir;
pub mod shomate;

pub use error::{ReservoirError, ReservoirParametersError};
pub use reservoir::{FixedPointConfig, GasReservoir, TemperatureSolution};
pub use shomate::{ShomateBand, ShomateCoefficients, ShomateFit};
