//! Conversion factors and constants for computational thermochemistry.
//!
//! This crate uses [`uom`] for physical quantities at public boundaries, but
//! the tabulated data it consumes (Shomate fits, DFT reference energies) is
//! published in kJ/mol, J/(mol·K), atm and eV. The factors below are the exact
//! values those tables are paired with; they are kept here instead of being
//! derived from [`uom`] so results stay bit-compatible with the published
//! reference calculations.
//!
//! Temperatures reported in Celsius use an offset of 273.0 K, not 273.15 K.
//! See [`kelvin_to_celsius`].

use uom::si::{
    energy::electronvolt,
    f64::{Energy, HeatCapacity},
    heat_capacity::joule_per_kelvin,
};

/// kJ/mol → eV per particle.
pub const KJ_PER_MOL_TO_EV: f64 = 0.010_364_272_301_331_38;

/// J/(mol·K) → eV/K per particle.
pub const J_PER_MOL_K_TO_EV_PER_K: f64 = 0.000_010_364_272_301_331_38;

/// atm → MPa.
pub const ATM_TO_MPA: f64 = 101_325.0e-6;

/// Standard-state pressure of the Shomate fits, in MPa.
pub const STANDARD_PRESSURE_MPA: f64 = 0.1;

/// Boltzmann constant, eV/K.
pub const BOLTZMANN_EV_PER_K: f64 = 8.617_330_3e-5;

/// Offset used when reporting temperatures in Celsius.
pub const CELSIUS_OFFSET_K: f64 = 273.0;

/// One electronvolt in joules.
const ELECTRONVOLT_J: f64 = 1.602_176_634e-19;

/// Converts an absolute temperature in kelvin to the reported Celsius value.
#[must_use]
pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    kelvin - CELSIUS_OFFSET_K
}

/// Rounds `value` to the given number of decimal places.
#[must_use]
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Wraps a chemical potential or energy given in eV.
#[must_use]
pub fn ev(value: f64) -> Energy {
    Energy::new::<electronvolt>(value)
}

/// Wraps an entropy given in eV/K per particle.
#[must_use]
pub fn ev_per_kelvin(value: f64) -> HeatCapacity {
    HeatCapacity::new::<joule_per_kelvin>(value * ELECTRONVOLT_J)
}

/// Returns an entropy in eV/K per particle.
#[must_use]
pub fn in_ev_per_kelvin(entropy: HeatCapacity) -> f64 {
    entropy.get::<joule_per_kelvin>() / ELECTRONVOLT_J
}
