//! Piecewise Shomate fits for gas-phase entropy and enthalpy.
//!
//! The Shomate equation fits standard-state (0.1 MPa) properties of a gas
//! with seven coefficients per temperature band. With `t = T / 1000`:
//!
//! - `S° = A·ln(t) + B·t + C·t²/2 + D·t³/3 − E/(2·t²) + G` in J/(mol·K)
//! - `H° − H°(298.15 K) = A·t + B·t²/2 + C·t³/3 + D·t⁴/4 − E/t + F` in kJ/mol
//!
//! A [`ShomateFit`] chains several bands. Temperatures outside the fitted
//! range are clamped to its ends before evaluation, and each band owns its
//! upper boundary, so `[100, 700]`, `(700, 2000]`, `(2000, 6000]` for oxygen.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::ReservoirParametersError;

/// Coefficients `A` through `G` of one Shomate band.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShomateCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
    pub g: f64,
}

impl ShomateCoefficients {
    /// Creates coefficients from the tabulated order `[A, B, C, D, E, F, G]`.
    #[must_use]
    pub const fn new(coefficients: [f64; 7]) -> Self {
        let [a, b, c, d, e, f, g] = coefficients;
        Self { a, b, c, d, e, f, g }
    }

    /// Standard entropy in J/(mol·K) at `temperature` kelvin.
    #[must_use]
    pub fn entropy(&self, temperature: f64) -> f64 {
        let t = temperature / 1000.0;
        self.a * t.ln() + self.b * t + self.c * t.powi(2) / 2.0 + self.d * t.powi(3) / 3.0
            - self.e / 2.0 / t.powi(2)
            + self.g
    }

    /// Enthalpy relative to 298.15 K in kJ/mol at `temperature` kelvin.
    #[must_use]
    pub fn enthalpy_minus_ref(&self, temperature: f64) -> f64 {
        let t = temperature / 1000.0;
        self.a * t
            + self.b * t.powi(2) / 2.0
            + self.c * t.powi(3) / 3.0
            + self.d * t.powi(4) / 4.0
            - self.e / t
            + self.f
    }
}

/// One band of a [`ShomateFit`], valid up to and including `upper` kelvin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShomateBand {
    pub upper: f64,
    pub coefficients: ShomateCoefficients,
}

/// A piecewise Shomate fit over `[lower, last band's upper]` kelvin.
#[derive(Debug, Clone, PartialEq)]
pub struct ShomateFit {
    lower: f64,
    bands: Vec<ShomateBand>,
}

impl ShomateFit {
    /// Creates a fit starting at `lower` kelvin.
    ///
    /// # Errors
    ///
    /// Returns [`ReservoirParametersError`] if there are no bands or if the
    /// band boundaries are not strictly ascending from `lower`.
    pub fn new(lower: f64, bands: Vec<ShomateBand>) -> Result<Self, ReservoirParametersError> {
        if bands.is_empty() {
            return Err(ReservoirParametersError::NoBands);
        }

        let mut previous = lower;
        for (index, band) in bands.iter().enumerate() {
            if band.upper.partial_cmp(&previous) != Some(Ordering::Greater) {
                return Err(ReservoirParametersError::BandOrder {
                    index,
                    lower: previous,
                    upper: band.upper,
                });
            }
            previous = band.upper;
        }

        Ok(Self { lower, bands })
    }

    /// Creates a fit without checking the band layout.
    ///
    /// The caller must ensure `bands` is non-empty and strictly ascending from `lower`.
    pub(crate) fn new_unchecked(lower: f64, bands: Vec<ShomateBand>) -> Self {
        Self { lower, bands }
    }

    /// Lowest temperature covered by the fit, in kelvin.
    #[must_use]
    pub fn lower(&self) -> f64 {
        self.lower
    }

    /// Highest temperature covered by the fit, in kelvin.
    #[must_use]
    pub fn upper(&self) -> f64 {
        self.bands[self.bands.len() - 1].upper
    }

    /// Clamps `temperature` into the fitted range.
    #[must_use]
    pub fn clamp(&self, temperature: f64) -> f64 {
        temperature.clamp(self.lower, self.upper())
    }

    /// Returns the coefficients of the band containing the clamped temperature.
    #[must_use]
    pub fn band(&self, temperature: f64) -> &ShomateCoefficients {
        let temperature = self.clamp(temperature);
        let band = self
            .bands
            .iter()
            .find(|band| temperature <= band.upper)
            .unwrap_or(&self.bands[self.bands.len() - 1]);
        &band.coefficients
    }

    /// Standard entropy in J/(mol·K), clamping `temperature` into range first.
    #[must_use]
    pub fn entropy(&self, temperature: f64) -> f64 {
        let temperature = self.clamp(temperature);
        self.band(temperature).entropy(temperature)
    }

    /// Enthalpy relative to 298.15 K in kJ/mol, clamping `temperature` into range first.
    #[must_use]
    pub fn enthalpy_minus_ref(&self, temperature: f64) -> f64 {
        let temperature = self.clamp(temperature);
        self.band(temperature).enthalpy_minus_ref(temperature)
    }
}
