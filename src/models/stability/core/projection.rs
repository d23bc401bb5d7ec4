//! Projection of stability intervals onto a display axis.
//!
//! A [`StabilityRangeProjector`] converts both endpoints of every phase's
//! chemical potential interval with the configured [`Conversion`]:
//!
//! | Conversion             | Display value                                 |
//! |------------------------|-----------------------------------------------|
//! | `None`, open to Li/Na  | `μ − μ_metal`                                 |
//! | `None`, other elements | `μ_first − μ` (first interval's start)        |
//! | `T_C` / `T_K`          | reservoir temperature at `μ`                  |
//! | `V_Li` / `V_Na`        | `μ_metal − μ`                                 |
//!
//! Converted endpoints are clamped into the display range and laid out as
//! horizontal bars, one row per phase in interval order.

mod chart;
mod conversion;

pub use chart::{Bar, Chart, Y_LABEL};
pub use conversion::{
    Conversion, LITHIUM_METAL_MU, ProjectionConfig, ResolvedProjection, SODIUM_METAL_MU,
};

use serde::{Deserialize, Serialize};

use crate::support::{thermo::GasReservoir, units::ev};

use super::{ConfigurationError, ProjectionError, StabilityIntervals};

/// Closed range `[min, max]` of the display axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRange {
    pub min: f64,
    pub max: f64,
}

impl DisplayRange {
    /// Checks that both bounds are finite and `min < max`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::InvalidDisplayRange`] otherwise.
    pub fn validate(self) -> Result<Self, ProjectionError> {
        if self.min.is_finite() && self.max.is_finite() && self.min < self.max {
            Ok(self)
        } else {
            Err(ProjectionError::InvalidDisplayRange {
                min: self.min,
                max: self.max,
            })
        }
    }

    /// Moves `value` onto the nearest bound if it lies outside the range.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }
}

/// A phase interval with both endpoints in display units, before clamping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectedInterval {
    pub phase: String,
    pub start: f64,
    pub end: f64,
}

/// Converts stability intervals to display units and lays them out as bars.
///
/// The reservoir is only consulted for temperature conversions.
#[derive(Debug, Clone)]
pub struct StabilityRangeProjector<'a, Gas> {
    settings: ResolvedProjection,
    reservoir: &'a GasReservoir<Gas>,
}

impl<'a, Gas> StabilityRangeProjector<'a, Gas> {
    #[must_use]
    pub fn new(settings: ResolvedProjection, reservoir: &'a GasReservoir<Gas>) -> Self {
        Self {
            settings,
            reservoir,
        }
    }

    /// Resolves `config` and builds a projector from it.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`ProjectionConfig::resolve`].
    pub fn from_config(
        config: ProjectionConfig,
        reservoir: &'a GasReservoir<Gas>,
    ) -> Result<Self, ProjectionError> {
        Ok(Self::new(config.resolve()?, reservoir))
    }

    #[must_use]
    pub fn settings(&self) -> &ResolvedProjection {
        &self.settings
    }

    /// Corrections made to the configuration this projector was built from.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigurationError] {
        &self.settings.warnings
    }

    /// Converts every interval to display units, in interval order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError::Reservoir`] if a temperature conversion
    /// fails for any endpoint.
    pub fn project(
        &self,
        intervals: &StabilityIntervals,
    ) -> Result<Vec<ProjectedInterval>, ProjectionError> {
        let origin = intervals.iter().next().map_or(0.0, |first| first.start);

        intervals
            .iter()
            .map(|interval| {
                Ok(ProjectedInterval {
                    phase: interval.phase.clone(),
                    start: self.convert(interval.start, origin)?,
                    end: self.convert(interval.end, origin)?,
                })
            })
            .collect()
    }

    /// Projects `intervals` and describes the resulting bar chart.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`Self::project`].
    pub fn chart(&self, intervals: &StabilityIntervals) -> Result<Chart, ProjectionError> {
        let projected = self.project(intervals)?;
        let range = self
            .settings
            .display_range
            .unwrap_or_else(|| span_of(&projected));

        Ok(Chart::layout(&self.settings, range, &projected))
    }

    /// Converts one chemical potential; `origin` zeroes the relative axis.
    fn convert(&self, mu: f64, origin: f64) -> Result<f64, ProjectionError> {
        let value = match self.settings.conversion {
            Conversion::TemperatureCelsius => self.reservoir.solution_for_mu(ev(mu))?.celsius,
            Conversion::TemperatureKelvin => self.reservoir.solution_for_mu(ev(mu))?.kelvin,
            Conversion::VoltageVsLi => LITHIUM_METAL_MU - mu,
            Conversion::VoltageVsNa => SODIUM_METAL_MU - mu,
            Conversion::None => match self.settings.open_element.symbol() {
                "Li" => mu - LITHIUM_METAL_MU,
                "Na" => mu - SODIUM_METAL_MU,
                _ => origin - mu,
            },
        };
        Ok(value)
    }
}

/// Smallest range covering every projected endpoint; `[0, 0]` when empty.
fn span_of(projected: &[ProjectedInterval]) -> DisplayRange {
    let mut endpoints = projected
        .iter()
        .flat_map(|interval| [interval.start, interval.end]);

    let Some(first) = endpoints.next() else {
        return DisplayRange { min: 0.0, max: 0.0 };
    };

    endpoints.fold(DisplayRange { min: first, max: first }, |range, value| {
        DisplayRange {
            min: range.min.min(value),
            max: range.max.max(value),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::{
        models::stability::core::PhaseInterval,
        support::{phase::Element, thermo::gas::Oxygen},
    };

    fn oxygen() -> GasReservoir<Oxygen> {
        GasReservoir::<Oxygen>::new().unwrap()
    }

    fn intervals(values: &[(&str, f64, f64)]) -> StabilityIntervals {
        values
            .iter()
            .map(|&(phase, start, end)| PhaseInterval {
                phase: phase.to_owned(),
                start,
                end,
            })
            .collect()
    }

    #[test]
    fn oxygen_potential_to_celsius() {
        let reservoir = oxygen();
        let settings = ProjectionConfig::from_options("O", "T_C").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);

        let projected = projector
            .project(&intervals(&[("Mn3O4", -6.468, -5.323)]))
            .unwrap();

        assert_relative_eq!(projected[0].start, 997.91, epsilon = 1e-9);
        assert_relative_eq!(projected[0].end, 108.35, epsilon = 1e-9);
    }

    #[test]
    fn oxygen_potential_to_kelvin() {
        let reservoir = oxygen();
        let settings = ProjectionConfig::from_options("O", "T_K").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);

        let projected = projector
            .project(&intervals(&[("MnO2", -5.803, -4.0)]))
            .unwrap();

        assert_relative_eq!(projected[0].start, 771.33, epsilon = 1e-9);
        assert_relative_eq!(projected[0].end, 0.0);
    }

    #[test]
    fn voltage_against_metal_reference() {
        let reservoir = oxygen();
        let settings = ProjectionConfig::from_options("Li", "V_Li").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);

        let projected = projector
            .project(&intervals(&[("LiCoO2", -2.908, -5.908)]))
            .unwrap();
        assert_relative_eq!(projected[0].start, 1.0, epsilon = 1e-12);
        assert_relative_eq!(projected[0].end, 4.0, epsilon = 1e-12);

        let settings = ProjectionConfig::from_options("Na", "V_Na").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);
        let projected = projector
            .project(&intervals(&[("NaCoO2", -2.313, -2.313)]))
            .unwrap();
        assert_relative_eq!(projected[0].start, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn relative_potential_without_conversion() {
        let reservoir = oxygen();

        let settings = ProjectionConfig::from_options("Li", "None").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);
        let projected = projector
            .project(&intervals(&[("Li2O", -1.908, -3.908)]))
            .unwrap();
        assert_relative_eq!(projected[0].start, 0.0, epsilon = 1e-12);
        assert_relative_eq!(projected[0].end, -2.0, epsilon = 1e-12);

        let settings = ProjectionConfig::from_options("O", "None").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);
        let projected = projector
            .project(&intervals(&[("A", -4.0, -5.0), ("B", -5.0, -8.0)]))
            .unwrap();
        assert_relative_eq!(projected[0].start, 0.0);
        assert_relative_eq!(projected[0].end, 1.0);
        assert_relative_eq!(projected[1].start, 1.0);
        assert_relative_eq!(projected[1].end, 4.0);
    }

    #[test]
    fn overridden_element_changes_the_conversion_target() {
        let reservoir = oxygen();
        let projector = StabilityRangeProjector::from_config(
            ProjectionConfig::new(Element::oxygen(), Conversion::VoltageVsLi),
            &reservoir,
        )
        .unwrap();

        assert_eq!(projector.settings().open_element, Element::lithium());
        assert_eq!(projector.warnings().len(), 1);
        assert_eq!(projector.settings().x_label(), "V vs. Li/Li+ (V)");
    }

    #[test]
    fn chart_clamps_both_endpoints() {
        let reservoir = oxygen();
        let config = ProjectionConfig::new(Element::oxygen(), Conversion::None)
            .with_display_range(0.5, 3.0);
        let projector = StabilityRangeProjector::from_config(config, &reservoir).unwrap();

        let chart = projector
            .chart(&intervals(&[("A", -4.0, -5.0), ("B", -5.0, -8.0)]))
            .unwrap();

        assert_eq!(chart.x_range, (0.5, 3.0));
        assert_relative_eq!(chart.bars[0].left, 0.5);
        assert_relative_eq!(chart.bars[0].width, 0.5);
        assert_relative_eq!(chart.bars[1].left, 1.0);
        assert_relative_eq!(chart.bars[1].width, 2.0);
    }

    #[test]
    fn chart_range_defaults_to_endpoint_span() {
        let reservoir = oxygen();
        let settings = ProjectionConfig::from_options("Li", "V_Li").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);

        let chart = projector
            .chart(&intervals(&[("X", -2.908, -3.908), ("Y", -3.908, -5.908)]))
            .unwrap();

        assert_relative_eq!(chart.x_range.0, 1.0, epsilon = 1e-12);
        assert_relative_eq!(chart.x_range.1, 4.0, epsilon = 1e-12);
    }

    #[test]
    fn empty_intervals_give_an_empty_chart() {
        let reservoir = oxygen();
        let settings = ProjectionConfig::from_options("O", "T_C").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);

        let chart = projector.chart(&StabilityIntervals::new()).unwrap();
        assert!(chart.bars.is_empty());
        assert_eq!(chart.x_range, (0.0, 0.0));
    }

    #[test]
    fn non_finite_potential_fails_temperature_conversion() {
        let reservoir = oxygen();
        let settings = ProjectionConfig::from_options("O", "T_C").unwrap();
        let projector = StabilityRangeProjector::new(settings, &reservoir);

        let err = projector
            .project(&intervals(&[("A", f64::NAN, -5.0)]))
            .unwrap_err();
        assert!(matches!(err, ProjectionError::Reservoir(_)));
    }
}
