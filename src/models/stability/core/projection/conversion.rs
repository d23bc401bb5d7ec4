//! Display axis selection and recovery from inconsistent settings.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::support::{
    constraint::{Constrained, UnitIntervalLowerOpen},
    phase::Element,
};

use super::{ConfigurationError, DisplayRange, ProjectionError};

/// Chemical potential of metallic Li at 0 K, eV per atom.
pub const LITHIUM_METAL_MU: f64 = -1.908;

/// Chemical potential of metallic Na at 0 K, eV per atom.
pub const SODIUM_METAL_MU: f64 = -1.313;

/// Quantity shown on the display axis.
///
/// Serialized with the option names `None`, `T_C`, `T_K`, `V_Li`, `V_Na`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Conversion {
    /// Chemical potential, re-zeroed for the open element.
    #[default]
    #[serde(rename = "None")]
    None,
    /// Oxygen reservoir temperature in °C.
    #[serde(rename = "T_C")]
    TemperatureCelsius,
    /// Oxygen reservoir temperature in K.
    #[serde(rename = "T_K")]
    TemperatureKelvin,
    /// Voltage against Li/Li⁺.
    #[serde(rename = "V_Li")]
    VoltageVsLi,
    /// Voltage against Na/Na⁺.
    #[serde(rename = "V_Na")]
    VoltageVsNa,
}

impl Conversion {
    /// Option name of this conversion.
    #[must_use]
    pub fn option(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::TemperatureCelsius => "T_C",
            Self::TemperatureKelvin => "T_K",
            Self::VoltageVsLi => "V_Li",
            Self::VoltageVsNa => "V_Na",
        }
    }

    /// Open element this conversion only makes sense for, if any.
    #[must_use]
    pub fn implied_element(self) -> Option<Element> {
        match self {
            Self::None => None,
            Self::TemperatureCelsius | Self::TemperatureKelvin => Some(Element::oxygen()),
            Self::VoltageVsLi => Some(Element::lithium()),
            Self::VoltageVsNa => Some(Element::sodium()),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.option())
    }
}

impl FromStr for Conversion {
    type Err = ConfigurationError;

    fn from_str(option: &str) -> Result<Self, Self::Err> {
        match option {
            "None" => Ok(Self::None),
            "T_C" => Ok(Self::TemperatureCelsius),
            "T_K" => Ok(Self::TemperatureKelvin),
            "V_Li" => Ok(Self::VoltageVsLi),
            "V_Na" => Ok(Self::VoltageVsNa),
            _ => Err(ConfigurationError::UnknownConversion {
                option: option.to_owned(),
            }),
        }
    }
}

fn default_bar_height() -> f64 {
    0.7
}

fn default_bar_color() -> String {
    "lightblue".to_owned()
}

fn default_label_color() -> String {
    "black".to_owned()
}

/// Projection settings as written by the user.
///
/// Call [`ProjectionConfig::resolve`] to check them and correct an open
/// element that does not match the conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Element the system is open to.
    pub open_element: Element,

    /// Quantity shown on the display axis.
    #[serde(default)]
    pub conversion: Conversion,

    /// Axis range; endpoints outside it are clamped. Defaults to the span of
    /// the converted endpoints.
    #[serde(default)]
    pub display_range: Option<DisplayRange>,

    /// Fraction of each chart row covered by its bar, in `(0, 1]`.
    #[serde(default = "default_bar_height")]
    pub bar_height: f64,

    #[serde(default = "default_bar_color")]
    pub bar_color: String,

    #[serde(default = "default_label_color")]
    pub label_color: String,
}

impl ProjectionConfig {
    #[must_use]
    pub fn new(open_element: Element, conversion: Conversion) -> Self {
        Self {
            open_element,
            conversion,
            display_range: None,
            bar_height: default_bar_height(),
            bar_color: default_bar_color(),
            label_color: default_label_color(),
        }
    }

    #[must_use]
    pub fn with_display_range(mut self, min: f64, max: f64) -> Self {
        self.display_range = Some(DisplayRange { min, max });
        self
    }

    /// Resolves free-text options, as in `("O", "T_C")`.
    ///
    /// Unknown conversion text falls back to [`Conversion::None`] with a
    /// [`ConfigurationError::UnknownConversion`] warning.
    ///
    /// # Errors
    ///
    /// Fails under the same conditions as [`ProjectionConfig::resolve`].
    pub fn from_options(
        open_to: &str,
        convert_to: &str,
    ) -> Result<ResolvedProjection, ProjectionError> {
        let (conversion, unknown) = match convert_to.parse::<Conversion>() {
            Ok(conversion) => (conversion, None),
            Err(err) => {
                warn!(%err, "projection configuration corrected");
                (Conversion::None, Some(err))
            }
        };

        let mut resolved = Self::new(Element::new(open_to), conversion).resolve()?;
        if let Some(err) = unknown {
            resolved.warnings.insert(0, err);
        }
        Ok(resolved)
    }

    /// Checks the numeric settings and makes the open element agree with
    /// the conversion.
    ///
    /// A conversion that implies a different open element wins: the open
    /// element is overridden and a [`ConfigurationError`] is recorded and
    /// logged. [`Conversion::None`] is compatible with any open element.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectionError`] if the bar height is outside `(0, 1]` or
    /// the display range is not finite and increasing.
    pub fn resolve(self) -> Result<ResolvedProjection, ProjectionError> {
        let bar_height = UnitIntervalLowerOpen::new(self.bar_height).map_err(|source| {
            ProjectionError::InvalidBarHeight {
                value: self.bar_height,
                source,
            }
        })?;

        if let Some(range) = self.display_range {
            range.validate()?;
        }

        let mut warnings = Vec::new();
        let mut open_element = self.open_element;

        if let Some(implied) = self.conversion.implied_element() {
            if implied != open_element {
                let recognised = [Element::oxygen(), Element::lithium(), Element::sodium()];
                let err = if recognised.contains(&open_element) {
                    ConfigurationError::IncompatibleConversion {
                        element: open_element,
                        conversion: self.conversion,
                        resolved: implied.clone(),
                    }
                } else {
                    ConfigurationError::UnsupportedOpenElement {
                        element: open_element,
                        conversion: self.conversion,
                        resolved: implied.clone(),
                    }
                };
                warn!(%err, "projection configuration corrected");
                warnings.push(err);
                open_element = implied;
            }
        }

        Ok(ResolvedProjection {
            open_element,
            conversion: self.conversion,
            display_range: self.display_range,
            bar_height,
            bar_color: self.bar_color,
            label_color: self.label_color,
            warnings,
        })
    }
}

/// Projection settings that passed [`ProjectionConfig::resolve`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedProjection {
    pub open_element: Element,
    pub conversion: Conversion,
    pub display_range: Option<DisplayRange>,
    pub bar_height: Constrained<f64, UnitIntervalLowerOpen>,
    pub bar_color: String,
    pub label_color: String,

    /// Corrections applied while resolving, in the order they were made.
    pub warnings: Vec<ConfigurationError>,
}

impl ResolvedProjection {
    /// Label of the display axis.
    #[must_use]
    pub fn x_label(&self) -> String {
        match self.conversion {
            Conversion::TemperatureCelsius => "Temperature (°C)".to_owned(),
            Conversion::TemperatureKelvin => "Temperature (K)".to_owned(),
            Conversion::VoltageVsLi => "V vs. Li/Li+ (V)".to_owned(),
            Conversion::VoltageVsNa => "V vs. Na/Na+ (V)".to_owned(),
            Conversion::None => match self.open_element.symbol() {
                "Li" => "μ_Li vs. Li° (eV)".to_owned(),
                "Na" => "μ_Na vs. Na° (eV)".to_owned(),
                other => format!("-Δμ_{other} (eV)"),
            },
        }
    }
}
