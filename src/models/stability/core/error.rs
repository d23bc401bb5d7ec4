use thiserror::Error;

use crate::support::{
    constraint::ConstraintError, phase::Element, thermo::ReservoirError,
};

use super::Conversion;

/// Errors in the sequence of transition chemical potentials.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The sequence changes direction or repeats a value at `index`.
    #[error("transition potentials are not strictly monotonic at index {index}: {previous} then {current}")]
    NonMonotonic {
        index: usize,
        previous: f64,
        current: f64,
    },

    /// The value at `index` is NaN or infinite.
    #[error("transition potential at index {index} is not finite: {value}")]
    NonFinite { index: usize, value: f64 },
}

/// Errors that can occur while assembling stability intervals or reports.
#[derive(Debug, Error)]
pub enum StabilityError {
    /// The transition potentials are unusable.
    #[error("invalid transition potentials")]
    Validation(#[from] ValidationError),

    /// The phase diagram backend failed.
    #[error("phase diagram failed: {context}")]
    DiagramFailed {
        /// Operation context for the failure.
        context: String,

        /// Underlying backend error.
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl StabilityError {
    /// Creates a backend failure error with context.
    pub(super) fn diagram_failed(
        context: impl Into<String>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DiagramFailed {
            context: context.into(),
            source: Box::new(err),
        }
    }
}

/// A projection setting that was not usable as given and has been corrected.
///
/// These are reported alongside the corrected configuration, never returned
/// as a failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// The conversion belongs to a different open element.
    #[error(
        "conversion '{conversion}' does not apply to a system open to {element}; assuming the system is open to {resolved}"
    )]
    IncompatibleConversion {
        element: Element,
        conversion: Conversion,
        resolved: Element,
    },

    /// The open element has no dedicated conversion; the one requested names
    /// the element instead.
    #[error(
        "'{element}' is not a recognised open element for conversion '{conversion}'; assuming the system is open to {resolved}"
    )]
    UnsupportedOpenElement {
        element: Element,
        conversion: Conversion,
        resolved: Element,
    },

    /// The conversion option text is not recognised.
    #[error("unknown conversion option '{option}'; keeping the chemical potential axis")]
    UnknownConversion { option: String },
}

/// Errors that can occur while projecting stability intervals onto a display axis.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Converting a chemical potential to temperature failed.
    #[error("temperature conversion failed")]
    Reservoir(#[from] ReservoirError),

    /// The display range is empty, reversed, or not finite.
    #[error("invalid display range: [{min}, {max}]")]
    InvalidDisplayRange { min: f64, max: f64 },

    /// The bar height is not in `(0, 1]`.
    #[error("invalid bar height: {value}")]
    InvalidBarHeight {
        value: f64,
        #[source]
        source: ConstraintError,
    },
}
