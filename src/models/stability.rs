//! Phase stability models for systems open to one element.
//!
//! This module provides [`twine_core::Model`] implementations for the
//! stability interval assembly and its chart projection.
//! The computational core is in the internal [`core`] module.

pub(crate) mod core;

pub use self::core::{
    Bar, Chart, ChemicalPotentialWindow, ConfigurationError, Conversion, DisplayRange,
    GrandPotentialAssembler, LAST_WINDOW_EXTENT, LAST_WINDOW_OFFSET, LITHIUM_METAL_MU,
    PhaseInterval, ProjectedInterval, ProjectionConfig, ProjectionError, ResolvedProjection,
    SODIUM_METAL_MU, StabilityError, StabilityIntervals, StabilityRangeProjector,
    StabilityReport, StablePhase, TransitionPotentials, UnstablePhase, ValidationError,
    WindowPhases, Y_LABEL, merge,
};

use twine_core::Model;

use crate::support::phase::{Element, PhaseDiagram};

/// Stability intervals of every phase of a closed diagram, opened to the
/// input element.
pub struct OpenPhaseStability<'a, D> {
    diagram: &'a D,
}

impl<'a, D: PhaseDiagram> OpenPhaseStability<'a, D> {
    #[must_use]
    pub fn new(diagram: &'a D) -> Self {
        Self { diagram }
    }
}

impl<D: PhaseDiagram> Model for OpenPhaseStability<'_, D> {
    type Input = Element;
    type Output = StabilityIntervals;
    type Error = StabilityError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        GrandPotentialAssembler::new(self.diagram, input.clone()).assemble()
    }
}

/// Bar chart of stability intervals, drawn by a configured projector.
pub struct StabilityChartModel<'a, Gas> {
    projector: StabilityRangeProjector<'a, Gas>,
}

impl<'a, Gas> StabilityChartModel<'a, Gas> {
    #[must_use]
    pub fn new(projector: StabilityRangeProjector<'a, Gas>) -> Self {
        Self { projector }
    }

    #[must_use]
    pub fn projector(&self) -> &StabilityRangeProjector<'a, Gas> {
        &self.projector
    }
}

impl<Gas> Model for StabilityChartModel<'_, Gas> {
    type Input = StabilityIntervals;
    type Output = Chart;
    type Error = ProjectionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.projector.chart(input)
    }
}
