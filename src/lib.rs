//! # Open Phase Models
//!
//! Stability ranges of phases in chemical systems that are open to one
//! element, and the gas-reservoir thermodynamics that turn an oxygen chemical
//! potential into a temperature (and back).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters for the public calculations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Data flow
//!
//! A closed-system phase diagram (supplied by the caller through
//! [`support::phase::PhaseDiagram`]) yields the transition chemical
//! potentials of the open element. One grand potential diagram per window
//! between transitions gives the phases stable in that window, and the
//! windows are merged into one chemical potential interval per phase.
//! Those intervals can then be projected onto a display axis (temperature,
//! voltage, or relative chemical potential) as bar chart geometry.
//!
//! Note: Modules in [`support`] are public because they're useful, but their
//! APIs are not stable.

pub mod models;
pub mod support;
