//! Public Twine models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! - [`reservoir`]: chemical potential ⇄ temperature for a gas reservoir.
//! - [`stability`]: per-phase stability intervals of an open system and
//!   their projection onto a display axis.
//!
//! # Model structure
//!
//! Each [`twine_core::Model`] implementation is a thin adapter. The
//! computation lives either in [`crate::support`] (reservoir thermodynamics)
//! or in the model's internal `core` module (stability assembly and
//! projection).

pub mod reservoir;
pub mod stability;
