//! Supporting utilities used by models.
//!
//! - [`constraint`]: numeric invariants checked at construction time.
//! - [`phase`]: the closed/grand potential phase diagram capability consumed
//!   by the stability models.
//! - [`thermo`]: Shomate fits and gas reservoir thermodynamics.
//! - [`units`]: conversion factors and physical constants in the units used
//!   by computational phase diagrams (eV, kJ/mol, atm).

pub mod constraint;
pub mod phase;
pub mod thermo;
pub mod units;
