//! Summary of the stable and unstable entries of a closed phase diagram.

use serde::{Deserialize, Serialize};

use crate::support::{phase::PhaseDiagram, units::round_to};

use super::StabilityError;

/// An entry on the convex hull.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StablePhase {
    pub formula: String,
    pub id: String,
}

/// An entry above the convex hull and the stable phases it decomposes into.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnstablePhase {
    pub formula: String,
    pub id: String,
    /// Energy above the hull, eV per atom, rounded to 3 decimals.
    pub e_above_hull: f64,
    /// `formula:id` of each product and its fraction, rounded to 2 decimals.
    pub decomposition: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StabilityReport {
    pub stable: Vec<StablePhase>,
    pub unstable: Vec<UnstablePhase>,
}

impl StabilityReport {
    /// Lists every entry of `diagram` in the diagram's order.
    ///
    /// # Errors
    ///
    /// Returns [`StabilityError::DiagramFailed`] if the decomposition of an
    /// unstable entry cannot be computed.
    pub fn from_diagram<D: PhaseDiagram>(diagram: &D) -> Result<Self, StabilityError> {
        let stable = diagram
            .stable_entries()
            .iter()
            .map(|entry| StablePhase {
                formula: entry.name(),
                id: entry.id.clone(),
            })
            .collect();

        let unstable = diagram
            .unstable_entries()
            .iter()
            .map(|entry| {
                let (decomposition, e_above_hull) = diagram
                    .decomposition_and_e_above_hull(entry)
                    .map_err(|err| {
                        StabilityError::diagram_failed(
                            format!("decomposition of {}", entry.id),
                            err,
                        )
                    })?;

                Ok(UnstablePhase {
                    formula: entry.name(),
                    id: entry.id.clone(),
                    e_above_hull: round_to(e_above_hull, 3),
                    decomposition: decomposition
                        .iter()
                        .map(|(product, fraction)| {
                            (
                                format!("{}:{}", product.name(), product.id),
                                round_to(*fraction, 2),
                            )
                        })
                        .collect(),
                })
            })
            .collect::<Result<_, StabilityError>>()?;

        Ok(Self { stable, unstable })
    }
}
