use std::{cmp::Ordering, fmt};

use serde::{Deserialize, Serialize};

/// A chemical element, identified by its symbol (e.g. `"O"`, `"Li"`).
///
/// Symbols are stored as given. Only [`Element::electronegativity`] consults
/// a periodic table, and an unknown symbol is still a valid element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(String);

impl Element {
    #[must_use]
    pub fn new(symbol: impl Into<String>) -> Self {
        Self(symbol.into())
    }

    #[must_use]
    pub fn oxygen() -> Self {
        Self::new("O")
    }

    #[must_use]
    pub fn lithium() -> Self {
        Self::new("Li")
    }

    #[must_use]
    pub fn sodium() -> Self {
        Self::new("Na")
    }

    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.0
    }

    /// Pauling electronegativity, if the symbol is a known element that has one.
    #[must_use]
    pub fn electronegativity(&self) -> Option<f64> {
        let x = match self.symbol() {
            "H" => 2.20,
            "Li" => 0.98,
            "Be" => 1.57,
            "B" => 2.04,
            "C" => 2.55,
            "N" => 3.04,
            "O" => 3.44,
            "F" => 3.98,
            "Na" => 0.93,
            "Mg" => 1.31,
            "Al" => 1.61,
            "Si" => 1.90,
            "P" => 2.19,
            "S" => 2.58,
            "Cl" => 3.16,
            "K" => 0.82,
            "Ca" => 1.00,
            "Sc" => 1.36,
            "Ti" => 1.54,
            "V" => 1.63,
            "Cr" => 1.66,
            "Mn" => 1.55,
            "Fe" => 1.83,
            "Co" => 1.88,
            "Ni" => 1.91,
            "Cu" => 1.90,
            "Zn" => 1.65,
            "Ga" => 1.81,
            "Ge" => 2.01,
            "As" => 2.18,
            "Se" => 2.55,
            "Br" => 2.96,
            "Kr" => 3.00,
            "Rb" => 0.82,
            "Sr" => 0.95,
            "Y" => 1.22,
            "Zr" => 1.33,
            "Nb" => 1.6,
            "Mo" => 2.16,
            "Tc" => 1.9,
            "Ru" => 2.2,
            "Rh" => 2.28,
            "Pd" => 2.20,
            "Ag" => 1.93,
            "Cd" => 1.69,
            "In" => 1.78,
            "Sn" => 1.96,
            "Sb" => 2.05,
            "Te" => 2.1,
            "I" => 2.66,
            "Xe" => 2.60,
            "Cs" => 0.79,
            "Ba" => 0.89,
            "La" => 1.10,
            "Ce" => 1.12,
            "Pr" => 1.13,
            "Nd" => 1.14,
            "Sm" => 1.17,
            "Gd" => 1.20,
            "Dy" => 1.22,
            "Ho" => 1.23,
            "Er" => 1.24,
            "Tm" => 1.25,
            "Lu" => 1.27,
            "Hf" => 1.3,
            "Ta" => 1.5,
            "W" => 2.36,
            "Re" => 1.9,
            "Os" => 2.2,
            "Ir" => 2.20,
            "Pt" => 2.28,
            "Au" => 2.54,
            "Hg" => 2.00,
            "Tl" => 1.62,
            "Pb" => 2.33,
            "Bi" => 2.02,
            "Po" => 2.0,
            "At" => 2.2,
            "Rn" => 2.2,
            "Fr" => 0.7,
            "Ra" => 0.9,
            "Ac" => 1.1,
            "Th" => 1.3,
            "Pa" => 1.5,
            "U" => 1.38,
            "Np" => 1.36,
            "Pu" => 1.28,
            _ => return None,
        };
        Some(x)
    }

    /// Order in which elements are written in a formula.
    ///
    /// Increasing electronegativity, ties broken by symbol. Elements without
    /// a known electronegativity come last, by symbol.
    #[must_use]
    pub fn formula_order(&self, other: &Self) -> Ordering {
        let by_x = match (self.electronegativity(), other.electronegativity()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_x.then_with(|| self.symbol().cmp(other.symbol()))
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Element {
    fn from(symbol: &str) -> Self {
        Self::new(symbol)
    }
}
