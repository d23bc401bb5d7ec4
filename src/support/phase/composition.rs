use std::fmt::Write;

use serde::{Deserialize, Serialize};

use super::Element;

/// Amount of each element in a phase.
///
/// Repeated elements are summed and non-positive amounts are dropped.
/// Elements are kept in formula order (see [`Element::formula_order`]), so
/// two compositions with the same amounts are equal whatever order the
/// elements were given in.
///
/// # Example
///
/// ```
/// use open_phase_models::support::phase::Composition;
///
/// let peroxide = Composition::new([("Li", 2.0), ("O", 2.0)]);
/// assert_eq!(peroxide.reduced_formula(), "Li2O2");
/// assert_eq!(peroxide.num_atoms(), 4.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Composition {
    amounts: Vec<(Element, f64)>,
}

impl Composition {
    #[must_use]
    pub fn new<E: Into<Element>>(amounts: impl IntoIterator<Item = (E, f64)>) -> Self {
        let mut merged: Vec<(Element, f64)> = Vec::new();
        for (element, amount) in amounts {
            let element = element.into();
            match merged.iter_mut().find(|(existing, _)| *existing == element) {
                Some((_, total)) => *total += amount,
                None => merged.push((element, amount)),
            }
        }
        merged.retain(|(_, amount)| *amount > 0.0);
        merged.sort_by(|(a, _), (b, _)| a.formula_order(b));
        Self { amounts: merged }
    }

    /// Amount of `element`, or zero if absent.
    #[must_use]
    pub fn amount(&self, element: &Element) -> f64 {
        self.amounts
            .iter()
            .find(|(e, _)| e == element)
            .map_or(0.0, |(_, amount)| *amount)
    }

    pub fn elements(&self) -> impl Iterator<Item = &Element> {
        self.amounts.iter().map(|(element, _)| element)
    }

    #[must_use]
    pub fn contains(&self, element: &Element) -> bool {
        self.amounts.iter().any(|(e, _)| e == element)
    }

    /// Total number of atoms per formula unit.
    #[must_use]
    pub fn num_atoms(&self) -> f64 {
        self.amounts.iter().map(|(_, amount)| amount).sum()
    }

    /// Formula with integer amounts divided by their greatest common divisor.
    ///
    /// Non-integer amounts are written as given. An amount of one is omitted.
    /// Diatomic gases and alkali peroxides keep their molecular formula, so
    /// O₂ is `"O2"` and Li₂O₂ is `"Li2O2"` rather than `"O"` and `"LiO"`.
    #[must_use]
    pub fn reduced_formula(&self) -> String {
        let all_integral = self
            .amounts
            .iter()
            .all(|(_, amount)| (amount - amount.round()).abs() < 1e-8);

        let divisor = if all_integral {
            self.amounts
                .iter()
                .map(|(_, amount)| amount.round() as u64)
                .fold(0, gcd)
                .max(1) as f64
        } else {
            1.0
        };

        let mut formula = String::new();
        for (element, amount) in &self.amounts {
            let reduced = amount / divisor;
            formula.push_str(element.symbol());
            if (reduced - 1.0).abs() > 1e-8 {
                let _ = write!(formula, "{}", trim_amount(reduced));
            }
        }
        match molecular_formula(&formula) {
            Some(molecular) => molecular.to_owned(),
            None => formula,
        }
    }
}

fn molecular_formula(reduced: &str) -> Option<&'static str> {
    let molecular = match reduced {
        "LiO" => "Li2O2",
        "NaO" => "Na2O2",
        "KO" => "K2O2",
        "HO" => "H2O2",
        "CsO" => "Cs2O2",
        "RbO" => "Rb2O2",
        "O" => "O2",
        "N" => "N2",
        "F" => "F2",
        "Cl" => "Cl2",
        "H" => "H2",
        _ => return None,
    };
    Some(molecular)
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

fn trim_amount(amount: f64) -> String {
    if (amount - amount.round()).abs() < 1e-8 {
        format!("{}", amount.round() as i64)
    } else {
        format!("{amount}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduces_integer_formulas() {
        assert_eq!(Composition::new([("Li", 4.0), ("O", 2.0)]).reduced_formula(), "Li2O");
        assert_eq!(Composition::new([("Ca", 1.0), ("O", 1.0)]).reduced_formula(), "CaO");
        assert_eq!(
            Composition::new([("Mn", 6.0), ("O", 8.0)]).reduced_formula(),
            "Mn3O4"
        );
    }

    #[test]
    fn keeps_molecular_formulas() {
        assert_eq!(Composition::new([("O", 2.0)]).reduced_formula(), "O2");
        assert_eq!(Composition::new([("O", 1.0)]).reduced_formula(), "O2");
        assert_eq!(Composition::new([("Li", 2.0), ("O", 2.0)]).reduced_formula(), "Li2O2");
        assert_eq!(Composition::new([("Na", 4.0), ("O", 4.0)]).reduced_formula(), "Na2O2");
        assert_eq!(Composition::new([("O", 2.0), ("H", 2.0)]).reduced_formula(), "H2O2");
        assert_eq!(Composition::new([("N", 2.0)]).reduced_formula(), "N2");
        assert_eq!(Composition::new([("Cl", 2.0)]).reduced_formula(), "Cl2");
    }

    #[test]
    fn element_order_does_not_depend_on_input_order() {
        let oxide = Composition::new([("O", 1.0), ("Li", 2.0)]);
        assert_eq!(oxide, Composition::new([("Li", 2.0), ("O", 1.0)]));
        assert_eq!(oxide.reduced_formula(), "Li2O");

        let spinel = Composition::new([("O", 4.0), ("Mn", 2.0), ("Li", 1.0)]);
        assert_eq!(spinel.reduced_formula(), "LiMn2O4");
        let symbols: Vec<_> = spinel.elements().map(Element::symbol).collect();
        assert_eq!(symbols, ["Li", "Mn", "O"]);
    }

    #[test]
    fn keeps_fractional_amounts() {
        let composition = Composition::new([("Li", 0.5), ("O", 1.0)]);
        assert_eq!(composition.reduced_formula(), "Li0.5O");
    }

    #[test]
    fn merges_repeated_elements_and_drops_empty_ones() {
        let composition = Composition::new([("Li", 1.0), ("O", 1.0), ("Li", 1.0), ("Ca", 0.0)]);
        assert_eq!(composition.amount(&Element::lithium()), 2.0);
        assert!(!composition.contains(&Element::new("Ca")));
        assert_eq!(composition.elements().count(), 2);
        assert_eq!(composition.num_atoms(), 3.0);
    }
}
