//! Composition Type

use crate::element::Element;
use crate::error::ParseError;
use crate::formula;
use crate::oxidation::{self, OxidationStates};
use serde::Serialize;
use std::fmt;

/// Amounts closer than this are treated as equal
pub const AMOUNT_TOLERANCE: f64 = 1e-8;

/// Immutable element → amount mapping, optionally decorated with oxidation states.
///
/// Elements keep the order in which they first appeared in the source formula.
/// Amounts are always finite and strictly positive.
#[derive(Debug, Clone, Serialize)]
pub struct Composition {
    amounts: Vec<(Element, f64)>,
    oxidation_states: OxidationStates,
}

impl Composition {
    /// Parse a plain formula such as `"Fe2O3"` or `"Ca3(PO4)2"`
    pub fn from_formula(formula: &str) -> Result<Self, ParseError> {
        Self::from_pairs(formula::parse_formula(formula)?)
    }

    /// Parse a formula that may carry inline oxidation states, e.g. `"Fe2+3O3-2"`.
    /// Annotated elements end up in the composition's decoration.
    pub fn from_annotated_formula(formula: &str) -> Result<Self, ParseError> {
        let (composition, states) = oxidation::parse_oxidation_formula(formula)?;
        composition.with_oxidation_states(states)
    }

    /// Build from element/amount pairs; repeated elements accumulate
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ParseError>
    where
        I: IntoIterator<Item = (Element, f64)>,
    {
        let mut amounts: Vec<(Element, f64)> = Vec::new();
        for (element, amount) in pairs {
            if !amount.is_finite() || amount <= 0.0 {
                return Err(ParseError::InvalidAmount(amount.to_string()));
            }
            match amounts.iter_mut().find(|(el, _)| *el == element) {
                Some((_, existing)) => *existing += amount,
                None => amounts.push((element, amount)),
            }
        }

        if amounts.is_empty() {
            return Err(ParseError::Empty);
        }

        Ok(Self {
            amounts,
            oxidation_states: OxidationStates::new(),
        })
    }

    /// Attach oxidation states; every annotated element must be present
    pub fn with_oxidation_states(mut self, states: OxidationStates) -> Result<Self, ParseError> {
        for (element, state) in &states {
            if self.amount(*element) == 0.0 {
                return Err(ParseError::OrphanOxidationState(format!("{element}{state:+}")));
            }
        }
        self.oxidation_states = states;
        Ok(self)
    }

    /// Amount of an element (0 when absent)
    pub fn amount(&self, element: Element) -> f64 {
        self.amounts
            .iter()
            .find(|(el, _)| *el == element)
            .map_or(0.0, |(_, amt)| *amt)
    }

    /// Total number of atoms (sum of amounts)
    pub fn num_atoms(&self) -> f64 {
        self.amounts.iter().map(|(_, amt)| amt).sum()
    }

    /// Number of distinct elements
    pub fn num_elements(&self) -> usize {
        self.amounts.len()
    }

    pub fn elements(&self) -> impl Iterator<Item = Element> + '_ {
        self.amounts.iter().map(|(el, _)| *el)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Element, f64)> + '_ {
        self.amounts.iter().copied()
    }

    /// Atomic fraction of each element, in composition order
    pub fn fractions(&self) -> Vec<(Element, f64)> {
        let total = self.num_atoms();
        self.amounts
            .iter()
            .map(|(el, amt)| (*el, amt / total))
            .collect()
    }

    pub fn oxidation_state(&self, element: Element) -> Option<i32> {
        self.oxidation_states.get(&element).copied()
    }

    pub fn oxidation_states(&self) -> &OxidationStates {
        &self.oxidation_states
    }

    /// Whether any element carries an oxidation state
    pub fn is_decorated(&self) -> bool {
        !self.oxidation_states.is_empty()
    }

    /// Divide all amounts by their greatest common divisor (`Fe4O6` → `Fe2O3`).
    /// Compositions with non-integral amounts, or amounts too large for `u64`,
    /// are returned unchanged.
    pub fn reduced(&self) -> Composition {
        let mut divisor = 0u64;
        for (_, amt) in &self.amounts {
            let rounded = amt.round();
            if (amt - rounded).abs() > AMOUNT_TOLERANCE || rounded >= u64::MAX as f64 {
                return self.clone();
            }
            divisor = gcd(divisor, rounded as u64);
        }

        if divisor <= 1 {
            return self.clone();
        }

        Composition {
            amounts: self
                .amounts
                .iter()
                .map(|(el, amt)| (*el, amt.round() / divisor as f64))
                .collect(),
            oxidation_states: self.oxidation_states.clone(),
        }
    }

    /// Formula string in composition order, amounts of 1 omitted
    pub fn formula(&self) -> String {
        self.amounts
            .iter()
            .map(|(el, amt)| {
                if (amt - 1.0).abs() <= AMOUNT_TOLERANCE {
                    el.symbol().to_string()
                } else {
                    format!("{}{}", el.symbol(), amt)
                }
            })
            .collect()
    }
}

/// Order-insensitive comparison with [`AMOUNT_TOLERANCE`] on amounts
impl PartialEq for Composition {
    fn eq(&self, other: &Self) -> bool {
        self.num_elements() == other.num_elements()
            && self
                .amounts
                .iter()
                .all(|(el, amt)| (other.amount(*el) - amt).abs() <= AMOUNT_TOLERANCE)
            && self.oxidation_states == other.oxidation_states
    }
}

impl fmt::Display for Composition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formula())
    }
}

fn gcd(a: u64, b: u64) -> u64 {
    if b == 0 {
        a
    } else {
        gcd(b, a % b)
    }
}
