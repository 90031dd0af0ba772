//! Ionic Attributes
//!
//! Whether a charge-neutral ionic compound can be formed from the elements'
//! candidate oxidation states, plus the maximum and fraction-weighted average
//! ionic character over all element pairs.
//!
//! The neutrality search walks the full Cartesian product of candidate states
//! and stops at the first neutral assignment. Its cost is the product of the
//! candidate counts, which grows without bound for compositions with many
//! distinct elements that each have many candidate states.

use crate::error::FeatureError;
use crate::features::{FeatureValue, FeatureVector, Featurizer};
use composition::Composition;
use element_data::{LookupError, PropertyProvider, ELECTRONEGATIVITY, OXIDATION_STATES};
use tracing::debug;

/// Net charge below this magnitude counts as neutral
const NEUTRALITY_TOLERANCE: f64 = 1e-8;

/// Compound-possible flag, max ionic character, average ionic character
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IonicAttribute;

/// Ionic character of a bond between elements with electronegativities `xa`, `xb`
pub fn ionic_character(xa: f64, xb: f64) -> f64 {
    1.0 - (-0.25 * (xa - xb).powi(2)).exp()
}

/// True if some choice of one candidate state per element makes
/// `Σ state_i × amount_i` zero. An element without candidates rules it out.
pub fn neutral_assignment_exists(candidates: &[&[f64]], amounts: &[f64]) -> bool {
    if candidates.is_empty() || candidates.iter().any(|states| states.is_empty()) {
        return false;
    }

    // Odometer over the Cartesian product, last position fastest
    let mut choice = vec![0usize; candidates.len()];
    loop {
        let charge: f64 = choice
            .iter()
            .zip(candidates)
            .zip(amounts)
            .map(|((&idx, states), amount)| states[idx] * amount)
            .sum();
        if charge.abs() < NEUTRALITY_TOLERANCE {
            return true;
        }

        let mut pos = candidates.len();
        loop {
            if pos == 0 {
                return false;
            }
            pos -= 1;
            choice[pos] += 1;
            if choice[pos] < candidates[pos].len() {
                break;
            }
            choice[pos] = 0;
        }
    }
}

impl Featurizer for IonicAttribute {
    fn name(&self) -> &'static str {
        "IonicAttribute"
    }

    fn featurize(
        &self,
        composition: &Composition,
        provider: &dyn PropertyProvider,
    ) -> Result<FeatureVector, FeatureError> {
        if composition.num_elements() < 2 {
            return Ok(FeatureVector::new(vec![
                FeatureValue::Bool(true),
                FeatureValue::Number(0.0),
                FeatureValue::Number(0.0),
            ]));
        }

        let electronegativity = provider.element_values(composition, ELECTRONEGATIVITY)?;

        let mut candidates = Vec::with_capacity(electronegativity.len());
        let mut x = Vec::with_capacity(electronegativity.len());
        let mut amounts = Vec::with_capacity(electronegativity.len());
        for (element, value) in &electronegativity {
            x.push(value.as_scalar().ok_or_else(|| LookupError::NotScalar {
                element: *element,
                property: ELECTRONEGATIVITY.to_string(),
            })?);
            candidates.push(provider.property(*element, OXIDATION_STATES)?);
            amounts.push(composition.amount(*element));
        }
        let candidates = candidates
            .iter()
            .zip(&electronegativity)
            .map(|(value, (element, _))| {
                value
                    .as_slice()
                    .ok_or(FeatureError::InvalidOxidationStates(*element))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let total = composition.num_atoms();

        let compound_possible = neutral_assignment_exists(&candidates, &amounts);

        let mut max_ionic_char = 0.0f64;
        let mut avg_ionic_char = 0.0;
        for i in 0..x.len() {
            for j in (i + 1)..x.len() {
                let character = ionic_character(x[i], x[j]);
                max_ionic_char = max_ionic_char.max(character);
                avg_ionic_char += (amounts[i] / total) * (amounts[j] / total) * character;
            }
        }

        debug!(
            "Ionic attributes for {}: possible={}, max={:.4}, avg={:.4}",
            composition, compound_possible, max_ionic_char, avg_ionic_char
        );

        Ok(FeatureVector::new(vec![
            FeatureValue::Bool(compound_possible),
            FeatureValue::Number(max_ionic_char),
            FeatureValue::Number(avg_ionic_char),
        ]))
    }

    fn generate_labels(&self) -> Vec<String> {
        vec![
            "compound possible".to_string(),
            "Max Ionic Char".to_string(),
            "Avg Ionic Char".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use composition::Element;
    use element_data::{ElementTable, PropertyValue};
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    /// Counts every raw lookup per property name
    struct CountingProvider {
        inner: ElementTable,
        reads: Mutex<BTreeMap<String, usize>>,
    }

    impl CountingProvider {
        fn reads(&self, name: &str) -> usize {
            self.reads.lock().unwrap().get(name).copied().unwrap_or(0)
        }
    }

    impl PropertyProvider for CountingProvider {
        fn property(&self, element: Element, name: &str) -> Result<PropertyValue, LookupError> {
            *self.reads.lock().unwrap().entry(name.to_string()).or_default() += 1;
            self.inner.property(element, name)
        }
    }

    fn table() -> ElementTable {
        ElementTable::new()
            .with_property(
                ELECTRONEGATIVITY,
                [(Element::Fe, 1.83), (Element::O, 3.44), (Element::Na, 0.93), (Element::Mg, 1.31)],
            )
            .with_property(
                OXIDATION_STATES,
                [
                    (Element::Fe, vec![2.0, 3.0]),
                    (Element::O, vec![-2.0]),
                    (Element::Na, vec![1.0]),
                    (Element::Mg, vec![2.0]),
                ],
            )
    }

    #[test]
    fn test_single_element_is_trivially_neutral() {
        let comp = Composition::from_formula("Fe").unwrap();
        let vector = IonicAttribute.featurize(&comp, &ElementTable::new()).unwrap();
        assert_eq!(
            vector.values,
            vec![
                FeatureValue::Bool(true),
                FeatureValue::Number(0.0),
                FeatureValue::Number(0.0)
            ]
        );
    }

    #[test]
    fn test_iron_oxide() {
        let comp = Composition::from_formula("Fe2O3").unwrap();
        let vector = IonicAttribute.featurize(&comp, &table()).unwrap();

        let character = ionic_character(1.83, 3.44);
        assert_eq!(vector.values[0], FeatureValue::Bool(true));
        assert!((vector.values[1].as_f64() - character).abs() < 1e-12);
        assert!((vector.values[2].as_f64() - 0.4 * 0.6 * character).abs() < 1e-12);
    }

    #[test]
    fn test_no_neutral_combination() {
        let comp = Composition::from_formula("NaMg").unwrap();
        let vector = IonicAttribute.featurize(&comp, &table()).unwrap();
        assert_eq!(vector.values[0], FeatureValue::Bool(false));
    }

    #[test]
    fn test_neutrality_search() {
        assert!(neutral_assignment_exists(&[&[2.0, 3.0], &[-2.0]], &[2.0, 3.0]));
        assert!(!neutral_assignment_exists(&[&[2.0], &[-2.0]], &[2.0, 3.0]));
        assert!(neutral_assignment_exists(
            &[&[1.0], &[2.0, 3.0], &[-2.0]],
            &[1.0, 1.0, 2.0]
        ));
        assert!(!neutral_assignment_exists(&[&[], &[-2.0]], &[1.0, 1.0]));
        assert!(neutral_assignment_exists(&[&[1.0], &[-2.0]], &[1.0, 0.5]));
    }

    #[test]
    fn test_ionic_character_symmetric() {
        assert_eq!(ionic_character(1.0, 1.0), 0.0);
        assert_eq!(ionic_character(0.93, 3.16), ionic_character(3.16, 0.93));
        assert!(ionic_character(0.7, 4.0) < 1.0);
    }

    #[test]
    fn test_each_property_read_once_per_element() {
        let provider = CountingProvider {
            inner: table(),
            reads: Mutex::new(BTreeMap::new()),
        };
        let comp = Composition::from_formula("Fe2O3").unwrap();
        let vector = IonicAttribute.featurize(&comp, &provider).unwrap();

        assert_eq!(vector.values[0], FeatureValue::Bool(true));
        assert_eq!(provider.reads(OXIDATION_STATES), 2);
        // One ordering read and one value read per element
        assert_eq!(provider.reads(ELECTRONEGATIVITY), 4);
    }
}
