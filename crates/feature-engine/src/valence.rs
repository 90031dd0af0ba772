//! Valence Orbital Attributes

use crate::error::FeatureError;
use crate::features::{FeatureVector, Featurizer};
use composition::Composition;
use element_data::PropertyProvider;

const TOTAL_VALENCE: &str = "NValance";
const ORBITAL_VALENCE: [(&str, &str); 4] = [
    ("s", "NsValence"),
    ("p", "NpValence"),
    ("d", "NdValence"),
    ("f", "NfValence"),
];

/// Fraction of valence electrons in s, p, d and f orbitals, averaged per atom
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValenceOrbitalAttribute;

impl ValenceOrbitalAttribute {
    fn average(
        composition: &Composition,
        provider: &dyn PropertyProvider,
        property: &str,
    ) -> Result<f64, FeatureError> {
        let total: f64 = provider.series(composition, property)?.scalars()?.iter().sum();
        Ok(total / composition.num_atoms())
    }
}

impl Featurizer for ValenceOrbitalAttribute {
    fn name(&self) -> &'static str {
        "ValenceOrbitalAttribute"
    }

    fn featurize(
        &self,
        composition: &Composition,
        provider: &dyn PropertyProvider,
    ) -> Result<FeatureVector, FeatureError> {
        let avg_total = Self::average(composition, provider, TOTAL_VALENCE)?;
        if avg_total == 0.0 {
            return Err(FeatureError::ZeroValence);
        }

        ORBITAL_VALENCE
            .iter()
            .map(|(_, property)| {
                Ok::<_, FeatureError>(Self::average(composition, provider, property)? / avg_total)
            })
            .collect()
    }

    fn generate_labels(&self) -> Vec<String> {
        ORBITAL_VALENCE
            .iter()
            .map(|(orbital, _)| format!("Frac {orbital} Valence Electrons"))
            .collect()
    }
}
