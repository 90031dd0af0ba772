//! Stoichiometric Attributes

use crate::error::FeatureError;
use crate::features::{FeatureVector, Featurizer};
use crate::statistics::holder_mean;
use composition::Composition;
use element_data::PropertyProvider;

/// Norms computed when none are configured
pub const DEFAULT_P_LIST: [i32; 6] = [0, 2, 3, 5, 7, 10];

/// Lp norms of the element fractions, one per configured exponent.
/// The 0-norm is the number of distinct elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoichiometricAttribute {
    p_list: Vec<i32>,
}

impl StoichiometricAttribute {
    pub fn new(p_list: Vec<i32>) -> Self {
        Self { p_list }
    }

    pub fn p_list(&self) -> &[i32] {
        &self.p_list
    }
}

impl Default for StoichiometricAttribute {
    fn default() -> Self {
        Self::new(DEFAULT_P_LIST.to_vec())
    }
}

impl Featurizer for StoichiometricAttribute {
    fn name(&self) -> &'static str {
        "StoichiometricAttribute"
    }

    fn featurize(
        &self,
        composition: &Composition,
        _provider: &dyn PropertyProvider,
    ) -> Result<FeatureVector, FeatureError> {
        if let Some(&p) = self.p_list.iter().find(|&&p| p < 0) {
            return Err(FeatureError::NegativeNorm(p));
        }

        let fractions: Vec<f64> = composition.fractions().into_iter().map(|(_, f)| f).collect();
        self.p_list
            .iter()
            .map(|&p| holder_mean(&fractions, p))
            .collect()
    }

    fn generate_labels(&self) -> Vec<String> {
        self.p_list.iter().map(|p| format!("{p}-norm")).collect()
    }
}
