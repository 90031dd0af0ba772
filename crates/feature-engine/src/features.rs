//! Feature Vector Assembly

use crate::error::FeatureError;
use composition::{Composition, CompositionInput};
use element_data::PropertyProvider;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One entry of a feature vector
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Bool(bool),
    Number(f64),
}

impl FeatureValue {
    /// Numeric view; booleans map to 1.0 / 0.0
    pub fn as_f64(&self) -> f64 {
        match self {
            FeatureValue::Bool(b) => f64::from(u8::from(*b)),
            FeatureValue::Number(v) => *v,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FeatureValue::Bool(b) => Some(*b),
            FeatureValue::Number(_) => None,
        }
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Number(value)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Bool(value)
    }
}

/// Ordered output of one featurizer (or a set of them)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// Feature values, aligned with the featurizer's labels
    pub values: Vec<FeatureValue>,
}

impl FeatureVector {
    pub fn new(values: Vec<FeatureValue>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All values as numbers, suitable as model input
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.values.iter().map(FeatureValue::as_f64).collect()
    }

    /// Append another vector's values
    pub fn extend(&mut self, other: FeatureVector) {
        self.values.extend(other.values);
    }
}

impl FromIterator<f64> for FeatureVector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(FeatureValue::Number).collect())
    }
}

/// A unit that turns one composition into a fixed-length feature vector.
///
/// The vector length and label order depend only on the featurizer's
/// configuration, never on the composition.
pub trait Featurizer: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Compute the feature vector; no partial output on error
    fn featurize(
        &self,
        composition: &Composition,
        provider: &dyn PropertyProvider,
    ) -> Result<FeatureVector, FeatureError>;

    /// Labels matching `featurize` output one-to-one
    fn generate_labels(&self) -> Vec<String>;

    fn feature_count(&self) -> usize {
        self.generate_labels().len()
    }
}

/// Ordered collection of featurizers whose outputs are concatenated
#[derive(Default)]
pub struct FeaturizerSet {
    featurizers: Vec<Box<dyn Featurizer>>,
}

impl FeaturizerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a featurizer (builder form)
    pub fn with(mut self, featurizer: impl Featurizer + 'static) -> Self {
        self.push(Box::new(featurizer));
        self
    }

    pub fn push(&mut self, featurizer: Box<dyn Featurizer>) {
        info!(
            "Adding featurizer {} ({} features)",
            featurizer.name(),
            featurizer.feature_count()
        );
        self.featurizers.push(featurizer);
    }

    /// Number of featurizers
    pub fn len(&self) -> usize {
        self.featurizers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.featurizers.is_empty()
    }

    /// Resolve a formula or parsed composition, then featurize it
    pub fn featurize_input(
        &self,
        input: impl Into<CompositionInput>,
        provider: &dyn PropertyProvider,
    ) -> Result<FeatureVector, FeatureError> {
        let composition = input.into().resolve()?;
        self.featurize(&composition, provider)
    }
}

impl Featurizer for FeaturizerSet {
    fn name(&self) -> &'static str {
        "FeaturizerSet"
    }

    fn featurize(
        &self,
        composition: &Composition,
        provider: &dyn PropertyProvider,
    ) -> Result<FeatureVector, FeatureError> {
        let mut vector = FeatureVector::default();
        for featurizer in &self.featurizers {
            vector.extend(featurizer.featurize(composition, provider)?);
        }
        debug!("Featurized {} into {} values", composition, vector.len());
        Ok(vector)
    }

    fn generate_labels(&self) -> Vec<String> {
        self.featurizers
            .iter()
            .flat_map(|featurizer| featurizer.generate_labels())
            .collect()
    }
}
