//! Elemental Property Attributes

use crate::error::FeatureError;
use crate::features::{FeatureVector, Featurizer};
use crate::statistics::PropertyStatistics;
use composition::Composition;
use element_data::PropertyProvider;

/// Magpie property names used when none are configured
pub const DEFAULT_ATTRIBUTES: [&str; 22] = [
    "Number",
    "MendeleevNumber",
    "AtomicWeight",
    "MeltingT",
    "Column",
    "Row",
    "CovalentRadius",
    "Electronegativity",
    "NsValence",
    "NpValence",
    "NdValence",
    "NfValence",
    "NValance",
    "NsUnfilled",
    "NpUnfilled",
    "NdUnfilled",
    "NfUnfilled",
    "NUnfilled",
    "GSvolume_pa",
    "GSbandgap",
    "GSmagmom",
    "SpaceGroupNumber",
];

const STAT_PREFIXES: [&str; 6] = ["Min", "Max", "Range", "Mean", "AbsDev", "Mode"];

/// Min, max, range, mean, mean absolute deviation and mode of each configured
/// property over the per-atom series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementalAttribute {
    attributes: Vec<String>,
}

impl ElementalAttribute {
    pub fn new<I, S>(attributes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            attributes: attributes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }
}

impl Default for ElementalAttribute {
    fn default() -> Self {
        Self::new(DEFAULT_ATTRIBUTES)
    }
}

impl Featurizer for ElementalAttribute {
    fn name(&self) -> &'static str {
        "ElementalAttribute"
    }

    fn featurize(
        &self,
        composition: &Composition,
        provider: &dyn PropertyProvider,
    ) -> Result<FeatureVector, FeatureError> {
        let mut values = Vec::with_capacity(self.attributes.len() * STAT_PREFIXES.len());
        for attribute in &self.attributes {
            let series = provider.series(composition, attribute)?.scalars()?;
            let stats = PropertyStatistics::compute(attribute, &series)?;
            values.extend(stats.to_array());
        }
        Ok(values.into_iter().collect())
    }

    fn generate_labels(&self) -> Vec<String> {
        self.attributes
            .iter()
            .flat_map(|attribute| {
                STAT_PREFIXES
                    .iter()
                    .map(move |prefix| format!("{prefix} {attribute}"))
            })
            .collect()
    }
}
