//! Composition Feature Engine
//!
//! Turns a chemical composition into fixed-length numeric feature vectors for
//! materials ML: stoichiometric norms, elemental property statistics, valence
//! orbital fractions and ionic attributes. Property values come from an
//! injected [`element_data::PropertyProvider`].

mod elemental;
mod error;
mod features;
mod ionic;
mod settings;
mod statistics;
mod stoichiometry;
mod valence;

pub use elemental::{ElementalAttribute, DEFAULT_ATTRIBUTES};
pub use error::FeatureError;
pub use features::{FeatureValue, FeatureVector, Featurizer, FeaturizerSet};
pub use ionic::{ionic_character, neutral_assignment_exists, IonicAttribute};
pub use settings::{ElementalSettings, FeaturizerConfig, StoichiometrySettings, ToggleSettings};
pub use statistics::{
    holder_mean, maximum, mean, mean_abs_deviation, minimum, mode, range, PropertyStatistics,
};
pub use stoichiometry::{StoichiometricAttribute, DEFAULT_P_LIST};
pub use valence::ValenceOrbitalAttribute;
