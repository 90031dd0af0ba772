//! Featurizer Configuration

use crate::elemental::{ElementalAttribute, DEFAULT_ATTRIBUTES};
use crate::error::FeatureError;
use crate::features::FeaturizerSet;
use crate::ionic::IonicAttribute;
use crate::stoichiometry::{StoichiometricAttribute, DEFAULT_P_LIST};
use crate::valence::ValenceOrbitalAttribute;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Environment variables `FEATURE_ENGINE__<SECTION>__<FIELD>` override file values
const ENV_PREFIX: &str = "FEATURE_ENGINE";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoichiometrySettings {
    pub enabled: bool,
    pub p_list: Vec<i32>,
}

impl Default for StoichiometrySettings {
    fn default() -> Self {
        Self {
            enabled: true,
            p_list: DEFAULT_P_LIST.to_vec(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElementalSettings {
    pub enabled: bool,
    /// Property names, in output order
    pub attributes: Vec<String>,
}

impl Default for ElementalSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            attributes: DEFAULT_ATTRIBUTES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToggleSettings {
    pub enabled: bool,
}

impl Default for ToggleSettings {
    fn default() -> Self {
        Self { enabled: true }
    }
}

/// Which featurizers run, and with what parameters.
///
/// Enabled featurizers always run in the order stoichiometry, elemental,
/// valence orbital, ionic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeaturizerConfig {
    pub stoichiometry: StoichiometrySettings,
    pub elemental: ElementalSettings,
    pub valence_orbital: ToggleSettings,
    pub ionic: ToggleSettings,
}

impl FeaturizerConfig {
    /// Read a TOML/JSON/YAML file (format from extension), then apply
    /// `FEATURE_ENGINE__*` environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FeatureError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Instantiate the enabled featurizers
    pub fn build(&self) -> FeaturizerSet {
        let mut set = FeaturizerSet::new();
        if self.stoichiometry.enabled {
            set.push(Box::new(StoichiometricAttribute::new(
                self.stoichiometry.p_list.clone(),
            )));
        }
        if self.elemental.enabled {
            set.push(Box::new(ElementalAttribute::new(
                self.elemental.attributes.iter().cloned(),
            )));
        }
        if self.valence_orbital.enabled {
            set.push(Box::new(ValenceOrbitalAttribute));
        }
        if self.ionic.enabled {
            set.push(Box::new(IonicAttribute));
        }
        info!("Built featurizer set with {} featurizers", set.len());
        set
    }
}
