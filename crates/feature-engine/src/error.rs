//! Feature Extraction Error Types

use composition::{Element, ParseError};
use element_data::LookupError;
use thiserror::Error;

/// Errors that can occur while computing a feature vector
#[derive(Debug, Error)]
pub enum FeatureError {
    /// Negative exponent in a stoichiometric norm
    #[error("p-norm not defined for p < 0 (got {0})")]
    NegativeNorm(i32),

    /// Aggregate over a series with no entries
    #[error("cannot aggregate empty series for '{0}'")]
    EmptySeries(String),

    /// Average total valence electron count is zero
    #[error("total valence electron count is zero; valence fractions are undefined")]
    ZeroValence,

    /// Candidate oxidation states are not a list of numbers
    #[error("oxidation states for {0} are not a list of numbers")]
    InvalidOxidationStates(Element),

    /// Property lookup failed
    #[error(transparent)]
    Lookup(#[from] LookupError),

    /// Formula could not be parsed
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration could not be read
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
