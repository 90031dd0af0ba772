//! Property Data Error Types

use composition::{Element, ParseElementError};
use std::path::PathBuf;
use thiserror::Error;

/// Errors while looking up a property for an element
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LookupError {
    /// Property name not known to the provider
    #[error("unknown property '{0}'")]
    UnknownProperty(String),

    /// Property known, but no value recorded for this element
    #[error("no '{property}' value for {element}")]
    MissingValue { element: Element, property: String },

    /// A single number was required but the value is a list or keyed table
    #[error("'{property}' for {element} is not a single number")]
    NotScalar { element: Element, property: String },

    /// Value is keyed by oxidation state and the composition carries none for this element
    #[error("'{property}' for {element} depends on the oxidation state, but none was given")]
    OxidationStateRequired { element: Element, property: String },
}

/// Errors while building or loading an element table
#[derive(Debug, Error)]
pub enum TableError {
    /// File system error
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid JSON table
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid binary snapshot
    #[error("snapshot error: {0}")]
    Snapshot(#[from] postcard::Error),

    /// Element symbol not in the periodic table
    #[error(transparent)]
    UnknownElement(#[from] ParseElementError),

    /// Oxidation-state key that is not an integer
    #[error("invalid oxidation state key '{0}'")]
    InvalidOxidationKey(String),

    /// Unparseable line in a Magpie table file
    #[error("{file}:{line}: {reason}")]
    Malformed {
        file: PathBuf,
        line: usize,
        reason: String,
    },

    /// Configuration could not be read
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
