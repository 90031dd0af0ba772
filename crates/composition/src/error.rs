//! Formula Parsing Error Types

use crate::element::ParseElementError;
use thiserror::Error;

/// Errors raised while turning text into a composition
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// Formula contained no elements
    #[error("formula is empty")]
    Empty,

    /// Element symbol not in the periodic table
    #[error(transparent)]
    UnknownElement(#[from] ParseElementError),

    /// Character that cannot appear in a formula
    #[error("unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    /// Opening or closing bracket without its partner
    #[error("unbalanced group at position {0}")]
    UnbalancedGroup(usize),

    /// Amount that is not a finite positive number
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),

    /// Oxidation-state annotation that is not a signed integer
    #[error("invalid oxidation state '{0}'")]
    InvalidOxidationState(String),

    /// Oxidation-state annotation with no element in front of it
    #[error("oxidation state '{0}' has no owning element")]
    OrphanOxidationState(String),

    /// Annotation text could not be located in the remaining formula
    #[error("oxidation state '{0}' not found in formula")]
    AnnotationNotFound(String),
}
