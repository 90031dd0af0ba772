//! Boundary Input Type

use crate::composition::Composition;
use crate::error::ParseError;

/// A composition as handed over by a caller: either formula text or an already
/// parsed value. Resolved once, before any feature computation.
#[derive(Debug, Clone, PartialEq)]
pub enum CompositionInput {
    /// Formula text, optionally annotated with oxidation states
    Formula(String),
    /// Already parsed composition
    Parsed(Composition),
}

impl CompositionInput {
    /// Normalise to a [`Composition`]; formula text goes through the
    /// oxidation-annotated parser
    pub fn resolve(self) -> Result<Composition, ParseError> {
        match self {
            CompositionInput::Formula(text) => Composition::from_annotated_formula(&text),
            CompositionInput::Parsed(composition) => Ok(composition),
        }
    }
}

impl From<&str> for CompositionInput {
    fn from(text: &str) -> Self {
        CompositionInput::Formula(text.to_string())
    }
}

impl From<String> for CompositionInput {
    fn from(text: String) -> Self {
        CompositionInput::Formula(text)
    }
}

impl From<Composition> for CompositionInput {
    fn from(composition: Composition) -> Self {
        CompositionInput::Parsed(composition)
    }
}
