//! Chemical Compositions
//!
//! Provides the element table, the canonical [`Composition`] type, and the
//! formula parsers that turn strings such as `"Fe2O3"` or `"Fe2+3O3-2"` into
//! compositions (optionally decorated with oxidation states).

mod composition;
mod element;
mod error;
mod formula;
mod input;
mod oxidation;

pub use composition::{Composition, AMOUNT_TOLERANCE};
pub use element::{Element, ParseElementError};
pub use error::ParseError;
pub use input::CompositionInput;
pub use oxidation::{parse_oxidation_formula, OxidationStates};
