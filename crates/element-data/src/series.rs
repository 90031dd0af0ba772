//! Per-Atom Property Series

use crate::error::LookupError;
use crate::value::PropertyValue;
use composition::Element;

/// Values of one property, one entry per atom, grouped by element in
/// ascending-electronegativity order
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySeries {
    property: String,
    entries: Vec<(Element, PropertyValue)>,
}

impl PropertySeries {
    pub fn new(property: &str, entries: Vec<(Element, PropertyValue)>) -> Self {
        Self {
            property: property.to_string(),
            entries,
        }
    }

    pub fn property(&self) -> &str {
        &self.property
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[(Element, PropertyValue)] {
        &self.entries
    }

    /// All entries as plain numbers
    pub fn scalars(&self) -> Result<Vec<f64>, LookupError> {
        self.entries
            .iter()
            .map(|(element, value)| {
                value.as_scalar().ok_or_else(|| LookupError::NotScalar {
                    element: *element,
                    property: self.property.clone(),
                })
            })
            .collect()
    }
}
