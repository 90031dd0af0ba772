//! In-Memory Element Table

use crate::error::LookupError;
use crate::provider::PropertyProvider;
use crate::value::PropertyValue;
use composition::Element;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Property name → element → value lookup table.
///
/// Immutable once built; safe to share across threads behind `&` or `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ElementTable {
    properties: BTreeMap<String, BTreeMap<Element, PropertyValue>>,
}

impl ElementTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set one value, replacing any previous one
    pub fn insert(&mut self, property: &str, element: Element, value: impl Into<PropertyValue>) {
        self.properties
            .entry(property.to_string())
            .or_default()
            .insert(element, value.into());
    }

    /// Builder form of [`insert`](ElementTable::insert) for a whole property
    pub fn with_property<I, V>(mut self, property: &str, values: I) -> Self
    where
        I: IntoIterator<Item = (Element, V)>,
        V: Into<PropertyValue>,
    {
        for (element, value) in values {
            self.insert(property, element, value);
        }
        self
    }

    /// Register a property with no values yet
    pub(crate) fn declare(&mut self, property: &str) {
        self.properties.entry(property.to_string()).or_default();
    }

    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn contains_property(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl PropertyProvider for ElementTable {
    fn property(&self, element: Element, name: &str) -> Result<PropertyValue, LookupError> {
        let values = self
            .properties
            .get(name)
            .ok_or_else(|| LookupError::UnknownProperty(name.to_string()))?;

        values
            .get(&element)
            .cloned()
            .ok_or_else(|| LookupError::MissingValue {
                element,
                property: name.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let table = ElementTable::new()
            .with_property("Electronegativity", [(Element::Na, 0.93), (Element::Cl, 3.16)])
            .with_property("OxidationStates", [(Element::Cl, vec![-1.0, 1.0, 3.0, 5.0, 7.0])]);

        assert_eq!(table.len(), 2);
        assert!(table.contains_property("OxidationStates"));
        assert_eq!(table.scalar(Element::Na, "Electronegativity").unwrap(), 0.93);
        assert_eq!(
            table.property(Element::Na, "OxidationStates").unwrap_err(),
            LookupError::MissingValue {
                element: Element::Na,
                property: "OxidationStates".to_string()
            }
        );
        assert_eq!(
            table.property(Element::Na, "Density").unwrap_err(),
            LookupError::UnknownProperty("Density".to_string())
        );
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = ElementTable::new();
        table.insert("Number", Element::Fe, 25.0);
        table.insert("Number", Element::Fe, 26.0);
        assert_eq!(table.scalar(Element::Fe, "Number").unwrap(), 26.0);
    }
}
