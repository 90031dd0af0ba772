//! Property Provider Interface

use crate::error::LookupError;
use crate::series::PropertySeries;
use crate::value::PropertyValue;
use composition::{Composition, Element};

/// Property used to order elements within a series
pub const ELECTRONEGATIVITY: &str = "Electronegativity";

/// List property holding each element's candidate oxidation states
pub const OXIDATION_STATES: &str = "OxidationStates";

/// Read-only source of per-element property values.
///
/// Implementors only supply [`property`](PropertyProvider::property); the
/// composition-level queries are derived from it. Every call is a fresh lookup,
/// nothing is cached here.
pub trait PropertyProvider: Send + Sync {
    /// Raw value of a named property for one element
    fn property(&self, element: Element, name: &str) -> Result<PropertyValue, LookupError>;

    /// One value per distinct element, ordered by ascending electronegativity
    /// (ties by ascending atomic number). Values keyed by oxidation state are
    /// resolved against the composition's decoration.
    fn element_values(
        &self,
        composition: &Composition,
        name: &str,
    ) -> Result<Vec<(Element, PropertyValue)>, LookupError> {
        let mut ordered = composition
            .elements()
            .map(|element| Ok((self.scalar(element, ELECTRONEGATIVITY)?, element)))
            .collect::<Result<Vec<_>, LookupError>>()?;
        ordered.sort_by(|(xa, a), (xb, b)| xa.total_cmp(xb).then(a.cmp(b)));

        ordered
            .into_iter()
            .map(|(_, element)| {
                let value = self.property(element, name)?;
                Ok((element, resolve_oxidation(value, element, composition, name)?))
            })
            .collect()
    }

    /// Per-atom series: [`element_values`](PropertyProvider::element_values)
    /// with each element repeated `trunc(amount)` times
    fn series(&self, composition: &Composition, name: &str) -> Result<PropertySeries, LookupError> {
        let mut entries = Vec::new();
        for (element, value) in self.element_values(composition, name)? {
            let count = composition.amount(element).trunc() as usize;
            entries.extend(std::iter::repeat((element, value)).take(count));
        }
        Ok(PropertySeries::new(name, entries))
    }

    /// Scalar value of a property for one element
    fn scalar(&self, element: Element, name: &str) -> Result<f64, LookupError> {
        self.property(element, name)?
            .as_scalar()
            .ok_or_else(|| LookupError::NotScalar {
                element,
                property: name.to_string(),
            })
    }
}

fn resolve_oxidation(
    value: PropertyValue,
    element: Element,
    composition: &Composition,
    name: &str,
) -> Result<PropertyValue, LookupError> {
    let PropertyValue::ByOxidationState(by_state) = value else {
        return Ok(value);
    };

    let state = composition
        .oxidation_state(element)
        .ok_or_else(|| LookupError::OxidationStateRequired {
            element,
            property: name.to_string(),
        })?;

    by_state
        .get(&state)
        .map(|v| PropertyValue::Scalar(*v))
        .ok_or_else(|| LookupError::MissingValue {
            element,
            property: format!("{name}[{state:+}]"),
        })
}
