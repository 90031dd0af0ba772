//! Property Values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Value of one property for one element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PropertyValue {
    /// Single number (atomic weight, electronegativity, ...)
    Scalar(f64),
    /// Small list of numbers (candidate oxidation states, ...)
    List(Vec<f64>),
    /// Number that depends on the element's oxidation state (ionic radius, ...)
    ByOxidationState(BTreeMap<i32, f64>),
}

impl PropertyValue {
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            PropertyValue::Scalar(value) => Some(*value),
            _ => None,
        }
    }

    /// List view; a scalar is a one-element list
    pub fn as_slice(&self) -> Option<&[f64]> {
        match self {
            PropertyValue::Scalar(value) => Some(std::slice::from_ref(value)),
            PropertyValue::List(values) => Some(values),
            PropertyValue::ByOxidationState(_) => None,
        }
    }
}

impl From<f64> for PropertyValue {
    fn from(value: f64) -> Self {
        PropertyValue::Scalar(value)
    }
}

impl From<Vec<f64>> for PropertyValue {
    fn from(values: Vec<f64>) -> Self {
        PropertyValue::List(values)
    }
}
