//! Elemental Property Data
//!
//! Provides the [`PropertyProvider`] interface consumed by featurizers, the
//! per-atom [`PropertySeries`] it produces, and [`ElementTable`], an in-memory
//! provider loadable from JSON, Magpie-style `.table` directories, or postcard
//! snapshots.

mod error;
mod loader;
mod provider;
mod series;
mod settings;
mod table;
mod value;

pub use error::{LookupError, TableError};
pub use provider::{PropertyProvider, ELECTRONEGATIVITY, OXIDATION_STATES};
pub use series::PropertySeries;
pub use settings::{TableConfig, TableFormat};
pub use table::ElementTable;
pub use value::PropertyValue;
