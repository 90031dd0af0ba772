//! Element Table Configuration

use crate::error::TableError;
use crate::table::ElementTable;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variables `ELEMENT_DATA__<FIELD>` override file values
const ENV_PREFIX: &str = "ELEMENT_DATA";

/// On-disk form of an element table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableFormat {
    /// Single JSON document
    Json,
    /// Directory of `<Property>.table` files
    Magpie,
    /// postcard snapshot
    Postcard,
}

/// Where the element property table comes from
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// File or directory holding the table
    pub source: PathBuf,
    /// How to read `source`
    pub format: TableFormat,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from("data/magpie"),
            format: TableFormat::Magpie,
        }
    }
}

impl TableConfig {
    /// Read a TOML/JSON/YAML file (format from extension), then apply
    /// `ELEMENT_DATA__*` environment overrides
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()))
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load the configured table
    pub fn open(&self) -> Result<ElementTable, TableError> {
        info!("Opening element table {:?} from {}", self.format, self.source.display());
        match self.format {
            TableFormat::Json => ElementTable::from_json_file(&self.source),
            TableFormat::Magpie => ElementTable::from_magpie_dir(&self.source),
            TableFormat::Postcard => ElementTable::from_postcard_file(&self.source),
        }
    }
}
