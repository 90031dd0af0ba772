//! Table Loaders
//!
//! Three on-disk forms are understood:
//! - JSON: `{"Property": {"Fe": 1.83, "Cl": [-1, 1], "O": {"-2": 1.26}}}`
//! - Magpie directory: one `<Property>.table` file per property, line `n` holding
//!   the value for atomic number `n`; list values are whitespace separated, a
//!   blank line is an empty list and `None` marks a missing value
//! - postcard snapshot of an [`ElementTable`]

use crate::error::TableError;
use crate::table::ElementTable;
use crate::value::PropertyValue;
use composition::Element;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

const MAGPIE_EXTENSION: &str = "table";

#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Scalar(f64),
    List(Vec<f64>),
    ByOxidationState(BTreeMap<String, f64>),
}

type RawTable = BTreeMap<String, BTreeMap<String, Option<RawValue>>>;

impl ElementTable {
    /// Parse a JSON table; `null` values are treated as missing
    pub fn from_json_str(json: &str) -> Result<Self, TableError> {
        let raw: RawTable = serde_json::from_str(json)?;
        let mut table = ElementTable::new();

        for (property, values) in raw {
            table.declare(&property);
            for (symbol, value) in values {
                let element: Element = symbol.parse()?;
                let value = match value {
                    None => continue,
                    Some(RawValue::Scalar(v)) => PropertyValue::Scalar(v),
                    Some(RawValue::List(vs)) => PropertyValue::List(vs),
                    Some(RawValue::ByOxidationState(map)) => {
                        PropertyValue::ByOxidationState(parse_oxidation_keys(map)?)
                    }
                };
                table.insert(&property, element, value);
            }
        }

        info!("Loaded element table with {} properties from JSON", table.len());
        Ok(table)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Load every `<Property>.table` file in a directory
    pub fn from_magpie_dir(dir: impl AsRef<Path>) -> Result<Self, TableError> {
        let dir = dir.as_ref();
        let io_err = |source| TableError::Io {
            path: dir.to_path_buf(),
            source,
        };

        let mut files = fs::read_dir(dir)
            .map_err(io_err)?
            .map(|entry| entry.map(|e| e.path()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(io_err)?;
        files.sort();

        let mut table = ElementTable::new();
        for path in files {
            if path.extension().and_then(|ext| ext.to_str()) != Some(MAGPIE_EXTENSION) {
                debug!("Skipping non-table file {}", path.display());
                continue;
            }
            let Some(property) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let contents = fs::read_to_string(&path).map_err(|source| TableError::Io {
                path: path.clone(),
                source,
            })?;
            load_magpie_property(&mut table, property, &contents, &path)?;
        }

        info!(
            "Loaded element table with {} properties from {}",
            table.len(),
            dir.display()
        );
        Ok(table)
    }

    /// Compact binary snapshot
    pub fn to_postcard(&self) -> Result<Vec<u8>, TableError> {
        Ok(postcard::to_allocvec(self)?)
    }

    pub fn from_postcard(bytes: &[u8]) -> Result<Self, TableError> {
        Ok(postcard::from_bytes(bytes)?)
    }

    pub fn from_postcard_file(path: impl AsRef<Path>) -> Result<Self, TableError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| TableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_postcard(&bytes)?;
        info!("Loaded element table with {} properties from snapshot", table.len());
        Ok(table)
    }
}

fn parse_oxidation_keys(map: BTreeMap<String, f64>) -> Result<BTreeMap<i32, f64>, TableError> {
    map.into_iter()
        .map(|(key, value)| {
            key.trim()
                .parse::<i32>()
                .map(|state| (state, value))
                .map_err(|_| TableError::InvalidOxidationKey(key))
        })
        .collect()
}

fn load_magpie_property(
    table: &mut ElementTable,
    property: &str,
    contents: &str,
    path: &Path,
) -> Result<(), TableError> {
    table.declare(property);

    for (idx, line) in contents.lines().enumerate() {
        let Some(element) = u8::try_from(idx + 1).ok().and_then(Element::from_atomic_number) else {
            warn!(
                "{}: ignoring lines beyond element {}",
                path.display(),
                Element::ALL.len()
            );
            break;
        };

        let line = line.trim();
        if line.eq_ignore_ascii_case("none") {
            continue;
        }

        let values = line
            .split_whitespace()
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| TableError::Malformed {
                file: path.to_path_buf(),
                line: idx + 1,
                reason: err.to_string(),
            })?;

        let value = match values.as_slice() {
            [single] => PropertyValue::Scalar(*single),
            _ => PropertyValue::List(values),
        };
        table.insert(property, element, value);
    }

    Ok(())
}
