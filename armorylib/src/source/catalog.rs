//! Catalog loading from a local file or an HTTP URL.
//!
//! A catalog payload is either a bare JSON array of records or an object
//! carrying that array under `items`. It is read once and then only borrowed.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use log::info;

use crate::data::item::ItemRecord;
use crate::error::ArmoryError;
use crate::Result;

/// Default catalog location, relative to the working directory.
pub const DEFAULT_CATALOG: &str = "items.json";

/// Where the catalog is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// A file on disk
    File(PathBuf),
    /// An `http://` or `https://` URL, fetched with a single GET
    Url(String),
}

impl CatalogSource {
    /// Classify a location string by its scheme prefix.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            CatalogSource::Url(location.to_string())
        } else {
            CatalogSource::File(PathBuf::from(location))
        }
    }

    /// Read the catalog.
    pub fn load(&self) -> Result<Catalog> {
        let catalog = match self {
            CatalogSource::File(path) => load_file(path)?,
            CatalogSource::Url(url) => fetch_url(url)?,
        };
        info!("loaded {} item records from {}", catalog.len(), self);
        Ok(catalog)
    }
}

impl Default for CatalogSource {
    fn default() -> Self {
        CatalogSource::File(PathBuf::from(DEFAULT_CATALOG))
    }
}

impl FromStr for CatalogSource {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::File(path) => write!(f, "{}", path.display()),
            CatalogSource::Url(url) => f.write_str(url),
        }
    }
}

/// The full, immutable set of item records.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<ItemRecord>,
}

impl Catalog {
    pub fn new(items: Vec<ItemRecord>) -> Self {
        Self { items }
    }

    /// Parse a catalog payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(payload)?;
        Self::from_value(value)
    }

    /// Parse an already-decoded payload.
    ///
    /// A record that does not fit the item schema fails the whole catalog,
    /// with its position in the array named in the error.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let records = match value {
            serde_json::Value::Array(records) => records,
            serde_json::Value::Object(mut fields) => match fields.remove("items") {
                Some(serde_json::Value::Array(records)) => records,
                Some(other) => {
                    return Err(ArmoryError::MalformedCatalog(format!(
                        "`items` must be an array, found {}",
                        json_kind(&other)
                    )))
                }
                None => {
                    return Err(ArmoryError::MalformedCatalog(
                        "object payload has no `items` array".to_string(),
                    ))
                }
            },
            other => {
                return Err(ArmoryError::MalformedCatalog(format!(
                    "expected an array of items or an object with an `items` array, found {}",
                    json_kind(&other)
                )))
            }
        };

        let items = records
            .into_iter()
            .enumerate()
            .map(|(position, record)| {
                serde_json::from_value(record)
                    .map_err(|source| ArmoryError::InvalidRecord { position, source })
            })
            .collect::<Result<Vec<ItemRecord>>>()?;
        Ok(Self::new(items))
    }

    /// All records, sentinel and template records included.
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

fn load_file(path: &Path) -> Result<Catalog> {
    let payload = std::fs::read_to_string(path).map_err(|e| ArmoryError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    Catalog::from_json(&payload)
}

fn fetch_url(url: &str) -> Result<Catalog> {
    let response = ureq::get(url)
        .set("User-Agent", concat!("armory/", env!("CARGO_PKG_VERSION")))
        .call()
        .map_err(|e| ArmoryError::Fetch {
            url: url.to_string(),
            message: e.to_string(),
        })?;
    let payload = response.into_string().map_err(|e| ArmoryError::Fetch {
        url: url.to_string(),
        message: e.to_string(),
    })?;
    Catalog::from_json(&payload)
}

/// Load a catalog from a location string (path or URL).
pub fn load_catalog(location: &str) -> Result<Catalog> {
    CatalogSource::parse(location).load()
}
