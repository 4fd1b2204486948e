//! Device map (JSON object of device records) file reading

use crate::error::{Error, json_type_name};
use crate::etl::Extractor;

use eyre::Result;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// One entry of the device map: the identifier key and its record value.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRecord {
    pub key: String,
    pub value: Value,
}

impl DeviceRecord {
    pub fn new(key: impl Into<String>, value: Value) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Read a device map from a JSON file
///
/// The file must hold a single JSON object, e.g.
/// `{"<id>": {"info": {"devEUI": "..."}}, ...}`. Records come back in
/// document order.
pub struct DeviceMapReader {
    path: PathBuf,
}

impl DeviceMapReader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Read and parse the whole file into device records
    pub fn read(&self) -> Result<Vec<DeviceRecord>, Error> {
        log::debug!("Reading device map {}", self.path.display());

        let bytes = std::fs::read(&self.path).map_err(|source| Error::NotFound {
            path: self.path.clone(),
            source,
        })?;

        let document: Value = serde_json::from_slice(&bytes).map_err(|source| Error::Parse {
            path: self.path.clone(),
            source,
        })?;

        match document {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(key, value)| DeviceRecord { key, value })
                .collect()),
            other => Err(Error::RootType {
                path: self.path.clone(),
                found: json_type_name(&other),
            }),
        }
    }
}

impl Extractor for DeviceMapReader {
    type Item = DeviceRecord;

    fn extract(&self) -> Result<Vec<Self::Item>> {
        Ok(self.read()?)
    }
}
