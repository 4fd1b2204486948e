//! Error types for devEUI extraction.
//!
//! Pipeline stages return `eyre::Result`, but every failure they raise is an
//! [`Error`] so callers can recover the category with
//! `report.downcast_ref::<Error>()`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure category, independent of the paths and sources attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input file missing or unreadable.
    NotFound,
    /// Input is not valid JSON.
    Parse,
    /// Input has the wrong shape.
    Type,
    /// Output could not be created or written.
    Io,
}

/// The error type for devEUI extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// The input file does not exist or cannot be read.
    #[error("cannot read device map {path}: {source}")]
    NotFound {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The input file is not valid JSON.
    #[error("invalid JSON in {path}: {source}")]
    Parse {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The document root is not an object.
    #[error("expected a JSON object at the root of {path}, found {found}")]
    RootType {
        /// Path to the input file.
        path: PathBuf,
        /// JSON type actually found.
        found: &'static str,
    },

    /// A device record is not an object.
    #[error("expected device record '{key}' to be a JSON object, found {found}")]
    RecordType {
        /// Key of the offending record.
        key: String,
        /// JSON type actually found.
        found: &'static str,
    },

    /// The output file cannot be created or written.
    #[error("cannot write {path}: {source}")]
    Io {
        /// Path to the output file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// The failure category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFound { .. } => ErrorKind::NotFound,
            Error::Parse { .. } => ErrorKind::Parse,
            Error::RootType { .. } | Error::RecordType { .. } => ErrorKind::Type,
            Error::Io { .. } => ErrorKind::Io,
        }
    }

    /// The failure category of an `eyre` report, if it carries an [`Error`].
    pub fn kind_of(report: &eyre::Report) -> Option<ErrorKind> {
        report.downcast_ref::<Error>().map(Error::kind)
    }
}

/// Name of a JSON value's type, for error messages.
pub(crate) fn json_type_name(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
