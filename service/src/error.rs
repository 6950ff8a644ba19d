//! Error types for the `service` crate.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for the shared infrastructure.
/// Holds error kind and optional source for error chaining.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Storage(StorageErrorKind),
}

/// Errors from the persistent client storage.
#[derive(Debug, PartialEq)]
pub enum StorageErrorKind {
    Read,
    Write,
    Corrupt,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Storage(kind) => write!(f, "Storage error: {:?}", kind),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl Error {
    pub fn storage(kind: StorageErrorKind, source: impl StdError + Send + Sync + 'static) -> Self {
        Error {
            source: Some(Box::new(source)),
            error_kind: ErrorKind::Storage(kind),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::storage(StorageErrorKind::Corrupt, err)
    }
}
