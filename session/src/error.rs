//! Error types for the `session` crate.
//!
//! Follows the same pattern as service::error with a root Error struct and error kind enums.

use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Credentials(CredentialsErrorKind),
    Http(HttpErrorKind),
    Storage,
}

/// Errors from reading a credential pair.
#[derive(Debug, PartialEq)]
pub enum CredentialsErrorKind {
    InvalidFormat,
    MissingUsername,
}

/// Errors from the login exchange itself. A rejected login is not an error;
/// see `LoginOutcome::Rejected`.
#[derive(Debug, PartialEq)]
pub enum HttpErrorKind {
    BuilderFailed,
    Network,
    InvalidResponse,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Credentials(kind) => write!(f, "Credentials error: {:?}", kind),
            ErrorKind::Http(kind) => write!(f, "HTTP error: {:?}", kind),
            ErrorKind::Storage => write!(f, "Storage error"),
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
    pub fn credentials(kind: CredentialsErrorKind) -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Credentials(kind),
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let error_kind = if err.is_builder() {
            ErrorKind::Http(HttpErrorKind::BuilderFailed)
        } else if err.is_decode() {
            ErrorKind::Http(HttpErrorKind::InvalidResponse)
        } else {
            ErrorKind::Http(HttpErrorKind::Network)
        };
        Error {
            source: Some(Box::new(err)),
            error_kind,
        }
    }
}

impl From<service::Error> for Error {
    fn from(err: service::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Storage,
        }
    }
}
