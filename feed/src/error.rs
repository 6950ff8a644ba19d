//! Error types for the `feed` crate.

use std::error::Error as StdError;
use std::fmt;

#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Initialization(InitializationErrorKind),
    Connection(ConnectionErrorKind),
}

/// Reasons the feed refuses to start. Each one disables the feed for the
/// lifetime of the page.
#[derive(Debug, PartialEq)]
pub enum InitializationErrorKind {
    /// The named table body the feed renders into does not exist.
    MissingContainer(String),
    /// No session token in client storage.
    MissingToken,
    /// Client storage could not be read.
    Storage,
    /// The live connection URL could not be built from the base URL.
    InvalidUrl,
}

#[derive(Debug, PartialEq)]
pub enum ConnectionErrorKind {
    Handshake,
    /// The feed already used its one connection attempt.
    AlreadyOpened,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Initialization(InitializationErrorKind::MissingContainer(id)) => {
                write!(f, "Initialization error: {} not found", id)
            }
            ErrorKind::Initialization(kind) => write!(f, "Initialization error: {:?}", kind),
            ErrorKind::Connection(kind) => write!(f, "Connection error: {:?}", kind),
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
    pub fn initialization(kind: InitializationErrorKind) -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Initialization(kind),
        }
    }

    pub fn connection(kind: ConnectionErrorKind) -> Self {
        Error {
            source: None,
            error_kind: ErrorKind::Connection(kind),
        }
    }
}

impl From<service::Error> for Error {
    fn from(err: service::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Initialization(InitializationErrorKind::Storage),
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Initialization(InitializationErrorKind::InvalidUrl),
        }
    }
}

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: ErrorKind::Connection(ConnectionErrorKind::Handshake),
        }
    }
}
