//! Infrastructure shared by the login flow and the activity feed: configuration,
//! logging, persistent client storage and user-facing alerts.

pub mod alert;
pub mod config;
pub mod error;
pub mod logging;
pub mod storage;

pub use error::{Error, ErrorKind};
