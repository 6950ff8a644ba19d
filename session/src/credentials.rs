use secrecy::{ExposeSecret, SecretString};

use crate::error::{CredentialsErrorKind, Error};

/// Admin login form contents.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::new(password.into()),
        }
    }

    /// Parses `username:password`. Only the first `:` separates the two, so
    /// passwords may contain colons.
    pub fn parse(input: &str) -> Result<Self, Error> {
        let (username, password) = input
            .split_once(':')
            .ok_or_else(|| Error::credentials(CredentialsErrorKind::InvalidFormat))?;

        if username.trim().is_empty() {
            return Err(Error::credentials(CredentialsErrorKind::MissingUsername));
        }

        Ok(Self::new(username, password))
    }

    pub fn password(&self) -> &str {
        self.password.expose_secret()
    }
}
