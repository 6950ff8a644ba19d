use log::*;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::credentials::Credentials;
use crate::error::Error;

/// Bearer token issued by the login endpoint.
#[derive(Debug, Clone)]
pub struct AccessToken(SecretString);

impl AccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(SecretString::new(token.into()))
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

#[derive(Debug)]
pub enum LoginOutcome {
    Authenticated(AccessToken),
    /// The server answered with a non-success status. Every such status is
    /// treated as invalid credentials.
    Rejected(StatusCode),
}

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    token_type: Option<String>,
}

/// Exchanges `credentials` for an access token at `login_url`.
pub async fn login(
    client: &Client,
    login_url: &str,
    credentials: &Credentials,
) -> Result<LoginOutcome, Error> {
    debug!("POST {} as {}", login_url, credentials.username);

    let response = client
        .post(login_url)
        .json(&LoginRequest {
            username: &credentials.username,
            password: credentials.password(),
        })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Ok(LoginOutcome::Rejected(status));
    }

    let token_response: TokenResponse = response.json().await?;
    if let Some(token_type) = &token_response.token_type {
        trace!("Login issued a {} token", token_type);
    }

    Ok(LoginOutcome::Authenticated(AccessToken::new(
        token_response.access_token,
    )))
}
