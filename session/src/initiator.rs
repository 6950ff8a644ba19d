use log::*;
use reqwest::Client;
use service::alert::Alert;
use service::storage::{TokenStore, ACCESS_TOKEN_KEY};
use std::sync::Arc;

use crate::credentials::Credentials;
use crate::error::Error;
use crate::login::{login, LoginOutcome};

/// Shown when the login endpoint refuses the submitted credentials.
pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The token was stored; continue at this route.
    Redirect(String),
    /// The credentials were refused. Nothing was stored and the form can be
    /// submitted again.
    Rejected,
}

/// Drives the admin login form: one request per submission, token persisted
/// on success, alert on refusal.
pub struct SessionInitiator {
    client: Client,
    login_url: String,
    landing_route: String,
    store: Arc<dyn TokenStore>,
    alert: Arc<dyn Alert>,
}

impl SessionInitiator {
    pub fn new(
        client: Client,
        login_url: impl Into<String>,
        landing_route: impl Into<String>,
        store: Arc<dyn TokenStore>,
        alert: Arc<dyn Alert>,
    ) -> Self {
        Self {
            client,
            login_url: login_url.into(),
            landing_route: landing_route.into(),
            store,
            alert,
        }
    }

    pub async fn submit(&self, credentials: &Credentials) -> Result<SubmitOutcome, Error> {
        match login(&self.client, &self.login_url, credentials).await? {
            LoginOutcome::Authenticated(token) => {
                self.store.set(ACCESS_TOKEN_KEY, token.expose())?;
                info!("Admin {} logged in", credentials.username);
                Ok(SubmitOutcome::Redirect(self.landing_route.clone()))
            }
            LoginOutcome::Rejected(status) => {
                warn!("Login for {} rejected: {}", credentials.username, status);
                self.alert.alert(INVALID_CREDENTIALS);
                Ok(SubmitOutcome::Rejected)
            }
        }
    }
}
