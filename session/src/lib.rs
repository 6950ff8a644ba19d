//! # session
//!
//! The admin login flow: submits a credential pair to the login endpoint,
//! persists the issued bearer token in client storage and tells the caller
//! where to go next.
//!
//! ```rust,ignore
//! let initiator = SessionInitiator::new(client, config.login_url(), config.landing_route(), store, alert);
//! match initiator.submit(&Credentials::parse("admin@example.com:secret")?).await? {
//!     SubmitOutcome::Redirect(route) => navigate(route),
//!     SubmitOutcome::Rejected => {} // alert already shown; the form stays usable
//! }
//! ```

pub mod credentials;
pub mod error;
pub mod initiator;
pub mod login;

pub use credentials::Credentials;
pub use error::{Error, ErrorKind};
pub use initiator::{SessionInitiator, SubmitOutcome};
pub use login::{login, AccessToken, LoginOutcome};
