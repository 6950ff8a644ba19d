use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use events::EventLabels;
use feed::{ActivityRenderer, Document, FeedSettings, TerminalView, ACTIVITY_TABLE_ID};
use log::{error, info};
use service::alert::{Alert, TerminalAlert};
use service::config::{self, Config};
use service::logging::Logger;
use service::storage::{FileTokenStore, TokenStore};
use session::{Credentials, SessionInitiator, SubmitOutcome};
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Admin login and live activity feed", long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Log in as an admin, store the session token and open the activity feed
    Login {
        /// Admin credentials (format: username:password)
        #[arg(long, env = "ADMIN_CREDENTIALS", hide_env_values = true)]
        credentials: String,
    },
    /// Open the activity feed with the token already in storage
    Activity,
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();
    let cli = Cli::parse();
    let config = cli.config;
    Logger::init_logger(&config);

    let labels = EventLabels::select(&config.event_types)?;
    let store: Arc<dyn TokenStore> = Arc::new(FileTokenStore::new(config.storage_file()));
    let alert: Arc<dyn Alert> = Arc::new(TerminalAlert);

    let route = match cli.command {
        Command::Login { credentials } => {
            let credentials = Credentials::parse(&credentials)?;
            let initiator = SessionInitiator::new(
                reqwest::Client::new(),
                config.login_url(),
                config.landing_route(),
                Arc::clone(&store),
                Arc::clone(&alert),
            );

            match initiator.submit(&credentials).await {
                Ok(SubmitOutcome::Redirect(route)) => route,
                Ok(SubmitOutcome::Rejected) => std::process::exit(1),
                Err(e) => {
                    error!("Login request failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Command::Activity => config.landing_route().to_string(),
    };

    navigate(&config, &route, labels, store.as_ref(), alert.as_ref()).await
}

async fn navigate(
    config: &Config,
    route: &str,
    labels: EventLabels,
    store: &dyn TokenStore,
    alert: &dyn Alert,
) -> Result<()> {
    if route != config.landing_route() {
        bail!("no page is served at route {route}");
    }

    info!("Opening activity feed at {route}");

    let settings = FeedSettings::new(config.base_url(), config.ws_path()).with_labels(labels);
    let document = Document::new().with_table_body(ACTIVITY_TABLE_ID);

    let mut renderer = match ActivityRenderer::init(document, settings, store, alert) {
        Ok(renderer) => renderer,
        Err(e) => {
            error!("Activity feed could not start: {e}");
            std::process::exit(1);
        }
    };

    let connection = renderer.connect().await?;
    let mut view = TerminalView::new(config.expand_details);
    renderer.run(connection, &mut view).await;

    info!("Activity feed closed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_takes_colon_separated_credentials() {
        let cli = Cli::try_parse_from([
            "admin_activity_feed",
            "--base-url",
            "https://admin.example.com",
            "login",
            "--credentials",
            "admin@example.com:pa:ss",
        ])
        .unwrap();

        let Command::Login { credentials } = cli.command else {
            panic!("expected the login subcommand");
        };
        let credentials = Credentials::parse(&credentials).unwrap();

        assert_eq!(credentials.username, "admin@example.com");
        assert_eq!(credentials.password(), "pa:ss");
        assert_eq!(cli.config.base_url(), "https://admin.example.com");
    }

    #[test]
    fn test_activity_needs_no_credentials() {
        let cli = Cli::try_parse_from(["admin_activity_feed", "activity"]).unwrap();

        assert!(matches!(cli.command, Command::Activity));
    }
}
