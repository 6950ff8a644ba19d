use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;
use std::path::{Path, PathBuf};

/// Default backend base URL used when `BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

const DEFAULT_LOGIN_PATH: &str = "/api/v1/auth/login/admin";
const DEFAULT_WS_PATH: &str = "/ws/admin/activity";
const DEFAULT_LANDING_ROUTE: &str = "/activity";
const DEFAULT_STORAGE_FILE: &str = ".admin_activity/storage.json";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Base URL of the backend serving the login API and the activity socket
    /// (e.g. http://localhost:8000). An https base URL selects wss for the socket.
    #[arg(short, long, env, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Path of the admin login endpoint, relative to the base URL.
    #[arg(long, env, default_value = DEFAULT_LOGIN_PATH)]
    login_path: String,

    /// Path of the admin activity WebSocket, relative to the base URL.
    #[arg(long, env, default_value = DEFAULT_WS_PATH)]
    ws_path: String,

    /// Route followed after a successful login.
    #[arg(long, env, default_value = DEFAULT_LANDING_ROUTE)]
    landing_route: String,

    /// File backing the persistent client storage that holds the session token.
    #[arg(long, env, default_value = DEFAULT_STORAGE_FILE)]
    storage_file: PathBuf,

    /// Restrict the activity feed to these event types (comma separated).
    /// All known event types are shown when left empty.
    #[arg(long, env, value_delimiter = ',', use_value_delimiter = true)]
    pub event_types: Vec<String>,

    /// Show the detail panel of every entry as soon as it is rendered.
    #[arg(long, env, default_value_t = false)]
    pub expand_details: bool,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

/// Loads variables from a `.env` file, if there is one, into the environment.
/// Call before parsing so `env` backed arguments see them.
pub fn load_dotenv() {
    dotenv().ok();
}

impl Config {
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Full URL of the admin login endpoint.
    pub fn login_url(&self) -> String {
        format!("{}{}", self.base_url(), self.login_path)
    }

    pub fn ws_path(&self) -> &str {
        &self.ws_path
    }

    pub fn landing_route(&self) -> &str {
        &self.landing_route
    }

    pub fn storage_file(&self) -> &Path {
        &self.storage_file
    }
}
