use events::{extract_event, ActivityEvent, EventLabels};
use log::*;
use service::alert::Alert;
use service::storage::{TokenStore, ACCESS_TOKEN_KEY};
use url::Url;

use crate::connection::{live_url, LiveConnection};
use crate::error::{ConnectionErrorKind, Error, InitializationErrorKind};
use crate::render::{render_entry, DisplayZone};
use crate::table::{Document, Entry, TableBody, ACTIVITY_TABLE_ID};
use crate::view::FeedView;

/// Shown when the feed starts without a stored session token.
pub const TOKEN_MISSING: &str = "Admin token missing. Please login again.";

/// Where the feed connects and what it displays.
#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub base_url: String,
    pub ws_path: String,
    pub container_id: String,
    pub labels: EventLabels,
    pub zone: DisplayZone,
}

impl FeedSettings {
    pub fn new(base_url: impl Into<String>, ws_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ws_path: ws_path.into(),
            container_id: ACTIVITY_TABLE_ID.to_string(),
            labels: EventLabels::standard(),
            zone: DisplayZone::Local,
        }
    }

    pub fn with_labels(mut self, labels: EventLabels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_zone(mut self, zone: DisplayZone) -> Self {
        self.zone = zone;
        self
    }
}

/// Keeps a live, newest-first log of activity events in a page's table body.
pub struct ActivityRenderer {
    document: Document,
    container_id: String,
    labels: EventLabels,
    zone: DisplayZone,
    live_url: Url,
    connect_attempted: bool,
    unidentified: u64,
}

impl ActivityRenderer {
    /// Prepares the feed for `document`. Fails without touching the network
    /// when the table body is missing or no session token is stored.
    pub fn init(
        document: Document,
        settings: FeedSettings,
        store: &dyn TokenStore,
        alert: &dyn Alert,
    ) -> Result<Self, Error> {
        if document.table_body(&settings.container_id).is_none() {
            error!("{} not found", settings.container_id);
            return Err(Error::initialization(
                InitializationErrorKind::MissingContainer(settings.container_id),
            ));
        }

        let token = match store.get(ACCESS_TOKEN_KEY)? {
            Some(token) => token,
            None => {
                alert.alert(TOKEN_MISSING);
                return Err(Error::initialization(InitializationErrorKind::MissingToken));
            }
        };

        let live_url = live_url(&settings.base_url, &settings.ws_path, &token)?;

        Ok(Self {
            document,
            container_id: settings.container_id,
            labels: settings.labels,
            zone: settings.zone,
            live_url,
            connect_attempted: false,
            unidentified: 0,
        })
    }

    pub fn live_url(&self) -> &Url {
        &self.live_url
    }

    /// Opens the feed's one live connection. Only the first call connects;
    /// there is no reconnect, even after a failed handshake.
    pub async fn connect(&mut self) -> Result<LiveConnection, Error> {
        if self.connect_attempted {
            return Err(Error::connection(ConnectionErrorKind::AlreadyOpened));
        }
        self.connect_attempted = true;
        LiveConnection::open(&self.live_url).await
    }

    pub fn table(&self) -> Option<&TableBody> {
        self.document.table_body(&self.container_id)
    }

    pub fn table_mut(&mut self) -> Option<&mut TableBody> {
        self.document.table_body_mut(&self.container_id)
    }

    /// Handles one inbound frame. Returns the inserted entry, or `None` when
    /// the frame was discarded.
    pub fn handle_message(&mut self, text: &str) -> Option<Entry> {
        let message = match serde_json::from_str(text) {
            Ok(message) => message,
            Err(e) => {
                warn!("Invalid activity message: {}", e);
                return None;
            }
        };

        let event = match ActivityEvent::from_value(extract_event(message)) {
            Ok(event) => event,
            Err(e) => {
                warn!("Invalid activity message: {}", e);
                return None;
            }
        };

        let label = *self.labels.resolve(event.discriminator()?)?;
        let detail_id = self.detail_id(&event);
        let entry = render_entry(&event, &label, detail_id, self.zone);

        self.table_mut()?.prepend_entry(entry.clone());
        trace!("Rendered {} activity", label.kind);
        Some(entry)
    }

    /// Feeds every frame from `connection` through [`Self::handle_message`]
    /// until the socket closes, showing each inserted entry in `view`.
    pub async fn run(&mut self, mut connection: LiveConnection, view: &mut dyn FeedView) {
        while let Some(text) = connection.next_message().await {
            if let Some(entry) = self.handle_message(&text) {
                view.show(&entry);
            }
        }
        info!("Admin activity socket closed");
    }

    fn detail_id(&mut self, event: &ActivityEvent) -> String {
        match event.event_id.as_deref().filter(|id| !id.is_empty()) {
            Some(id) => format!("details-{}", id),
            None => {
                self.unidentified += 1;
                format!("details-unidentified-{}", self.unidentified)
            }
        }
    }
}
