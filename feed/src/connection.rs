use futures_util::stream::StreamExt;
use log::*;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::Message};
use url::Url;

use crate::error::{Error, InitializationErrorKind};

/// Builds the activity socket URL for the backend at `base_url`.
///
/// The socket is reached on the same host as the HTTP API, over `wss` when
/// the API is served over https and `ws` otherwise. The session token travels
/// as the `token` query parameter.
pub fn live_url(base_url: &str, path: &str, token: &str) -> Result<Url, Error> {
    let mut url = Url::parse(base_url)?;

    let scheme = match url.scheme() {
        "https" | "wss" => "wss",
        _ => "ws",
    };
    url.set_scheme(scheme)
        .map_err(|_| Error::initialization(InitializationErrorKind::InvalidUrl))?;

    url.set_path(path);
    url.set_fragment(None);
    url.query_pairs_mut().clear().append_pair("token", token);

    Ok(url)
}

/// The single live connection of a feed. Text frames are forwarded in arrival
/// order; there is no reconnect once the socket closes.
pub struct LiveConnection {
    frames: mpsc::UnboundedReceiver<String>,
    _handle: tokio::task::JoinHandle<()>,
}

impl LiveConnection {
    pub async fn open(url: &Url) -> Result<Self, Error> {
        let (mut socket, _response) = connect_async(url.as_str()).await?;
        info!("Admin activity socket connected to {}{}", host_of(url), url.path());

        let (tx, rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(async move {
            loop {
                match socket.next().await {
                    Some(Ok(Message::Text(text))) => {
                        if tx.send(text).is_err() {
                            debug!("Activity feed dropped its receiver");
                            break;
                        }
                    }
                    Some(Ok(Message::Close(frame))) => {
                        debug!("Activity socket closed by server: {:?}", frame);
                        break;
                    }
                    Some(Ok(_)) => {
                        // Binary frames and ping/pong carry no events
                    }
                    Some(Err(e)) => {
                        warn!("Activity socket error: {}", e);
                        break;
                    }
                    None => {
                        debug!("Activity socket stream ended");
                        break;
                    }
                }
            }
        });

        Ok(Self {
            frames: rx,
            _handle: handle,
        })
    }

    /// Waits for the next text frame. `None` once the socket has closed and
    /// every received frame has been handed out.
    pub async fn next_message(&mut self) -> Option<String> {
        self.frames.recv().await
    }
}

// Keeps the token out of the logs.
fn host_of(url: &Url) -> String {
    match (url.host_str(), url.port()) {
        (Some(host), Some(port)) => format!("{}://{}:{}", url.scheme(), host, port),
        (Some(host), None) => format!("{}://{}", url.scheme(), host),
        _ => url.scheme().to_string(),
    }
}
