use feed::error::{ConnectionErrorKind, ErrorKind};
use feed::render::DisplayZone;
use feed::table::Row;
use feed::{ActivityRenderer, Document, Entry, FeedSettings, FeedView, LiveConnection, ACTIVITY_TABLE_ID};
use futures_util::SinkExt;
use service::alert::RecordingAlert;
use service::storage::{MemoryTokenStore, ACCESS_TOKEN_KEY};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::Message;

#[derive(Default)]
struct RecordingView {
    entries: Vec<Entry>,
}

impl FeedView for RecordingView {
    fn show(&mut self, entry: &Entry) {
        self.entries.push(entry.clone());
    }
}

/// Accepts one socket, sends `frames` in order, then closes. Resolves to the
/// request URI the client connected with.
async fn serve_once(frames: Vec<Message>) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    let (uri_tx, uri_rx) = oneshot::channel();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut socket = tokio_tungstenite::accept_hdr_async(
            stream,
            |request: &Request, response: Response| -> Result<Response, ErrorResponse> {
                let _ = uri_tx.send(request.uri().to_string());
                Ok(response)
            },
        )
        .await
        .unwrap();

        for frame in frames {
            socket.send(frame).await.unwrap();
        }
        socket.close(None).await.ok();
    });

    (base_url, uri_rx)
}

fn renderer_for(base_url: &str) -> ActivityRenderer {
    let store = MemoryTokenStore::with_entry(ACCESS_TOKEN_KEY, "admin-jwt");
    let settings = FeedSettings::new(base_url, "/ws/admin/activity").with_zone(DisplayZone::utc());

    ActivityRenderer::init(
        Document::new().with_table_body(ACTIVITY_TABLE_ID),
        settings,
        &store,
        &RecordingAlert::new(),
    )
    .unwrap()
}

#[tokio::test]
async fn test_feed_renders_stream_until_socket_closes() {
    let (base_url, uri_rx) = serve_once(vec![
        Message::Text(
            r#"{"topic":"user.activity","event":{"event_type":"task.created","event_id":"e1","occurred_at":"2024-01-01T10:00:00Z","actor":{"email":"a@x.com"},"request_id":"r1"}}"#
                .to_string(),
        ),
        Message::Text("{not json".to_string()),
        Message::Binary(vec![1, 2, 3]),
        Message::Text(r#"{"event_type":"user.deleted","event_id":"x"}"#.to_string()),
        Message::Text(
            r#"{"event":{"event_type":"profile.updated","event_id":"e2","payload":{"changes":{"a":1,"b":2}}}}"#
                .to_string(),
        ),
    ])
    .await;

    let mut renderer = renderer_for(&base_url);
    let connection = renderer.connect().await.unwrap();
    let mut view = RecordingView::default();

    renderer.run(connection, &mut view).await;

    assert_eq!(uri_rx.await.unwrap(), "/ws/admin/activity?token=admin-jwt");

    assert_eq!(view.entries.len(), 2);
    assert_eq!(view.entries[0].summary.action, "Created task");
    assert_eq!(view.entries[1].summary.changes, "a, b");

    let table = renderer.table().unwrap();
    assert_eq!(table.len(), 4);
    let order: Vec<_> = table
        .rows()
        .filter_map(|row| match row {
            Row::Summary(summary) => Some(summary.toggle_target.clone()),
            Row::Detail(_) => None,
        })
        .collect();
    assert_eq!(order, vec!["details-e2", "details-e1"]);
}

#[tokio::test]
async fn test_connection_yields_text_frames_in_order() {
    let (base_url, _uri_rx) = serve_once(vec![
        Message::Text("first".to_string()),
        Message::Ping(vec![9]),
        Message::Text("second".to_string()),
    ])
    .await;

    let url = feed::live_url(&base_url, "/ws/admin/activity", "t").unwrap();
    let mut connection = LiveConnection::open(&url).await.unwrap();

    assert_eq!(connection.next_message().await.as_deref(), Some("first"));
    assert_eq!(connection.next_message().await.as_deref(), Some("second"));
    assert_eq!(connection.next_message().await, None);
}

#[tokio::test]
async fn test_connection_refused_is_a_connection_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let url = feed::live_url(&format!("http://{}", addr), "/ws/admin/activity", "t").unwrap();
    let err = LiveConnection::open(&url).await.err().unwrap();

    assert_eq!(
        err.error_kind,
        ErrorKind::Connection(ConnectionErrorKind::Handshake)
    );
}

#[tokio::test]
async fn test_feed_connects_at_most_once() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let mut renderer = renderer_for(&format!("http://{}", addr));

    let first = renderer.connect().await.err().unwrap();
    let second = renderer.connect().await.err().unwrap();

    assert_eq!(
        first.error_kind,
        ErrorKind::Connection(ConnectionErrorKind::Handshake)
    );
    assert_eq!(
        second.error_kind,
        ErrorKind::Connection(ConnectionErrorKind::AlreadyOpened)
    );
}
