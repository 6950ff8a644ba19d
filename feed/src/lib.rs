//! Live admin activity feed.
//!
//! Subscribes to the admin activity WebSocket and keeps an append-only,
//! newest-first table of the events it knows how to display.
//!
//! # Message Flow
//!
//! 1. `ActivityRenderer::init` checks that the page has the activity table
//!    body and that client storage holds a session token, then builds the
//!    socket URL (`ws`/`wss` following the API's scheme, token as a query
//!    parameter)
//! 2. `ActivityRenderer::connect` opens the single live connection; a reader
//!    task forwards text frames over a channel
//! 3. `ActivityRenderer::run` handles frames one at a time:
//!    - decode the JSON, unwrap the envelope
//!    - drop anything whose `event_type` has no label
//!    - render a summary row and a collapsible detail row
//!    - insert both at the top of the table and hand them to the view
//!
//! Malformed frames are logged and skipped. Unknown event types are skipped
//! silently. When the socket closes the feed stops; there is no reconnect.
//!
//! # Modules
//!
//! - `connection`: socket URL construction and the live connection
//! - `render`: event to row formatting, including all placeholders
//! - `renderer`: startup checks and per-message handling
//! - `table`: the page's table bodies and their rows
//! - `view`: terminal output of inserted entries

pub mod connection;
pub mod error;
pub mod render;
pub mod renderer;
pub mod table;
pub mod view;

pub use connection::{live_url, LiveConnection};
pub use error::{Error, ErrorKind};
pub use renderer::{ActivityRenderer, FeedSettings};
pub use table::{Document, Entry, TableBody, ACTIVITY_TABLE_ID};
pub use view::{FeedView, TerminalView};
