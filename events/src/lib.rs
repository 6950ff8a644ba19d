//! Activity event model for the admin activity feed.
//!
//! This crate describes what arrives on the admin activity socket and how it
//! is classified for display.
//!
//! # Architecture
//!
//! - **ActivityEvent**: one audit record as published upstream, with every
//!   optional field modelled as an `Option` and the untouched JSON kept for
//!   inspection
//! - **EventKind**: the discriminators the feed knows how to display
//! - **EventLabels**: immutable lookup from discriminator to action phrase and
//!   badge, built once at startup
//! - **envelope**: unwraps the different shapes the upstream wraps events in
//!
//! This crate has no dependencies on the other workspace crates.

pub mod activity;
pub mod envelope;
pub mod kind;
pub mod label;

pub use activity::{ActivityEvent, Actor, Meta};
pub use envelope::extract_event;
pub use kind::{EventKind, EventType};
pub use label::{Badge, EventLabel, EventLabels, UnknownEventType};
