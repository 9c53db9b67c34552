//! # ombudsman-core
//!
//! Core types for the ombudsman desk: [`Message`] and its closed vocabularies, the
//! public-form payload, admin updates, dashboard counters, the error type and tracing
//! initialization. [`Message`] implements [`pagination::Record`] so the dashboard can page
//! and filter it client-side.

pub mod error;
pub mod logger;
pub mod message;
pub mod stats;
pub mod types;


pub use error::{OmbudsmanError, Result};
pub use logger::init_tracing;
pub use message::{Message, MessageFilter, MessageFilterKey, MessageUpdate, NewMessage};
pub use stats::MessageStats;
pub use types::{parse_filter, MessageStatus, MessageType};
