//! # obra-session
//!
//! Client-local persistence: a string key-value store (in memory or
//! SQLite), the [`Session`] object that replaces ambient login state, and
//! the hand-off of the last estimation result to the report screen.

pub mod handoff;
pub mod session;
pub mod store;

pub use handoff::EstimationHandoff;
pub use session::Session;
pub use store::{open_store, MemoryStore, SqliteStore};
