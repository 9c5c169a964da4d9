//! State management module
//!
//! This module holds the session-scoped storage used to carry state across
//! route transitions.

pub mod session;

pub use session::{MemorySessionStore, SessionStore};
