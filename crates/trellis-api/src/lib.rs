//! trellis-api: the HTTP face of the Trellis graph store.
//!
//! Startup order matters here: connect, optionally reset-and-reseed,
//! discover the type domains, then bind the listener. Path validation
//! depends on the discovered sets, so no request is accepted before the
//! registry exists.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
