//! HTTP boundary for the zalgo text service.
//!
//! # Responsibility
//! - Map HTTP requests onto `zalgo_core` services.
//! - Keep transport concerns (extraction, content types, limits) out of core.
//!
//! # Invariants
//! - Handlers never panic on client input.
//! - The JSON API answers every failure with the same generic 400 body.

pub mod config;
pub mod routes;

pub use config::ServerConfig;
pub use routes::configure;
