//! # Clipflow Server
//!
//! HTTP API server for the Clipflow video platform.
//!
//! ## Overview
//!
//! This service owns the history surface of the platform:
//!
//! - **Watch History**: per-user record of played videos and last-known
//!   progress, with idempotent upserts keyed on (user, video)
//! - **Currently Watching**: a derived signal from the most recent history
//!   entry (recency window + incompleteness), nothing persisted
//! - **Search History**: per-user recent keywords, bounded to the 20 most
//!   recently used
//!
//! ## Architecture
//!
//! The server is built on Axum and uses:
//! - PostgreSQL for persistent storage (via `clipflow-core` repositories)
//! - Bearer-token authentication resolved to a user per request
//! - `tracing` for structured request and error logs

pub mod errors;
pub mod history;
pub mod infra;
pub mod routes;
pub mod users;

pub use errors::{AppError, AppResult};
pub use infra::app_state::AppState;
pub use infra::config::Config;
