//! Core library for the Clipflow video platform.
//!
//! Owns the history bounded context: domain rules for watch and search
//! history, repository ports, their Postgres implementations, and the
//! application services the HTTP layer is built on.

pub mod application;
pub mod database;
pub mod domain;
pub mod error;

pub use application::{AppUnitOfWork, HistoryService};
pub use domain::history::KeywordSubmission;
pub use error::{PlatformError, Result};
