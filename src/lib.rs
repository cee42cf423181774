//! Bestiary - a terminal field guide to a remote creature catalog
//!
//! Browses the catalog's paginated areas, surveys them for creatures, and
//! records catches for the session, with a time-bounded response cache in
//! front of every catalog request.
//!
//! # Modules
//! - `cache`: TTL response cache shared with a background sweeper
//! - `catalog`: Wire types and the HTTP client for the catalog
//! - `collection`: The session's caught creatures
//! - `config`: Environment-driven configuration
//! - `error`: Unified error type
//! - `repl`: The interactive prompt and its commands
//! - `tasks`: Background tasks (the cache sweeper)

pub mod cache;
pub mod catalog;
pub mod collection;
pub mod config;
pub mod error;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use config::Config;
pub use error::{Error, Result};
pub use tasks::SweeperHandle;
