//! Background Tasks Module
//!
//! Contains background tasks that run for the life of the session.
//!
//! # Tasks
//! - Cache sweep: removes stale response-cache entries on a fixed cadence

mod sweep;

pub use sweep::{spawn_sweeper, SweeperHandle};
