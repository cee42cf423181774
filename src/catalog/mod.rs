//! Catalog Module
//!
//! Typed access to the remote creature catalog: the wire types the catalog
//! returns and the HTTP client that fetches them through the response cache.

mod client;
mod types;

pub use client::CatalogClient;
pub use types::{AreaDetail, AreaPage, AreaSummary, Creature, CreatureRef, StatValue};
