//! Presentation model for a service-mesh dashboard
//!
//! A sortable/filterable table engine, the metrics column schema built on top
//! of it, and the small models around it (error banner, CLI query preview,
//! page visibility). Nothing here draws anything: front ends consume the
//! [`table::TableView`] and [`table::Cell`] values produced by the engine.

pub mod banner;
pub mod cli_query;
pub mod config;
pub mod error;
pub mod format;
pub mod link;
pub mod model;
pub mod schema;
pub mod table;
pub mod visibility;

pub use config::TableConfig;
pub use link::{Link, LinkBuilder, PrefixedLinks};
