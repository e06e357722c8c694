//! Row model of the metrics tables.

mod metrics;
mod resource;

pub use metrics::*;
pub use resource::*;
