//! Error types

mod model;
mod table;

pub use model::*;
pub use table::*;
