//! Generic sortable and filterable table.
//!
//! Columns describe how to read, sort, filter and render a value; the
//! [`TableEngine`] owns the sort and filter state and turns rows into a
//! [`TableView`]. State changes are plain functions on [`SortState`] and
//! [`FilterState`] returning the next state, so they can be tested without
//! any renderer.

mod cell;
mod column;
mod engine;
mod filter;
mod row;
mod sort;
mod view;

pub use cell::{Cell, ErrorIndicator, Health};
pub use column::{Alignment, Column, FilterText, Renderer, Sorter};
pub use engine::{RowKeyFn, TableEngine, compute_display_rows};
pub use filter::{FilterState, filter_pattern};
pub use row::{TableRow, field_text, value_at_path};
pub use sort::{SortKey, SortOrder, SortState};
pub use view::{HeaderCell, RenderedRow, TableBody, TableView, Toolbar};
