//! Render-ready table output.

use crate::config::Padding;

use super::cell::Cell;
use super::column::Alignment;
use super::sort::SortOrder;

/// One header cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderCell {
    /// Column id.
    pub id: String,
    /// Header text.
    pub title: String,
    /// Optional tooltip.
    pub tooltip: Option<String>,
    /// Content alignment.
    pub alignment: Alignment,
    /// Whether activating the header sorts the table.
    pub sortable: bool,
    /// Whether this is the active sort column.
    pub active: bool,
    /// Arrow direction: the current order when active, else the column default.
    pub direction: SortOrder,
}

/// One displayed row.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRow {
    /// Stable row key.
    pub key: String,
    /// Optional tooltip for the whole row.
    pub tooltip: Option<String>,
    /// One cell per column, in column order.
    pub cells: Vec<Cell>,
}

/// Table body.
#[derive(Debug, Clone, PartialEq)]
pub enum TableBody {
    /// No rows to show. Renderers must draw an explicit empty-state card
    /// instead of an empty body.
    Empty,
    /// Rows in display order.
    Rows(Vec<RenderedRow>),
}

impl TableBody {
    /// Returns `true` for the empty state.
    pub fn is_empty(&self) -> bool {
        matches!(self, TableBody::Empty)
    }

    /// Displayed rows (none for the empty state).
    pub fn rows(&self) -> &[RenderedRow] {
        match self {
            TableBody::Empty => &[],
            TableBody::Rows(rows) => rows,
        }
    }
}

/// Filter toolbar shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toolbar {
    /// Table title.
    pub title: String,
    /// Whether the filter input is open (otherwise the filter icon is shown).
    pub filter_open: bool,
}

/// Everything a renderer needs to draw a table.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// Present when filtering is offered.
    pub toolbar: Option<Toolbar>,
    /// Header row.
    pub headers: Vec<HeaderCell>,
    /// Body or empty state.
    pub body: TableBody,
    /// Spacing hint.
    pub padding: Padding,
}
