//! Renderer-neutral cell content.

use crate::link::Link;

/// Classification of a success rate, used to color gauges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Health {
    /// No data.
    Unknown,
    /// Below 90%.
    Poor,
    /// Between 90% and 95%.
    Warning,
    /// 95% and above.
    Good,
}

impl Health {
    /// Classify a success rate in `[0, 1]`.
    pub fn from_success_rate(rate: Option<f64>) -> Self {
        match rate {
            None => Health::Unknown,
            Some(r) if r.is_nan() => Health::Unknown,
            Some(r) if r < 0.9 => Health::Poor,
            Some(r) if r < 0.95 => Health::Warning,
            Some(_) => Health::Good,
        }
    }
}

/// Marker attached to a cell whose row reported errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorIndicator {
    /// Name of the resource the errors belong to.
    pub resource_name: String,
    /// Type of the resource the errors belong to.
    pub resource_type: String,
    /// Number of error entries.
    pub count: usize,
}

/// What a column shows for one row.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Nothing at all is rendered; not even a placeholder.
    Empty,
    /// Plain text.
    Text(String),
    /// A link.
    Link(Link),
    /// A labelled ratio (success rate mini chart).
    Gauge {
        /// Formatted value.
        label: String,
        /// Ratio in `[0, 1]`, if known.
        ratio: Option<f64>,
        /// Classification used for coloring.
        health: Health,
    },
    /// Content followed by an inline error indicator.
    Flagged {
        /// The regular content.
        content: Box<Cell>,
        /// The error marker.
        errors: ErrorIndicator,
    },
}

impl Cell {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Returns `true` if nothing is rendered for this cell.
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Text a plain renderer would print for this cell.
    pub fn plain_text(&self) -> String {
        match self {
            Cell::Empty => String::new(),
            Cell::Text(text) => text.clone(),
            Cell::Link(link) => link.label.clone(),
            Cell::Gauge { label, .. } => label.clone(),
            Cell::Flagged { content, .. } => content.plain_text(),
        }
    }

    /// The link carried by this cell, if any.
    pub fn link(&self) -> Option<&Link> {
        match self {
            Cell::Link(link) => Some(link),
            Cell::Flagged { content, .. } => content.link(),
            _ => None,
        }
    }
}

impl From<Link> for Cell {
    fn from(link: Link) -> Self {
        Cell::Link(link)
    }
}

impl From<Option<String>> for Cell {
    fn from(value: Option<String>) -> Self {
        value.map_or(Cell::Empty, Cell::Text)
    }
}
