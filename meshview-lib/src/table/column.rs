//! Column definitions.

use std::fmt;
use std::sync::Arc;

use super::cell::Cell;
use super::row::{TableRow, field_text};
use super::sort::{SortKey, SortOrder};

/// Extracts the sort key of a row.
pub type Sorter<T> = Arc<dyn Fn(&T) -> SortKey + Send + Sync>;
/// Extracts the text a row is filtered on.
pub type FilterText<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;
/// Produces the cell shown for a row.
pub type Renderer<T> = Arc<dyn Fn(&T) -> Cell + Send + Sync>;

/// Horizontal alignment for column content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Column configuration.
///
/// A column declares how to extract, sort, filter and render one value of a
/// row. Every capability is optional: a column without a sorter is not
/// sortable, one without a filter is ignored by text filtering, and one
/// without a renderer shows the raw value at its `data_index`.
///
/// # Examples
///
/// ```
/// use meshview_lib::table::{Column, SortKey, SortOrder};
///
/// struct Row {
///     name: String,
///     rps: f64,
/// }
///
/// let columns: Vec<Column<Row>> = vec![
///     Column::new("name", "Name").filter_by(|r: &Row| Some(r.name.clone())),
///     Column::new("rps", "RPS")
///         .numeric()
///         .sort_by(|r: &Row| SortKey::number(r.rps))
///         .default_order(SortOrder::Desc),
/// ];
/// assert!(columns[1].is_sortable());
/// ```
pub struct Column<T> {
    /// Explicit identity, for columns without a data index.
    pub key: Option<String>,
    /// Dotted path of the raw value in a row.
    pub data_index: Option<String>,
    /// Header text.
    pub title: String,
    /// Optional header tooltip.
    pub tooltip: Option<String>,
    /// Numeric columns are right aligned.
    pub is_numeric: bool,
    default_sort_order: Option<SortOrder>,
    sorter: Option<Sorter<T>>,
    filter: Option<FilterText<T>>,
    render: Option<Renderer<T>>,
}

impl<T> Column<T> {
    /// Create a column reading `data_index`.
    pub fn new(data_index: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: None,
            data_index: Some(data_index.into()),
            title: title.into(),
            tooltip: None,
            is_numeric: false,
            default_sort_order: None,
            sorter: None,
            filter: None,
            render: None,
        }
    }

    /// Create a column identified by `key` that reads no raw value.
    pub fn keyed(key: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            data_index: None,
            ..Self::new(String::new(), title)
        }
    }

    /// Mark the column as numeric.
    pub fn numeric(mut self) -> Self {
        self.is_numeric = true;
        self
    }

    /// Set the header tooltip.
    pub fn tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Direction used when the column becomes the active sort column.
    pub fn default_order(mut self, order: SortOrder) -> Self {
        self.default_sort_order = Some(order);
        self
    }

    /// Make the column sortable by the given key extractor.
    pub fn sort_by(mut self, sorter: impl Fn(&T) -> SortKey + Send + Sync + 'static) -> Self {
        self.sorter = Some(Arc::new(sorter));
        self
    }

    /// Include the column in text filtering.
    pub fn filter_by(
        mut self,
        filter: impl Fn(&T) -> Option<String> + Send + Sync + 'static,
    ) -> Self {
        self.filter = Some(Arc::new(filter));
        self
    }

    /// Render cells with the given function.
    pub fn render_with(mut self, render: impl Fn(&T) -> Cell + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    /// Identity of the column: its key, or else its data index.
    pub fn id(&self) -> &str {
        self.key
            .as_deref()
            .or(self.data_index.as_deref())
            .unwrap_or_default()
    }

    /// Content alignment.
    pub fn alignment(&self) -> Alignment {
        if self.is_numeric {
            Alignment::Right
        } else {
            Alignment::Left
        }
    }

    /// Direction used when the column becomes active. Defaults to ascending.
    pub fn default_sort_order(&self) -> SortOrder {
        self.default_sort_order.unwrap_or_default()
    }

    /// Returns `true` if the column has a sorter.
    pub fn is_sortable(&self) -> bool {
        self.sorter.is_some()
    }

    /// Returns `true` if the column takes part in text filtering.
    pub fn is_filterable(&self) -> bool {
        self.filter.is_some()
    }

    /// The sort key extractor.
    pub fn sorter(&self) -> Option<&Sorter<T>> {
        self.sorter.as_ref()
    }

    /// Text of `row` used for filtering, if the column is filterable.
    pub fn filter_text(&self, row: &T) -> Option<String> {
        self.filter.as_ref().and_then(|filter| filter(row))
    }
}

impl<T: TableRow> Column<T> {
    /// Cell shown for `row`: the renderer's output, else the raw value.
    pub fn render_cell(&self, row: &T) -> Cell {
        if let Some(render) = &self.render {
            return render(row);
        }
        self.data_index
            .as_deref()
            .and_then(|path| row.field(path))
            .and_then(|value| field_text(&value))
            .into()
    }
}

impl<T> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            data_index: self.data_index.clone(),
            title: self.title.clone(),
            tooltip: self.tooltip.clone(),
            is_numeric: self.is_numeric,
            default_sort_order: self.default_sort_order,
            sorter: self.sorter.clone(),
            filter: self.filter.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for Column<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("id", &self.id())
            .field("title", &self.title)
            .field("is_numeric", &self.is_numeric)
            .field("default_sort_order", &self.default_sort_order())
            .field("sortable", &self.is_sortable())
            .field("filterable", &self.is_filterable())
            .field("renders", &self.render.is_some())
            .finish()
    }
}
