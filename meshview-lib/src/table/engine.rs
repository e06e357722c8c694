//! Table engine: sort and filter state plus the row pipeline.

use std::fmt;
use std::sync::Arc;

use log::{debug, trace};

use crate::config::TableConfig;
use crate::error::TableError;

use super::column::Column;
use super::filter::FilterState;
use super::row::TableRow;
use super::sort::SortState;
use super::view::{HeaderCell, RenderedRow, TableBody, TableView, Toolbar};

/// Derives a row key, overriding [`TableRow::key`].
pub type RowKeyFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Order and filter `rows` for display.
///
/// 1. Sort by the column named in `sort.order_by` when it has a sorter. The
///    sort is stable in both directions.
/// 2. When filtering is active, keep rows for which at least one filterable
///    column's text matches the pattern.
///
/// Returns a fresh sequence borrowing from `rows`; the input is untouched.
/// An empty input short-circuits before the sort column is resolved.
///
/// # Errors
///
/// [`TableError::UnknownSortColumn`] when `sort.order_by` names a column that
/// is not in `columns`.
pub fn compute_display_rows<'a, T>(
    rows: &'a [T],
    columns: &[Column<T>],
    sort: &SortState,
    filter: &FilterState,
) -> Result<Vec<&'a T>, TableError> {
    if rows.is_empty() {
        return Ok(Vec::new());
    }

    let mut display: Vec<&'a T> = rows.iter().collect();

    if let Some(order_by) = sort.order_by.as_deref() {
        let column = columns
            .iter()
            .find(|c| c.id() == order_by)
            .ok_or_else(|| TableError::unknown_sort_column(order_by))?;
        if column.is_sortable() {
            display = sort.sort_rows(&display, column);
        }
    }

    if let Some(pattern) = filter.regex()? {
        let filterable: Vec<&Column<T>> = columns.iter().filter(|c| c.is_filterable()).collect();
        display.retain(|row| {
            filterable.iter().any(|column| {
                column
                    .filter_text(row)
                    .is_some_and(|text| pattern.is_match(&text))
            })
        });
        trace!("filter {:?} kept {} of {} rows", filter.pattern, display.len(), rows.len());
    }

    Ok(display)
}

/// A table instance: owns its sort and filter state.
///
/// Columns and rows are borrowed per render; the engine only remembers what
/// the user did to the headers and the filter toolbar.
pub struct TableEngine<T> {
    config: TableConfig,
    sort: SortState,
    filter: FilterState,
    row_key: Option<RowKeyFn<T>>,
}

impl<T> TableEngine<T> {
    /// Create an engine with initial state taken from `config`.
    pub fn new(config: TableConfig) -> Self {
        let sort = SortState::new(config.default_order, config.default_order_by.clone());
        Self {
            config,
            sort,
            filter: FilterState::default(),
            row_key: None,
        }
    }

    /// Derive row keys with `row_key` instead of [`TableRow::key`].
    pub fn with_row_key(mut self, row_key: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.row_key = Some(Arc::new(row_key));
        self
    }

    /// The configuration the engine was built from.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Current filter state.
    pub fn filter_state(&self) -> &FilterState {
        &self.filter
    }

    /// Handle activation of the header of `column_id`.
    ///
    /// Returns `true` if the sort state changed. Unknown and unsortable
    /// columns are ignored.
    pub fn on_header_click(&mut self, columns: &[Column<T>], column_id: &str) -> bool {
        let Some(column) = columns.iter().find(|c| c.id() == column_id) else {
            debug!("Header click on unknown column {:?}", column_id);
            return false;
        };
        let next = self.sort.toggle(column);
        if next == self.sort {
            return false;
        }
        debug!("Sort {:?} -> {:?}", self.sort, next);
        self.sort = next;
        true
    }

    /// Handle a click on the filter toggle.
    pub fn on_filter_toggle(&mut self) {
        if !self.config.enable_filter {
            debug!("Filter toggle ignored: filtering disabled");
            return;
        }
        self.filter = self.filter.toggle_visibility();
        debug!("Filter enabled: {}", self.filter.enabled);
    }

    /// Handle a change of the filter input.
    pub fn on_filter_input(&mut self, raw: &str) {
        self.filter = self.filter.with_input(raw);
        debug!("Filter pattern: {:?}", self.filter.pattern);
    }

    /// Rows in display order under the current state.
    pub fn display_rows<'a>(
        &self,
        rows: &'a [T],
        columns: &[Column<T>],
    ) -> Result<Vec<&'a T>, TableError> {
        compute_display_rows(rows, columns, &self.sort, &self.filter)
    }

    /// Header cells for `columns` under the current state.
    pub fn headers(&self, columns: &[Column<T>]) -> Vec<HeaderCell> {
        columns
            .iter()
            .map(|column| {
                let active = self.sort.is_active(column.id());
                HeaderCell {
                    id: column.id().to_string(),
                    title: column.title.clone(),
                    tooltip: column.tooltip.clone(),
                    alignment: column.alignment(),
                    sortable: column.is_sortable(),
                    active,
                    direction: if active {
                        self.sort.order
                    } else {
                        column.default_sort_order()
                    },
                }
            })
            .collect()
    }

    fn toolbar(&self) -> Option<Toolbar> {
        self.config.enable_filter.then(|| Toolbar {
            title: self.config.title.clone(),
            filter_open: self.filter.enabled,
        })
    }
}

impl<T: TableRow> TableEngine<T> {
    fn key_of(&self, row: &T) -> String {
        match &self.row_key {
            Some(row_key) => row_key(row),
            None => row.key(),
        }
    }

    /// Build the render-ready view of `rows`.
    pub fn view(&self, rows: &[T], columns: &[Column<T>]) -> Result<TableView, TableError> {
        let display = self.display_rows(rows, columns)?;
        let body = if display.is_empty() {
            TableBody::Empty
        } else {
            TableBody::Rows(
                display
                    .into_iter()
                    .map(|row| RenderedRow {
                        key: self.key_of(row),
                        tooltip: row.tooltip(),
                        cells: columns.iter().map(|c| c.render_cell(row)).collect(),
                    })
                    .collect(),
            )
        };

        Ok(TableView {
            toolbar: self.toolbar(),
            headers: self.headers(columns),
            body,
            padding: self.config.padding,
        })
    }
}

impl<T> fmt::Debug for TableEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableEngine")
            .field("config", &self.config)
            .field("sort", &self.sort)
            .field("filter", &self.filter)
            .field("custom_row_key", &self.row_key.is_some())
            .finish()
    }
}
