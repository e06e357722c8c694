//! Metrics table: props, derived schema and the engine instance.

use std::sync::Arc;

use crate::config::{Padding, TableConfig};
use crate::error::TableError;
use crate::link::LinkBuilder;
use crate::model::{MetricRow, ResourceKind};
use crate::table::{Column, TableEngine, TableView};

use super::columns::build_columns;
use super::preprocess::preprocess_rows;

/// Selected-namespace value meaning "every namespace".
pub const ALL_NAMESPACES: &str = "_all";

/// Inputs of a metrics table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricsTableProps {
    /// Kind of resource the rows are.
    pub resource: ResourceKind,
    /// Namespace selected in the dashboard, or [`ALL_NAMESPACES`].
    pub selected_namespace: String,
    /// Show the namespace column when it makes sense.
    ///
    /// Default: true
    pub show_namespace_column: bool,
    /// Show the name column. Only honored for traffic splits.
    ///
    /// Default: true
    pub show_name: bool,
    /// Show TCP stats instead of HTTP stats.
    ///
    /// Default: false
    pub is_tcp_table: bool,
    /// Table title.
    pub title: String,
}

impl MetricsTableProps {
    /// Props for a `resource` table with default flags.
    pub fn new(resource: ResourceKind, selected_namespace: impl Into<String>) -> Self {
        Self {
            resource,
            selected_namespace: selected_namespace.into(),
            show_namespace_column: true,
            show_name: true,
            is_tcp_table: false,
            title: String::new(),
        }
    }

    /// Sets whether the namespace column may be shown.
    pub fn with_namespace_column(mut self, show: bool) -> Self {
        self.show_namespace_column = show;
        self
    }

    /// Sets whether the name column is shown (traffic splits only).
    pub fn with_name(mut self, show: bool) -> Self {
        self.show_name = show;
        self
    }

    /// Switches between TCP and HTTP stats.
    pub fn with_tcp(mut self, tcp: bool) -> Self {
        self.is_tcp_table = tcp;
        self
    }

    /// Sets the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// The namespace column only appears across namespaces, never for
    /// namespace rows themselves.
    pub fn namespace_column_visible(&self) -> bool {
        self.resource != ResourceKind::Namespace
            && self.selected_namespace == ALL_NAMESPACES
            && self.show_namespace_column
    }

    /// The name column can only be hidden on traffic split tables.
    pub fn name_column_visible(&self) -> bool {
        self.resource != ResourceKind::TrafficSplit || self.show_name
    }

    /// Column the table starts ordered by.
    pub fn default_order_by(&self) -> &'static str {
        if self.resource == ResourceKind::TrafficSplit && !self.name_column_visible() {
            "leaf"
        } else {
            "name"
        }
    }

    /// Engine configuration derived from the props.
    pub fn table_config(&self) -> TableConfig {
        TableConfig::new()
            .with_filter(true)
            .with_title(self.title.clone())
            .with_default_order_by(self.default_order_by())
            .with_padding(Padding::Dense)
    }

    /// Column schema derived from the props.
    pub fn columns(&self, links: Arc<dyn LinkBuilder>) -> Vec<Column<MetricRow>> {
        build_columns(
            self.resource,
            self.namespace_column_visible(),
            self.name_column_visible(),
            links,
            self.is_tcp_table,
        )
    }
}

/// A metrics table instance.
///
/// Holds the column schema derived from its props and the engine owning the
/// sort and filter state. Rebuild it when the props change.
#[derive(Debug)]
pub struct MetricsTable {
    props: MetricsTableProps,
    columns: Vec<Column<MetricRow>>,
    engine: TableEngine<MetricRow>,
}

impl MetricsTable {
    /// Creates a table for `props`.
    pub fn new(props: MetricsTableProps, links: Arc<dyn LinkBuilder>) -> Self {
        let columns = props.columns(links);
        let engine = TableEngine::new(props.table_config());
        Self {
            props,
            columns,
            engine,
        }
    }

    /// The props the table was built from.
    pub fn props(&self) -> &MetricsTableProps {
        &self.props
    }

    /// Column schema.
    pub fn columns(&self) -> &[Column<MetricRow>] {
        &self.columns
    }

    /// The engine holding sort and filter state.
    pub fn engine(&self) -> &TableEngine<MetricRow> {
        &self.engine
    }

    /// Activate the header of `column_id`. Returns `true` if the sort changed.
    pub fn on_header_click(&mut self, column_id: &str) -> bool {
        self.engine.on_header_click(&self.columns, column_id)
    }

    /// Open or close the filter input.
    pub fn on_filter_toggle(&mut self) {
        self.engine.on_filter_toggle();
    }

    /// Update the filter input.
    pub fn on_filter_input(&mut self, raw: &str) {
        self.engine.on_filter_input(raw);
    }

    /// Rows of `metrics` in display order.
    pub fn display_rows(&self, metrics: &[MetricRow]) -> Result<Vec<MetricRow>, TableError> {
        let rows = preprocess_rows(metrics);
        let display = self.engine.display_rows(&rows, &self.columns)?;
        Ok(display.into_iter().cloned().collect())
    }

    /// Render-ready view of `metrics`.
    pub fn view(&self, metrics: &[MetricRow]) -> Result<TableView, TableError> {
        let rows = preprocess_rows(metrics);
        self.engine.view(&rows, &self.columns)
    }
}
