//! Metrics table column schema.

use std::sync::Arc;

use log::debug;

use crate::format::{MISSING, MetricUnit, format_metric};
use crate::link::LinkBuilder;
use crate::model::{MetricRow, ResourceKind, short_type_name};
use crate::table::{Cell, Column, ErrorIndicator, Health, SortKey};

use super::dashboard::dashboard_column;
use super::traffic_split::traffic_split_columns;

/// Latency quantiles shown by HTTP tables, in column order.
pub const LATENCY_QUANTILES: [&str; 3] = ["P50", "P95", "P99"];

/// Assemble the columns of a metrics table, in display order.
///
/// - name column (when `show_name_column`)
/// - apex, leaf and weight (traffic splits)
/// - TCP or HTTP stat columns
/// - meshed pods at index 1 (except authorities and traffic splits)
/// - dashboard link (except traffic splits)
/// - namespace column in front (when `show_namespace_column`)
pub fn build_columns(
    resource: ResourceKind,
    show_namespace_column: bool,
    show_name_column: bool,
    links: Arc<dyn LinkBuilder>,
    is_tcp: bool,
) -> Vec<Column<MetricRow>> {
    let is_authority = resource == ResourceKind::Authority;
    let is_traffic_split = resource == ResourceKind::TrafficSplit;

    let mut columns = Vec::new();
    if show_name_column {
        columns.push(name_column(resource, links.clone()));
    }
    if is_traffic_split {
        columns.extend(traffic_split_columns());
    }
    if is_tcp {
        columns.extend(tcp_stat_columns());
    } else {
        columns.extend(http_stat_columns());
    }
    if !is_authority && !is_traffic_split {
        columns.insert(columns.len().min(1), meshed_column());
    }
    if !is_traffic_split {
        columns.push(dashboard_column(resource, links.clone()));
    }
    if show_namespace_column {
        columns.insert(0, namespace_column(links));
    }

    debug!(
        "Built {} columns for {} (tcp: {}): {:?}",
        columns.len(),
        resource,
        is_tcp,
        columns.iter().map(Column::id).collect::<Vec<_>>()
    );
    columns
}

/// Name shown for a row: `type/name` in multi-resource tables.
pub fn display_name(resource: ResourceKind, row: &MetricRow) -> String {
    if resource == ResourceKind::MultiResource {
        format!("{}/{}", short_type_name(&row.resource_type), row.name)
    } else {
        row.name.clone()
    }
}

fn namespace_path(namespace: &str) -> String {
    format!("/namespaces/{}", namespace)
}

fn name_column(resource: ResourceKind, links: Arc<dyn LinkBuilder>) -> Column<MetricRow> {
    let title = match resource {
        ResourceKind::MultiResource => "Resource".to_string(),
        other => other.titles().singular,
    };

    Column::new("name", title)
        .filter_by(|row: &MetricRow| Some(row.name.clone()))
        .render_with(move |row: &MetricRow| {
            let label = display_name(resource, row);
            let content = if resource == ResourceKind::Namespace {
                Cell::Link(links.link(&namespace_path(&row.name), &row.name))
            } else if !row.added && resource != ResourceKind::TrafficSplit {
                Cell::Text(label)
            } else {
                let path = format!(
                    "/namespaces/{}/{}s/{}",
                    row.namespace, row.resource_type, row.name
                );
                Cell::Link(links.link(&path, &label))
            };

            if !row.has_errors() {
                return content;
            }
            Cell::Flagged {
                content: Box::new(content),
                errors: ErrorIndicator {
                    resource_name: row.name.clone(),
                    resource_type: row.resource_type.clone(),
                    count: row.error_count(),
                },
            }
        })
        .sort_by(move |row: &MetricRow| {
            let name = display_name(resource, row);
            if name.is_empty() {
                SortKey::number(-1.0)
            } else {
                SortKey::Text(name)
            }
        })
}

fn namespace_column(links: Arc<dyn LinkBuilder>) -> Column<MetricRow> {
    Column::new("namespace", "Namespace")
        .filter_by(|row: &MetricRow| Some(row.namespace.clone()))
        .render_with(move |row: &MetricRow| {
            if row.namespace.is_empty() {
                Cell::text(MISSING)
            } else {
                Cell::Link(links.link(&namespace_path(&row.namespace), &row.namespace))
            }
        })
        .sort_by(|row: &MetricRow| {
            if row.namespace.is_empty() {
                SortKey::text(MISSING)
            } else {
                SortKey::text(row.namespace.as_str())
            }
        })
}

fn meshed_column() -> Column<MetricRow> {
    Column::new("pods.totalPods", "Meshed")
        .numeric()
        .render_with(|row: &MetricRow| match row.pods {
            Some(pods) => Cell::Text(format!("{}/{}", pods.meshed_pods, pods.total_pods)),
            None => Cell::Empty,
        })
        .sort_by(|row: &MetricRow| match row.total_pods() {
            Some(total) => SortKey::number(total as f64),
            None => SortKey::number(-1.0),
        })
}

fn tcp_stat(
    data_index: &str,
    title: &str,
    unit: MetricUnit,
    value: fn(&MetricRow) -> Option<f64>,
) -> Column<MetricRow> {
    Column::new(data_index, title)
        .numeric()
        .render_with(move |row: &MetricRow| Cell::Text(format_metric(unit, value(row))))
        .sort_by(move |row: &MetricRow| SortKey::from(value(row)))
}

/// Open connections, read and write throughput.
pub fn tcp_stat_columns() -> Vec<Column<MetricRow>> {
    vec![
        tcp_stat(
            "tcp.openConnections",
            "Connections",
            MetricUnit::NoUnit,
            |row| row.tcp.and_then(|tcp| tcp.open_connections),
        ),
        tcp_stat(
            "tcp.readRate",
            "Read Bytes / sec",
            MetricUnit::Bytes,
            |row| row.tcp.and_then(|tcp| tcp.read_rate),
        ),
        tcp_stat(
            "tcp.writeRate",
            "Write Bytes / sec",
            MetricUnit::Bytes,
            |row| row.tcp.and_then(|tcp| tcp.write_rate),
        ),
    ]
}

/// Success rate, request rate and latency quantiles.
pub fn http_stat_columns() -> Vec<Column<MetricRow>> {
    let mut columns = vec![
        Column::new("successRate", "Success Rate")
            .numeric()
            .render_with(|row: &MetricRow| Cell::Gauge {
                label: format_metric(MetricUnit::SuccessRate, row.success_rate),
                ratio: row.success_rate,
                health: Health::from_success_rate(row.success_rate),
            })
            .sort_by(|row: &MetricRow| SortKey::from(row.success_rate)),
        Column::new("requestRate", "RPS")
            .numeric()
            .render_with(|row: &MetricRow| {
                Cell::Text(format_metric(MetricUnit::NoUnit, row.request_rate))
            })
            .sort_by(|row: &MetricRow| SortKey::from(row.request_rate)),
    ];

    columns.extend(LATENCY_QUANTILES.into_iter().map(|quantile| {
        Column::new(quantile, format!("{} Latency", quantile))
            .numeric()
            .render_with(move |row: &MetricRow| {
                Cell::Text(format_metric(MetricUnit::Latency, row.number(quantile)))
            })
            .sort_by(move |row: &MetricRow| SortKey::from(row.number(quantile)))
    }));
    columns
}
