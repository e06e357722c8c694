//! Metrics table schema.
//!
//! Builds the ordered column list of a metrics table from the resource kind
//! and display flags, and prepares metric rows for those columns.

mod columns;
mod dashboard;
mod preprocess;
mod props;
mod traffic_split;

pub use columns::{LATENCY_QUANTILES, build_columns, display_name, http_stat_columns, tcp_stat_columns};
pub use dashboard::{DASHBOARD_COLUMN, dashboard_path, has_dashboard};
pub use preprocess::preprocess_rows;
pub use props::{ALL_NAMESPACES, MetricsTable, MetricsTableProps};
pub use traffic_split::{parse_int_prefix, weight_sort_key};
