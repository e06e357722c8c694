//! Tests for the metrics column schema and metrics table.

use std::sync::Arc;

use meshview_lib::model::{MetricRow, ResourceKind, TrafficSplitStats, Weight};
use meshview_lib::schema::{ALL_NAMESPACES, MetricsTable, MetricsTableProps, build_columns};
use meshview_lib::table::{
    Cell, Column, FilterState, SortOrder, SortState, TableRow, compute_display_rows,
};
use meshview_lib::{LinkBuilder, PrefixedLinks};
use pretty_assertions::assert_eq;

fn links() -> Arc<dyn LinkBuilder> {
    Arc::new(PrefixedLinks::new("/prefix"))
}

fn ids(columns: &[Column<MetricRow>]) -> Vec<&str> {
    columns.iter().map(Column::id).collect()
}

fn split_row(leaf: &str, weight: Weight) -> MetricRow {
    MetricRow {
        resource_type: "trafficsplit".into(),
        namespace: "default".into(),
        ts_stats: Some(TrafficSplitStats {
            apex: "web-svc".into(),
            leaf: leaf.into(),
            weight,
        }),
        ..MetricRow::named("web-split")
    }
}

const SNAPSHOT: &str = r#"[
    {
        "key": "emojivoto-deployment-web",
        "name": "web",
        "namespace": "emojivoto",
        "type": "deployment",
        "added": true,
        "pods": {"meshedPods": "1", "totalPods": "1"},
        "successRate": 0.93,
        "requestRate": 2.1,
        "latency": {"P50": 3, "P95": 9, "P99": 19}
    },
    {
        "key": "emojivoto-deployment-emoji",
        "name": "emoji",
        "namespace": "emojivoto",
        "type": "deployment",
        "added": true,
        "pods": {"meshedPods": "2", "totalPods": "2"},
        "successRate": 1.0,
        "requestRate": 4.2,
        "latency": {"P50": 1, "P95": 2, "P99": 4}
    },
    {
        "key": "default-deployment-legacy",
        "name": "legacy",
        "namespace": "default",
        "type": "deployment",
        "added": false,
        "pods": {"meshedPods": "0", "totalPods": "3"}
    }
]"#;

// =============================================================================
// Column order
// =============================================================================

#[test]
fn test_traffic_split_column_order() {
    let columns = build_columns(ResourceKind::TrafficSplit, false, false, links(), false);
    assert_eq!(
        ids(&columns),
        vec!["apex", "leaf", "weight", "successRate", "requestRate", "P50", "P95", "P99"]
    );
}

#[test]
fn test_column_order_is_deterministic() {
    let first = ids(&build_columns(ResourceKind::Pod, true, true, links(), true))
        .into_iter()
        .map(String::from)
        .collect::<Vec<_>>();
    for _ in 0..3 {
        let again = build_columns(ResourceKind::Pod, true, true, links(), true);
        assert_eq!(ids(&again), first);
    }
    assert_eq!(
        first,
        vec![
            "namespace",
            "name",
            "pods.totalPods",
            "tcp.openConnections",
            "tcp.readRate",
            "tcp.writeRate",
            "grafanaDashboard",
        ]
    );
}

// =============================================================================
// Weight sorting
// =============================================================================

#[test]
fn test_weight_mixed_types_ascending() {
    let rows = vec![
        split_row("a", Weight::Text("25".into())),
        split_row("b", Weight::Number(10.0)),
        split_row("c", Weight::Text("abc".into())),
    ];
    let columns = build_columns(ResourceKind::TrafficSplit, false, false, links(), false);

    let sort = SortState::by("weight", SortOrder::Asc);
    let out = compute_display_rows(&rows, &columns, &sort, &FilterState::default()).unwrap();
    let leaves: Vec<&str> = out.iter().map(|r| r.ts_stats.as_ref().unwrap().leaf.as_str()).collect();
    assert_eq!(leaves, vec!["b", "a", "c"]);

    let sort = SortState::by("weight", SortOrder::Desc);
    let out = compute_display_rows(&rows, &columns, &sort, &FilterState::default()).unwrap();
    let leaves: Vec<&str> = out.iter().map(|r| r.ts_stats.as_ref().unwrap().leaf.as_str()).collect();
    assert_eq!(leaves, vec!["c", "a", "b"]);
}

#[test]
fn test_zero_weight_sorts_as_its_number() {
    let rows = vec![
        split_row("zero", Weight::Text("0".into())),
        split_row("five", Weight::Text("5".into())),
        split_row("none", Weight::Text("abc".into())),
    ];
    let columns = build_columns(ResourceKind::TrafficSplit, false, false, links(), false);
    let sort = SortState::by("weight", SortOrder::Asc);
    let out = compute_display_rows(&rows, &columns, &sort, &FilterState::default()).unwrap();
    let leaves: Vec<&str> = out.iter().map(|r| r.ts_stats.as_ref().unwrap().leaf.as_str()).collect();
    assert_eq!(leaves, vec!["zero", "five", "none"]);

    let sort = SortState::by("weight", SortOrder::Desc);
    let out = compute_display_rows(&rows, &columns, &sort, &FilterState::default()).unwrap();
    let leaves: Vec<&str> = out.iter().map(|r| r.ts_stats.as_ref().unwrap().leaf.as_str()).collect();
    assert_eq!(leaves, vec!["none", "five", "zero"]);
}

// =============================================================================
// Metrics table
// =============================================================================

#[test]
fn test_snapshot_view() {
    let metrics = MetricRow::parse_snapshot(SNAPSHOT).unwrap();
    let table = MetricsTable::new(
        MetricsTableProps::new(ResourceKind::Deployment, ALL_NAMESPACES).with_title("Deployments"),
        links(),
    );
    let view = table.view(&metrics).unwrap();

    let keys: Vec<&str> = view.body.rows().iter().map(|r| r.key.as_str()).collect();
    assert_eq!(
        keys,
        vec![
            "emojivoto-deployment-emoji",
            "default-deployment-legacy",
            "emojivoto-deployment-web",
        ]
    );

    let emoji = &view.body.rows()[0];
    assert_eq!(
        emoji.cells[0].link().map(|l| l.href.as_str()),
        Some("/prefix/namespaces/emojivoto")
    );
    assert_eq!(
        emoji.cells[1].link().map(|l| l.href.as_str()),
        Some("/prefix/namespaces/emojivoto/deployments/emoji")
    );
    assert_eq!(emoji.cells[2], Cell::text("2/2"));
    assert_eq!(emoji.cells[4], Cell::text("4.2"));
    assert_eq!(emoji.cells[5], Cell::text("1 ms"));

    let legacy = &view.body.rows()[1];
    assert_eq!(legacy.cells[1], Cell::text("legacy"));
    assert_eq!(legacy.cells[3].plain_text(), "---");
    assert!(legacy.cells.last().unwrap().is_empty());

    assert!(metrics[0].extra.is_empty());
}

#[test]
fn test_metrics_table_interaction() {
    let metrics = MetricRow::parse_snapshot(SNAPSHOT).unwrap();
    let mut table = MetricsTable::new(
        MetricsTableProps::new(ResourceKind::Deployment, "emojivoto"),
        links(),
    );
    assert_eq!(table.columns()[0].id(), "name");

    assert!(table.on_header_click("P99"));
    let rows = table.display_rows(&metrics).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["emoji", "web", "legacy"]);

    assert!(table.on_header_click("P99"));
    let rows = table.display_rows(&metrics).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["legacy", "web", "emoji"]);

    table.on_filter_toggle();
    table.on_filter_input("emo");
    let rows = table.display_rows(&metrics).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key(), "emojivoto-deployment-emoji");

    table.on_filter_input("kube-system");
    assert!(table.view(&metrics).unwrap().body.is_empty());
}

#[test]
fn test_traffic_split_without_name_orders_by_leaf() {
    let table = MetricsTable::new(
        MetricsTableProps::new(ResourceKind::TrafficSplit, "default").with_name(false),
        links(),
    );
    let rows = vec![
        split_row("web-v2", Weight::Text("500m".into())),
        split_row("web-v1", Weight::Text("500m".into())),
    ];
    let view = table.view(&rows).unwrap();
    let leaves: Vec<String> = view.body.rows().iter().map(|r| r.cells[1].plain_text()).collect();
    assert_eq!(leaves, vec!["web-v1", "web-v2"]);
    assert!(view.headers[1].active);
}
