//! Tests for the generic table engine.

use meshview_lib::TableConfig;
use meshview_lib::table::{
    Column, FilterState, SortKey, SortOrder, SortState, TableBody, TableEngine, TableRow,
    compute_display_rows,
};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: u32,
    name: &'static str,
    request_rate: f64,
}

impl TableRow for Row {
    fn key(&self) -> String {
        self.id.to_string()
    }

    fn field(&self, path: &str) -> Option<Value> {
        match path {
            "name" => Some(json!(self.name)),
            "requestRate" => Some(json!(self.request_rate)),
            _ => None,
        }
    }
}

fn row(id: u32, name: &'static str, request_rate: f64) -> Row {
    Row {
        id,
        name,
        request_rate,
    }
}

fn columns() -> Vec<Column<Row>> {
    vec![
        Column::new("name", "Name")
            .filter_by(|r: &Row| Some(r.name.to_string()))
            .sort_by(|r: &Row| SortKey::text(r.name)),
        Column::new("requestRate", "RPS")
            .numeric()
            .sort_by(|r: &Row| SortKey::number(r.request_rate)),
    ]
}

fn ids(rows: &[&Row]) -> Vec<u32> {
    rows.iter().map(|r| r.id).collect()
}

// =============================================================================
// Sorting
// =============================================================================

#[test]
fn test_end_to_end_desc() {
    let rows = vec![row(1, "a", 5.0), row(2, "b", 50.0)];
    let sort = SortState::by("requestRate", SortOrder::Desc);
    let out = compute_display_rows(&rows, &columns(), &sort, &FilterState::default()).unwrap();
    let names: Vec<&str> = out.iter().map(|r| r.name).collect();
    assert_eq!(names, vec!["b", "a"]);
}

#[test]
fn test_sort_is_stable_both_directions() {
    let rows = vec![
        row(1, "x", 2.0),
        row(2, "y", 1.0),
        row(3, "z", 2.0),
        row(4, "w", 1.0),
        row(5, "v", 2.0),
    ];

    let asc = SortState::by("requestRate", SortOrder::Asc);
    let out = compute_display_rows(&rows, &columns(), &asc, &FilterState::default()).unwrap();
    assert_eq!(ids(&out), vec![2, 4, 1, 3, 5]);

    let desc = SortState::by("requestRate", SortOrder::Desc);
    let out = compute_display_rows(&rows, &columns(), &desc, &FilterState::default()).unwrap();
    assert_eq!(ids(&out), vec![1, 3, 5, 2, 4]);
}

#[test]
fn test_input_is_not_mutated() {
    let rows = vec![row(1, "b", 1.0), row(2, "a", 2.0)];
    let before = rows.clone();
    let sort = SortState::by("name", SortOrder::Asc);
    let out = compute_display_rows(&rows, &columns(), &sort, &FilterState::default()).unwrap();
    assert_eq!(ids(&out), vec![2, 1]);
    assert_eq!(rows, before);
}

#[test]
fn test_toggle_twice_restores_direction() {
    let cols = columns();
    let start = SortState::default();

    let once = start.toggle(&cols[1]);
    assert_eq!(once, SortState::by("requestRate", SortOrder::Asc));
    let twice = once.toggle(&cols[1]);
    assert_eq!(twice.order, SortOrder::Desc);
    let thrice = twice.toggle(&cols[1]);
    assert_eq!(thrice.order, SortOrder::Asc);
}

#[test]
fn test_toggle_uses_column_default_order() {
    let col: Column<Row> = Column::new("requestRate", "RPS")
        .sort_by(|r: &Row| SortKey::number(r.request_rate))
        .default_order(SortOrder::Desc);

    let state = SortState::by("name", SortOrder::Asc).toggle(&col);
    assert_eq!(state, SortState::by("requestRate", SortOrder::Desc));
    assert_eq!(state.toggle(&col).order, SortOrder::Asc);
}

#[test]
fn test_switching_column_resets_to_default() {
    let cols = columns();
    let state = SortState::by("requestRate", SortOrder::Desc).toggle(&cols[0]);
    assert_eq!(state, SortState::by("name", SortOrder::Asc));
}

#[test]
fn test_toggle_unsortable_is_noop() {
    let col: Column<Row> = Column::new("note", "Note");
    let state = SortState::by("name", SortOrder::Desc);
    assert_eq!(state.toggle(&col), state);
}

// =============================================================================
// Filtering
// =============================================================================

#[test]
fn test_filter_input_is_literal() {
    let rows = vec![row(1, "a.b*c", 1.0), row(2, "axbbb", 1.0), row(3, "a.b", 1.0)];
    let filter = FilterState::default().toggle_visibility().with_input("a.b*");
    let out = compute_display_rows(&rows, &columns(), &SortState::default(), &filter).unwrap();
    assert_eq!(ids(&out), vec![1]);
}

#[test]
fn test_filter_is_substring_search() {
    let rows = vec![row(1, "emoji", 1.0), row(2, "voting", 1.0), row(3, "web-emoji", 1.0)];
    let filter = FilterState::default().toggle_visibility().with_input("emoji");
    let out = compute_display_rows(&rows, &columns(), &SortState::default(), &filter).unwrap();
    assert_eq!(ids(&out), vec![1, 3]);
}

#[test]
fn test_disabled_filter_is_ignored() {
    let rows = vec![row(1, "emoji", 1.0), row(2, "voting", 1.0)];
    let filter = FilterState {
        enabled: false,
        pattern: "emoji".to_string(),
    };
    let out = compute_display_rows(&rows, &columns(), &SortState::default(), &filter).unwrap();
    assert_eq!(ids(&out), vec![1, 2]);
}

#[test]
fn test_sort_then_filter() {
    let rows = vec![row(1, "web-b", 3.0), row(2, "db", 9.0), row(3, "web-a", 7.0)];
    let filter = FilterState::default().toggle_visibility().with_input("web");
    let sort = SortState::by("requestRate", SortOrder::Desc);
    let out = compute_display_rows(&rows, &columns(), &sort, &filter).unwrap();
    assert_eq!(ids(&out), vec![3, 1]);
}

// =============================================================================
// Engine and view
// =============================================================================

#[test]
fn test_empty_result_is_empty_state() {
    let mut engine: TableEngine<Row> = TableEngine::new(TableConfig::default().with_filter(true));
    engine.on_filter_toggle();
    engine.on_filter_input("nothing matches");

    let rows = vec![row(1, "a", 1.0)];
    let view = engine.view(&rows, &columns()).unwrap();
    assert!(view.body.is_empty());
    assert_eq!(view.body, TableBody::Empty);
    assert!(view.body.rows().is_empty());

    engine.on_filter_input("a");
    let view = engine.view(&rows, &columns()).unwrap();
    assert!(!view.body.is_empty());
    assert_eq!(view.body.rows().len(), 1);
}

#[test]
fn test_no_rows_is_empty_state() {
    let engine: TableEngine<Row> = TableEngine::new(TableConfig::default());
    let view = engine.view(&[], &columns()).unwrap();
    assert!(view.body.is_empty());
    assert_eq!(view.headers.len(), 2);
}

#[test]
fn test_toolbar_follows_filter_state() {
    let mut engine: TableEngine<Row> =
        TableEngine::new(TableConfig::default().with_filter(true).with_title("Services"));
    let view = engine.view(&[], &columns()).unwrap();
    let toolbar = view.toolbar.unwrap();
    assert_eq!(toolbar.title, "Services");
    assert!(!toolbar.filter_open);

    engine.on_filter_toggle();
    let view = engine.view(&[], &columns()).unwrap();
    assert!(view.toolbar.unwrap().filter_open);
}

#[test]
fn test_filter_toggle_clears_pattern() {
    let mut engine: TableEngine<Row> = TableEngine::new(TableConfig::default().with_filter(true));
    engine.on_filter_toggle();
    engine.on_filter_input("a");
    engine.on_filter_toggle();
    assert!(engine.filter_state().pattern.is_empty());
    engine.on_filter_toggle();
    assert!(engine.filter_state().pattern.is_empty());
    assert!(engine.filter_state().enabled);
}
