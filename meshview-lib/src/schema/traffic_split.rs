//! Traffic split columns and the weight sort rule.

use crate::model::{MetricRow, Weight};
use crate::table::{Cell, Column, SortKey};

/// Leading integer of `text`, parsed the way browsers parse integers from
/// strings: leading whitespace and a sign are accepted, a `0x` prefix
/// switches to hexadecimal, and parsing stops at the first non-digit.
///
/// ```
/// use meshview_lib::schema::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix(" 500m"), Some(500.0));
/// assert_eq!(parse_int_prefix("-7"), Some(-7.0));
/// assert_eq!(parse_int_prefix("0x1A"), Some(26.0));
/// assert_eq!(parse_int_prefix("abc"), None);
/// ```
pub fn parse_int_prefix(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let mut value = 0f64;
    let mut seen = false;
    for ch in digits.chars() {
        let Some(digit) = ch.to_digit(radix) else {
            break;
        };
        value = value * f64::from(radix) + f64::from(digit);
        seen = true;
    }

    seen.then_some(if negative { -value } else { value })
}

/// Sort key of a traffic split weight.
///
/// A weight whose text starts with a non-zero integer sorts as that number;
/// anything else (including `"0"`) sorts as the raw value.
pub fn weight_sort_key(weight: &Weight) -> SortKey {
    match parse_int_prefix(&weight.to_string()) {
        Some(n) if n != 0.0 => SortKey::number(n),
        _ => match weight {
            Weight::Number(n) => SortKey::number(*n),
            Weight::Text(s) => SortKey::text(s.as_str()),
        },
    }
}

fn apex(row: &MetricRow) -> Option<String> {
    row.ts_stats.as_ref().map(|ts| ts.apex.clone())
}

fn leaf(row: &MetricRow) -> Option<String> {
    row.ts_stats.as_ref().map(|ts| ts.leaf.clone())
}

fn weight(row: &MetricRow) -> Option<String> {
    row.ts_stats.as_ref().map(|ts| ts.weight.to_string())
}

/// Apex service, leaf service and weight columns.
pub(super) fn traffic_split_columns() -> Vec<Column<MetricRow>> {
    vec![
        Column::new("apex", "Apex Service")
            .filter_by(apex)
            .render_with(|row: &MetricRow| Cell::from(apex(row)))
            .sort_by(|row: &MetricRow| SortKey::from(apex(row))),
        Column::new("leaf", "Leaf Service")
            .filter_by(leaf)
            .render_with(|row: &MetricRow| Cell::from(leaf(row)))
            .sort_by(|row: &MetricRow| SortKey::from(leaf(row))),
        Column::new("weight", "Weight")
            .numeric()
            .filter_by(weight)
            .render_with(|row: &MetricRow| Cell::from(weight(row)))
            .sort_by(|row: &MetricRow| {
                row.ts_stats
                    .as_ref()
                    .map_or(SortKey::Missing, |ts| weight_sort_key(&ts.weight))
            }),
    ]
}
