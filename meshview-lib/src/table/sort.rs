//! Sort keys and sort state.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::column::Column;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortOrder {
    /// Returns the opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Lowercase name, as used in query strings.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Value a column sorter extracts from a row.
///
/// Keys are totally ordered: numbers first (numerically), then text
/// (lexicographically), then missing values. Text that reads as a number
/// (`"0"`, `" 2.5 "`, `"0x1f"`) is compared as that number. Descending order
/// reverses the whole sequence, so missing values lead.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Numeric key.
    Number(f64),
    /// Text key.
    Text(String),
    /// No value.
    Missing,
}

impl SortKey {
    /// Creates a numeric key. NaN becomes [`SortKey::Missing`].
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            SortKey::Missing
        } else {
            SortKey::Number(value)
        }
    }

    /// Creates a text key.
    pub fn text(value: impl Into<String>) -> Self {
        SortKey::Text(value.into())
    }

    fn class(&self) -> KeyClass<'_> {
        match self {
            SortKey::Number(v) if v.is_nan() => KeyClass::Missing,
            SortKey::Number(v) => KeyClass::Numeric(*v),
            SortKey::Text(s) => match coerce_number(s) {
                Some(n) => KeyClass::Numeric(n),
                None => KeyClass::Text(s),
            },
            SortKey::Missing => KeyClass::Missing,
        }
    }

    /// Ascending comparison of two keys.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self.class(), other.class()) {
            (KeyClass::Numeric(a), KeyClass::Numeric(b)) => {
                a.partial_cmp(&b).unwrap_or(Ordering::Equal)
            }
            (KeyClass::Text(a), KeyClass::Text(b)) => a.cmp(b),
            (a, b) => a.rank().cmp(&b.rank()),
        }
    }
}

enum KeyClass<'a> {
    Numeric(f64),
    Text(&'a str),
    Missing,
}

impl KeyClass<'_> {
    fn rank(&self) -> u8 {
        match self {
            KeyClass::Numeric(_) => 0,
            KeyClass::Text(_) => 1,
            KeyClass::Missing => 2,
        }
    }
}

/// Finite number a non-empty text converts to, as in a browser's `Number(text)`.
fn coerce_number(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let value = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok()? as f64,
        None if text.bytes().all(|b| b.is_ascii_digit() || b"+-.eE".contains(&b)) => {
            text.parse::<f64>().ok()?
        }
        None => return None,
    };
    value.is_finite().then_some(value)
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl From<f64> for SortKey {
    fn from(value: f64) -> Self {
        SortKey::number(value)
    }
}

impl From<Option<f64>> for SortKey {
    fn from(value: Option<f64>) -> Self {
        value.map_or(SortKey::Missing, SortKey::number)
    }
}

impl From<&str> for SortKey {
    fn from(value: &str) -> Self {
        SortKey::text(value)
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        SortKey::Text(value)
    }
}

impl From<Option<String>> for SortKey {
    fn from(value: Option<String>) -> Self {
        value.map_or(SortKey::Missing, SortKey::Text)
    }
}

/// Active sort column and direction.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    /// Current direction.
    pub order: SortOrder,
    /// Id of the column rows are ordered by, if any.
    pub order_by: Option<String>,
}

impl SortState {
    /// Creates a sort state.
    pub fn new(order: SortOrder, order_by: Option<String>) -> Self {
        Self { order, order_by }
    }

    /// Creates a sort state ordering by `column`.
    pub fn by(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            order,
            order_by: Some(column.into()),
        }
    }

    /// Returns `true` if `column_id` is the active sort column.
    pub fn is_active(&self, column_id: &str) -> bool {
        self.order_by.as_deref() == Some(column_id)
    }

    /// State after the header of `column` is activated.
    ///
    /// Activating the current column in its entry direction flips the
    /// direction; any other activation switches to the column's default
    /// direction. Columns without a sorter leave the state unchanged.
    pub fn toggle<T>(&self, column: &Column<T>) -> SortState {
        if !column.is_sortable() {
            return self.clone();
        }
        let id = column.id().to_string();
        let mut order = column.default_sort_order();
        if self.is_active(&id) && self.order == order {
            order = order.flipped();
        }
        SortState {
            order,
            order_by: Some(id),
        }
    }

    /// Stable sort of `rows` by the keys `column` extracts.
    pub(crate) fn sort_rows<'a, T>(&self, rows: &[&'a T], column: &Column<T>) -> Vec<&'a T> {
        let Some(sorter) = column.sorter() else {
            return rows.to_vec();
        };
        let mut keyed: Vec<(SortKey, &'a T)> = rows.iter().map(|&row| (sorter(row), row)).collect();
        keyed.sort_by(|(a, _), (b, _)| self.order.apply(a.compare(b)));
        keyed.into_iter().map(|(_, row)| row).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_before_text_before_missing() {
        let mut keys = vec![
            SortKey::Missing,
            SortKey::text("abc"),
            SortKey::number(25.0),
            SortKey::number(10.0),
        ];
        keys.sort_by(|a, b| a.compare(b));
        assert_eq!(
            keys,
            vec![
                SortKey::Number(10.0),
                SortKey::Number(25.0),
                SortKey::text("abc"),
                SortKey::Missing,
            ]
        );
    }

    #[test]
    fn test_nan_is_missing() {
        assert_eq!(SortKey::number(f64::NAN), SortKey::Missing);
        assert_eq!(
            SortKey::Number(f64::NAN).compare(&SortKey::Missing),
            Ordering::Equal
        );
    }

    #[test]
    fn test_text_is_case_sensitive_lexicographic() {
        assert_eq!(SortKey::text("B").compare(&SortKey::text("a")), Ordering::Less);
        assert_eq!(SortKey::text("a10").compare(&SortKey::text("a9")), Ordering::Less);
    }

    #[test]
    fn test_numeric_text_compares_as_number() {
        assert_eq!(SortKey::text("0").compare(&SortKey::number(5.0)), Ordering::Less);
        assert_eq!(SortKey::number(0.0).compare(&SortKey::text("0")), Ordering::Equal);
        assert_eq!(SortKey::text(" 2.5 ").compare(&SortKey::number(2.0)), Ordering::Greater);
        assert_eq!(SortKey::text("0x10").compare(&SortKey::number(15.0)), Ordering::Greater);
        assert_eq!(SortKey::text("10").compare(&SortKey::text("9")), Ordering::Greater);

        assert_eq!(SortKey::text("0m").compare(&SortKey::number(5.0)), Ordering::Greater);
        assert_eq!(SortKey::text("").compare(&SortKey::number(5.0)), Ordering::Greater);
        assert_eq!(SortKey::text("inf").compare(&SortKey::number(5.0)), Ordering::Greater);
        assert_eq!(SortKey::text("1e999").compare(&SortKey::number(5.0)), Ordering::Greater);
    }

    #[test]
    fn test_desc_reverses() {
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.to_string(), "desc");
    }
}
