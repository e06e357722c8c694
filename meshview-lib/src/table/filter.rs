//! Text filter state.

use regex::Regex;

use crate::error::TableError;

/// Compile raw user input into a filter pattern.
///
/// Every regex metacharacter is escaped, so the pattern matches the input as
/// a literal substring even though matching is a regex search.
///
/// ```
/// use meshview_lib::table::filter_pattern;
///
/// assert_eq!(filter_pattern("a.b*"), r"a\.b\*");
/// ```
pub fn filter_pattern(raw: &str) -> String {
    regex::escape(raw)
}

/// Whether text filtering is shown and what it matches.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    /// Whether the filter input is visible and applied.
    pub enabled: bool,
    /// Compiled (escaped) pattern.
    pub pattern: String,
}

impl FilterState {
    /// State after the filter toggle is clicked.
    ///
    /// The pattern is cleared in both directions.
    pub fn toggle_visibility(&self) -> Self {
        Self {
            enabled: !self.enabled,
            pattern: String::new(),
        }
    }

    /// State after the filter input changes to `raw`.
    pub fn with_input(&self, raw: &str) -> Self {
        Self {
            enabled: self.enabled,
            pattern: filter_pattern(raw),
        }
    }

    /// Returns `true` if rows should be filtered.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.pattern.is_empty()
    }

    /// Compiled regex, or `None` when filtering is inactive.
    pub fn regex(&self) -> Result<Option<Regex>, TableError> {
        if !self.is_active() {
            return Ok(None);
        }
        Ok(Some(Regex::new(&self.pattern)?))
    }
}
