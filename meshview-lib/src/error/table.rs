//! Table engine error types

/// Errors raised while computing the displayed rows of a table.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// The sort state refers to a column that is not part of the schema.
    #[error("Unknown sort column: {column}")]
    UnknownSortColumn {
        /// Id of the column the sort state points at.
        column: String,
    },

    /// The compiled filter pattern was rejected by the regex engine.
    #[error("Invalid filter pattern: {0}")]
    Pattern(#[from] regex::Error),
}

impl TableError {
    /// Creates a new unknown sort column error.
    pub fn unknown_sort_column(column: impl Into<String>) -> Self {
        Self::UnknownSortColumn {
            column: column.into(),
        }
    }
}
