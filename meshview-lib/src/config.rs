//! Table configuration

use crate::table::SortOrder;

/// Cell spacing hint for renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    #[default]
    Default,
    Dense,
}

/// Initial state and presentation options of a table.
///
/// # Example
///
/// ```
/// use meshview_lib::TableConfig;
/// use meshview_lib::table::SortOrder;
///
/// let config = TableConfig::default()
///     .with_default_order_by("requestRate")
///     .with_default_order(SortOrder::Desc)
///     .with_filter(true);
/// assert_eq!(config.default_order_by.as_deref(), Some("requestRate"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TableConfig {
    /// Direction the table starts in.
    ///
    /// Default: ascending
    pub default_order: SortOrder,

    /// Column id the table starts ordered by.
    ///
    /// Default: none (input order)
    pub default_order_by: Option<String>,

    /// Whether the filter toolbar is offered.
    ///
    /// Default: false
    pub enable_filter: bool,

    /// Title shown in the toolbar.
    pub title: String,

    /// Spacing hint.
    pub padding: Padding,
}

impl TableConfig {
    /// Creates a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the initial sort direction.
    pub fn with_default_order(mut self, order: SortOrder) -> Self {
        self.default_order = order;
        self
    }

    /// Sets the initial sort column.
    pub fn with_default_order_by(mut self, column: impl Into<String>) -> Self {
        self.default_order_by = Some(column.into());
        self
    }

    /// Enables or disables the filter toolbar.
    pub fn with_filter(mut self, enabled: bool) -> Self {
        self.enable_filter = enabled;
        self
    }

    /// Sets the toolbar title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the spacing hint.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }
}
