//! Link capability handed to column renderers.
//!
//! Column renderers never build hrefs themselves; they ask a [`LinkBuilder`]
//! supplied by the caller, so the same schema works behind any path prefix.

/// A renderable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    /// Fully resolved target.
    pub href: String,
    /// Text shown for the link.
    pub label: String,
    /// Whether the link should open outside the dashboard (new tab/window).
    pub external: bool,
}

/// Maps a dashboard path to a renderable link.
pub trait LinkBuilder: Send + Sync {
    /// Build a link to `path` showing `label`.
    fn link(&self, path: &str, label: &str) -> Link;

    /// Build a link that opens outside the dashboard.
    fn external_link(&self, path: &str, label: &str) -> Link {
        Link {
            external: true,
            ..self.link(path, label)
        }
    }
}

/// Link builder that prepends a fixed path prefix.
///
/// # Example
///
/// ```
/// use meshview_lib::{LinkBuilder, PrefixedLinks};
///
/// let links = PrefixedLinks::new("/proxy/");
/// let link = links.link("/namespaces/default", "default");
/// assert_eq!(link.href, "/proxy/namespaces/default");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixedLinks {
    prefix: String,
}

impl PrefixedLinks {
    /// Creates a link builder for the given prefix. Trailing slashes are dropped.
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Returns the path prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl LinkBuilder for PrefixedLinks {
    fn link(&self, path: &str, label: &str) -> Link {
        Link {
            href: format!("{}{}", self.prefix, path),
            label: label.to_string(),
            external: false,
        }
    }
}
