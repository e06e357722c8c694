//! Error notification banner.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};
use url::Url;

/// Headline used when an error carries no status text.
pub const DEFAULT_MESSAGE: &str = "An error has occurred.";

/// How long the banner stays up without interaction.
pub const AUTO_HIDE_AFTER: Duration = Duration::from_millis(6000);

/// Error reported by an API call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorMessage {
    /// HTTP status, if the request got that far.
    #[serde(default)]
    pub status: Option<u16>,
    #[serde(default)]
    pub status_text: String,
    /// URL of the failed request.
    #[serde(default)]
    pub url: String,
    /// Error body.
    #[serde(default)]
    pub error: String,
}

impl Default for ApiErrorMessage {
    fn default() -> Self {
        Self {
            status: None,
            status_text: DEFAULT_MESSAGE.to_string(),
            url: String::new(),
            error: String::new(),
        }
    }
}

/// Piece of banner text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Link(Url),
}

/// Split `text` into plain text and `http(s)` links.
///
/// Trailing punctuation is kept out of links.
///
/// ```
/// use meshview_lib::banner::{Segment, linkify};
///
/// let segments = linkify("see https://linkerd.io/faq.");
/// assert_eq!(segments.len(), 3);
/// assert!(matches!(&segments[1], Segment::Link(url) if url.as_str() == "https://linkerd.io/faq"));
/// ```
pub fn linkify(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut pending = String::new();

    for piece in text.split_inclusive(char::is_whitespace) {
        let word = piece.trim_end();
        let spacing = &piece[word.len()..];
        let core = word.trim_end_matches(['.', ',', ';', ':', '!', '?', ')', '"', '\'']);

        let link = (core.starts_with("http://") || core.starts_with("https://"))
            .then(|| Url::parse(core).ok())
            .flatten();
        match link {
            Some(url) => {
                if !pending.is_empty() {
                    segments.push(Segment::Text(std::mem::take(&mut pending)));
                }
                segments.push(Segment::Link(url));
                pending.push_str(&word[core.len()..]);
                pending.push_str(spacing);
            }
            None => pending.push_str(piece),
        }
    }

    if !pending.is_empty() {
        segments.push(Segment::Text(pending));
    }
    segments
}

/// A dismissable error notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorBanner {
    message: ApiErrorMessage,
    open: bool,
    shown_for: Duration,
}

impl ErrorBanner {
    /// Opens a banner for `message`.
    pub fn new(message: ApiErrorMessage) -> Self {
        debug!("Error banner: {:?}", message);
        Self {
            message,
            open: true,
            shown_for: Duration::ZERO,
        }
    }

    /// The reported error.
    pub fn message(&self) -> &ApiErrorMessage {
        &self.message
    }

    /// Returns `true` while the banner is shown.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Dismiss the banner.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Advance the auto-hide timer. Returns whether the banner is still open.
    pub fn tick(&mut self, elapsed: Duration) -> bool {
        if self.open {
            self.shown_for += elapsed;
            if self.shown_for >= AUTO_HIDE_AFTER {
                debug!("Error banner auto-hidden after {:?}", self.shown_for);
                self.open = false;
            }
        }
        self.open
    }

    /// `"<status> <text>"`, falling back to [`DEFAULT_MESSAGE`]. A zero
    /// status is not shown.
    pub fn headline(&self) -> String {
        let text = if self.message.status_text.is_empty() {
            DEFAULT_MESSAGE
        } else {
            self.message.status_text.as_str()
        };
        match self.message.status {
            Some(status) if status != 0 => format!("{} {}", status, text),
            _ => text.to_string(),
        }
    }

    /// Error body with links detected. Empty when there is no body.
    pub fn details(&self) -> Vec<Segment> {
        linkify(&self.message.error)
    }

    /// URL of the failed request, if known.
    pub fn url(&self) -> Option<&str> {
        Some(self.message.url.as_str()).filter(|url| !url.is_empty())
    }
}
