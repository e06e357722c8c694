//! Page visibility transitions.
//!
//! Views that poll for metrics stop while the page is hidden and resume when
//! it becomes visible again.

use std::fmt;

use log::debug;

/// A change of page visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityChange {
    /// The page went from visible to hidden.
    Hidden,
    /// The page went from hidden to visible.
    Visible,
}

/// Change between two observed states. Unknown states never produce one.
pub fn visibility_change(previous: Option<bool>, current: Option<bool>) -> Option<VisibilityChange> {
    match (previous?, current?) {
        (true, false) => Some(VisibilityChange::Hidden),
        (false, true) => Some(VisibilityChange::Visible),
        _ => None,
    }
}

type Callback = Box<dyn FnMut() + Send>;

/// Tracks page visibility and fires callbacks on transitions.
#[derive(Default)]
pub struct PageVisibility {
    visible: Option<bool>,
    on_visible: Option<Callback>,
    on_hidden: Option<Callback>,
}

impl PageVisibility {
    /// Creates a tracker with no observed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `f` whenever the page becomes visible.
    pub fn on_visible(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_visible = Some(Box::new(f));
        self
    }

    /// Call `f` whenever the page becomes hidden.
    pub fn on_hidden(mut self, f: impl FnMut() + Send + 'static) -> Self {
        self.on_hidden = Some(Box::new(f));
        self
    }

    /// Last observed state.
    pub fn is_visible(&self) -> Option<bool> {
        self.visible
    }

    /// Record a new observation, firing the matching callback on a change.
    pub fn update(&mut self, visible: bool) -> Option<VisibilityChange> {
        let change = visibility_change(self.visible, Some(visible));
        self.visible = Some(visible);

        let callback = match change? {
            VisibilityChange::Hidden => self.on_hidden.as_mut(),
            VisibilityChange::Visible => self.on_visible.as_mut(),
        };
        debug!("Page visibility changed: {:?}", change);
        if let Some(callback) = callback {
            callback();
        }
        change
    }
}

impl fmt::Debug for PageVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageVisibility")
            .field("visible", &self.visible)
            .field("on_visible", &self.on_visible.is_some())
            .field("on_hidden", &self.on_hidden.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_visibility_change() {
        assert_eq!(visibility_change(Some(true), Some(false)), Some(VisibilityChange::Hidden));
        assert_eq!(visibility_change(Some(false), Some(true)), Some(VisibilityChange::Visible));
        assert_eq!(visibility_change(Some(true), Some(true)), None);
        assert_eq!(visibility_change(None, Some(true)), None);
        assert_eq!(visibility_change(Some(false), None), None);
    }

    #[test]
    fn test_callbacks_fire_on_transitions_only() {
        let shown = Arc::new(AtomicUsize::new(0));
        let hidden = Arc::new(AtomicUsize::new(0));
        let (s, h) = (shown.clone(), hidden.clone());
        let mut tracker = PageVisibility::new()
            .on_visible(move || {
                s.fetch_add(1, Ordering::SeqCst);
            })
            .on_hidden(move || {
                h.fetch_add(1, Ordering::SeqCst);
            });

        assert_eq!(tracker.update(true), None);
        assert_eq!(tracker.update(true), None);
        assert_eq!(tracker.update(false), Some(VisibilityChange::Hidden));
        assert_eq!(tracker.update(true), Some(VisibilityChange::Visible));

        assert_eq!(shown.load(Ordering::SeqCst), 1);
        assert_eq!(hidden.load(Ordering::SeqCst), 1);
        assert_eq!(tracker.is_visible(), Some(true));
    }
}
