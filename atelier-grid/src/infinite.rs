//! Infinite-scroll trigger.
//!
//! A sentinel element sits after the last record. Whenever the sentinel is
//! laid out inside the scroll viewport it counts as intersecting, and an
//! [`InfiniteScroll`] turns those readings into load-more requests.

use atelier_dom::LayoutResult;

/// Intersection observer for the sentinel.
///
/// The observer is torn down and recreated whenever the fetching flag
/// changes. A fresh observer reports the current intersection once; after
/// that only changes are reported. A report triggers a load when the
/// sentinel intersects, more pages remain, and nothing is being fetched.
#[derive(Debug, Default)]
pub struct InfiniteScroll {
    observer: Option<Observer>,
}

#[derive(Debug)]
struct Observer {
    fetching: bool,
    last_visible: Option<bool>,
}

impl InfiniteScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one visibility reading. Returns `true` when more rows should be
    /// requested.
    pub fn observe(&mut self, visible: bool, has_next_page: bool, is_fetching: bool) -> bool {
        let stale = self
            .observer
            .as_ref()
            .is_none_or(|observer| observer.fetching != is_fetching);
        if stale {
            log::debug!("sentinel observer (re)created, fetching={is_fetching}");
            self.observer = Some(Observer {
                fetching: is_fetching,
                last_visible: None,
            });
        }

        let Some(observer) = self.observer.as_mut() else {
            return false;
        };
        if observer.last_visible == Some(visible) {
            return false;
        }
        observer.last_visible = Some(visible);

        visible && has_next_page && !is_fetching
    }

    /// Disconnect the observer, e.g. when the grid leaves infinite mode.
    pub fn disconnect(&mut self) {
        self.observer = None;
    }

    pub fn is_connected(&self) -> bool {
        self.observer.is_some()
    }
}

/// Whether `sentinel_id` was laid out with a visible area inside
/// `viewport_id`. Sentinels scrolled out of their container get an empty
/// rect and are not visible.
pub fn sentinel_visible(layout: &LayoutResult, viewport_id: &str, sentinel_id: &str) -> bool {
    match (layout.get(viewport_id), layout.get(sentinel_id)) {
        (Some(viewport), Some(sentinel)) => !viewport.intersect(sentinel).is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_intersection() {
        let mut scroll = InfiniteScroll::new();
        assert!(scroll.observe(true, true, false));
        // Still visible, no transition: no second request.
        assert!(!scroll.observe(true, true, false));
    }

    #[test]
    fn never_fires_while_fetching() {
        let mut scroll = InfiniteScroll::new();
        assert!(scroll.observe(true, true, false));
        assert!(!scroll.observe(true, true, true));
        assert!(!scroll.observe(false, true, true));
        assert!(!scroll.observe(true, true, true));
    }

    #[test]
    fn resumes_after_fetch_while_still_visible() {
        let mut scroll = InfiniteScroll::new();
        assert!(scroll.observe(true, true, false));
        assert!(!scroll.observe(true, true, true));
        // Fetch done, sentinel still on screen: the new observer reports it.
        assert!(scroll.observe(true, true, false));
    }

    #[test]
    fn stops_at_last_page() {
        let mut scroll = InfiniteScroll::new();
        assert!(!scroll.observe(true, false, false));
        assert!(!scroll.observe(false, false, false));
        assert!(!scroll.observe(true, false, false));
    }

    #[test]
    fn leaving_and_reentering_fires_again() {
        let mut scroll = InfiniteScroll::new();
        assert!(!scroll.observe(false, true, false));
        assert!(scroll.observe(true, true, false));
        assert!(!scroll.observe(false, true, false));
        assert!(scroll.observe(true, true, false));
    }

    #[test]
    fn disconnect_resets_observer() {
        let mut scroll = InfiniteScroll::new();
        assert!(scroll.observe(true, true, false));
        scroll.disconnect();
        assert!(!scroll.is_connected());
        assert!(scroll.observe(true, true, false));
    }
}
