//! Mobile/desktop viewport classification.

use std::sync::atomic::{AtomicU16, Ordering};
use std::sync::Arc;

use atelier_dom::{ResizeBus, Subscription};
use serde::{Deserialize, Serialize};

use crate::config::MOBILE_BREAKPOINT;

/// Width threshold between the card and the table layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Breakpoint(u16);

impl Breakpoint {
    pub const fn new(width: u16) -> Self {
        Self(width)
    }

    pub fn width(self) -> u16 {
        self.0
    }

    /// Strictly narrower than the breakpoint counts as mobile.
    pub fn is_mobile(self, width: u16) -> bool {
        width < self.0
    }
}

impl Default for Breakpoint {
    fn default() -> Self {
        Self(MOBILE_BREAKPOINT)
    }
}

/// Decides whether the responsive grid should render cards.
pub trait ViewportClassifier {
    fn is_mobile(&self) -> bool;
}

/// A classifier with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedViewport(pub bool);

impl FixedViewport {
    pub fn mobile() -> Self {
        Self(true)
    }

    pub fn desktop() -> Self {
        Self(false)
    }
}

impl ViewportClassifier for FixedViewport {
    fn is_mobile(&self) -> bool {
        self.0
    }
}

/// Tracks the terminal width through a [`ResizeBus`].
///
/// The width is re-read on every resize event. Dropping the viewport drops
/// its subscription, which unregisters the listener.
#[derive(Debug)]
pub struct ResizeViewport {
    width: Arc<AtomicU16>,
    breakpoint: Breakpoint,
    _subscription: Subscription,
}

impl ResizeViewport {
    pub fn attach(bus: &ResizeBus, initial_width: u16, breakpoint: Breakpoint) -> Self {
        let width = Arc::new(AtomicU16::new(initial_width));
        let listener_width = Arc::clone(&width);
        let subscription = bus.subscribe(move |w, _h| {
            listener_width.store(w, Ordering::Relaxed);
        });
        log::debug!(
            "viewport attached at width {initial_width}, breakpoint {}",
            breakpoint.width()
        );
        Self {
            width,
            breakpoint,
            _subscription: subscription,
        }
    }

    pub fn width(&self) -> u16 {
        self.width.load(Ordering::Relaxed)
    }

    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    pub fn set_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoint = breakpoint;
    }
}

impl ViewportClassifier for ResizeViewport {
    fn is_mobile(&self) -> bool {
        self.breakpoint.is_mobile(self.width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        let bp = Breakpoint::default();
        assert!(bp.is_mobile(767));
        assert!(!bp.is_mobile(768));
    }

    #[test]
    fn resize_reclassifies() {
        let bus = ResizeBus::new();
        let viewport = ResizeViewport::attach(&bus, 120, Breakpoint::new(80));
        assert!(!viewport.is_mobile());

        bus.emit(60, 40);
        assert!(viewport.is_mobile());

        bus.emit(100, 40);
        assert!(!viewport.is_mobile());
    }

    #[test]
    fn drop_unsubscribes() {
        let bus = ResizeBus::new();
        let viewport = ResizeViewport::attach(&bus, 120, Breakpoint::new(80));
        assert_eq!(bus.listener_count(), 1);
        drop(viewport);
        assert_eq!(bus.listener_count(), 0);
    }
}
