use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

/// Terminal input, reduced to what the widgets react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key { key: Key, modifiers: Modifiers },
    Click { x: u16, y: u16, button: MouseButton },
    Scroll { x: u16, y: u16, delta: i16 },
    Resize { width: u16, height: u16 },
}

/// Simplified key representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    BackTab,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
}

impl Modifiers {
    pub fn none(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl Event {
    /// Convert a crossterm event. Events nothing here cares about map to None.
    pub fn from_crossterm(event: crossterm::event::Event) -> Option<Self> {
        use crossterm::event::{Event as Ct, KeyCode, KeyEventKind, MouseEventKind};

        match event {
            Ct::Key(key) if key.kind != KeyEventKind::Release => {
                let key_code = match key.code {
                    KeyCode::Char(c) => Key::Char(c),
                    KeyCode::Enter => Key::Enter,
                    KeyCode::Backspace => Key::Backspace,
                    KeyCode::Delete => Key::Delete,
                    KeyCode::Tab => Key::Tab,
                    KeyCode::BackTab => Key::BackTab,
                    KeyCode::Esc => Key::Escape,
                    KeyCode::Up => Key::Up,
                    KeyCode::Down => Key::Down,
                    KeyCode::Left => Key::Left,
                    KeyCode::Right => Key::Right,
                    KeyCode::Home => Key::Home,
                    KeyCode::End => Key::End,
                    KeyCode::PageUp => Key::PageUp,
                    KeyCode::PageDown => Key::PageDown,
                    _ => return None,
                };
                Some(Event::Key {
                    key: key_code,
                    modifiers: key.modifiers.into(),
                })
            }
            Ct::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(button) => Some(Event::Click {
                    x: mouse.column,
                    y: mouse.row,
                    button: button.into(),
                }),
                MouseEventKind::ScrollDown => Some(Event::Scroll {
                    x: mouse.column,
                    y: mouse.row,
                    delta: 1,
                }),
                MouseEventKind::ScrollUp => Some(Event::Scroll {
                    x: mouse.column,
                    y: mouse.row,
                    delta: -1,
                }),
                _ => None,
            },
            Ct::Resize(width, height) => Some(Event::Resize { width, height }),
            _ => None,
        }
    }
}

impl From<crossterm::event::KeyModifiers> for Modifiers {
    fn from(mods: crossterm::event::KeyModifiers) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            shift: mods.contains(KeyModifiers::SHIFT),
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
        }
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}

// =============================================================================
// Resize listeners
// =============================================================================

type ResizeListener = Box<dyn Fn(u16, u16) + Send + Sync>;

#[derive(Default)]
struct Listeners {
    next_id: AtomicU64,
    entries: Mutex<BTreeMap<u64, ResizeListener>>,
}

/// Fan-out point for terminal resize events.
///
/// Listeners stay registered for as long as their [`Subscription`] lives.
#[derive(Clone, Default)]
pub struct ResizeBus {
    inner: Arc<Listeners>,
}

impl ResizeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; dropping the returned subscription removes it.
    pub fn subscribe(&self, listener: impl Fn(u16, u16) + Send + Sync + 'static) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        if let Ok(mut entries) = self.inner.entries.lock() {
            entries.insert(id, Box::new(listener));
        }
        log::debug!("resize listener {id} registered");
        Subscription {
            id,
            bus: Arc::downgrade(&self.inner),
        }
    }

    /// Deliver a resize to every listener.
    pub fn emit(&self, width: u16, height: u16) {
        if let Ok(entries) = self.inner.entries.lock() {
            for listener in entries.values() {
                listener(width, height);
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.entries.lock().map(|e| e.len()).unwrap_or(0)
    }
}

/// Handle for a registered resize listener.
#[must_use = "the listener is removed as soon as the subscription is dropped"]
pub struct Subscription {
    id: u64,
    bus: Weak<Listeners>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("id", &self.id)
            .field("live", &(self.bus.strong_count() > 0))
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(bus) = self.bus.upgrade() else {
            return;
        };
        if let Ok(mut entries) = bus.entries.lock() {
            entries.remove(&self.id);
        }
        log::debug!("resize listener {} removed", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicU16;

    #[test]
    fn dropping_subscription_unregisters() {
        let bus = ResizeBus::new();
        let seen = Arc::new(AtomicU16::new(0));

        let sub = {
            let seen = seen.clone();
            bus.subscribe(move |w, _| seen.store(w, Ordering::SeqCst))
        };
        bus.emit(120, 40);
        assert_eq!(seen.load(Ordering::SeqCst), 120);
        assert_eq!(bus.listener_count(), 1);

        drop(sub);
        assert_eq!(bus.listener_count(), 0);
        bus.emit(60, 40);
        assert_eq!(seen.load(Ordering::SeqCst), 120);
    }

    #[test]
    fn subscription_debug_reports_liveness() {
        let bus = ResizeBus::new();
        let sub = bus.subscribe(|_, _| {});
        assert_eq!(format!("{sub:?}"), "Subscription { id: 0, live: true }");

        drop(bus);
        assert_eq!(format!("{sub:?}"), "Subscription { id: 0, live: false }");
    }
}
