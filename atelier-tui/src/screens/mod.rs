//! Catalog list screens.

pub mod columns;
mod list;

pub use list::{ListScreen, ListState};

use atelier_dom::{Element, Key, LayoutResult};
use atelier_grid::{GridAction, ViewportClassifier};

use crate::catalog::{CatalogError, Course, ListPage, Product};
use crate::settings::GridPreferences;

/// How a fetched page is merged into the current records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fetch {
    /// The page replaces the records.
    Replace,
    /// The page after the last loaded one is appended.
    Append,
}

/// Follow-up work requested by a state change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Effects {
    pub fetch: Option<Fetch>,
    pub preferences_changed: bool,
}

impl Effects {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn fetch(kind: Fetch) -> Self {
        Self {
            fetch: Some(kind),
            preferences_changed: false,
        }
    }

    pub fn and_save_preferences(mut self) -> Self {
        self.preferences_changed = true;
        self
    }
}

/// Result of a background page fetch.
#[derive(Debug)]
pub struct Fetched<T> {
    /// Id of the request this answers; older ids are stale.
    pub request: u64,
    pub kind: Fetch,
    pub result: Result<ListPage<T>, CatalogError>,
}

/// Messages sent from background tasks to the event loop.
#[derive(Debug)]
pub enum AppMessage {
    Courses(Fetched<Course>),
    Products(Fetched<Product>),
}

/// What the event loop needs from a screen, independent of its record type.
pub trait Screen {
    /// Settings key and element id prefix.
    fn key(&self) -> &'static str;

    fn title(&self) -> &str;

    fn view(&self, viewport: &dyn ViewportClassifier) -> Element;

    fn apply(&mut self, action: &GridAction) -> Effects;

    /// Screen-level key handling. Returns `None` if the key was not used.
    fn handle_key(&mut self, key: Key) -> Option<Effects>;

    /// Whether keys should go to the screen before global shortcuts.
    fn captures_keys(&self) -> bool;

    fn scroll(&mut self, delta: i16);

    /// A left click at `(x, y)` on the frame `root` was drawn as.
    fn click(&mut self, root: &Element, layout: &LayoutResult, x: u16, y: u16) -> Effects;

    /// Called after every render with the layout that was drawn.
    fn after_layout(&mut self, layout: &LayoutResult, viewport: &dyn ViewportClassifier) -> Effects;

    fn fetch(&mut self, kind: Fetch);

    fn preferences(&self) -> GridPreferences;
}
