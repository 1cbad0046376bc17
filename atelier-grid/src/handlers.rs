//! Host callbacks for grid actions.

use crate::action::GridAction;

/// Callbacks a host registers on a grid. Every one is optional; an action
/// without a matching callback is dropped.
pub struct GridHandlers<'h, T> {
    on_sort: Option<Box<dyn FnMut(&str) + 'h>>,
    on_page_change: Option<Box<dyn FnMut(u32) + 'h>>,
    on_page_size_change: Option<Box<dyn FnMut(u32) + 'h>>,
    on_search_change: Option<Box<dyn FnMut(&str) + 'h>>,
    on_row_click: Option<Box<dyn FnMut(&T) + 'h>>,
    on_load_more: Option<Box<dyn FnMut() + 'h>>,
}

impl<T> Default for GridHandlers<'_, T> {
    fn default() -> Self {
        Self {
            on_sort: None,
            on_page_change: None,
            on_page_size_change: None,
            on_search_change: None,
            on_row_click: None,
            on_load_more: None,
        }
    }
}

impl<'h, T> GridHandlers<'h, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_sort(mut self, f: impl FnMut(&str) + 'h) -> Self {
        self.on_sort = Some(Box::new(f));
        self
    }

    pub fn on_page_change(mut self, f: impl FnMut(u32) + 'h) -> Self {
        self.on_page_change = Some(Box::new(f));
        self
    }

    pub fn on_page_size_change(mut self, f: impl FnMut(u32) + 'h) -> Self {
        self.on_page_size_change = Some(Box::new(f));
        self
    }

    pub fn on_search_change(mut self, f: impl FnMut(&str) + 'h) -> Self {
        self.on_search_change = Some(Box::new(f));
        self
    }

    pub fn on_row_click(mut self, f: impl FnMut(&T) + 'h) -> Self {
        self.on_row_click = Some(Box::new(f));
        self
    }

    pub fn on_load_more(mut self, f: impl FnMut() + 'h) -> Self {
        self.on_load_more = Some(Box::new(f));
        self
    }

    /// Whether rows should be rendered as clickable.
    pub fn has_row_click(&self) -> bool {
        self.on_row_click.is_some()
    }

    pub fn has_load_more(&self) -> bool {
        self.on_load_more.is_some()
    }

    /// Invoke the callback matching `action` once.
    ///
    /// A row click passes `&data[index]`. Returns `false` when nothing
    /// handled the action (no callback, or a row index outside `data`).
    pub fn dispatch(&mut self, action: &GridAction, data: &[T]) -> bool {
        log::debug!("dispatching {action:?}");
        match action {
            GridAction::Sort(key) => call(&mut self.on_sort, |f| f(key)),
            GridAction::PageChange(page) => call(&mut self.on_page_change, |f| f(*page)),
            GridAction::PageSizeChange(size) => call(&mut self.on_page_size_change, |f| f(*size)),
            GridAction::SearchChange(term) => call(&mut self.on_search_change, |f| f(term)),
            GridAction::RowClick(index) => match (self.on_row_click.as_mut(), data.get(*index)) {
                (Some(f), Some(record)) => {
                    f(record);
                    true
                }
                _ => false,
            },
            GridAction::LoadMore => call(&mut self.on_load_more, |f| f()),
        }
    }
}

fn call<F: ?Sized>(slot: &mut Option<Box<F>>, invoke: impl FnOnce(&mut F)) -> bool {
    match slot.as_deref_mut() {
        Some(f) => {
            invoke(f);
            true
        }
        None => false,
    }
}
