//! Grid actions: what a click or keystroke inside a grid asks the host to do.
//!
//! Interactive elements carry their action encoded in the element's data map
//! under [`ACTION_KEY`]. After a click has been hit-tested, the action is
//! decoded back from the element that was hit.

use atelier_dom::{find_element, hit_test, Element, LayoutResult};

/// Element data key holding an encoded [`GridAction`].
pub const ACTION_KEY: &str = "grid-action";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    /// A sortable header was clicked.
    Sort(String),
    PageChange(u32),
    PageSizeChange(u32),
    /// The search text changed (carries the full new text).
    SearchChange(String),
    /// A row or card was clicked; the index points into the grid's data.
    RowClick(usize),
    LoadMore,
}

impl GridAction {
    pub fn encode(&self) -> String {
        match self {
            GridAction::Sort(key) => format!("sort:{key}"),
            GridAction::PageChange(page) => format!("page:{page}"),
            GridAction::PageSizeChange(size) => format!("size:{size}"),
            GridAction::SearchChange(term) => format!("search:{term}"),
            GridAction::RowClick(index) => format!("row:{index}"),
            GridAction::LoadMore => "load-more".to_string(),
        }
    }

    pub fn decode(raw: &str) -> Option<Self> {
        if raw == "load-more" {
            return Some(GridAction::LoadMore);
        }
        let (kind, value) = raw.split_once(':')?;
        match kind {
            "sort" => Some(GridAction::Sort(value.to_string())),
            "page" => value.parse().ok().map(GridAction::PageChange),
            "size" => value.parse().ok().map(GridAction::PageSizeChange),
            "search" => Some(GridAction::SearchChange(value.to_string())),
            "row" => value.parse().ok().map(GridAction::RowClick),
            _ => None,
        }
    }

    /// Action bound to `element`. Disabled elements never yield one.
    pub fn from_element(element: &Element) -> Option<Self> {
        if element.disabled {
            return None;
        }
        element.get_data(ACTION_KEY).and_then(|raw| Self::decode(raw))
    }
}

/// Attach `action` to `element` and make it clickable.
pub(crate) fn bind(element: Element, action: &GridAction) -> Element {
    element.clickable(true).data(ACTION_KEY, action.encode())
}

/// Resolve a click at `(x, y)` to the grid action under it, if any.
pub fn action_at(root: &Element, layout: &LayoutResult, x: u16, y: u16) -> Option<GridAction> {
    let id = hit_test(layout, root, x, y)?;
    let element = find_element(root, &id)?;
    let action = GridAction::from_element(element);
    log::debug!("click at ({x}, {y}) hit '{id}' -> {action:?}");
    action
}
