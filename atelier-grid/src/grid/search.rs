//! Single-line search input.

use atelier_dom::{Border, Color, Edges, Element, Key, Size, Style};

use crate::action::GridAction;

const PLACEHOLDER_FG: Color = Color::hex(0x6C6C80);
const FOCUS_FG: Color = Color::hex(0xA277FF);

/// Local text of the grid's search box.
///
/// Every edit is forwarded as [`GridAction::SearchChange`] with the full
/// text; there is no debouncing here. The parent owns the committed term:
/// when it changes from the value seen last, the local text follows it.
///
/// There is no cursor: `Backspace` removes the last character and `Delete`
/// clears the whole text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchInput {
    text: String,
    seen_term: String,
    focused: bool,
}

impl SearchInput {
    pub fn new(term: &str) -> Self {
        Self {
            text: term.to_string(),
            seen_term: term.to_string(),
            focused: false,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Adopt the parent's term if it moved since the last sync.
    pub fn sync(&mut self, parent_term: &str) {
        if parent_term != self.seen_term {
            self.seen_term = parent_term.to_string();
            self.text = parent_term.to_string();
        }
    }

    /// Apply a key press. Returns the search change to report, if the text
    /// changed. `Enter` and `Escape` release focus.
    pub fn handle_key(&mut self, key: Key) -> Option<GridAction> {
        if !self.focused {
            return None;
        }
        match key {
            Key::Char(c) => self.text.push(c),
            Key::Backspace => {
                self.text.pop()?;
            }
            Key::Delete => {
                if self.text.is_empty() {
                    return None;
                }
                self.text.clear();
            }
            Key::Enter | Key::Escape => {
                self.focused = false;
                return None;
            }
            _ => return None,
        }
        Some(GridAction::SearchChange(self.text.clone()))
    }

    pub fn element(&self, id: &str, placeholder: &str) -> Element {
        let (content, fg) = if self.text.is_empty() {
            (placeholder.to_string(), PLACEHOLDER_FG)
        } else {
            (self.text.clone(), Color::WHITE)
        };
        let content = if self.focused {
            format!("{content}▏")
        } else {
            content
        };

        let border = if self.focused { FOCUS_FG } else { PLACEHOLDER_FG };
        Element::box_()
            .id(id)
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .style(Style::new().border(Border::Rounded).foreground(border))
            .child(
                Element::text(content)
                    .id(format!("{id}-text"))
                    .style(Style::new().foreground(fg)),
            )
    }
}
