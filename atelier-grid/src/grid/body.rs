//! Table body: the rows, or the loading / empty message in their place.

use atelier_dom::{Color, Element, Size, Style, TextAlign};

use super::column::{ColumnSet, Fields};
use crate::action::{bind, GridAction};

const MESSAGE_FG: Color = Color::hex(0x8A8AA0);

/// Which of the mutually exclusive body states applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyState {
    Loading,
    Empty,
    Populated,
}

impl BodyState {
    /// Loading wins over empty: the list is expected to be empty while a
    /// fetch is outstanding.
    pub fn of(loading: bool, len: usize) -> Self {
        if loading {
            BodyState::Loading
        } else if len == 0 {
            BodyState::Empty
        } else {
            BodyState::Populated
        }
    }
}

pub struct TableBody<'a, T> {
    grid_id: &'a str,
    data: &'a [T],
    columns: &'a ColumnSet<T>,
    widths: &'a [u16],
    loading: bool,
    loading_message: &'a str,
    empty_message: &'a str,
    interactive: bool,
    scroll_offset: usize,
    tail: Option<Element>,
}

impl<'a, T: Fields> TableBody<'a, T> {
    pub fn new(
        grid_id: &'a str,
        data: &'a [T],
        columns: &'a ColumnSet<T>,
        widths: &'a [u16],
    ) -> Self {
        Self {
            grid_id,
            data,
            columns,
            widths,
            loading: false,
            loading_message: "Loading...",
            empty_message: "No data available",
            interactive: false,
            scroll_offset: 0,
            tail: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn loading_message(mut self, message: &'a str) -> Self {
        self.loading_message = message;
        self
    }

    pub fn empty_message(mut self, message: &'a str) -> Self {
        self.empty_message = message;
        self
    }

    /// Rows are clickable only when the host handles row clicks.
    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    /// Skip this many leading rows.
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Element appended after the last row (infinite-scroll sentinel).
    pub fn tail(mut self, tail: Element) -> Self {
        self.tail = Some(tail);
        self
    }

    pub fn state(&self) -> BodyState {
        BodyState::of(self.loading, self.data.len())
    }

    pub fn build(self) -> Element {
        let body = Element::col()
            .id(format!("{}-body", self.grid_id))
            .width(Size::Fill)
            .height(Size::Fill);

        match self.state() {
            BodyState::Loading => body.child(message_row(
                format!("{}-loading", self.grid_id),
                self.loading_message,
            )),
            BodyState::Empty => body.child(message_row(
                format!("{}-empty", self.grid_id),
                self.empty_message,
            )),
            BodyState::Populated => {
                let rows = self
                    .data
                    .iter()
                    .enumerate()
                    .map(|(index, record)| self.row(index, record))
                    .collect::<Vec<_>>();
                let body = body.scroll_offset(self.scroll_offset).children(rows);
                match self.tail {
                    Some(tail) => body.child(tail),
                    None => body,
                }
            }
        }
    }

    fn row(&self, index: usize, record: &T) -> Element {
        let cells = self
            .columns
            .iter()
            .zip(self.widths)
            .map(|(column, &width)| {
                Element::box_()
                    .id(format!("{}-cell-{index}-{}", self.grid_id, column.key))
                    .width(Size::Fixed(width))
                    .child(column.cell(record, index))
            });

        let row = Element::row()
            .id(format!("{}-row-{index}", self.grid_id))
            .width(Size::Fill)
            .gap(2)
            .children(cells);

        if self.interactive {
            bind(row, &GridAction::RowClick(index)).data("cursor", "pointer")
        } else {
            row
        }
    }
}

/// Single full-width message line (loading, empty, error).
pub(crate) fn message_row(id: String, message: &str) -> Element {
    Element::text(message)
        .id(id)
        .width(Size::Fill)
        .text_align(TextAlign::Center)
        .style(Style::new().foreground(MESSAGE_FG).italic())
}
