//! Responsive grid: a table on wide terminals, a stack of cards on narrow ones.

use atelier_dom::{Border, Color, Edges, Element, Size, Style, TextAlign};
use serde::{Deserialize, Serialize};

use super::body::{message_row, BodyState};
use super::column::{ColumnSet, Fields};
use super::data_grid::{error_view, DataGrid};
use super::pagination::PaginationInfo;
use super::search::SearchInput;
use super::sort::SortState;
use crate::action::{bind, GridAction};
use crate::config::GridConfig;
use crate::handlers::GridHandlers;
use crate::infinite::sentinel_visible;
use crate::viewport::ViewportClassifier;

const CARD_BORDER: Color = Color::hex(0x4D4D66);
const LABEL_FG: Color = Color::hex(0x8A8AA0);

/// How further records are reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaginationMode {
    /// Numbered pages with a [`PaginationControl`](super::PaginationControl).
    #[default]
    Paged,
    /// A sentinel after the last record requests the next page.
    InfiniteScroll,
}

impl PaginationMode {
    pub fn toggled(self) -> Self {
        match self {
            PaginationMode::Paged => PaginationMode::InfiniteScroll,
            PaginationMode::InfiniteScroll => PaginationMode::Paged,
        }
    }
}

pub struct ResponsiveDataGrid<'a, T> {
    grid: DataGrid<'a, T>,
    viewport: &'a dyn ViewportClassifier,
    mode: PaginationMode,
    fetching_next: bool,
}

impl<'a, T: Fields> ResponsiveDataGrid<'a, T> {
    pub fn new(
        data: &'a [T],
        columns: &'a ColumnSet<T>,
        viewport: &'a dyn ViewportClassifier,
    ) -> Self {
        Self {
            grid: DataGrid::new(data, columns),
            viewport,
            mode: PaginationMode::Paged,
            fetching_next: false,
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.grid = self.grid.id(id);
        self
    }

    pub fn config(mut self, config: &'a GridConfig) -> Self {
        self.grid = self.grid.config(config);
        self
    }

    pub fn sort(mut self, sort: &'a SortState) -> Self {
        self.grid = self.grid.sort(sort);
        self
    }

    pub fn pagination(mut self, info: PaginationInfo) -> Self {
        self.grid = self.grid.pagination(info);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.grid = self.grid.loading(loading);
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.grid = self.grid.error(error);
        self
    }

    pub fn search(mut self, input: &'a SearchInput) -> Self {
        self.grid = self.grid.search(input);
        self
    }

    pub fn row_click(mut self, enabled: bool) -> Self {
        self.grid = self.grid.row_click(enabled);
        self
    }

    /// Leading rows (table) or cards to skip.
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.grid = self.grid.scroll_offset(offset);
        self
    }

    pub fn mode(mut self, mode: PaginationMode) -> Self {
        self.mode = mode;
        self
    }

    /// A further page is being fetched in infinite mode.
    pub fn fetching_next(mut self, fetching: bool) -> Self {
        self.fetching_next = fetching;
        self
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport.is_mobile()
    }

    pub fn sentinel_id(&self) -> String {
        format!("{}-sentinel", self.grid.grid_id())
    }

    /// Id of the container the records scroll in for the current layout.
    pub fn viewport_id(&self) -> String {
        if self.is_mobile() {
            format!("{}-cards", self.grid.grid_id())
        } else {
            self.grid.body_id()
        }
    }

    /// Whether the sentinel was on screen in `layout`.
    pub fn sentinel_visible(&self, layout: &atelier_dom::LayoutResult) -> bool {
        self.mode == PaginationMode::InfiniteScroll
            && sentinel_visible(layout, &self.viewport_id(), &self.sentinel_id())
    }

    pub fn build(self) -> Element {
        let mobile = self.is_mobile();
        log::debug!(
            "responsive grid '{}': mobile={mobile}, mode={:?}",
            self.grid.grid_id(),
            self.mode
        );

        if let Some(error) = self.grid.error_message() {
            return error_view(self.grid.grid_id(), error);
        }

        match (mobile, self.mode) {
            (true, _) => self.build_cards(),
            (false, PaginationMode::Paged) => self.grid.build(),
            (false, PaginationMode::InfiniteScroll) => {
                let tail = self.infinite_tail();
                self.grid.show_pagination(false).tail(tail).build()
            }
        }
    }

    fn infinite_tail(&self) -> Element {
        let id = self.grid.grid_id();
        let sentinel = Element::box_()
            .id(self.sentinel_id())
            .width(Size::Fill)
            .height(Size::Fixed(1));
        let mut tail = Element::col()
            .id(format!("{id}-tail"))
            .width(Size::Fill)
            .child(sentinel);
        if self.fetching_next {
            tail = tail.child(
                Element::text(self.grid.grid_config().loading_more_message.as_str())
                    .id(format!("{id}-loading-more"))
                    .width(Size::Fill)
                    .text_align(TextAlign::Center)
                    .style(Style::new().foreground(LABEL_FG).italic()),
            );
        }
        tail
    }

    fn build_cards(self) -> Element {
        let grid = &self.grid;
        let id = grid.grid_id();
        let config = grid.grid_config();
        let data = grid.data();

        let mut cards = Element::col()
            .id(format!("{id}-cards"))
            .width(Size::Fill)
            .height(Size::Fill)
            .gap(1);

        match BodyState::of(grid.is_loading(), data.len()) {
            BodyState::Loading => {
                cards = cards.child(message_row(format!("{id}-loading"), &config.loading_message));
            }
            BodyState::Empty => {
                cards = cards.child(message_row(format!("{id}-empty"), &config.empty_message));
            }
            BodyState::Populated => {
                cards = cards
                    .scroll_offset(grid.current_scroll_offset())
                    .children(data.iter().enumerate().map(|(i, record)| self.card(i, record)));
                if self.mode == PaginationMode::InfiniteScroll {
                    cards = cards.child(self.infinite_tail());
                }
            }
        }

        let mut root = Element::col()
            .id(id)
            .width(Size::Fill)
            .height(Size::Fill)
            .gap(1);
        if let Some(search) = grid.search_input() {
            root = root.child(search.element(&format!("{id}-search"), &config.search_placeholder));
        }
        root = root.child(cards);

        if self.mode == PaginationMode::Paged {
            if let Some(control) = grid.pagination_control() {
                root = root.child(control);
            }
        }
        root
    }

    /// One card: a `label: value` line per field, then the actions.
    fn card(&self, index: usize, record: &T) -> Element {
        let id = self.grid.grid_id();
        let columns = self.grid.columns();

        let mut card = Element::col()
            .id(format!("{id}-card-{index}"))
            .width(Size::Fill)
            .padding(Edges::horizontal(1))
            .style(Style::new().border(Border::Rounded).foreground(CARD_BORDER));

        for column in columns.fields() {
            card = card.child(
                Element::row()
                    .id(format!("{id}-card-{index}-{}", column.key))
                    .gap(1)
                    .child(
                        Element::text(format!("{}:", column.label))
                            .style(Style::new().foreground(LABEL_FG).bold()),
                    )
                    .child(value_cell(column.cell(record, index))),
            );
        }

        if let Some(actions) = columns.actions() {
            card = card.child(
                Element::row()
                    .id(format!("{id}-card-{index}-actions"))
                    .child(actions.cell(record, index)),
            );
        }

        if self.grid.has_row_click() {
            bind(card, &GridAction::RowClick(index)).data("cursor", "pointer")
        } else {
            card
        }
    }

    /// See [`DataGrid::dispatch`].
    pub fn dispatch(&self, action: &GridAction, handlers: &mut GridHandlers<'_, T>) -> bool {
        self.grid.dispatch(action, handlers)
    }
}

/// Values read brighter than their labels unless the column styled them.
fn value_cell(cell: Element) -> Element {
    let style = Style::new().foreground(Color::WHITE).merge(&cell.style);
    cell.style(style)
}
