//! The table grid: search, header, body and pagination in one element tree.

use std::borrow::Cow;

use atelier_dom::{Color, Element, Size, Style, TextAlign};

use super::body::TableBody;
use super::column::{ColumnSet, Fields};
use super::header::TableHeader;
use super::pagination::{PaginationControl, PaginationInfo};
use super::search::SearchInput;
use super::sort::SortState;
use crate::action::GridAction;
use crate::config::GridConfig;
use crate::handlers::GridHandlers;

const ERROR_FG: Color = Color::hex(0xFF6767);

/// A sortable, paginated table over a borrowed slice of records.
///
/// All state is passed in; the grid only turns it into an [`Element`] tree
/// and turns actions back into host callbacks.
pub struct DataGrid<'a, T> {
    id: String,
    data: &'a [T],
    columns: &'a ColumnSet<T>,
    config: Cow<'a, GridConfig>,
    sort: Cow<'a, SortState>,
    pagination: Option<PaginationInfo>,
    show_pagination: bool,
    loading: bool,
    error: Option<&'a str>,
    search: Option<&'a SearchInput>,
    row_click: bool,
    scroll_offset: usize,
    tail: Option<Element>,
}

impl<'a, T: Fields> DataGrid<'a, T> {
    pub fn new(data: &'a [T], columns: &'a ColumnSet<T>) -> Self {
        Self {
            id: "grid".into(),
            data,
            columns,
            config: Cow::Owned(GridConfig::default()),
            sort: Cow::Owned(SortState::none()),
            pagination: None,
            show_pagination: true,
            loading: false,
            error: None,
            search: None,
            row_click: false,
            scroll_offset: 0,
            tail: None,
        }
    }

    /// Prefix for every element id in the grid.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn config(mut self, config: &'a GridConfig) -> Self {
        self.config = Cow::Borrowed(config);
        self
    }

    pub fn sort(mut self, sort: &'a SortState) -> Self {
        self.sort = Cow::Borrowed(sort);
        self
    }

    pub fn pagination(mut self, info: PaginationInfo) -> Self {
        self.pagination = Some(info);
        self
    }

    pub(crate) fn show_pagination(mut self, show: bool) -> Self {
        self.show_pagination = show;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Replace the whole grid with this message.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Show a search box driven by `input`.
    pub fn search(mut self, input: &'a SearchInput) -> Self {
        self.search = Some(input);
        self
    }

    /// Make rows clickable. Pass [`GridHandlers::has_row_click`].
    pub fn row_click(mut self, enabled: bool) -> Self {
        self.row_click = enabled;
        self
    }

    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    pub(crate) fn tail(mut self, tail: Element) -> Self {
        self.tail = Some(tail);
        self
    }

    pub fn grid_id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &'a [T] {
        self.data
    }

    pub fn columns(&self) -> &'a ColumnSet<T> {
        self.columns
    }

    pub fn grid_config(&self) -> &GridConfig {
        &self.config
    }

    pub fn pagination_info(&self) -> Option<&PaginationInfo> {
        self.pagination.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error_message(&self) -> Option<&'a str> {
        self.error
    }

    pub fn search_input(&self) -> Option<&'a SearchInput> {
        self.search
    }

    pub fn has_row_click(&self) -> bool {
        self.row_click
    }

    pub fn current_scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Id of the element rows scroll inside.
    pub fn body_id(&self) -> String {
        format!("{}-body", self.id)
    }

    pub fn build(mut self) -> Element {
        if let Some(error) = self.error {
            log::debug!("grid '{}' showing error: {error}", self.id);
            return error_view(&self.id, error);
        }

        let tail = self.tail.take();
        let widths = self.columns.widths(self.data, self.config.max_column_width);
        let header = TableHeader::new(&self.id, self.columns, &widths, &self.sort).build();

        let mut body = TableBody::new(&self.id, self.data, self.columns, &widths)
            .loading(self.loading)
            .loading_message(&self.config.loading_message)
            .empty_message(&self.config.empty_message)
            .interactive(self.row_click)
            .scroll_offset(self.scroll_offset);
        if let Some(tail) = tail {
            body = body.tail(tail);
        }
        log::debug!(
            "grid '{}': {} rows, state {:?}",
            self.id,
            self.data.len(),
            body.state()
        );

        let mut root = Element::col()
            .id(self.id.clone())
            .width(Size::Fill)
            .height(Size::Fill)
            .gap(1);

        if let Some(search) = self.search {
            root = root.child(search.element(
                &format!("{}-search", self.id),
                &self.config.search_placeholder,
            ));
        }

        root = root.child(
            Element::col()
                .id(format!("{}-table", self.id))
                .width(Size::Fill)
                .height(Size::Fill)
                .child(header)
                .child(body.build()),
        );

        if let Some(control) = self.pagination_control() {
            root = root.child(control);
        }
        root
    }

    pub(crate) fn pagination_control(&self) -> Option<Element> {
        if !self.show_pagination {
            return None;
        }
        let info = self.pagination.as_ref()?;
        let sizes: &[u32] = if self.config.show_page_size {
            &self.config.page_sizes
        } else {
            &[]
        };
        PaginationControl::new(info)
            .id(format!("{}-pagination", self.id))
            .page_sizes(sizes)
            .build()
    }

    /// Hand `action` to the matching callback.
    ///
    /// Page changes outside `1..=total_pages` are dropped, so a stale click
    /// on a disabled control can never reach the host.
    pub fn dispatch(&self, action: &GridAction, handlers: &mut GridHandlers<'_, T>) -> bool {
        if let (GridAction::PageChange(page), Some(info)) = (action, &self.pagination) {
            if *page == 0 || *page > info.total_pages {
                log::debug!("grid '{}' ignoring page {page} of {}", self.id, info.total_pages);
                return false;
            }
        }
        handlers.dispatch(action, self.data)
    }
}

pub(crate) fn error_view(id: &str, error: &str) -> Element {
    Element::col().id(id).width(Size::Fill).height(Size::Fill).child(
        Element::text(error)
            .id(format!("{id}-error"))
            .width(Size::Fill)
            .text_align(TextAlign::Center)
            .style(Style::new().foreground(ERROR_FG).bold()),
    )
}
