//! A searchable, sortable, paged list of catalog records.

use std::cell::RefCell;
use std::sync::Arc;

use atelier_dom::{Color, Element, Key, LayoutResult, Size, Style};
use atelier_grid::{
    action_at, Breakpoint, ColumnSet, DataGrid, GridAction, GridConfig, GridHandlers,
    InfiniteScroll, PaginationInfo, PaginationMode, ResponsiveDataGrid, SearchInput, SortState,
    ViewportClassifier,
};
use tokio::sync::mpsc::UnboundedSender;

use super::{AppMessage, Effects, Fetch, Fetched, Screen};
use crate::catalog::{CatalogRecord, CatalogRepository, ListQuery};
use crate::settings::GridPreferences;

const STATUS_FG: Color = Color::hex(0x8A8AA0);
const DETAIL_FG: Color = Color::hex(0xA277FF);

/// Narrowest and widest breakpoint offered by the `-`/`+` keys.
const BREAKPOINT_RANGE: (u16, u16) = (40, 200);
const BREAKPOINT_STEP: u16 = 10;

/// Everything a list screen shows, owned by the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T> {
    pub search: String,
    pub sort: SortState,
    /// Current page in paged mode; last loaded page in infinite mode.
    pub page: u32,
    pub limit: u32,
    pub pagination: Option<PaginationInfo>,
    /// A replacing fetch is in flight.
    pub loading: bool,
    /// An appending fetch is in flight.
    pub fetching_next: bool,
    /// The last append failed; no more are requested until the next reload.
    pub load_more_failed: bool,
    pub error: Option<String>,
    pub records: Vec<T>,
    /// Line shown under the grid after a row was opened.
    pub detail: Option<String>,
    pub scroll: usize,
}

impl<T> ListState<T> {
    fn new(limit: u32) -> Self {
        Self {
            search: String::new(),
            sort: SortState::none(),
            page: 1,
            limit,
            pagination: None,
            loading: false,
            fetching_next: false,
            load_more_failed: false,
            error: None,
            records: Vec::new(),
            detail: None,
            scroll: 0,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            search: self.search.clone(),
            sort: self.sort.clone(),
            page: self.page,
            limit: self.limit,
        }
    }

    fn has_next_page(&self) -> bool {
        self.pagination.is_some_and(|p| p.has_next_page)
    }
}

/// Grid callback results, applied once dispatch has returned.
enum Intent {
    Sort(String),
    Page(u32),
    PageSize(u32),
    Search(String),
    Open(String),
    LoadMore,
}

pub struct ListScreen<T: CatalogRecord> {
    key: &'static str,
    title: String,
    columns: ColumnSet<T>,
    config: GridConfig,
    preferences: GridPreferences,
    state: ListState<T>,
    search_input: SearchInput,
    infinite: InfiniteScroll,
    repo: Arc<dyn CatalogRepository<T>>,
    sender: UnboundedSender<AppMessage>,
    wrap: fn(Fetched<T>) -> AppMessage,
    describe: fn(&T) -> String,
    request_id: u64,
}

impl<T: CatalogRecord> ListScreen<T> {
    pub fn new(
        key: &'static str,
        title: impl Into<String>,
        columns: ColumnSet<T>,
        repo: Arc<dyn CatalogRepository<T>>,
        sender: UnboundedSender<AppMessage>,
        wrap: fn(Fetched<T>) -> AppMessage,
    ) -> Self {
        let title = title.into();
        let preferences = GridPreferences::default();
        let config = GridConfig::default()
            .empty_message(format!("No {} found", title.to_lowercase()))
            .search_placeholder(format!("Search {}... (/)", title.to_lowercase()))
            .breakpoint(Breakpoint::new(preferences.breakpoint));
        Self {
            key,
            title,
            columns,
            config,
            preferences,
            state: ListState::new(preferences.page_size),
            search_input: SearchInput::default(),
            infinite: InfiniteScroll::new(),
            repo,
            sender,
            wrap,
            describe: |_| String::new(),
            request_id: 0,
        }
    }

    /// Start from stored preferences instead of the defaults.
    pub fn with_preferences(mut self, preferences: GridPreferences) -> Self {
        self.preferences = preferences;
        self.state.limit = preferences.page_size;
        self.config = self
            .config
            .breakpoint(Breakpoint::new(preferences.breakpoint));
        self
    }

    /// Text shown when a row is opened.
    pub fn describe(mut self, describe: fn(&T) -> String) -> Self {
        self.describe = describe;
        self
    }

    pub fn state(&self) -> &ListState<T> {
        &self.state
    }

    pub fn search_input(&self) -> &SearchInput {
        &self.search_input
    }

    pub fn mode(&self) -> PaginationMode {
        self.preferences.pagination_mode
    }

    fn grid<'a>(&'a self, viewport: &'a dyn ViewportClassifier) -> ResponsiveDataGrid<'a, T> {
        let mut grid = ResponsiveDataGrid::new(&self.state.records, &self.columns, viewport)
            .id(self.key)
            .config(&self.config)
            .sort(&self.state.sort)
            .loading(self.state.loading)
            .error(self.state.error.as_deref())
            .search(&self.search_input)
            .row_click(true)
            .scroll_offset(self.state.scroll)
            .mode(self.preferences.pagination_mode)
            .fetching_next(self.state.fetching_next);
        if let Some(info) = self.state.pagination {
            grid = grid.pagination(info);
        }
        grid
    }

    /// Merge a fetch result. Responses to superseded requests are dropped.
    pub fn receive(&mut self, fetched: Fetched<T>) {
        if fetched.request != self.request_id {
            log::debug!(
                "{}: dropping stale response {} (latest {})",
                self.key,
                fetched.request,
                self.request_id
            );
            return;
        }

        self.state.loading = false;
        self.state.fetching_next = false;

        match (fetched.kind, fetched.result) {
            (Fetch::Replace, Ok(page)) => {
                self.state.records = page.records;
                self.state.page = page.pagination.page;
                self.state.pagination = Some(page.pagination);
                self.state.scroll = 0;
                self.state.error = None;
            }
            (Fetch::Append, Ok(page)) => {
                self.state.records.extend(page.records);
                self.state.page = page.pagination.page;
                self.state.pagination = Some(page.pagination);
            }
            (Fetch::Replace, Err(e)) => {
                log::error!("{}: fetch failed: {e}", self.key);
                self.state.error = Some(e.to_string());
            }
            (Fetch::Append, Err(e)) => {
                log::warn!("{}: loading more failed: {e}", self.key);
                self.state.load_more_failed = true;
                self.state.detail = Some(format!("Could not load more: {e} (r to reload)"));
            }
        }

        self.search_input.sync(&self.state.search);
    }

    fn reload_first_page(&mut self) -> Effects {
        self.state.page = 1;
        Effects::fetch(Fetch::Replace)
    }

    fn load_more(&mut self) -> Effects {
        let state = &self.state;
        if self.preferences.pagination_mode != PaginationMode::InfiniteScroll
            || state.loading
            || state.fetching_next
            || state.load_more_failed
            || !state.has_next_page()
        {
            return Effects::none();
        }
        Effects::fetch(Fetch::Append)
    }

    fn toggle_mode(&mut self) -> Effects {
        self.preferences.pagination_mode = self.preferences.pagination_mode.toggled();
        self.infinite.disconnect();
        log::info!(
            "{}: switched to {:?}",
            self.key,
            self.preferences.pagination_mode
        );
        self.reload_first_page().and_save_preferences()
    }

    fn adjust_breakpoint(&mut self, delta: i32) -> Effects {
        let (min, max) = BREAKPOINT_RANGE;
        let next = (i32::from(self.preferences.breakpoint) + delta)
            .clamp(i32::from(min), i32::from(max));
        let next = u16::try_from(next).unwrap_or(max);
        if next == self.preferences.breakpoint {
            return Effects::none();
        }
        self.preferences.breakpoint = next;
        self.config.breakpoint = Breakpoint::new(next);
        Effects::none().and_save_preferences()
    }

    fn status_line(&self) -> String {
        if let Some(detail) = &self.state.detail {
            return detail.clone();
        }
        let mode = match self.preferences.pagination_mode {
            PaginationMode::Paged => format!("paged, {} per page", self.state.limit),
            PaginationMode::InfiniteScroll => {
                format!("infinite scroll, {} loaded", self.state.records.len())
            }
        };
        format!(
            "{} | {mode} | cards below {} columns",
            self.title, self.preferences.breakpoint
        )
    }
}

impl<T: CatalogRecord> Screen for ListScreen<T> {
    fn key(&self) -> &'static str {
        self.key
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn view(&self, viewport: &dyn ViewportClassifier) -> Element {
        let status_fg = if self.state.detail.is_some() {
            DETAIL_FG
        } else {
            STATUS_FG
        };
        Element::col()
            .id(format!("{}-screen", self.key))
            .width(Size::Fill)
            .height(Size::Fill)
            .gap(1)
            .child(self.grid(viewport).build())
            .child(
                Element::text(self.status_line())
                    .id(format!("{}-status", self.key))
                    .style(Style::new().foreground(status_fg)),
            )
    }

    fn apply(&mut self, action: &GridAction) -> Effects {
        let intent = RefCell::new(None);
        let describe = self.describe;
        let handled = {
            let record = |i: Intent| *intent.borrow_mut() = Some(i);
            let mut handlers = GridHandlers::new()
                .on_sort(|key| record(Intent::Sort(key.to_string())))
                .on_page_change(|page| record(Intent::Page(page)))
                .on_page_size_change(|size| record(Intent::PageSize(size)))
                .on_search_change(|term| record(Intent::Search(term.to_string())))
                .on_row_click(|row: &T| record(Intent::Open(describe(row))))
                .on_load_more(|| record(Intent::LoadMore));

            let mut grid = DataGrid::new(&self.state.records, &self.columns);
            if let Some(info) = self.state.pagination {
                grid = grid.pagination(info);
            }
            grid.dispatch(action, &mut handlers)
        };
        if !handled {
            return Effects::none();
        }

        match intent.into_inner() {
            None => Effects::none(),
            Some(Intent::Sort(key)) => {
                self.state.sort = self.state.sort.toggled(&key);
                self.reload_first_page()
            }
            Some(Intent::Page(page)) => {
                if page == 0
                    || page == self.state.page
                    || self.mode() == PaginationMode::InfiniteScroll
                {
                    return Effects::none();
                }
                self.state.page = page;
                Effects::fetch(Fetch::Replace)
            }
            Some(Intent::PageSize(size)) => {
                if size == self.state.limit {
                    return Effects::none();
                }
                self.state.limit = size;
                self.preferences.page_size = size;
                self.reload_first_page().and_save_preferences()
            }
            Some(Intent::Search(term)) => {
                if term == self.state.search {
                    return Effects::none();
                }
                self.state.search = term;
                self.reload_first_page()
            }
            Some(Intent::Open(line)) => {
                self.state.detail = Some(line);
                Effects::none()
            }
            Some(Intent::LoadMore) => self.load_more(),
        }
    }

    fn handle_key(&mut self, key: Key) -> Option<Effects> {
        if self.search_input.is_focused() {
            return Some(match self.search_input.handle_key(key) {
                Some(action) => self.apply(&action),
                None => Effects::none(),
            });
        }

        let effects = match key {
            Key::Char('/') => {
                self.search_input.focus();
                Effects::none()
            }
            Key::Char('[') | Key::Left => {
                let page = self.state.page.saturating_sub(1);
                self.apply(&GridAction::PageChange(page))
            }
            Key::Char(']') | Key::Right => self.apply(&GridAction::PageChange(self.state.page + 1)),
            Key::Char('m') => self.toggle_mode(),
            Key::Char('j') | Key::Down => {
                self.scroll(1);
                Effects::none()
            }
            Key::Char('k') | Key::Up => {
                self.scroll(-1);
                Effects::none()
            }
            Key::Char('r') => self.reload_first_page(),
            Key::Char('+') | Key::Char('=') => self.adjust_breakpoint(i32::from(BREAKPOINT_STEP)),
            Key::Char('-') => self.adjust_breakpoint(-i32::from(BREAKPOINT_STEP)),
            Key::Escape if self.state.detail.is_some() => {
                self.state.detail = None;
                Effects::none()
            }
            _ => return None,
        };
        Some(effects)
    }

    fn captures_keys(&self) -> bool {
        self.search_input.is_focused()
    }

    fn scroll(&mut self, delta: i16) {
        let last = self.state.records.len().saturating_sub(1);
        let next = if delta < 0 {
            self.state.scroll.saturating_sub(usize::from(delta.unsigned_abs()))
        } else {
            self.state.scroll + usize::from(delta.unsigned_abs())
        };
        self.state.scroll = next.min(last);
    }

    fn click(&mut self, root: &Element, layout: &LayoutResult, x: u16, y: u16) -> Effects {
        let search_id = format!("{}-search", self.key);
        if layout.get(&search_id).is_some_and(|rect| rect.contains(x, y)) {
            self.search_input.focus();
            return Effects::none();
        }
        self.search_input.blur();

        match action_at(root, layout, x, y) {
            Some(action) => self.apply(&action),
            None => Effects::none(),
        }
    }

    fn after_layout(&mut self, layout: &LayoutResult, viewport: &dyn ViewportClassifier) -> Effects {
        if self.preferences.pagination_mode != PaginationMode::InfiniteScroll {
            self.infinite.disconnect();
            return Effects::none();
        }

        let visible = self.grid(viewport).sentinel_visible(layout);
        let fetching = self.state.fetching_next || self.state.loading;
        if self
            .infinite
            .observe(visible, self.state.has_next_page(), fetching)
        {
            log::debug!("{}: sentinel reached on page {}", self.key, self.state.page);
            return self.apply(&GridAction::LoadMore);
        }
        Effects::none()
    }

    fn fetch(&mut self, kind: Fetch) {
        self.request_id += 1;
        let request = self.request_id;

        let query = match kind {
            Fetch::Replace => {
                self.state.loading = true;
                self.state.fetching_next = false;
                self.state.load_more_failed = false;
                self.state.query()
            }
            Fetch::Append => {
                self.state.fetching_next = true;
                ListQuery {
                    page: self.state.page + 1,
                    ..self.state.query()
                }
            }
        };
        log::debug!("{}: request {request} {kind:?} {query:?}", self.key);

        let repo = Arc::clone(&self.repo);
        let sender = self.sender.clone();
        let wrap = self.wrap;
        tokio::spawn(async move {
            let result = repo.list_page(&query).await;
            if sender.send(wrap(Fetched { request, kind, result })).is_err() {
                log::debug!("event loop closed before request {request} finished");
            }
        });
    }

    fn preferences(&self) -> GridPreferences {
        self.preferences
    }
}
