//! Pagination metadata and the page-number control.

use atelier_dom::{Color, Element, Style};
use serde::{Deserialize, Serialize};

use crate::action::{bind, GridAction};
use crate::error::GridError;

/// One page of a larger result set, as reported by the data source.
///
/// Invariants: `page >= 1`, `limit > 0`,
/// `total_pages == ceil(total_count / limit)`,
/// `has_next_page == page < total_pages`, `has_prev_page == page > 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationInfo {
    pub page: u32,
    pub limit: u32,
    pub total_count: u64,
    pub total_pages: u32,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

impl PaginationInfo {
    /// Derive the full pagination tuple from the page, page size and total.
    pub fn new(page: u32, limit: u32, total_count: u64) -> Result<Self, GridError> {
        if page == 0 {
            return Err(GridError::InvalidPage);
        }
        if limit == 0 {
            return Err(GridError::InvalidLimit);
        }

        let total_pages = total_count.div_ceil(u64::from(limit));
        let total_pages = u32::try_from(total_pages).unwrap_or(u32::MAX);

        Ok(Self {
            page,
            limit,
            total_count,
            total_pages,
            has_next_page: page < total_pages,
            has_prev_page: page > 1,
        })
    }

    /// Rows to skip to reach this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.limit)
    }

    /// 1-based index of the first row on this page (0 when there are none).
    pub fn first_item(&self) -> u64 {
        if self.total_count == 0 {
            0
        } else {
            (self.offset() + 1).min(self.total_count)
        }
    }

    /// 1-based index of the last row on this page.
    pub fn last_item(&self) -> u64 {
        (self.offset() + u64::from(self.limit)).min(self.total_count)
    }
}

/// One entry of the compressed page-number sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageToken {
    Page(u32),
    Ellipsis,
}

/// Page numbers to show for `page` out of `total_pages`.
///
/// The first and last page are always shown, plus up to two pages on each
/// side of the current one. A gap of more than one page between shown
/// numbers collapses into a single ellipsis. Empty when there is at most one
/// page.
pub fn page_tokens(page: u32, total_pages: u32) -> Vec<PageToken> {
    if total_pages <= 1 {
        return Vec::new();
    }

    let page = page.clamp(1, total_pages);
    let start = page.saturating_sub(2).max(2);
    let end = page.saturating_add(2).min(total_pages - 1);

    let mut tokens = Vec::with_capacity(9);
    tokens.push(PageToken::Page(1));
    if start > 2 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.extend((start..=end).map(PageToken::Page));
    if end < total_pages - 1 {
        tokens.push(PageToken::Ellipsis);
    }
    tokens.push(PageToken::Page(total_pages));
    tokens
}

const ACCENT: Color = Color::hex(0xA277FF);
const MUTED: Color = Color::hex(0x6C6C80);

/// Previous/next buttons, page numbers and an optional page-size selector.
///
/// Purely a function of the [`PaginationInfo`] it is given.
#[derive(Debug, Clone)]
pub struct PaginationControl<'a> {
    id: String,
    info: &'a PaginationInfo,
    page_sizes: &'a [u32],
}

impl<'a> PaginationControl<'a> {
    pub fn new(info: &'a PaginationInfo) -> Self {
        Self {
            id: "pagination".into(),
            info,
            page_sizes: &[],
        }
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    /// Offer these page sizes; an empty slice hides the selector.
    pub fn page_sizes(mut self, sizes: &'a [u32]) -> Self {
        self.page_sizes = sizes;
        self
    }

    pub fn tokens(&self) -> Vec<PageToken> {
        page_tokens(self.info.page, self.info.total_pages)
    }

    /// "Showing 11-20 of 25"
    pub fn summary(&self) -> String {
        format!(
            "Showing {}-{} of {}",
            self.info.first_item(),
            self.info.last_item(),
            self.info.total_count
        )
    }

    /// The control, or `None` when there is no more than one page.
    pub fn build(&self) -> Option<Element> {
        let info = self.info;
        if info.total_pages <= 1 {
            return None;
        }

        let prev = nav_button(
            format!("{}-prev", self.id),
            "‹ Prev",
            info.has_prev_page,
            info.page.saturating_sub(1),
        );
        let next = nav_button(
            format!("{}-next", self.id),
            "Next ›",
            info.has_next_page,
            info.page.saturating_add(1),
        );

        let mut controls = Element::row().id(format!("{}-controls", self.id)).gap(1);
        controls = controls.child(prev);
        for (i, token) in self.tokens().into_iter().enumerate() {
            controls = controls.child(match token {
                PageToken::Page(n) => self.page_button(n),
                PageToken::Ellipsis => Element::text("…")
                    .id(format!("{}-ellipsis-{i}", self.id))
                    .style(Style::new().foreground(MUTED)),
            });
        }
        controls = controls.child(next);

        if !self.page_sizes.is_empty() {
            controls = controls.child(self.page_size_selector());
        }

        Some(
            Element::col()
                .id(self.id.clone())
                .child(controls)
                .child(
                    Element::text(self.summary())
                        .id(format!("{}-summary", self.id))
                        .style(Style::new().foreground(MUTED)),
                ),
        )
    }

    fn page_button(&self, page: u32) -> Element {
        let label = Element::text(format!(" {page} ")).id(format!("{}-page-{page}", self.id));
        let label = if page == self.info.page {
            label.style(Style::new().background(ACCENT).foreground(Color::BLACK).bold())
        } else {
            label
        };
        bind(label, &GridAction::PageChange(page))
    }

    fn page_size_selector(&self) -> Element {
        let mut selector = Element::row()
            .id(format!("{}-sizes", self.id))
            .gap(1)
            .child(Element::text("Per page:").style(Style::new().foreground(MUTED)));
        for &size in self.page_sizes {
            let option = Element::text(format!(" {size} ")).id(format!("{}-size-{size}", self.id));
            let option = if size == self.info.limit {
                option.style(Style::new().underline().bold())
            } else {
                option
            };
            selector = selector.child(bind(option, &GridAction::PageSizeChange(size)));
        }
        selector
    }
}

fn nav_button(id: String, label: &str, enabled: bool, target: u32) -> Element {
    let button = Element::text(label).id(id);
    if enabled {
        bind(button, &GridAction::PageChange(target))
    } else {
        button
            .disabled(true)
            .style(Style::new().foreground(MUTED).dim())
    }
}
