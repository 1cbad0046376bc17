//! Grid configuration.

use serde::{Deserialize, Serialize};

use crate::viewport::Breakpoint;

/// Viewport width below which the responsive grid switches to cards.
pub const MOBILE_BREAKPOINT: u16 = 768;

/// Page sizes offered by the page-size selector.
pub const DEFAULT_PAGE_SIZES: [u32; 3] = [10, 20, 50];

/// Presentation settings shared by every grid on a screen.
///
/// # Examples
///
/// ```ignore
/// let config = GridConfig::default()
///     .empty_message("No courses found")
///     .breakpoint(Breakpoint::new(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    /// Mobile/desktop switch point.
    pub breakpoint: Breakpoint,
    /// Options for the page-size selector.
    pub page_sizes: Vec<u32>,
    /// Whether the page-size selector is shown at all.
    pub show_page_size: bool,
    /// Widest a column may grow when sized from its content.
    pub max_column_width: u16,
    pub loading_message: String,
    pub empty_message: String,
    pub loading_more_message: String,
    pub search_placeholder: String,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            breakpoint: Breakpoint::new(MOBILE_BREAKPOINT),
            page_sizes: DEFAULT_PAGE_SIZES.to_vec(),
            show_page_size: true,
            max_column_width: 32,
            loading_message: "Loading...".into(),
            empty_message: "No data available".into(),
            loading_more_message: "Loading more...".into(),
            search_placeholder: "Search...".into(),
        }
    }
}

impl GridConfig {
    pub fn breakpoint(mut self, breakpoint: Breakpoint) -> Self {
        self.breakpoint = breakpoint;
        self
    }

    pub fn page_sizes(mut self, sizes: impl Into<Vec<u32>>) -> Self {
        self.page_sizes = sizes.into();
        self
    }

    pub fn show_page_size(mut self, show: bool) -> Self {
        self.show_page_size = show;
        self
    }

    pub fn loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = message.into();
        self
    }

    pub fn empty_message(mut self, message: impl Into<String>) -> Self {
        self.empty_message = message.into();
        self
    }

    pub fn search_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.search_placeholder = placeholder.into();
        self
    }
}
