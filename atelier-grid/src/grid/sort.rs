//! Sort state owned by the host screen.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "ASC")]
    Asc,
    #[default]
    #[serde(rename = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// SQL keyword for this order.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Header arrow for an active column.
    pub fn indicator(self) -> &'static str {
        match self {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        }
    }
}

/// Column and direction of the current sort. `sort_by == None` means the
/// server's default order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
}

impl SortState {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn by(column: impl Into<String>, order: SortOrder) -> Self {
        Self {
            sort_by: Some(column.into()),
            sort_order: order,
        }
    }

    pub fn is_sorted(&self) -> bool {
        self.sort_by.is_some()
    }

    /// Order shown for `column`, if it is the active sort column.
    pub fn order_for(&self, column: &str) -> Option<SortOrder> {
        (self.sort_by.as_deref() == Some(column)).then_some(self.sort_order)
    }

    /// Next state after `column` was clicked: the same column flips its
    /// order, a different column starts out descending.
    pub fn toggled(&self, column: &str) -> Self {
        match self.order_for(column) {
            Some(order) => Self::by(column, order.flipped()),
            None => Self::by(column, SortOrder::Desc),
        }
    }
}
