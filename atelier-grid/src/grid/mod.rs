//! Grid components, from a single header cell up to the responsive grid.

pub mod body;
pub mod column;
pub mod data_grid;
pub mod header;
pub mod pagination;
pub mod responsive;
pub mod search;
pub mod sort;

pub use body::{BodyState, TableBody};
pub use column::{CellRenderer, CellValue, ColumnDef, ColumnSet, Fields, ACTIONS_KEY};
pub use data_grid::DataGrid;
pub use header::{header_cell, TableHeader};
pub use pagination::{page_tokens, PageToken, PaginationControl, PaginationInfo};
pub use responsive::{PaginationMode, ResponsiveDataGrid};
pub use search::SearchInput;
pub use sort::{SortOrder, SortState};
