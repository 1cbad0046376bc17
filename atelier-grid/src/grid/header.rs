//! Table header row.

use atelier_dom::{Color, Element, Size, Style};

use super::column::{ColumnDef, ColumnSet, Fields};
use super::sort::SortState;
use crate::action::{bind, GridAction};

const HEADER_FG: Color = Color::hex(0xC9C9D9);
const INACTIVE_SORT: &str = "↕";

/// Header cell for one column.
///
/// Shows the active sort direction; a sortable cell emits
/// [`GridAction::Sort`] with the column key when clicked. The next sort
/// order is the host's decision.
pub fn header_cell<T: Fields>(
    grid_id: &str,
    column: &ColumnDef<T>,
    width: u16,
    sort: &SortState,
) -> Element {
    let label = match (column.sortable, sort.order_for(&column.key)) {
        (true, Some(order)) => format!("{} {}", column.label, order.indicator()),
        (true, None) => format!("{} {INACTIVE_SORT}", column.label),
        (false, _) => column.label.clone(),
    };

    let style = if sort.order_for(&column.key).is_some() {
        Style::new().foreground(Color::WHITE).bold().underline()
    } else {
        Style::new().foreground(HEADER_FG).bold()
    };

    let cell = Element::text(label)
        .id(format!("{grid_id}-header-{}", column.key))
        .width(Size::Fixed(width))
        .style(style);

    if column.sortable {
        bind(cell, &GridAction::Sort(column.key.clone()))
    } else {
        cell
    }
}

/// The header row of a table.
pub struct TableHeader<'a, T> {
    grid_id: &'a str,
    columns: &'a ColumnSet<T>,
    widths: &'a [u16],
    sort: &'a SortState,
}

impl<'a, T: Fields> TableHeader<'a, T> {
    pub fn new(
        grid_id: &'a str,
        columns: &'a ColumnSet<T>,
        widths: &'a [u16],
        sort: &'a SortState,
    ) -> Self {
        Self {
            grid_id,
            columns,
            widths,
            sort,
        }
    }

    pub fn build(&self) -> Element {
        Element::row()
            .id(format!("{}-header", self.grid_id))
            .gap(2)
            .children(
                self.columns
                    .iter()
                    .zip(self.widths)
                    .map(|(column, &width)| header_cell(self.grid_id, column, width, self.sort)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ACTION_KEY;
    use crate::grid::column::CellValue;
    use crate::grid::sort::SortOrder;

    struct Row;

    impl Fields for Row {
        fn field(&self, _key: &str) -> Option<CellValue> {
            None
        }
    }

    #[test]
    fn active_column_shows_direction() {
        let column = ColumnDef::<Row>::new("price", "Price").sortable();
        let asc = header_cell("g", &column, 10, &SortState::by("price", SortOrder::Asc));
        let desc = header_cell("g", &column, 10, &SortState::by("price", SortOrder::Desc));
        let other = header_cell("g", &column, 10, &SortState::by("title", SortOrder::Asc));

        assert_eq!(asc.text_content(), Some("Price ▲"));
        assert_eq!(desc.text_content(), Some("Price ▼"));
        assert_eq!(other.text_content(), Some("Price ↕"));
    }

    #[test]
    fn only_sortable_columns_are_clickable() {
        let sortable = header_cell("g", &ColumnDef::<Row>::new("price", "Price").sortable(), 8, &SortState::none());
        let plain = header_cell("g", &ColumnDef::<Row>::new("notes", "Notes"), 8, &SortState::none());

        assert!(sortable.clickable);
        assert_eq!(sortable.get_data(ACTION_KEY).map(String::as_str), Some("sort:price"));
        assert!(!plain.clickable);
        assert!(plain.get_data(ACTION_KEY).is_none());
    }
}
