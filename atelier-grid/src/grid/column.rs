//! Column descriptors and the record field access they rely on.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use atelier_dom::{intrinsic_size, Element, Style};

use crate::error::GridError;

/// Key of the column whose output is rendered once at the bottom of each
/// card in card layout, instead of as a labeled field.
pub const ACTIONS_KEY: &str = "actions";

/// A field value the grid knows how to print.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Integer(n) => write!(f, "{n}"),
            CellValue::Float(n) => write!(f, "{n}"),
            CellValue::Bool(true) => f.write_str("Yes"),
            CellValue::Bool(false) => f.write_str("No"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<&String> for CellValue {
    fn from(value: &String) -> Self {
        CellValue::Text(value.clone())
    }
}

macro_rules! integer_cell {
    ($($ty:ty),*) => {
        $(impl From<$ty> for CellValue {
            fn from(value: $ty) -> Self {
                CellValue::Integer(i64::from(value))
            }
        })*
    };
}

integer_cell!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Bool(value)
    }
}

impl<V: Into<CellValue>> From<Option<V>> for CellValue {
    fn from(value: Option<V>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}

/// Field access for records shown in a grid.
///
/// Only plainly printable fields should be exposed here; anything richer is
/// drawn by a column's `render` function instead.
///
/// # Example
///
/// ```ignore
/// impl Fields for Course {
///     fn field(&self, key: &str) -> Option<CellValue> {
///         match key {
///             "title" => Some(self.title.as_str().into()),
///             "seats" => Some(self.seats.into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Fields {
    fn field(&self, key: &str) -> Option<CellValue>;
}

/// Custom cell renderer: `(record, row index) -> element`.
pub type CellRenderer<T> = Arc<dyn Fn(&T, usize) -> Element + Send + Sync>;

/// How one field of a record is shown as a table column or card field.
pub struct ColumnDef<T> {
    /// Unique key within the table; the field name unless `render` is set.
    pub key: String,
    /// Header text.
    pub label: String,
    pub sortable: bool,
    /// Fixed width in terminal columns; sized from content when unset.
    pub width: Option<u16>,
    /// Extra style for this column's cells.
    pub style: Option<Style>,
    render: Option<CellRenderer<T>>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            label: self.label.clone(),
            sortable: self.sortable,
            width: self.width,
            style: self.style.clone(),
            render: self.render.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnDef<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnDef")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("render", &self.render.is_some())
            .finish()
    }
}

impl<T: Fields> ColumnDef<T> {
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            width: None,
            style: None,
            render: None,
        }
    }

    /// The conventional trailing actions column.
    pub fn actions(render: impl Fn(&T, usize) -> Element + Send + Sync + 'static) -> Self {
        Self::new(ACTIONS_KEY, "Actions").render(render)
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn render(mut self, render: impl Fn(&T, usize) -> Element + Send + Sync + 'static) -> Self {
        self.render = Some(Arc::new(render));
        self
    }

    pub fn is_actions(&self) -> bool {
        self.key == ACTIONS_KEY
    }

    pub fn has_renderer(&self) -> bool {
        self.render.is_some()
    }

    /// Plain text of this column for `record`; empty for unknown fields.
    pub fn text(&self, record: &T) -> String {
        record
            .field(&self.key)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    /// Cell content for `record` at row `index`.
    pub fn cell(&self, record: &T, index: usize) -> Element {
        let cell = match &self.render {
            Some(render) => render(record, index),
            None => Element::text(self.text(record)),
        };
        match &self.style {
            Some(style) => {
                let merged = cell.style.clone().merge(style);
                cell.style(merged)
            }
            None => cell,
        }
    }
}

/// Ordered, key-unique set of columns for one table.
pub struct ColumnSet<T> {
    columns: Vec<ColumnDef<T>>,
}

impl<T> Clone for ColumnSet<T> {
    fn clone(&self) -> Self {
        Self {
            columns: self.columns.clone(),
        }
    }
}

impl<T> fmt::Debug for ColumnSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.columns).finish()
    }
}

impl<T: Fields> ColumnSet<T> {
    pub fn new(columns: Vec<ColumnDef<T>>) -> Result<Self, GridError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(GridError::DuplicateColumn(column.key.clone()));
            }
        }
        Ok(Self { columns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColumnDef<T>> {
        self.columns.iter()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|c| c.key == key)
    }

    /// Columns shown as labeled fields on a card.
    pub fn fields(&self) -> impl Iterator<Item = &ColumnDef<T>> {
        self.columns.iter().filter(|c| !c.is_actions())
    }

    pub fn actions(&self) -> Option<&ColumnDef<T>> {
        self.columns.iter().find(|c| c.is_actions())
    }

    /// Width of every column: the fixed width when set, else the widest of
    /// header (plus sort indicator) and cells, capped at `max_width`.
    pub fn widths(&self, data: &[T], max_width: u16) -> Vec<u16> {
        self.columns
            .iter()
            .map(|column| {
                if let Some(width) = column.width {
                    return width;
                }
                let label = atelier_dom::text::display_width(&column.label);
                let header = u16::try_from(label)
                    .unwrap_or(u16::MAX)
                    .saturating_add(if column.sortable { 2 } else { 0 });
                let widest_cell = data
                    .iter()
                    .enumerate()
                    .map(|(i, record)| intrinsic_size(&column.cell(record, i)).0)
                    .max()
                    .unwrap_or(0);
                header.max(widest_cell).clamp(1, max_width.max(1))
            })
            .collect()
    }
}

impl<'a, T> IntoIterator for &'a ColumnSet<T> {
    type Item = &'a ColumnDef<T>;
    type IntoIter = std::slice::Iter<'a, ColumnDef<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Subject {
        name: String,
        hours: u32,
        elective: bool,
        notes: Option<String>,
    }

    impl Fields for Subject {
        fn field(&self, key: &str) -> Option<CellValue> {
            match key {
                "name" => Some((&self.name).into()),
                "hours" => Some(self.hours.into()),
                "elective" => Some(self.elective.into()),
                "notes" => Some(self.notes.clone().into()),
                _ => None,
            }
        }
    }

    fn subject() -> Subject {
        Subject {
            name: "Draping".into(),
            hours: 24,
            elective: true,
            notes: None,
        }
    }

    #[test]
    fn default_text_coerces_fields() {
        let s = subject();
        assert_eq!(ColumnDef::<Subject>::new("name", "Name").text(&s), "Draping");
        assert_eq!(ColumnDef::<Subject>::new("hours", "Hours").text(&s), "24");
        assert_eq!(ColumnDef::<Subject>::new("elective", "Elective").text(&s), "Yes");
        assert_eq!(ColumnDef::<Subject>::new("notes", "Notes").text(&s), "");
    }

    #[test]
    fn unknown_field_renders_empty() {
        let column = ColumnDef::<Subject>::new("missing", "Missing");
        assert_eq!(column.cell(&subject(), 0).text_content(), Some(""));
    }

    #[test]
    fn render_overrides_field() {
        let column = ColumnDef::<Subject>::new("name", "Name")
            .render(|s, i| Element::text(format!("{i}. {}", s.name.to_uppercase())));
        assert_eq!(column.cell(&subject(), 2).text_content(), Some("2. DRAPING"));
    }

    #[test]
    fn duplicate_keys_are_rejected() {
        let result = ColumnSet::new(vec![
            ColumnDef::<Subject>::new("name", "Name"),
            ColumnDef::new("name", "Again"),
        ]);
        assert_eq!(result.err(), Some(GridError::DuplicateColumn("name".into())));
    }

    #[test]
    fn widths_follow_content_and_caps() {
        let columns = ColumnSet::new(vec![
            ColumnDef::<Subject>::new("name", "Name").sortable(),
            ColumnDef::new("hours", "Hours").width(4),
            ColumnDef::new("notes", "Notes"),
        ])
        .unwrap();
        let data = vec![subject()];

        assert_eq!(columns.widths(&data, 32), vec![7, 4, 5]);
        assert_eq!(columns.widths(&data, 3), vec![3, 4, 3]);
    }

    #[test]
    fn oversized_label_is_capped_not_wrapped() {
        let columns =
            ColumnSet::new(vec![ColumnDef::<Subject>::new("name", "x".repeat(65_538))]).unwrap();
        assert_eq!(columns.widths(&[], 30), vec![30]);
    }

    #[test]
    fn actions_column_is_separated_from_fields() {
        let columns = ColumnSet::new(vec![
            ColumnDef::<Subject>::new("name", "Name"),
            ColumnDef::actions(|_, _| Element::text("[Edit]")),
        ])
        .unwrap();

        assert_eq!(columns.fields().count(), 1);
        assert!(columns.actions().is_some_and(|c| c.has_renderer()));
    }
}
