#![allow(dead_code)]

use atelier_dom::{Buffer, Element, LayoutResult, Rect};
use atelier_grid::{CellValue, ColumnDef, ColumnSet, Fields};

pub struct Course {
    pub id: u32,
    pub title: String,
    pub level: String,
    pub seats: u32,
}

impl Fields for Course {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some(self.id.into()),
            "title" => Some((&self.title).into()),
            "level" => Some((&self.level).into()),
            "seats" => Some(self.seats.into()),
            _ => None,
        }
    }
}

pub fn course(id: u32, title: &str) -> Course {
    Course {
        id,
        title: title.to_string(),
        level: "Beginner".to_string(),
        seats: 12,
    }
}

pub fn courses(n: u32) -> Vec<Course> {
    (1..=n).map(|i| course(i, &format!("Course {i}"))).collect()
}

pub fn columns() -> ColumnSet<Course> {
    ColumnSet::new(vec![
        ColumnDef::new("title", "Title").sortable(),
        ColumnDef::new("level", "Level"),
        ColumnDef::new("seats", "Seats").sortable(),
    ])
    .unwrap()
}

pub fn columns_with_actions() -> ColumnSet<Course> {
    ColumnSet::new(vec![
        ColumnDef::new("title", "Title").sortable(),
        ColumnDef::new("level", "Level"),
        ColumnDef::actions(|c: &Course, i| {
            Element::text("[Edit]").id(format!("edit-{i}-{}", c.id))
        }),
    ])
    .unwrap()
}

pub fn lay_out(root: &Element, width: u16, height: u16) -> LayoutResult {
    atelier_dom::layout(root, Rect::new(0, 0, width, height))
}

pub fn render(root: &Element, width: u16, height: u16) -> Buffer {
    let layout = lay_out(root, width, height);
    let mut buf = Buffer::new(width, height);
    atelier_dom::render_to_buffer(root, &layout, &mut buf);
    buf
}

/// Top-left corner of a laid-out element.
pub fn corner(layout: &LayoutResult, id: &str) -> (u16, u16) {
    let rect = layout.get(id).unwrap_or_else(|| panic!("no rect for '{id}'"));
    assert!(!rect.is_empty(), "'{id}' is not visible");
    (rect.x, rect.y)
}
