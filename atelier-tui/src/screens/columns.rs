//! Column layouts and detail lines for the catalog screens.

use atelier_dom::{Color, Element, Style};
use atelier_grid::{ColumnDef, ColumnSet, GridError};

use crate::catalog::{Course, Product, format_price};

const OK: Color = Color::hex(0x61FFCA);
const WARN: Color = Color::hex(0xFFCA85);
const MUTED: Color = Color::hex(0x6C6C80);

fn badge(id: String, on: bool, on_label: &str, off_label: &str) -> Element {
    if on {
        Element::text(format!("● {on_label}"))
            .id(id)
            .style(Style::new().foreground(OK))
    } else {
        Element::text(format!("○ {off_label}"))
            .id(id)
            .style(Style::new().foreground(MUTED))
    }
}

pub fn course_columns() -> Result<ColumnSet<Course>, GridError> {
    ColumnSet::new(vec![
        ColumnDef::new("title", "Title").sortable(),
        ColumnDef::new("category", "Category").sortable(),
        ColumnDef::new("level", "Level").sortable(),
        ColumnDef::new("price", "Price").sortable(),
        ColumnDef::new("seats", "Seats")
            .sortable()
            .render(|course: &Course, i| {
                let text = Element::text(course.seats.to_string()).id(format!("courses-seats-{i}"));
                if course.seats < 8 {
                    text.style(Style::new().foreground(WARN))
                } else {
                    text
                }
            }),
        ColumnDef::new("starts_on", "Starts").sortable(),
        ColumnDef::new("published", "Status").render(|course: &Course, i| {
            badge(
                format!("courses-status-{i}"),
                course.published,
                "Published",
                "Draft",
            )
        }),
        ColumnDef::actions(|course: &Course, i| {
            Element::text(format!("[#{}]", course.id))
                .id(format!("courses-actions-{i}"))
                .style(Style::new().foreground(MUTED))
        }),
    ])
}

pub fn product_columns() -> Result<ColumnSet<Product>, GridError> {
    ColumnSet::new(vec![
        ColumnDef::new("name", "Name").sortable(),
        ColumnDef::new("collection", "Collection").sortable(),
        ColumnDef::new("price", "Price")
            .sortable()
            .render(|product: &Product, i| {
                Element::text(format_price(product.price)).id(format!("products-price-{i}"))
            }),
        ColumnDef::new("stock", "Stock")
            .sortable()
            .render(|product: &Product, i| {
                let (label, color) = match product.stock {
                    0 => ("sold out".to_string(), WARN),
                    n => (n.to_string(), Color::WHITE),
                };
                Element::text(label)
                    .id(format!("products-stock-{i}"))
                    .style(Style::new().foreground(color))
            }),
        ColumnDef::new("active", "Status").render(|product: &Product, i| {
            badge(
                format!("products-status-{i}"),
                product.active,
                "Active",
                "Hidden",
            )
        }),
        ColumnDef::actions(|product: &Product, i| {
            Element::text(format!("[#{}]", product.id))
                .id(format!("products-actions-{i}"))
                .style(Style::new().foreground(MUTED))
        }),
    ])
}

pub fn describe_course(course: &Course) -> String {
    format!(
        "#{} {} | {} {} | {} | {} seats from {}{}",
        course.id,
        course.title,
        course.level,
        course.category,
        format_price(course.price),
        course.seats,
        course.starts_on.format("%d %b %Y"),
        if course.published { "" } else { " (draft)" }
    )
}

pub fn describe_product(product: &Product) -> String {
    format!(
        "#{} {} | {} collection | {} | {} in stock{}",
        product.id,
        product.name,
        product.collection,
        format_price(product.price),
        product.stock,
        if product.active { "" } else { " (hidden)" }
    )
}
