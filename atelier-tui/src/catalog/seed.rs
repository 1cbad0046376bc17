//! Sample rows for a fresh catalog.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use super::models::{Course, Product};
use super::{CatalogError, CatalogRepository, ListQuery, SqliteCatalog};

const COURSE_TOPICS: &[(&str, &str)] = &[
    ("Pattern Drafting", "Construction"),
    ("Draping", "Construction"),
    ("Bias Cutting", "Construction"),
    ("Tailored Jackets", "Tailoring"),
    ("Trouser Fitting", "Tailoring"),
    ("Hand Embroidery", "Embellishment"),
    ("Beading", "Embellishment"),
    ("Natural Dyeing", "Textiles"),
    ("Weaving Basics", "Textiles"),
    ("Fashion Illustration", "Design"),
    ("Colour Theory", "Design"),
    ("Knitwear", "Textiles"),
    ("Lingerie", "Construction"),
    ("Millinery", "Accessories"),
];

const LEVELS: &[&str] = &["Beginner", "Intermediate", "Advanced"];

const PRODUCT_ITEMS: &[&str] = &[
    "Linen Shirt",
    "Wool Overcoat",
    "Silk Scarf",
    "Denim Jacket",
    "Pleated Skirt",
    "Cashmere Jumper",
    "Canvas Tote",
    "Leather Belt",
    "Cotton Trousers",
    "Wrap Dress",
    "Felt Hat",
    "Knit Beanie",
];

const COLLECTIONS: &[&str] = &["Spring", "Summer", "Autumn", "Winter", "Atelier"];

pub fn sample_courses() -> Vec<Course> {
    let first_start = NaiveDate::from_ymd_opt(2026, 1, 12).unwrap_or_default();
    LEVELS
        .iter()
        .enumerate()
        .flat_map(|(l, level)| {
            COURSE_TOPICS
                .iter()
                .enumerate()
                .map(move |(t, (topic, category))| (l, t, *level, *topic, *category))
        })
        .enumerate()
        .map(|(n, (l, t, level, topic, category))| Course {
            id: 0,
            title: if l == 0 {
                topic.to_string()
            } else {
                format!("{topic} {}", l + 1)
            },
            category: category.to_string(),
            level: level.to_string(),
            price: Decimal::new(8_500 + (t as i64 * 1_250) + (l as i64 * 4_000), 2),
            seats: 6 + ((n * 7) % 14) as u32,
            starts_on: first_start
                .checked_add_days(Days::new((n as u64 * 5) % 300))
                .unwrap_or(first_start),
            published: n % 4 != 3,
        })
        .collect()
}

pub fn sample_products() -> Vec<Product> {
    COLLECTIONS
        .iter()
        .enumerate()
        .flat_map(|(c, collection)| {
            PRODUCT_ITEMS
                .iter()
                .enumerate()
                .map(move |(i, item)| (c, i, *collection, *item))
        })
        .map(|(c, i, collection, item)| Product {
            id: 0,
            name: format!("{collection} {item}"),
            collection: collection.to_string(),
            price: Decimal::new(2_900 + (i as i64 * 1_500) + (c as i64 * 700), 2),
            stock: ((i * 13 + c * 5) % 40) as u32,
            active: (i + c) % 6 != 0,
        })
        .collect()
}

/// Fill empty tables with the sample rows.
pub async fn seed_if_empty(catalog: &SqliteCatalog) -> Result<(), CatalogError> {
    let everything = ListQuery::default();

    if CatalogRepository::<Course>::count(catalog, &everything).await? == 0 {
        catalog.insert_all(sample_courses()).await?;
    }
    if CatalogRepository::<Product>::count(catalog, &everything).await? == 0 {
        catalog.insert_all(sample_products()).await?;
    }
    Ok(())
}
