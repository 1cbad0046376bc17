//! Catalog records and their table mappings.

use atelier_grid::{CellValue, Fields};
use chrono::NaiveDate;
use rusqlite::types::{Type, Value};
use rusqlite::Row;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A record stored in one catalog table.
///
/// `COLUMNS` lists the stored columns in `from_row` order, starting with the
/// integer primary key `id`. `values` yields the remaining columns in the
/// same order.
pub trait CatalogRecord: Fields + Clone + Send + Sync + 'static {
    /// Singular name used in messages.
    const ENTITY: &'static str;
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    /// Text columns matched by a search term.
    const SEARCHABLE: &'static [&'static str];
    /// Sort keys a client may ask for, mapped to the SQL they sort on.
    const SORTABLE: &'static [(&'static str, &'static str)];

    fn id(&self) -> i64;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    fn values(&self) -> rusqlite::Result<Vec<Value>>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub level: String,
    pub price: Decimal,
    pub seats: u32,
    pub starts_on: NaiveDate,
    pub published: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub collection: String,
    pub price: Decimal,
    pub stock: u32,
    pub active: bool,
}

/// Price with two decimals, e.g. `"$120.00"`.
pub fn format_price(price: Decimal) -> String {
    format!("${:.2}", price)
}

fn price_to_cents(price: Decimal) -> rusqlite::Result<i64> {
    let mut scaled = price;
    scaled.rescale(2);
    i64::try_from(scaled.mantissa())
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

fn price_from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

fn date_from_sql(row: &Row<'_>, index: usize) -> rusqlite::Result<NaiveDate> {
    let raw: String = row.get(index)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(index, Type::Text, Box::new(e)))
}

impl Fields for Course {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some(CellValue::Integer(self.id)),
            "title" => Some((&self.title).into()),
            "category" => Some((&self.category).into()),
            "level" => Some((&self.level).into()),
            "price" => Some(format_price(self.price).into()),
            "seats" => Some(self.seats.into()),
            "starts_on" => Some(self.starts_on.format(DATE_FORMAT).to_string().into()),
            "published" => Some(self.published.into()),
            _ => None,
        }
    }
}

impl CatalogRecord for Course {
    const ENTITY: &'static str = "course";
    const TABLE: &'static str = "courses";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "title",
        "category",
        "level",
        "price_cents",
        "seats",
        "starts_on",
        "published",
    ];
    const SEARCHABLE: &'static [&'static str] = &["title", "category", "level"];
    const SORTABLE: &'static [(&'static str, &'static str)] = &[
        ("title", "title COLLATE NOCASE"),
        ("category", "category COLLATE NOCASE"),
        ("level", "level"),
        ("price", "price_cents"),
        ("seats", "seats"),
        ("starts_on", "starts_on"),
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            title: row.get(1)?,
            category: row.get(2)?,
            level: row.get(3)?,
            price: price_from_cents(row.get(4)?),
            seats: row.get(5)?,
            starts_on: date_from_sql(row, 6)?,
            published: row.get(7)?,
        })
    }

    fn values(&self) -> rusqlite::Result<Vec<Value>> {
        Ok(vec![
            Value::Text(self.title.clone()),
            Value::Text(self.category.clone()),
            Value::Text(self.level.clone()),
            Value::Integer(price_to_cents(self.price)?),
            Value::Integer(i64::from(self.seats)),
            Value::Text(self.starts_on.format(DATE_FORMAT).to_string()),
            Value::Integer(i64::from(self.published)),
        ])
    }
}

impl Fields for Product {
    fn field(&self, key: &str) -> Option<CellValue> {
        match key {
            "id" => Some(CellValue::Integer(self.id)),
            "name" => Some((&self.name).into()),
            "collection" => Some((&self.collection).into()),
            "price" => Some(format_price(self.price).into()),
            "stock" => Some(self.stock.into()),
            "active" => Some(self.active.into()),
            _ => None,
        }
    }
}

impl CatalogRecord for Product {
    const ENTITY: &'static str = "product";
    const TABLE: &'static str = "products";
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "collection", "price_cents", "stock", "active"];
    const SEARCHABLE: &'static [&'static str] = &["name", "collection"];
    const SORTABLE: &'static [(&'static str, &'static str)] = &[
        ("name", "name COLLATE NOCASE"),
        ("collection", "collection COLLATE NOCASE"),
        ("price", "price_cents"),
        ("stock", "stock"),
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            name: row.get(1)?,
            collection: row.get(2)?,
            price: price_from_cents(row.get(3)?),
            stock: row.get(4)?,
            active: row.get(5)?,
        })
    }

    fn values(&self) -> rusqlite::Result<Vec<Value>> {
        Ok(vec![
            Value::Text(self.name.clone()),
            Value::Text(self.collection.clone()),
            Value::Integer(price_to_cents(self.price)?),
            Value::Integer(i64::from(self.stock)),
            Value::Integer(i64::from(self.active)),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_round_trip_through_cents() {
        let price = Decimal::new(12_950, 2);
        assert_eq!(price_to_cents(price).unwrap(), 12_950);
        assert_eq!(price_from_cents(12_950), price);
        assert_eq!(price_to_cents(Decimal::new(45, 0)).unwrap(), 4_500);
    }

    #[test]
    fn fields_are_printable() {
        let course = Course {
            id: 3,
            title: "Bias Cutting".into(),
            category: "Construction".into(),
            level: "Advanced".into(),
            price: Decimal::new(240, 0),
            seats: 8,
            starts_on: NaiveDate::from_ymd_opt(2026, 3, 9).unwrap(),
            published: false,
        };

        assert_eq!(course.field("price").unwrap().to_string(), "$240.00");
        assert_eq!(course.field("starts_on").unwrap().to_string(), "2026-03-09");
        assert_eq!(course.field("published").unwrap().to_string(), "No");
        assert_eq!(course.field("nope"), None);
    }
}
