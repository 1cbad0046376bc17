//! List queries and the SQL they turn into.

use std::marker::PhantomData;

use atelier_grid::{GridError, SortState};
use rusqlite::types::Value;

use super::CatalogError;
use super::models::CatalogRecord;

/// What a list screen asks the catalog for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    /// Case-insensitive substring matched against the searchable columns.
    /// Blank means no filter.
    pub search: String,
    pub sort: SortState,
    pub page: u32,
    pub limit: u32,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortState::none(),
            page: 1,
            limit: 10,
        }
    }
}

impl ListQuery {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            ..Self::default()
        }
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = term.into();
        self
    }

    pub fn sort(mut self, sort: SortState) -> Self {
        self.sort = sort;
        self
    }

    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.limit)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if self.page == 0 {
            return Err(GridError::InvalidPage.into());
        }
        if self.limit == 0 {
            return Err(GridError::InvalidLimit.into());
        }
        Ok(())
    }
}

/// SQL text plus its positional parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    pub sql: String,
    pub params: Vec<Value>,
}

/// Builds the select and count statements for one record type.
///
/// # Example
///
/// ```ignore
/// let query = ListQuery::new(2, 20).search("silk");
/// let select = QueryBuilder::<Course>::new(&query).select()?;
/// // SELECT ... FROM courses WHERE (title LIKE ? ESCAPE '\' OR ...)
/// //   ORDER BY id ASC LIMIT ? OFFSET ?
/// ```
pub struct QueryBuilder<'q, R> {
    query: &'q ListQuery,
    _record: PhantomData<R>,
}

impl<'q, R: CatalogRecord> QueryBuilder<'q, R> {
    pub fn new(query: &'q ListQuery) -> Self {
        Self {
            query,
            _record: PhantomData,
        }
    }

    pub fn select(&self) -> Result<Statement, CatalogError> {
        self.query.validate()?;

        let mut params = Vec::new();
        let mut sql = format!("SELECT {} FROM {}", R::COLUMNS.join(", "), R::TABLE);
        sql.push_str(&self.where_clause(&mut params));
        sql.push_str(&self.order_clause()?);
        sql.push_str(" LIMIT ? OFFSET ?");

        params.push(Value::Integer(i64::from(self.query.limit)));
        params.push(Value::Integer(
            i64::try_from(self.query.offset()).unwrap_or(i64::MAX),
        ));

        Ok(Statement { sql, params })
    }

    pub fn count(&self) -> Statement {
        let mut params = Vec::new();
        let mut sql = format!("SELECT COUNT(*) FROM {}", R::TABLE);
        sql.push_str(&self.where_clause(&mut params));
        Statement { sql, params }
    }

    fn where_clause(&self, params: &mut Vec<Value>) -> String {
        let term = self.query.search.trim();
        if term.is_empty() || R::SEARCHABLE.is_empty() {
            return String::new();
        }

        let pattern = format!("%{}%", escape_like(term));
        let conditions: Vec<String> = R::SEARCHABLE
            .iter()
            .map(|column| {
                params.push(Value::Text(pattern.clone()));
                format!("{column} LIKE ? ESCAPE '\\'")
            })
            .collect();
        format!(" WHERE ({})", conditions.join(" OR "))
    }

    fn order_clause(&self) -> Result<String, CatalogError> {
        let Some(key) = self.query.sort.sort_by.as_deref() else {
            return Ok(" ORDER BY id ASC".to_string());
        };
        let (_, expr) = R::SORTABLE
            .iter()
            .find(|(name, _)| *name == key)
            .ok_or_else(|| CatalogError::InvalidSort(key.to_string()))?;
        Ok(format!(
            " ORDER BY {expr} {}, id ASC",
            self.query.sort.sort_order.as_sql()
        ))
    }
}

/// `INSERT` for every column but `id`.
pub fn insert_sql<R: CatalogRecord>() -> String {
    let columns = &R::COLUMNS[1..];
    let placeholders = vec!["?"; columns.len()].join(", ");
    format!(
        "INSERT INTO {} ({}) VALUES ({placeholders})",
        R::TABLE,
        columns.join(", ")
    )
}

/// `UPDATE` of every column but `id`; the id is the last parameter.
pub fn update_sql<R: CatalogRecord>() -> String {
    let assignments: Vec<String> = R::COLUMNS[1..]
        .iter()
        .map(|column| format!("{column} = ?"))
        .collect();
    format!("UPDATE {} SET {} WHERE id = ?", R::TABLE, assignments.join(", "))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::models::{Course, Product};
    use atelier_grid::SortOrder;

    #[test]
    fn plain_select_orders_by_id() {
        let query = ListQuery::new(3, 20);
        let stmt = QueryBuilder::<Product>::new(&query).select().unwrap();
        assert_eq!(
            stmt.sql,
            "SELECT id, name, collection, price_cents, stock, active FROM products \
             ORDER BY id ASC LIMIT ? OFFSET ?"
        );
        assert_eq!(stmt.params, vec![Value::Integer(20), Value::Integer(40)]);
    }

    #[test]
    fn search_matches_every_text_column() {
        let query = ListQuery::new(1, 10).search("  silk ");
        let stmt = QueryBuilder::<Product>::new(&query).count();
        assert_eq!(
            stmt.sql,
            "SELECT COUNT(*) FROM products WHERE \
             (name LIKE ? ESCAPE '\\' OR collection LIKE ? ESCAPE '\\')"
        );
        assert_eq!(
            stmt.params,
            vec![Value::Text("%silk%".into()), Value::Text("%silk%".into())]
        );
    }

    #[test]
    fn like_wildcards_are_escaped() {
        assert_eq!(escape_like("50%_off\\"), "50\\%\\_off\\\\");
    }

    #[test]
    fn sort_uses_whitelisted_expression() {
        let query = ListQuery::new(1, 10).sort(SortState::by("price", SortOrder::Desc));
        let stmt = QueryBuilder::<Course>::new(&query).select().unwrap();
        assert!(stmt.sql.ends_with("ORDER BY price_cents DESC, id ASC LIMIT ? OFFSET ?"));
    }

    #[test]
    fn unknown_sort_column_is_rejected() {
        let query = ListQuery::new(1, 10).sort(SortState::by("1; DROP TABLE courses", SortOrder::Asc));
        let err = QueryBuilder::<Course>::new(&query).select().unwrap_err();
        assert!(matches!(err, CatalogError::InvalidSort(ref key) if key.starts_with("1;")));
    }

    #[test]
    fn zero_page_or_limit_is_rejected() {
        let query = ListQuery::new(0, 10);
        assert!(matches!(
            QueryBuilder::<Course>::new(&query).select(),
            Err(CatalogError::Grid(GridError::InvalidPage))
        ));
        let query = ListQuery::new(1, 0);
        assert!(matches!(
            QueryBuilder::<Course>::new(&query).select(),
            Err(CatalogError::Grid(GridError::InvalidLimit))
        ));
    }

    #[test]
    fn write_statements_skip_the_id() {
        assert_eq!(
            insert_sql::<Product>(),
            "INSERT INTO products (name, collection, price_cents, stock, active) VALUES (?, ?, ?, ?, ?)"
        );
        assert_eq!(
            update_sql::<Product>(),
            "UPDATE products SET name = ?, collection = ?, price_cents = ?, stock = ?, active = ? WHERE id = ?"
        );
    }
}
