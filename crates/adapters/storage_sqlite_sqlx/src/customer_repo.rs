//! `SQLite` implementation of [`CustomerRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use custhub_app::ports::CustomerRepository;
use custhub_domain::customer::{Customer, CustomerFields, CustomerQuery};
use custhub_domain::error::CustHubError;
use custhub_domain::id::CustomerId;
use custhub_domain::page::Page;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Customer`].
struct Wrapper(Customer);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Customer {
            id: CustomerId::new(row.try_get("id")?),
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            phone_number: row.try_get("phone_number")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO customers (first_name, last_name, phone_number) VALUES (?, ?, ?)";
const SELECT_BY_ID: &str = "SELECT * FROM customers WHERE id = ?";
const UPDATE: &str =
    "UPDATE customers SET first_name = ?, last_name = ?, phone_number = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM customers WHERE id = ?";

const COUNT_ALL: &str = "SELECT COUNT(*) FROM customers";
const SELECT_PAGE: &str = "SELECT * FROM customers ORDER BY id LIMIT ? OFFSET ?";

const COUNT_MATCHING: &str = r"
    SELECT COUNT(*) FROM customers
    WHERE first_name LIKE ? ESCAPE '\'
       OR last_name LIKE ? ESCAPE '\'
       OR phone_number LIKE ? ESCAPE '\'
";
const SELECT_MATCHING_PAGE: &str = r"
    SELECT * FROM customers
    WHERE first_name LIKE ? ESCAPE '\'
       OR last_name LIKE ? ESCAPE '\'
       OR phone_number LIKE ? ESCAPE '\'
    ORDER BY id
    LIMIT ? OFFSET ?
";

/// Build a `LIKE` pattern matching `term` anywhere, with `%`, `_` and the
/// escape character itself taken literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(ch);
    }
    pattern.push('%');
    pattern
}

/// `SQLite`-backed customer repository.
pub struct SqliteCustomerRepository {
    pool: SqlitePool,
}

impl SqliteCustomerRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl CustomerRepository for SqliteCustomerRepository {
    async fn create(&self, fields: CustomerFields) -> Result<CustomerId, CustHubError> {
        let result = sqlx::query(INSERT)
            .bind(&fields.first_name)
            .bind(&fields.last_name)
            .bind(&fields.phone_number)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(CustomerId::new(result.last_insert_rowid()))
    }

    async fn list(&self, query: CustomerQuery) -> Result<Page<Customer>, CustHubError> {
        let request = query.page;
        let (total, rows) = if let Some(term) = query.search_term() {
            let pattern = contains_pattern(term);
            let total: i64 = sqlx::query_scalar(COUNT_MATCHING)
                .bind(&pattern)
                .bind(&pattern)
                .bind(&pattern)
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::from)?;
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_MATCHING_PAGE)
                .bind(&pattern)
                .bind(&pattern)
                .bind(&pattern)
                .bind(request.limit)
                .bind(request.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(StorageError::from)?;
            (total, rows)
        } else {
            let total: i64 = sqlx::query_scalar(COUNT_ALL)
                .fetch_one(&self.pool)
                .await
                .map_err(StorageError::from)?;
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_PAGE)
                .bind(request.limit)
                .bind(request.offset())
                .fetch_all(&self.pool)
                .await
                .map_err(StorageError::from)?;
            (total, rows)
        };

        Ok(Page {
            items: rows.into_iter().map(|w| w.0).collect(),
            total,
            request,
        })
    }

    async fn get_by_id(&self, id: CustomerId) -> Result<Option<Customer>, CustHubError> {
        let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
            .bind(id.as_i64())
            .fetch_optional(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(row.map(|w| w.0))
    }

    async fn update(&self, id: CustomerId, fields: CustomerFields) -> Result<u64, CustHubError> {
        let result = sqlx::query(UPDATE)
            .bind(&fields.first_name)
            .bind(&fields.last_name)
            .bind(&fields.phone_number)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: CustomerId) -> Result<u64, CustHubError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected())
    }
}
