//! `SQLite` implementation of [`AddressRepository`].

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use custhub_app::ports::AddressRepository;
use custhub_domain::address::{Address, AddressFields};
use custhub_domain::error::CustHubError;
use custhub_domain::id::{AddressId, CustomerId};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Address`].
struct Wrapper(Address);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Address {
            id: AddressId::new(row.try_get("id")?),
            customer_id: CustomerId::new(row.try_get("customer_id")?),
            address_details: row.try_get("address_details")?,
            city: row.try_get("city")?,
            state: row.try_get("state")?,
            pin_code: row.try_get("pin_code")?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO addresses (customer_id, address_details, city, state, pin_code)
    VALUES (?, ?, ?, ?, ?)
";
const SELECT_BY_CUSTOMER: &str = "SELECT * FROM addresses WHERE customer_id = ? ORDER BY id";
const UPDATE: &str =
    "UPDATE addresses SET address_details = ?, city = ?, state = ?, pin_code = ? WHERE id = ?";
const DELETE_BY_ID: &str = "DELETE FROM addresses WHERE id = ?";

/// `SQLite`-backed address repository.
pub struct SqliteAddressRepository {
    pool: SqlitePool,
}

impl SqliteAddressRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl AddressRepository for SqliteAddressRepository {
    async fn create(
        &self,
        customer_id: CustomerId,
        fields: AddressFields,
    ) -> Result<AddressId, CustHubError> {
        let result = sqlx::query(INSERT)
            .bind(customer_id.as_i64())
            .bind(&fields.address_details)
            .bind(&fields.city)
            .bind(&fields.state)
            .bind(&fields.pin_code)
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(AddressId::new(result.last_insert_rowid()))
    }

    async fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Address>, CustHubError> {
        let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_CUSTOMER)
            .bind(customer_id.as_i64())
            .fetch_all(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(rows.into_iter().map(|w| w.0).collect())
    }

    async fn update(&self, id: AddressId, fields: AddressFields) -> Result<u64, CustHubError> {
        let result = sqlx::query(UPDATE)
            .bind(&fields.address_details)
            .bind(&fields.city)
            .bind(&fields.state)
            .bind(&fields.pin_code)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: AddressId) -> Result<u64, CustHubError> {
        let result = sqlx::query(DELETE_BY_ID)
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(StorageError::from)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SqliteCustomerRepository;
    use crate::pool::Config;
    use custhub_app::ports::CustomerRepository;
    use custhub_domain::customer::CustomerFields;
    use custhub_domain::error::ConflictKind;

    async fn setup() -> (SqliteCustomerRepository, SqliteAddressRepository) {
        let db = Config::in_memory().build().await.unwrap();
        (
            SqliteCustomerRepository::new(db.pool().clone()),
            SqliteAddressRepository::new(db.pool().clone()),
        )
    }

    async fn customer(repo: &SqliteCustomerRepository, phone: &str) -> CustomerId {
        repo.create(CustomerFields {
            first_name: "Ravi".to_string(),
            last_name: "Kumar".to_string(),
            phone_number: phone.to_string(),
        })
        .await
        .unwrap()
    }

    fn fields(city: &str) -> AddressFields {
        AddressFields {
            address_details: "Flat 4, MG Road".to_string(),
            city: city.to_string(),
            state: "KA".to_string(),
            pin_code: "560001".to_string(),
        }
    }

    #[tokio::test]
    async fn should_create_and_list_addresses_in_insertion_order() {
        let (customers, repo) = setup().await;
        let owner = customer(&customers, "1").await;
        let other = customer(&customers, "2").await;

        let first = repo.create(owner, fields("Bengaluru")).await.unwrap();
        let second = repo.create(owner, fields("Mysuru")).await.unwrap();
        repo.create(other, fields("Hubli")).await.unwrap();

        let listed = repo.find_by_customer(owner).await.unwrap();
        let ids: Vec<AddressId> = listed.iter().map(|a| a.id).collect();
        assert_eq!(ids, [first, second]);
        assert_eq!(listed[1].city, "Mysuru");
        assert_eq!(listed[1].customer_id, owner);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_customer_has_no_addresses() {
        let (_, repo) = setup().await;
        let listed = repo.find_by_customer(CustomerId::new(77)).await.unwrap();
        assert!(listed.is_empty());
    }

    #[tokio::test]
    async fn should_reject_address_for_unknown_customer() {
        let (_, repo) = setup().await;
        let result = repo.create(CustomerId::new(77), fields("Pune")).await;
        assert!(matches!(
            result,
            Err(CustHubError::Conflict(ref c)) if c.kind == ConflictKind::ForeignKey
        ));
    }

    #[tokio::test]
    async fn should_update_address_when_exists() {
        let (customers, repo) = setup().await;
        let owner = customer(&customers, "1").await;
        let id = repo.create(owner, fields("Pune")).await.unwrap();

        assert_eq!(repo.update(id, fields("Nashik")).await.unwrap(), 1);

        let listed = repo.find_by_customer(owner).await.unwrap();
        assert_eq!(listed[0].city, "Nashik");
        assert_eq!(listed[0].customer_id, owner);
    }

    #[tokio::test]
    async fn should_affect_no_rows_when_updating_missing_address() {
        let (_, repo) = setup().await;
        let affected = repo.update(AddressId::new(3), fields("Pune")).await.unwrap();
        assert_eq!(affected, 0);
    }

    #[tokio::test]
    async fn should_delete_address_once() {
        let (customers, repo) = setup().await;
        let owner = customer(&customers, "1").await;
        let id = repo.create(owner, fields("Pune")).await.unwrap();

        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert_eq!(repo.delete(id).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn should_cascade_delete_when_customer_deleted() {
        let (customers, repo) = setup().await;
        let owner = customer(&customers, "1").await;
        let keeper = customer(&customers, "2").await;
        for city in ["A", "B", "C"] {
            repo.create(owner, fields(city)).await.unwrap();
        }
        repo.create(keeper, fields("D")).await.unwrap();

        assert_eq!(customers.delete(owner).await.unwrap(), 1);

        assert!(repo.find_by_customer(owner).await.unwrap().is_empty());
        assert_eq!(repo.find_by_customer(keeper).await.unwrap().len(), 1);
    }
}
