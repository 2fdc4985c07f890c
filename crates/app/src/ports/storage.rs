//! Storage port — repository traits for persistence.
//!
//! Every method maps to one parameterized statement against the store, except
//! [`CustomerRepository::list`] which issues a count and a select. Mutations
//! report the number of rows they touched; turning `0` into a not-found error
//! is the service's job.

use std::future::Future;

use custhub_domain::address::{Address, AddressFields};
use custhub_domain::customer::{Customer, CustomerFields, CustomerQuery};
use custhub_domain::error::CustHubError;
use custhub_domain::id::{AddressId, CustomerId};
use custhub_domain::page::Page;

/// Repository for persisting and querying [`Customer`]s.
pub trait CustomerRepository {
    /// Insert a customer and return the id the store assigned.
    fn create(
        &self,
        fields: CustomerFields,
    ) -> impl Future<Output = Result<CustomerId, CustHubError>> + Send;

    /// Return one page of customers matching the query, with the total
    /// number of matches.
    fn list(
        &self,
        query: CustomerQuery,
    ) -> impl Future<Output = Result<Page<Customer>, CustHubError>> + Send;

    fn get_by_id(
        &self,
        id: CustomerId,
    ) -> impl Future<Output = Result<Option<Customer>, CustHubError>> + Send;

    /// Rewrite all fields of a customer. Returns the affected row count.
    fn update(
        &self,
        id: CustomerId,
        fields: CustomerFields,
    ) -> impl Future<Output = Result<u64, CustHubError>> + Send;

    /// Delete a customer (and, through the store, its addresses).
    /// Returns the affected row count.
    fn delete(&self, id: CustomerId) -> impl Future<Output = Result<u64, CustHubError>> + Send;
}

/// Repository for persisting and querying [`Address`]es.
pub trait AddressRepository {
    fn create(
        &self,
        customer_id: CustomerId,
        fields: AddressFields,
    ) -> impl Future<Output = Result<AddressId, CustHubError>> + Send;

    /// All addresses owned by `customer_id`, oldest first.
    fn find_by_customer(
        &self,
        customer_id: CustomerId,
    ) -> impl Future<Output = Result<Vec<Address>, CustHubError>> + Send;

    fn update(
        &self,
        id: AddressId,
        fields: AddressFields,
    ) -> impl Future<Output = Result<u64, CustHubError>> + Send;

    fn delete(&self, id: AddressId) -> impl Future<Output = Result<u64, CustHubError>> + Send;
}
