//! Customer service — use-cases for managing customers.

use custhub_domain::customer::{Customer, CustomerQuery, NewCustomer};
use custhub_domain::error::{CustHubError, NotFoundError};
use custhub_domain::id::CustomerId;
use custhub_domain::page::Page;

use crate::ports::CustomerRepository;

fn not_found(id: CustomerId) -> CustHubError {
    NotFoundError {
        entity: "Customer",
        id: id.to_string(),
    }
    .into()
}

/// Application service for customer CRUD operations.
pub struct CustomerService<R> {
    repo: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate the submitted fields and insert a new customer.
    ///
    /// # Errors
    ///
    /// Returns [`CustHubError::Validation`] if a field is missing or empty,
    /// [`CustHubError::Conflict`] if the phone number is already taken, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_customer(&self, input: NewCustomer) -> Result<CustomerId, CustHubError> {
        let fields = input.validate()?;
        let id = self.repo.create(fields).await?;
        tracing::debug!(%id, "customer created");
        Ok(id)
    }

    /// List one page of customers, optionally filtered by a search term.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_customers(
        &self,
        query: CustomerQuery,
    ) -> Result<Page<Customer>, CustHubError> {
        self.repo.list(query).await
    }

    /// Look up a customer by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`CustHubError::NotFound`] when no customer with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, id: CustomerId) -> Result<Customer, CustHubError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// Rewrite all fields of an existing customer.
    ///
    /// # Errors
    ///
    /// Returns [`CustHubError::Validation`] if a field is missing or empty,
    /// [`CustHubError::NotFound`] if no row was updated, or a storage error.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_customer(
        &self,
        id: CustomerId,
        input: NewCustomer,
    ) -> Result<(), CustHubError> {
        let fields = input.validate()?;
        if self.repo.update(id, fields).await? == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(%id, "customer updated");
        Ok(())
    }

    /// Delete a customer; the store removes its addresses with it.
    ///
    /// # Errors
    ///
    /// Returns [`CustHubError::NotFound`] if no row was deleted, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_customer(&self, id: CustomerId) -> Result<(), CustHubError> {
        if self.repo.delete(id).await? == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(%id, "customer deleted");
        Ok(())
    }
}
