//! Address service — use-cases for managing customer addresses.

use custhub_domain::address::{Address, NewAddress};
use custhub_domain::error::{CustHubError, NotFoundError};
use custhub_domain::id::{AddressId, CustomerId};

use crate::ports::AddressRepository;

fn not_found(id: AddressId) -> CustHubError {
    NotFoundError {
        entity: "Address",
        id: id.to_string(),
    }
    .into()
}

/// Application service for address CRUD operations.
///
/// Creation does not look the owning customer up first; the store's foreign
/// key is the only guard against orphaned rows.
pub struct AddressService<R> {
    repo: R,
}

impl<R: AddressRepository> AddressService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate the submitted fields and attach a new address to `customer_id`.
    ///
    /// # Errors
    ///
    /// Returns [`CustHubError::Validation`] if a field is missing or empty,
    /// [`CustHubError::Conflict`] if the store rejects the customer reference,
    /// or a storage error propagated from the repository.
    #[tracing::instrument(skip(self, input))]
    pub async fn create_address(
        &self,
        customer_id: CustomerId,
        input: NewAddress,
    ) -> Result<AddressId, CustHubError> {
        let fields = input.validate()?;
        let id = self.repo.create(customer_id, fields).await?;
        tracing::debug!(%id, %customer_id, "address created");
        Ok(id)
    }

    /// List every address of a customer. An unknown customer yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn list_addresses(
        &self,
        customer_id: CustomerId,
    ) -> Result<Vec<Address>, CustHubError> {
        self.repo.find_by_customer(customer_id).await
    }

    /// Rewrite the text fields of an existing address. The owner is unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CustHubError::Validation`] if a field is missing or empty,
    /// [`CustHubError::NotFound`] if no row was updated, or a storage error.
    #[tracing::instrument(skip(self, input))]
    pub async fn update_address(
        &self,
        id: AddressId,
        input: NewAddress,
    ) -> Result<(), CustHubError> {
        let fields = input.validate()?;
        if self.repo.update(id, fields).await? == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(%id, "address updated");
        Ok(())
    }

    /// Delete an address.
    ///
    /// # Errors
    ///
    /// Returns [`CustHubError::NotFound`] if no row was deleted, or a storage
    /// error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn delete_address(&self, id: AddressId) -> Result<(), CustHubError> {
        if self.repo.delete(id).await? == 0 {
            return Err(not_found(id));
        }
        tracing::debug!(%id, "address deleted");
        Ok(())
    }
}
