//! Shared application state for axum handlers.

use std::sync::Arc;

use custhub_app::ports::{AddressRepository, CustomerRepository};
use custhub_app::services::address_service::AddressService;
use custhub_app::services::customer_service::CustomerService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<CR, AR> {
    /// Customer CRUD service.
    pub customer_service: Arc<CustomerService<CR>>,
    /// Address CRUD service.
    pub address_service: Arc<AddressService<AR>>,
}

impl<CR, AR> Clone for AppState<CR, AR> {
    fn clone(&self) -> Self {
        Self {
            customer_service: Arc::clone(&self.customer_service),
            address_service: Arc::clone(&self.address_service),
        }
    }
}

impl<CR, AR> AppState<CR, AR>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(customer_service: CustomerService<CR>, address_service: AddressService<AR>) -> Self {
        Self {
            customer_service: Arc::new(customer_service),
            address_service: Arc::new(address_service),
        }
    }
}
