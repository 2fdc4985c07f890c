//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod addresses;
pub mod body;
#[allow(clippy::missing_errors_doc)]
pub mod customers;

use axum::Router;
use axum::routing::{get, put};

use custhub_app::ports::{AddressRepository, CustomerRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<CR, AR>() -> Router<AppState<CR, AR>>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    Router::new()
        // Customers
        .route(
            "/customers",
            get(customers::list::<CR, AR>).post(customers::create::<CR, AR>),
        )
        .route(
            "/customers/{id}",
            get(customers::get::<CR, AR>)
                .put(customers::update::<CR, AR>)
                .delete(customers::delete::<CR, AR>),
        )
        // Addresses
        .route(
            "/customers/{id}/addresses",
            get(addresses::list::<CR, AR>).post(addresses::create::<CR, AR>),
        )
        .route(
            "/addresses/{address_id}",
            put(addresses::update::<CR, AR>).delete(addresses::delete::<CR, AR>),
        )
}
