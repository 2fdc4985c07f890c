//! JSON REST handlers for addresses.
//!
//! Creation and listing are nested under the owning customer; update and
//! delete address the row directly.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use custhub_app::ports::{AddressRepository, CustomerRepository};
use custhub_domain::address::{Address, NewAddress};
use custhub_domain::id::{AddressId, CustomerId};

use super::body::{CreatedBody, DataBody, MessageBody};
use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Vec<Address>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(addresses) => Json(DataBody {
                message: "success",
                data: addresses,
            })
            .into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(AddressId),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(id) => (
                StatusCode::CREATED,
                Json(CreatedBody {
                    message: "Address added successfully",
                    id,
                }),
            )
                .into_response(),
        }
    }
}

/// Possible responses from the update endpoint.
pub enum UpdateResponse {
    Updated,
}

impl IntoResponse for UpdateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Updated => Json(MessageBody {
                message: "Address updated successfully",
            })
            .into_response(),
        }
    }
}

/// Possible responses from the delete endpoint.
pub enum DeleteResponse {
    Deleted,
}

impl IntoResponse for DeleteResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Deleted => Json(MessageBody {
                message: "Address deleted successfully",
            })
            .into_response(),
        }
    }
}

/// `GET /api/customers/:id/addresses`
pub async fn list<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    customer_id: Result<Path<i64>, PathRejection>,
) -> Result<ListResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Path(customer_id) = customer_id?;
    let addresses = state
        .address_service
        .list_addresses(CustomerId::new(customer_id))
        .await?;
    Ok(ListResponse::Ok(addresses))
}

/// `POST /api/customers/:id/addresses`
pub async fn create<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    customer_id: Result<Path<i64>, PathRejection>,
    req: Result<Json<NewAddress>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Path(customer_id) = customer_id?;
    let Json(req) = req?;
    let id = state
        .address_service
        .create_address(CustomerId::new(customer_id), req)
        .await?;
    Ok(CreateResponse::Created(id))
}

/// `PUT /api/addresses/:address_id`
pub async fn update<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    address_id: Result<Path<i64>, PathRejection>,
    req: Result<Json<NewAddress>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Path(address_id) = address_id?;
    let Json(req) = req?;
    state
        .address_service
        .update_address(AddressId::new(address_id), req)
        .await?;
    Ok(UpdateResponse::Updated)
}

/// `DELETE /api/addresses/:address_id`
pub async fn delete<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    address_id: Result<Path<i64>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Path(address_id) = address_id?;
    state
        .address_service
        .delete_address(AddressId::new(address_id))
        .await?;
    Ok(DeleteResponse::Deleted)
}
