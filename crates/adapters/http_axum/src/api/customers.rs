//! JSON REST handlers for customers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use custhub_app::ports::{AddressRepository, CustomerRepository};
use custhub_domain::customer::{Customer, CustomerQuery, NewCustomer};
use custhub_domain::id::CustomerId;
use custhub_domain::page::{Page, PageRequest};

use super::body::{CreatedBody, DataBody, MessageBody, PageBody};
use crate::error::ApiError;
use crate::state::AppState;

/// Query string accepted by the list endpoint.
///
/// `page` and `limit` are kept as raw strings: anything that does not parse
/// as an integer (including an empty value) means "use the default".
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
}

fn lenient_int(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse().ok())
}

impl From<ListParams> for CustomerQuery {
    fn from(params: ListParams) -> Self {
        Self {
            page: PageRequest::new(
                lenient_int(params.page.as_deref()),
                lenient_int(params.limit.as_deref()),
            ),
            search: params.search,
        }
    }
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Page<Customer>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(page) => Json(PageBody {
                message: "success",
                pagination: page.summary(),
                data: page.items,
            })
            .into_response(),
        }
    }
}

/// Possible responses from the get endpoint.
pub enum GetResponse {
    Ok(Customer),
}

impl IntoResponse for GetResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(customer) => Json(DataBody {
                message: "success",
                data: customer,
            })
            .into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Created(CustomerId),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Created(id) => (
                StatusCode::CREATED,
                Json(CreatedBody {
                    message: "Customer created successfully",
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
                message: "Customer updated successfully",
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
                message: "Customer deleted successfully",
            })
            .into_response(),
        }
    }
}

/// `GET /api/customers?page=&limit=&search=`
pub async fn list<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<ListResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Query(params) = params?;
    let page = state.customer_service.list_customers(params.into()).await?;
    Ok(ListResponse::Ok(page))
}

/// `GET /api/customers/:id`
pub async fn get<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<GetResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let customer = state
        .customer_service
        .get_customer(CustomerId::new(id))
        .await?;
    Ok(GetResponse::Ok(customer))
}

/// `POST /api/customers`
pub async fn create<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    req: Result<Json<NewCustomer>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Json(req) = req?;
    let id = state.customer_service.create_customer(req).await?;
    Ok(CreateResponse::Created(id))
}

/// `PUT /api/customers/:id`
pub async fn update<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    id: Result<Path<i64>, PathRejection>,
    req: Result<Json<NewCustomer>, JsonRejection>,
) -> Result<UpdateResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    let Json(req) = req?;
    state
        .customer_service
        .update_customer(CustomerId::new(id), req)
        .await?;
    Ok(UpdateResponse::Updated)
}

/// `DELETE /api/customers/:id`
pub async fn delete<CR, AR>(
    State(state): State<AppState<CR, AR>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<DeleteResponse, ApiError>
where
    CR: CustomerRepository + Send + Sync + 'static,
    AR: AddressRepository + Send + Sync + 'static,
{
    let Path(id) = id?;
    state
        .customer_service
        .delete_customer(CustomerId::new(id))
        .await?;
    Ok(DeleteResponse::Deleted)
}
