//! Success envelopes shared by the API handlers.
//!
//! Every body carries a `message`; the rest depends on the operation.

use serde::Serialize;

use custhub_domain::page::Pagination;

/// Acknowledges a mutation that returns nothing else.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Acknowledges a creation with the id the store assigned.
#[derive(Serialize)]
pub struct CreatedBody<I> {
    pub message: &'static str,
    pub id: I,
}

/// Carries a single record or a plain list.
#[derive(Serialize)]
pub struct DataBody<T> {
    pub message: &'static str,
    pub data: T,
}

/// Carries one page of records and where it sits in the whole result.
#[derive(Serialize)]
pub struct PageBody<T> {
    pub message: &'static str,
    pub data: Vec<T>,
    pub pagination: Pagination,
}
