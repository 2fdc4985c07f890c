//! # custhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the **JSON API** under `/api` (`/api/customers`,
//!   `/api/customers/{id}/addresses`, `/api/addresses/{address_id}`)
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into JSON envelopes and error statuses
//!   (400 validation, 404 not found, 500 store failure)
//!
//! ## Dependency rule
//! Depends on `custhub-app` (for port traits and services) and `custhub-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
