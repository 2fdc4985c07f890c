//! # custhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `CustomerRepository` — create, paginated search, get, update, delete
//!   - `AddressRepository` — create, list by customer, update, delete
//! - Define **driving/inbound ports** as use-case structs:
//!   - `CustomerService` — validate input, map "no row touched" to not-found
//!   - `AddressService` — same, for addresses
//!
//! ## Dependency rule
//! Depends on `custhub-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
