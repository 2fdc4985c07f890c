//! # custhub-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `custhub-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle (foreign keys on for every connection)
//! - Create the schema at startup through embedded sqlx migrations
//! - Map between domain types and database rows
//! - Classify constraint violations so callers can tell them from other failures
//!
//! ## Dependency rule
//! Depends on `custhub-app` (for port traits) and `custhub-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod address_repo;
pub mod customer_repo;
pub mod error;
pub mod pool;

pub use address_repo::SqliteAddressRepository;
pub use customer_repo::SqliteCustomerRepository;
pub use error::StorageError;
pub use pool::{Config, Database, is_in_memory_url};
