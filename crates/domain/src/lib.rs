//! # custhub-domain
//!
//! Pure domain model for the custhub customer registry.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Customers** (people identified by a unique phone number)
//! - Define **Addresses** (postal addresses owned by exactly one customer)
//! - Define the input records accepted on create/update and their
//!   field-presence validation
//! - Define pagination math for customer listings
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod page;

pub mod address;
pub mod customer;
