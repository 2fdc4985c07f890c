//! Customer — a person identified by a globally unique phone number.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, require};
use crate::id::CustomerId;

/// A stored customer row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

/// Customer fields as submitted on create or update.
///
/// Every field is optional at this stage so that an absent key and an
/// empty string are rejected the same way by [`NewCustomer::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewCustomer {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

/// Validated customer fields, ready to be written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerFields {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
}

impl NewCustomer {
    /// Check that all three fields are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first field that
    /// is absent or empty, in declaration order.
    pub fn validate(self) -> Result<CustomerFields, ValidationError> {
        Ok(CustomerFields {
            first_name: require("first_name", self.first_name)?,
            last_name: require("last_name", self.last_name)?,
            phone_number: require("phone_number", self.phone_number)?,
        })
    }
}

impl CustomerFields {
    /// Attach a store-assigned id.
    #[must_use]
    pub fn with_id(self, id: CustomerId) -> Customer {
        Customer {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
        }
    }
}

/// Listing parameters: a page window plus an optional substring filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerQuery {
    pub page: crate::page::PageRequest,
    pub search: Option<String>,
}

impl CustomerQuery {
    /// The search term, if it is non-empty.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref().filter(|term| !term.is_empty())
    }
}
