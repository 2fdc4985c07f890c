//! Address — a postal address owned by exactly one customer.

use serde::{Deserialize, Serialize};

use crate::error::{ValidationError, require};
use crate::id::{AddressId, CustomerId};

/// A stored address row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub customer_id: CustomerId,
    pub address_details: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

/// Address fields as submitted on create or update.
///
/// The owning customer comes from the request path, never the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewAddress {
    pub address_details: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub pin_code: Option<String>,
}

/// Validated address fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressFields {
    pub address_details: String,
    pub city: String,
    pub state: String,
    pub pin_code: String,
}

impl NewAddress {
    /// Check that all four fields are present and non-empty.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::MissingField`] for the first offending field.
    pub fn validate(self) -> Result<AddressFields, ValidationError> {
        Ok(AddressFields {
            address_details: require("address_details", self.address_details)?,
            city: require("city", self.city)?,
            state: require("state", self.state)?,
            pin_code: require("pin_code", self.pin_code)?,
        })
    }
}

impl AddressFields {
    #[must_use]
    pub fn with_ids(self, id: AddressId, customer_id: CustomerId) -> Address {
        Address {
            id,
            customer_id,
            address_details: self.address_details,
            city: self.city,
            state: self.state,
            pin_code: self.pin_code,
        }
    }
}
