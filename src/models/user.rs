use serde::{Deserialize, Serialize};

use crate::models::Account;
use crate::types::{AccountId, UserId};

/// Personal fields submitted when a user is created.
///
/// Every field defaults to an empty string when absent so that missing and
/// blank values are rejected by the same required-field check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub id_number: String,
    pub account_currency: String,
    pub residency_country_code: String,
    pub nationality: String,
    pub gender: String,
    pub dob: String
}

impl UserDetails {
    /// Returns `true` when every mandatory field holds a non-blank value.
    pub fn has_required_fields(&self) -> bool {
        [
            &self.first_name,
            &self.last_name,
            &self.email,
            &self.phone_number,
            &self.id_number,
            &self.account_currency
        ]
        .iter()
        .all(|field| !field.trim().is_empty())
    }
}

/// A registered user and the identifier of the single account they own.
#[derive(Debug, Clone)]
pub struct User {
    pub person_id: UserId,
    pub account_id: AccountId,
    pub details: UserDetails
}

impl User {
    pub fn new(person_id: UserId, account: &Account, details: UserDetails) -> Self {
        Self {
            person_id,
            account_id: account.account_id,
            details
        }
    }

    /// Returns `true` if this user already claims the given email or identity number.
    pub fn conflicts_with(&self, email: &str, id_number: &str) -> bool {
        self.details.email == email || self.details.id_number == id_number
    }
}
