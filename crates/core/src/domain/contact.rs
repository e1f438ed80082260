// Contact Domain Model

use serde::{Deserialize, Serialize};

/// Contact ID (primary key in the store)
pub type ContactId = i64;

/// A single contact record, immutable once read from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub firstname: String,
    pub lastname: String,
    pub address: String,
}

impl Contact {
    pub fn new(
        id: ContactId,
        firstname: impl Into<String>,
        lastname: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            id,
            firstname: firstname.into(),
            lastname: lastname.into(),
            address: address.into(),
        }
    }
}
