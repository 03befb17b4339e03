//! The fixed-shape record produced for every processed document.

use serde::{Deserialize, Serialize};

/// Placeholder returned when no person name is detected.
pub const NAME_NOT_FOUND: &str = "Name Not Found";
/// Placeholder returned when no address-like sentence is detected.
pub const ADDRESS_NOT_FOUND: &str = "Address Not Found";
/// Placeholder returned when no phone number matches.
pub const PHONE_NOT_FOUND: &str = "Phone Not Found";
/// Placeholder returned when no email address matches.
pub const EMAIL_NOT_FOUND: &str = "Email Not Found";
/// Placeholder returned when no known job role occurs.
pub const ROLE_NOT_FOUND: &str = "Role Not Found";

/// Contact details extracted from a single document.
///
/// Every field is always populated, either with the matched text or with
/// the field's "not found" placeholder. Keys are serialized with their
/// capitalized names (`Name`, `Address`, ...) so browser consumers can rely
/// on them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ExtractionResult {
    /// Candidate person name.
    pub name: String,

    /// First sentence that looks like a postal address.
    pub address: String,

    /// First phone number in the text.
    pub phone: String,

    /// First email address in the text.
    pub email: String,

    /// First matching job title from the known role list.
    pub role: String,
}

impl ExtractionResult {
    /// A record where every field holds its placeholder.
    pub fn not_found() -> Self {
        Self {
            name: NAME_NOT_FOUND.to_string(),
            address: ADDRESS_NOT_FOUND.to_string(),
            phone: PHONE_NOT_FOUND.to_string(),
            email: EMAIL_NOT_FOUND.to_string(),
            role: ROLE_NOT_FOUND.to_string(),
        }
    }

    /// Names of the fields that fell back to their placeholder.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name == NAME_NOT_FOUND {
            missing.push("Name");
        }
        if self.address == ADDRESS_NOT_FOUND {
            missing.push("Address");
        }
        if self.phone == PHONE_NOT_FOUND {
            missing.push("Phone");
        }
        if self.email == EMAIL_NOT_FOUND {
            missing.push("Email");
        }
        if self.role == ROLE_NOT_FOUND {
            missing.push("Role");
        }
        missing
    }

    /// Field name and value pairs in display order.
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("Name", self.name.as_str()),
            ("Address", self.address.as_str()),
            ("Phone", self.phone.as_str()),
            ("Email", self.email.as_str()),
            ("Role", self.role.as_str()),
        ]
    }
}
