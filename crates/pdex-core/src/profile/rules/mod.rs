//! Rule-based field extractors for contact details.
//!
//! Each extractor scans the full document text on its own; none depends on
//! the output of another. The `extract_*` helpers return the field's
//! placeholder when nothing matches, so they never fail.

pub mod address;
pub mod email;
pub mod name;
pub mod patterns;
pub mod phone;
pub mod role;

pub use address::{extract_address, AddressExtractor, ADDRESS_KEYWORDS};
pub use email::{extract_email, EmailExtractor};
pub use name::{extract_name, EntityRecognizer, HeuristicPersonRecognizer, NameExtractor};
pub use phone::{extract_phone, PhoneExtractor};
pub use role::{extract_role, RoleExtractor, ROLES};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// A value found in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte range in source text.
    pub position: (usize, usize),
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, start: usize, end: usize) -> Self {
        Self {
            value,
            position: (start, end),
        }
    }
}

impl ExtractionMatch<String> {
    /// Build a match from a regex hit.
    pub fn from_regex(m: regex::Match<'_>) -> Self {
        Self::new(m.as_str().to_string(), m.start(), m.end())
    }
}
