//! Phone number extraction.

use super::patterns::PHONE;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::profile::PHONE_NOT_FOUND;

/// Phone field extractor.
pub struct PhoneExtractor;

impl PhoneExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhoneExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for PhoneExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        PHONE.find(text).map(ExtractionMatch::from_regex)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        PHONE.find_iter(text).map(ExtractionMatch::from_regex).collect()
    }
}

/// Extract the first phone number from text, or `"Phone Not Found"`.
pub fn extract_phone(text: &str) -> String {
    PhoneExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| PHONE_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_phone() {
        assert_eq!(extract_phone("Call me at 555-123-4567"), "555-123-4567");
        assert_eq!(extract_phone("Phone: (555) 987 6543, fax 555-000-1111"), "(555) 987 6543");
    }

    #[test]
    fn test_first_match_only() {
        let text = "Home 5551234567 / Work +44 555 123 4567";
        assert_eq!(extract_phone(text), "5551234567");
        assert_eq!(PhoneExtractor::new().extract_all(text).len(), 2);
    }

    #[test]
    fn test_phone_not_found() {
        assert_eq!(extract_phone("Zip 90210, ext. 12"), "Phone Not Found");
        assert_eq!(extract_phone("id \u{0661}\u{0662}\u{0663}\u{0664}\u{0665}\u{0666}\u{0667}\u{0668}\u{0669}\u{0660}"), "Phone Not Found");
    }
}
