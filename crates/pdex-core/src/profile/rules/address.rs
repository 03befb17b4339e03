//! Address line detection.
//!
//! The text is cut into sentence-like segments on the literal `". "`
//! delimiter; the first segment mentioning an address keyword is the
//! address. Abbreviations and missing spaces after periods segment badly,
//! and that is accepted.

use super::{ExtractionMatch, FieldExtractor};
use crate::models::profile::ADDRESS_NOT_FOUND;

/// Segment delimiter.
pub const SEGMENT_DELIMITER: &str = ". ";

/// Lowercase keywords that mark a segment as an address, in match order.
pub const ADDRESS_KEYWORDS: &[&str] = &["street", "road", "avenue", "lane", "blvd", "city", "district"];

/// Address field extractor.
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }

    fn is_address(segment: &str) -> bool {
        let lower = segment.to_lowercase();
        ADDRESS_KEYWORDS.iter().any(|keyword| lower.contains(keyword))
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let mut offset = 0;
        for segment in text.split(SEGMENT_DELIMITER) {
            if Self::is_address(segment) {
                return Some(ExtractionMatch::new(
                    segment.to_string(),
                    offset,
                    offset + segment.len(),
                ));
            }
            offset += segment.len() + SEGMENT_DELIMITER.len();
        }
        None
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = Vec::new();
        let mut offset = 0;
        for segment in text.split(SEGMENT_DELIMITER) {
            if Self::is_address(segment) {
                results.push(ExtractionMatch::new(
                    segment.to_string(),
                    offset,
                    offset + segment.len(),
                ));
            }
            offset += segment.len() + SEGMENT_DELIMITER.len();
        }
        results
    }
}

/// Extract the first address-like segment, or `"Address Not Found"`.
pub fn extract_address(text: &str) -> String {
    AddressExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| ADDRESS_NOT_FOUND.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_returns_first_keyword_segment_verbatim() {
        let text = "Jane Doe. Senior Engineer. Available now. Lives at 42 Main Street, Springfield. Moved from Elm Road";
        assert_eq!(extract_address(text), "Lives at 42 Main Street, Springfield");
    }

    #[test]
    fn test_keyword_match_is_case_insensitive() {
        assert_eq!(extract_address("Office: 9 SUNSET BLVD"), "Office: 9 SUNSET BLVD");
        assert_eq!(extract_address("Kathmandu District 3"), "Kathmandu District 3");
    }

    #[test]
    fn test_keyword_inside_longer_word() {
        // substring match, so "Citywide" counts
        assert_eq!(extract_address("Worked on Citywide projects"), "Worked on Citywide projects");
    }

    #[test]
    fn test_naive_split_keeps_line_breaks() {
        let text = "Jane Doe\n12 Baker Street\nLondon.Next sentence";
        assert_eq!(extract_address(text), text);
    }

    #[test]
    fn test_not_found() {
        assert_eq!(extract_address("No location given. Just skills"), "Address Not Found");
        assert_eq!(extract_address(""), "Address Not Found");
    }

    #[test]
    fn test_extract_all_positions() {
        let text = "A road. B. C avenue";
        let found = AddressExtractor::new().extract_all(text);
        assert_eq!(found.len(), 2);
        assert_eq!(found[1].value, "C avenue");
        assert_eq!(&text[found[1].position.0..found[1].position.1], "C avenue");
    }
}
