//! Email address extraction.

use super::patterns::EMAIL;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::profile::EMAIL_NOT_FOUND;

/// Email field extractor.
pub struct EmailExtractor;

impl EmailExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for EmailExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        EMAIL.find(text).map(ExtractionMatch::from_regex)
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        EMAIL.find_iter(text).map(ExtractionMatch::from_regex).collect()
    }
}

/// Extract the first email address from text, or `"Email Not Found"`.
pub fn extract_email(text: &str) -> String {
    EmailExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| EMAIL_NOT_FOUND.to_string())
}
