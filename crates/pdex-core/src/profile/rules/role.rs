//! Job role extraction.
//!
//! Candidates are tried in list order and the first one present anywhere in
//! the text wins, regardless of where in the text it occurs.

use super::patterns::ROLE_PATTERNS;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::profile::ROLE_NOT_FOUND;

/// Known job titles, in priority order.
pub const ROLES: &[&str] = &[
    "Software Developer",
    "Engineer",
    "Manager",
    "Consultant",
    "Analyst",
    "Designer",
    "Developer",
    "Specialist",
    "Leader",
    "Coordinator",
];

/// Role field extractor.
///
/// The value is the role's canonical spelling from [`ROLES`]; the position
/// is where it first occurs in the text.
pub struct RoleExtractor;

impl RoleExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for RoleExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for RoleExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        ROLE_PATTERNS.iter().find_map(|(role, pattern)| {
            pattern
                .find(text)
                .map(|m| ExtractionMatch::new(role.to_string(), m.start(), m.end()))
        })
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        ROLE_PATTERNS
            .iter()
            .filter_map(|(role, pattern)| {
                pattern
                    .find(text)
                    .map(|m| ExtractionMatch::new(role.to_string(), m.start(), m.end()))
            })
            .collect()
    }
}

/// Extract the first known role from text, or `"Role Not Found"`.
pub fn extract_role(text: &str) -> String {
    RoleExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| ROLE_NOT_FOUND.to_string())
}
