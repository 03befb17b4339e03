//! Common regex patterns for contact field extraction.

use lazy_static::lazy_static;
use regex::{Regex, RegexBuilder};

use super::role::ROLES;

lazy_static! {
    // Phone: optional +CC, 3-digit area code (optionally parenthesized),
    // 3 digits, 4 digits; or a bare run of 10 digits. ASCII digits only.
    pub static ref PHONE: Regex = Regex::new(
        r"(?:\+?[0-9]{1,2}[\s\-]?)?(?:\([0-9]{3}\)|[0-9]{3})[\s\-]?[0-9]{3}[\s\-]?[0-9]{4}|[0-9]{10}"
    ).unwrap();

    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Word token used by the person recognizer (letters, apostrophes, hyphens)
    pub static ref WORD: Regex = Regex::new(
        r"\p{L}[\p{L}'’-]*"
    ).unwrap();

    // One case-insensitive literal matcher per role, in role list order
    pub static ref ROLE_PATTERNS: Vec<(&'static str, Regex)> = ROLES
        .iter()
        .map(|role| {
            let pattern = RegexBuilder::new(&regex::escape(role))
                .case_insensitive(true)
                .build()
                .unwrap();
            (*role, pattern)
        })
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_variants() {
        assert_eq!(PHONE.find("Call me at 555-123-4567").unwrap().as_str(), "555-123-4567");
        assert_eq!(PHONE.find("tel +1 (555) 123-4567").unwrap().as_str(), "+1 (555) 123-4567");
        assert_eq!(PHONE.find("m: 555 123 4567").unwrap().as_str(), "555 123 4567");
        assert_eq!(PHONE.find("5551234567").unwrap().as_str(), "5551234567");
        assert!(PHONE.find("12 Main Street, 90210").is_none());
    }

    #[test]
    fn test_phone_ignores_non_ascii_digits() {
        assert!(PHONE.find("id \u{0661}\u{0662}\u{0663}\u{0664}\u{0665}\u{0666}\u{0667}\u{0668}\u{0669}\u{0660}").is_none());
        assert!(PHONE.find("tel \u{FF15}\u{FF15}\u{FF15}-123-4567").is_none());
    }

    #[test]
    fn test_email_pattern() {
        assert_eq!(
            EMAIL.find("write to j.doe+cv@mail.example.org today").unwrap().as_str(),
            "j.doe+cv@mail.example.org"
        );
        assert!(EMAIL.find("user@localhost").is_none());
        assert!(EMAIL.find("user@example.c").is_none());
    }

    #[test]
    fn test_role_patterns_follow_role_order() {
        let names: Vec<&str> = ROLE_PATTERNS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ROLES.to_vec());
        assert!(ROLE_PATTERNS[0].1.is_match("SOFTWARE DEVELOPER"));
    }
}
