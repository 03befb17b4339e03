//! Person name detection.
//!
//! Names are found by a person-entity recognizer. The default recognizer is
//! a lightweight heuristic over capitalized word runs; anything implementing
//! [`EntityRecognizer`] can be plugged into [`NameExtractor`] instead.

use super::patterns::WORD;
use super::{ExtractionMatch, FieldExtractor};
use crate::models::profile::NAME_NOT_FOUND;

/// Personal titles that introduce a name (compared case-insensitively).
pub const PERSON_TITLES: &[&str] = &["mr", "mrs", "ms", "miss", "dr", "prof"];

/// Capitalized words that never form part of a person name.
pub const NON_NAME_WORDS: &[&str] = &[
    // document headings
    "resume", "curriculum", "vitae", "cv", "profile", "summary", "objective",
    "experience", "education", "skills", "projects", "references", "contact",
    "details", "information", "personal", "professional", "work", "history",
    "certifications", "languages", "interests", "achievements", "page",
    // contact labels
    "name", "email", "mail", "phone", "mobile", "tel", "telephone", "fax",
    "address", "linkedin", "github", "website", "portfolio",
    // connectives and pronouns
    "the", "and", "or", "of", "for", "at", "in", "on", "with", "to", "from",
    "by", "as", "a", "an", "my", "our", "your", "i", "we", "he", "she", "they",
    "this", "that", "dear", "sincerely", "regards", "hello", "hi", "thanks",
    // organisations and places
    "university", "college", "school", "institute", "academy", "company",
    "inc", "ltd", "llc", "corp", "corporation", "group", "street", "road",
    "avenue", "lane", "blvd", "city", "district", "state", "country", "new",
    "york", "san", "los", "angeles", "francisco", "united", "states",
    "kingdom", "america", "north", "south", "east", "west",
    // job titles and levels
    "software", "developer", "engineer", "manager", "consultant", "analyst",
    "designer", "specialist", "leader", "coordinator", "senior", "junior",
    "lead", "chief", "head", "intern", "director", "officer", "present",
    "bachelor", "master", "science", "arts", "degree",
    // calendar
    "january", "february", "march", "april", "may", "june", "july", "august",
    "september", "october", "november", "december", "jan", "feb", "mar",
    "apr", "jun", "jul", "aug", "sep", "sept", "oct", "nov", "dec", "monday",
    "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday",
];

/// Detects person entities in free text.
pub trait EntityRecognizer {
    /// All person entities, in document order.
    fn recognize_persons(&self, text: &str) -> Vec<ExtractionMatch<String>>;
}

/// Heuristic person recognizer.
///
/// A person is a run of two or three adjacent capitalized words on one line
/// (separated only by spaces), none of them in [`NON_NAME_WORDS`], or one to
/// three capitalized words following a personal title such as `Dr.`.
#[derive(Debug, Clone, Copy)]
pub struct HeuristicPersonRecognizer {
    min_words: usize,
    max_words: usize,
}

impl HeuristicPersonRecognizer {
    pub fn new() -> Self {
        Self {
            min_words: 2,
            max_words: 3,
        }
    }
}

impl Default for HeuristicPersonRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct Token<'a> {
    text: &'a str,
    start: usize,
    end: usize,
}

fn is_title(word: &str) -> bool {
    PERSON_TITLES.iter().any(|t| t.eq_ignore_ascii_case(word))
}

fn is_name_word(word: &str) -> bool {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_uppercase() {
        return false;
    }
    // all-caps tokens are headings or acronyms
    if !word.chars().any(|c| c.is_lowercase()) {
        return false;
    }
    let lower = word.to_lowercase();
    !is_title(&lower) && !NON_NAME_WORDS.contains(&lower.as_str())
}

/// Whether two tokens on the same line are separated by spaces only.
fn joined(line: &str, prev: &Token<'_>, next: &Token<'_>) -> bool {
    let gap = &line[prev.end..next.start];
    !gap.is_empty() && gap.chars().all(|c| c == ' ' || c == '\t')
}

/// Gap after a title: optional period, then spaces.
fn joined_after_title(line: &str, title: &Token<'_>, next: &Token<'_>) -> bool {
    let gap = &line[title.end..next.start];
    let gap = gap.strip_prefix('.').unwrap_or(gap);
    !gap.is_empty() && gap.chars().all(|c| c == ' ' || c == '\t')
}

impl HeuristicPersonRecognizer {
    /// Length of the run of joined name words starting at `from`.
    fn run_length(&self, line: &str, tokens: &[Token<'_>], from: usize) -> usize {
        let mut len = 0;
        while from + len < tokens.len() && is_name_word(tokens[from + len].text) {
            if len > 0 && !joined(line, &tokens[from + len - 1], &tokens[from + len]) {
                break;
            }
            len += 1;
        }
        len
    }

    fn scan_line(&self, line: &str, offset: usize, found: &mut Vec<ExtractionMatch<String>>) {
        let tokens: Vec<Token<'_>> = WORD
            .find_iter(line)
            .map(|m| Token {
                text: m.as_str(),
                start: m.start(),
                end: m.end(),
            })
            .collect();

        let mut i = 0;
        while i < tokens.len() {
            if is_title(tokens[i].text)
                && i + 1 < tokens.len()
                && joined_after_title(line, &tokens[i], &tokens[i + 1])
            {
                let len = self.run_length(line, &tokens, i + 1);
                if len >= 1 {
                    let take = len.min(self.max_words);
                    let (start, end) = (tokens[i + 1].start, tokens[i + take].end);
                    found.push(ExtractionMatch::new(
                        line[start..end].to_string(),
                        offset + start,
                        offset + end,
                    ));
                    i += 1 + len;
                    continue;
                }
            }

            let len = self.run_length(line, &tokens, i);
            if len >= self.min_words && len <= self.max_words {
                let (start, end) = (tokens[i].start, tokens[i + len - 1].end);
                found.push(ExtractionMatch::new(
                    line[start..end].to_string(),
                    offset + start,
                    offset + end,
                ));
            }
            i += len.max(1);
        }
    }
}

impl EntityRecognizer for HeuristicPersonRecognizer {
    fn recognize_persons(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        let mut found = Vec::new();
        let mut offset = 0;
        for line in text.split('\n') {
            self.scan_line(line, offset, &mut found);
            offset += line.len() + 1;
        }
        found
    }
}

/// Name field extractor backed by an entity recognizer.
pub struct NameExtractor<R = HeuristicPersonRecognizer> {
    recognizer: R,
}

impl NameExtractor {
    /// Create a name extractor using the heuristic recognizer.
    pub fn new() -> Self {
        Self {
            recognizer: HeuristicPersonRecognizer::new(),
        }
    }
}

impl<R: EntityRecognizer> NameExtractor<R> {
    /// Create a name extractor with a custom recognizer.
    pub fn with_recognizer(recognizer: R) -> Self {
        Self { recognizer }
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntityRecognizer> FieldExtractor for NameExtractor<R> {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.recognizer.recognize_persons(text)
    }
}

/// Extract the first person name from text, or `"Name Not Found"`.
pub fn extract_name(text: &str) -> String {
    NameExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_else(|| NAME_NOT_FOUND.to_string())
}
