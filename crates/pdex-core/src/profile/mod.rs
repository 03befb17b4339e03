//! Contact field extraction module.

mod parser;
pub mod rules;

pub use parser::{DocumentExtractor, HeuristicProfileParser, ProfileParser};

use crate::error::ExtractionError;
use crate::models::profile::ExtractionResult;

/// Extract the contact record from raw PDF bytes with default settings.
///
/// Decoding failures and text-less documents are errors; fields that are
/// simply absent come back as their placeholder strings.
pub fn extract(data: &[u8]) -> Result<ExtractionResult, ExtractionError> {
    DocumentExtractor::new().extract(data)
}

/// Run the field extractors over already decoded text.
pub fn extract_from_text(text: &str) -> ExtractionResult {
    HeuristicProfileParser::new().parse(text)
}
