//! Assembles the contact record from document text.

use std::time::Instant;

use tracing::{debug, info, warn};

use super::rules::{
    extract_address, extract_email, extract_phone, extract_role, EntityRecognizer,
    FieldExtractor, HeuristicPersonRecognizer, NameExtractor,
};
use crate::error::ExtractionError;
use crate::models::config::PdfConfig;
use crate::models::profile::{ExtractionResult, NAME_NOT_FOUND};
use crate::pdf::{PdfExtractor, PdfProcessor, PdfType};

/// Trait for turning document text into a contact record.
pub trait ProfileParser {
    /// Parse a record from text. Never fails: missing fields get placeholders.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// Rule-based parser running every field extractor over the same text.
pub struct HeuristicProfileParser<R = HeuristicPersonRecognizer> {
    names: NameExtractor<R>,
}

impl HeuristicProfileParser {
    /// Create a parser with the default person recognizer.
    pub fn new() -> Self {
        Self {
            names: NameExtractor::new(),
        }
    }
}

impl<R: EntityRecognizer> HeuristicProfileParser<R> {
    /// Create a parser with a custom person recognizer.
    pub fn with_recognizer(recognizer: R) -> Self {
        Self {
            names: NameExtractor::with_recognizer(recognizer),
        }
    }
}

impl Default for HeuristicProfileParser {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: EntityRecognizer> ProfileParser for HeuristicProfileParser<R> {
    fn parse(&self, text: &str) -> ExtractionResult {
        let start = Instant::now();

        let name = self
            .names
            .extract(text)
            .map(|m| m.value)
            .unwrap_or_else(|| NAME_NOT_FOUND.to_string());

        let result = ExtractionResult {
            name,
            address: extract_address(text),
            phone: extract_phone(text),
            email: extract_email(text),
            role: extract_role(text),
        };

        debug!(
            "Parsed {} characters in {:?}, missing fields: {:?}",
            text.len(),
            start.elapsed(),
            result.missing_fields()
        );
        result
    }
}

/// End-to-end extraction: PDF bytes in, contact record out.
pub struct DocumentExtractor<P = HeuristicProfileParser> {
    pdf: PdfConfig,
    parser: P,
}

impl DocumentExtractor {
    /// Create an extractor with default PDF settings and the heuristic parser.
    pub fn new() -> Self {
        Self {
            pdf: PdfConfig::default(),
            parser: HeuristicProfileParser::new(),
        }
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: ProfileParser> DocumentExtractor<P> {
    /// Create an extractor with a custom parser.
    pub fn with_parser(parser: P) -> Self {
        Self {
            pdf: PdfConfig::default(),
            parser,
        }
    }

    /// Set PDF processing options.
    pub fn with_pdf_config(mut self, pdf: PdfConfig) -> Self {
        self.pdf = pdf;
        self
    }

    /// Decode the document and return its trimmed text.
    ///
    /// Fails with [`ExtractionError::Decode`] for unreadable input and
    /// [`ExtractionError::EmptyText`] when the PDF has no text layer.
    pub fn extract_text(&self, data: &[u8]) -> Result<String, ExtractionError> {
        let mut pdf = PdfExtractor::new()
            .with_empty_password_decrypt(self.pdf.decrypt_empty_password)
            .with_min_text_length(self.pdf.min_text_length);

        pdf.load(data)?;
        let text = pdf.extract_text()?;
        let text = text.trim();

        if text.is_empty() {
            match pdf.analyze() {
                PdfType::Image => warn!(
                    "PDF has {} images but no text layer; OCR is not supported",
                    pdf.image_count()
                ),
                pdf_type => warn!("No text extracted from {:?} PDF", pdf_type),
            }
            return Err(ExtractionError::EmptyText);
        }

        debug!("Extracted {} characters from {} pages", text.len(), pdf.page_count());
        Ok(text.to_string())
    }

    /// Extract the contact record from PDF bytes.
    pub fn extract(&self, data: &[u8]) -> Result<ExtractionResult, ExtractionError> {
        let text = self.extract_text(data)?;
        let result = self.parser.parse(&text);
        info!("Extracted data: {:?}", result);
        Ok(result)
    }
}
