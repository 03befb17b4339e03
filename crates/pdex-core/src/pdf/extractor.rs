//! PDF text extraction using lopdf and pdf-extract.

use std::any::Any;
use std::panic;

use lopdf::{Document, Object};
use tracing::{debug, trace, warn};

use super::{PdfProcessor, PdfType, Result};
use crate::error::PdfError;

/// PDF content extractor using lopdf.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
    /// Try the empty user password on encrypted documents.
    decrypt_empty_password: bool,
    /// Minimum text length to consider PDF as text-based.
    min_text_length: usize,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
            decrypt_empty_password: true,
            min_text_length: 50,
        }
    }

    /// Set whether encrypted documents are retried with an empty password.
    pub fn with_empty_password_decrypt(mut self, decrypt: bool) -> Self {
        self.decrypt_empty_password = decrypt;
        self
    }

    /// Set the text length above which a document counts as text-based.
    pub fn with_min_text_length(mut self, len: usize) -> Self {
        self.min_text_length = len;
        self
    }

    fn is_image_object(obj: &Object) -> bool {
        match obj {
            Object::Stream(stream) => stream
                .dict
                .get(b"Subtype")
                .and_then(|o| o.as_name())
                .map(|name| name == b"Image")
                .unwrap_or(false),
            _ => false,
        }
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfProcessor for PdfExtractor {
    fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        if doc.is_encrypted() {
            if !self.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(PdfError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            // pdf-extract reads the raw bytes, so hand it the decrypted copy
            let mut decrypted_data = Vec::new();
            doc.save_to(&mut decrypted_data)
                .map_err(|e| PdfError::Parse(format!("Failed to save decrypted PDF: {}", e)))?;
            self.raw_data = decrypted_data;
        } else {
            self.raw_data = data.to_vec();
        }

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(PdfError::NoPages);
        }

        debug!("Loaded PDF with {} pages", page_count);
        self.document = Some(doc);
        Ok(())
    }

    fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    fn image_count(&self) -> usize {
        let Some(doc) = self.document.as_ref() else {
            return 0;
        };

        let count = doc
            .objects
            .values()
            .filter(|obj| Self::is_image_object(obj))
            .count();

        trace!("Found {} image objects", count);
        count
    }

    fn analyze(&self) -> PdfType {
        let text = self.extract_text().unwrap_or_default();
        let has_text = text.trim().len() > self.min_text_length;
        let has_images = self.image_count() > 0;

        let pdf_type = match (has_text, has_images) {
            (true, false) => PdfType::Text,
            (false, true) => PdfType::Image,
            (true, true) => PdfType::Hybrid,
            (false, false) => PdfType::Empty,
        };

        debug!("PDF analysis: has_text={}, has_images={} -> {:?}", has_text, has_images, pdf_type);
        pdf_type
    }

    fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        // pdf-extract panics on some structurally broken documents that lopdf accepts
        let data = self.raw_data.as_slice();
        let text = panic::catch_unwind(|| pdf_extract::extract_text_from_mem(data))
            .map_err(|payload| {
                let reason = panic_reason(payload.as_ref());
                warn!("Text extraction aborted: {}", reason);
                PdfError::TextExtraction(reason)
            })?
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        Ok(text)
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        format!("malformed document ({})", message)
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("malformed document ({})", message)
    } else {
        "malformed document".to_string()
    }
}
