//! Error types for the pdex-core library.

use thiserror::Error;

/// Main error type for the pdex library.
#[derive(Error, Debug)]
pub enum PdexError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,
}

/// Errors that abort a whole extraction.
///
/// Fields that cannot be found are not errors; they carry their sentinel
/// value in an otherwise successful [`ExtractionResult`](crate::ExtractionResult).
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The input bytes could not be decoded as a PDF.
    #[error("could not decode document: {0}")]
    Decode(#[from] PdfError),

    /// The PDF decoded fine but carries no text layer.
    #[error("no text extracted from the document")]
    EmptyText,
}

impl ExtractionError {
    /// Whether the input was rejected as an unreadable PDF.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }

    /// Whether the PDF was readable but yielded no text.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, Self::EmptyText)
    }
}

/// Result type for the pdex library.
pub type Result<T> = std::result::Result<T, PdexError>;
