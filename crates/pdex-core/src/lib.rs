//! Core library for extracting contact details from PDF documents.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Heuristic field extractors for name, address, phone, email and job role
//! - The fixed five-field record returned for every document

pub mod error;
pub mod models;
pub mod pdf;
pub mod profile;

pub use error::{ExtractionError, PdexError, PdfError, Result};
pub use models::config::PdexConfig;
pub use models::profile::ExtractionResult;
pub use pdf::{PdfExtractor, PdfProcessor, PdfType};
pub use profile::{extract, extract_from_text, DocumentExtractor, HeuristicProfileParser, ProfileParser};
