//! Request handlers.

use actix_web::{web, HttpResponse};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Deserialize;
use tracing::{error, info, warn};

use pdex_core::{DocumentExtractor, ExtractionError};

/// Body of `POST /extract`.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    /// Base64-encoded PDF, optionally as a `data:` URL.
    #[serde(default)]
    pub file: Option<String>,
}

pub fn error_body(message: impl Into<String>) -> serde_json::Value {
    serde_json::json!({ "error": message.into() })
}

/// Decode the uploaded file, accepting a bare base64 string or a data URL.
fn decode_payload(encoded: &str) -> Result<Vec<u8>, base64::DecodeError> {
    let encoded = match encoded.split_once(',') {
        Some((prefix, data)) if prefix.starts_with("data:") => data,
        _ => encoded,
    };
    let cleaned: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    BASE64.decode(cleaned)
}

pub async fn extract(
    extractor: web::Data<DocumentExtractor>,
    request: web::Json<ExtractRequest>,
) -> HttpResponse {
    let Some(encoded) = request.into_inner().file.filter(|f| !f.trim().is_empty()) else {
        return HttpResponse::BadRequest().json(error_body("No file uploaded"));
    };

    let data = match decode_payload(&encoded) {
        Ok(data) => data,
        Err(e) => {
            warn!("Rejected upload with invalid base64: {}", e);
            return HttpResponse::BadRequest().json(error_body("Invalid file encoding"));
        }
    };

    info!("Received {} byte upload", data.len());

    match web::block(move || extractor.extract(&data)).await {
        Ok(Ok(result)) => HttpResponse::Ok().json(result),
        Ok(Err(ExtractionError::EmptyText)) => {
            warn!("No text extracted from upload");
            HttpResponse::BadRequest().json(error_body("No text extracted from the file"))
        }
        Ok(Err(e)) => {
            error!("Error during extraction: {}", e);
            HttpResponse::InternalServerError()
                .json(error_body(format!("Error during extraction: {}", e)))
        }
        Err(e) => {
            error!("Extraction task failed: {}", e);
            HttpResponse::InternalServerError()
                .json(error_body(format!("Error during extraction: {}", e)))
        }
    }
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "healthy" }))
}
