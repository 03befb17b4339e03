//! Configuration structures for the extraction service.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::PdexError;

/// Main configuration for pdex.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PdexConfig {
    /// HTTP server configuration.
    pub server: ServerConfig,

    /// PDF processing configuration.
    pub pdf: PdfConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind.
    pub host: String,

    /// Port to bind.
    pub port: u16,

    /// Maximum accepted JSON payload size in bytes.
    pub max_payload_bytes: usize,

    /// Origins allowed by CORS (empty = any origin).
    pub allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            max_payload_bytes: 10 * 1024 * 1024,
            allowed_origins: vec!["http://localhost:5173".to_string()],
        }
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Retry encrypted documents with an empty user password.
    pub decrypt_empty_password: bool,

    /// Minimum text length to consider PDF as text-based.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
            min_text_length: 50,
        }
    }
}

impl PdexConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> crate::Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| PdexError::Config(format!("invalid config file {}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| PdexError::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply `PORT` and `PDEX_HOST` environment overrides.
    pub fn apply_env(&mut self) -> crate::Result<()> {
        self.apply_overrides(
            std::env::var("PDEX_HOST").ok(),
            std::env::var("PORT").ok(),
        )
    }

    fn apply_overrides(&mut self, host: Option<String>, port: Option<String>) -> crate::Result<()> {
        if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port
                .trim()
                .parse()
                .map_err(|_| PdexError::Config(format!("invalid PORT value: {}", port)))?;
        }
        Ok(())
    }
}
