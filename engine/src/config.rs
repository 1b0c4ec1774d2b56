//! Engine configuration with TOML file support.

use docverify_utils::LogFormat;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::EngineError;

/// Configuration for the compliance engine.
///
/// Can be loaded from a TOML file via [`EngineConfig::from_toml_file`] or
/// built programmatically (e.g. for tests).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Whether document verification requests are accepted.
    #[serde(default = "default_true")]
    pub document_verification_enabled: bool,

    /// Nominal latency of the simulated OCR backend, in milliseconds.
    #[serde(default = "default_ocr_latency_ms")]
    pub ocr_latency_ms: u64,

    /// Log format: "human" or "json".
    #[serde(default)]
    pub log_format: LogFormat,

    /// Log level filter: "trace", "debug", "info", "warn", "error".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_ocr_latency_ms() -> u64 {
    100
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Impl ───────────────────────────────────────────────────────────────

impl EngineConfig {
    /// Load configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| EngineError::Config(format!("{}: {e}", path.as_ref().display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, EngineError> {
        toml::from_str(s).map_err(|e| EngineError::Config(e.to_string()))
    }

    /// Serialize the configuration to a TOML string.
    pub fn to_toml_string(&self) -> String {
        toml::to_string_pretty(self).expect("EngineConfig is always serializable to TOML")
    }

    pub fn ocr_latency(&self) -> Duration {
        Duration::from_millis(self.ocr_latency_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            document_verification_enabled: default_true(),
            ocr_latency_ms: default_ocr_latency_ms(),
            log_format: LogFormat::default(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = EngineConfig::default();
        let toml_str = config.to_toml_string();
        let parsed = EngineConfig::from_toml_str(&toml_str).expect("should parse");
        assert_eq!(parsed, config);
    }

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = EngineConfig::from_toml_str("").expect("empty toml should use defaults");
        assert!(config.document_verification_enabled);
        assert_eq!(config.ocr_latency_ms, 100);
        assert_eq!(config.log_format, LogFormat::Human);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn partial_toml_overrides() {
        let toml = r#"
            document_verification_enabled = false
            log_format = "json"
        "#;
        let config = EngineConfig::from_toml_str(toml).expect("should parse");
        assert!(!config.document_verification_enabled);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.ocr_latency_ms, 100); // default
    }

    #[test]
    fn unknown_log_format_is_a_config_error() {
        let err = EngineConfig::from_toml_str(r#"log_format = "xml""#).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "ocr_latency_ms = 5").expect("write");
        let config = EngineConfig::from_toml_file(file.path()).expect("load");
        assert_eq!(config.ocr_latency(), Duration::from_millis(5));
    }

    #[test]
    fn missing_file_returns_config_error() {
        let result = EngineConfig::from_toml_file("/nonexistent/docverify.toml");
        assert!(matches!(result, Err(EngineError::Config(_))));
    }
}
