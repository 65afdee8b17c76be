//! Parser configuration.
//!
//! [`ParserConfig`] is the value a session is started with. The process-wide
//! copy lives in [`settings`] and is read once per session start.

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub mod settings;

/// Environment variable overriding the locale.
pub const LOCALE_ENV: &str = "WORDBREAK_LOCALE";
/// Environment variable overriding the host encoding.
pub const ENCODING_ENV: &str = "WORDBREAK_ENCODING";

/// Configuration for one tokenization pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Locale name used in boundary analysis. Empty means the default locale.
    pub locale: String,
    /// Label of the host text encoding.
    pub encoding: String,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            locale: String::new(),
            encoding: "UTF-8".to_string(),
        }
    }
}

impl ParserConfig {
    /// Set the locale.
    pub fn with_locale<S: Into<String>>(mut self, locale: S) -> Self {
        self.locale = locale.into();
        self
    }

    /// Set the host encoding label.
    pub fn with_encoding<S: Into<String>>(mut self, encoding: S) -> Self {
        self.encoding = encoding.into();
        self
    }

    /// Load a JSON configuration file. Missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Default configuration overridden by `WORDBREAK_LOCALE` and
    /// `WORDBREAK_ENCODING` when they are set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(locale) = env::var(LOCALE_ENV) {
            config.locale = locale;
        }
        if let Ok(encoding) = env::var(ENCODING_ENV) {
            config.encoding = encoding;
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;
    use crate::error::ParserError;

    #[test]
    fn test_parser_config_default() {
        let config = ParserConfig::default();
        assert_eq!(config.locale, "");
        assert_eq!(config.encoding, "UTF-8");
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"locale": "ja_JP"}}"#).unwrap();

        let config = ParserConfig::from_file(file.path()).unwrap();
        assert_eq!(config, ParserConfig::default().with_locale("ja_JP"));
    }

    #[test]
    fn test_from_file_errors() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(
            ParserConfig::from_file(file.path()),
            Err(ParserError::Json(_))
        ));

        assert!(matches!(
            ParserConfig::from_file("/nonexistent/wordbreak.json"),
            Err(ParserError::Io(_))
        ));
    }
}
