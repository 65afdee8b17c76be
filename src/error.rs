//! Error types for the wordbreak parser.
//!
//! All fallible operations return [`ParserError`] through the crate-wide
//! [`Result`] alias. Engine initialization failures are fatal for the parse
//! that triggered them; there is no resumption.
//!
//! # Examples
//!
//! ```
//! use wordbreak_parser::error::{ParserError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(ParserError::invalid_argument("length exceeds buffer"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::fmt;
use std::io;

use thiserror::Error;

/// Diagnostic code reported by a break engine that could not be opened.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EngineErrorCode {
    /// The locale identifier is malformed.
    IllegalArgument,
    /// The text buffer is longer than the engine can address.
    BufferOverflow,
    /// The text buffer is not well-formed UTF-16.
    InvalidText,
    /// The engine has no rules for the requested locale.
    MissingResource,
}

impl EngineErrorCode {
    /// Stable short name of the code.
    pub fn name(&self) -> &'static str {
        match self {
            EngineErrorCode::IllegalArgument => "illegal-argument",
            EngineErrorCode::BufferOverflow => "buffer-overflow",
            EngineErrorCode::InvalidText => "invalid-text",
            EngineErrorCode::MissingResource => "missing-resource",
        }
    }
}

impl fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The main error type for parser operations.
#[derive(Error, Debug)]
pub enum ParserError {
    /// The boundary engine could not be created for the resolved locale.
    #[error("could not create word break iterator for locale {locale}: {code}")]
    EngineInit {
        /// The resolved locale name.
        locale: String,
        /// The engine's diagnostic code.
        code: EngineErrorCode,
    },

    /// The requested feature is intentionally unimplemented.
    #[error("Feature not supported: {0}")]
    FeatureNotSupported(String),

    /// Conversion between the host encoding and UTF-16 failed.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Configuration errors (unknown settings, unreadable files)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Caller supplied an argument outside the accepted range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors (file operations, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with ParserError.
pub type Result<T> = std::result::Result<T, ParserError>;

impl ParserError {
    /// Create a new engine initialization error.
    pub fn engine_init<S: Into<String>>(locale: S, code: EngineErrorCode) -> Self {
        ParserError::EngineInit {
            locale: locale.into(),
            code,
        }
    }

    /// Create a new unsupported-feature error.
    pub fn not_supported<S: Into<String>>(msg: S) -> Self {
        ParserError::FeatureNotSupported(msg.into())
    }

    /// Create a new encoding error.
    pub fn encoding<S: Into<String>>(msg: S) -> Self {
        ParserError::Encoding(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        ParserError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        ParserError::InvalidArgument(msg.into())
    }
}
