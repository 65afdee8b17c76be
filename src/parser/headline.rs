//! Headline (snippet) generation, which this parser does not provide.

use serde::{Deserialize, Serialize};

use crate::error::{ParserError, Result};

/// Message carried by every headline error.
pub const HEADLINE_NOT_SUPPORTED: &str = "word break parser does not support headline creation";

/// A headline request as a host would pass it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadlineRequest {
    /// Query text the headline should highlight.
    pub query: String,
    /// Host-specific options such as `MaxWords=10`.
    pub options: Vec<(String, String)>,
}

/// Always fails with [`ParserError::FeatureNotSupported`].
pub fn headline(_request: &HeadlineRequest) -> Result<()> {
    Err(ParserError::not_supported(HEADLINE_NOT_SUPPORTED))
}
