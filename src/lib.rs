//! # wordbreak-parser
//!
//! A locale-aware word-boundary parser for text search pipelines.
//!
//! ## Features
//!
//! - Pull-style token iteration with one segment of lookahead
//! - Five token categories: word, number, blank, kana, ideographic
//! - Unicode word boundaries (UAX #29) behind a pluggable engine trait
//! - Host encodings in and out, UTF-16 inside
//! - Process-wide locale setting read once per parse

pub mod cli;
pub mod config;
pub mod encoding;
pub mod error;
pub mod host;
pub mod parser;
pub mod segment;

pub mod prelude {
    pub use crate::config::ParserConfig;
    pub use crate::error::{ParserError, Result};
    pub use crate::host::{TextSearchParser, WordBreakParser};
    pub use crate::parser::category::{Category, classify};
    pub use crate::parser::session::{LexToken, OwnedToken, Session, SessionState};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
