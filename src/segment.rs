//! Word boundary engines.
//!
//! The parser treats boundary detection as an external service behind the
//! [`engine::BreakEngine`] trait. [`unicode::UnicodeWordEngine`] is the
//! default implementation.

pub mod engine;
pub mod locale;
pub mod unicode;
