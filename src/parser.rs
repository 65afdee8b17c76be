//! The token-producing state machine.
//!
//! - [`category`] - rule status to token category mapping
//! - [`cursor`] - boundary cursor with one segment of lookahead
//! - [`materializer`] - single-slot token storage in host encoding
//! - [`session`] - the start / next token / end lifecycle
//! - [`lextype`] - vocabulary metadata
//! - [`headline`] - unsupported headline entry point

pub mod category;
pub mod cursor;
pub mod headline;
pub mod lextype;
pub mod materializer;
pub mod session;
