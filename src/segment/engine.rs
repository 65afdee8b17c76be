//! The break engine seam.
//!
//! A break engine walks word boundaries over a UTF-16 buffer, one boundary per
//! call, and reports a rule-status code for the segment that ends at the
//! boundary it most recently returned.

use std::ops::Range;

use crate::error::Result;
use crate::segment::locale::Locale;

/// Status range for segments that are not words (spaces, punctuation, symbols).
pub const RULE_STATUS_NONE: Range<i32> = 0..100;
/// Status range for numeric segments.
pub const RULE_STATUS_NUMBER: Range<i32> = 100..200;
/// Status range for letter words.
pub const RULE_STATUS_LETTER: Range<i32> = 200..300;
/// Status range for Kana runs.
pub const RULE_STATUS_KANA: Range<i32> = 300..400;
/// Status range for ideographic runs.
pub const RULE_STATUS_IDEO: Range<i32> = 400..500;

/// A forward-only boundary iterator bound to one buffer.
pub trait BreakEngine {
    /// Rewind to the start of the buffer and return that boundary (always 0).
    fn first(&mut self) -> usize;

    /// Move to the next boundary, or return `None` once the buffer is exhausted.
    fn next(&mut self) -> Option<usize>;

    /// Status of the segment that ends at the current boundary.
    ///
    /// Right after [`first`](BreakEngine::first) there is no such segment and
    /// the status is `RULE_STATUS_NONE.start`.
    fn rule_status(&self) -> i32;
}

/// Opens break engines for a buffer and a locale.
pub trait BreakEngineFactory {
    /// The engine type this factory produces.
    type Engine: BreakEngine;

    /// Open an engine over `text`.
    ///
    /// Fails with [`ParserError::EngineInit`](crate::error::ParserError::EngineInit)
    /// when the engine cannot be set up for `locale` or `text`.
    fn open(&self, text: &[u16], locale: &Locale) -> Result<Self::Engine>;
}

impl<E: BreakEngine + ?Sized> BreakEngine for Box<E> {
    fn first(&mut self) -> usize {
        (**self).first()
    }

    fn next(&mut self) -> Option<usize> {
        (**self).next()
    }

    fn rule_status(&self) -> i32 {
        (**self).rule_status()
    }
}
