//! Boundary cursor with one segment of lookahead.
//!
//! The cursor keeps the engine positioned at the *end* of the segment that
//! will be returned next. That is what lets the caller read the segment's
//! rule status before the engine moves past it.

use std::ops::Range;

use crate::error::Result;
use crate::segment::engine::{BreakEngine, BreakEngineFactory};
use crate::segment::locale::Locale;

/// Current/next boundary pair over one buffer.
#[derive(Debug)]
pub struct BoundaryCursor<E: BreakEngine> {
    engine: E,
    locale: Locale,
    segment_start: usize,
    /// `None` is the end-of-stream sentinel.
    segment_end: Option<usize>,
}

impl<E: BreakEngine> BoundaryCursor<E> {
    /// Open an engine over `text` and buffer the first segment.
    pub fn open<F>(factory: &F, text: &[u16], locale: Locale) -> Result<Self>
    where
        F: BreakEngineFactory<Engine = E>,
    {
        let engine = factory.open(text, &locale)?;
        Ok(Self::from_engine(engine, locale))
    }

    /// Wrap an already opened engine.
    pub fn from_engine(mut engine: E, locale: Locale) -> Self {
        let segment_start = engine.first();
        let segment_end = engine.next();
        BoundaryCursor {
            engine,
            locale,
            segment_start,
            segment_end,
        }
    }

    /// The span of the buffered segment, or `None` once exhausted.
    pub fn span(&self) -> Option<Range<usize>> {
        self.segment_end.map(|end| self.segment_start..end)
    }

    /// Rule status of the buffered segment.
    pub fn rule_status(&self) -> i32 {
        self.engine.rule_status()
    }

    /// Move to the following segment.
    ///
    /// Once exhausted the cursor stays exhausted and the engine is no longer
    /// consulted.
    pub fn advance(&mut self) {
        if let Some(end) = self.segment_end {
            self.segment_start = end;
            self.segment_end = self.engine.next();
        }
    }

    /// Whether the end-of-stream sentinel has been reached.
    pub fn is_exhausted(&self) -> bool {
        self.segment_end.is_none()
    }

    /// The locale the engine was opened for.
    pub fn locale(&self) -> &Locale {
        &self.locale
    }
}
