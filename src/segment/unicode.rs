//! Break engine backed by the Unicode word boundary rules (UAX #29).
//!
//! Boundaries are computed once when the engine is opened; the engine then
//! replays them one at a time. Adjacent Kana segments and adjacent ideographic
//! segments are joined into runs, since UAX #29 leaves every Hiragana and Han
//! character on its own.
//!
//! # Examples
//!
//! ```
//! use wordbreak_parser::segment::engine::{BreakEngine, BreakEngineFactory};
//! use wordbreak_parser::segment::locale::Locale;
//! use wordbreak_parser::segment::unicode::UnicodeWordEngineFactory;
//!
//! let text: Vec<u16> = "hi there".encode_utf16().collect();
//! let mut engine = UnicodeWordEngineFactory::new()
//!     .open(&text, &Locale::default())
//!     .unwrap();
//!
//! assert_eq!(engine.first(), 0);
//! assert_eq!(engine.next(), Some(2));
//! assert_eq!(engine.next(), Some(3));
//! assert_eq!(engine.next(), Some(8));
//! assert_eq!(engine.next(), None);
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::error::{EngineErrorCode, ParserError, Result};
use crate::segment::engine::{
    BreakEngine, BreakEngineFactory, RULE_STATUS_IDEO, RULE_STATUS_KANA, RULE_STATUS_LETTER,
    RULE_STATUS_NONE, RULE_STATUS_NUMBER,
};
use crate::segment::locale::Locale;

/// Factory for [`UnicodeWordEngine`].
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordEngineFactory;

impl UnicodeWordEngineFactory {
    /// Create a new factory.
    pub fn new() -> Self {
        UnicodeWordEngineFactory
    }
}

impl BreakEngineFactory for UnicodeWordEngineFactory {
    type Engine = UnicodeWordEngine;

    fn open(&self, text: &[u16], locale: &Locale) -> Result<UnicodeWordEngine> {
        UnicodeWordEngine::new(text, locale)
    }
}

/// Replays precomputed UAX #29 word boundaries over a UTF-16 buffer.
#[derive(Clone, Debug)]
pub struct UnicodeWordEngine {
    /// End offset of every segment, in UTF-16 code units.
    boundaries: Vec<usize>,
    /// Rule status of every segment.
    statuses: Vec<i32>,
    /// Number of boundaries returned since the last `first()`.
    position: usize,
}

impl UnicodeWordEngine {
    /// Compute the boundaries of `text`.
    pub fn new(text: &[u16], locale: &Locale) -> Result<Self> {
        if text.len() > i32::MAX as usize {
            return Err(ParserError::engine_init(
                locale.name(),
                EngineErrorCode::BufferOverflow,
            ));
        }

        let decoded = String::from_utf16(text)
            .map_err(|_| ParserError::engine_init(locale.name(), EngineErrorCode::InvalidText))?;

        let mut boundaries: Vec<usize> = Vec::new();
        let mut statuses: Vec<i32> = Vec::new();
        let mut offset = 0;

        for segment in decoded.split_word_bounds() {
            offset += segment.encode_utf16().count();
            let status = segment_status(segment);

            // Join runs of the same script class.
            let joins_previous = (RULE_STATUS_KANA.contains(&status)
                || RULE_STATUS_IDEO.contains(&status))
                && statuses.last() == Some(&status);

            if joins_previous {
                if let Some(last) = boundaries.last_mut() {
                    *last = offset;
                }
            } else {
                boundaries.push(offset);
                statuses.push(status);
            }
        }

        Ok(UnicodeWordEngine {
            boundaries,
            statuses,
            position: 0,
        })
    }
}

impl BreakEngine for UnicodeWordEngine {
    fn first(&mut self) -> usize {
        self.position = 0;
        0
    }

    fn next(&mut self) -> Option<usize> {
        let boundary = self.boundaries.get(self.position).copied()?;
        self.position += 1;
        Some(boundary)
    }

    fn rule_status(&self) -> i32 {
        match self.position {
            0 => RULE_STATUS_NONE.start,
            n => self.statuses[n - 1],
        }
    }
}

/// Assign a rule status to one UAX #29 segment.
fn segment_status(segment: &str) -> i32 {
    if segment.chars().any(is_ideographic) {
        return RULE_STATUS_IDEO.start;
    }

    // Extend marks attach to the preceding kana (WB4).
    if segment.chars().any(is_kana)
        && segment
            .chars()
            .all(|c| is_kana(c) || is_combining_mark(c))
    {
        return RULE_STATUS_KANA.start;
    }

    if segment.chars().any(char::is_alphabetic) {
        return RULE_STATUS_LETTER.start;
    }

    if segment.chars().any(char::is_numeric) {
        return RULE_STATUS_NUMBER.start;
    }

    RULE_STATUS_NONE.start
}

fn is_ideographic(c: char) -> bool {
    matches!(c,
        '\u{3005}'..='\u{3007}' |   // Iteration mark, closing mark, number zero
        '\u{3400}'..='\u{4DBF}' |   // CJK Extension A
        '\u{4E00}'..='\u{9FFF}' |   // CJK Unified Ideographs
        '\u{F900}'..='\u{FAFF}' |   // CJK Compatibility Ideographs
        '\u{20000}'..='\u{2A6DF}' | // CJK Extension B
        '\u{2A700}'..='\u{2B73F}' | // CJK Extension C
        '\u{2B740}'..='\u{2B81F}' | // CJK Extension D
        '\u{2B820}'..='\u{2CEAF}' | // CJK Extension E
        '\u{2CEB0}'..='\u{2EBEF}' | // CJK Extension F
        '\u{2EBF0}'..='\u{2EE5F}' | // CJK Extension I
        '\u{2F800}'..='\u{2FA1F}' | // CJK Compatibility Ideographs Supplement
        '\u{30000}'..='\u{3134F}' | // CJK Extension G
        '\u{31350}'..='\u{323AF}'   // CJK Extension H
    )
}

fn is_kana(c: char) -> bool {
    matches!(c,
        '\u{3040}'..='\u{309F}' | // Hiragana
        '\u{30A0}'..='\u{30FF}' | // Katakana
        '\u{31F0}'..='\u{31FF}' | // Katakana Phonetic Extensions
        '\u{FF66}'..='\u{FF9F}'   // Halfwidth Katakana
    )
}

fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' | // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' | // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' | // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' | // Combining Marks for Symbols
        '\u{FE00}'..='\u{FE0F}' | // Variation Selectors
        '\u{FE20}'..='\u{FE2F}' | // Combining Half Marks
        '\u{E0100}'..='\u{E01EF}'  // Variation Selectors Supplement
    )
}
