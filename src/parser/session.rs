//! The parser session: one tokenization pass over one input.
//!
//! A session is created by [`Session::start`], drained by repeated
//! [`Session::next_token`] calls and released by [`Session::end`] (or by
//! dropping it).
//!
//! # Examples
//!
//! ```
//! use wordbreak_parser::config::ParserConfig;
//! use wordbreak_parser::parser::category::Category;
//! use wordbreak_parser::parser::session::Session;
//!
//! let mut session = Session::start(b"hello world 123", &ParserConfig::default()).unwrap();
//!
//! let mut categories = Vec::new();
//! while let Some(token) = session.next_token().unwrap() {
//!     categories.push(token.category());
//! }
//! session.end();
//!
//! assert_eq!(
//!     categories,
//!     vec![
//!         Category::Word,
//!         Category::Blank,
//!         Category::Word,
//!         Category::Blank,
//!         Category::Number,
//!     ]
//! );
//! ```

use std::ops::Range;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::config::ParserConfig;
use crate::encoding::{HostCodec, HostText};
use crate::error::Result;
use crate::parser::category::{Category, classify};
use crate::parser::cursor::BoundaryCursor;
use crate::parser::materializer::TokenSlot;
use crate::segment::engine::{BreakEngine, BreakEngineFactory};
use crate::segment::locale::Locale;
use crate::segment::unicode::{UnicodeWordEngine, UnicodeWordEngineFactory};

/// Lifecycle state of a [`Session`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Started, first segment buffered, nothing returned yet.
    Ready,
    /// At least one token returned and more remain.
    Iterating,
    /// End of stream reached. Terminal for iteration.
    Exhausted,
    /// Resources released by [`Session::end`].
    Ended,
}

/// A token borrowed from the session's slot.
///
/// The borrow keeps the session locked until the token is dropped, so only
/// one materialized token is ever observable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LexToken<'a> {
    text: &'a [u8],
    category: Category,
    span: Range<usize>,
}

impl<'a> LexToken<'a> {
    /// Token text in host encoding.
    pub fn text(&self) -> &'a [u8] {
        self.text
    }

    /// Token text as UTF-8, when the host encoding produced valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        std::str::from_utf8(self.text).ok()
    }

    /// Byte length of the token in host encoding.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Category of the token.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Span in UTF-16 code units of the session buffer.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Copy the token out of the session.
    pub fn to_owned_token(&self) -> OwnedToken {
        OwnedToken {
            text: self.text.to_vec(),
            category: self.category,
            start: self.span.start,
            end: self.span.end,
        }
    }
}

/// A token detached from its session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedToken {
    /// Token text in host encoding.
    pub text: Vec<u8>,
    /// Category of the token.
    pub category: Category,
    /// Start offset in UTF-16 code units.
    pub start: usize,
    /// End offset in UTF-16 code units.
    pub end: usize,
}

/// What a session still holds. Used to check that `end` released everything.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionResources {
    /// A materialized token is held.
    pub token_held: bool,
    /// The boundary cursor (and its engine) is alive.
    pub cursor_held: bool,
    /// Elements still allocated for the decoded input.
    pub buffer_units: usize,
}

impl SessionResources {
    /// Whether nothing is held.
    pub fn is_released(&self) -> bool {
        !self.token_held && !self.cursor_held && self.buffer_units == 0
    }
}

/// One tokenization pass.
#[derive(Debug)]
pub struct Session<E: BreakEngine = UnicodeWordEngine> {
    text: HostText,
    cursor: Option<BoundaryCursor<E>>,
    token: TokenSlot,
    state: SessionState,
}

impl Session<UnicodeWordEngine> {
    /// Start a session over host-encoded `text` with the UAX #29 engine.
    pub fn start(text: &[u8], config: &ParserConfig) -> Result<Self> {
        Session::start_with_engine(&UnicodeWordEngineFactory::new(), text, config)
    }
}

impl<E: BreakEngine> Session<E> {
    /// Start a session using engines from `factory`.
    ///
    /// Fails if the encoding label is unknown, `text` is malformed for it, the
    /// locale is invalid or the engine cannot be opened. Nothing outlives a
    /// failed start.
    pub fn start_with_engine<F>(factory: &F, text: &[u8], config: &ParserConfig) -> Result<Self>
    where
        F: BreakEngineFactory<Engine = E>,
    {
        let codec = HostCodec::for_label(&config.encoding)?;
        let locale = Locale::resolve(&config.locale)?;
        let text = codec.decode_indexed(text)?;
        let cursor = BoundaryCursor::open(factory, text.units(), locale)?;

        debug!(
            "opened word break cursor for locale {} over {} code units ({})",
            cursor.locale(),
            text.len(),
            codec.name()
        );

        let state = if cursor.is_exhausted() {
            SessionState::Exhausted
        } else {
            SessionState::Ready
        };

        Ok(Session {
            text,
            cursor: Some(cursor),
            token: TokenSlot::new(),
            state,
        })
    }

    /// Return the next token, or `None` at end of stream.
    ///
    /// Once `None` has been returned every later call returns `None` without
    /// side effects. The same holds after [`end`](Session::end).
    pub fn next_token(&mut self) -> Result<Option<LexToken<'_>>> {
        if matches!(self.state, SessionState::Exhausted | SessionState::Ended) {
            return Ok(None);
        }

        let Some(cursor) = self.cursor.as_mut() else {
            return Ok(None);
        };
        let Some(span) = cursor.span() else {
            self.state = SessionState::Exhausted;
            return Ok(None);
        };

        self.token.materialize(&self.text, span.clone())?;

        // The status belongs to the buffered segment; read it before advancing.
        let category = classify(cursor.rule_status());
        cursor.advance();

        self.state = if cursor.is_exhausted() {
            SessionState::Exhausted
        } else {
            SessionState::Iterating
        };

        trace!("token {}..{} {}", span.start, span.end, category);

        Ok(Some(LexToken {
            text: self.token.current().unwrap_or_default(),
            category,
            span,
        }))
    }

    /// Iterate over the remaining tokens as owned values.
    pub fn tokens(&mut self) -> Tokens<'_, E> {
        Tokens {
            session: self,
            failed: false,
        }
    }

    /// Release the current token, the cursor and the decoded input, in that order.
    ///
    /// Calling it again is a no-op.
    pub fn end(&mut self) {
        if self.state == SessionState::Ended {
            return;
        }

        self.token.release();
        self.cursor = None;
        self.text = HostText::default();
        self.state = SessionState::Ended;

        debug!("closed word break session");
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// The resolved locale, until the session ends.
    pub fn locale(&self) -> Option<&Locale> {
        self.cursor.as_ref().map(BoundaryCursor::locale)
    }

    /// Number of UTF-16 code units in the buffer.
    pub fn buffer_len(&self) -> usize {
        self.text.len()
    }

    /// Resources currently held.
    pub fn resources(&self) -> SessionResources {
        SessionResources {
            token_held: self.token.is_holding(),
            cursor_held: self.cursor.is_some(),
            buffer_units: self.text.capacity(),
        }
    }
}

impl<E: BreakEngine> Drop for Session<E> {
    fn drop(&mut self) {
        self.end();
    }
}

/// Owned-token iterator returned by [`Session::tokens`].
///
/// Stops after the first error.
pub struct Tokens<'s, E: BreakEngine> {
    session: &'s mut Session<E>,
    failed: bool,
}

impl<E: BreakEngine> Iterator for Tokens<'_, E> {
    type Item = Result<OwnedToken>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        match self.session.next_token() {
            Ok(token) => token.map(|token| Ok(token.to_owned_token())),
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<(String, Category)> {
        let mut session = Session::start(text.as_bytes(), &ParserConfig::default()).unwrap();
        let mut tokens = Vec::new();
        while let Some(token) = session.next_token().unwrap() {
            tokens.push((token.as_str().unwrap().to_string(), token.category()));
        }
        tokens
    }

    #[test]
    fn test_hello_world_sequence() {
        assert_eq!(
            collect("hello world 123"),
            vec![
                ("hello".to_string(), Category::Word),
                (" ".to_string(), Category::Blank),
                ("world".to_string(), Category::Word),
                (" ".to_string(), Category::Blank),
                ("123".to_string(), Category::Number),
            ]
        );
    }

    #[test]
    fn test_state_transitions() {
        let mut session = Session::start(b"a b", &ParserConfig::default()).unwrap();
        assert_eq!(session.state(), SessionState::Ready);

        session.next_token().unwrap();
        assert_eq!(session.state(), SessionState::Iterating);
        session.next_token().unwrap();
        let last = session.next_token().unwrap().map(|t| t.to_owned_token());
        assert_eq!(last.unwrap().text, b"a b"[2..].to_vec());
        assert_eq!(session.state(), SessionState::Exhausted);

        assert!(session.next_token().unwrap().is_none());
        session.end();
        assert_eq!(session.state(), SessionState::Ended);
        assert!(session.next_token().unwrap().is_none());
    }

    #[test]
    fn test_empty_input_is_exhausted() {
        let mut session = Session::start(b"", &ParserConfig::default()).unwrap();
        assert_eq!(session.state(), SessionState::Exhausted);
        assert!(session.next_token().unwrap().is_none());
        assert!(!session.resources().token_held);
    }

    #[test]
    fn test_end_releases_everything_once() {
        let mut session = Session::start(b"release me", &ParserConfig::default()).unwrap();
        session.next_token().unwrap();
        assert!(session.resources().token_held);
        assert!(session.resources().cursor_held);

        session.end();
        assert!(session.resources().is_released());
        assert!(session.locale().is_none());

        session.end();
        assert!(session.resources().is_released());
    }

    #[test]
    fn test_tokens_iterator() {
        let mut session = Session::start("日本語テキスト".as_bytes(), &ParserConfig::default()).unwrap();
        let tokens: Vec<OwnedToken> = session.tokens().collect::<Result<_>>().unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].category, Category::Ideographic);
        assert_eq!(tokens[0].text, "日本語".as_bytes());
        assert_eq!((tokens[1].start, tokens[1].end), (3, 7));
        assert_eq!(tokens[1].category, Category::Kana);
    }

    #[test]
    fn test_tokens_cover_euc_jp_input() {
        let config = ParserConfig::default().with_encoding("EUC-JP");
        let input = b"a \x8f\xb0\xa1";
        let mut session = Session::start(input, &config).unwrap();
        let tokens: Vec<OwnedToken> = session.tokens().collect::<Result<_>>().unwrap();

        let categories: Vec<Category> = tokens.iter().map(|t| t.category).collect();
        assert_eq!(
            categories,
            vec![Category::Word, Category::Blank, Category::Ideographic]
        );
        assert_eq!(tokens[2].text, b"\x8f\xb0\xa1".to_vec());
        let joined: Vec<u8> = tokens.iter().flat_map(|t| t.text.iter().copied()).collect();
        assert_eq!(joined, input.to_vec());
    }

    #[test]
    fn test_locale_is_resolved() {
        let config = ParserConfig {
            locale: "ja_JP".to_string(),
            ..ParserConfig::default()
        };
        let session = Session::start(b"x", &config).unwrap();
        assert_eq!(session.locale().map(Locale::name), Some("ja_JP"));

        let session = Session::start(b"x", &ParserConfig::default()).unwrap();
        assert_eq!(session.locale().map(Locale::name), Some("en"));
    }
}
