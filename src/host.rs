//! The parser contract consumed by a host text-search pipeline.
//!
//! A host drives a parser through five callbacks: `lextype`, `start`,
//! `next_token`, `end` and `headline`. The session travels between the calls
//! as an opaque handle the host never looks into.
//!
//! # Examples
//!
//! ```
//! use wordbreak_parser::host::{TextSearchParser, WordBreakParser};
//!
//! let parser = WordBreakParser::new();
//! let text = b"tokens 42";
//! let mut handle = parser.start(text, text.len()).unwrap();
//!
//! let mut ids = Vec::new();
//! loop {
//!     let token = parser.next_token(&mut handle).unwrap();
//!     if token.is_end() {
//!         break;
//!     }
//!     ids.push(token.token_type);
//! }
//! parser.end(handle);
//!
//! assert_eq!(ids, vec![1, 3, 2]);
//! ```

use crate::config::settings;
use crate::error::{ParserError, Result};
use crate::parser::headline::{self, HeadlineRequest};
use crate::parser::lextype::{self, LexDescr};
use crate::parser::session::Session;

/// Category id signalling end of stream.
pub const END_OF_STREAM: i32 = 0;

/// A token as handed to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawToken<'a> {
    /// Category id, or [`END_OF_STREAM`].
    pub token_type: i32,
    /// Token bytes in host encoding; empty at end of stream.
    pub text: &'a [u8],
}

impl RawToken<'_> {
    /// Byte length of the token.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Whether this marks end of stream.
    pub fn is_end(&self) -> bool {
        self.token_type == END_OF_STREAM
    }
}

/// The callback set a host text-search pipeline calls into.
pub trait TextSearchParser {
    /// Per-parse state passed back into `next_token` and `end`.
    type Handle;

    /// Token vocabulary, terminated by an entry with id 0.
    fn lextype(&self) -> Vec<LexDescr>;

    /// Begin parsing the first `length` bytes of `text`.
    fn start(&self, text: &[u8], length: usize) -> Result<Self::Handle>;

    /// Produce the next token; `token_type` is 0 once the input is exhausted.
    fn next_token<'a>(&self, handle: &'a mut Self::Handle) -> Result<RawToken<'a>>;

    /// Release everything the handle holds.
    fn end(&self, handle: Self::Handle);

    /// Build a headline for a query match.
    fn headline(&self, request: &HeadlineRequest) -> Result<()>;
}

/// Opaque per-parse state.
#[derive(Debug)]
pub struct ParserHandle {
    session: Box<Session>,
}

/// Word-boundary parser reading its locale from the process-wide settings.
#[derive(Clone, Debug, Default)]
pub struct WordBreakParser;

impl WordBreakParser {
    /// Create a new parser.
    pub fn new() -> Self {
        WordBreakParser
    }
}

impl TextSearchParser for WordBreakParser {
    type Handle = ParserHandle;

    fn lextype(&self) -> Vec<LexDescr> {
        lextype::lextype()
    }

    fn start(&self, text: &[u8], length: usize) -> Result<ParserHandle> {
        let input = text.get(..length).ok_or_else(|| {
            ParserError::invalid_argument(format!(
                "length {length} exceeds text of {} bytes",
                text.len()
            ))
        })?;

        let config = settings::snapshot();
        let session = Session::start(input, &config)?;

        Ok(ParserHandle {
            session: Box::new(session),
        })
    }

    fn next_token<'a>(&self, handle: &'a mut ParserHandle) -> Result<RawToken<'a>> {
        let token = match handle.session.next_token()? {
            Some(token) => RawToken {
                token_type: token.category().id(),
                text: token.text(),
            },
            None => RawToken {
                token_type: END_OF_STREAM,
                text: &[],
            },
        };
        Ok(token)
    }

    fn end(&self, mut handle: ParserHandle) {
        handle.session.end();
    }

    fn headline(&self, request: &HeadlineRequest) -> Result<()> {
        headline::headline(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::tests::lock;
    use crate::error::EngineErrorCode;

    fn drain(parser: &WordBreakParser, text: &[u8]) -> Vec<(i32, Vec<u8>)> {
        let mut handle = parser.start(text, text.len()).unwrap();
        let mut tokens = Vec::new();
        loop {
            let token = parser.next_token(&mut handle).unwrap();
            if token.is_end() {
                break;
            }
            tokens.push((token.token_type, token.text.to_vec()));
        }
        parser.end(handle);
        tokens
    }

    #[test]
    fn test_lextype_terminates_with_sentinel() {
        let descr = WordBreakParser::new().lextype();
        assert_eq!(descr.len(), 6);
        assert_eq!(descr.last().unwrap().lexid, 0);
    }

    #[test]
    fn test_start_respects_length() {
        let _guard = lock();
        let parser = WordBreakParser::new();
        let tokens = drain(&parser, b"abc def");
        assert_eq!(tokens.len(), 3);

        let mut handle = parser.start(b"abc def", 3).unwrap();
        let token = parser.next_token(&mut handle).unwrap();
        assert_eq!((token.token_type, token.text), (1, &b"abc"[..]));
        assert!(parser.next_token(&mut handle).unwrap().is_end());
        parser.end(handle);

        assert!(matches!(
            parser.start(b"abc", 4),
            Err(ParserError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_end_of_stream_repeats() {
        let _guard = lock();
        let parser = WordBreakParser::new();
        let mut handle = parser.start(b"", 0).unwrap();
        for _ in 0..3 {
            let token = parser.next_token(&mut handle).unwrap();
            assert_eq!(token.token_type, END_OF_STREAM);
            assert!(token.is_empty());
        }
        parser.end(handle);
    }

    #[test]
    fn test_locale_setting_is_read_at_start() {
        let _guard = lock();
        let parser = WordBreakParser::new();

        settings::set_locale("not a locale");
        match parser.start(b"text", 4) {
            Err(ParserError::EngineInit { locale, code }) => {
                assert_eq!(locale, "not a locale");
                assert_eq!(code, EngineErrorCode::IllegalArgument);
            }
            other => panic!("expected engine init failure, got {other:?}"),
        }

        settings::set_locale("ja");
        let mut handle = parser.start(b"one two", 7).unwrap();
        settings::set_locale("not a locale");
        assert_eq!(parser.next_token(&mut handle).unwrap().token_type, 1);
        assert_eq!(
            handle.session.locale().map(|l| l.name().to_string()),
            Some("ja".to_string())
        );
        parser.end(handle);
        settings::reset();
    }

    #[test]
    fn test_encoding_setting_controls_token_bytes() {
        let _guard = lock();
        settings::set(settings::ENCODING_SETTING, "latin1").unwrap();

        let parser = WordBreakParser::new();
        let tokens = drain(&parser, b"na\xefve caf\xe9");
        assert_eq!(tokens[0], (1, b"na\xefve".to_vec()));
        assert_eq!(tokens[2], (1, b"caf\xe9".to_vec()));
        settings::reset();
    }

    #[test]
    fn test_headline_is_unsupported() {
        let parser = WordBreakParser::new();
        assert!(matches!(
            parser.headline(&HeadlineRequest::default()),
            Err(ParserError::FeatureNotSupported(_))
        ));
    }
}
