//! Single-slot storage for the current token in host encoding.

use std::ops::Range;

use crate::encoding::HostText;
use crate::error::Result;

/// Holds at most one materialized token.
#[derive(Debug, Default)]
pub struct TokenSlot {
    current: Option<Vec<u8>>,
}

impl TokenSlot {
    /// Create an empty slot.
    pub fn new() -> Self {
        TokenSlot { current: None }
    }

    /// Copy the host bytes of `text[span]` into the slot and return them.
    ///
    /// The previous token is dropped first, so a failed conversion leaves the
    /// slot empty.
    pub fn materialize(&mut self, text: &HostText, span: Range<usize>) -> Result<&[u8]> {
        self.current = None;

        let bytes = text.host_bytes(span)?.into_owned();
        Ok(self.current.insert(bytes).as_slice())
    }

    /// The token currently held, if any.
    pub fn current(&self) -> Option<&[u8]> {
        self.current.as_deref()
    }

    /// Drop the held token.
    pub fn release(&mut self) {
        self.current = None;
    }

    /// Whether a token is held.
    pub fn is_holding(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::HostCodec;

    fn utf8(text: &str) -> HostText {
        HostCodec::default().decode_indexed(text.as_bytes()).unwrap()
    }

    #[test]
    fn test_materialize_replaces_previous_token() {
        let text = utf8("hello world");
        let mut slot = TokenSlot::new();

        assert_eq!(slot.materialize(&text, 0..5).unwrap(), b"hello");
        assert_eq!(slot.materialize(&text, 6..11).unwrap(), b"world");
        assert_eq!(slot.current(), Some(&b"world"[..]));
    }

    #[test]
    fn test_release_empties_slot() {
        let text = utf8("abc");
        let mut slot = TokenSlot::default();
        slot.materialize(&text, 0..3).unwrap();
        assert!(slot.is_holding());

        slot.release();
        assert!(!slot.is_holding());
        slot.release();
        assert_eq!(slot.current(), None);
    }

    #[test]
    fn test_host_encoding_length() {
        let codec = HostCodec::for_label("EUC-JP").unwrap();
        let text = codec.decode_indexed(b"\xc6\xfc\xcb\xdc").unwrap();
        let mut slot = TokenSlot::new();
        assert_eq!(slot.materialize(&text, 0..2).unwrap().len(), 4);

        let text = utf8("日本");
        assert_eq!(slot.materialize(&text, 0..2).unwrap().len(), 6);
    }

    #[test]
    fn test_failed_conversion_leaves_slot_empty() {
        let text = utf8("a😀");
        let mut slot = TokenSlot::default();
        slot.materialize(&text, 0..1).unwrap();

        // Splits the surrogate pair.
        assert!(slot.materialize(&text, 1..2).is_err());
        assert!(!slot.is_holding());
        assert!(slot.materialize(&text, 0..9).is_err());
    }
}
