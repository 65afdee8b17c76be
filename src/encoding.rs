//! Conversion between the host's native text encoding and UTF-16.
//!
//! The break engine works on UTF-16 code units. Input arrives in whatever
//! encoding the host stores text in and every token has to be handed back in
//! that same encoding. [`HostText`] keeps the original bytes next to the
//! decoded units so tokens are cut from the input instead of re-encoded.

use std::borrow::Cow;
use std::ops::Range;
use std::slice;

use encoding_rs::{DecoderResult, Encoding, UTF_8};

use crate::error::{ParserError, Result};

/// A byte-level codec for one host encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HostCodec {
    encoding: &'static Encoding,
}

impl HostCodec {
    /// Look up a codec by its WHATWG label (`"UTF-8"`, `"latin1"`, `"EUC-JP"`, ...).
    ///
    /// Only ASCII-compatible encodings are accepted.
    pub fn for_label(label: &str) -> Result<Self> {
        let encoding = Encoding::for_label(label.trim().as_bytes())
            .ok_or_else(|| ParserError::config(format!("unknown encoding: {label}")))?;
        if !encoding.is_ascii_compatible() {
            return Err(ParserError::config(format!(
                "encoding {} is not ASCII-compatible",
                encoding.name()
            )));
        }
        Ok(HostCodec { encoding })
    }

    /// Canonical name of the underlying encoding.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    /// Decode host bytes into UTF-16 code units.
    pub fn decode(&self, bytes: &[u8]) -> Result<Vec<u16>> {
        let text = self
            .encoding
            .decode_without_bom_handling_and_without_replacement(bytes)
            .ok_or_else(|| self.malformed())?;
        Ok(text.encode_utf16().collect())
    }

    /// Decode host bytes, recording the byte offset of every code unit boundary.
    ///
    /// The input is fed to the decoder one byte at a time; whenever a byte
    /// completes a character, the units it produced end at that byte.
    pub fn decode_indexed(&self, bytes: &[u8]) -> Result<HostText> {
        let mut decoder = self.encoding.new_decoder_without_bom_handling();
        let capacity = decoder
            .max_utf16_buffer_length(bytes.len())
            .ok_or_else(|| ParserError::encoding("input too large to decode"))?;

        let mut units = vec![0u16; capacity];
        let mut offsets = Vec::with_capacity(bytes.len() + 1);
        offsets.push(0);
        let mut written = 0;

        for (index, byte) in bytes.iter().enumerate() {
            let last = index + 1 == bytes.len();
            let (result, _, produced) = decoder.decode_to_utf16_without_replacement(
                slice::from_ref(byte),
                &mut units[written..],
                last,
            );
            match result {
                DecoderResult::InputEmpty => {}
                DecoderResult::Malformed(..) => return Err(self.malformed()),
                DecoderResult::OutputFull => {
                    return Err(ParserError::encoding("decoder ran out of output space"));
                }
            }

            if produced > 0 {
                offsets.extend(std::iter::repeat_n(INSIDE_CHARACTER, produced - 1));
                offsets.push(index + 1);
                written += produced;
            }
        }

        units.truncate(written);
        debug_assert_eq!(offsets.len(), units.len() + 1);

        Ok(HostText {
            codec: *self,
            bytes: bytes.to_vec(),
            units,
            offsets,
        })
    }

    /// Encode UTF-16 code units back into host bytes.
    pub fn encode(&self, units: &[u16]) -> Result<Vec<u8>> {
        let text = String::from_utf16(units)
            .map_err(|e| ParserError::encoding(format!("malformed UTF-16 span: {e}")))?;
        let (bytes, _, had_unmappable) = self.encoding.encode(&text);
        if had_unmappable {
            return Err(ParserError::encoding(format!(
                "character has no equivalent in encoding {}",
                self.name()
            )));
        }
        Ok(bytes.into_owned())
    }

    fn malformed(&self) -> ParserError {
        ParserError::encoding(format!("invalid byte sequence for encoding {}", self.name()))
    }
}

impl Default for HostCodec {
    fn default() -> Self {
        HostCodec { encoding: UTF_8 }
    }
}

/// Marks a unit boundary that falls inside one host character.
const INSIDE_CHARACTER: usize = usize::MAX;

/// Host bytes together with their UTF-16 decoding.
#[derive(Clone, Debug, Default)]
pub struct HostText {
    codec: HostCodec,
    bytes: Vec<u8>,
    units: Vec<u16>,
    /// `offsets[i]` is the byte offset of unit boundary `i`.
    offsets: Vec<usize>,
}

impl HostText {
    /// The decoded UTF-16 code units.
    pub fn units(&self) -> &[u16] {
        &self.units
    }

    /// Number of UTF-16 code units.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Elements still allocated across the byte, unit and offset buffers.
    pub fn capacity(&self) -> usize {
        self.bytes.capacity() + self.units.capacity() + self.offsets.capacity()
    }

    /// Host bytes for the unit span `span`.
    ///
    /// Spans on character boundaries borrow the original input byte for byte.
    /// A span cutting through a character is re-encoded instead.
    pub fn host_bytes(&self, span: Range<usize>) -> Result<Cow<'_, [u8]>> {
        let units = self.units.get(span.clone()).ok_or_else(|| {
            ParserError::invalid_argument(format!(
                "span {}..{} outside buffer of {} units",
                span.start,
                span.end,
                self.units.len()
            ))
        })?;

        match (self.offsets.get(span.start), self.offsets.get(span.end)) {
            (Some(&start), Some(&end))
                if start != INSIDE_CHARACTER && end != INSIDE_CHARACTER =>
            {
                Ok(Cow::Borrowed(&self.bytes[start..end]))
            }
            _ => self.codec.encode(units).map(Cow::Owned),
        }
    }
}
