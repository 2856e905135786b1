use super::Segment;
use crate::encoder::primitives::{alphabet_index, to_bits};
use crate::error::EncodeResult;
use crate::models::Mode;

/// Alphanumeric mode encoder (Mode 0010)
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Encode text from the 45-symbol alphabet.
    ///
    /// Lowercase ASCII letters are encoded as their uppercase forms. The first
    /// character outside the alphabet aborts the encode.
    pub fn encode(text: &str) -> EncodeResult<Segment> {
        let values = text
            .chars()
            .enumerate()
            .map(|(position, c)| alphabet_index(c, position))
            .collect::<EncodeResult<Vec<u16>>>()?;

        let mut body = String::with_capacity(values.len() / 2 * 11 + 6);
        for pair in values.chunks(2) {
            let field = match *pair {
                [first, second] => to_bits(11, u64::from(first * 45 + second)),
                _ => to_bits(6, u64::from(pair[0])),
            };
            body.push_str(&field);
        }

        Ok(Segment {
            mode: Mode::Alphanumeric,
            char_count: values.len(),
            body,
        })
    }
}
