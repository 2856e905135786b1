use super::Segment;
use crate::encoder::primitives::{resolve_bit_width, to_bits};
use crate::error::EncodeResult;
use crate::models::{Mode, Version};

/// Numeric mode encoder (Mode 0001)
/// Full groups of 3 digits use the version's numeric field width,
/// 2 leftover digits = 7 bits, 1 leftover digit = 4 bits
pub struct NumericEncoder;

impl NumericEncoder {
    /// Encode a number as its decimal digits
    pub fn encode(value: u64, version: Version) -> EncodeResult<Segment> {
        let digits = value.to_string();
        let group_width = resolve_bit_width(version, Mode::Numeric)?;

        let mut body = String::with_capacity(digits.len() / 3 * group_width + 7);
        for group in digits.as_bytes().chunks(3) {
            let number = group
                .iter()
                .fold(0u64, |acc, d| acc * 10 + u64::from(d - b'0'));
            let width = match group.len() {
                3 => group_width,
                2 => 7,
                _ => 4,
            };
            body.push_str(&to_bits(width, number));
        }

        Ok(Segment {
            mode: Mode::Numeric,
            char_count: digits.len(),
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_single_digit() {
        let segment = NumericEncoder::encode(8, v(1)).unwrap();
        assert_eq!(segment.char_count, 1);
        assert_eq!(segment.body, "1000");
    }

    #[test]
    fn test_groups_do_not_overlap() {
        // 123 | 456 | 7
        let segment = NumericEncoder::encode(1234567, v(1)).unwrap();
        assert_eq!(segment.char_count, 7);
        assert_eq!(segment.body, "0001111011".to_owned() + "0111001000" + "0111");
    }

    #[test]
    fn test_two_digit_remainder() {
        // 123 | 45
        let segment = NumericEncoder::encode(12345, v(1)).unwrap();
        assert_eq!(segment.body, "0001111011".to_owned() + "0101101");
    }

    #[test]
    fn test_group_width_follows_version() {
        let segment = NumericEncoder::encode(999, v(10)).unwrap();
        assert_eq!(segment.body, "001111100111");
        let segment = NumericEncoder::encode(999, v(27)).unwrap();
        assert_eq!(segment.body, "00001111100111");
    }

    #[test]
    fn test_zero() {
        let segment = NumericEncoder::encode(0, v(1)).unwrap();
        assert_eq!(segment.char_count, 1);
        assert_eq!(segment.body, "0000");
    }
}
