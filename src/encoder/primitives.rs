//! Stateless helpers shared by the mode encoders and the assembler

use crate::encoder::assembler::CapacityTarget;
use crate::encoder::tables;
use crate::error::{EncodeError, EncodeResult};
use crate::models::{EcLevel, Mode, Version};

/// Render `value` in base 2.
///
/// A `width` of 0 gives the minimal representation. Any other width left-pads
/// with zeros to exactly `width` bits. A value wider than `width` is not
/// truncated; the result is simply longer, so callers must size fields.
pub fn to_bits(width: usize, value: u64) -> String {
    if width == 0 {
        format!("{value:b}")
    } else {
        format!("{value:0width$b}")
    }
}

/// Alphabet index of the character at `position`, ignoring ASCII case
pub fn alphabet_index(symbol: char, position: usize) -> EncodeResult<u16> {
    tables::alphabet_index(symbol)
        .map(|idx| idx as u16)
        .ok_or(EncodeError::CharacterNotInAlphabet {
            character: symbol,
            position,
        })
}

/// Character count indicator width for `mode` at `version`
pub fn resolve_bit_width(version: Version, mode: Mode) -> EncodeResult<usize> {
    tables::char_count_bits(mode, version)
}

/// Codeword figure the padding target is derived from.
///
/// This is the symbol's total codeword count, which is the same for every
/// level of a version.
pub fn data_codeword_capacity(version: Version, ec_level: EcLevel) -> usize {
    tables::ec_info(version, ec_level).total_codewords
}

/// Length in bits the padded stream must reach
pub fn capacity_target_bits(version: Version, ec_level: EcLevel, target: CapacityTarget) -> usize {
    match target {
        CapacityTarget::TotalCodewordNibbles => data_codeword_capacity(version, ec_level) * 4,
        CapacityTarget::DataCodewordBits => tables::ec_info(version, ec_level).data_codewords * 8,
    }
}
