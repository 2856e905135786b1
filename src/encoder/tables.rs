//! Capability tables: alphabet, mode indicators, character count widths and
//! per-version error correction parameters.
//!
//! Everything here is constant data. Lookups are pure and may be shared freely
//! across threads.

use crate::error::{EncodeError, EncodeResult};
use crate::models::{EcLevel, Mode, Version};

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
///
/// A symbol's position is its encoded value.
pub const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// 4-bit mode indicators
const MODE_INDICATORS: [(Mode, u8); 5] = [
    (Mode::Eci, 0b0111),
    (Mode::Numeric, 0b0001),
    (Mode::Alphanumeric, 0b0010),
    (Mode::Byte, 0b0100),
    (Mode::Kanji, 0b1000),
];

/// Character count indicator widths per version range
/// \[ 1-9, 10-26, 27-40 \]
///
/// ECI carries no character count and has no row.
const CHAR_COUNT_BITS: [(Mode, [usize; 3]); 4] = [
    (Mode::Numeric, [10, 12, 14]),
    (Mode::Alphanumeric, [9, 11, 13]),
    (Mode::Byte, [8, 16, 16]),
    (Mode::Kanji, [8, 10, 12]),
];

// ISO/IEC 18004 Model 2 error correction parameters.
// Index: [ec_level][version]; column 0 is unused.
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

const TOTAL_CODEWORDS: [u16; 41] = [
    0, 26, 44, 70, 100, 134, 172, 196, 242, 292, 346, 404, 466, 532, 581, 655, 733, 815, 901, 991,
    1085, 1156, 1258, 1364, 1474, 1588, 1706, 1828, 1921, 2051, 2185, 2323, 2465, 2611, 2761, 2876,
    3034, 3196, 3362, 3532, 3706,
];

const DATA_CODEWORDS: [[u16; 41]; 4] = [
    [
        0, 19, 34, 55, 80, 108, 136, 156, 194, 232, 274, 324, 370, 428, 461, 523, 589, 647, 721,
        795, 861, 932, 1006, 1094, 1174, 1276, 1370, 1468, 1531, 1631, 1735, 1843, 1955, 2071,
        2191, 2306, 2434, 2566, 2702, 2812, 2956,
    ], // Low
    [
        0, 16, 28, 44, 64, 86, 108, 124, 154, 182, 216, 254, 290, 334, 365, 415, 453, 507, 563,
        627, 669, 714, 782, 860, 914, 1000, 1062, 1128, 1193, 1267, 1373, 1455, 1541, 1631, 1725,
        1812, 1914, 1992, 2102, 2216, 2334,
    ], // Medium
    [
        0, 13, 22, 34, 48, 62, 76, 88, 110, 132, 154, 180, 206, 244, 261, 295, 325, 367, 397, 445,
        485, 512, 568, 614, 664, 718, 754, 808, 871, 911, 985, 1033, 1115, 1171, 1231, 1286, 1354,
        1426, 1502, 1582, 1666,
    ], // Quartile
    [
        0, 9, 16, 26, 36, 46, 60, 66, 86, 100, 122, 140, 158, 180, 197, 223, 253, 283, 313, 341,
        385, 406, 442, 464, 514, 538, 596, 628, 661, 701, 745, 793, 845, 901, 961, 986, 1054, 1096,
        1142, 1222, 1276,
    ], // High
];

/// Error correction parameters for one (version, level) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcInfo {
    /// Codewords in the whole symbol, data and error correction together
    pub total_codewords: usize,
    /// Error correction codewords in each block
    pub ec_codewords_per_block: usize,
    /// Number of error correction blocks
    pub num_blocks: usize,
    /// Codewords left for data
    pub data_codewords: usize,
}

/// Look up the error correction parameters for a version and level
pub fn ec_info(version: Version, ec_level: EcLevel) -> EcInfo {
    let v = version.number() as usize;
    let idx = ec_level.index();
    EcInfo {
        total_codewords: TOTAL_CODEWORDS[v] as usize,
        ec_codewords_per_block: ECC_CODEWORDS_PER_BLOCK[idx][v] as usize,
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][v] as usize,
        data_codewords: DATA_CODEWORDS[idx][v] as usize,
    }
}

/// Index of a symbol in the alphanumeric alphabet, ignoring ASCII case
pub fn alphabet_index(symbol: char) -> Option<usize> {
    let symbol = symbol.to_ascii_uppercase();
    ALPHANUMERIC_TABLE.iter().position(|&c| c == symbol)
}

/// 4-bit mode indicator for `mode`
pub fn mode_indicator(mode: Mode) -> EncodeResult<u8> {
    MODE_INDICATORS
        .iter()
        .find(|(m, _)| *m == mode)
        .map(|&(_, bits)| bits)
        .ok_or(EncodeError::UnknownMode {
            mode,
            table: "mode indicator",
        })
}

/// Which version range column of the character count table a version reads.
///
/// Versions 1-9 use column 0, 10-26 column 1 and 27-40 column 2.
pub fn version_range(version: Version) -> usize {
    match version.number() {
        1..=9 => 0,
        10..=26 => 1,
        _ => 2,
    }
}

/// Width of the character count indicator for `mode` at `version`
pub fn char_count_bits(mode: Mode, version: Version) -> EncodeResult<usize> {
    CHAR_COUNT_BITS
        .iter()
        .find(|(m, _)| *m == mode)
        .map(|(_, widths)| widths[version_range(version)])
        .ok_or(EncodeError::UnknownMode {
            mode,
            table: "character count",
        })
}
