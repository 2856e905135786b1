//! QR code data mode encoders
//!
//! Each encoder turns a payload into the data bits that follow the segment
//! header:
//! - Numeric: groups of 3 digits, with 7/4-bit remainder fields
//! - Alphanumeric: pairs of base-45 values in 11 bits, a trailing single in 6

pub mod alphanumeric;
pub mod numeric;

use crate::models::Mode;

/// Encoded body of a single-mode data segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Mode the body was encoded in
    pub mode: Mode,
    /// Value written into the character count indicator
    pub char_count: usize,
    /// Data bits, without mode indicator or character count
    pub body: String,
}
