//! QR code encoding modules
//!
//! This module contains the data-encoding stage, leaves first:
//! - Capability tables (alphabet, mode indicators, count widths, EC parameters)
//! - Encoding primitives (binary formatting, lookups, capacity)
//! - Data mode encoders (numeric, alphanumeric)
//! - Bitstream assembly (header, terminator, alignment, padding)

/// Bitstream assembler and encode options
pub mod assembler;
/// Data mode encoders (numeric, alphanumeric)
pub mod modes;
/// Stateless encoding helpers
pub mod primitives;
/// QR specification tables (alphabet, indicators, ECC codewords/blocks)
pub mod tables;
