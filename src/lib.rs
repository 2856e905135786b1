//! qr_bitstream - data-encoding stage of a QR code generator
//!
//! Turns numbers and alphanumeric text into the padded bit stream that the
//! error-correction and matrix-placement stages consume. Mode indicator,
//! character count indicator, data bits, terminator, byte alignment and pad
//! codewords are all produced here; Reed-Solomon coding and module layout are
//! not.
//!
//! ```
//! use qr_bitstream::{encode, EcLevel, EncodeRequest, Version};
//!
//! let request = EncodeRequest::new("HELLO WORLD")
//!     .with_version(Version::new(1).unwrap())
//!     .with_ec_level(EcLevel::M);
//! let bits = encode(&request).unwrap();
//! assert!(bits.as_str().starts_with("0010"));
//! assert_eq!(bits.len() % 8, 0);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Process-wide defaults read from the environment
mod config;
/// QR code encoding modules (tables, primitives, data modes, assembly)
pub mod encoder;
/// Error types
pub mod error;
/// Core data structures (Version, EcLevel, Payload, BitString, etc.)
pub mod models;

pub use encoder::assembler::{BitstreamAssembler, CapacityTarget, EncodeOptions, Encoded};
pub use error::{EncodeError, EncodeResult};
pub use models::{BitString, EcLevel, EncodeRequest, Mode, Payload, Version};

use rayon::prelude::*;

/// Encode one request into its padded bit stream
///
/// Uses [`EncodeOptions::default`], i.e. the configured capacity target.
pub fn encode(request: &EncodeRequest) -> EncodeResult<BitString> {
    encode_detailed(request, EncodeOptions::default()).map(Encoded::into_bits)
}

/// Encode one request, keeping the mode and capacity target alongside the bits
pub fn encode_detailed(request: &EncodeRequest, options: EncodeOptions) -> EncodeResult<Encoded> {
    BitstreamAssembler::new(request, options).assemble()
}

/// Encode independent requests in parallel
///
/// Results are returned in input order. Each request is assembled on its own;
/// a failing request does not affect the others.
pub fn encode_batch(requests: &[EncodeRequest]) -> Vec<EncodeResult<BitString>> {
    let options = EncodeOptions::default();
    requests
        .par_iter()
        .map(|request| encode_detailed(request, options).map(Encoded::into_bits))
        .collect()
}
