//! Error types for the encoding pipeline

use crate::models::Mode;
use thiserror::Error;

/// Errors that abort a single encode call.
///
/// Every variant is fatal for the request that produced it: encoding is pure
/// and deterministic, so retrying with the same input cannot succeed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The payload is neither numeric nor textual.
    #[error("unsupported input type: {kind} payloads have no encoder")]
    UnsupportedInputType {
        /// Short name of the rejected payload kind
        kind: &'static str,
    },

    /// A lookup was made for a mode that has no entry in the given table.
    #[error("mode {mode:?} has no entry in the {table} table")]
    UnknownMode {
        /// The requested mode
        mode: Mode,
        /// Name of the table the lookup went to
        table: &'static str,
    },

    /// An alphanumeric input character is outside the 45-symbol alphabet.
    #[error("character {character:?} at position {position} is not in the alphanumeric alphabet")]
    CharacterNotInAlphabet {
        /// The offending character
        character: char,
        /// Zero-based character position in the input
        position: usize,
    },

    /// The version number is outside 1-40.
    #[error("invalid version {0}: expected a value between 1 and 40")]
    InvalidVersion(u8),
}

/// Result alias used throughout the crate.
pub type EncodeResult<T> = Result<T, EncodeError>;
