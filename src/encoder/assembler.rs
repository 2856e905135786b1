//! Bitstream assembly for one encode request
//!
//! The assembler walks a fixed sequence of stages:
//! `Start -> ModeSelected -> DataEncoded -> Terminated -> ByteAligned -> CapacityPadded`.
//! Each request gets its own assembler and bit string; only the capability
//! tables are shared.

use crate::config;
use crate::encoder::modes::alphanumeric::AlphanumericEncoder;
use crate::encoder::modes::numeric::NumericEncoder;
use crate::encoder::primitives::{capacity_target_bits, resolve_bit_width, to_bits};
use crate::encoder::tables;
use crate::error::{EncodeError, EncodeResult};
use crate::models::{BitString, EcLevel, EncodeRequest, Mode, Payload, Version};
use log::{debug, trace};

/// Pad codewords appended alternately until the capacity target is reached
const PAD_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// Zero bits ending the data segment
const TERMINATOR_BITS: usize = 4;

/// How the padding target is derived from the error correction table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapacityTarget {
    /// Total codewords of the symbol times 4 bits
    #[default]
    TotalCodewordNibbles,
    /// Data codewords for the (version, level) pair times 8 bits
    DataCodewordBits,
}

impl CapacityTarget {
    /// Parse the configuration name: `nibbles` or `data-bits`
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "nibbles" => Some(CapacityTarget::TotalCodewordNibbles),
            "data-bits" => Some(CapacityTarget::DataCodewordBits),
            _ => None,
        }
    }

    /// Configuration name of this target
    pub fn name(self) -> &'static str {
        match self {
            CapacityTarget::TotalCodewordNibbles => "nibbles",
            CapacityTarget::DataCodewordBits => "data-bits",
        }
    }
}

/// Knobs for a single encode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodeOptions {
    /// Padding target policy
    pub capacity_target: CapacityTarget,
}

impl Default for EncodeOptions {
    /// Options from the process configuration (`QR_CAPACITY_TARGET`)
    fn default() -> Self {
        Self {
            capacity_target: config::capacity_target(),
        }
    }
}

impl EncodeOptions {
    /// Use the given padding target policy
    pub fn with_capacity_target(mut self, capacity_target: CapacityTarget) -> Self {
        self.capacity_target = capacity_target;
        self
    }
}

/// Result of a completed encode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    bits: BitString,
    mode: Mode,
    version: Version,
    ec_level: EcLevel,
    capacity_target_bits: usize,
}

impl Encoded {
    /// Final padded bit stream
    pub fn bits(&self) -> &BitString {
        &self.bits
    }

    /// Consume into the bit stream
    pub fn into_bits(self) -> BitString {
        self.bits
    }

    /// Stream packed into 8-bit codewords
    pub fn codewords(&self) -> Vec<u8> {
        self.bits.to_codewords()
    }

    /// Mode the data was encoded in
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Symbol version of the request
    pub fn version(&self) -> Version {
        self.version
    }

    /// Error correction level of the request
    pub fn ec_level(&self) -> EcLevel {
        self.ec_level
    }

    /// Padding target computed for this encode (diagnostic only)
    pub fn capacity_target_bits(&self) -> usize {
        self.capacity_target_bits
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
    Start,
    ModeSelected,
    DataEncoded,
    Terminated,
    ByteAligned,
    CapacityPadded,
}

/// Builds the padded bit stream for one request
pub struct BitstreamAssembler<'a> {
    request: &'a EncodeRequest,
    options: EncodeOptions,
    stage: Stage,
    mode: Option<Mode>,
    bits: BitString,
}

impl<'a> BitstreamAssembler<'a> {
    /// Create an assembler for `request`
    pub fn new(request: &'a EncodeRequest, options: EncodeOptions) -> Self {
        Self {
            request,
            options,
            stage: Stage::Start,
            mode: None,
            bits: BitString::new(),
        }
    }

    /// Run every stage and return the padded stream
    pub fn assemble(mut self) -> EncodeResult<Encoded> {
        let mode = self.select_mode()?;
        self.encode_data()?;
        self.terminate();
        self.align_to_byte();
        let capacity_target_bits = self.pad_to_capacity();
        Ok(Encoded {
            bits: self.bits,
            mode,
            version: self.request.version,
            ec_level: self.request.ec_level,
            capacity_target_bits,
        })
    }

    fn advance(&mut self, from: Stage, to: Stage) {
        debug_assert_eq!(self.stage, from, "stage {to:?} entered out of order");
        trace!("{from:?} -> {to:?} at {} bits", self.bits.len());
        self.stage = to;
    }

    fn select_mode(&mut self) -> EncodeResult<Mode> {
        let mode = self
            .request
            .data
            .mode()
            .ok_or(EncodeError::UnsupportedInputType {
                kind: self.request.data.kind(),
            })?;
        self.mode = Some(mode);
        self.advance(Stage::Start, Stage::ModeSelected);
        Ok(mode)
    }

    fn encode_data(&mut self) -> EncodeResult<()> {
        let version = self.request.version;
        let segment = match &self.request.data {
            Payload::Numeric(n) => NumericEncoder::encode(*n, version)?,
            Payload::Alphanumeric(text) => AlphanumericEncoder::encode(text)?,
            other => {
                return Err(EncodeError::UnsupportedInputType { kind: other.kind() });
            }
        };
        debug_assert_eq!(Some(segment.mode), self.mode);

        let indicator = tables::mode_indicator(segment.mode)?;
        let count_bits = resolve_bit_width(version, segment.mode)?;

        self.bits = BitString::with_capacity(4 + count_bits + segment.body.len() + 16);
        self.bits.push_field(&to_bits(4, u64::from(indicator)));
        self.bits.push_field(&to_bits(count_bits, segment.char_count as u64));
        self.bits.push_field(&segment.body);
        self.advance(Stage::ModeSelected, Stage::DataEncoded);
        Ok(())
    }

    fn terminate(&mut self) {
        self.bits.push_zeros(TERMINATOR_BITS);
        self.advance(Stage::DataEncoded, Stage::Terminated);
    }

    fn align_to_byte(&mut self) {
        let remainder = self.bits.len() % 8;
        if remainder != 0 {
            self.bits.push_zeros(8 - remainder);
        }
        self.advance(Stage::Terminated, Stage::ByteAligned);
    }

    /// Append pad codewords until the capacity target is reached.
    ///
    /// Returns the target. Whole codewords are appended, so the stream stays
    /// byte-aligned and may end past the target.
    fn pad_to_capacity(&mut self) -> usize {
        let target = capacity_target_bits(
            self.request.version,
            self.request.ec_level,
            self.options.capacity_target,
        );
        debug!(
            "capacity target {} bits ({}) for version {} level {}, stream is {} bits",
            target,
            self.options.capacity_target.name(),
            self.request.version,
            self.request.ec_level,
            self.bits.len()
        );

        for &codeword in PAD_CODEWORDS.iter().cycle() {
            if self.bits.len() >= target {
                break;
            }
            self.bits.push_codeword(codeword);
        }
        self.advance(Stage::ByteAligned, Stage::CapacityPadded);
        target
    }
}
