use crate::error::{EncodeError, EncodeResult};
use std::fmt;
use std::str::FromStr;

/// QR Code version (1-40, Model 2)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    /// Smallest symbol
    pub const MIN: Version = Version(1);
    /// Largest symbol
    pub const MAX: Version = Version(40);

    /// Create a version, rejecting numbers outside 1-40
    pub fn new(number: u8) -> EncodeResult<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&number) {
            Ok(Self(number))
        } else {
            Err(EncodeError::InvalidVersion(number))
        }
    }

    /// Get the version number
    pub fn number(self) -> u8 {
        self.0
    }

    /// Get the size in modules (width = height)
    pub fn size(self) -> usize {
        4 * self.0 as usize + 17
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Version {
    type Error = EncodeError;

    fn try_from(number: u8) -> EncodeResult<Self> {
        Self::new(number)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EcLevel {
    /// Low (~7% recovery capacity)
    #[default]
    L = 0,
    /// Medium (~15% recovery capacity)
    M = 1,
    /// Quartile (~25% recovery capacity)
    Q = 2,
    /// High (~30% recovery capacity)
    H = 3,
}

impl EcLevel {
    /// All levels in table column order
    pub const ALL: [EcLevel; 4] = [EcLevel::L, EcLevel::M, EcLevel::Q, EcLevel::H];

    /// Parse a level code.
    ///
    /// "L", "M" and "Q" map to their levels; every other code falls back to H.
    pub fn from_code(code: &str) -> Self {
        match code {
            "L" => EcLevel::L,
            "M" => EcLevel::M,
            "Q" => EcLevel::Q,
            _ => EcLevel::H,
        }
    }

    /// Column of this level in the error-correction tables
    pub fn index(self) -> usize {
        self as usize
    }
}

impl FromStr for EcLevel {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl fmt::Display for EcLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            EcLevel::L => "L",
            EcLevel::M => "M",
            EcLevel::Q => "Q",
            EcLevel::H => "H",
        };
        f.write_str(code)
    }
}
