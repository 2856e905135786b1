use std::fmt;

/// Character-encoding mode of a data segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Extended Channel Interpretation designator (Mode 0111)
    Eci,
    /// Digits 0-9 (Mode 0001)
    Numeric,
    /// 45-symbol alphabet (Mode 0010)
    Alphanumeric,
    /// 8-bit data (Mode 0100)
    Byte,
    /// Shift JIS double-byte data (Mode 1000)
    Kanji,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Eci => "eci",
            Mode::Numeric => "numeric",
            Mode::Alphanumeric => "alphanumeric",
            Mode::Byte => "byte",
            Mode::Kanji => "kanji",
        };
        f.pad(name)
    }
}
