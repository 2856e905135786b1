use super::{EcLevel, Mode, Version};
use crate::config;

/// Data to encode, tagged with how it should be interpreted
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Payload {
    /// A number, encoded in numeric mode
    Numeric(u64),
    /// Text, encoded in alphanumeric mode
    Alphanumeric(String),
    /// Raw bytes. No encoder accepts these; encoding fails with
    /// `EncodeError::UnsupportedInputType`.
    Bytes(Vec<u8>),
}

impl Payload {
    /// Classify text as numeric or alphanumeric.
    ///
    /// Text is numeric only when it is exactly the decimal rendering of a
    /// `u64`, so leading zeros and signs stay in alphanumeric mode and survive
    /// the round trip.
    pub fn classify(text: &str) -> Self {
        match text.parse::<u64>() {
            Ok(n) if n.to_string() == text => Payload::Numeric(n),
            _ => Payload::Alphanumeric(text.to_owned()),
        }
    }

    /// Mode this payload selects, if any encoder handles it
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Payload::Numeric(_) => Some(Mode::Numeric),
            Payload::Alphanumeric(_) => Some(Mode::Alphanumeric),
            Payload::Bytes(_) => None,
        }
    }

    /// Short name of the payload kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Payload::Numeric(_) => "numeric",
            Payload::Alphanumeric(_) => "text",
            Payload::Bytes(_) => "byte",
        }
    }
}

impl From<u64> for Payload {
    fn from(n: u64) -> Self {
        Payload::Numeric(n)
    }
}

impl From<u32> for Payload {
    fn from(n: u32) -> Self {
        Payload::Numeric(u64::from(n))
    }
}

impl From<&str> for Payload {
    fn from(text: &str) -> Self {
        Payload::Alphanumeric(text.to_owned())
    }
}

impl From<String> for Payload {
    fn from(text: String) -> Self {
        Payload::Alphanumeric(text)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(bytes: Vec<u8>) -> Self {
        Payload::Bytes(bytes)
    }
}

impl From<&[u8]> for Payload {
    fn from(bytes: &[u8]) -> Self {
        Payload::Bytes(bytes.to_vec())
    }
}

/// One encode call's input: data, symbol version and error correction level
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodeRequest {
    /// Data to encode
    pub data: Payload,
    /// Symbol version
    pub version: Version,
    /// Error correction level
    pub ec_level: EcLevel,
}

impl EncodeRequest {
    /// Create a request with the configured default version and level
    /// (version 1, level L unless overridden by the environment).
    pub fn new(data: impl Into<Payload>) -> Self {
        Self {
            data: data.into(),
            version: config::default_version(),
            ec_level: config::default_ec_level(),
        }
    }

    /// Set the symbol version
    pub fn with_version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    /// Set the error correction level
    pub fn with_ec_level(mut self, ec_level: EcLevel) -> Self {
        self.ec_level = ec_level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(Payload::classify("01234567"), Payload::Alphanumeric("01234567".into()));
        assert_eq!(Payload::classify("1234567"), Payload::Numeric(1234567));
        assert_eq!(Payload::classify("0"), Payload::Numeric(0));
        assert_eq!(Payload::classify("+12"), Payload::Alphanumeric("+12".into()));
        assert_eq!(Payload::classify("HELLO"), Payload::Alphanumeric("HELLO".into()));
        // Larger than u64::MAX
        assert_eq!(
            Payload::classify("99999999999999999999"),
            Payload::Alphanumeric("99999999999999999999".into())
        );
    }

    #[test]
    fn test_payload_mode() {
        assert_eq!(Payload::from(8u64).mode(), Some(Mode::Numeric));
        assert_eq!(Payload::from("AB").mode(), Some(Mode::Alphanumeric));
        assert_eq!(Payload::from(&b"\x00\xff"[..]).mode(), None);
    }

    #[test]
    fn test_builder() {
        let version = Version::new(7).unwrap();
        let request = EncodeRequest::new("HELLO")
            .with_version(version)
            .with_ec_level(EcLevel::Q);
        assert_eq!(request.version, version);
        assert_eq!(request.ec_level, EcLevel::Q);
        assert_eq!(request.data, Payload::Alphanumeric("HELLO".into()));
    }
}
