//! Integration tests for the data-encoding stage
//!
//! These tests pin the bit streams produced for reference inputs and check the
//! structural properties every stream must have: mode indicator, count
//! indicator width, byte alignment and padding up to the capacity target.

use qr_bitstream::encoder::primitives::capacity_target_bits;
use qr_bitstream::{
    CapacityTarget, EcLevel, EncodeError, EncodeOptions, EncodeRequest, Mode, Payload, Version,
    encode_batch, encode_detailed,
};

fn v(n: u8) -> Version {
    Version::new(n).expect("valid version")
}

fn nibbles() -> EncodeOptions {
    EncodeOptions {
        capacity_target: CapacityTarget::TotalCodewordNibbles,
    }
}

fn data_bits() -> EncodeOptions {
    EncodeOptions {
        capacity_target: CapacityTarget::DataCodewordBits,
    }
}

fn request(data: impl Into<Payload>, version: u8, ec_level: EcLevel) -> EncodeRequest {
    EncodeRequest::new(data)
        .with_version(v(version))
        .with_ec_level(ec_level)
}

/// Test the single digit reference case at version 1
#[test]
fn test_encode_single_digit_version_1() {
    let encoded = encode_detailed(&request(8u64, 1, EcLevel::L), nibbles()).unwrap();
    let bits = encoded.bits().as_str();

    assert_eq!(&bits[..4], "0001", "mode indicator");
    assert_eq!(&bits[4..14], "0000000001", "character count");
    assert_eq!(&bits[14..18], "1000", "data");
    assert_eq!(&bits[18..22], "0000", "terminator");
    assert_eq!(&bits[22..24], "00", "alignment");
    assert_eq!(encoded.mode(), Mode::Numeric);
    assert_eq!(encoded.capacity_target_bits(), 104);
    assert_eq!(bits.len(), 104);
}

/// ISO/IEC 18004 alphanumeric example "AC-42", version 1-L
#[test]
fn test_encode_iso_alphanumeric_example() {
    let encoded = encode_detailed(&request("AC-42", 1, EcLevel::L), nibbles()).unwrap();
    assert_eq!(
        encoded.codewords(),
        vec![
            0b0010_0000,
            0b0010_1001,
            0b1100_1110,
            0b1110_0111,
            0b0010_0001,
            0b0000_0000,
            0xEC,
            0x11,
            0xEC,
            0x11,
            0xEC,
            0x11,
            0xEC,
        ]
    );
}

#[test]
fn test_encode_numeric_groups() {
    // 123 | 456 | 78
    let encoded = encode_detailed(&request(12345678u64, 1, EcLevel::L), nibbles()).unwrap();
    assert_eq!(
        encoded.codewords()[..6],
        [0x10, 0x20, 0x7B, 0x72, 0x27, 0x00]
    );
}

#[test]
fn test_alphanumeric_pair_field() {
    let encoded = encode_detailed(&request("AB", 1, EcLevel::L), nibbles()).unwrap();
    let bits = encoded.bits().as_str();
    assert_eq!(&bits[..4], "0010");
    assert_eq!(&bits[4..13], "000000010");
    assert_eq!(&bits[13..24], "00111001101");
}

#[test]
fn test_numeric_count_indicator_width() {
    // (version, width)
    let cases = [(1, 10), (5, 10), (9, 10), (10, 12), (26, 12), (27, 14), (40, 14)];
    for (version, width) in cases {
        let encoded = encode_detailed(&request(42u64, version, EcLevel::L), nibbles()).unwrap();
        let bits = encoded.bits().as_str();
        let count = &bits[4..4 + width];
        assert_eq!(
            count,
            format!("{:0width$b}", 2),
            "version {version} should use a {width}-bit count"
        );
        // A 2-digit remainder always takes 7 bits
        assert_eq!(&bits[4 + width..4 + width + 7], "0101010");
    }
}

#[test]
fn test_alphanumeric_count_indicator_width() {
    let cases = [(1, 9), (10, 11), (27, 13)];
    for (version, width) in cases {
        let encoded = encode_detailed(&request("A", version, EcLevel::L), nibbles()).unwrap();
        let bits = encoded.bits().as_str();
        assert_eq!(&bits[4..4 + width], format!("{:0width$b}", 1));
        assert_eq!(&bits[4 + width..4 + width + 6], "001010");
    }
}

#[test]
fn test_streams_are_aligned_and_reach_capacity() {
    let payloads: Vec<Payload> = vec![
        Payload::Numeric(0),
        Payload::Numeric(8),
        Payload::Numeric(u64::MAX),
        Payload::Alphanumeric(String::new()),
        Payload::Alphanumeric("HELLO WORLD".into()),
        Payload::Alphanumeric("https://example.com/a-b".to_uppercase()),
    ];
    for options in [nibbles(), data_bits()] {
        for n in 1..=40 {
            for level in EcLevel::ALL {
                for payload in &payloads {
                    let req = request(payload.clone(), n, level);
                    let encoded = encode_detailed(&req, options).unwrap();
                    let target = capacity_target_bits(v(n), level, options.capacity_target);
                    let len = encoded.bits().len();
                    assert_eq!(len % 8, 0, "{req:?}");
                    assert!(len >= target, "{req:?}: {len} < {target}");
                }
            }
        }
    }
}

#[test]
fn test_mode_indicators() {
    for n in [0u64, 7, 1234, 9_876_543_210] {
        let encoded = encode_detailed(&request(n, 3, EcLevel::M), nibbles()).unwrap();
        assert!(encoded.bits().as_str().starts_with("0001"));
    }
    for text in ["A", "HELLO", "$%*+-./:", "lower case"] {
        let encoded = encode_detailed(&request(text, 3, EcLevel::M), nibbles()).unwrap();
        assert!(encoded.bits().as_str().starts_with("0010"));
    }
}

#[test]
fn test_encoding_is_deterministic() {
    let req = request("DETERMINISM 101", 4, EcLevel::Q);
    let first = encode_detailed(&req, data_bits()).unwrap();
    let second = encode_detailed(&req, data_bits()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_long_input_is_not_padded() {
    // 4 + 9 + 24 * 11 + 6 + 4 = 287 bits, far above the 104-bit target
    let text = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789ABCDEFGHIJKLM";
    let encoded = encode_detailed(&request(text, 1, EcLevel::L), nibbles()).unwrap();
    assert_eq!(encoded.bits().len(), 288);
    assert!(encoded.bits().as_str().ends_with("00000"));
}

#[test]
fn test_character_not_in_alphabet() {
    let result = encode_detailed(&request("hello, world", 1, EcLevel::L), nibbles());
    assert_eq!(
        result,
        Err(EncodeError::CharacterNotInAlphabet {
            character: ',',
            position: 5,
        })
    );
}

#[test]
fn test_bytes_payload_is_unsupported() {
    let result = encode_detailed(&request(&b"\x00\x01"[..], 1, EcLevel::L), nibbles());
    assert_eq!(
        result,
        Err(EncodeError::UnsupportedInputType { kind: "byte" })
    );
}

#[test]
fn test_invalid_version() {
    assert_eq!(Version::new(0), Err(EncodeError::InvalidVersion(0)));
    assert_eq!(Version::new(41), Err(EncodeError::InvalidVersion(41)));
}

#[test]
fn test_batch_matches_sequential() {
    let requests = vec![
        request(8u64, 1, EcLevel::L),
        request("HELLO", 2, EcLevel::M),
        request("BAD#", 1, EcLevel::L),
        request(vec![1u8, 2, 3], 1, EcLevel::L),
        request(31415926535u64, 12, EcLevel::H),
    ];
    let batch = encode_batch(&requests);
    assert_eq!(batch.len(), requests.len());
    for (req, result) in requests.iter().zip(&batch) {
        let sequential = qr_bitstream::encode(req);
        assert_eq!(result, &sequential);
    }
    assert!(batch[0].is_ok());
    assert!(matches!(
        batch[2],
        Err(EncodeError::CharacterNotInAlphabet { character: '#', position: 3 })
    ));
    assert!(matches!(
        batch[3],
        Err(EncodeError::UnsupportedInputType { .. })
    ));
}
