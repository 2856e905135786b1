use std::fmt;

/// Append-only bit sequence stored as `'0'`/`'1'` characters
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: String,
}

impl BitString {
    /// Create an empty bit string
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bit string with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: String::with_capacity(bits),
        }
    }

    /// Number of bits pushed so far
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether no bits have been pushed
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether the length is a whole number of codewords
    pub fn is_byte_aligned(&self) -> bool {
        self.bits.len() % 8 == 0
    }

    /// Append a field already rendered as binary digits
    pub(crate) fn push_field(&mut self, field: &str) {
        debug_assert!(
            field.bytes().all(|b| b == b'0' || b == b'1'),
            "{field:?} is not a binary field"
        );
        self.bits.push_str(field);
    }

    /// Append `count` zero bits
    pub(crate) fn push_zeros(&mut self, count: usize) {
        self.bits.extend(std::iter::repeat_n('0', count));
    }

    /// Append one 8-bit codeword, most significant bit first
    pub(crate) fn push_codeword(&mut self, codeword: u8) {
        self.bits.push_str(&format!("{codeword:08b}"));
    }

    /// Get bit at `index`
    pub fn get(&self, index: usize) -> Option<bool> {
        self.bits.as_bytes().get(index).map(|&b| b == b'1')
    }

    /// Iterate over the bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.bytes().map(|b| b == b'1')
    }

    /// Borrow the bits as a `'0'`/`'1'` string
    pub fn as_str(&self) -> &str {
        &self.bits
    }

    /// Consume into the underlying string
    pub fn into_string(self) -> String {
        self.bits
    }

    /// Pack into big-endian codewords.
    ///
    /// A trailing partial codeword is filled with zero bits on the right.
    pub fn to_codewords(&self) -> Vec<u8> {
        self.bits
            .as_bytes()
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &b)| acc | (u8::from(b == b'1') << (7 - i)))
            })
            .collect()
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.bits)
    }
}

impl AsRef<str> for BitString {
    fn as_ref(&self) -> &str {
        &self.bits
    }
}
