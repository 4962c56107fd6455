//! Adler-32 checksum as used by the zlib trailer.

/// Largest prime smaller than 2^16
const MOD_ADLER: u32 = 65521;

/// Computes the Adler-32 checksum of the data
///
/// ```
/// assert_eq!(jmendian::adler32(&[0x01, 0x02, 0x03, 0x04]), 0x0018_000b);
/// assert_eq!(jmendian::adler32(b""), 1);
/// ```
pub fn adler32(data: &[u8]) -> u32 {
    let mut state = Adler32::new();
    state.update(data);
    state.finish()
}

/// Running Adler-32 state for data that arrives in pieces
///
/// Feeding the same bytes through any number of `update` calls yields the
/// same checksum as [`adler32`] over the concatenation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adler32 {
    a: u32,
    b: u32,
}

impl Adler32 {
    /// Creates the state for an empty input
    pub fn new() -> Self {
        Adler32 { a: 1, b: 0 }
    }

    /// Folds every byte of the data into the state
    pub fn update(&mut self, data: &[u8]) {
        let (mut a, mut b) = (self.a, self.b);
        for &byte in data {
            a = (a + u32::from(byte)) % MOD_ADLER;
            b = (b + a) % MOD_ADLER;
        }

        self.a = a;
        self.b = b;
    }

    /// Returns the checksum of everything seen so far
    pub fn finish(&self) -> u32 {
        (self.b << 16) | self.a
    }
}

impl Default for Adler32 {
    fn default() -> Self {
        Self::new()
    }
}
