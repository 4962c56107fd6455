use crate::errors::{Error, ErrorKind};
use std::io::Write;

/// The two byte zlib header (CMF and FLG)
///
/// Only one profile is accepted: deflate with a 32 KiB window and no preset
/// dictionary. See [RFC 1950](https://www.rfc-editor.org/rfc/rfc1950) for the
/// full layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ZlibHeader {
    cmf: u8,
    flg: u8,
}

impl ZlibHeader {
    pub(crate) const SIZE: usize = 2;

    /// Compression method for deflate
    pub const METHOD_DEFLATE: u8 = 8;

    /// Window size indicator for a 32 KiB window
    pub const WINDOW_32K: u8 = 7;

    const PRESET_DICTIONARY: u8 = 0x20;

    /// The header written in front of every encoded envelope.
    ///
    /// The flag byte is a fixed protocol constant and is not derived from
    /// the compression level actually used for the body.
    pub const FIXED: ZlibHeader = ZlibHeader {
        cmf: Self::METHOD_DEFLATE | (Self::WINDOW_32K << 4),
        flg: 0xda,
    };

    /// Creates a header from raw bytes without validating them
    pub const fn new(cmf: u8, flg: u8) -> Self {
        ZlibHeader { cmf, flg }
    }

    /// Parses and validates the header at the start of the data
    pub fn from_slice(data: &[u8]) -> Result<Self, Error> {
        let bytes: &[u8; Self::SIZE] = data
            .first_chunk()
            .ok_or(ErrorKind::MalformedContainer { len: data.len() })?;

        let [cmf, flg] = *bytes;
        let header = ZlibHeader::new(cmf, flg);
        header.validate()?;
        Ok(header)
    }

    /// Checks the header against the supported profile. Fields are checked
    /// in order: method, window size, dictionary, header checksum.
    pub fn validate(&self) -> Result<(), Error> {
        if self.method() != Self::METHOD_DEFLATE {
            return Err(ErrorKind::UnsupportedMethod {
                method: self.method(),
            }
            .into());
        }

        if self.window() != Self::WINDOW_32K {
            return Err(ErrorKind::UnsupportedWindowSize {
                window: self.window(),
            }
            .into());
        }

        if self.has_dictionary() {
            return Err(ErrorKind::UnsupportedFeature.into());
        }

        if !self.is_checksum_valid() {
            return Err(ErrorKind::HeaderChecksumMismatch {
                header: self.value(),
            }
            .into());
        }

        Ok(())
    }

    /// The compression method and info byte
    pub fn cmf(&self) -> u8 {
        self.cmf
    }

    /// The flag byte
    pub fn flg(&self) -> u8 {
        self.flg
    }

    /// Compression method (low nibble of CMF)
    pub fn method(&self) -> u8 {
        self.cmf & 0x0f
    }

    /// Window size indicator (high nibble of CMF)
    pub fn window(&self) -> u8 {
        self.cmf >> 4
    }

    /// Compression level hint (top two bits of FLG)
    pub fn level(&self) -> u8 {
        self.flg >> 6
    }

    /// Returns true if the header requests a preset dictionary
    pub fn has_dictionary(&self) -> bool {
        self.flg & Self::PRESET_DICTIONARY != 0
    }

    /// The header as a big endian 16 bit value
    pub fn value(&self) -> u16 {
        u16::from_be_bytes([self.cmf, self.flg])
    }

    /// Returns true if the header value is a multiple of 31
    pub fn is_checksum_valid(&self) -> bool {
        self.value() % 31 == 0
    }

    /// Returns the header bytes in wire order
    pub fn to_bytes(&self) -> [u8; 2] {
        [self.cmf, self.flg]
    }

    /// Writes the header to a writer
    pub fn write<W>(&self, mut writer: W) -> std::io::Result<()>
    where
        W: Write,
    {
        writer.write_all(&self.to_bytes())
    }
}

impl std::fmt::Display for ZlibHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:02x}{:02x} (method: {}, window: {}, level: {}, dictionary: {})",
            self.cmf,
            self.flg,
            self.method(),
            self.window(),
            self.level(),
            self.has_dictionary()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[test]
    fn test_fixed_header() {
        let header = ZlibHeader::FIXED;
        assert_eq!(header.to_bytes(), [0x78, 0xda]);
        assert_eq!(header.method(), 8);
        assert_eq!(header.window(), 7);
        assert_eq!(header.level(), 3);
        assert!(!header.has_dictionary());
        assert!(header.is_checksum_valid());
        assert_eq!(ZlibHeader::from_slice(&header.to_bytes()).unwrap(), header);
    }

    #[rstest]
    #[case([0x78, 0x01])]
    #[case([0x78, 0x5e])]
    #[case([0x78, 0x9c])]
    #[case([0x78, 0xda])]
    fn test_standard_headers(#[case] data: [u8; 2]) {
        let header = ZlibHeader::from_slice(&data).unwrap();
        assert_eq!(header.to_bytes(), data);
    }

    #[rstest]
    #[case([0x79, 0x00], "method")]
    #[case([0x7f, 0x00], "method")]
    #[case([0x68, 0x81], "window")]
    #[case([0x88, 0x00], "window")]
    #[case([0x78, 0xbb], "dictionary")]
    #[case([0x78, 0xf9], "dictionary")]
    #[case([0x78, 0xdb], "checksum")]
    #[case([0x78, 0x00], "checksum")]
    fn test_rejected_headers(#[case] data: [u8; 2], #[case] field: &str) {
        let err = ZlibHeader::from_slice(&data).unwrap_err();
        let matched = match err.kind() {
            ErrorKind::UnsupportedMethod { .. } => "method",
            ErrorKind::UnsupportedWindowSize { .. } => "window",
            ErrorKind::UnsupportedFeature => "dictionary",
            ErrorKind::HeaderChecksumMismatch { .. } => "checksum",
            x => panic!("unexpected error: {:?}", x),
        };
        assert_eq!(matched, field);
    }

    #[test]
    fn test_method_checked_before_window() {
        let err = ZlibHeader::from_slice(&[0x09, 0x00]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::UnsupportedMethod { method: 9 }
        ));
    }

    #[test]
    fn test_short_header() {
        let err = ZlibHeader::from_slice(&[0x78]).unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::MalformedContainer { len: 1 }
        ));
    }

    #[test]
    fn test_header_display() {
        assert_eq!(
            ZlibHeader::FIXED.to_string(),
            "78da (method: 8, window: 7, level: 3, dictionary: false)"
        );
    }
}
