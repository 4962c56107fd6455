use std::fmt;

/// An error that can occur when decoding, encoding, or transforming tile data
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Consume the error and return the specific type of error
    pub fn into_kind(self) -> ErrorKind {
        *self.0
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error::new(kind)
    }
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// The envelope is too short to hold a header and a trailer
    MalformedContainer { len: usize },

    /// The header declares a compression method other than deflate (8)
    UnsupportedMethod { method: u8 },

    /// The header declares a window size other than 32 KiB (7)
    UnsupportedWindowSize { window: u8 },

    /// The header requests a preset dictionary
    UnsupportedFeature,

    /// The header's 16 bit value is not a multiple of 31
    HeaderChecksumMismatch { header: u16 },

    /// The deflate engine rejected the compressed body
    InflateFailure(std::io::Error),

    /// The deflate engine could not compress the payload
    DeflateFailure(std::io::Error),

    /// The decompressed payload does not match the trailer
    PayloadChecksumMismatch { expected: u32, actual: u32 },

    /// Tile data must be made of whole two byte codes
    InvalidPayloadLength { len: usize },
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match *self.0 {
            ErrorKind::InflateFailure(ref err) => Some(err),
            ErrorKind::DeflateFailure(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::MalformedContainer { len } => write!(
                f,
                "malformed container: {} bytes is shorter than the 6 byte minimum",
                len
            ),
            ErrorKind::UnsupportedMethod { method } => {
                write!(f, "unsupported compression method: {}", method)
            }
            ErrorKind::UnsupportedWindowSize { window } => {
                write!(f, "unsupported window size indicator: {}", window)
            }
            ErrorKind::UnsupportedFeature => write!(f, "preset dictionary not supported"),
            ErrorKind::HeaderChecksumMismatch { header } => {
                write!(f, "invalid header checksum (header: 0x{:04x})", header)
            }
            ErrorKind::InflateFailure(ref err) => write!(f, "unable to inflate body: {}", err),
            ErrorKind::DeflateFailure(ref err) => {
                write!(f, "unable to deflate payload: {}", err)
            }
            ErrorKind::PayloadChecksumMismatch { expected, actual } => write!(
                f,
                "invalid data checksum (expected: 0x{:08x}, actual: 0x{:08x})",
                expected, actual
            ),
            ErrorKind::InvalidPayloadLength { len } => {
                write!(f, "payload length {} is not a multiple of two", len)
            }
        }
    }
}
