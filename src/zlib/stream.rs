use crate::adler::adler32;
use crate::errors::{Error, ErrorKind};
use crate::zlib::ZlibHeader;
use flate2::{read::DeflateDecoder, write::DeflateEncoder, Compression};
use std::io::{Read, Write};

const TRAILER_SIZE: usize = 4;

/// A borrowed view of a validated zlib envelope: header, compressed body,
/// and the big endian Adler-32 trailer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Envelope<'a> {
    header: ZlibHeader,
    body: &'a [u8],
    checksum: u32,
}

impl<'a> Envelope<'a> {
    /// Length of the Adler-32 trailer
    pub const TRAILER_SIZE: usize = TRAILER_SIZE;

    /// Smallest envelope that can hold a header and trailer
    pub const MIN_SIZE: usize = ZlibHeader::SIZE + TRAILER_SIZE;

    /// Splits the data into its regions and validates the header. The body
    /// is not inspected until [`Envelope::inflate`].
    pub fn from_slice(data: &'a [u8]) -> Result<Self, Error> {
        if data.len() < Self::MIN_SIZE {
            return Err(ErrorKind::MalformedContainer { len: data.len() }.into());
        }

        let header = ZlibHeader::from_slice(data)?;
        let (rest, trailer) = data.split_at(data.len() - TRAILER_SIZE);
        let body = &rest[ZlibHeader::SIZE..];

        // Cannot fail as the trailer is exactly four bytes
        let trailer: [u8; TRAILER_SIZE] = trailer.try_into().unwrap();
        Ok(Envelope {
            header,
            body,
            checksum: u32::from_be_bytes(trailer),
        })
    }

    /// The validated header
    pub fn header(&self) -> ZlibHeader {
        self.header
    }

    /// The raw deflate stream between the header and trailer
    pub fn body(&self) -> &'a [u8] {
        self.body
    }

    /// The Adler-32 checksum recorded in the trailer
    pub fn checksum(&self) -> u32 {
        self.checksum
    }

    /// Decompresses the body and verifies it against the trailer
    pub fn inflate(&self) -> Result<Vec<u8>, Error> {
        let mut payload = Vec::with_capacity(self.body.len().saturating_mul(4));
        DeflateDecoder::new(self.body)
            .read_to_end(&mut payload)
            .map_err(ErrorKind::InflateFailure)?;

        let actual = adler32(&payload);
        if actual != self.checksum {
            return Err(ErrorKind::PayloadChecksumMismatch {
                expected: self.checksum,
                actual,
            }
            .into());
        }

        Ok(payload)
    }
}

/// Decodes a zlib envelope into the original payload
///
/// ```
/// let envelope = jmendian::zlib::encode(b"tile").unwrap();
/// assert_eq!(jmendian::zlib::decode(&envelope).unwrap(), b"tile");
/// ```
pub fn decode(envelope: &[u8]) -> Result<Vec<u8>, Error> {
    Envelope::from_slice(envelope)?.inflate()
}

/// Encodes the payload into a zlib envelope with the fixed header
pub fn encode(payload: &[u8]) -> Result<Vec<u8>, Error> {
    let mut out = Vec::with_capacity(payload.len() / 2 + Envelope::MIN_SIZE);
    out.extend_from_slice(&ZlibHeader::FIXED.to_bytes());

    let mut encoder = DeflateEncoder::new(out, Compression::default());
    encoder
        .write_all(payload)
        .map_err(ErrorKind::DeflateFailure)?;
    let mut out = encoder.finish().map_err(ErrorKind::DeflateFailure)?;

    out.extend_from_slice(&adler32(payload).to_be_bytes());
    Ok(out)
}
