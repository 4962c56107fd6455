//! Encode and decode the zlib envelope that wraps tile data.
//!
//! Only a single profile is supported, the one written by the map editor:
//!
//! ```text
//! +-----+-----+=====================+---+---+---+---+
//! | CMF | FLG | raw deflate stream  |   Adler-32    |
//! +-----+-----+=====================+---+---+---+---+
//!   78    da                           (big endian)
//! ```
//!
//! Decoding validates the header (deflate, 32 KiB window, no preset
//! dictionary, header checksum), inflates the body with `flate2`, and checks
//! the inflated bytes against the trailer. Encoding always writes the same
//! header bytes regardless of how the body was compressed.
//!
//! ```
//! use jmendian::zlib::{self, Envelope, ZlibHeader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let envelope = zlib::encode(&[0x01, 0x02, 0x03, 0x04])?;
//! let parsed = Envelope::from_slice(&envelope)?;
//! assert_eq!(parsed.header(), ZlibHeader::FIXED);
//! assert_eq!(parsed.checksum(), jmendian::adler32(&[0x01, 0x02, 0x03, 0x04]));
//! assert_eq!(parsed.inflate()?, vec![0x01, 0x02, 0x03, 0x04]);
//! # Ok(())
//! # }
//! ```

mod header;
mod stream;

pub use header::*;
pub use stream::*;
