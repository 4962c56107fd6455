/*!

Flip the byte order of the tile data stored in `.jm` map documents.

A `.jm` map stores its tiles as a sequence of two byte tile codes that are
deflated, wrapped in a zlib envelope, base64 encoded, and embedded in a
JSON document. This crate provides each layer:

- [`adler32`]: the Adler-32 checksum used by the envelope trailer
- [`zlib`]: decode and encode the envelope (one fixed profile only)
- [`swap_pairs`] / [`swap_pairs_in_place`]: reverse each two byte tile code
- [`document`]: parse, convert, and write map documents and directories
  of them (requires the `document` feature, enabled by default)

## Quick Start

```rust
use jmendian::{swap_pairs_in_place, zlib};

# fn main() -> Result<(), jmendian::Error> {
let tiles = [0x01, 0x00, 0x2a, 0x00];
let envelope = zlib::encode(&tiles)?;

let mut decoded = zlib::decode(&envelope)?;
swap_pairs_in_place(&mut decoded)?;
assert_eq!(decoded, [0x00, 0x01, 0x00, 0x2a]);

let flipped = zlib::encode(&decoded)?;
assert_eq!(&flipped[..2], &[0x78, 0xda]);
# Ok(())
# }
```

Conversions share no state, so any number of them can run at once. With
the `parallel` feature, [`document::convert_directory`] spreads documents
across a rayon thread pool.

## Caveats

The envelope codec is not a general zlib implementation. It accepts only
deflate streams with a 32 KiB window and no preset dictionary, and every
envelope it writes starts with `78 da` no matter how the body was
compressed.

*/

#![forbid(unsafe_code)]

mod adler;
mod errors;
mod swap;
pub mod zlib;

#[cfg(feature = "document")]
pub mod document;

pub use self::adler::{adler32, Adler32};
pub use self::errors::*;
pub use self::swap::{swap_pairs, swap_pairs_in_place};
