//! Convert `.jm` map documents.
//!
//! A map document is a JSON object whose `data` field holds the map's tiles
//! as base64 text of a [zlib envelope](crate::zlib). The envelope inflates to
//! a sequence of two byte tile codes.
//!
//! ```text
//! {
//!   "width": 64,          <- required, integer
//!   "height": 64,         <- required, integer
//!   "dict": [ ... ],      <- required, array (entries are opaque)
//!   "data": "eNrt...",    <- required, base64 zlib envelope
//!   ...                   <- anything else is preserved as is
//! }
//! ```
//!
//! Converting a document flips the byte order of every tile code and writes
//! the document back with only the `data` field changed. [`convert_directory`]
//! applies this to every document found under a directory.

mod errors;
mod map;
mod walk;

pub use errors::*;
pub use map::*;
pub use walk::*;
