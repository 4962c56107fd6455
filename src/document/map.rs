use crate::document::errors::{DocumentError, DocumentErrorKind};
use crate::{swap_pairs_in_place, zlib};
use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{de::IgnoredAny, Deserialize};
use serde_json::Value;
use std::io::Write;

const DATA_FIELD: &str = "data";

/// The fields of a map document that are interpreted. Everything else is
/// carried through untouched.
#[derive(Deserialize)]
struct MapFields<'a> {
    width: i32,
    height: i32,
    dict: Vec<IgnoredAny>,
    #[allow(dead_code)]
    data: &'a str,
}

/// Dimensions and sizes reported for a converted map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSummary {
    /// Map width in tiles
    pub width: i32,

    /// Map height in tiles
    pub height: i32,

    /// Number of entries in the tile dictionary
    pub dict_len: usize,

    /// Length of the decoded tile data in bytes
    pub data_len: usize,
}

impl std::fmt::Display for MapSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[width: {}, height: {}, dict: {}, data: {}]",
            self.width, self.height, self.dict_len, self.data_len
        )
    }
}

/// A parsed `.jm` map document
///
/// The document keeps every field it was parsed with, in order, so that
/// writing it back only changes the tile data.
///
/// ```
/// use jmendian::document::MapDocument;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let envelope = jmendian::zlib::encode(&[0x01, 0x00, 0x02, 0x00])?;
/// let mut doc = MapDocument::from_slice(br#"{"width":2,"height":1,"dict":[{},{}],"data":""}"#)?;
/// doc.set_envelope(&envelope);
///
/// let summary = doc.flip_tiles()?;
/// assert_eq!(summary.to_string(), "[width: 2, height: 1, dict: 2, data: 4]");
/// assert_eq!(jmendian::zlib::decode(&doc.envelope()?)?, vec![0x00, 0x01, 0x00, 0x02]);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MapDocument {
    root: Value,
    width: i32,
    height: i32,
    dict_len: usize,
}

impl MapDocument {
    /// Parses a map document from JSON bytes
    pub fn from_slice(data: &[u8]) -> Result<Self, DocumentError> {
        let root: Value = serde_json::from_slice(data)?;
        if !root.is_object() {
            return Err(DocumentErrorKind::NotAnObject.into());
        }

        let fields = MapFields::deserialize(&root)?;
        let (width, height, dict_len) = (fields.width, fields.height, fields.dict.len());
        Ok(MapDocument {
            root,
            width,
            height,
            dict_len,
        })
    }

    /// Map width in tiles
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Map height in tiles
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Number of entries in the tile dictionary
    pub fn dict_len(&self) -> usize {
        self.dict_len
    }

    /// The base64 text of the tile data
    pub fn data(&self) -> &str {
        self.root
            .get(DATA_FIELD)
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    /// Decodes the base64 tile data into the raw zlib envelope
    pub fn envelope(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(STANDARD.decode(self.data())?)
    }

    /// Replaces the tile data with the base64 encoding of the envelope. The
    /// field keeps its position in the document.
    pub fn set_envelope(&mut self, envelope: &[u8]) {
        if let Some(fields) = self.root.as_object_mut() {
            fields.insert(DATA_FIELD.to_owned(), Value::String(STANDARD.encode(envelope)));
        }
    }

    /// Decodes the tile data, flips the byte order of each tile code, and
    /// re-encodes it. The document is left unchanged on failure.
    pub fn flip_tiles(&mut self) -> Result<MapSummary, DocumentError> {
        let envelope = self.envelope()?;
        let mut tiles = zlib::decode(&envelope)?;
        swap_pairs_in_place(&mut tiles)?;
        let envelope = zlib::encode(&tiles)?;
        self.set_envelope(&envelope);
        Ok(self.summary(tiles.len()))
    }

    /// Summarizes the document given the decoded tile data length
    pub fn summary(&self, data_len: usize) -> MapSummary {
        MapSummary {
            width: self.width,
            height: self.height,
            dict_len: self.dict_len,
            data_len,
        }
    }

    /// Writes the document as indented JSON
    pub fn to_writer<W>(&self, writer: W) -> Result<(), DocumentError>
    where
        W: Write,
    {
        Ok(serde_json::to_writer_pretty(writer, &self.root)?)
    }

    /// Serializes the document as indented JSON
    pub fn to_vec(&self) -> Result<Vec<u8>, DocumentError> {
        Ok(serde_json::to_vec_pretty(&self.root)?)
    }
}

/// Flips the tile data of a serialized map document and returns the new
/// serialized document
pub fn convert_slice(data: &[u8]) -> Result<(Vec<u8>, MapSummary), DocumentError> {
    let mut doc = MapDocument::from_slice(data)?;
    let summary = doc.flip_tiles()?;
    Ok((doc.to_vec()?, summary))
}
