use std::path::{Path, PathBuf};

/// Error type for map document and directory operations
#[derive(Debug)]
pub struct DocumentError {
    path: Option<PathBuf>,
    kind: DocumentErrorKind,
}

impl DocumentError {
    /// Return the specific type of error
    pub fn kind(&self) -> &DocumentErrorKind {
        &self.kind
    }

    /// The file or directory being processed when the error occurred
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub(crate) fn with_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.path.get_or_insert_with(|| path.into());
        self
    }
}

impl From<DocumentErrorKind> for DocumentError {
    fn from(kind: DocumentErrorKind) -> Self {
        DocumentError { path: None, kind }
    }
}

impl From<std::io::Error> for DocumentError {
    fn from(error: std::io::Error) -> Self {
        DocumentErrorKind::Io(error).into()
    }
}

impl From<serde_json::Error> for DocumentError {
    fn from(error: serde_json::Error) -> Self {
        DocumentErrorKind::Json(error).into()
    }
}

impl From<base64::DecodeError> for DocumentError {
    fn from(error: base64::DecodeError) -> Self {
        DocumentErrorKind::Base64(error).into()
    }
}

impl From<crate::Error> for DocumentError {
    fn from(error: crate::Error) -> Self {
        DocumentErrorKind::Codec(error).into()
    }
}

impl From<walkdir::Error> for DocumentError {
    fn from(error: walkdir::Error) -> Self {
        let path = error.path().map(Path::to_path_buf);
        DocumentError {
            path,
            kind: DocumentErrorKind::Walk(error),
        }
    }
}

/// Specific kind of document error
#[derive(Debug)]
pub enum DocumentErrorKind {
    /// IO error while reading or writing a file
    Io(std::io::Error),

    /// The document is not valid JSON or a required field is missing or
    /// has the wrong type
    Json(serde_json::Error),

    /// The root of the document is not a JSON object
    NotAnObject,

    /// The tile data is not valid base64
    Base64(base64::DecodeError),

    /// The tile data could not be decoded, transformed, or encoded
    Codec(crate::Error),

    /// The path is not an existing directory
    NotADirectory,

    /// Another input already writes to the same output file
    DuplicateOutput { first: PathBuf },

    /// Error while traversing a directory
    Walk(walkdir::Error),
}

impl std::error::Error for DocumentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            DocumentErrorKind::Io(err) => Some(err),
            DocumentErrorKind::Json(err) => Some(err),
            DocumentErrorKind::Base64(err) => Some(err),
            DocumentErrorKind::Codec(err) => Some(err),
            DocumentErrorKind::Walk(err) => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for DocumentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: ", path.display())?;
        }

        match &self.kind {
            DocumentErrorKind::Io(err) => write!(f, "IO error: {}", err),
            DocumentErrorKind::Json(err) => write!(f, "JSON error: {}", err),
            DocumentErrorKind::NotAnObject => write!(f, "document root is not an object"),
            DocumentErrorKind::Base64(err) => write!(f, "invalid base64 tile data: {}", err),
            DocumentErrorKind::Codec(err) => write!(f, "tile data error: {}", err),
            DocumentErrorKind::NotADirectory => write!(f, "not a directory"),
            DocumentErrorKind::DuplicateOutput { first } => write!(
                f,
                "output name already used by {}",
                first.display()
            ),
            DocumentErrorKind::Walk(err) => write!(f, "directory traversal error: {}", err),
        }
    }
}
