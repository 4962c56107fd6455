use crate::document::errors::{DocumentError, DocumentErrorKind};
use crate::document::map::{convert_slice, MapSummary};
use std::collections::HashMap;
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Customizes how a directory of map documents is converted
///
/// ```
/// use jmendian::document::ConvertOptions;
///
/// let options = ConvertOptions::new()
///     .with_extension("jm")
///     .with_recursive(true);
///
/// // These are the default options
/// assert_eq!(options, ConvertOptions::default());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    extension: String,
    parallel: bool,
    recursive: bool,
}

impl ConvertOptions {
    /// Creates the default options: `.jm` files, found recursively, converted
    /// in parallel when the `parallel` feature is enabled
    pub fn new() -> Self {
        ConvertOptions {
            extension: String::from("jm"),
            parallel: cfg!(feature = "parallel"),
            recursive: true,
        }
    }

    /// File extension (without the dot) of the documents to convert
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_owned();
        self
    }

    /// Convert documents on the rayon thread pool. Has no effect unless the
    /// `parallel` feature is enabled.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Descend into subdirectories
    pub fn with_recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// The configured file extension
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Returns true if documents are converted in parallel
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Returns true if subdirectories are searched
    pub fn recursive(&self) -> bool {
        self.recursive
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// The outcome of converting a single document
#[derive(Debug)]
pub struct ConversionReport {
    input: PathBuf,
    output: PathBuf,
    result: Result<MapSummary, DocumentError>,
}

impl ConversionReport {
    /// The document that was read
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Where the converted document was (or would have been) written
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// The summary of the converted document or the reason it failed
    pub fn result(&self) -> Result<&MapSummary, &DocumentError> {
        self.result.as_ref()
    }

    /// Returns true if the document was converted and written
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Consume the report and return the conversion result
    pub fn into_result(self) -> Result<MapSummary, DocumentError> {
        self.result
    }
}

/// Finds the documents with the configured extension under the directory,
/// sorted by path
pub fn find_map_files(dir: &Path, options: &ConvertOptions) -> Result<Vec<PathBuf>, DocumentError> {
    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let extension = OsStr::new(options.extension.as_str());

    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(max_depth) {
        let entry = entry?;
        if entry.file_type().is_file() && entry.path().extension() == Some(extension) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// The path a converted document is written to: the input file stem with
/// the extension appended, directly under the output directory
pub fn output_path(input: &Path, output_dir: &Path, extension: &str) -> PathBuf {
    let mut name = input.file_stem().unwrap_or_default().to_os_string();
    name.push(".");
    name.push(extension);
    output_dir.join(name)
}

/// Reads a document, flips its tile data, and writes the result to `output`
pub fn convert_file(input: &Path, output: &Path) -> Result<MapSummary, DocumentError> {
    let data = fs::read(input).map_err(|e| DocumentError::from(e).with_path(input))?;
    let (converted, summary) = convert_slice(&data).map_err(|e| e.with_path(input))?;
    fs::write(output, converted).map_err(|e| DocumentError::from(e).with_path(output))?;
    Ok(summary)
}

/// Converts every document found under `input`, writing the results flat
/// into `output`
///
/// Both directories must already exist. Documents are converted
/// independently: a failure is recorded in that document's report and the
/// rest continue. Reports are returned in path order.
pub fn convert_directory(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<Vec<ConversionReport>, DocumentError> {
    for dir in [input, output] {
        if !dir.is_dir() {
            return Err(DocumentError::from(DocumentErrorKind::NotADirectory).with_path(dir));
        }
    }

    let files = find_map_files(input, options)?;
    let mut claimed: HashMap<PathBuf, PathBuf> = HashMap::with_capacity(files.len());
    let jobs: Vec<Job> = files
        .into_iter()
        .map(|file| {
            let target = output_path(&file, output, &options.extension);
            let duplicate_of = match claimed.get(&target) {
                Some(first) => Some(first.clone()),
                None => {
                    claimed.insert(target.clone(), file.clone());
                    None
                }
            };

            Job {
                input: file,
                output: target,
                duplicate_of,
            }
        })
        .collect();

    Ok(run_jobs(jobs, options.parallel))
}

struct Job {
    input: PathBuf,
    output: PathBuf,
    duplicate_of: Option<PathBuf>,
}

impl Job {
    fn run(self) -> ConversionReport {
        let result = match self.duplicate_of {
            Some(first) => Err(
                DocumentError::from(DocumentErrorKind::DuplicateOutput { first })
                    .with_path(&self.input),
            ),
            None => convert_file(&self.input, &self.output),
        };

        ConversionReport {
            input: self.input,
            output: self.output,
            result,
        }
    }
}

#[cfg(feature = "parallel")]
fn run_jobs(jobs: Vec<Job>, parallel: bool) -> Vec<ConversionReport> {
    use rayon::prelude::*;

    if parallel {
        jobs.into_par_iter().map(Job::run).collect()
    } else {
        jobs.into_iter().map(Job::run).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn run_jobs(jobs: Vec<Job>, _parallel: bool) -> Vec<ConversionReport> {
    jobs.into_iter().map(Job::run).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case("maps/forest.jm", "out/forest.jm")]
    #[case("maps/deep/cave.jm", "out/cave.jm")]
    #[case("maps/castle.v2.jm", "out/castle.v2.jm")]
    fn test_output_path(#[case] input: &str, #[case] expected: &str) {
        let actual = output_path(Path::new(input), Path::new("out"), "jm");
        assert_eq!(actual, PathBuf::from(expected));
    }

    #[test]
    fn test_options_builder() {
        let options = ConvertOptions::new()
            .with_extension(".json")
            .with_parallel(false)
            .with_recursive(false);
        assert_eq!(options.extension(), "json");
        assert!(!options.parallel());
        assert!(!options.recursive());
        assert_eq!(ConvertOptions::default().extension(), "jm");
    }

    #[test]
    fn test_missing_directory() {
        let options = ConvertOptions::new();
        let err = convert_directory(
            Path::new("definitely/not/here"),
            Path::new("."),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err.kind(), DocumentErrorKind::NotADirectory));
        assert_eq!(err.path(), Some(Path::new("definitely/not/here")));
    }
}
