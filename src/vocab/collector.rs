//! Vocabulary collection
//!
//! Reads every source of an input directory, merges per-file token counts into
//! one running FrequencyMap and writes the lowercased vocabulary, one token per
//! line.

use std::fs;
use std::path::{Path, PathBuf};

use crate::backends::scan::list_sources;
use crate::core::error::VocabError;
use crate::core::file_reader::{read_source, FileReadConfig, FileWarning};
use crate::core::paths::display_relative;
use crate::core::util::fingerprint;
use crate::vocab::frequency::FrequencyMap;

/// Default transcript directory
pub const DEFAULT_INPUT_DIR: &str = "/data/datasets/CommonVoice_dataset/cv-valid-train/txt/";

/// Default vocabulary file, relative to the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "test.dic";

#[derive(Debug, Clone, Default)]
pub struct CollectOptions {
    /// Descend into subdirectories instead of rejecting them
    pub recursive: bool,
    pub read_config: FileReadConfig,
}

/// What happened to one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReport {
    /// Path relative to the input directory
    pub path: String,
    pub tokens: u64,
    pub distinct: usize,
    pub lossy: bool,
    pub skipped: bool,
}

/// Outcome of reading every source
#[derive(Debug, Clone, Default)]
pub struct Collection {
    pub frequencies: FrequencyMap,
    pub sources: Vec<SourceReport>,
    pub warnings: Vec<FileWarning>,
}

impl Collection {
    pub fn files_read(&self) -> usize {
        self.sources.iter().filter(|s| !s.skipped).count()
    }

    pub fn files_skipped(&self) -> usize {
        self.sources.iter().filter(|s| s.skipped).count()
    }
}

/// Written vocabulary file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VocabularyFile {
    pub path: PathBuf,
    pub lines: usize,
    pub bytes: usize,
    /// XXH3 of the file contents
    pub fingerprint: String,
}

pub struct VocabularyCollector {
    input: PathBuf,
    options: CollectOptions,
}

impl VocabularyCollector {
    pub fn new(input: impl Into<PathBuf>, options: CollectOptions) -> Self {
        Self {
            input: input.into(),
            options,
        }
    }

    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Read every source and accumulate token counts.
    ///
    /// Sources are read one at a time in file-name order. The first fatal
    /// error aborts the whole collection.
    pub fn collect(&self) -> Result<Collection, VocabError> {
        let mut collection = Collection::default();

        for path in list_sources(&self.input, self.options.recursive)? {
            let display = display_relative(&path, &self.input);
            let read = read_source(&path, &display, &self.options.read_config)?;

            let lossy = read.lossy_conversion;
            collection.warnings.extend(read.warnings);

            let report = match read.content {
                Some(content) => {
                    let local = FrequencyMap::from_text(&content);
                    let report = SourceReport {
                        path: display,
                        tokens: local.total(),
                        distinct: local.len(),
                        lossy,
                        skipped: false,
                    };
                    collection.frequencies.merge(local);
                    report
                }
                None => SourceReport {
                    path: display,
                    tokens: 0,
                    distinct: 0,
                    lossy,
                    skipped: true,
                },
            };
            collection.sources.push(report);
        }

        Ok(collection)
    }

    /// Collect, then write the vocabulary to `output`.
    ///
    /// `output` is only touched once every source was read successfully.
    pub fn collect_and_write(
        &self,
        output: &Path,
    ) -> Result<(Collection, VocabularyFile), VocabError> {
        let collection = self.collect()?;
        let written = write_vocabulary(output, &collection.frequencies)?;
        Ok((collection, written))
    }
}

/// Vocabulary file contents: each distinct lowercased token followed by '\n'
pub fn render_vocabulary(frequencies: &FrequencyMap) -> String {
    let mut out = String::new();
    for word in frequencies.vocabulary() {
        out.push_str(&word);
        out.push('\n');
    }
    out
}

/// Create or overwrite `path` with the vocabulary of `frequencies`
pub fn write_vocabulary(
    path: &Path,
    frequencies: &FrequencyMap,
) -> Result<VocabularyFile, VocabError> {
    let contents = render_vocabulary(frequencies);

    fs::write(path, contents.as_bytes()).map_err(|source| VocabError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(VocabularyFile {
        path: path.to_path_buf(),
        lines: contents.lines().count(),
        bytes: contents.len(),
        fingerprint: fingerprint(contents.as_bytes()),
    })
}
