//! Source file reading strategies
//!
//! Provides consistent handling for:
//! - Non-UTF-8 files
//! - Binary files

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

use crate::core::error::VocabError;
use crate::core::model::{DicError, ResultItem};

/// Number of leading bytes inspected for null bytes
pub const BINARY_SNIFF_LEN: usize = 8192;

/// Strategy for handling non-UTF-8 or binary content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingStrategy {
    /// Fail the run
    #[default]
    Strict,
    /// Replace invalid sequences with U+FFFD and keep going
    Lossy,
    /// Leave the file out of the vocabulary
    Skip,
}

impl std::str::FromStr for EncodingStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "strict" => Ok(EncodingStrategy::Strict),
            "lossy" => Ok(EncodingStrategy::Lossy),
            "skip" => Ok(EncodingStrategy::Skip),
            _ => Err(format!("Unknown encoding strategy: {}", s)),
        }
    }
}

/// Configuration for file reading
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileReadConfig {
    /// How to handle non-UTF-8 or binary content
    pub encoding_strategy: EncodingStrategy,
}

/// Result of reading a source file
#[derive(Debug, Clone)]
pub struct FileReadResult {
    /// The file content (None when skipped)
    pub content: Option<String>,

    /// Whether lossy conversion was used
    pub lossy_conversion: bool,

    /// Warnings generated during reading
    pub warnings: Vec<FileWarning>,
}

impl FileReadResult {
    pub fn success(content: String) -> Self {
        Self {
            content: Some(content),
            lossy_conversion: false,
            warnings: Vec::new(),
        }
    }

    pub fn skipped(warning: FileWarning) -> Self {
        Self {
            content: None,
            lossy_conversion: false,
            warnings: vec![warning],
        }
    }

    pub fn with_lossy(mut self, warning: FileWarning) -> Self {
        self.lossy_conversion = true;
        self.warnings.push(warning);
        self
    }
}

/// Warning codes for file operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningCode {
    /// File was skipped due to encoding
    FileSkippedEncoding,
    /// Lossy encoding conversion used
    LossyConversion,
    /// File appears to be binary
    BinaryFile,
}

impl WarningCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::FileSkippedEncoding => "FILE_SKIPPED_ENCODING",
            WarningCode::LossyConversion => "LOSSY_CONVERSION",
            WarningCode::BinaryFile => "BINARY_FILE",
        }
    }
}

/// A structured warning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileWarning {
    pub code: WarningCode,

    pub message: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl FileWarning {
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Convert to a ResultItem (Kind::Error with warning info)
    pub fn to_result_item(&self) -> ResultItem {
        let mut item = ResultItem::error(DicError::new(self.code.as_str(), &self.message));
        item.path = self.path.clone();
        item
    }
}

/// Read a source file as text under the given configuration
///
/// `display` is the name used in warnings (usually relative to the input directory).
pub fn read_source(
    path: &Path,
    display: &str,
    config: &FileReadConfig,
) -> Result<FileReadResult, VocabError> {
    let bytes = read_file_bytes(path).map_err(|source| VocabError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let check_len = std::cmp::min(BINARY_SNIFF_LEN, bytes.len());
    if bytes[..check_len].contains(&0) {
        match config.encoding_strategy {
            EncodingStrategy::Strict => return Err(VocabError::Binary(path.to_path_buf())),
            EncodingStrategy::Skip => {
                let warning = FileWarning::new(
                    WarningCode::BinaryFile,
                    "File appears to be binary (contains null bytes)",
                )
                .with_path(display);
                return Ok(FileReadResult::skipped(warning));
            }
            EncodingStrategy::Lossy => {
                // Null bytes are valid UTF-8; fall through to conversion
            }
        }
    }

    match String::from_utf8(bytes) {
        Ok(content) => Ok(FileReadResult::success(content)),
        Err(err) => match config.encoding_strategy {
            EncodingStrategy::Strict => Err(VocabError::InvalidUtf8 {
                path: path.to_path_buf(),
                source: err,
            }),
            EncodingStrategy::Skip => {
                let warning = FileWarning::new(
                    WarningCode::FileSkippedEncoding,
                    "File contains invalid UTF-8 sequences",
                )
                .with_path(display);
                Ok(FileReadResult::skipped(warning))
            }
            EncodingStrategy::Lossy => {
                let content = String::from_utf8_lossy(err.as_bytes()).into_owned();
                let warning = FileWarning::new(
                    WarningCode::LossyConversion,
                    "Lossy UTF-8 conversion applied (some characters replaced)",
                )
                .with_path(display);
                Ok(FileReadResult::success(content).with_lossy(warning))
            }
        },
    }
}

fn read_file_bytes(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = fs::File::open(path)?;
    let size = file
        .metadata()
        .ok()
        .and_then(|m| usize::try_from(m.len()).ok())
        .unwrap_or(0);

    let mut reader = std::io::BufReader::new(file);
    let mut buffer = Vec::with_capacity(size);
    reader.read_to_end(&mut buffer)?;

    Ok(buffer)
}
