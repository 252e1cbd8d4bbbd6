//! Source scanning backend
//!
//! Uses walkdir to enumerate the input directory in file-name order

use anyhow::Result;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::error::VocabError;
use crate::core::model::{DicError, Meta, ResultItem, ResultSet, Summary};
use crate::core::paths::display_relative;
use crate::core::render::{RenderConfig, Renderer};
use crate::core::util::{fingerprint, get_mtime_ms};
use crate::flows::fatal;

/// List the files to read from `input`, sorted by file name.
///
/// Without `recursive`, every direct entry must be a readable file; a
/// subdirectory is an error. With `recursive`, subdirectories are descended
/// into and only files are returned.
pub fn list_sources(input: &Path, recursive: bool) -> Result<Vec<PathBuf>, VocabError> {
    if !input.exists() {
        return Err(VocabError::InputNotFound(input.to_path_buf()));
    }
    if !input.is_dir() {
        return Err(VocabError::InputNotDirectory(input.to_path_buf()));
    }

    let walker = WalkDir::new(input)
        .min_depth(1)
        .max_depth(if recursive { usize::MAX } else { 1 })
        .follow_links(true)
        .sort_by_file_name();

    let mut sources = Vec::new();

    for entry in walker {
        let entry = entry.map_err(|source| VocabError::List {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| input.to_path_buf()),
            source,
        })?;

        let file_type = entry.file_type();
        if file_type.is_dir() {
            if recursive {
                continue;
            }
            return Err(VocabError::NotAFile(entry.into_path()));
        }
        if !file_type.is_file() {
            return Err(VocabError::NotAFile(entry.into_path()));
        }

        sources.push(entry.into_path());
    }

    Ok(sources)
}

/// Build source result items with size, mtime and content fingerprint.
///
/// Items keep the order of `list_sources`, which is the order collect reads
/// them in, and end with a summary item. A source that cannot be read becomes
/// an error item instead of failing the scan.
pub fn scan_sources(input: &Path, recursive: bool) -> Result<ResultSet, VocabError> {
    let mut result_set = ResultSet::new();
    let mut files = 0;
    let mut bytes = 0;

    for path in list_sources(input, recursive)? {
        let item = source_item(&path, display_relative(&path, input));
        if let Some(size) = item.meta.size {
            files += 1;
            bytes += size;
        }
        result_set.push(item);
    }

    result_set.push(ResultItem::summary(Summary {
        files,
        bytes: Some(bytes),
        ..Default::default()
    }));
    Ok(result_set)
}

fn source_item(path: &Path, display: String) -> ResultItem {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            let err = VocabError::Read {
                path: path.to_path_buf(),
                source,
            };
            let mut item = ResultItem::error(DicError::new(err.code(), err.to_string()));
            item.path = Some(display);
            return item;
        }
    };

    let meta = Meta {
        mtime_ms: get_mtime_ms(path).ok(),
        size: Some(bytes.len() as u64),
        hash: Some(fingerprint(&bytes)),
    };
    ResultItem::source(display).with_meta(meta)
}

/// Run the scan command
pub fn run_scan(input: &Path, recursive: bool, config: RenderConfig) -> Result<()> {
    let result_set = scan_sources(input, recursive).map_err(fatal)?;

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
