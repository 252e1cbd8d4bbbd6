//! Collect flow - Write the vocabulary file for an input directory

use anyhow::Result;
use std::path::Path;

use crate::core::report::Reporter;
use crate::flows::fatal;
use crate::vocab::collector::{CollectOptions, Collection, VocabularyCollector, VocabularyFile};

/// Run the collect command
pub fn run_collect(
    input: &Path,
    output: &Path,
    options: CollectOptions,
    reporter: Reporter,
) -> Result<()> {
    let collector = VocabularyCollector::new(input, options);
    let (collection, written) = collector.collect_and_write(output).map_err(fatal)?;

    for source in &collection.sources {
        if source.skipped {
            reporter.detail(format!("{} skipped", source.path));
        } else {
            reporter.detail(format!(
                "{} ({} tokens, {} distinct{})",
                source.path,
                source.tokens,
                source.distinct,
                if source.lossy { ", lossy" } else { "" }
            ));
        }
    }
    for warning in &collection.warnings {
        reporter.warn(warning);
    }
    reporter.info(summary_line(collector.input(), &collection, &written));

    Ok(())
}

fn summary_line(input: &Path, collection: &Collection, written: &VocabularyFile) -> String {
    let mut line = format!(
        "Wrote {} words ({} bytes) to {} from {} files in {} (",
        written.lines,
        written.bytes,
        written.path.display(),
        collection.files_read(),
        input.display(),
    );
    if collection.frequencies.is_empty() {
        line.push_str("no tokens");
    } else {
        line.push_str(&format!(
            "{} tokens, {} distinct",
            collection.frequencies.total(),
            collection.frequencies.len()
        ));
    }
    let skipped = collection.files_skipped();
    if skipped > 0 {
        line.push_str(&format!(", {} skipped", skipped));
    }
    line.push_str(&format!(") [xxh3 {}]", written.fingerprint));
    line
}
