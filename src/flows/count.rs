//! Count flow - Token frequencies of an input directory
//!
//! Surfaces the per-token counts that the collect command computes but does
//! not write.

use anyhow::Result;
use std::path::Path;

use crate::core::model::{ResultItem, ResultSet, Summary};
use crate::core::render::{RenderConfig, Renderer};
use crate::flows::fatal;
use crate::vocab::collector::{CollectOptions, Collection, VocabularyCollector};

/// Ordering of token items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CountOrder {
    /// First-encounter order, same as the vocabulary file
    #[default]
    First,
    /// Highest count first; ties keep first-encounter order
    Count,
    /// Lexicographic by token
    Alpha,
}

impl std::str::FromStr for CountOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "first" => Ok(CountOrder::First),
            "count" => Ok(CountOrder::Count),
            "alpha" => Ok(CountOrder::Alpha),
            _ => Err(format!("Unknown count order: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub order: CountOrder,
    pub min_count: u64,
    pub top: Option<usize>,
    /// Merge tokens differing only by case before counting
    pub fold_case: bool,
}

/// Convert a collection to token items, one error item per warning and a
/// closing summary item.
///
/// The summary counts every token, including those cut by `min_count` and `top`.
pub fn count_tokens(collection: Collection, options: &CountOptions) -> ResultSet {
    let files = collection.files_read();
    let skipped = collection.files_skipped();
    let frequencies = if options.fold_case {
        collection.frequencies.fold_case()
    } else {
        collection.frequencies
    };
    let summary = Summary {
        files,
        skipped: Some(skipped),
        tokens: Some(frequencies.total()),
        distinct: Some(frequencies.len()),
        bytes: None,
    };

    let mut counts: Vec<(&str, u64)> = frequencies
        .iter()
        .filter(|(_, count)| *count >= options.min_count)
        .collect();

    match options.order {
        CountOrder::First => {}
        // sort_by is stable, so equal counts stay in first-encounter order
        CountOrder::Count => counts.sort_by(|a, b| b.1.cmp(&a.1)),
        CountOrder::Alpha => counts.sort_by(|a, b| a.0.cmp(b.0)),
    }

    if let Some(top) = options.top {
        counts.truncate(top);
    }

    let mut result_set: ResultSet = counts
        .into_iter()
        .map(|(token, count)| ResultItem::token(token, count))
        .collect();
    result_set.extend(collection.warnings.iter().map(|w| w.to_result_item()));
    result_set.push(ResultItem::summary(summary));
    result_set
}

/// Run the count command
pub fn run_count(
    input: &Path,
    collect_options: CollectOptions,
    options: &CountOptions,
    config: RenderConfig,
) -> Result<()> {
    let collection = VocabularyCollector::new(input, collect_options)
        .collect()
        .map_err(fatal)?;

    let result_set = count_tokens(collection, options);

    let renderer = Renderer::with_config(config);
    println!("{}", renderer.render(&result_set));

    Ok(())
}
