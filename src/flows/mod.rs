//! Flows module - Command handlers built on the vocab collector
//!
//! Provides:
//! - collect: Write the vocabulary file
//! - count: Token frequencies as a result set

pub mod collect;
pub mod count;

use crate::core::error::VocabError;

/// Wrap a collection error for the command layer, prefixed with its stable code
pub fn fatal(err: VocabError) -> anyhow::Error {
    let code = err.code();
    anyhow::Error::new(err).context(format!("{}: vocabulary collection aborted", code))
}
