//! Vocab module - Tokenization, frequency counting and vocabulary output
//!
//! Provides:
//! - tokens: Whitespace tokenization and output normalization
//! - frequency: Insertion-ordered token frequency map
//! - collector: Read an input directory and write the vocabulary file

pub mod collector;
pub mod frequency;
pub mod tokens;
