//! Insertion-ordered token frequency map

use std::collections::{HashMap, HashSet};

use crate::vocab::tokens::{normalize, tokenize};

/// Token -> occurrence count, iterated in first-insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    /// Token -> position in `entries`
    index: HashMap<String, usize>,
    entries: Vec<(String, u64)>,
}

impl FrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count every whitespace-delimited token of `text`
    pub fn from_text(text: &str) -> Self {
        let mut map = Self::new();
        for token in tokenize(text) {
            map.add(token, 1);
        }
        map
    }

    /// Add `count` occurrences of `token`; new tokens are appended
    pub fn add(&mut self, token: &str, count: u64) {
        match self.index.get(token) {
            Some(&pos) => self.entries[pos].1 += count,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), count));
            }
        }
    }

    /// Merge another map into this one.
    ///
    /// Existing tokens keep their position. Tokens new to `self` are appended
    /// in `other`'s order.
    pub fn merge(&mut self, other: FrequencyMap) {
        for (token, count) in other.entries {
            match self.index.get(&token) {
                Some(&pos) => self.entries[pos].1 += count,
                None => {
                    self.index.insert(token.clone(), self.entries.len());
                    self.entries.push((token, count));
                }
            }
        }
    }

    /// Number of distinct tokens
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, count)| count).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Merge tokens that differ only by case.
    ///
    /// Each group is keyed by its lowercased form, placed where its first
    /// variant was.
    pub fn fold_case(self) -> FrequencyMap {
        let mut folded = FrequencyMap::new();
        for (token, count) in self.entries {
            folded.add(&normalize(&token), count);
        }
        folded
    }

    /// Distinct lowercased tokens in first-insertion order.
    ///
    /// Keys that lowercase to an already emitted form are dropped, so the
    /// result never holds duplicates.
    pub fn vocabulary(&self) -> Vec<String> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        self.entries
            .iter()
            .map(|(token, _)| normalize(token))
            .filter(|word| seen.insert(word.clone()))
            .collect()
    }
}

#[cfg(test)]
impl FrequencyMap {
    pub fn get(&self, token: &str) -> Option<u64> {
        self.index.get(token).map(|&pos| self.entries[pos].1)
    }
}
