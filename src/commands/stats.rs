//! Dictionary statistics command

use crate::dictionary::{DictionaryIndex, LoadReport};
use crate::generator::GeneratorConfig;
use std::collections::BTreeMap;

/// Summary of a loaded dictionary
pub struct DictionaryStats {
    pub total: usize,
    pub common: usize,
    pub report: LoadReport,
    /// Word length to word count
    pub lengths: BTreeMap<usize, usize>,
    /// Category tag to word count
    pub categories: BTreeMap<String, usize>,
    /// Categories too small for the default configuration to search
    pub small_categories: Vec<String>,
}

/// Collect statistics for `index`
#[must_use]
pub fn dictionary_stats(index: &DictionaryIndex, report: LoadReport) -> DictionaryStats {
    let min_pool = GeneratorConfig::default().min_pool_words;
    let categories = index.category_counts();
    let small_categories = categories
        .iter()
        .filter(|&(_, &count)| count < min_pool)
        .map(|(name, _)| name.clone())
        .collect();

    DictionaryStats {
        total: index.len(),
        common: index.common_count(),
        report,
        lengths: index.length_histogram(),
        categories,
        small_categories,
    }
}
