//! Dictionary index
//!
//! Deduplicated entries plus lookup tables by word, length and letter. Built once
//! and shared read-only by every generation attempt.

use super::entry::DictionaryEntry;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

/// Position of an entry inside a `DictionaryIndex`
pub type EntryId = usize;

/// Read-only word/clue lookup
///
/// Entries are stored alphabetically so ids, and everything derived from them,
/// do not depend on source row order.
#[derive(Debug, Clone, Default)]
pub struct DictionaryIndex {
    entries: Vec<DictionaryEntry>,
    by_word: FxHashMap<String, EntryId>,
    by_length: FxHashMap<usize, Vec<EntryId>>,
    by_letter: FxHashMap<char, Vec<EntryId>>,
}

impl DictionaryIndex {
    /// Build an index from validated entries
    ///
    /// With a category, only entries tagged with it (case-insensitive) are kept.
    /// Duplicate words collapse to the common entry; on a tie the first one wins.
    ///
    /// # Examples
    /// ```
    /// use daily_crossword::dictionary::{DictionaryEntry, DictionaryIndex};
    ///
    /// let entries = vec![
    ///     DictionaryEntry::new("TREE", "Family diagram", false, false, ["home"]).unwrap(),
    ///     DictionaryEntry::new("TREE", "Oak or maple", true, false, ["nature"]).unwrap(),
    ///     DictionaryEntry::new("STAR", "Sun, for one", true, false, ["space"]).unwrap(),
    /// ];
    /// let index = DictionaryIndex::build(entries, None);
    ///
    /// assert_eq!(index.len(), 2);
    /// assert_eq!(index.lookup("TREE").unwrap().clue, "Oak or maple");
    /// ```
    #[must_use]
    pub fn build(
        entries: impl IntoIterator<Item = DictionaryEntry>,
        category: Option<&str>,
    ) -> Self {
        let mut chosen: BTreeMap<String, DictionaryEntry> = BTreeMap::new();

        for entry in entries {
            if category.is_some_and(|c| !entry.has_category(c)) {
                continue;
            }

            match chosen.entry(entry.word.clone()) {
                Entry::Vacant(slot) => {
                    slot.insert(entry);
                }
                Entry::Occupied(mut slot) => {
                    if entry.common && !slot.get().common {
                        slot.insert(entry);
                    }
                }
            }
        }

        Self::from_sorted(chosen.into_values().collect())
    }

    fn from_sorted(entries: Vec<DictionaryEntry>) -> Self {
        let mut by_word = FxHashMap::default();
        let mut by_length: FxHashMap<usize, Vec<EntryId>> = FxHashMap::default();
        let mut by_letter: FxHashMap<char, Vec<EntryId>> = FxHashMap::default();

        for (id, entry) in entries.iter().enumerate() {
            by_word.insert(entry.word.clone(), id);
            by_length.entry(entry.len()).or_default().push(id);

            let mut seen = [false; 26];
            for byte in entry.word.bytes() {
                let slot = usize::from(byte - b'A');
                if !seen[slot] {
                    seen[slot] = true;
                    by_letter.entry(char::from(byte)).or_default().push(id);
                }
            }
        }

        // Common entries first; the sort is stable so ties stay alphabetical
        for ids in by_length.values_mut() {
            ids.sort_by_key(|&id| !entries[id].common);
        }

        Self {
            entries,
            by_word,
            by_length,
            by_letter,
        }
    }

    /// A new index holding only the entries tagged with `category`
    #[must_use]
    pub fn with_category(&self, category: &str) -> Self {
        Self::build(
            self.entries
                .iter()
                .filter(|entry| entry.has_category(category))
                .cloned(),
            None,
        )
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in alphabetical order
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[DictionaryEntry] {
        &self.entries
    }

    /// Entry for an id handed out by this index
    ///
    /// # Panics
    /// Panics if the id did not come from this index
    #[inline]
    #[must_use]
    pub fn entry(&self, id: EntryId) -> &DictionaryEntry {
        &self.entries[id]
    }

    #[must_use]
    pub fn id_of(&self, word: &str) -> Option<EntryId> {
        self.by_word.get(word).copied()
    }

    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&DictionaryEntry> {
        self.id_of(word).map(|id| &self.entries[id])
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.by_word.contains_key(word)
    }

    /// Entries of exactly `len` letters, common first
    #[must_use]
    pub fn with_length(&self, len: usize) -> &[EntryId] {
        self.by_length.get(&len).map_or(&[], Vec::as_slice)
    }

    /// Entries containing `letter` at least once, alphabetical
    #[must_use]
    pub fn with_letter(&self, letter: char) -> &[EntryId] {
        self.by_letter.get(&letter).map_or(&[], Vec::as_slice)
    }

    /// Entry count per word length
    #[must_use]
    pub fn length_histogram(&self) -> BTreeMap<usize, usize> {
        let mut histogram = BTreeMap::new();
        for entry in &self.entries {
            *histogram.entry(entry.len()).or_insert(0) += 1;
        }
        histogram
    }

    /// Entry count per category tag
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for tag in self.entries.iter().flat_map(|entry| &entry.categories) {
            *counts.entry(tag.clone()).or_insert(0) += 1;
        }
        counts
    }

    #[must_use]
    pub fn common_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.common).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(word: &str, common: bool, categories: &[&str]) -> DictionaryEntry {
        DictionaryEntry::new(word, "clue", common, false, categories.iter().copied()).unwrap()
    }

    fn sample() -> DictionaryIndex {
        DictionaryIndex::build(
            vec![
                entry("PLANET", false, &["space"]),
                entry("GALAXY", true, &["space", "science"]),
                entry("TREE", true, &["nature"]),
                entry("ORBIT", true, &["Space"]),
                entry("BANANA", true, &["food"]),
            ],
            None,
        )
    }

    #[test]
    fn entries_are_alphabetical() {
        let index = sample();
        let words: Vec<&str> = index.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["BANANA", "GALAXY", "ORBIT", "PLANET", "TREE"]);
    }

    #[test]
    fn length_buckets_put_common_first() {
        let index = sample();
        let six: Vec<&str> = index
            .with_length(6)
            .iter()
            .map(|&id| index.entry(id).word.as_str())
            .collect();
        assert_eq!(six, vec!["BANANA", "GALAXY", "PLANET"]);
        assert!(index.with_length(9).is_empty());
    }

    #[test]
    fn letter_lists_hold_each_word_once() {
        let index = sample();
        let with_a: Vec<&str> = index
            .with_letter('A')
            .iter()
            .map(|&id| index.entry(id).word.as_str())
            .collect();
        // BANANA has three As but appears once
        assert_eq!(with_a, vec!["BANANA", "GALAXY", "PLANET"]);
        assert!(index.with_letter('Z').is_empty());
    }

    #[test]
    fn duplicates_prefer_common_entry() {
        let mut rare = entry("TREE", false, &["home"]);
        rare.clue = "Family diagram".to_string();
        let mut common = entry("TREE", true, &["nature"]);
        common.clue = "Oak or maple".to_string();
        let mut later = entry("TREE", true, &["nature"]);
        later.clue = "Later duplicate".to_string();

        let index = DictionaryIndex::build(vec![rare, common, later], None);
        assert_eq!(index.len(), 1);
        assert_eq!(index.lookup("TREE").unwrap().clue, "Oak or maple");
    }

    #[test]
    fn category_filter_is_case_insensitive() {
        let index = DictionaryIndex::build(sample().entries().to_vec(), Some("SPACE"));
        let words: Vec<&str> = index.entries().iter().map(|e| e.word.as_str()).collect();
        assert_eq!(words, vec!["GALAXY", "ORBIT", "PLANET"]);
    }

    #[test]
    fn with_category_matches_build_filter() {
        let index = sample();
        let science = index.with_category("science");
        assert_eq!(science.len(), 1);
        assert!(science.contains("GALAXY"));
        assert!(index.with_category("music").is_empty());
    }

    #[test]
    fn stats_cover_every_entry() {
        let index = sample();
        assert_eq!(index.length_histogram().values().sum::<usize>(), index.len());
        assert_eq!(index.category_counts().get("space"), Some(&3));
        assert_eq!(index.common_count(), 4);
    }

    #[test]
    fn empty_index() {
        let index = DictionaryIndex::build(Vec::new(), None);
        assert!(index.is_empty());
        assert!(index.lookup("TREE").is_none());
    }
}
