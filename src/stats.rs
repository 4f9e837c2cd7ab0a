//! Word usage statistics

use crate::{tokenize, Word};
use std::{
    borrow::Cow,
    collections::{hash_map, HashMap},
};

/// Number of case-insensitive occurences of a word
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FrequencyRecord {
    /// First casing under which the word was seen
    pub word: Word,

    /// Number of occurences across all casings
    pub count: usize,
}

/// Find the most frequent word, ignoring case
///
/// When several words share the top count, the one that was seen first wins.
/// An empty word list yields an empty word with a count of zero.
pub fn most_frequent(words: &[Word]) -> FrequencyRecord {
    let mut stats = WordStats::new();
    for word in words {
        stats.add_word(word);
    }
    // Only a strictly higher count may displace the current leader
    let top = (stats.finish().into_iter())
        .fold(None, |top: Option<FrequencyRecord>, record| match top {
            Some(best) if best.count >= record.count => Some(best),
            _ => Some(record),
        })
        .unwrap_or_default();
    log::debug!("Most frequent word is {:?} with {} occurences", top.word, top.count);
    top
}

/// Accumulator of per-word occurence counts
///
/// Case equivalence classes are kept in order of first appearance.
#[derive(Debug, Default)]
pub struct WordStats<'words> {
    /// Position of each case equivalence class in `records`
    classes: HashMap<Cow<'words, str>, usize>,

    /// Counts for each case equivalence class, in order of first appearance
    records: Vec<FrequencyRecord>,
}
//
impl<'words> WordStats<'words> {
    /// Set up the accumulator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurence of a word
    pub fn add_word(&mut self, word: &'words str) {
        match self.classes.entry(tokenize::fold_case(word)) {
            hash_map::Entry::Occupied(o) => self.records[*o.get()].count += 1,
            hash_map::Entry::Vacant(v) => {
                log::trace!("New case equivalence class for {word:?}");
                v.insert(self.records.len());
                self.records.push(FrequencyRecord {
                    word: word.into(),
                    count: 1,
                });
            }
        }
    }

    /// Export per-word counts, in order of first appearance
    pub fn finish(self) -> Vec<FrequencyRecord> {
        self.records
    }
}
