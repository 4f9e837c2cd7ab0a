//! Deduplication and ordering of words

use crate::{order::SortOrder, tokenize, Word};
use std::collections::HashSet;

/// Collapse case-equivalent words and sort the survivors
///
/// Each case equivalence class is represented by the casing of its first
/// occurrence. Words are compared by the codepoints of their lowercase form,
/// without any locale-specific collation.
pub fn unique_sorted(words: &[Word], order: SortOrder) -> Vec<Word> {
    let mut seen = HashSet::with_capacity(words.len());
    let mut unique = words
        .iter()
        .filter_map(|word| {
            let key = tokenize::fold_case(word);
            seen.insert(key.clone()).then_some((key, word))
        })
        .collect::<Vec<_>>();
    log::debug!("Kept {} unique words out of {}", unique.len(), words.len());
    unique.sort_unstable_by(|(a, _), (b, _)| match order {
        SortOrder::Ascending => a.cmp(b),
        SortOrder::Descending => b.cmp(a),
    });
    unique.into_iter().map(|(_key, word)| word.clone()).collect()
}
