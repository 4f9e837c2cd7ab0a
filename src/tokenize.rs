//! Splitting of raw text into words

use crate::Word;
use regex::Regex;
use std::{borrow::Cow, sync::OnceLock};

/// Extract lowercase words from raw text, in order of appearance
///
/// Words are maximal runs of word characters (letters, digits and connector
/// punctuation like `_`). Integer literals are dropped, but mixed tokens such
/// as `abc123` are kept whole. Duplicates are preserved.
pub fn words(text: &str) -> Vec<Word> {
    let words = separator()
        .split(text)
        .filter(|candidate| {
            if candidate.is_empty() {
                return false;
            }
            if is_integer(candidate) {
                log::trace!("Rejected numeric token {candidate:?}");
                return false;
            }
            true
        })
        .map(|word| fold_case(word).into_owned().into_boxed_str())
        .collect::<Vec<_>>();
    log::debug!("Extracted {} words from {} bytes of text", words.len(), text.len());
    words
}

/// Case-insensitive identity of a word
///
/// Two words are the same word when their lowercase forms are equal, codepoint
/// by codepoint. Words that are already lowercase are borrowed as-is.
pub fn fold_case(word: &str) -> Cow<'_, str> {
    if word.chars().flat_map(char::to_lowercase).eq(word.chars()) {
        Cow::Borrowed(word)
    } else {
        Cow::Owned(word.to_lowercase())
    }
}

/// Truth that a token is an integer literal
pub fn is_integer(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Runs of non-word characters
fn separator() -> &'static Regex {
    static LAZY: OnceLock<Regex> = OnceLock::new();
    LAZY.get_or_init(|| Regex::new(r"\W+").expect("word separator regex should be valid"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words_of(text: &str) -> Vec<String> {
        words(text).into_iter().map(String::from).collect()
    }

    #[test]
    fn drops_numbers_and_punctuation() {
        assert_eq!(
            words_of("The cat sat on the 42 mat. The CAT ran."),
            ["the", "cat", "sat", "on", "the", "mat", "the", "cat", "ran"]
        );
    }

    #[test]
    fn keeps_alphanumeric_tokens_whole() {
        assert_eq!(words_of("abc123 123abc 007 x_1"), ["abc123", "123abc", "x_1"]);
    }

    #[test]
    fn long_digit_runs_are_still_numbers() {
        assert_eq!(words_of("12345678901234567890 word"), ["word"]);
    }

    #[test]
    fn edges_produce_no_empty_tokens() {
        assert_eq!(words_of("  ...Hello,   World!!  "), ["hello", "world"]);
        assert!(words_of("").is_empty());
        assert!(words_of(" ,;. \n\t").is_empty());
    }

    #[test]
    fn lowercases_non_ascii_letters() {
        assert_eq!(words_of("Éclair ÜBER straße"), ["éclair", "über", "straße"]);
    }

    #[test]
    fn tokens_are_lowercase_non_numeric_word_characters() {
        let text = "Mixed CASE, digits 9 and 10, under_score; Ünïcödé-TEXT 3rd!";
        for word in words(text) {
            assert!(!word.is_empty());
            assert!(!is_integer(&word));
            assert_eq!(word.to_lowercase(), &*word);
            assert!(word.chars().all(|c| c.is_alphanumeric() || c == '_'));
        }
    }

    #[test]
    fn folding_only_lowercases() {
        assert!(matches!(fold_case("strasse"), Cow::Borrowed("strasse")));
        assert_eq!(fold_case("STRASSE"), "strasse");
        assert_eq!(fold_case("Straße"), "straße");
        assert_ne!(fold_case("straße"), fold_case("strasse"));
        assert_ne!(fold_case("ς"), fold_case("σ"));
    }

    #[test]
    fn integer_detection() {
        assert!(is_integer("0"));
        assert!(is_integer("42"));
        assert!(!is_integer(""));
        assert!(!is_integer("4x"));
        assert!(!is_integer("-1"));
    }
}
