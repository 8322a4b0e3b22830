//! Lowercasing tokenizers shared by the strategies.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Words, keeping inner apostrophes ("what's", "i'm").
static RE_WORD: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?u)\w+(?:'\w+)*").ok());

/// Index terms: runs of two or more word characters.
static RE_TERM: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"(?u)\b\w\w+\b").ok());

/// Lowercase word tokens in order of appearance. Punctuation is dropped.
pub fn words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    match RE_WORD.as_ref() {
        Some(re) => re.find_iter(&lower).map(|m| m.as_str().to_string()).collect(),
        None => split_alphanumeric(&lower).map(str::to_string).collect(),
    }
}

/// Lowercase word set, as used by subset matching.
pub fn word_set(text: &str) -> HashSet<String> {
    words(text).into_iter().collect()
}

/// Lowercase index terms for the TF-IDF vector space.
/// Single-character tokens are not terms.
pub fn terms(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    match RE_TERM.as_ref() {
        Some(re) => re.find_iter(&lower).map(|m| m.as_str().to_string()).collect(),
        None => split_alphanumeric(&lower)
            .filter(|t| t.chars().count() >= 2)
            .map(str::to_string)
            .collect(),
    }
}

fn split_alphanumeric(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '_')
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_drop_punctuation_and_lowercase() {
        assert_eq!(words("Hi there, HELLO!"), ["hi", "there", "hello"]);
    }

    #[test]
    fn words_keep_inner_apostrophes() {
        assert_eq!(words("What's the Wi-Fi?"), ["what's", "the", "wi", "fi"]);
    }

    #[test]
    fn word_set_deduplicates() {
        let set = word_set("room room ROOM service");
        assert_eq!(set.len(), 2);
        assert!(set.contains("room"));
        assert!(set.contains("service"));
    }

    #[test]
    fn terms_skip_single_characters() {
        assert_eq!(terms("Book a room, I said"), ["book", "room", "said"]);
    }

    #[test]
    fn punctuation_only_yields_nothing() {
        assert!(words("?!...").is_empty());
        assert!(terms("a ? I").is_empty());
    }
}
