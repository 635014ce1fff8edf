// Word tokenization: turns a line of text into countable words.
//
// A line is case-folded first, then split on every run of characters that
// are not ASCII letters, digits or underscore. Only fragments made purely of
// ASCII letters count as words; anything carrying a digit or an underscore is
// dropped without complaint.

use std::sync::LazyLock;

use regex_lite::Regex;

/// Runs of non-word characters. regex-lite classes are ASCII-only, so any
/// non-ASCII character is a separator too.
static NON_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("separator pattern is valid"));

/// How lines are counted while a vector is being built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMode {
    /// The whole input is one logical line, provided it has any content.
    SingleLogicalLine,
    /// Every line the source yields counts, empty ones included.
    PerPhysicalLine,
}

/// The token validity predicate: one or more ASCII letters, nothing else.
pub fn is_word(fragment: &str) -> bool {
    !fragment.is_empty() && fragment.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Case-fold a line the way every entry point does before splitting.
pub fn fold(line: &str) -> String {
    line.to_lowercase()
}

/// Iterate the valid words of an already folded line.
pub fn words(folded: &str) -> impl Iterator<Item = &str> {
    NON_WORD.split(folded).filter(|fragment| is_word(fragment))
}

/// Fold and split a line into owned words, in order of appearance.
#[cfg(test)]
fn tokenize(line: &str) -> Vec<String> {
    let folded = fold(line);
    words(&folded).map(str::to_owned).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_word_accepts_letters_only() {
        assert!(is_word("cat"));
        assert!(is_word("a"));
        assert!(!is_word(""));
        assert!(!is_word("cat123"));
        assert!(!is_word("snake_case"));
        assert!(!is_word("42"));
    }

    #[test]
    fn test_tokenize_folds_case_and_splits_punctuation() {
        let tokens = tokenize("The CAT, the hat; and-the bat!");
        assert_eq!(
            tokens,
            vec!["the", "cat", "the", "hat", "and", "the", "bat"]
        );
    }

    #[test]
    fn test_tokenize_drops_fragments_with_digits_or_underscores() {
        assert_eq!(tokenize("cat123 dog! 42 under_score"), vec!["dog"]);
    }

    #[test]
    fn test_non_ascii_letters_separate_words() {
        // 'é' is not a word character, so "café" leaves "caf" behind
        assert_eq!(tokenize("café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_tokenize_handles_line_breaks() {
        assert_eq!(tokenize("one\ntwo\r\nthree"), vec!["one", "two", "three"]);
    }

    #[test]
    fn test_empty_and_separator_only_lines() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  ,;:!? ").is_empty());
    }
}
