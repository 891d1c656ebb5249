// src/tokens.rs
//! Word normalization and tokenization.
//!
//! Only ASCII letters are word characters. Everything else, including
//! digits, punctuation, line breaks and non-ASCII text, separates words.

/// Maps every character to a lowercase ASCII letter or a single space.
///
/// The output has exactly as many characters as the input, so runs of
/// separators stay runs of spaces; [`Tokenizer::tokenize`] collapses them.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect()
}

/// Normalizes a single query word the same way corpus words are normalized.
///
/// Input that does not tokenize to exactly one word (`"to-day"`, `"a b"`,
/// `""`) is only trimmed and lowercased. It keeps its separators, so it can
/// never name a graph node and lookups report it as unknown.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    match Tokenizer::tokenize(word).as_slice() {
        [only] => only.clone(),
        _ => word.trim().to_ascii_lowercase(),
    }
}

pub struct Tokenizer;

impl Tokenizer {
    /// Splits raw text into lowercase word tokens.
    ///
    /// Returns an empty vector for empty or all-punctuation input.
    #[must_use]
    pub fn tokenize(text: &str) -> Vec<String> {
        let mut tokens = Vec::new();
        let mut current = String::new();

        for c in text.chars() {
            if c.is_ascii_alphabetic() {
                current.push(c.to_ascii_lowercase());
            } else if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        }
        if !current.is_empty() {
            tokens.push(current);
        }

        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_preserves_length() {
        let raw = "To @ explore, NEW worlds!";
        let norm = normalize(raw);
        assert_eq!(norm.chars().count(), raw.chars().count());
        assert_eq!(norm, "to   explore  new worlds ");
    }

    #[test]
    fn test_tokenize_collapses_separators() {
        let tokens = Tokenizer::tokenize("To @ explore strange new worlds,To seek out");
        assert_eq!(
            tokens,
            vec!["to", "explore", "strange", "new", "worlds", "to", "seek", "out"]
        );
    }

    #[test]
    fn test_tokenize_flushes_last_word() {
        assert_eq!(Tokenizer::tokenize("end"), vec!["end"]);
        assert_eq!(Tokenizer::tokenize("a b"), vec!["a", "b"]);
    }

    #[test]
    fn test_tokenize_empty_inputs() {
        assert!(Tokenizer::tokenize("").is_empty());
        assert!(Tokenizer::tokenize("   ").is_empty());
        assert!(Tokenizer::tokenize("123 ?! -- 42").is_empty());
    }

    #[test]
    fn test_digits_split_words() {
        assert_eq!(Tokenizer::tokenize("abc123def"), vec!["abc", "def"]);
    }

    #[test]
    fn test_non_ascii_is_separator() {
        assert_eq!(Tokenizer::tokenize("café au lait"), vec!["caf", "au", "lait"]);
    }

    #[test]
    fn test_normalize_word() {
        assert_eq!(normalize_word("  Scientist "), "scientist");
        assert_eq!(normalize_word("New!"), "new");
        assert_eq!(normalize_word(""), "");
    }

    #[test]
    fn test_normalize_word_keeps_multi_token_input_distinct() {
        assert_eq!(Tokenizer::tokenize("To-day"), vec!["to", "day"]);
        assert_eq!(normalize_word("To-day"), "to-day");
        assert_eq!(normalize_word(" two words "), "two words");
    }
}
