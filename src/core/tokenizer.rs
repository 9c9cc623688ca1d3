use crate::core::stopwords::ENGLISH_STOP_WORDS;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

// Words start with a letter or digit. Inner `.` `/` `-` `&` `'` keep names like
// node.js, ci/cd, r&d together; a trailing `+` or `#` keeps c++ and c#.
const WORD_PATTERN: &str = r"[\p{L}\p{N}](?:[\p{L}\p{N}_.'’/&+#-]*[\p{L}\p{N}+#])?";

static ENGLISH: Lazy<Tokenizer> = Lazy::new(Tokenizer::english);

/// Word tokenizer that drops punctuation and stop words.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    word: Regex,
    stop_words: HashSet<&'static str>,
}

impl Tokenizer {
    pub fn english() -> Self {
        Self {
            word: Regex::new(WORD_PATTERN).expect("word pattern is a valid regex"),
            stop_words: ENGLISH_STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Process-wide English tokenizer, built on first use.
    pub fn shared() -> &'static Tokenizer {
        &ENGLISH
    }

    pub fn is_stop_word(&self, word: &str) -> bool {
        self.stop_words.contains(word.to_lowercase().as_str())
    }

    /// Meaningful words of `text`, in order of appearance.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.word
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|word| !self.is_stop_word(word))
            .map(str::to_string)
            .collect()
    }

    pub fn token_set(&self, text: &str) -> HashSet<String> {
        self.tokenize(text).into_iter().collect()
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::english()
    }
}
