use crate::error::Result;
use regex::Regex;

/// Splits page text into lowercase words of the Cyrillic alphabet.
pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r"[^а-яА-ЯёЁ\s]+")?,
        })
    }

    /// Anything outside the alphabet acts as a word break.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.regex
            .replace_all(text, " ")
            .split_whitespace()
            .map(str::to_lowercase)
            .collect()
    }
}
