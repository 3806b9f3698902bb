use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use crate::error::{Error, Result};

/// Maps lowercase surface word forms to their canonical lemma.
///
/// Every lemma is registered as a key pointing to itself. When two lines list
/// the same form, the later line wins.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LemmaDictionary {
    forms: HashMap<String, String>,
}

impl LemmaDictionary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut dictionary = Self::new();

        for line in reader.lines() {
            dictionary.insert_line(&line?);
        }

        tracing::debug!(forms = dictionary.len(), "Loaded lemma dictionary");

        Ok(dictionary)
    }

    /// Registers one `<lemma> <form1> <form2> ...` line. Blank lines are ignored.
    pub fn insert_line(&mut self, line: &str) {
        let mut words = line.split_whitespace();

        if let Some(lemma) = words.next() {
            self.insert_group(lemma, words);
        }
    }

    pub fn insert_group<'a>(&mut self, lemma: &str, forms: impl IntoIterator<Item = &'a str>) {
        let lemma = lemma.to_lowercase();

        for form in forms {
            self.forms.insert(form.to_lowercase(), lemma.clone());
        }

        self.forms.insert(lemma.clone(), lemma);
    }

    /// Returns the lemma for `word`, or the lowercased word itself when unknown.
    pub fn lookup(&self, word: &str) -> String {
        let word = word.to_lowercase();

        self.forms.get(&word).cloned().unwrap_or(word)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.forms.contains_key(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }
}

impl FromStr for LemmaDictionary {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_forms_and_lemma_to_lemma() {
        let dictionary: LemmaDictionary = "кот кота коту котом\nбежать бежит бегу"
            .parse()
            .expect("Failed to parse dictionary");

        assert_eq!(dictionary.lookup("кота"), "кот");
        assert_eq!(dictionary.lookup("котом"), "кот");
        assert_eq!(dictionary.lookup("кот"), "кот");
        assert_eq!(dictionary.lookup("бежит"), "бежать");
        assert_eq!(dictionary.len(), 7);
    }

    #[test]
    fn lookup_is_case_insensitive() {
        let dictionary: LemmaDictionary = "кот Кота".parse().expect("Failed to parse dictionary");

        assert_eq!(dictionary.lookup("КОТА"), "кот");
        assert_eq!(dictionary.lookup("Кот"), "кот");
        assert!(dictionary.contains("кота"));
    }

    #[test]
    fn unknown_word_falls_back_to_itself() {
        let dictionary = LemmaDictionary::new();

        assert_eq!(dictionary.lookup("Собака"), "собака");
        assert!(dictionary.is_empty());
    }

    #[test]
    fn later_group_overwrites_shared_form() {
        let dictionary: LemmaDictionary = "стать стали\nсталь стали"
            .parse()
            .expect("Failed to parse dictionary");

        assert_eq!(dictionary.lookup("стали"), "сталь");
        assert_eq!(dictionary.lookup("стать"), "стать");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dictionary: LemmaDictionary = "\n   \nдом дома\n"
            .parse()
            .expect("Failed to parse dictionary");

        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.lookup("дома"), "дом");
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("lemmas.txt");
        std::fs::write(&path, "город города городе\n").expect("Failed to write lemmas");

        let dictionary = LemmaDictionary::load(&path).expect("Failed to load dictionary");

        assert_eq!(dictionary.lookup("городе"), "город");
    }
}
