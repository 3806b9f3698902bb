use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
    str::FromStr,
};

use crate::{
    constants::INDEX_KEY_DELIMITER,
    error::{Error, Result},
};

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Doc {
    pub url: String,
}

impl Doc {
    pub const fn new(url: String) -> Self {
        Self { url }
    }
}

pub type DocID = u64;

/// Document id to source page, read from the crawler's `<id>: <url>` listing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DocMap {
    docs: HashMap<DocID, Doc>,
}

impl DocMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load(path: &Path) -> Result<Self> {
        Self::from_reader(BufReader::new(File::open(path)?))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut docs = HashMap::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            let (doc_id, url) = line
                .split_once(INDEX_KEY_DELIMITER)
                .ok_or_else(|| Error::corrupt(i + 1, "missing key delimiter"))?;
            let doc_id = doc_id
                .trim()
                .parse::<DocID>()
                .map_err(|e| Error::corrupt(i + 1, format!("invalid document id: {e}")))?;

            docs.insert(doc_id, Doc::new(url.trim().to_string()));
        }

        Ok(Self { docs })
    }

    pub fn insert(&mut self, doc_id: DocID, doc: Doc) {
        self.docs.insert(doc_id, doc);
    }

    pub fn get(&self, doc_id: DocID) -> Option<&Doc> {
        self.docs.get(&doc_id)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }
}

impl FromStr for DocMap {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_crawler_listing() {
        let doc_map: DocMap = "1: https://ru.wikipedia.org/wiki/Россия\n2: https://ru.wikipedia.org/wiki/Москва\n"
            .parse()
            .expect("Failed to parse doc map");

        assert_eq!(doc_map.len(), 2);
        assert_eq!(
            doc_map.get(2),
            Some(&Doc::new("https://ru.wikipedia.org/wiki/Москва".to_string()))
        );
        assert_eq!(doc_map.get(3), None);
    }

    #[test]
    fn url_keeps_its_own_colons() {
        let doc_map: DocMap = "5: https://example.org:8080/a"
            .parse()
            .expect("Failed to parse doc map");

        assert_eq!(
            doc_map.get(5).map(|d| d.url.as_str()),
            Some("https://example.org:8080/a")
        );
    }

    #[test]
    fn bad_id_is_reported_with_line() {
        let err = "1: a\nx: b".parse::<DocMap>().expect_err("Expected error");

        assert!(matches!(err, Error::CorruptIndex { line: 2, .. }));
    }
}
