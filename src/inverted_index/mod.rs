pub mod builder;
pub mod doc_map;

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    fs::{rename, File},
    io::{BufRead, BufReader, BufWriter, Write},
    path::Path,
    str::FromStr,
};

use crate::{
    constants::{INDEX_KEY_DELIMITER, POSTINGS_DELIMITER, TEMP_FILE_SUFFIX},
    error::{Error, Result},
};

pub use self::{
    builder::{Document, IndexBuilder},
    doc_map::{Doc, DocID, DocMap},
};

pub type Postings = BTreeSet<DocID>;

static NO_POSTINGS: Postings = BTreeSet::new();

/// Lemma to posting set mapping.
///
/// Only [`IndexBuilder`] and deserialization produce one; there is no way to
/// mutate an index after it is built. Keys iterate in lexicographic order and
/// postings in numeric order, which is also the on-disk order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InvertedIndex {
    index: BTreeMap<String, Postings>,
}

impl InvertedIndex {
    /// Documents containing `lemma`; empty when the lemma was never indexed.
    pub fn postings(&self, lemma: &str) -> &Postings {
        self.index.get(lemma).unwrap_or(&NO_POSTINGS)
    }

    pub fn contains(&self, lemma: &str) -> bool {
        self.index.contains_key(lemma)
    }

    pub fn lemmas(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Postings)> {
        self.index.iter().map(|(lemma, postings)| (lemma.as_str(), postings))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn serialize(&self) -> String {
        self.to_string()
    }

    pub fn deserialize(data: &str) -> Result<Self> {
        data.parse()
    }

    pub fn write_to(&self, writer: &mut impl Write) -> Result<()> {
        write!(writer, "{self}")?;

        Ok(())
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut index = BTreeMap::new();

        for (i, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = i + 1;

            if line.trim().is_empty() {
                continue;
            }

            let (lemma, postings) = parse_entry(&line, line_no)?;

            if index.insert(lemma, postings).is_some() {
                return Err(Error::corrupt(line_no, "duplicate lemma"));
            }
        }

        Ok(Self { index })
    }

    /// Writes next to `path` first and renames over it once flushed.
    pub fn save(&self, path: &Path) -> Result<()> {
        let temp_path = path.with_extension(TEMP_FILE_SUFFIX);
        let mut writer = BufWriter::new(File::create(&temp_path)?);

        self.write_to(&mut writer)?;
        writer.flush()?;
        drop(writer);

        rename(&temp_path, path)?;

        tracing::info!(lemmas = self.len(), path = %path.display(), "Saved inverted index");

        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let index = Self::from_reader(BufReader::new(File::open(path)?))?;

        tracing::info!(lemmas = index.len(), path = %path.display(), "Loaded inverted index");

        Ok(index)
    }
}

impl FromStr for InvertedIndex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

impl fmt::Display for InvertedIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (lemma, postings) in &self.index {
            writeln!(f, "{}", format_entry(lemma, postings))?;
        }

        Ok(())
    }
}

fn format_entry(lemma: &str, postings: &Postings) -> String {
    let ids = postings
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(POSTINGS_DELIMITER);

    format!("{lemma}{INDEX_KEY_DELIMITER}{POSTINGS_DELIMITER}{ids}")
}

fn parse_entry(line: &str, line_no: usize) -> Result<(String, Postings)> {
    let (lemma, ids) = line
        .split_once(INDEX_KEY_DELIMITER)
        .ok_or_else(|| Error::corrupt(line_no, "missing key delimiter"))?;

    let lemma = lemma.trim();
    if lemma.is_empty() || lemma.contains(char::is_whitespace) {
        return Err(Error::corrupt(line_no, format!("invalid lemma '{lemma}'")));
    }

    let postings = ids
        .split_whitespace()
        .map(|id| {
            id.parse::<DocID>()
                .map_err(|e| Error::corrupt(line_no, format!("invalid document id '{id}': {e}")))
        })
        .collect::<Result<Postings>>()?;

    if postings.is_empty() {
        return Err(Error::corrupt(line_no, format!("no postings for '{lemma}'")));
    }

    Ok((lemma.to_string(), postings))
}
