use std::collections::{BTreeMap, HashSet};

use rayon::prelude::*;

use super::{DocID, InvertedIndex, Postings};
use crate::lemma_dictionary::LemmaDictionary;

/// A tokenized document as handed over by the corpus loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocID,
    pub tokens: Vec<String>,
}

impl Document {
    pub const fn new(id: DocID, tokens: Vec<String>) -> Self {
        Self { id, tokens }
    }
}

type PartialIndex = BTreeMap<String, Postings>;

/// Accumulates postings for documents and hands out an immutable
/// [`InvertedIndex`] once done.
///
/// Adding two documents with the same id merges their postings.
pub struct IndexBuilder<'a> {
    dictionary: &'a LemmaDictionary,
    index: PartialIndex,
    seen: HashSet<DocID>,
}

impl<'a> IndexBuilder<'a> {
    pub fn new(dictionary: &'a LemmaDictionary) -> Self {
        Self {
            dictionary,
            index: PartialIndex::new(),
            seen: HashSet::new(),
        }
    }

    pub fn add_document<I, S>(&mut self, doc_id: DocID, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if !self.seen.insert(doc_id) {
            tracing::warn!(doc_id, "Duplicate document id, merging postings");
        }

        index_document(&mut self.index, self.dictionary, doc_id, tokens);
    }

    pub fn documents(&self) -> usize {
        self.seen.len()
    }

    pub fn build(self) -> InvertedIndex {
        tracing::debug!(
            documents = self.seen.len(),
            lemmas = self.index.len(),
            "Built inverted index"
        );

        InvertedIndex { index: self.index }
    }

    pub fn build_from(documents: &[Document], dictionary: &LemmaDictionary) -> InvertedIndex {
        let mut builder = IndexBuilder::new(dictionary);

        for document in documents {
            builder.add_document(document.id, &document.tokens);
        }

        builder.build()
    }

    /// Same result as [`IndexBuilder::build_from`], with documents split
    /// across the rayon pool and the partial indexes merged pairwise.
    pub fn build_parallel(documents: &[Document], dictionary: &LemmaDictionary) -> InvertedIndex {
        let index = documents
            .par_iter()
            .fold(PartialIndex::new, |mut partial, document| {
                index_document(&mut partial, dictionary, document.id, &document.tokens);
                partial
            })
            .reduce(PartialIndex::new, merge);

        tracing::debug!(
            documents = documents.len(),
            lemmas = index.len(),
            "Built inverted index in parallel"
        );

        InvertedIndex { index }
    }
}

fn index_document<I, S>(
    index: &mut PartialIndex,
    dictionary: &LemmaDictionary,
    doc_id: DocID,
    tokens: I,
) where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let tokens = tokens.into_iter().collect::<Vec<_>>();
    let unique = tokens.iter().map(|token| token.as_ref()).collect::<HashSet<&str>>();

    for token in unique {
        index.entry(dictionary.lookup(token)).or_default().insert(doc_id);
    }
}

fn merge(mut left: PartialIndex, right: PartialIndex) -> PartialIndex {
    if left.len() < right.len() {
        return merge(right, left);
    }

    for (lemma, postings) in right {
        left.entry(lemma).or_default().extend(postings);
    }

    left
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<Document> {
        vec![
            Document::new(1, vec!["кот".into(), "сидит".into()]),
            Document::new(2, vec!["кот".into(), "бежит".into()]),
            Document::new(3, vec!["собака".into(), "сидит".into()]),
        ]
    }

    #[test]
    fn builds_postings_per_lemma() {
        let dictionary = LemmaDictionary::new();
        let index = IndexBuilder::build_from(&corpus(), &dictionary);

        assert_eq!(index.postings("кот"), &Postings::from([1, 2]));
        assert_eq!(index.postings("сидит"), &Postings::from([1, 3]));
        assert_eq!(index.postings("собака"), &Postings::from([3]));
        assert_eq!(index.len(), 4);
    }

    #[test]
    fn normalizes_through_dictionary() {
        let dictionary: LemmaDictionary = "кот кота коты\nсидеть сидит сидят"
            .parse()
            .expect("Failed to parse dictionary");
        let mut builder = IndexBuilder::new(&dictionary);

        builder.add_document(1, ["кота", "сидит"]);
        builder.add_document(2, ["коты", "сидят", "бегут"]);
        let index = builder.build();

        assert_eq!(index.postings("кот"), &Postings::from([1, 2]));
        assert_eq!(index.postings("сидеть"), &Postings::from([1, 2]));
        assert_eq!(index.postings("бегут"), &Postings::from([2]));
        assert!(!index.contains("кота"));
    }

    #[test]
    fn no_false_positives_or_negatives() {
        let dictionary: LemmaDictionary = "кот кота".parse().expect("Failed to parse dictionary");
        let documents = vec![
            Document::new(7, vec!["кота".into(), "кот".into(), "дом".into()]),
            Document::new(8, vec!["дом".into()]),
        ];
        let index = IndexBuilder::build_from(&documents, &dictionary);

        for (lemma, postings) in index.iter() {
            assert!(!postings.is_empty());
            for doc_id in postings {
                let document = documents
                    .iter()
                    .find(|d| d.id == *doc_id)
                    .expect("Posting points at unknown document");
                assert!(document.tokens.iter().any(|t| dictionary.lookup(t) == lemma));
            }
        }

        for document in &documents {
            for token in &document.tokens {
                assert!(index.postings(&dictionary.lookup(token)).contains(&document.id));
            }
        }
    }

    #[test]
    fn repeated_tokens_count_once() {
        let dictionary = LemmaDictionary::new();
        let mut builder = IndexBuilder::new(&dictionary);

        builder.add_document(4, ["кот", "кот", "кот"]);
        let index = builder.build();

        assert_eq!(index.postings("кот"), &Postings::from([4]));
    }

    #[test]
    fn duplicate_ids_merge_postings() {
        let dictionary = LemmaDictionary::new();
        let mut builder = IndexBuilder::new(&dictionary);

        builder.add_document(1, ["кот"]);
        builder.add_document(1, ["собака"]);
        assert_eq!(builder.documents(), 1);
        let index = builder.build();

        assert_eq!(index.postings("кот"), &Postings::from([1]));
        assert_eq!(index.postings("собака"), &Postings::from([1]));
    }

    #[test]
    fn document_without_tokens_adds_nothing() {
        let dictionary = LemmaDictionary::new();
        let mut builder = IndexBuilder::new(&dictionary);

        builder.add_document(1, Vec::<String>::new());

        assert!(builder.build().is_empty());
    }

    #[test]
    fn parallel_build_matches_sequential() {
        let dictionary: LemmaDictionary =
            "сидеть сидит".parse().expect("Failed to parse dictionary");
        let documents = (0..200)
            .map(|i| {
                let tokens = match i % 3 {
                    0 => vec!["кот".to_string(), "сидит".to_string()],
                    1 => vec!["кот".to_string(), "бежит".to_string()],
                    _ => vec!["собака".to_string(), format!("слово{i}")],
                };
                Document::new(i, tokens)
            })
            .collect::<Vec<_>>();

        assert_eq!(
            IndexBuilder::build_parallel(&documents, &dictionary),
            IndexBuilder::build_from(&documents, &dictionary)
        );
    }
}
