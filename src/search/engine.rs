use std::path::Path;

use crate::{
    error::Result,
    inverted_index::{DocMap, InvertedIndex, Postings},
    lemma_dictionary::LemmaDictionary,
    query::{evaluate, QueryToken, QueryTokenizer},
};

use super::search_result::SearchResult;

/// Answers boolean queries against a built index.
///
/// Holds no mutable state, so one engine can serve queries from several
/// threads at once.
pub struct SearchEngine {
    index: InvertedIndex,
    dictionary: LemmaDictionary,
    doc_map: DocMap,
    tokenizer: QueryTokenizer,
}

impl SearchEngine {
    pub fn new(index: InvertedIndex, dictionary: LemmaDictionary) -> Result<Self> {
        Ok(Self {
            index,
            dictionary,
            doc_map: DocMap::new(),
            tokenizer: QueryTokenizer::new()?,
        })
    }

    #[must_use]
    pub fn with_doc_map(mut self, doc_map: DocMap) -> Self {
        self.doc_map = doc_map;
        self
    }

    pub fn from_paths(
        index_path: &Path,
        lemmas_path: &Path,
        doc_map_path: Option<&Path>,
    ) -> Result<Self> {
        let doc_map = doc_map_path.map(DocMap::load).transpose()?;

        Ok(Self::new(
            InvertedIndex::load(index_path)?,
            LemmaDictionary::load(lemmas_path)?,
        )?
        .with_doc_map(doc_map.unwrap_or_default()))
    }

    pub fn tokenize(&self, query: &str) -> Vec<QueryToken> {
        self.tokenizer.tokenize(query, &self.dictionary)
    }

    pub fn matching_documents(&self, query: &str) -> Postings {
        evaluate(&self.tokenize(query), &self.index)
    }

    /// Matching documents in ascending id order.
    pub fn search(&self, query: &str) -> Vec<SearchResult> {
        let document_ids = self.matching_documents(query);

        tracing::debug!(query, results = document_ids.len(), "Evaluated query");

        document_ids
            .into_iter()
            .map(|doc_id| {
                let url = self.doc_map.get(doc_id).map(|doc| doc.url.clone());
                SearchResult::new(doc_id, url)
            })
            .collect()
    }

    pub const fn index(&self) -> &InvertedIndex {
        &self.index
    }
}
