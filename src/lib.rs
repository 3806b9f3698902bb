//! Boolean retrieval over a crawled page corpus.
//!
//! Pages are reduced to Cyrillic word tokens, each token is mapped to its lemma
//! through a [`LemmaDictionary`], and an [`InvertedIndex`] records which pages
//! contain each lemma. Queries combine terms with `AND`, `OR`, `NOT` and
//! parentheses, strictly left to right.

pub mod analyzer;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod inverted_index;
pub mod lemma_dictionary;
pub mod query;
pub mod search;
pub mod tokenizer;

pub use crate::{
    error::{Error, Result},
    inverted_index::{DocID, Document, IndexBuilder, InvertedIndex, Postings},
    lemma_dictionary::LemmaDictionary,
    search::{SearchEngine, SearchResult},
};
