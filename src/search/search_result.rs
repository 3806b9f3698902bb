use std::fmt;

use serde::Serialize;

use crate::inverted_index::DocID;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    pub doc_id: DocID,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl SearchResult {
    pub const fn new(doc_id: DocID, url: Option<String>) -> Self {
        Self { doc_id, url }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.url.as_ref() {
            None => write!(f, "{}", self.doc_id),
            Some(url) => write!(f, "{}: {url}", self.doc_id),
        }
    }
}
