use std::fmt;

use regex::Regex;

use super::operator::Operator;
use crate::{error::Result, lemma_dictionary::LemmaDictionary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryToken {
    Open,
    Close,
    Operator(Operator),
    /// Already normalized to its lemma.
    Term(String),
}

impl fmt::Display for QueryToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Operator(operator) => write!(f, "{operator}"),
            Self::Term(term) => write!(f, "{term}"),
        }
    }
}

pub struct QueryTokenizer {
    regex: Regex,
}

impl QueryTokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(r"\(|\)|\w+|\S")?,
        })
    }

    /// Splits `query` into parentheses, word runs and single stray characters.
    /// Terms come out lowercased and mapped through `dictionary`.
    pub fn tokenize(&self, query: &str, dictionary: &LemmaDictionary) -> Vec<QueryToken> {
        self.regex
            .find_iter(query)
            .map(|token| match token.as_str() {
                "(" => QueryToken::Open,
                ")" => QueryToken::Close,
                word => word.parse::<Operator>().map_or_else(
                    |()| QueryToken::Term(dictionary.lookup(word)),
                    QueryToken::Operator,
                ),
            })
            .collect()
    }
}
