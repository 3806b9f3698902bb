use std::{fmt, str::FromStr};

use crate::inverted_index::Postings;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    And,
    #[default]
    Or,
    Not,
}

impl Operator {
    /// Folds `operand` into the accumulated result.
    pub fn combine(self, mut result: Postings, operand: &Postings) -> Postings {
        match self {
            Self::Or => result.extend(operand.iter().copied()),
            Self::And => result.retain(|doc_id| operand.contains(doc_id)),
            Self::Not => result.retain(|doc_id| !operand.contains(doc_id)),
        }

        result
    }
}

impl FromStr for Operator {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("AND") {
            Ok(Self::And)
        } else if s.eq_ignore_ascii_case("OR") {
            Ok(Self::Or)
        } else if s.eq_ignore_ascii_case("NOT") {
            Ok(Self::Not)
        } else {
            Err(())
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::Not => write!(f, "NOT"),
        }
    }
}
