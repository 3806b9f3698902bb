use std::mem;

use super::{operator::Operator, tokenizer::QueryToken};
use crate::inverted_index::{InvertedIndex, Postings};

/// Evaluates a token stream left to right against `index`.
///
/// There is no precedence between operators: each operand is folded into the
/// running result with whatever operator came last (`OR` until one is seen).
/// The first operand of an expression or group seeds the result regardless of
/// that operator. Unbalanced parentheses and trailing operators are tolerated;
/// a stray `)` at the top level ends the query, groups still open at the end
/// of input are closed implicitly.
///
/// Open groups live on a heap stack, so nesting depth is bounded by memory
/// rather than by the thread's stack.
pub fn evaluate(tokens: &[QueryToken], index: &InvertedIndex) -> Postings {
    let mut groups: Vec<Group> = Vec::new();
    let mut current = Group::default();

    for token in tokens {
        match token {
            QueryToken::Open => groups.push(mem::take(&mut current)),
            QueryToken::Close => {
                let Some(outer) = groups.pop() else {
                    break;
                };
                let inner = mem::replace(&mut current, outer).finish();
                current.fold(&inner);
            }
            QueryToken::Operator(operator) => current.operator = *operator,
            QueryToken::Term(lemma) => current.fold(index.postings(lemma)),
        }
    }

    while let Some(outer) = groups.pop() {
        let inner = mem::replace(&mut current, outer).finish();
        current.fold(&inner);
    }

    current.finish()
}

/// One parenthesis level: the result so far and the operator for the next
/// operand. `result` stays `None` until the first operand arrives.
#[derive(Default)]
struct Group {
    result: Option<Postings>,
    operator: Operator,
}

impl Group {
    fn fold(&mut self, operand: &Postings) {
        let operator = self.operator;

        self.result = Some(
            self.result
                .take()
                .map_or_else(|| operand.clone(), |result| operator.combine(result, operand)),
        );
    }

    fn finish(self) -> Postings {
        self.result.unwrap_or_default()
    }
}
