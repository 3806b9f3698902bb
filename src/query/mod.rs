pub mod evaluator;
pub mod operator;
pub mod tokenizer;

pub use self::{
    evaluator::evaluate,
    operator::Operator,
    tokenizer::{QueryToken, QueryTokenizer},
};
