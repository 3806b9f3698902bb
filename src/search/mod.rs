pub mod engine;
pub mod search_result;

pub use self::{engine::SearchEngine, search_result::SearchResult};
