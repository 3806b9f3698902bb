#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Corrupt index at line {line}: {reason}")]
    CorruptIndex { line: usize, reason: String },

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl Error {
    pub fn corrupt(line: usize, reason: impl Into<String>) -> Self {
        Self::CorruptIndex {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = core::result::Result<T, Error>;
