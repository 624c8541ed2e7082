/// Result type for board-size parsing and export.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised at the boundary around the search engine.
///
/// The engine itself is total; a board without solutions is an empty
/// result, not an error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("not a whole number: {0:?}")]
    NotANumber(String),

    #[error("expected a positive number, got {0}")]
    NonPositive(i64),

    #[error("{value} is larger than the maximum of {max}")]
    TooLarge { value: i64, max: usize },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
