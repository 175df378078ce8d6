use thiserror::Error;

use crate::game::quiz::definition::RawQuestion;

pub mod csv;
pub mod opentdb;

pub use self::csv::CsvProvider;
pub use self::opentdb::OpenTdbProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Could not read questions: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not parse question file: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("Could not parse question payload: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Question source rejected the request (response code {response_code})")]
    Rejected { response_code: u32 },

    #[error("Question source returned no questions")]
    Empty,
}

/// A source of question batches. Each call is a single attempt, failures are not retried.
pub trait QuestionProvider {
    fn fetch_batch(&self) -> Result<Vec<RawQuestion>, ProviderError>;
}
