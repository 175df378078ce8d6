use thiserror::Error;

use crate::provider::ProviderError;

#[derive(Debug, Error)]
pub enum QuizError {
    #[error("Cannot start a quiz without questions")]
    EmptyBatch,

    #[error("There is no active question")]
    NoActiveQuestion,

    #[error("Cannot record an attempt with no questions")]
    NoQuestions,

    #[error("Cannot record a score of {score} out of {total}")]
    InvalidAttempt { score: usize, total: usize },

    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Unknown difficulty: {0}")]
    UnknownDifficulty(String),

    #[error(transparent)]
    Provider(#[from] ProviderError),
}
