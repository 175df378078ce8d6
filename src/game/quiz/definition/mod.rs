use rand::Rng;
use tracing::warn;

use crate::error::QuizError;

pub mod question;

pub use question::{Difficulty, Question, RawQuestion};

#[derive(Debug)]
pub struct QuizDefinition {
    questions: Vec<Question>,
}

impl QuizDefinition {
    /// Converts a provider batch into questions. Unusable entries are skipped.
    pub fn from_raw<R: Rng + ?Sized>(
        raw_questions: Vec<RawQuestion>,
        shuffle_choices: bool,
        rng: &mut R,
    ) -> Result<QuizDefinition, QuizError> {
        let mut questions = Vec::with_capacity(raw_questions.len());
        for raw_question in raw_questions {
            let prompt = raw_question.prompt.clone();
            let question = if shuffle_choices {
                Question::from_raw(raw_question, rng)
            } else {
                Question::from_raw_unshuffled(raw_question)
            };
            match question {
                Ok(question) => questions.push(question),
                Err(e) => warn!("Skipping question `{}`: {}", prompt, e),
            }
        }

        if questions.is_empty() {
            return Err(QuizError::EmptyBatch);
        }

        Ok(QuizDefinition { questions })
    }

    pub fn get_questions(&self) -> &Vec<Question> {
        &self.questions
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
