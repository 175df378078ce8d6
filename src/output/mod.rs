use crate::game::quiz::definition::Question;

#[cfg(test)]
pub mod mock;
pub mod terminal;

/// Lifecycle events emitted by the quiz, in the order they happen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    QuestionReady(Question),
    AnswerScored {
        was_correct: bool,
        correct_choice: String,
    },
    QuizComplete {
        score: usize,
        total: usize,
    },
}

pub trait QuizOutput {
    fn emit(&self, event: &Event);
}

