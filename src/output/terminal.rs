use itertools::Itertools;
use std::cell::Cell;

use crate::output::{Event, QuizOutput};

/// Prints quiz events to stdout for the interactive binary.
#[derive(Debug, Default)]
pub struct TerminalOutput {
    questions_shown: Cell<usize>,
}

impl TerminalOutput {
    pub fn new() -> Self {
        Default::default()
    }
}

impl QuizOutput for TerminalOutput {
    fn emit(&self, event: &Event) {
        match event {
            Event::QuestionReady(question) => {
                let number = self.questions_shown.get() + 1;
                self.questions_shown.set(number);
                let choices = question
                    .choices()
                    .iter()
                    .enumerate()
                    .map(|(i, c)| format!("  {}) {}", i + 1, c))
                    .join("\n");
                println!(
                    "\nQuestion {} [{}]\n{}\n{}",
                    number,
                    question.difficulty(),
                    question.prompt(),
                    choices
                );
            }
            Event::AnswerScored {
                was_correct: true, ..
            } => println!("Correct!"),
            Event::AnswerScored {
                was_correct: false,
                correct_choice,
            } => println!("Wrong! The answer was: {}", correct_choice),
            Event::QuizComplete { score, total } => {
                self.questions_shown.set(0);
                println!("\nQuiz complete: {} / {}", score, total);
            }
        }
    }
}
