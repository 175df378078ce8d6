use tracing::{debug, info};

use self::definition::*;
use self::performance::PerformanceTracker;
use self::reorder::reorder;
use self::settings::*;
use crate::error::QuizError;
use crate::output::{Event, QuizOutput};

pub mod definition;
pub mod performance;
pub mod reorder;
pub mod settings;


#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Phase {
    Idle,
    InProgress,
    Complete,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AnswerResult {
    pub was_correct: bool,
    pub correct_choice: String,
    pub is_quiz_complete: bool,
}

/// Presents questions one at a time and reorders the unanswered ones
/// according to how well the player is doing.
pub struct Quiz<O: QuizOutput> {
    settings: Settings,
    current_phase: Phase,
    questions: Vec<Question>,
    position: usize,
    score: usize,
    performance: PerformanceTracker,
    output: O,
}

impl<O: QuizOutput> Quiz<O> {
    pub fn new(settings: Settings, output: O) -> Quiz<O> {
        Quiz {
            settings,
            current_phase: Phase::Idle,
            questions: Vec::new(),
            position: 0,
            score: 0,
            performance: PerformanceTracker::new(),
            output,
        }
    }

    /// Begins a new attempt with `questions`, discarding any previous one.
    /// An empty batch is refused and leaves the current attempt as it was.
    pub fn start(&mut self, questions: Vec<Question>) -> Result<(), QuizError> {
        if questions.is_empty() {
            return Err(QuizError::EmptyBatch);
        }

        self.questions = questions;
        self.position = 0;
        self.score = 0;
        self.performance.reset();
        self.set_current_phase(Phase::InProgress);

        self.output
            .emit(&Event::QuestionReady(self.questions[0].clone()));
        Ok(())
    }

    pub fn submit_answer(&mut self, answer: &str) -> Result<AnswerResult, QuizError> {
        let question = match self.current_question() {
            Some(question) if self.is_running() => question,
            _ => return Err(QuizError::NoActiveQuestion),
        };

        let was_correct = question.validate(answer);
        let correct_choice = question.correct_choice().to_owned();
        if was_correct {
            self.score += 1;
        }
        self.performance.record_outcome(was_correct);
        self.position += 1;
        debug!(
            "Answer to question {} scored: correct={}, score={}",
            self.position, was_correct, self.score
        );

        self.output.emit(&Event::AnswerScored {
            was_correct,
            correct_choice: correct_choice.clone(),
        });

        let is_quiz_complete = self.position >= self.questions.len();
        if is_quiz_complete {
            self.set_current_phase(Phase::Complete);
            self.output.emit(&Event::QuizComplete {
                score: self.score,
                total: self.total(),
            });
        } else {
            let target = self.performance.target_difficulty(&self.settings);
            let tail = &mut self.questions[self.position..];
            debug!(
                "Reordering {} remaining questions towards {} (ratio {:.2})",
                tail.len(),
                target,
                self.performance.ratio()
            );
            reorder(tail, target, &mut rand::thread_rng());
            self.output
                .emit(&Event::QuestionReady(self.questions[self.position].clone()));
        }

        Ok(AnswerResult {
            was_correct,
            correct_choice,
            is_quiz_complete,
        })
    }

    fn set_current_phase(&mut self, phase: Phase) {
        info!("Entering quiz phase: {:?}", phase);
        self.current_phase = phase;
    }

    pub fn phase(&self) -> Phase {
        self.current_phase
    }

    pub fn is_running(&self) -> bool {
        self.current_phase == Phase::InProgress
    }

    pub fn is_over(&self) -> bool {
        self.current_phase == Phase::Complete
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.position)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn performance(&self) -> &PerformanceTracker {
        &self.performance
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}
