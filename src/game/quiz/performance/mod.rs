use crate::game::quiz::definition::Difficulty;
use crate::game::quiz::settings::Settings;

#[cfg(test)]
mod tests;

/// Running tally of answers given during a quiz, used to pick the difficulty
/// of upcoming questions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PerformanceTracker {
    answered: usize,
    correct: usize,
}

impl PerformanceTracker {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn record_outcome(&mut self, was_correct: bool) {
        self.answered += 1;
        if was_correct {
            self.correct += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Default::default();
    }

    pub fn answered(&self) -> usize {
        self.answered
    }

    pub fn correct(&self) -> usize {
        self.correct
    }

    /// Fraction of correct answers, 0 before the first answer.
    pub fn ratio(&self) -> f64 {
        if self.answered == 0 {
            return 0.0;
        }
        self.correct as f64 / self.answered as f64
    }

    pub fn target_difficulty(&self, settings: &Settings) -> Difficulty {
        let ratio = self.ratio();
        if ratio > settings.hard_threshold {
            Difficulty::Hard
        } else if ratio > settings.medium_threshold {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }
}
