use chrono::{DateTime, Utc};
use std::convert::TryFrom;

use crate::error::QuizError;


#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AttemptResult {
    pub score: usize,
    pub total: usize,
    pub percentage: u32,
    pub completed_at: DateTime<Utc>,
}

/// Completed quiz attempts of one player, oldest first.
#[derive(Clone, Debug)]
pub struct PlayerRecord {
    username: String,
    history: Vec<AttemptResult>,
}

impl PlayerRecord {
    pub fn new<S: Into<String>>(username: S) -> Self {
        PlayerRecord {
            username: username.into(),
            history: Vec::new(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn record_attempt(&mut self, score: usize, total: usize) -> Result<AttemptResult, QuizError> {
        if total == 0 {
            return Err(QuizError::NoQuestions);
        }
        if score > total {
            return Err(QuizError::InvalidAttempt { score, total });
        }
        let attempt = AttemptResult {
            score,
            total,
            percentage: percentage(score, total)?,
            completed_at: Utc::now(),
        };
        self.history.push(attempt.clone());
        Ok(attempt)
    }

    pub fn history(&self) -> &[AttemptResult] {
        &self.history
    }

    /// Highest percentage so far; the earliest attempt wins ties.
    pub fn best_attempt(&self) -> Option<&AttemptResult> {
        self.history.iter().fold(None, |best, attempt| match best {
            Some(b) if b.percentage >= attempt.percentage => Some(b),
            _ => Some(attempt),
        })
    }
}

// Rounds half up, without going through floats
fn percentage(score: usize, total: usize) -> Result<u32, QuizError> {
    u32::try_from((score * 200 + total) / (2 * total))
        .map_err(|_| QuizError::InvalidAttempt { score, total })
}
