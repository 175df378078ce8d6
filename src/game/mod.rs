use anyhow::{Context, Result};
use tracing::info;

pub mod player;
pub mod quiz;

use crate::error::QuizError;
use crate::game::player::{AttemptResult, PlayerRecord};
use crate::game::quiz::definition::QuizDefinition;
use crate::game::quiz::settings::Settings;
use crate::game::quiz::{AnswerResult, Quiz};
use crate::output::QuizOutput;
use crate::provider::QuestionProvider;

#[cfg(test)]
mod tests;

/// Ties one quiz to one player: feeds it batches from a provider and files
/// every completed attempt in the player's history.
pub struct Game<O: QuizOutput> {
    quiz: Quiz<O>,
    player: PlayerRecord,
}

impl<O: QuizOutput> Game<O> {
    pub fn new<S: Into<String>>(username: S, settings: Settings, output: O) -> Game<O> {
        Game {
            quiz: Quiz::new(settings, output),
            player: PlayerRecord::new(username),
        }
    }

    /// Fetches a batch and starts a new attempt with it. On failure the
    /// previous attempt, if any, is left as it was.
    pub fn begin<P: QuestionProvider + ?Sized>(&mut self, provider: &P) -> Result<()> {
        let raw_questions = provider
            .fetch_batch()
            .map_err(QuizError::from)
            .context("Could not fetch questions")?;
        let definition = QuizDefinition::from_raw(
            raw_questions,
            self.quiz.settings().shuffle_choices,
            &mut rand::thread_rng(),
        )?;
        info!(
            "Starting quiz with {} questions for {}",
            definition.get_questions().len(),
            self.player.username()
        );
        self.quiz.start(definition.into_questions())?;
        Ok(())
    }

    pub fn guess(&mut self, answer: &str) -> Result<AnswerResult, QuizError> {
        let result = self.quiz.submit_answer(answer)?;
        if result.is_quiz_complete {
            let attempt = self
                .player
                .record_attempt(self.quiz.score(), self.quiz.total())?;
            info!(
                "{} scored {}/{} ({}%)",
                self.player.username(),
                attempt.score,
                attempt.total,
                attempt.percentage
            );
        }
        Ok(result)
    }

    pub fn get_quiz(&self) -> &Quiz<O> {
        &self.quiz
    }

    pub fn get_player(&self) -> &PlayerRecord {
        &self.player
    }

    pub fn player_history(&self) -> &[AttemptResult] {
        self.player.history()
    }
}
