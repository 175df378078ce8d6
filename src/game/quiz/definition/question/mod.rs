use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::error::QuizError;


/// Replaces HTML character references with the characters they stand for.
/// Unknown references are left untouched.
pub fn unescape_html(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl FromStr for Difficulty {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_ref() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(QuizError::UnknownDifficulty(s.to_owned())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

/// A question as handed over by a question provider, before any cleanup.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct RawQuestion {
    pub prompt: String,
    pub correct_choice: String,
    pub incorrect_choices: Vec<String>,
    pub difficulty: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    prompt: String,
    choices: Vec<String>,
    correct_choice: String,
    difficulty: Difficulty,
}

impl Question {
    /// Builds a question whose choices are displayed in the given order.
    pub fn new(
        prompt: String,
        choices: Vec<String>,
        correct_choice: String,
        difficulty: Difficulty,
    ) -> Result<Self, QuizError> {
        let mut seen = HashSet::new();
        if let Some(duplicate) = choices.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(QuizError::InvalidQuestion(format!(
                "duplicate choice `{}` in `{}`",
                duplicate, prompt
            )));
        }
        if !choices.contains(&correct_choice) {
            return Err(QuizError::InvalidQuestion(format!(
                "correct choice `{}` is not one of the choices of `{}`",
                correct_choice, prompt
            )));
        }
        Ok(Question {
            prompt,
            choices,
            correct_choice,
            difficulty,
        })
    }

    /// Converts a raw question, unescaping its text and shuffling its choices with `rng`.
    pub fn from_raw<R: Rng + ?Sized>(raw: RawQuestion, rng: &mut R) -> Result<Self, QuizError> {
        let mut question = Question::from_raw_unshuffled(raw)?;
        question.choices.shuffle(rng);
        Ok(question)
    }

    /// Converts a raw question, keeping the correct choice first.
    pub fn from_raw_unshuffled(raw: RawQuestion) -> Result<Self, QuizError> {
        let difficulty: Difficulty = raw.difficulty.parse()?;
        let correct_choice = unescape_html(&raw.correct_choice);
        let mut choices = vec![correct_choice.clone()];
        choices.extend(raw.incorrect_choices.iter().map(|c| unescape_html(c)));
        Question::new(
            unescape_html(&raw.prompt),
            choices,
            correct_choice,
            difficulty,
        )
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }

    pub fn correct_choice(&self) -> &str {
        &self.correct_choice
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn validate(&self, candidate_answer: &str) -> bool {
        candidate_answer == self.correct_choice
    }
}
