use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::game::quiz::definition::RawQuestion;
use crate::provider::{ProviderError, QuestionProvider};

#[derive(Deserialize)]
struct CsvQuestion {
    prompt: String,
    correct_choice: String,
    incorrect_choices: String,
    difficulty: String,
}

impl From<CsvQuestion> for RawQuestion {
    fn from(row: CsvQuestion) -> Self {
        let incorrect_choices = row
            .incorrect_choices
            .split('|')
            .map(|c| c.trim())
            .filter(|c| !c.is_empty())
            .map(|c| c.to_owned())
            .collect();
        RawQuestion {
            prompt: row.prompt,
            correct_choice: row.correct_choice,
            incorrect_choices,
            difficulty: row.difficulty,
        }
    }
}

/// Reads questions from a CSV file with a
/// `prompt,correct_choice,incorrect_choices,difficulty` header.
/// Incorrect choices are separated by `|`.
pub struct CsvProvider {
    source: PathBuf,
}

impl CsvProvider {
    pub fn new<P: AsRef<Path>>(source: P) -> Self {
        CsvProvider {
            source: source.as_ref().to_path_buf(),
        }
    }
}

pub fn read_questions<R: Read>(reader: R) -> Result<Vec<RawQuestion>, ProviderError> {
    let mut csv_reader = ::csv::Reader::from_reader(reader);
    let mut questions = Vec::new();
    for row in csv_reader.deserialize() {
        let row: CsvQuestion = row?;
        questions.push(row.into());
    }
    if questions.is_empty() {
        return Err(ProviderError::Empty);
    }
    Ok(questions)
}

impl QuestionProvider for CsvProvider {
    fn fetch_batch(&self) -> Result<Vec<RawQuestion>, ProviderError> {
        let file = File::open(&self.source)?;
        read_questions(file)
    }
}
