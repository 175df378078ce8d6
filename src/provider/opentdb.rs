use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use crate::game::quiz::definition::RawQuestion;
use crate::provider::{ProviderError, QuestionProvider};

#[derive(Deserialize)]
struct OpenTdbResponse {
    response_code: u32,
    #[serde(default)]
    results: Vec<OpenTdbQuestion>,
}

#[derive(Deserialize)]
struct OpenTdbQuestion {
    question: String,
    correct_answer: String,
    incorrect_answers: Vec<String>,
    difficulty: String,
}

impl From<OpenTdbQuestion> for RawQuestion {
    fn from(question: OpenTdbQuestion) -> Self {
        RawQuestion {
            prompt: question.question,
            correct_choice: question.correct_answer,
            incorrect_choices: question.incorrect_answers,
            difficulty: question.difficulty,
        }
    }
}

/// Reads a saved Open Trivia DB `api.php` response.
/// Text is left HTML-escaped, as the API sends it.
pub struct OpenTdbProvider {
    source: PathBuf,
}

impl OpenTdbProvider {
    pub fn new<P: AsRef<Path>>(source: P) -> Self {
        OpenTdbProvider {
            source: source.as_ref().to_path_buf(),
        }
    }
}

pub fn read_response<R: Read>(reader: R) -> Result<Vec<RawQuestion>, ProviderError> {
    let response: OpenTdbResponse = serde_json::from_reader(reader)?;
    if response.response_code != 0 {
        return Err(ProviderError::Rejected {
            response_code: response.response_code,
        });
    }
    if response.results.is_empty() {
        return Err(ProviderError::Empty);
    }
    Ok(response.results.into_iter().map(|q| q.into()).collect())
}

impl QuestionProvider for OpenTdbProvider {
    fn fetch_batch(&self) -> Result<Vec<RawQuestion>, ProviderError> {
        let file = File::open(&self.source)?;
        read_response(BufReader::new(file))
    }
}
