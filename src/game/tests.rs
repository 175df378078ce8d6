use super::*;
use crate::game::quiz::definition::RawQuestion;
use crate::game::quiz::Phase;
use crate::output::mock::MockQuizOutput;
use crate::output::Event;
use crate::provider::ProviderError;

struct FixedProvider {
    questions: Vec<RawQuestion>,
}

impl QuestionProvider for FixedProvider {
    fn fetch_batch(&self) -> Result<Vec<RawQuestion>, ProviderError> {
        Ok(self.questions.clone())
    }
}

struct FailingProvider;

impl QuestionProvider for FailingProvider {
    fn fetch_batch(&self) -> Result<Vec<RawQuestion>, ProviderError> {
        Err(ProviderError::Rejected { response_code: 5 })
    }
}

fn raw(prompt: &str, difficulty: &str) -> RawQuestion {
    RawQuestion {
        prompt: prompt.to_owned(),
        correct_choice: format!("{} right", prompt),
        incorrect_choices: vec![format!("{} wrong", prompt), format!("{} other", prompt)],
        difficulty: difficulty.to_owned(),
    }
}

fn provider() -> FixedProvider {
    FixedProvider {
        questions: vec![raw("q1", "easy"), raw("q2", "hard"), raw("q3", "medium")],
    }
}

fn play(game: &mut Game<MockQuizOutput>, answers: &[bool]) {
    for &correct in answers {
        let prompt = game.get_quiz().current_question().unwrap().prompt().to_owned();
        let suffix = if correct { "right" } else { "wrong" };
        game.guess(&format!("{} {}", prompt, suffix)).unwrap();
    }
}

#[test]
fn completed_attempt_is_recorded() {
    let output = MockQuizOutput::new();
    let mut game = Game::new("alice", Settings::default(), output.clone());
    game.begin(&provider()).unwrap();
    assert!(game.player_history().is_empty());

    play(&mut game, &[true, true, false]);

    assert!(game.get_quiz().is_over());
    assert_eq!(game.player_history().len(), 1);
    let attempt = &game.player_history()[0];
    assert_eq!((attempt.score, attempt.total, attempt.percentage), (2, 3, 67));
    assert!(output.contains_event(&Event::QuizComplete { score: 2, total: 3 }));
}

#[test]
fn restart_keeps_history() {
    let mut game = Game::new("bob", Settings::default(), MockQuizOutput::new());
    game.begin(&provider()).unwrap();
    play(&mut game, &[true, true, false]);
    let first_attempt = game.player_history()[0].clone();

    game.begin(&provider()).unwrap();
    assert_eq!(game.get_quiz().phase(), Phase::InProgress);
    assert_eq!(game.get_quiz().position(), 0);
    assert_eq!(game.get_quiz().score(), 0);
    assert_eq!(game.player_history(), [first_attempt.clone()]);

    play(&mut game, &[false, false, false]);
    assert_eq!(game.player_history().len(), 2);
    assert_eq!(game.player_history()[0], first_attempt);
    assert_eq!(game.player_history()[1].percentage, 0);
}

#[test]
fn provider_failure_leaves_attempt_untouched() {
    let mut game = Game::new("carol", Settings::default(), MockQuizOutput::new());
    game.begin(&provider()).unwrap();
    play(&mut game, &[true]);

    assert!(game.begin(&FailingProvider).is_err());
    assert!(game.get_quiz().is_running());
    assert_eq!(game.get_quiz().position(), 1);
    assert_eq!(game.get_quiz().score(), 1);
}

#[test]
fn unusable_batch_is_refused() {
    let mut game = Game::new("dave", Settings::default(), MockQuizOutput::new());
    let provider = FixedProvider {
        questions: vec![raw("q1", "nightmare")],
    };
    let error = game.begin(&provider).unwrap_err();
    assert!(matches!(
        error.downcast_ref::<QuizError>(),
        Some(QuizError::EmptyBatch)
    ));
    assert_eq!(game.get_quiz().phase(), Phase::Idle);
}

#[test]
fn guess_before_begin_is_rejected() {
    let mut game = Game::new("erin", Settings::default(), MockQuizOutput::new());
    assert!(matches!(
        game.guess("anything"),
        Err(QuizError::NoActiveQuestion)
    ));
    assert!(game.player_history().is_empty());
}
