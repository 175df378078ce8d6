use anyhow::{anyhow, Context, Result};
use clap::{Parser, ValueEnum};
use directories_next::BaseDirs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use tracing::debug;

use adaptive_trivia::game::quiz::settings::Settings;
use adaptive_trivia::game::Game;
use adaptive_trivia::output::terminal::TerminalOutput;
use adaptive_trivia::provider::{CsvProvider, OpenTdbProvider, QuestionProvider};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Csv,
    Opentdb,
}

#[derive(Parser)]
#[command(name = "adaptive-trivia", version, about = "Trivia quiz that adapts to how well you play")]
struct Cli {
    /// Question file (defaults to questions.csv in the user data directory)
    #[arg(long)]
    questions: Option<PathBuf>,

    /// Question file format, guessed from the file extension when omitted
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Name the attempts are recorded under
    #[arg(long, default_value = "player")]
    username: String,

    /// Pause before showing results, in milliseconds
    #[arg(long, default_value = "500")]
    results_delay_ms: u64,
}

fn default_questions_path() -> Result<PathBuf> {
    let mut path = BaseDirs::new()
        .context("could not locate system directories")?
        .data_dir()
        .to_path_buf();
    path.push("adaptive-trivia");
    path.push("questions.csv");
    Ok(path)
}

fn make_provider(path: &Path, format: Option<Format>) -> Box<dyn QuestionProvider> {
    let format = format.unwrap_or_else(|| match path.extension().and_then(|e| e.to_str()) {
        Some("json") => Format::Opentdb,
        _ => Format::Csv,
    });
    match format {
        Format::Csv => Box::new(CsvProvider::new(path)),
        Format::Opentdb => Box::new(OpenTdbProvider::new(path)),
    }
}

fn prompt_line(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn play_attempt(game: &mut Game<TerminalOutput>, input: &mut impl BufRead) -> Result<bool> {
    while game.get_quiz().is_running() {
        let line = match prompt_line(input, "> ")? {
            Some(line) => line,
            None => return Ok(false),
        };
        let choices = game
            .get_quiz()
            .current_question()
            .ok_or_else(|| anyhow!("No current question"))?
            .choices()
            .to_vec();
        let answer = match line.parse::<usize>() {
            Ok(n) if n >= 1 && n <= choices.len() => choices[n - 1].clone(),
            _ => line,
        };
        if let Err(e) = game.guess(&answer) {
            debug!("Ignored answer: {}", e);
        }
    }
    Ok(true)
}

fn print_results(game: &Game<TerminalOutput>) {
    let player = game.get_player();
    if let Some(attempt) = player.history().last() {
        println!(
            "{}: {} / {} ({}%)",
            player.username(),
            attempt.score,
            attempt.total,
            attempt.percentage
        );
    }
    if let Some(best) = player.best_attempt() {
        println!(
            "Best: {}% on {}",
            best.percentage,
            best.completed_at.format("%Y-%m-%d %H:%M")
        );
    }
    for (i, attempt) in player.history().iter().enumerate() {
        println!(
            "  #{} {} / {} ({}%)",
            i + 1,
            attempt.score,
            attempt.total,
            attempt.percentage
        );
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("adaptive_trivia=info".parse()?),
        )
        .init();

    let cli = Cli::parse();
    let questions_path = match cli.questions {
        Some(path) => path,
        None => default_questions_path()?,
    };
    let provider = make_provider(&questions_path, cli.format);
    let results_delay = Duration::from_millis(cli.results_delay_ms);

    let mut game = Game::new(cli.username, Settings::default(), TerminalOutput::new());
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        game.begin(provider.as_ref())
            .with_context(|| format!("Could not start quiz from {}", questions_path.display()))?;

        if !play_attempt(&mut game, &mut input)? {
            break;
        }

        thread::sleep(results_delay);
        print_results(&game);

        match prompt_line(&mut input, "\nPlay again? [y/N] ")? {
            Some(answer) if answer.eq_ignore_ascii_case("y") => continue,
            _ => break,
        }
    }

    Ok(())
}
