pub mod error;
pub mod game;
pub mod output;
pub mod provider;

pub use crate::error::QuizError;
pub use crate::game::Game;
