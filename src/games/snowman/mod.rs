/// Snowman Meltdown - guess the word before the snowman melts
pub mod game;
pub mod renderer;
pub mod stages;
pub mod words;

pub use game::{parse_guess, GuessError, Letter, Outcome, SessionSummary, SnowmanGame};
pub use renderer::SnowmanRenderer;
pub use words::{ParseWordError, SecretWord, WordBank, WordBankError};
