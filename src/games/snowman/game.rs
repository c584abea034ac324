use std::fmt;

use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, trace};

use crate::core::game::{Game, Status};
use crate::games::snowman::stages::MAX_MISTAKES;
use crate::games::snowman::words::{SecretWord, WordBank};

/// A single guessed letter, always lowercase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Letter(char);

impl Letter {
    pub fn as_char(self) -> char {
        self.0
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GuessError {
    #[error("Invalid input: Guessing without characters is not allowed!")]
    EmptyInput,
    #[error("Invalid input: Only single alphabetical characters are allowed!")]
    TooManyCharacters,
    #[error("Invalid input: Guess must be a letter!")]
    NonAlphabetic,
}

/// Accepts exactly one alphabetic character, lowercased.
pub fn parse_guess(raw_input: &str) -> Result<Letter, GuessError> {
    let mut chars = raw_input.chars();

    let letter = match (chars.next(), chars.next()) {
        (None, _) => return Err(GuessError::EmptyInput),
        (Some(_), Some(_)) => return Err(GuessError::TooManyCharacters),
        (Some(c), None) => c,
    };

    if !letter.is_alphabetic() {
        return Err(GuessError::NonAlphabetic);
    }

    Ok(Letter(to_lowercase(letter)))
}

// Some letters lowercase to several chars; those are kept as typed.
fn to_lowercase(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(l), None) => l,
        _ => c,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Won,
    Lost,
}

/// Snapshot of a session, logged when it ends
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub secret: SecretWord,
    pub guessed: Vec<Letter>,
    pub mistakes: usize,
    pub outcome: Option<Outcome>,
}

/// Session state for one round of Snowman Meltdown
#[derive(Debug, Clone)]
pub struct SnowmanGame {
    secret: SecretWord,
    guessed: Vec<Letter>,
    mistakes: usize,
}

impl SnowmanGame {
    pub fn new(secret: SecretWord) -> Self {
        Self {
            secret,
            guessed: Vec::new(),
            mistakes: 0,
        }
    }

    /// Start a session with a word drawn from the bank
    pub fn start<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R) -> Self {
        let secret = bank.select_word(rng);
        info!(length = secret.as_str().len(), "secret word selected");
        trace!(%secret);
        Self::new(secret)
    }

    pub fn secret(&self) -> &SecretWord {
        &self.secret
    }

    pub fn guessed(&self) -> &[Letter] {
        &self.guessed
    }

    pub fn mistakes(&self) -> usize {
        self.mistakes
    }

    fn has_guessed(&self, c: char) -> bool {
        self.guessed.iter().any(|l| l.0 == c)
    }

    /// Guessed letters shown, others as `_`, separated by single spaces
    pub fn masked_word(&self) -> String {
        self.secret
            .chars()
            .map(|c| if self.has_guessed(c) { c } else { '_' })
            .map(String::from)
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn is_word_complete(&self) -> bool {
        self.secret.chars().all(|c| self.has_guessed(c))
    }

    /// Apply one validated guess. Returns whether it was a hit.
    pub fn guess(&mut self, letter: Letter) -> bool {
        if self.status() != Status::Playing {
            return false;
        }

        let hit = self.secret.contains(letter.0);
        if hit {
            if !self.guessed.contains(&letter) {
                self.guessed.push(letter);
            }
        } else {
            self.mistakes += 1;
        }

        debug!(%letter, hit, mistakes = self.mistakes, "guess applied");
        hit
    }

    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            secret: self.secret.clone(),
            guessed: self.guessed.clone(),
            mistakes: self.mistakes,
            outcome: match self.status() {
                Status::Finished(outcome) => Some(outcome),
                Status::Playing => None,
            },
        }
    }
}

impl Game for SnowmanGame {
    type Input = Letter;
    type Error = GuessError;
    type Outcome = Outcome;

    const NAME: &'static str = "Snowman Meltdown";

    fn parse_line(line: &str) -> Result<Self::Input, Self::Error> {
        parse_guess(line)
    }

    fn handle_input(&mut self, input: &Self::Input) {
        self.guess(*input);
    }

    fn status(&self) -> Status<Self::Outcome> {
        if self.mistakes >= MAX_MISTAKES {
            Status::Finished(Outcome::Lost)
        } else if self.is_word_complete() {
            Status::Finished(Outcome::Won)
        } else {
            Status::Playing
        }
    }
}
