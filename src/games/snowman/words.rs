use std::{fmt, str::FromStr};

use rand::{seq::IndexedRandom, Rng};
use serde::Serialize;
use thiserror::Error;

const WORDS: [&str; 5] = ["python", "git", "github", "snowman", "meltdown"];

/// The word the player has to uncover. Always non-empty lowercase letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "String")]
pub struct SecretWord(String);

impl SecretWord {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseWordError {
    #[error("secret word must not be empty")]
    Empty,
    #[error("secret word `{0}` must contain only lowercase letters")]
    NotLowercase(String),
}

impl FromStr for SecretWord {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ParseWordError::Empty);
        }

        if !s.chars().all(|c| c.is_alphabetic() && c.is_lowercase()) {
            return Err(ParseWordError::NotLowercase(s.to_owned()));
        }

        Ok(Self(s.to_owned()))
    }
}

impl fmt::Display for SecretWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SecretWord> for String {
    fn from(value: SecretWord) -> Self {
        value.0
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum WordBankError {
    #[error("word bank needs at least one word")]
    Empty,
}

/// Fixed set of candidate secret words
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<SecretWord>,
}

impl WordBank {
    pub fn new(words: Vec<SecretWord>) -> Result<Self, WordBankError> {
        if words.is_empty() {
            return Err(WordBankError::Empty);
        }

        Ok(Self { words })
    }

    /// Uniform draw from the bank.
    pub fn select_word<R: Rng + ?Sized>(&self, rng: &mut R) -> SecretWord {
        self.words
            .choose(rng)
            .cloned()
            .expect("word bank is non-empty by construction")
    }

    pub fn words(&self) -> &[SecretWord] {
        &self.words
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self {
            words: WORDS.iter().map(|w| SecretWord(w.to_string())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn builtin_words_are_valid() {
        for word in WordBank::default().words() {
            assert_eq!(word.as_str().parse::<SecretWord>().as_ref(), Ok(word));
        }
    }

    #[test]
    fn rejects_bad_words() {
        assert_eq!("".parse::<SecretWord>(), Err(ParseWordError::Empty));
        assert_eq!(
            "Git".parse::<SecretWord>(),
            Err(ParseWordError::NotLowercase("Git".to_owned()))
        );
        assert!("snow man".parse::<SecretWord>().is_err());
        assert!("r2d2".parse::<SecretWord>().is_err());
    }

    #[test]
    fn empty_bank_is_an_error() {
        assert_eq!(WordBank::new(Vec::new()).unwrap_err(), WordBankError::Empty);
    }

    #[test]
    fn selection_comes_from_the_bank() {
        let bank = WordBank::default();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let word = bank.select_word(&mut rng);
            assert!(bank.words().contains(&word));
        }
    }

    #[test]
    fn single_word_bank_always_yields_it() {
        let only: SecretWord = "git".parse().unwrap();
        let bank = WordBank::new(vec![only.clone()]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        for _ in 0..10 {
            assert_eq!(bank.select_word(&mut rng), only);
        }
    }

    #[test]
    fn same_seed_same_word() {
        let bank = WordBank::default();
        let a = bank.select_word(&mut StdRng::seed_from_u64(42));
        let b = bank.select_word(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn every_word_is_reachable() {
        let bank = WordBank::default();
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            seen.insert(bank.select_word(&mut rng));
        }

        assert_eq!(seen.len(), bank.words().len());
    }
}
