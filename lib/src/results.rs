use std::io;
use thiserror::Error;

/// Indicates that an error occurred while building or querying an [`Engine`](crate::Engine).
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum WordleError {
    /// Indicates that a word did not have the expected length. Provides the expected length.
    #[error("words must have length {0}")]
    WordLength(usize),
    /// Indicates that a character is not in the supported `a`-`z` alphabet.
    #[error("unsupported character {0:?}, only 'a' to 'z' are supported")]
    UnsupportedCharacter(char),
    /// Indicates that no vocabulary word is consistent with the feedback seen so far, so there is
    /// nothing to average.
    #[error("no words in the vocabulary satisfy the current constraints")]
    NoFeasibleWords,
    /// Indicates that a word was requested from a vocabulary with no words in it.
    #[error("the vocabulary is empty")]
    EmptyVocabulary,
    /// Wraps an error that occurred while reading words.
    #[error("failed to read words: {0}")]
    Io(String),
}

impl From<io::Error> for WordleError {
    fn from(error: io::Error) -> Self {
        WordleError::Io(error.to_string())
    }
}

/// Whether the game was won or lost by the guesser.
#[derive(Debug, Eq, PartialEq, Clone, Copy)]
pub enum GameResult {
    /// Indicates that the guesser found the secret, and provides the number of guesses it took.
    Success(u32),
    /// Indicates that the guesser ran out of rounds or suggestions, and provides the number of
    /// guesses that were made.
    Failure(u32),
}
