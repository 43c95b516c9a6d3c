use crate::data::Vocabulary;
use crate::engine::Engine;
use crate::guessers::Guesser;
use crate::results::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;

/// The default number of rounds a game may last before the guesser loses.
pub const DEFAULT_MAX_ROUNDS: u32 = 100;

/// Pairs a guesser with an engine, and plays until the guesser wins or runs out of rounds.
#[derive(Debug)]
pub struct Game<G: Guesser> {
    engine: Engine,
    guesser: G,
    max_rounds: u32,
}

impl<G: Guesser> Game<G> {
    /// Sets up a game with the given secret word.
    pub fn new(
        guesser: G,
        vocabulary: Arc<Vocabulary>,
        secret: &str,
        record_history: bool,
        max_rounds: u32,
    ) -> Result<Game<G>, WordleError> {
        Ok(Game {
            engine: Engine::new(secret, vocabulary, record_history)?,
            guesser,
            max_rounds,
        })
    }

    /// Sets up a game with a secret chosen at random from the vocabulary.
    ///
    /// Returns [`WordleError::EmptyVocabulary`] if there are no words to choose from.
    pub fn with_random_secret<R: Rng + ?Sized>(
        guesser: G,
        vocabulary: Arc<Vocabulary>,
        record_history: bool,
        max_rounds: u32,
        rng: &mut R,
    ) -> Result<Game<G>, WordleError> {
        let secret = vocabulary
            .words()
            .choose(rng)
            .map(Arc::clone)
            .ok_or(WordleError::EmptyVocabulary)?;
        Game::new(guesser, vocabulary, &secret, record_history, max_rounds)
    }

    /// Plays until the secret is guessed, the round limit is reached, or the guesser has no more
    /// suggestions.
    pub fn play(&mut self) -> GameResult {
        while self.engine.try_count() < self.max_rounds {
            let guess = match self.guesser.select_next_guess(&self.engine) {
                Some(guess) => guess,
                None => return GameResult::Failure(self.engine.try_count()),
            };
            if self.engine.guess(&guess, true) {
                return GameResult::Success(self.engine.try_count());
            }
        }
        GameResult::Failure(self.engine.try_count())
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }
}

/// Attempts to guess the given word within the maximum number of guesses, using the given guesser.
///
/// ```
/// use std::sync::Arc;
/// use rs_wordle_engine::CentroidGuesser;
/// use rs_wordle_engine::GameResult;
/// use rs_wordle_engine::Vocabulary;
/// use rs_wordle_engine::play_game_with_guesser;
///
/// let vocabulary = Arc::new(Vocabulary::from_iterator(["aaa", "aab", "bcd", "abc"]).unwrap());
///
/// assert_eq!(
///     play_game_with_guesser("abc", 10, vocabulary, CentroidGuesser::new()),
///     Ok(GameResult::Success(2)));
/// ```
pub fn play_game_with_guesser<G: Guesser>(
    secret: &str,
    max_num_guesses: u32,
    vocabulary: Arc<Vocabulary>,
    guesser: G,
) -> Result<GameResult, WordleError> {
    let mut game = Game::new(guesser, vocabulary, secret, false, max_num_guesses)?;
    Ok(game.play())
}
