use crate::engine::Engine;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::Arc;

/// Chooses the next word to guess, based on what the engine has revealed so far.
pub trait Guesser {
    /// Returns the next word to guess, or `None` if there is nothing sensible left to guess.
    fn select_next_guess(&mut self, engine: &Engine) -> Option<Arc<str>>;
}

impl<G: Guesser + ?Sized> Guesser for Box<G> {
    fn select_next_guess(&mut self, engine: &Engine) -> Option<Arc<str>> {
        (**self).select_next_guess(engine)
    }
}

/// Guesses the vocabulary word closest to the "centroid" of the feasible words.
///
/// The centroid is the average letter/position grid of every feasible word. Each vocabulary word is
/// scored by the dot product of its own grid with the centroid, and the highest score wins. Ties go
/// to the word that comes first in the vocabulary.
///
/// ```
/// use rs_wordle_engine::CentroidGuesser;
/// use rs_wordle_engine::Engine;
/// use rs_wordle_engine::Guesser;
///
/// let engine = Engine::from_words("abc", ["aaa", "aab", "bcd", "abc"], false).unwrap();
/// let mut guesser = CentroidGuesser::new();
///
/// assert_eq!(guesser.select_next_guess(&engine).as_deref(), Some("aaa"));
/// ```
#[derive(Clone, Debug, Default)]
pub struct CentroidGuesser;

impl CentroidGuesser {
    pub fn new() -> CentroidGuesser {
        CentroidGuesser
    }
}

impl Guesser for CentroidGuesser {
    fn select_next_guess(&mut self, engine: &Engine) -> Option<Arc<str>> {
        let centroid = engine.feasible_set_average().ok()?;
        let mut best: Option<(usize, f64)> = None;
        for (index, encoding) in engine.vocabulary_encodings().iter().enumerate() {
            let score = centroid.similarity(encoding);
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((index, score));
            }
        }
        best.map(|(index, _)| Arc::clone(&engine.vocabulary().words()[index]))
    }
}

/// Guesses at random from the words that are still feasible.
#[derive(Clone, Debug)]
pub struct RandomGuesser {
    rng: StdRng,
}

impl RandomGuesser {
    /// Creates a guesser seeded from the operating system's randomness.
    pub fn new() -> RandomGuesser {
        RandomGuesser {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a guesser that always makes the same choices for the same seed.
    pub fn from_seed(seed: u64) -> RandomGuesser {
        RandomGuesser {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomGuesser {
    fn default() -> Self {
        RandomGuesser::new()
    }
}

impl Guesser for RandomGuesser {
    fn select_next_guess(&mut self, engine: &Engine) -> Option<Arc<str>> {
        engine.feasible_words().choose(&mut self.rng).map(Arc::clone)
    }
}
