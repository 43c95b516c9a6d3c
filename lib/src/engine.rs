use crate::constraints::ConstraintState;
use crate::data::Vocabulary;
use crate::encoding::WordEncoding;
use crate::feasibility;
use crate::feasibility::FrequencyProfile;
use crate::results::WordleError;
use std::fmt;
use std::sync::Arc;

/// The hidden word. Only answers equality checks and feedback comparisons.
#[derive(Clone)]
struct Secret {
    word: Box<str>,
    encoding: WordEncoding,
}

impl Secret {
    fn new(word: &str) -> Result<Secret, WordleError> {
        Ok(Secret {
            word: Box::from(word),
            encoding: WordEncoding::new(word)?,
        })
    }

    fn is(&self, word: &str) -> bool {
        *self.word == *word
    }

    fn len(&self) -> usize {
        self.encoding.len()
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}

/// Plays one game against a fixed secret word, tracking everything the guesses have revealed.
///
/// The secret can't be read back out of the engine. Guessers only get to see the accumulated
/// [`ConstraintState`] and which vocabulary words are still feasible.
///
/// ```
/// use rs_wordle_engine::Engine;
///
/// let mut engine = Engine::from_words("abcd", ["abcd", "aacb", "aacd", "abce"], false).unwrap();
///
/// assert!(!engine.guess("aacb", true));
/// assert_eq!(engine.feasible_set(), vec![true, false, false, true]);
/// assert!(engine.guess("abcd", true));
/// ```
#[derive(Clone, Debug)]
pub struct Engine {
    secret: Secret,
    vocabulary: Arc<Vocabulary>,
    state: ConstraintState,
    num_tries: u32,
    history: Option<Vec<Arc<str>>>,
}

impl Engine {
    /// Creates an engine for the given secret, sharing an already-built vocabulary.
    ///
    /// The secret does not need to be in the vocabulary, but if it isn't then it can never be in
    /// the feasible set. Returns [`WordleError::WordLength`] if the secret is empty or doesn't
    /// match the vocabulary's word length.
    pub fn new(
        secret: &str,
        vocabulary: Arc<Vocabulary>,
        record_history: bool,
    ) -> Result<Engine, WordleError> {
        let secret = Secret::new(secret)?;
        if secret.len() == 0 {
            return Err(WordleError::WordLength(vocabulary.word_length()));
        }
        if !vocabulary.is_empty() && vocabulary.word_length() != secret.len() {
            return Err(WordleError::WordLength(vocabulary.word_length()));
        }
        let state = ConstraintState::new(secret.len());
        Ok(Engine {
            secret,
            vocabulary,
            state,
            num_tries: 0,
            history: if record_history {
                Some(Vec::new())
            } else {
                None
            },
        })
    }

    /// Builds a vocabulary from the given words, then creates an engine with it.
    pub fn from_words<S, I>(
        secret: &str,
        words: I,
        record_history: bool,
    ) -> Result<Engine, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        Engine::new(
            secret,
            Arc::new(Vocabulary::from_iterator(words)?),
            record_history,
        )
    }

    /// Makes a guess, and returns `true` iff it is exactly the secret word.
    ///
    /// Every call counts as a try, and is recorded if history is enabled. If `update_state` is
    /// set and the word is in the vocabulary, the feedback for this guess is merged into the
    /// [`ConstraintState`]. Guesses that are not in the vocabulary leave the state untouched.
    ///
    /// The word is matched verbatim against the vocabulary, which holds trimmed lowercase words.
    /// A guess like `"ABC"` is therefore out of vocabulary, and can't win against the secret `"abc"`.
    pub fn guess(&mut self, word: &str, update_state: bool) -> bool {
        self.num_tries += 1;
        let maybe_index = self.vocabulary.index_of(word);
        if let Some(history) = self.history.as_mut() {
            history.push(match maybe_index {
                Some(index) => Arc::clone(&self.vocabulary.words()[index]),
                None => Arc::from(word),
            });
        }
        if update_state && !word.is_empty() {
            if let Some(index) = maybe_index {
                let delta = ConstraintState::from_guess(
                    &self.vocabulary.encodings()[index],
                    &self.secret.encoding,
                );
                let mut next_state = self.state.clone();
                next_state.merge(&delta);
                self.state = next_state;
            }
        }
        self.secret.is(word)
    }

    /// The information revealed by all state-updating guesses so far.
    pub fn state(&self) -> &ConstraintState {
        &self.state
    }

    /// Returns whether each vocabulary word is still consistent with the state, in vocabulary
    /// order.
    ///
    /// This lines up with [`Vocabulary::words`], not with the list the vocabulary was built from:
    /// blank entries in that list were skipped.
    pub fn feasible_set(&self) -> Vec<bool> {
        feasibility::feasible_set(&self.state, &self.vocabulary)
    }

    /// Returns the vocabulary words that are still consistent with the state.
    pub fn feasible_words(&self) -> Vec<Arc<str>> {
        self.vocabulary
            .words()
            .iter()
            .zip(self.feasible_set())
            .filter_map(|(word, is_feasible)| {
                if is_feasible {
                    return Some(Arc::clone(word));
                }
                None
            })
            .collect()
    }

    /// Averages the encodings of the feasible words.
    ///
    /// Returns [`WordleError::NoFeasibleWords`] if no word is feasible.
    pub fn feasible_set_average(&self) -> Result<FrequencyProfile, WordleError> {
        feasibility::feasible_set_average(&self.state, &self.vocabulary)
    }

    /// The number of guesses made so far, including ones that did not update the state.
    pub fn try_count(&self) -> u32 {
        self.num_tries
    }

    pub fn vocabulary(&self) -> &Arc<Vocabulary> {
        &self.vocabulary
    }

    pub fn vocabulary_encodings(&self) -> &[WordEncoding] {
        self.vocabulary.encodings()
    }

    /// Every guess made so far, in order, or `None` if history is not being recorded.
    pub fn history(&self) -> Option<&[Arc<str>]> {
        self.history.as_deref()
    }
}
