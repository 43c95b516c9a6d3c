use crate::constraints::ConstraintState;
use crate::data::Vocabulary;
use crate::encoding::*;
use crate::results::WordleError;

/// The average letter/position grid of a group of words.
///
/// `get(letter, position)` is the fraction of the words that have `letter` at `position`, so each
/// position's values sum to `1.0`.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyProfile {
    frequencies: Vec<[f64; ALPHABET_SIZE]>,
}

impl FrequencyProfile {
    /// Averages the given encodings, which must all have the same length.
    ///
    /// Returns [`WordleError::NoFeasibleWords`] if there are no encodings to average.
    pub fn from_encodings<'a, I>(encodings: I) -> Result<FrequencyProfile, WordleError>
    where
        I: IntoIterator<Item = &'a WordEncoding>,
    {
        let mut frequencies: Vec<[f64; ALPHABET_SIZE]> = Vec::new();
        let mut num_words = 0;
        for encoding in encodings {
            if num_words == 0 {
                frequencies = vec![[0.0; ALPHABET_SIZE]; encoding.len()];
            }
            for (position, letter) in encoding.letters().enumerate() {
                frequencies[position][letter.index()] += 1.0;
            }
            num_words += 1;
        }
        if num_words == 0 {
            return Err(WordleError::NoFeasibleWords);
        }
        for column in frequencies.iter_mut() {
            for frequency in column.iter_mut() {
                *frequency /= num_words as f64;
            }
        }
        Ok(FrequencyProfile { frequencies })
    }

    pub fn word_length(&self) -> usize {
        self.frequencies.len()
    }

    /// Returns the averaged value of the grid cell for this letter and position.
    pub fn get(&self, letter: Letter, position: usize) -> f64 {
        self.frequencies
            .get(position)
            .map_or(0.0, |column| column[letter.index()])
    }

    /// Returns the dot product of this profile with the word's indicator grid.
    pub fn similarity(&self, word: &WordEncoding) -> f64 {
        word.letters()
            .enumerate()
            .map(|(position, letter)| self.get(letter, position))
            .sum()
    }
}

/// Returns whether each vocabulary word satisfies the state, in vocabulary order.
pub fn feasible_set(state: &ConstraintState, vocabulary: &Vocabulary) -> Vec<bool> {
    vocabulary
        .encodings()
        .iter()
        .map(|encoding| state.is_satisfied_by(encoding))
        .collect()
}

/// Averages the encodings of every vocabulary word that satisfies the state.
pub fn feasible_set_average(
    state: &ConstraintState,
    vocabulary: &Vocabulary,
) -> Result<FrequencyProfile, WordleError> {
    FrequencyProfile::from_encodings(
        vocabulary
            .encodings()
            .iter()
            .filter(|encoding| state.is_satisfied_by(encoding)),
    )
}
