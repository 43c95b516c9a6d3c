use crate::encoding::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything that has been deduced about the secret word from the guesses so far.
///
/// This only ever gains information: lower bounds never decrease, upper bounds never increase, and
/// known or wrong cells are never unset. Only the [`Engine`](crate::Engine) can update it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConstraintState {
    word_length: usize,
    /// The minimum number of times each letter must appear.
    lower_bounds: LetterCounts,
    /// The maximum number of times each letter may appear.
    upper_bounds: LetterCounts,
    /// The letters known to be at each position.
    known: Vec<LetterSet>,
    /// The letters known not to be at each position.
    wrong: Vec<LetterSet>,
}

impl ConstraintState {
    /// Creates a state for words of the given length, with nothing known.
    ///
    /// Letter counts saturate at `u8::MAX`, which no encodable word can exceed.
    pub fn new(word_length: usize) -> ConstraintState {
        ConstraintState {
            word_length,
            lower_bounds: LetterCounts::splat(0),
            upper_bounds: LetterCounts::splat(u8::try_from(word_length).unwrap_or(u8::MAX)),
            known: vec![LetterSet::new(); word_length],
            wrong: vec![LetterSet::new(); word_length],
        }
    }

    /// Computes the information revealed by guessing `guess` when the answer is `secret`.
    ///
    /// Both encodings must have the same length.
    pub(crate) fn from_guess(guess: &WordEncoding, secret: &WordEncoding) -> ConstraintState {
        debug_assert_eq!(guess.len(), secret.len());
        let mut delta = ConstraintState::new(guess.len());
        for letter in Letter::all() {
            let num_guessed = guess.count(letter);
            let num_in_secret = secret.count(letter);
            delta
                .lower_bounds
                .set(letter, num_guessed.min(num_in_secret));
            // Guessing more copies than the secret holds pins down the exact count.
            if num_guessed > num_in_secret {
                delta.upper_bounds.set(letter, num_in_secret);
            }
        }
        for (position, (guessed, actual)) in guess.letters().zip(secret.letters()).enumerate() {
            if guessed == actual {
                delta.known[position].insert(guessed);
            } else {
                delta.wrong[position].insert(guessed);
            }
        }
        delta
    }

    /// Adds the information in `other` to this state.
    pub(crate) fn merge(&mut self, other: &ConstraintState) {
        debug_assert_eq!(self.word_length, other.word_length);
        for letter in Letter::all() {
            self.lower_bounds.set(
                letter,
                self.lower_bounds.get(letter).max(other.lower_bounds.get(letter)),
            );
            self.upper_bounds.set(
                letter,
                self.upper_bounds.get(letter).min(other.upper_bounds.get(letter)),
            );
        }
        for (known, other_known) in self.known.iter_mut().zip(other.known.iter()) {
            *known = known.union(other_known);
        }
        for (wrong, other_wrong) in self.wrong.iter_mut().zip(other.wrong.iter()) {
            *wrong = wrong.union(other_wrong);
        }
        debug_assert!(self.is_consistent());
    }

    /// Returns `true` iff no letter's bounds have crossed and no cell is both known and wrong.
    pub fn is_consistent(&self) -> bool {
        Letter::all()
            .all(|letter| self.lower_bounds.get(letter) <= self.upper_bounds.get(letter))
            && self
                .known
                .iter()
                .zip(self.wrong.iter())
                .all(|(known, wrong)| known.iter().all(|letter| !wrong.contains(letter)))
    }

    /// Returns `true` iff the given word satisfies every constraint in this state.
    pub fn is_satisfied_by(&self, word: &WordEncoding) -> bool {
        word.len() == self.word_length
            && word
                .counts()
                .iter()
                .all(|(letter, count)| count >= self.lower_bounds.get(letter))
            && word
                .counts()
                .iter()
                .all(|(letter, count)| count <= self.upper_bounds.get(letter))
            && self
                .known
                .iter()
                .enumerate()
                .all(|(position, known)| known.is_subset(&word.column(position)))
            && self
                .wrong
                .iter()
                .enumerate()
                .all(|(position, wrong)| !wrong.contains(word.letter_at(position)))
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// The minimum number of times the letter must appear in the secret.
    pub fn lower_bound(&self, letter: Letter) -> u8 {
        self.lower_bounds.get(letter)
    }

    /// The maximum number of times the letter may appear in the secret.
    pub fn upper_bound(&self, letter: Letter) -> u8 {
        self.upper_bounds.get(letter)
    }

    pub fn lower_bounds(&self) -> &LetterCounts {
        &self.lower_bounds
    }

    pub fn upper_bounds(&self) -> &LetterCounts {
        &self.upper_bounds
    }

    /// Returns `true` if the letter is known to be at this position.
    pub fn is_known(&self, letter: Letter, position: usize) -> bool {
        self.known
            .get(position)
            .map_or(false, |known| known.contains(letter))
    }

    /// Returns `true` if the letter is known not to be at this position.
    pub fn is_wrong(&self, letter: Letter, position: usize) -> bool {
        self.wrong
            .get(position)
            .map_or(false, |wrong| wrong.contains(letter))
    }

    pub fn known_at(&self, position: usize) -> LetterSet {
        self.known[position]
    }

    pub fn wrong_at(&self, position: usize) -> LetterSet {
        self.wrong[position]
    }
}
