use crate::results::WordleError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of letters in the supported alphabet (`a` to `z`).
pub const ALPHABET_SIZE: usize = 26;

/// The longest word that can be encoded. Letter counts are stored as `u8`.
pub const MAX_WORD_LENGTH: usize = u8::MAX as usize;

/// A single lowercase letter, stored by its rank in the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Letter(u8);

impl Letter {
    /// Returns the zero-based rank of this letter, where `a` is `0`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the letter with the given rank, if it is in the alphabet.
    pub fn from_index(index: usize) -> Option<Letter> {
        if index < ALPHABET_SIZE {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    pub fn to_char(self) -> char {
        (b'a' + self.0) as char
    }

    /// Iterates over every letter in alphabetical order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_SIZE as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = WordleError;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        if value.is_ascii_lowercase() {
            Ok(Letter(value as u8 - b'a'))
        } else {
            Err(WordleError::UnsupportedCharacter(value))
        }
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A set of letters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterSet(u32);

impl LetterSet {
    /// Creates an empty set.
    pub fn new() -> LetterSet {
        LetterSet(0)
    }

    /// Creates a set containing only the given letter.
    pub fn single(letter: Letter) -> LetterSet {
        LetterSet(1 << letter.0)
    }

    pub fn insert(&mut self, letter: Letter) {
        self.0 |= 1 << letter.0;
    }

    pub fn contains(&self, letter: Letter) -> bool {
        self.0 & (1 << letter.0) != 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns the letters in either set.
    pub fn union(&self, other: &LetterSet) -> LetterSet {
        LetterSet(self.0 | other.0)
    }

    /// Returns `true` iff every letter in this set is also in `other`.
    pub fn is_subset(&self, other: &LetterSet) -> bool {
        self.0 & !other.0 == 0
    }

    /// Iterates over the letters in this set in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(|letter| self.contains(*letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = LetterSet::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}

/// A count for every letter in the alphabet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LetterCounts([u8; ALPHABET_SIZE]);

impl LetterCounts {
    /// Creates counts where every letter has the given count.
    pub fn splat(count: u8) -> LetterCounts {
        LetterCounts([count; ALPHABET_SIZE])
    }

    pub fn get(&self, letter: Letter) -> u8 {
        self.0[letter.index()]
    }

    pub fn set(&mut self, letter: Letter, count: u8) {
        self.0[letter.index()] = count;
    }

    /// Returns the total of all counts.
    pub fn sum(&self) -> u32 {
        self.0.iter().map(|count| *count as u32).sum()
    }

    /// Iterates over each letter and its count, in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (Letter, u8)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(index, count)| (Letter(index as u8), *count))
    }
}

impl Default for LetterCounts {
    fn default() -> Self {
        LetterCounts::splat(0)
    }
}

/// The letter/position indicator grid for a single word.
///
/// Conceptually this is an `[ALPHABET_SIZE x word length]` grid of booleans where a cell is set iff
/// that letter is at that position. Only the letter at each position is stored, so every position
/// always holds exactly one letter.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WordEncoding {
    letters: Box<[Letter]>,
    counts: LetterCounts,
}

impl WordEncoding {
    /// Encodes the given word.
    ///
    /// Returns [`WordleError::UnsupportedCharacter`] if the word contains anything other than `a`
    /// to `z`, or [`WordleError::WordLength`] if it is longer than [`MAX_WORD_LENGTH`]. Words are
    /// not lowercased or trimmed here.
    ///
    /// ```
    /// use rs_wordle_engine::Letter;
    /// use rs_wordle_engine::WordEncoding;
    ///
    /// let encoding = WordEncoding::new("abb").unwrap();
    ///
    /// assert!(encoding.is_set(Letter::try_from('b').unwrap(), 2));
    /// assert_eq!(encoding.count(Letter::try_from('b').unwrap()), 2);
    /// ```
    pub fn new(word: &str) -> Result<WordEncoding, WordleError> {
        if word.chars().count() > MAX_WORD_LENGTH {
            return Err(WordleError::WordLength(MAX_WORD_LENGTH));
        }
        let mut counts = LetterCounts::default();
        let letters = word
            .chars()
            .map(|c| {
                let letter = Letter::try_from(c)?;
                counts.0[letter.index()] += 1;
                Ok(letter)
            })
            .collect::<Result<Box<[Letter]>, WordleError>>()?;
        Ok(WordEncoding { letters, counts })
    }

    /// The number of positions in the word.
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    pub fn letter_at(&self, position: usize) -> Letter {
        self.letters[position]
    }

    /// Returns whether the grid cell for this letter and position is set.
    pub fn is_set(&self, letter: Letter, position: usize) -> bool {
        self.letters
            .get(position)
            .map_or(false, |other| *other == letter)
    }

    /// Returns the set cells in one column of the grid. This always contains exactly one letter.
    pub fn column(&self, position: usize) -> LetterSet {
        LetterSet::single(self.letters[position])
    }

    /// The number of times the letter occurs in the word.
    pub fn count(&self, letter: Letter) -> u8 {
        self.counts.get(letter)
    }

    pub fn counts(&self) -> &LetterCounts {
        &self.counts
    }

    /// Iterates over the word's letters in order.
    pub fn letters(&self) -> impl Iterator<Item = Letter> + '_ {
        self.letters.iter().copied()
    }
}

impl fmt::Display for WordEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for letter in self.letters() {
            write!(f, "{}", letter)?;
        }
        Ok(())
    }
}
