use crate::encoding::WordEncoding;
use crate::results::WordleError;
use std::collections::HashMap;
use std::io::BufRead;
use std::ops::Deref;
use std::sync::Arc;

/// The closed set of words that can be guessed, along with their precomputed encodings.
///
/// Encoding every word is the main one-time cost of setting up a game, so a vocabulary is meant to
/// be built once and shared between engines with an [`Arc`].
///
/// Words are expected to be unique. Duplicates are kept, but only waste space: looking up a
/// duplicated word always finds its first occurrence.
#[derive(Clone, Debug)]
pub struct Vocabulary {
    words: Vec<Arc<str>>,
    encodings: Vec<WordEncoding>,
    index_by_word: HashMap<Arc<str>, usize>,
    word_length: usize,
}

impl Vocabulary {
    /// Constructs a new `Vocabulary` by reading words from the given reader.
    ///
    /// The reader should provide one word per line. Each word will be trimmed and converted to
    /// lower case. Blank lines are skipped.
    pub fn from_reader<R: BufRead>(word_reader: R) -> Result<Self, WordleError> {
        let words = word_reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        Vocabulary::from_iterator(words)
    }

    /// Constructs a new `Vocabulary` using the words from the given iterator.
    ///
    /// Each word will be trimmed and converted to lower case. Blank words are skipped. All
    /// remaining words must have the same length as the first one.
    ///
    /// ```
    /// use rs_wordle_engine::Vocabulary;
    /// use rs_wordle_engine::WordleError;
    ///
    /// let vocabulary = Vocabulary::from_iterator(["abc", "DEF "]).unwrap();
    /// assert_eq!(vocabulary.words().len(), 2);
    /// assert_eq!(vocabulary.index_of("def"), Some(1));
    ///
    /// assert_eq!(
    ///     Vocabulary::from_iterator(["abc", "de"]).unwrap_err(),
    ///     WordleError::WordLength(3));
    /// ```
    pub fn from_iterator<S, I>(words: I) -> Result<Self, WordleError>
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let mut word_length = 0;
        let mut all_words: Vec<Arc<str>> = Vec::new();
        let mut encodings: Vec<WordEncoding> = Vec::new();
        let mut index_by_word: HashMap<Arc<str>, usize> = HashMap::new();
        for word in words {
            let word = word.as_ref().trim().to_lowercase();
            if word.is_empty() {
                continue;
            }
            let encoding = WordEncoding::new(&word)?;
            if all_words.is_empty() {
                word_length = encoding.len();
            } else if encoding.len() != word_length {
                return Err(WordleError::WordLength(word_length));
            }
            let word: Arc<str> = Arc::from(word.as_str());
            index_by_word
                .entry(Arc::clone(&word))
                .or_insert(all_words.len());
            all_words.push(word);
            encodings.push(encoding);
        }
        Ok(Vocabulary {
            words: all_words,
            encodings,
            index_by_word,
            word_length,
        })
    }

    /// Returns the number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the length of each word, or `0` if there are no words.
    pub fn word_length(&self) -> usize {
        self.word_length
    }

    /// Retrieves the full list of words, in their original order.
    pub fn words(&self) -> &[Arc<str>] {
        &self.words
    }

    /// Retrieves the encoding of each word, in the same order as [`Vocabulary::words`].
    pub fn encodings(&self) -> &[WordEncoding] {
        &self.encodings
    }

    /// Returns the position of the word in this vocabulary, if present.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index_by_word.get(word).copied()
    }
}

impl Deref for Vocabulary {
    type Target = [Arc<str>];

    fn deref(&self) -> &Self::Target {
        &self.words
    }
}
