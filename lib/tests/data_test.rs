#[macro_use]
extern crate assert_matches;

use rs_wordle_engine::*;

use std::io::Cursor;
use std::result::Result;
use std::sync::Arc;

macro_rules! assert_arc_eq {
    ($arc_vec:expr, $non_arc_vec:expr) => {
        assert_eq!(
            $arc_vec as &[Arc<str>],
            $non_arc_vec
                .iter()
                .map(|thing| Arc::from(*thing))
                .collect::<Vec<Arc<_>>>()
        );
    };
}

#[test]
fn vocabulary_from_reader_succeeds() -> Result<(), WordleError> {
    let mut cursor = Cursor::new(String::from("\n\nworda\n wordb\n"));

    let vocabulary = Vocabulary::from_reader(&mut cursor)?;

    assert_eq!(vocabulary.len(), 2);
    assert_arc_eq!(&vocabulary, &["worda", "wordb"]);
    assert_eq!(vocabulary.word_length(), 5);
    Ok(())
}

#[test]
fn vocabulary_from_iterator_succeeds() -> Result<(), WordleError> {
    let vocabulary = Vocabulary::from_iterator(vec!["", "worda", "Wordb "])?;

    assert_eq!(vocabulary.len(), 2);
    assert_arc_eq!(&vocabulary, &["worda", "wordb"]);
    assert_eq!(vocabulary.word_length(), 5);
    Ok(())
}

#[test]
fn vocabulary_from_string_iterator_succeeds() -> Result<(), WordleError> {
    let vocabulary = Vocabulary::from_iterator(vec![
        "".to_string(),
        "worda".to_string(),
        "Wordb ".to_string(),
    ])?;

    assert_eq!(vocabulary.len(), 2);
    assert_arc_eq!(&vocabulary, &["worda", "wordb"]);
    Ok(())
}

#[test]
fn vocabulary_encodings_match_words() -> Result<(), WordleError> {
    let vocabulary = Vocabulary::from_iterator(vec!["abc", "cab", "bca"])?;

    assert_eq!(vocabulary.encodings().len(), vocabulary.len());
    for (word, encoding) in vocabulary.words().iter().zip(vocabulary.encodings()) {
        assert_eq!(*encoding, WordEncoding::new(word)?);
    }
    Ok(())
}

#[test]
fn vocabulary_index_of() -> Result<(), WordleError> {
    let vocabulary = Vocabulary::from_iterator(vec!["abc", "cab", "bca", "cab"])?;

    assert_eq!(vocabulary.len(), 4);
    assert_eq!(vocabulary.index_of("abc"), Some(0));
    // Duplicates resolve to the first occurrence.
    assert_eq!(vocabulary.index_of("cab"), Some(1));
    assert_eq!(vocabulary.index_of("zzz"), None);
    Ok(())
}

#[test]
fn empty_vocabulary() -> Result<(), WordleError> {
    let vocabulary = Vocabulary::from_iterator(Vec::<String>::new())?;

    assert!(vocabulary.is_empty());
    assert_eq!(vocabulary.word_length(), 0);
    Ok(())
}

#[test]
fn vocabulary_from_reader_mismatched_word_length_fails() {
    let mut cursor = Cursor::new(String::from("\nlongword\n   short\n"));

    assert_matches!(
        Vocabulary::from_reader(&mut cursor),
        Err(WordleError::WordLength(8))
    );
}

#[test]
fn vocabulary_with_unsupported_character_fails() {
    assert_matches!(
        Vocabulary::from_iterator(vec!["abc", "a c"]),
        Err(WordleError::UnsupportedCharacter(' '))
    );
}
