#[macro_use]
extern crate assert_matches;

use rs_wordle_engine::*;

use std::result::Result;
use std::sync::Arc;

macro_rules! test_guesser {
    ($construct_guesser_fn:ident) => {
        #[test]
        fn solve_wordle() -> Result<(), WordleError> {
            let vocabulary = Arc::new(Vocabulary::from_iterator(vec![
                "alpha", "allot", "begot", "below", "endow", "ingot",
            ])?);
            let num_words = vocabulary.len() as u32;
            let guesser = $construct_guesser_fn();

            let result = play_game_with_guesser("alpha", num_words, vocabulary, guesser)?;

            assert_matches!(result, GameResult::Success(_));
            Ok(())
        }

        #[test]
        fn only_suggests_feasible_words() -> Result<(), WordleError> {
            let mut engine = Engine::from_words(
                "endow",
                vec!["alpha", "allot", "begot", "below", "endow", "ingot"],
                false,
            )?;
            let mut guesser = $construct_guesser_fn();
            engine.guess("below", true);

            let guess = guesser.select_next_guess(&engine);

            assert_eq!(guess.as_deref(), Some("endow"));
            Ok(())
        }

        #[test]
        fn no_suggestion_when_nothing_is_feasible() -> Result<(), WordleError> {
            let mut engine = Engine::from_words("xyz", vec!["aad", "aab", "bca", "abc"], false)?;
            let mut guesser = $construct_guesser_fn();
            engine.guess("abc", true);

            assert_eq!(guesser.select_next_guess(&engine), None);
            Ok(())
        }
    };
}

mod centroid_guesser {

    use super::*;

    fn create_guesser() -> CentroidGuesser {
        CentroidGuesser::new()
    }

    test_guesser!(create_guesser);

    #[test]
    fn select_next_guess_picks_closest_to_centroid() -> Result<(), WordleError> {
        let engine = Engine::from_words("abc", vec!["aaa", "aab", "bcd", "abc"], false)?;
        let mut guesser = CentroidGuesser::new();

        assert_eq!(guesser.select_next_guess(&engine).as_deref(), Some("aaa"));
        Ok(())
    }

    #[test]
    fn select_next_guess_after_update() -> Result<(), WordleError> {
        let mut engine = Engine::from_words("abc", vec!["aaa", "aab", "bcd", "abc"], false)?;
        let mut guesser = CentroidGuesser::new();

        engine.guess("aaa", true);

        assert_eq!(guesser.select_next_guess(&engine).as_deref(), Some("abc"));
        Ok(())
    }

    #[test]
    fn select_next_guess_ties_go_to_earliest_word() -> Result<(), WordleError> {
        let mut engine = Engine::from_words("abd", vec!["xyz", "abz", "abc", "abd"], false)?;
        let mut guesser = CentroidGuesser::new();

        engine.guess("xyz", true);

        // "abc" and "abd" both score 2.5, "abz" only scores 2.
        assert_eq!(engine.feasible_set(), vec![false, false, true, true]);
        assert_eq!(guesser.select_next_guess(&engine).as_deref(), Some("abc"));
        Ok(())
    }
}

mod random_guesser {

    use super::*;

    fn create_guesser() -> RandomGuesser {
        RandomGuesser::from_seed(7)
    }

    test_guesser!(create_guesser);

    #[test]
    fn same_seed_same_choices() -> Result<(), WordleError> {
        let engine = Engine::from_words(
            "endow",
            vec!["alpha", "allot", "begot", "below", "endow", "ingot"],
            false,
        )?;
        let mut first = RandomGuesser::from_seed(42);
        let mut second = RandomGuesser::from_seed(42);

        for _ in 0..10 {
            assert_eq!(
                first.select_next_guess(&engine),
                second.select_next_guess(&engine)
            );
        }
        Ok(())
    }

    #[test]
    fn guesses_are_always_feasible() -> Result<(), WordleError> {
        let mut engine = Engine::from_words(
            "ingot",
            vec!["alpha", "allot", "begot", "below", "endow", "ingot"],
            false,
        )?;
        engine.guess("allot", true);
        let feasible = engine.feasible_words();
        let mut guesser = RandomGuesser::from_seed(3);

        for _ in 0..20 {
            let guess = guesser.select_next_guess(&engine).unwrap();
            assert!(feasible.contains(&guess));
        }
        Ok(())
    }
}

#[test]
fn boxed_guesser_delegates() -> Result<(), WordleError> {
    let engine = Engine::from_words("abc", vec!["aaa", "aab", "bcd", "abc"], false)?;
    let mut guesser: Box<dyn Guesser> = Box::new(CentroidGuesser::new());

    assert_eq!(guesser.select_next_guess(&engine).as_deref(), Some("aaa"));
    Ok(())
}
