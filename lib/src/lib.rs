//! Tracks what a sequence of guesses has revealed about the secret word in a Wordle-style game,
//! and filters a vocabulary down to the words that are still consistent with that feedback.
//!
//! The [`Engine`] owns the secret and the accumulated [`ConstraintState`]. [`Guesser`]s read the
//! engine's feasible set to choose their next word, and a [`Game`] runs the turn loop.

mod constraints;
mod data;
mod encoding;
mod engine;
mod feasibility;
mod game;
mod guessers;
mod results;

pub use constraints::ConstraintState;
pub use data::Vocabulary;
pub use encoding::*;
pub use engine::*;
pub use feasibility::*;
pub use game::*;
pub use guessers::*;
pub use results::*;
