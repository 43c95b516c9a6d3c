use clap::{Parser, Subcommand, ValueEnum};
use dyn_clone::DynClone;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use rs_wordle_engine::*;
use std::collections::HashMap;
use std::fs::File;
use std::io;
use std::process;
use std::sync::Arc;
use std::time::Instant;

/// Simulates Wordle games where the computer guesses a secret word from a word list.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Path to a file that contains a list of possible words, with one word on each line.
    #[clap(short = 'f', long)]
    words_file: String,

    /// The guessing strategy to use.
    #[clap(long, value_enum, default_value = "centroid")]
    strategy: Strategy,

    /// The number of guesses allowed before a game is lost.
    #[clap(long, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Seeds the random strategy and the random choice of secret word.
    #[clap(long)]
    seed: Option<u64>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Strategy {
    /// Guess the word closest to the average of the feasible words.
    Centroid,
    /// Guess a random feasible word.
    Random,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a game for every word in the words file, and report how many guesses were needed.
    Benchmark,
    /// Play a single game with the given secret word, or a random one if no word is given.
    Single { word: Option<String> },
}

/// A guesser that can be cloned for each game, and shared across threads.
trait SharedGuesser: Guesser + DynClone + Send + Sync {}

impl<T: Guesser + Clone + Send + Sync> SharedGuesser for T {}

dyn_clone::clone_trait_object!(SharedGuesser);

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), WordleError> {
    let start_time = Instant::now();
    let args = Args::parse();
    println!("File: {}", args.words_file);

    let words_reader = io::BufReader::new(File::open(&args.words_file)?);
    let vocabulary = Arc::new(Vocabulary::from_reader(words_reader)?);
    println!(
        "There are {} possible words of length {}.",
        vocabulary.len(),
        vocabulary.word_length()
    );

    let guesser = create_guesser(args.strategy, args.seed);
    match args.command {
        Command::Benchmark => run_benchmark(&vocabulary, guesser, args.max_rounds)?,
        Command::Single { word } => play_single_game(
            word,
            &vocabulary,
            guesser,
            args.max_rounds,
            args.seed,
        )?,
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

fn create_guesser(strategy: Strategy, seed: Option<u64>) -> Box<dyn SharedGuesser> {
    match strategy {
        Strategy::Centroid => Box::new(CentroidGuesser::new()),
        Strategy::Random => Box::new(match seed {
            Some(seed) => RandomGuesser::from_seed(seed),
            None => RandomGuesser::new(),
        }),
    }
}

fn run_benchmark(
    vocabulary: &Arc<Vocabulary>,
    guesser: Box<dyn SharedGuesser>,
    max_rounds: u32,
) -> Result<(), WordleError> {
    let results: Vec<GameResult> = vocabulary
        .words()
        .par_iter()
        .map(|word| {
            play_game_with_guesser(
                word,
                max_rounds,
                Arc::clone(vocabulary),
                dyn_clone::clone_box(&*guesser),
            )
        })
        .collect::<Result<Vec<GameResult>, WordleError>>()?;

    let num_guesses_per_game: Vec<u32> = results
        .iter()
        .filter_map(|result| match result {
            GameResult::Success(num_guesses) => Some(*num_guesses),
            GameResult::Failure(_) => None,
        })
        .collect();
    let num_failures = results.len() - num_guesses_per_game.len();
    println!(
        "Solved {} of {} words. Results:",
        num_guesses_per_game.len(),
        vocabulary.len()
    );
    if num_failures > 0 {
        println!("Failed to solve {} words.", num_failures);
    }
    if num_guesses_per_game.is_empty() {
        return Ok(());
    }

    let mut num_games_per_round: HashMap<u32, u32> = HashMap::new();
    for num_guesses in num_guesses_per_game.iter() {
        *(num_games_per_round.entry(*num_guesses).or_insert(0)) += 1;
    }

    println!("|Num guesses|Num games|");
    println!("|-----------|---------|");
    let mut num_rounds = num_games_per_round.keys().copied().collect::<Vec<u32>>();
    num_rounds.sort_unstable();
    for num_round in num_rounds.iter() {
        println!("|{}|{}|", num_round, num_games_per_round[num_round]);
    }

    let average: f64 = num_guesses_per_game.iter().sum::<u32>() as f64
        / num_guesses_per_game.len() as f64;
    let std_dev: f64 = (num_guesses_per_game
        .iter()
        .map(|num_guesses| (*num_guesses as f64 - average).powi(2))
        .sum::<f64>()
        / num_guesses_per_game.len() as f64)
        .sqrt();

    println!(
        "\n**Average number of guesses:** {:.2} +/- {:.2}",
        average, std_dev
    );
    Ok(())
}

fn play_single_game(
    word: Option<String>,
    vocabulary: &Arc<Vocabulary>,
    guesser: Box<dyn SharedGuesser>,
    max_rounds: u32,
    seed: Option<u64>,
) -> Result<(), WordleError> {
    let mut game = match word {
        Some(word) => Game::new(
            guesser,
            Arc::clone(vocabulary),
            &word.trim().to_lowercase(),
            true,
            max_rounds,
        )?,
        None => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            Game::with_random_secret(
                guesser,
                Arc::clone(vocabulary),
                true,
                max_rounds,
                &mut rng,
            )?
        }
    };

    let result = game.play();
    let guesses = game.engine().history().unwrap_or_default();
    match result {
        GameResult::Success(num_guesses) => {
            println!("Solved it! It took me {} guesses.", num_guesses);
        }
        GameResult::Failure(num_guesses) => {
            println!("I still couldn't solve it after {} guesses :(", num_guesses);
        }
    }
    for guess in guesses.iter() {
        println!("\t{}", guess);
    }
    println!(
        "{} of {} words are still feasible.",
        game.engine().feasible_words().len(),
        vocabulary.len()
    );
    Ok(())
}
