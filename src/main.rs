//! Co-ordle Evaluator - CLI
//!
//! Builds the guess × answer pattern matrix and scores the guesses of a
//! finished game for skill and luck.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use coordle_eval::{
    commands::{EvaluateConfig, analyze_word, build_and_persist_matrix, evaluate, opening_guesses},
    core::Word,
    engine::DEFAULT_TOP_K,
    matrix::PatternMatrix,
    output::{print_analysis_result, print_build_result, print_evaluation, print_opening_guesses},
    wordlists::load_from_file,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "coordle_eval",
    about = "Co-ordle guess evaluator: skill and luck of each guess from information theory",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Allowed guesses, one word per line
    #[arg(long, global = true, env = "COORDLE_GUESSES", default_value = "data/guesses.txt")]
    guesses: PathBuf,

    /// Possible answers, one word per line
    #[arg(long, global = true, env = "COORDLE_ANSWERS", default_value = "data/answers.txt")]
    answers: PathBuf,

    /// Persisted pattern matrix
    #[arg(long, global = true, env = "COORDLE_MATRIX", default_value = "data/patterns.bin")]
    matrix: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the pattern matrix and write it to disk
    Build,

    /// Evaluate the guesses of a finished game
    Eval {
        /// The game's solution
        solution: String,

        /// Guesses in the order they were played
        #[arg(required = true, value_name = "GUESS")]
        played: Vec<String>,

        /// Number of alternative guesses to show per turn
        #[arg(short = 'k', long = "top", default_value_t = DEFAULT_TOP_K)]
        top: usize,

        /// Rebuild the matrix before evaluating
        #[arg(long)]
        rebuild: bool,
    },

    /// Analyze the entropy of a specific word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Rank the best opening guesses
    Best {
        /// Number of guesses to show
        #[arg(short = 'k', long = "top", default_value_t = DEFAULT_TOP_K)]
        top: usize,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load both word lists
///
/// Returns (`guesses`, `answers`)
fn load_wordlists(cli: &Cli) -> Result<(Vec<Word>, Vec<Word>)> {
    let guesses = load_from_file(&cli.guesses)
        .with_context(|| format!("loading guess list {}", cli.guesses.display()))?;
    let answers = load_from_file(&cli.answers)
        .with_context(|| format!("loading answer list {}", cli.answers.display()))?;
    Ok((guesses, answers))
}

fn open_matrix(path: &Path, guesses: Vec<Word>, answers: Vec<Word>, rebuild: bool) -> Result<PatternMatrix> {
    PatternMatrix::open(path, guesses, answers, rebuild).with_context(|| {
        format!(
            "opening pattern matrix {} (run `coordle_eval build` to create it)",
            path.display()
        )
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (guesses, answers) = load_wordlists(&cli)?;

    match cli.command {
        Commands::Build => run_build_command(guesses, answers, &cli.matrix),
        Commands::Eval {
            solution,
            played,
            top,
            rebuild,
        } => {
            let matrix = open_matrix(&cli.matrix, guesses, answers.clone(), rebuild)?;
            let mut config = EvaluateConfig::new(solution, played);
            config.top_k = top;
            run_eval_command(&config, &matrix, &answers)
        }
        Commands::Analyze { word } => {
            let matrix = open_matrix(&cli.matrix, guesses, answers.clone(), false)?;
            run_analyze_command(&word, &matrix, &answers)
        }
        Commands::Best { top } => {
            let matrix = open_matrix(&cli.matrix, guesses, answers.clone(), false)?;
            run_best_command(top, &matrix, &answers)
        }
    }
}

fn run_build_command(guesses: Vec<Word>, answers: Vec<Word>, path: &Path) -> Result<()> {
    let result = build_and_persist_matrix(guesses, answers, path)
        .with_context(|| format!("writing pattern matrix {}", path.display()))?;
    print_build_result(&result);
    Ok(())
}

fn run_eval_command(config: &EvaluateConfig, matrix: &PatternMatrix, answers: &[Word]) -> Result<()> {
    let result = evaluate(config, matrix, answers).context("evaluating game")?;
    print_evaluation(&result);
    Ok(())
}

fn run_analyze_command(word: &str, matrix: &PatternMatrix, answers: &[Word]) -> Result<()> {
    let result = analyze_word(word, matrix, answers)
        .with_context(|| format!("analyzing {word}"))?;
    print_analysis_result(&result);
    Ok(())
}

fn run_best_command(top: usize, matrix: &PatternMatrix, answers: &[Word]) -> Result<()> {
    let ranked = opening_guesses(matrix, answers, top).context("ranking opening guesses")?;
    print_opening_guesses(&ranked, answers.len());
    Ok(())
}
