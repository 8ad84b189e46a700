//! Display functions for command results

use super::formatters::{entropy_bar, explanation, pattern_summary, skill_bar};
use crate::commands::{AnalysisResult, BuildResult, EvaluationResult};
use crate::engine::{GuessRecord, Luck, RankedGuess};
use colored::{ColoredString, Colorize};

fn colored_luck(luck: Luck) -> ColoredString {
    match luck {
        Luck::Good => luck.label().green().bold(),
        Luck::Average => luck.label().yellow().bold(),
        Luck::Bad => luck.label().red().bold(),
    }
}

fn colored_skill(skill: u8) -> ColoredString {
    let text = format!("{skill:3}");
    match skill {
        81.. => text.green().bold(),
        50..=80 => text.yellow().bold(),
        _ => text.red().bold(),
    }
}

/// Print the result of building the matrix
pub fn print_build_result(result: &BuildResult) {
    println!(
        "{} {}x{} pattern matrix in {:.2}s",
        "✅ Built".green().bold(),
        result.guesses,
        result.answers,
        result.duration.as_secs_f64()
    );
    println!("   Saved to {}", result.path.display());
}

/// Print the evaluation of a whole game, one section per guess
pub fn print_evaluation(result: &EvaluationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "EVALUATION:".bright_cyan().bold(),
        result.solution.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());
    println!("Answer pool: {} words", result.answer_pool_size);

    for (i, record) in result.records.iter().enumerate() {
        print_guess_record(i + 1, record);
    }

    if let Some(last) = result.records.last() {
        println!();
        if last.pattern.is_perfect() {
            println!(
                "{}",
                format!("✅ Solved in {} guesses", result.records.len())
                    .green()
                    .bold()
            );
        } else {
            println!("{}", "❌ Not solved".red().bold());
        }
    }
}

fn print_guess_record(turn: usize, record: &GuessRecord) {
    println!(
        "\n{} {} {} {}",
        format!("{turn}.").bright_black(),
        record.guess.text().bold(),
        record.pattern.to_glyphs(),
        format!("({})", pattern_summary(record.pattern)).bright_black()
    );
    println!(
        "   Skill:      [{}] {}",
        skill_bar(record.skill, 20).green(),
        colored_skill(record.skill)
    );
    println!("   Luck:       {}", colored_luck(record.luck));
    println!(
        "   Candidates: {} → {}",
        record.candidates_before.len(),
        record.candidates_after
    );
    println!(
        "   Info:       {:.3} bits expected, {:.3} actual (best {:.3})",
        record.expected_entropy, record.actual_entropy, record.optimal_entropy
    );
    println!("   {}", explanation(record.skill, record.luck).italic());

    if !record.best_guesses.is_empty() {
        println!("   {}", "Some other good guesses were:".bright_cyan());
        print_ranked(&record.best_guesses, "     ");
    }
}

fn print_ranked(ranked: &[RankedGuess], indent: &str) {
    for (i, guess) in ranked.iter().enumerate() {
        println!(
            "{indent}{}. {} {}",
            i + 1,
            guess.word.text().bright_yellow(),
            format!("({:.3} bits)", guess.entropy).bright_black()
        );
    }
}

/// Print the result of word analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "ENTROPY ANALYSIS:".bright_cyan().bold(),
        result.word.text().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = entropy_bar(result.entropy, 30);

    println!("\n📊 Against {} possible answers:", result.total_candidates);
    println!(
        "   Entropy:     [{}] {}",
        bar.green(),
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!("   Patterns:    {}", result.patterns);
    println!(
        "   Info gain:   {:.1}x reduction",
        result.expected_reduction
    );
    println!(
        "   Expected:    {:.1} candidates remain",
        result.expected_remaining
    );
    if !result.is_candidate {
        println!("   {}", "Not a possible answer".bright_black());
    }
}

/// Print the best opening guesses
pub fn print_opening_guesses(ranked: &[RankedGuess], total_candidates: usize) {
    println!(
        "\n🎯 {} (against {total_candidates} answers)",
        "Best opening guesses".bright_cyan().bold()
    );
    print_ranked(ranked, "   ");
}
