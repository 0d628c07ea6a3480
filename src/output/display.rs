//! Display functions for command results

use super::formatters::{pattern_digits, word_list};
use crate::commands::{FeedbackResult, MatrixResult, OptimalResult, PartitionResult, SearchReport};
use crate::core::Pattern;
use crate::matrix::MatrixOrigin;
use colored::Colorize;

const SUBSET_PREVIEW: usize = 10;

fn header(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print how the pattern matrix was obtained
pub fn print_matrix_result(result: &MatrixResult) {
    header("PATTERN MATRIX");

    let origin = match result.origin {
        MatrixOrigin::Loaded => "loaded from cache".green(),
        MatrixOrigin::Rebuilt { stale: false } => "computed".yellow(),
        MatrixOrigin::Rebuilt { stale: true } => "recomputed (cache was stale)".yellow(),
    };

    println!(
        "\n   Dimensions:   {} guesses × {} solutions",
        result.matrix.vocabulary_size(),
        result.matrix.solution_count()
    );
    println!("   Origin:       {origin}");
    println!("   Time taken:   {:.2}s", result.duration.as_secs_f64());
    println!(
        "   Entry (0,0):  {} {}",
        result.sample_entry().value(),
        result.sample_entry().to_emoji()
    );
    println!("   All correct:  {}", Pattern::PERFECT.value());
    print_store_warning(result);
}

/// Warn if the matrix could not be persisted
pub fn print_store_warning(result: &MatrixResult) {
    if let Some(e) = &result.store_error {
        eprintln!(
            "{} pattern cache not persisted: {e}",
            "warning:".yellow().bold()
        );
    }
}

/// Print the outcome of an optimal search
pub fn print_optimal_result(result: &OptimalResult, verbose: bool) {
    header("OPTIMAL GUESSES");

    println!(
        "\n🎯 Subset:   {} words",
        result.subset.len().to_string().bright_yellow()
    );
    if verbose {
        println!("   {}", word_list(&result.subset, SUBSET_PREVIEW).bright_black());
    }

    println!("\n📊 {}", "Result:".bright_cyan().bold());
    println!(
        "   Expected guesses:  {}",
        format!("{:.6}", result.value).bright_yellow().bold()
    );
    println!(
        "   Total guesses:     {} over {} targets",
        result.total,
        result.subset.len()
    );
    println!(
        "   Best guesses ({}): {}",
        result.guesses.len(),
        result.guesses.join(", ").green().bold()
    );
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());

    if verbose {
        println!("\n📈 {}", "Search:".bright_cyan().bold());
        match result.report {
            SearchReport::Sequential {
                stats,
                cache_entries,
            } => {
                println!("   Mode:          sequential");
                println!("   Memo entries:  {cache_entries}");
                println!("   Memo hits:     {}", stats.cache_hits);
                println!("   Memo misses:   {}", stats.cache_misses);
            }
            SearchReport::Parallel {
                stats,
                workers,
                evaluated,
            } => {
                println!("   Mode:          parallel ({workers} workers)");
                println!("   Evaluated:     {evaluated} opening guesses");
                println!("   Memo hits:     {}", stats.cache_hits);
                println!("   Memo misses:   {}", stats.cache_misses);
            }
        }
    }
}

/// Print the feedback code of a guess against a solution
pub fn print_feedback_result(result: &FeedbackResult) {
    println!(
        "{} vs {}: {} {} {}",
        result.guess.bright_yellow().bold(),
        result.solution.bright_yellow().bold(),
        result.pattern.value().to_string().cyan(),
        pattern_digits(result.pattern),
        result.pattern.to_emoji()
    );
}

/// Print each feedback group of a partition
pub fn print_partition_result(result: &PartitionResult) {
    header(&format!("PARTITION BY {}", result.guess));

    println!(
        "\n   {} groups over {} words",
        result.groups.len().to_string().bright_yellow(),
        result.subset_size
    );
    if result.is_uninformative() {
        println!("   {}", "Guess is uninformative for this subset".red());
    }
    println!();

    for group in &result.groups {
        let code = format!("{:3}", group.pattern.value());
        let members = if group.pattern.is_perfect() {
            group.members.join(", ").green().to_string()
        } else {
            group.members.join(", ")
        };
        println!(
            "   {} {} ({:3}) {}",
            group.pattern.to_emoji(),
            code.cyan(),
            group.members.len(),
            members
        );
    }
}
