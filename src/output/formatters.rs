//! Formatting utilities for terminal output

use crate::core::Pattern;
use indicatif::{ProgressBar, ProgressStyle};

/// Base-3 digits of a pattern, position 0 first, e.g. `[2 2 0 0 1]`
#[must_use]
pub fn pattern_digits(pattern: Pattern) -> String {
    let digits: Vec<String> = pattern.digits().iter().map(u8::to_string).collect();
    format!("[{}]", digits.join(" "))
}

/// Join words for display, eliding the middle of long lists
#[must_use]
pub fn word_list(words: &[String], limit: usize) -> String {
    if words.len() <= limit {
        return words.join(", ");
    }
    let head = limit.div_ceil(2);
    let tail = limit - head;
    format!(
        "{}, … ({} more) …, {}",
        words[..head].join(", "),
        words.len() - limit,
        words[words.len() - tail..].join(", ")
    )
}

/// Progress bar for the top-level guess scan
#[must_use]
pub fn search_progress(quiet: bool) -> ProgressBar {
    if quiet {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_of_abbey_against_abyss() {
        assert_eq!(pattern_digits(Pattern::new(89)), "[2 2 0 0 1]");
        assert_eq!(pattern_digits(Pattern::PERFECT), "[2 2 2 2 2]");
    }

    #[test]
    fn short_lists_are_joined_whole() {
        let words = vec!["CRANE".to_string(), "SLATE".to_string()];
        assert_eq!(word_list(&words, 5), "CRANE, SLATE");
    }

    #[test]
    fn long_lists_are_elided() {
        let words: Vec<String> = ["A", "B", "C", "D", "E", "F"]
            .iter()
            .map(|s| (*s).to_string())
            .collect();
        assert_eq!(word_list(&words, 3), "A, B, … (3 more) …, F");
    }

    #[test]
    fn quiet_progress_is_hidden() {
        assert!(search_progress(true).is_hidden());
    }
}
