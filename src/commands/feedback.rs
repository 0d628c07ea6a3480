//! Feedback code for one guess/solution pair

use crate::core::{Pattern, Word, WordError};

/// Result of scoring a guess against a solution
pub struct FeedbackResult {
    pub guess: String,
    pub solution: String,
    pub pattern: Pattern,
}

/// Score `guess` against `solution`
///
/// Neither word has to be in the vocabulary.
///
/// # Errors
/// Returns `WordError` if either word is not five ASCII letters.
///
/// # Examples
/// ```
/// use wordle_optimal::commands::feedback;
///
/// let result = feedback("abbey", "abyss").unwrap();
/// assert_eq!(result.pattern.value(), 89);
/// assert_eq!(result.pattern.digits(), [2, 2, 0, 0, 1]);
/// ```
pub fn feedback(guess: &str, solution: &str) -> Result<FeedbackResult, WordError> {
    let guess = Word::new(guess)?;
    let solution = Word::new(solution)?;
    let pattern = Pattern::calculate(&guess, &solution);

    Ok(FeedbackResult {
        guess: guess.text().to_string(),
        solution: solution.text().to_string(),
        pattern,
    })
}
