#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Loading quiz and attempt documents.
pub mod markup;
/// Questions, choices, quizzes and attempts.
pub mod model;
/// Authoring checks.
pub mod validate;

pub use markup::{load_attempt, load_quiz, parse_attempt, parse_quiz, parse_selection};
pub use model::{Attempt, Choice, Question, Quiz};
pub use validate::validate;
