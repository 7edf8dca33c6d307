//! # quizmark
//!
//! Grades multiple-choice course quizzes, renders per-question feedback, and
//! announces results to a live region.

#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Grader configuration
pub mod config;
/// A module defining a bunch of constant values to be used throughout
pub mod constants;
/// Error and warning types
pub mod error;
/// For all things related to grading
pub mod grade;
/// Dropdown mini quizzes
pub mod mini;
/// Quiz documents, questions and attempts
pub mod quiz;
/// A quiz instance and its grade/reset lifecycle
pub mod session;
/// The rendering boundary
pub mod view;

pub use config::{AnswerMatch, GraderConfig, ValidationMode};
pub use error::{AuthoringIssue, QuizError, RenderWarning};
pub use grade::{GradeResult, Outcome, QuestionOutcome, grade};
pub use quiz::{Attempt, Choice, Question, Quiz};
pub use session::{Graded, QuizSession, SessionState};
pub use view::{HtmlView, QuizView};
