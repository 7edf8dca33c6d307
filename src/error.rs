#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Error and warning types shared across the grader.

use itertools::Itertools;
use serde::Serialize;
use thiserror::Error;

/// An inconsistency in how a quiz was authored.
///
/// None of these stop grading in lenient mode; they only change how feedback
/// degrades. In strict mode they are reported before any grading happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthoringIssue {
    /// The quiz has no question blocks at all.
    #[error("The quiz has no questions.")]
    NoQuestions,
    /// Two question blocks share the same identifier.
    #[error("Question id `{0}` is used by more than one question.")]
    DuplicateQuestion(String),
    /// A question offers nothing to select.
    #[error("Question `{0}` has no choices.")]
    NoChoices(String),
    /// The declared correct token is not offered as a choice.
    #[error("Question `{question}` declares answer `{answer}`, which is not one of its choices.")]
    AnswerNotAChoice {
        /// The question identifier.
        question: String,
        /// The declared correct-answer token.
        answer:   String,
    },
    /// Two choices of the same question share a token.
    #[error("Question `{question}` offers the choice `{token}` more than once.")]
    DuplicateChoice {
        /// The question identifier.
        question: String,
        /// The repeated token.
        token:    String,
    },
}

/// Errors surfaced by the library.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The quiz failed validation in strict mode.
    #[error("The quiz `{title}` has authoring problems:\n{}", format_issues(.issues))]
    Authoring {
        /// Title of the offending quiz.
        title:  String,
        /// Every issue found.
        issues: Vec<AuthoringIssue>,
    },
    /// A selection referenced a question the quiz does not have.
    #[error("There is no question with id `{0}` in this quiz.")]
    UnknownQuestion(String),
    /// A selection for a mini quiz item that does not exist.
    #[error("There is no mini quiz item at position {0}.")]
    UnknownItem(usize),
    /// A mini quiz pick that is not among the item's options.
    #[error("`{value}` is not an option of mini quiz item {item}.")]
    UnknownOption {
        /// Position of the item.
        item:  usize,
        /// The rejected pick.
        value: String,
    },
}

/// Joins issues into a bulleted list for display.
fn format_issues(issues: &[AuthoringIssue]) -> String {
    issues
        .iter()
        .map(|issue| format!("- {issue}"))
        .join("\n")
}

/// A part of the view that could not be updated while rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum RenderWarning {
    /// No feedback container to put the summary into.
    #[error("The quiz has no feedback container; the summary was not rendered.")]
    MissingFeedback,
    /// No live region to announce the status in.
    #[error("The quiz has no live region; the status `{0}` was not announced.")]
    MissingLiveRegion(String),
    /// No block to attach a question's notice to.
    #[error("Question `{0}` has no block to attach feedback to.")]
    MissingQuestionBlock(String),
    /// A later question reuses an id whose block already carries feedback.
    #[error("Question id `{0}` is shared by several blocks; only the first one shows feedback.")]
    SharedQuestionBlock(String),
}
