#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use super::results::{GradeResult, Outcome, QuestionOutcome};
use crate::{
    config::AnswerMatch,
    quiz::{Attempt, Question},
};

/// Grades one question against the token chosen for it.
///
/// A blank or whitespace-only token counts as no selection.
pub fn grade_question(question: &Question, chosen: Option<&str>, policy: AnswerMatch) -> QuestionOutcome {
    let chosen = chosen.filter(|token| !token.trim().is_empty());

    let outcome = match chosen {
        None => Outcome::Unanswered,
        Some(token) if policy.matches(token, question.answer()) => Outcome::Correct,
        Some(_) => Outcome::Incorrect,
    };

    QuestionOutcome {
        question: question.id().to_string(),
        outcome,
        chosen: chosen.map(str::to_string),
        correct: question.answer().to_string(),
    }
}

/// Scores `attempt` against `questions`.
///
/// Pure: never fails and never touches a view. Calling it twice with the same
/// inputs gives equal results. An empty question list yields a zero result.
pub fn grade(questions: &[Question], attempt: &Attempt, policy: AnswerMatch) -> GradeResult {
    let outcomes = questions
        .iter()
        .map(|q| grade_question(q, attempt.chosen(q.id()), policy))
        .collect::<Vec<_>>();

    let result = GradeResult::from_outcomes(outcomes);
    tracing::debug!(
        "Graded {} question(s): {} correct, {} incorrect, {} unanswered ({}%)",
        result.total,
        result.correct,
        result.incorrect,
        result.unanswered,
        result.percentage
    );
    result
}
