#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::fmt::Display;

use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Panel, Style, Width, object::Rows},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
/// How a single question was answered.
pub enum Outcome {
    /// The chosen token matched the declared answer.
    Correct,
    /// A token was chosen but did not match.
    Incorrect,
    /// Nothing was chosen.
    Unanswered,
}

impl Outcome {
    /// Whether a token was chosen at all.
    pub fn is_answered(self) -> bool {
        !matches!(self, Outcome::Unanswered)
    }

    /// Symbol used in terminal and table output.
    pub fn symbol(self) -> &'static str {
        match self {
            Outcome::Correct => "✅",
            Outcome::Incorrect => "❌",
            Outcome::Unanswered => "↺",
        }
    }

    /// Marker name attached to a rendered question block.
    pub fn marker(self) -> &'static str {
        match self {
            Outcome::Correct => "correct",
            Outcome::Incorrect | Outcome::Unanswered => "incorrect",
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Correct => write!(f, "correct"),
            Outcome::Incorrect => write!(f, "incorrect"),
            Outcome::Unanswered => write!(f, "unanswered"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// The graded state of one question.
pub struct QuestionOutcome {
    /// Question identifier.
    pub question: String,
    /// How it was answered.
    pub outcome:  Outcome,
    /// The chosen token, if any.
    pub chosen:   Option<String>,
    /// The declared correct token.
    pub correct:  String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// The outcome of scoring an attempt against its questions.
pub struct GradeResult {
    /// Number of questions.
    pub total:      usize,
    /// Number answered correctly.
    pub correct:    usize,
    /// Number answered incorrectly.
    pub incorrect:  usize,
    /// Number left blank.
    pub unanswered: usize,
    /// `round(correct / total * 100)`, or 0 for an empty quiz.
    pub percentage: u32,
    /// Per-question outcomes, in question order.
    pub outcomes:   Vec<QuestionOutcome>,
}

impl GradeResult {
    /// Builds the aggregate counts from per-question outcomes.
    pub fn from_outcomes(outcomes: Vec<QuestionOutcome>) -> Self {
        let total = outcomes.len();
        let count = |kind: Outcome| outcomes.iter().filter(|o| o.outcome == kind).count();
        let correct = count(Outcome::Correct);
        let incorrect = count(Outcome::Incorrect);
        let unanswered = count(Outcome::Unanswered);

        Self {
            total,
            correct,
            incorrect,
            unanswered,
            percentage: percentage(correct, total),
            outcomes,
        }
    }

    /// Outcome of the question with identifier `question`.
    pub fn outcome_of(&self, question: &str) -> Option<&QuestionOutcome> {
        self.outcomes.iter().find(|o| o.question == question)
    }

    /// True when every question was answered correctly and there is at least
    /// one question.
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.correct == self.total
    }

    /// Renders the per-question overview table.
    pub fn table(&self) -> String {
        let rows = self.outcomes.iter().map(OutcomeRow::from).collect::<Vec<_>>();
        Table::new(rows)
            .with(Style::modern())
            .with(Panel::header("Quiz Overview"))
            .with(Panel::footer(format!(
                "Score: {}/{} ({}%)",
                self.correct, self.total, self.percentage
            )))
            .with(Modify::new(Rows::new(1..)).with(Width::wrap(24).keep_words(true)))
            .with(Modify::new(Rows::first()).with(Alignment::center()))
            .to_string()
    }
}

/// Rounded percentage of `correct` out of `total`; 0 when `total` is 0.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

#[derive(Tabled)]
/// A row of the overview table.
struct OutcomeRow {
    #[tabled(rename = "Question")]
    /// Question identifier.
    question: String,
    #[tabled(rename = "Result")]
    /// Symbol and outcome.
    result:   String,
    #[tabled(rename = "Chosen")]
    /// Chosen token, or a dash.
    chosen:   String,
    #[tabled(rename = "Answer")]
    /// Declared token.
    answer:   String,
}

impl From<&QuestionOutcome> for OutcomeRow {
    fn from(o: &QuestionOutcome) -> Self {
        Self {
            question: o.question.clone(),
            result:   format!("{} {}", o.outcome.symbol(), o.outcome),
            chosen:   o.chosen.clone().unwrap_or_else(|| "-".to_string()),
            answer:   o.correct.clone(),
        }
    }
}
