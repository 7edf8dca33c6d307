#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use maud::{Markup, html};
use serde::Serialize;

use super::results::{GradeResult, Outcome, QuestionOutcome};
use crate::{
    config::{AnswerMatch, Messages},
    quiz::Question,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Visual tone of a notice.
pub enum NoticeKind {
    /// A positive notice.
    Good,
    /// A corrective notice.
    Warn,
    /// A neutral notice, used for the summary.
    Plain,
}

impl NoticeKind {
    /// CSS class of the notice container.
    fn class(self) -> &'static str {
        match self {
            NoticeKind::Good => "notice good",
            NoticeKind::Warn => "notice warn",
            NoticeKind::Plain => "notice",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A secondary line of a notice, optionally introduced by a bold label.
pub struct NoticeLine {
    /// Bold label, e.g. `Correct answer:`.
    pub label: Option<String>,
    /// Line text.
    pub text:  String,
}

impl NoticeLine {
    /// A line without a label.
    fn text(text: impl Into<String>) -> Self {
        Self {
            label: None,
            text:  text.into(),
        }
    }

    /// A line with a label.
    fn labelled(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            text:  text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A feedback notice: a bold heading, inline text, then secondary lines.
pub struct Notice {
    /// Tone.
    pub kind:    NoticeKind,
    /// Bold heading.
    pub heading: String,
    /// Text following the heading on the same line.
    pub text:    String,
    /// Secondary lines.
    pub lines:   Vec<NoticeLine>,
}

impl Notice {
    /// Renders the notice as HTML. All text is escaped.
    pub fn render(&self) -> Markup {
        html! {
            div class=(self.kind.class()) data-result {
                strong { (self.heading) }
                @if !self.text.is_empty() {
                    " " (self.text)
                }
                @for line in &self.lines {
                    div class="small" {
                        @if let Some(label) = &line.label {
                            strong { (label) } " "
                        }
                        (line.text)
                    }
                }
            }
        }
    }

    /// Renders the notice as plain text, one line per entry.
    pub fn plain_text(&self) -> String {
        let mut out = if self.text.is_empty() {
            self.heading.clone()
        } else {
            format!("{} {}", self.heading, self.text)
        };
        for line in &self.lines {
            out.push('\n');
            if let Some(label) = &line.label {
                out.push_str(label);
                out.push(' ');
            }
            out.push_str(&line.text);
        }
        out
    }
}

/// Display text of the choice matching `token` under `policy`, falling back
/// to the raw token.
fn choice_text<'a>(question: &'a Question, token: &'a str, policy: AnswerMatch) -> &'a str {
    question
        .label_for(token)
        .or_else(|| {
            question
                .choices()
                .iter()
                .find(|c| policy.matches(&c.value, token))
                .map(|c| c.label.trim())
        })
        .unwrap_or(token)
}

/// Builds the notice attached to a graded question.
pub fn question_notice(
    question: &Question,
    outcome: &QuestionOutcome,
    messages: &Messages,
    policy: AnswerMatch,
) -> Notice {
    match outcome.outcome {
        Outcome::Correct => Notice {
            kind:    NoticeKind::Good,
            heading: messages.correct.clone(),
            text:    question.why_correct().trim().to_string(),
            lines:   Vec::new(),
        },
        Outcome::Incorrect | Outcome::Unanswered => {
            let mut lines = Vec::new();
            if outcome.outcome == Outcome::Unanswered {
                lines.push(NoticeLine::text(messages.blank.clone()));
            }
            lines.push(NoticeLine::labelled(
                messages.correct_answer.clone(),
                choice_text(question, question.answer(), policy),
            ));
            let why = question.why_wrong().trim();
            if !why.is_empty() {
                lines.push(NoticeLine::text(why));
            }

            Notice {
                kind: NoticeKind::Warn,
                heading: messages.incorrect.clone(),
                text: String::new(),
                lines,
            }
        }
    }
}

/// The score line, e.g. `Score: 1/3 (33%) — 1 unanswered`.
pub fn summary_line(result: &GradeResult) -> String {
    let mut line = format!("Score: {}/{} ({}%)", result.correct, result.total, result.percentage);
    if result.unanswered > 0 {
        line.push_str(&format!(" — {} unanswered", result.unanswered));
    }
    line
}

/// The notice placed at the top of the feedback container.
pub fn summary_notice(result: &GradeResult, messages: &Messages) -> Notice {
    Notice {
        kind:    NoticeKind::Plain,
        heading: summary_line(result),
        text:    messages.review_hint.clone(),
        lines:   Vec::new(),
    }
}

/// The live-region status after grading.
pub fn graded_announcement(result: &GradeResult, messages: &Messages) -> String {
    format!("{} {}", messages.graded_status, summary_line(result))
}
