#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! The rendering boundary of a quiz instance.
//!
//! A [`QuizView`] is the only thing a session writes feedback into. The
//! in-memory [`HtmlView`] keeps the rendered state so it can be inspected,
//! printed as HTML, or asserted on in tests.

use std::collections::BTreeMap;

use maud::{Markup, html};

use crate::{
    error::RenderWarning,
    grade::{Notice, Outcome},
    quiz::{Attempt, Quiz},
};

/// Where grading feedback and status announcements go.
///
/// Methods that write return a [`RenderWarning`] when the part of the view
/// they need does not exist; clearing methods never fail.
pub trait QuizView {
    /// Marks a question block with its outcome and attaches its notice.
    fn mark_question(
        &mut self,
        question: &str,
        outcome: Outcome,
        notice: &Notice,
    ) -> Result<(), RenderWarning>;

    /// Removes the outcome marker and notices of a question block.
    fn clear_question(&mut self, question: &str);

    /// Places the summary notice at the top of the feedback container.
    fn show_summary(&mut self, notice: &Notice) -> Result<(), RenderWarning>;

    /// Empties the feedback container.
    fn clear_summary(&mut self);

    /// Replaces the text of the live region.
    fn announce(&mut self, status: &str) -> Result<(), RenderWarning>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Rendered state of one question block.
struct Block {
    /// Outcome marker, if graded.
    marker:  Option<Outcome>,
    /// Attached notices.
    notices: Vec<Notice>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// An in-memory quiz view.
pub struct HtmlView {
    /// Question blocks by id.
    blocks:   BTreeMap<String, Block>,
    /// Feedback container, when present.
    feedback: Option<Vec<Notice>>,
    /// Live region text, when present.
    live:     Option<String>,
}

impl HtmlView {
    /// Creates a view from exactly the parts it has: the question block ids,
    /// and whether a feedback container and a live region exist.
    pub fn new<I, S>(blocks: I, feedback: bool, live_region: bool) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks:   blocks
                .into_iter()
                .map(|id| (id.into(), Block::default()))
                .collect(),
            feedback: feedback.then(Vec::new),
            live:     live_region.then(String::new),
        }
    }

    /// A complete view for `quiz`: one block per question, a feedback
    /// container and a live region.
    pub fn for_quiz(quiz: &Quiz) -> Self {
        Self::new(quiz.questions.iter().map(|q| q.id().to_string()), true, true)
    }

    /// The outcome marker of a question block.
    pub fn marker(&self, question: &str) -> Option<Outcome> {
        self.blocks.get(question).and_then(|b| b.marker)
    }

    /// The notices attached to a question block.
    pub fn notices(&self, question: &str) -> &[Notice] {
        self.blocks
            .get(question)
            .map(|b| b.notices.as_slice())
            .unwrap_or_default()
    }

    /// The contents of the feedback container.
    pub fn feedback(&self) -> &[Notice] {
        self.feedback.as_deref().unwrap_or_default()
    }

    /// The live region text, if the view has one.
    pub fn live_text(&self) -> Option<&str> {
        self.live.as_deref()
    }

    /// True when no block carries a marker or notice and the feedback
    /// container is empty.
    pub fn is_clear(&self) -> bool {
        self.feedback().is_empty()
            && self
                .blocks
                .values()
                .all(|b| b.marker.is_none() && b.notices.is_empty())
    }

    /// Renders the quiz form with the current selections and feedback.
    ///
    /// A block's marker and notices go on the first fieldset carrying its id.
    pub fn render(&self, quiz: &Quiz, attempt: &Attempt) -> Markup {
        html! {
            form data-quiz {
                @if !quiz.title.is_empty() {
                    h2 { (quiz.title) }
                }
                @if let Some(feedback) = &self.feedback {
                    div data-feedback {
                        @for notice in feedback {
                            (notice.render())
                        }
                    }
                }
                @for (idx, question) in quiz.questions.iter().enumerate() {
                    @let first = quiz.questions.iter().position(|q| q.id() == question.id()) == Some(idx);
                    @let block = self.blocks.get(question.id()).filter(|_| first);
                    @let class = block.and_then(|b| b.marker).map(Outcome::marker);
                    fieldset data-question=(question.id()) data-answer=(question.answer()) class=[class] {
                        legend { (question.title(idx)) }
                        @for choice in question.choices() {
                            label {
                                input type="radio" name=(question.id()) value=(choice.value)
                                    checked[attempt.chosen(question.id()) == Some(choice.value.as_str())];
                                " " (choice.label)
                            }
                        }
                        @if let Some(block) = block {
                            @for notice in &block.notices {
                                (notice.render())
                            }
                        }
                    }
                }
                @if let Some(live) = &self.live {
                    p data-live aria-live="polite" { (live) }
                }
            }
        }
    }
}

impl QuizView for HtmlView {
    fn mark_question(
        &mut self,
        question: &str,
        outcome: Outcome,
        notice: &Notice,
    ) -> Result<(), RenderWarning> {
        let block = self
            .blocks
            .get_mut(question)
            .ok_or_else(|| RenderWarning::MissingQuestionBlock(question.to_string()))?;
        block.marker = Some(outcome);
        block.notices.push(notice.clone());
        Ok(())
    }

    fn clear_question(&mut self, question: &str) {
        if let Some(block) = self.blocks.get_mut(question) {
            *block = Block::default();
        }
    }

    fn show_summary(&mut self, notice: &Notice) -> Result<(), RenderWarning> {
        let feedback = self.feedback.as_mut().ok_or(RenderWarning::MissingFeedback)?;
        feedback.insert(0, notice.clone());
        Ok(())
    }

    fn clear_summary(&mut self) {
        if let Some(feedback) = self.feedback.as_mut() {
            feedback.clear();
        }
    }

    fn announce(&mut self, status: &str) -> Result<(), RenderWarning> {
        let live = self
            .live
            .as_mut()
            .ok_or_else(|| RenderWarning::MissingLiveRegion(status.to_string()))?;
        *live = status.to_string();
        Ok(())
    }
}
