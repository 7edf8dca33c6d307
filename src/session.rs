#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! A single quiz instance: its questions, the current attempt, and the view
//! feedback is rendered into.

use std::collections::HashSet;

use serde::Serialize;

use crate::{
    config::{GraderConfig, ValidationMode},
    error::{QuizError, RenderWarning},
    grade::{GradeResult, grade, graded_announcement, question_notice, summary_notice},
    quiz::{Attempt, Quiz, validate},
    view::QuizView,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
/// Where a quiz instance is in its lifecycle.
pub enum SessionState {
    /// No feedback is shown.
    #[default]
    Unsubmitted,
    /// Feedback for the last submission is shown.
    Graded,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
/// What a submission produced.
pub enum Graded {
    /// Every part of the feedback was rendered.
    Complete {
        /// The grade.
        result: GradeResult,
    },
    /// The grade was computed but parts of the view were missing.
    Partial {
        /// The grade.
        result:   GradeResult,
        /// What could not be rendered.
        warnings: Vec<RenderWarning>,
    },
}

impl Graded {
    /// Wraps a result, partial when there are warnings.
    fn new(result: GradeResult, warnings: Vec<RenderWarning>) -> Self {
        if warnings.is_empty() {
            Graded::Complete { result }
        } else {
            Graded::Partial { result, warnings }
        }
    }

    /// The grade, whether or not rendering was complete.
    pub fn result(&self) -> &GradeResult {
        match self {
            Graded::Complete { result } | Graded::Partial { result, .. } => result,
        }
    }

    /// Rendering warnings; empty when complete.
    pub fn warnings(&self) -> &[RenderWarning] {
        match self {
            Graded::Complete { .. } => &[],
            Graded::Partial { warnings, .. } => warnings,
        }
    }

    /// True when nothing was skipped while rendering.
    pub fn is_complete(&self) -> bool {
        matches!(self, Graded::Complete { .. })
    }

    /// Consumes the value, returning the grade.
    pub fn into_result(self) -> GradeResult {
        match self {
            Graded::Complete { result } | Graded::Partial { result, .. } => result,
        }
    }
}

/// A quiz instance bound to the view it renders into.
pub struct QuizSession<V: QuizView> {
    /// The authored quiz.
    quiz:    Quiz,
    /// Grader configuration.
    config:  GraderConfig,
    /// The current selections.
    attempt: Attempt,
    /// Where feedback goes.
    view:    V,
    /// Lifecycle state.
    state:   SessionState,
}

impl<V: QuizView> QuizSession<V> {
    /// Binds `quiz` to `view`.
    ///
    /// Authoring issues are logged in lenient mode and returned as
    /// [`QuizError::Authoring`] in strict mode.
    pub fn new(quiz: Quiz, config: GraderConfig, view: V) -> Result<Self, QuizError> {
        let issues = validate(&quiz, config.answer_match());
        if !issues.is_empty() {
            match config.validation() {
                ValidationMode::Strict => {
                    return Err(QuizError::Authoring {
                        title: quiz.title.clone(),
                        issues,
                    });
                }
                ValidationMode::Lenient => {
                    for issue in &issues {
                        tracing::warn!("{}: {issue}", quiz.title);
                    }
                }
            }
        }

        Ok(Self {
            quiz,
            config,
            attempt: Attempt::new(),
            view,
            state: SessionState::Unsubmitted,
        })
    }

    /// The authored quiz.
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    /// The current selections.
    pub fn attempt(&self) -> &Attempt {
        &self.attempt
    }

    /// The view.
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Selects `token` for `question`.
    pub fn select(&mut self, question: &str, token: impl Into<String>) -> Result<(), QuizError> {
        if self.quiz.question(question).is_none() {
            return Err(QuizError::UnknownQuestion(question.to_string()));
        }
        self.attempt.select(question, token);
        Ok(())
    }

    /// Replaces every selection with those in `attempt`. Selections for
    /// unknown questions are rejected before anything changes.
    pub fn load_attempt(&mut self, attempt: Attempt) -> Result<(), QuizError> {
        if let Some(unknown) = attempt
            .question_ids()
            .find(|id| self.quiz.question(id).is_none())
        {
            return Err(QuizError::UnknownQuestion(unknown.to_string()));
        }
        self.attempt = attempt;
        Ok(())
    }

    /// Grades the current attempt and renders feedback into the view.
    ///
    /// Any feedback from an earlier submission is replaced, so submitting
    /// twice without changing selections leaves the view unchanged. When
    /// several questions share an id only the first is marked; the others
    /// are reported as warnings.
    pub fn submit(&mut self) -> Graded {
        self.clear_feedback();

        let policy = self.config.answer_match();
        let messages = self.config.messages();
        let result = grade(&self.quiz.questions, &self.attempt, policy);

        let mut warnings = Vec::new();
        let mut marked = HashSet::new();
        for (question, outcome) in self.quiz.questions.iter().zip(&result.outcomes) {
            if !marked.insert(question.id()) {
                warnings.push(RenderWarning::SharedQuestionBlock(question.id().to_string()));
                continue;
            }
            let notice = question_notice(question, outcome, messages, policy);
            if let Err(warning) = self.view.mark_question(question.id(), outcome.outcome, &notice) {
                warnings.push(warning);
            }
        }

        if let Err(warning) = self.view.show_summary(&summary_notice(&result, messages)) {
            warnings.push(warning);
        }
        if let Err(warning) = self.view.announce(&graded_announcement(&result, messages)) {
            warnings.push(warning);
        }

        for warning in &warnings {
            tracing::warn!("{}: {warning}", self.quiz.title);
        }

        self.state = SessionState::Graded;
        tracing::info!(
            "Quiz `{}` graded: {}/{} ({}%)",
            self.quiz.title,
            result.correct,
            result.total,
            result.percentage
        );

        Graded::new(result, warnings)
    }

    /// Clears every selection and all feedback, then announces the reset.
    pub fn reset(&mut self) -> Vec<RenderWarning> {
        self.attempt.clear();
        self.clear_feedback();
        self.state = SessionState::Unsubmitted;

        let status = self.config.messages().cleared_status.clone();
        match self.view.announce(&status) {
            Ok(()) => Vec::new(),
            Err(warning) => {
                tracing::warn!("{}: {warning}", self.quiz.title);
                vec![warning]
            }
        }
    }

    /// Removes notices and markers from every block and empties the
    /// feedback container.
    fn clear_feedback(&mut self) {
        self.view.clear_summary();
        for question in &self.quiz.questions {
            self.view.clear_question(question.id());
        }
    }

    /// Consumes the session, returning the view.
    pub fn into_view(self) -> V {
        self.view
    }
}

