#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Grader configuration. Built explicitly and handed to every session; there
//! is no process-wide configuration state.

use std::{fmt::Display, str::FromStr};

use bon::Builder;
use serde::{Deserialize, Serialize};

use crate::constants::{
    BLANK_PROMPT, CLEARED_STATUS, CORRECT_ANSWER_LABEL, CORRECT_HEADING, GRADED_STATUS,
    INCORRECT_HEADING, MATCH_ENV, REVIEW_HINT, STRICT_ENV,
};

/// How a chosen token is compared to the declared answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnswerMatch {
    /// Tokens must be byte-for-byte equal.
    Exact,
    /// Tokens are trimmed and compared without regard to case.
    #[default]
    IgnoreCase,
}

impl AnswerMatch {
    /// Returns true when `chosen` matches `expected` under this policy.
    pub fn matches(self, chosen: &str, expected: &str) -> bool {
        match self {
            AnswerMatch::Exact => chosen == expected,
            AnswerMatch::IgnoreCase => chosen.trim().to_lowercase() == expected.trim().to_lowercase(),
        }
    }
}

impl FromStr for AnswerMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "exact" | "case-sensitive" => Ok(AnswerMatch::Exact),
            "ignore-case" | "ignorecase" | "case-insensitive" => Ok(AnswerMatch::IgnoreCase),
            other => Err(format!("unknown answer match policy `{other}`")),
        }
    }
}

impl Display for AnswerMatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerMatch::Exact => write!(f, "exact"),
            AnswerMatch::IgnoreCase => write!(f, "ignore-case"),
        }
    }
}

/// What to do with authoring issues found when a session is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Log the issues and degrade feedback where needed.
    #[default]
    Lenient,
    /// Refuse to build the session.
    Strict,
}

/// User-facing text used when rendering feedback.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(on(String, into))]
pub struct Messages {
    /// Heading for a correct answer.
    #[builder(default = CORRECT_HEADING.to_string())]
    pub correct:        String,
    /// Heading for a wrong or blank answer.
    #[builder(default = INCORRECT_HEADING.to_string())]
    pub incorrect:      String,
    /// Label in front of the correct answer's text.
    #[builder(default = CORRECT_ANSWER_LABEL.to_string())]
    pub correct_answer: String,
    /// Prompt for a blank answer.
    #[builder(default = BLANK_PROMPT.to_string())]
    pub blank:          String,
    /// Status prefix announced after grading.
    #[builder(default = GRADED_STATUS.to_string())]
    pub graded_status:  String,
    /// Status announced after a reset.
    #[builder(default = CLEARED_STATUS.to_string())]
    pub cleared_status: String,
    /// Hint placed after the score.
    #[builder(default = REVIEW_HINT.to_string())]
    pub review_hint:    String,
}

impl Default for Messages {
    fn default() -> Self {
        Messages::builder().build()
    }
}

/// Configuration for a grading session.
#[derive(Debug, Clone, Default, Builder, Serialize, Deserialize)]
pub struct GraderConfig {
    /// Answer comparison policy.
    #[builder(default)]
    answer_match: AnswerMatch,
    /// Authoring validation mode.
    #[builder(default)]
    validation:   ValidationMode,
    /// Feedback text.
    #[builder(default)]
    messages:     Messages,
}

impl GraderConfig {
    /// Builds a configuration from the defaults, overlaid with
    /// `QUIZMARK_MATCH` and `QUIZMARK_STRICT` when they are set.
    ///
    /// Unrecognised values are ignored with a warning.
    pub fn from_env() -> Self {
        let answer_match = match std::env::var(MATCH_ENV) {
            Ok(raw) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring {MATCH_ENV}: {e}");
                AnswerMatch::default()
            }),
            Err(_) => AnswerMatch::default(),
        };

        let validation = match std::env::var(STRICT_ENV)
            .map(|s| s.trim().to_ascii_lowercase())
            .as_deref()
        {
            Ok("1" | "true" | "yes" | "on") => ValidationMode::Strict,
            _ => ValidationMode::Lenient,
        };

        Self {
            answer_match,
            validation,
            messages: Messages::default(),
        }
    }

    /// Returns the answer comparison policy.
    pub fn answer_match(&self) -> AnswerMatch {
        self.answer_match
    }

    /// Returns the validation mode.
    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    /// Returns the feedback text.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Returns a config with a different comparison policy.
    pub fn with_answer_match(mut self, answer_match: AnswerMatch) -> Self {
        self.answer_match = answer_match;
        self
    }

    /// Returns a config with a different validation mode.
    pub fn with_validation(mut self, validation: ValidationMode) -> Self {
        self.validation = validation;
        self
    }
}
