#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Dropdown "mini quizzes": a short list of items, each answered by picking
//! one option from a select box, checked all at once.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::{
    config::AnswerMatch,
    constants::{MINI_INITIAL_STATUS, MINI_PLACEHOLDER, MINI_UPDATED_STATUS},
    error::QuizError,
    grade::{Notice, NoticeKind},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One dropdown item as authored.
pub struct MiniItem {
    /// Text shown next to the dropdown.
    #[serde(default)]
    pub prompt:  String,
    /// The correct option.
    pub correct: String,
    /// Explanation shown when the pick is wrong.
    #[serde(default)]
    pub why:     String,
    /// Options offered, besides the placeholder.
    #[serde(default)]
    pub options: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Counts from the last check.
pub struct MiniScore {
    /// Items picked correctly.
    pub correct:  usize,
    /// Items with a pick.
    pub answered: usize,
    /// All items.
    pub total:    usize,
}

impl MiniScore {
    /// The score line, e.g. `Mini score: 2/4 (answered 3)`.
    pub fn line(&self) -> String {
        let mut line = format!("Mini score: {}/{}", self.correct, self.total);
        if self.answered < self.total {
            line.push_str(&format!(" (answered {})", self.answered));
        }
        line
    }
}

#[derive(Debug, Clone)]
/// Live state of one item.
struct ItemState {
    /// The authored item.
    item:     MiniItem,
    /// Current pick; the placeholder when nothing is picked.
    value:    String,
    /// Notice from the last check, cleared on change.
    feedback: Option<Notice>,
}

#[derive(Debug, Clone)]
/// A mini quiz instance.
pub struct MiniQuiz {
    /// Items in display order.
    items:  Vec<ItemState>,
    /// Comparison policy.
    policy: AnswerMatch,
    /// Text of the score line.
    status: String,
}

impl MiniQuiz {
    /// Creates a mini quiz with every dropdown on its placeholder and no
    /// feedback shown.
    pub fn new(items: impl IntoIterator<Item = MiniItem>, policy: AnswerMatch) -> Self {
        Self {
            items: items
                .into_iter()
                .map(|item| ItemState {
                    item,
                    value: MINI_PLACEHOLDER.to_string(),
                    feedback: None,
                })
                .collect(),
            policy,
            status: MINI_INITIAL_STATUS.to_string(),
        }
    }

    /// Reads a JSON list of items from `path`.
    pub fn load(path: impl AsRef<Path>, policy: AnswerMatch) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)
            .with_context(|| format!("Could not read mini quiz {}", path.display()))?;
        let items: Vec<MiniItem> = serde_json::from_str(&source)
            .with_context(|| format!("Invalid mini quiz {}", path.display()))?;
        Ok(Self::new(items, policy))
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there are no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The score line.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// The current pick of item `idx`.
    pub fn value(&self, idx: usize) -> Option<&str> {
        self.items.get(idx).map(|s| s.value.as_str())
    }

    /// The prompt shown next to item `idx`.
    pub fn prompt(&self, idx: usize) -> Option<&str> {
        self.items.get(idx).map(|s| s.item.prompt.as_str())
    }

    /// The notice shown under item `idx`, if any.
    pub fn feedback(&self, idx: usize) -> Option<&Notice> {
        self.items.get(idx).and_then(|s| s.feedback.as_ref())
    }

    /// Picks `value` for item `idx`, clearing that item's notice and asking
    /// for a re-check.
    ///
    /// When the item lists its options, `value` must be one of them or the
    /// placeholder.
    pub fn select(&mut self, idx: usize, value: impl Into<String>) -> Result<(), QuizError> {
        let policy = self.policy;
        let state = self.items.get_mut(idx).ok_or(QuizError::UnknownItem(idx))?;
        let value = value.into();

        let offered = state.item.options.is_empty()
            || policy.matches(&value, MINI_PLACEHOLDER)
            || state.item.options.iter().any(|o| policy.matches(&value, o));
        if !offered {
            return Err(QuizError::UnknownOption { item: idx, value });
        }

        state.value = value;
        state.feedback = None;
        self.status = MINI_UPDATED_STATUS.to_string();
        Ok(())
    }

    /// Checks every item, attaching a notice to each and updating the score
    /// line.
    pub fn check(&mut self) -> MiniScore {
        let mut score = MiniScore {
            total: self.items.len(),
            ..MiniScore::default()
        };

        for state in &mut self.items {
            let value = state.value.trim();
            let answered =
                !value.is_empty() && !self.policy.matches(value, MINI_PLACEHOLDER);
            if !answered {
                state.feedback = Some(mini_notice(NoticeKind::Warn, "↺", "Choose an option first."));
                continue;
            }
            score.answered += 1;

            if self.policy.matches(value, &state.item.correct) {
                score.correct += 1;
                state.feedback = Some(mini_notice(NoticeKind::Good, "✔", "Nice."));
            } else {
                let text = format!("Best choice: {}. {}", state.item.correct, state.item.why);
                state.feedback = Some(mini_notice(NoticeKind::Warn, "✖", text.trim_end()));
            }
        }

        self.status = score.line();
        tracing::debug!("{}", self.status);
        score
    }
}

/// A single-line notice.
fn mini_notice(kind: NoticeKind, heading: &str, text: &str) -> Notice {
    Notice {
        kind,
        heading: heading.to_string(),
        text: text.to_string(),
        lines: Vec::new(),
    }
}
