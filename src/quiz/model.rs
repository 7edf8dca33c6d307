#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::BTreeMap;

use bon::Builder;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// A selectable option of a question.
pub struct Choice {
    /// Token submitted when this choice is selected.
    pub value: String,
    /// Text displayed next to the input.
    pub label: String,
}

impl Choice {
    /// Creates a choice from its token and display text.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder, Serialize, Deserialize)]
/// One gradable question block.
pub struct Question {
    /// Identifier, unique within a quiz. Doubles as the input group name.
    #[builder(into)]
    id:          String,
    /// Prompt shown as the block's legend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(into)]
    legend:      Option<String>,
    /// Declared correct-answer token.
    #[builder(into)]
    answer:      String,
    /// Options to choose from, in display order.
    #[serde(default)]
    #[builder(default)]
    choices:     Vec<Choice>,
    /// Explanation shown when answered correctly.
    #[serde(default)]
    #[builder(default, into)]
    why_correct: String,
    /// Explanation shown when answered incorrectly or left blank.
    #[serde(default)]
    #[builder(default, into)]
    why_wrong:   String,
}

impl Question {
    /// The question identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The declared correct-answer token.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// The choices, in display order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Explanation for a correct answer.
    pub fn why_correct(&self) -> &str {
        &self.why_correct
    }

    /// Explanation for a wrong or blank answer.
    pub fn why_wrong(&self) -> &str {
        &self.why_wrong
    }

    /// The legend, falling back to `Question N` for the 0-based `position`.
    pub fn title(&self, position: usize) -> String {
        match self.legend.as_deref().map(str::trim) {
            Some(legend) if !legend.is_empty() => legend.to_string(),
            _ => format!("Question {}", position + 1),
        }
    }

    /// Display text of the choice carrying `token`, if any.
    pub fn label_for(&self, token: &str) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.value == token)
            .map(|c| c.label.trim())
    }

    /// Display text for the declared answer. Falls back to the raw token when
    /// no choice carries it.
    pub fn correct_text(&self) -> &str {
        self.label_for(&self.answer).unwrap_or(&self.answer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// An authored quiz: a title and its question blocks in display order.
pub struct Quiz {
    /// Quiz title.
    #[serde(default)]
    pub title:     String,
    /// Question blocks.
    #[serde(default)]
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Creates a quiz from a title and questions.
    pub fn new(title: impl Into<String>, questions: impl IntoIterator<Item = Question>) -> Self {
        Self {
            title:     title.into(),
            questions: questions.into_iter().collect(),
        }
    }

    /// Looks up a question by identifier.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
/// The student's current selections: at most one token per question.
pub struct Attempt {
    /// Chosen token by question id.
    selections: BTreeMap<String, String>,
}

impl Attempt {
    /// An attempt with nothing selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects `token` for `question`, replacing any earlier choice.
    pub fn select(&mut self, question: impl Into<String>, token: impl Into<String>) {
        self.selections.insert(question.into(), token.into());
    }

    /// Removes the selection for `question`.
    pub fn deselect(&mut self, question: &str) -> Option<String> {
        self.selections.remove(question)
    }

    /// The token chosen for `question`, if any.
    pub fn chosen(&self, question: &str) -> Option<&str> {
        self.selections.get(question).map(String::as_str)
    }

    /// Clears every selection.
    pub fn clear(&mut self) {
        self.selections.clear();
    }

    /// True when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Ids of the questions with a selection.
    pub fn question_ids(&self) -> impl Iterator<Item = &str> {
        self.selections.keys().map(String::as_str)
    }

    /// Number of questions with a selection.
    pub fn len(&self) -> usize {
        self.selections.len()
    }
}

impl<K, V> FromIterator<(K, V)> for Attempt
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            selections: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
