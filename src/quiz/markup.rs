#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! Loading quizzes and attempts from their authored documents.
//!
//! A quiz document is JSON:
//!
//! ```json
//! {
//!   "title": "Week 1",
//!   "questions": [
//!     {
//!       "id": "q1",
//!       "legend": "Which layer type stores continuous surfaces?",
//!       "answer": "b",
//!       "choices": [{ "value": "a", "label": "Vector" }, { "value": "b", "label": "Raster" }],
//!       "why_correct": "Rasters sample a surface on a grid.",
//!       "why_wrong": "Vectors store discrete features."
//!     }
//!   ]
//! }
//! ```
//!
//! An attempt document is a JSON object from question id to chosen token.

use std::{fs, path::Path};

use anyhow::{Context, Result, bail};

use super::model::{Attempt, Quiz};

/// Parses a quiz document.
pub fn parse_quiz(source: &str) -> Result<Quiz> {
    serde_json::from_str(source).context("Could not parse quiz document")
}

/// Reads and parses the quiz document at `path`.
pub fn load_quiz(path: impl AsRef<Path>) -> Result<Quiz> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Could not read quiz document {}", path.display()))?;
    let mut quiz =
        parse_quiz(&source).with_context(|| format!("Invalid quiz document {}", path.display()))?;

    if quiz.title.trim().is_empty() {
        quiz.title = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
    }

    tracing::debug!(
        "Loaded quiz `{}` with {} question(s) from {}",
        quiz.title,
        quiz.questions.len(),
        path.display()
    );
    Ok(quiz)
}

/// Parses an attempt document.
pub fn parse_attempt(source: &str) -> Result<Attempt> {
    serde_json::from_str(source).context("Could not parse attempt document")
}

/// Reads and parses the attempt document at `path`.
pub fn load_attempt(path: impl AsRef<Path>) -> Result<Attempt> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)
        .with_context(|| format!("Could not read attempt document {}", path.display()))?;
    parse_attempt(&source).with_context(|| format!("Invalid attempt document {}", path.display()))
}

/// Parses a single `id=token` selection.
pub fn parse_selection(raw: &str) -> Result<(String, String)> {
    let Some((id, token)) = raw.split_once('=') else {
        bail!("Selection `{raw}` is not of the form ID=TOKEN");
    };

    let id = id.trim();
    if id.is_empty() {
        bail!("Selection `{raw}` has no question id");
    }

    Ok((id.to_string(), token.trim().to_string()))
}
