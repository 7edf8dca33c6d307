#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

use std::collections::HashSet;

use super::model::Quiz;
use crate::{config::AnswerMatch, error::AuthoringIssue};

/// Collects every authoring issue in `quiz`, in question order.
///
/// Repeated choice tokens and whether the declared answer is among the
/// choices are decided with `policy`, the same comparison grading uses.
pub fn validate(quiz: &Quiz, policy: AnswerMatch) -> Vec<AuthoringIssue> {
    let mut issues = Vec::new();

    if quiz.questions.is_empty() {
        issues.push(AuthoringIssue::NoQuestions);
        return issues;
    }

    let mut seen_ids = HashSet::new();
    for question in &quiz.questions {
        if !seen_ids.insert(question.id()) {
            issues.push(AuthoringIssue::DuplicateQuestion(question.id().to_string()));
        }

        if question.choices().is_empty() {
            issues.push(AuthoringIssue::NoChoices(question.id().to_string()));
            continue;
        }

        let choices = question.choices();
        for (idx, choice) in choices.iter().enumerate() {
            let repeated = choices[..idx]
                .iter()
                .any(|earlier| policy.matches(&earlier.value, &choice.value));
            if repeated {
                issues.push(AuthoringIssue::DuplicateChoice {
                    question: question.id().to_string(),
                    token:    choice.value.clone(),
                });
            }
        }

        let offered = question
            .choices()
            .iter()
            .any(|c| policy.matches(&c.value, question.answer()));
        if !offered {
            issues.push(AuthoringIssue::AnswerNotAChoice {
                question: question.id().to_string(),
                answer:   question.answer().to_string(),
            });
        }
    }

    issues
}
