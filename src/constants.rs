#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Heading of a notice for a correctly answered question
pub const CORRECT_HEADING: &str = "Correct.";

/// Heading of a notice for an incorrect or blank question
pub const INCORRECT_HEADING: &str = "Not quite.";

/// Label introducing the correct answer in a corrective notice
pub const CORRECT_ANSWER_LABEL: &str = "Correct answer:";

/// Prompt shown when a question was left blank
pub const BLANK_PROMPT: &str = "You left this one blank.";

/// Prefix of the live-region status after grading
pub const GRADED_STATUS: &str = "Quiz graded.";

/// Live-region status after a reset
pub const CLEARED_STATUS: &str = "Quiz cleared.";

/// Hint shown next to the score in the feedback container
pub const REVIEW_HINT: &str = "Review the explanations below.";

/// Placeholder value of an unanswered mini quiz dropdown
pub const MINI_PLACEHOLDER: &str = "choose";

/// Score line of a mini quiz before it has been checked
pub const MINI_INITIAL_STATUS: &str = "Make your selections, then press “Check answers”.";

/// Score line of a mini quiz after a selection changed
pub const MINI_UPDATED_STATUS: &str = "Selections updated — press “Check answers”.";

/// Environment variable selecting the answer comparison policy
pub const MATCH_ENV: &str = "QUIZMARK_MATCH";

/// Environment variable enabling strict authoring validation
pub const STRICT_ENV: &str = "QUIZMARK_STRICT";
