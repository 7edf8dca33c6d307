#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

/// Notices, summary line and announcements.
pub mod feedback;
/// The pure grading function.
pub mod grader;
/// Outcome and result types.
pub mod results;

pub use feedback::{
    Notice, NoticeKind, NoticeLine, graded_announcement, question_notice, summary_line,
    summary_notice,
};
pub use grader::{grade, grade_question};
pub use results::{GradeResult, Outcome, QuestionOutcome, percentage};
