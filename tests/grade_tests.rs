use quizmark::{
    AnswerMatch, Attempt, Choice, Outcome, Question,
    grade::{grade, grade_question, percentage, summary_line},
};

fn question(id: &str, answer: &str) -> Question {
    Question::builder()
        .id(id)
        .answer(answer)
        .choices(vec![
            Choice::new("a", "Alpha"),
            Choice::new("b", "Bravo"),
            Choice::new("c", "Charlie"),
        ])
        .build()
}

fn three_questions() -> Vec<Question> {
    vec![question("q1", "b"), question("q2", "a"), question("q3", "c")]
}

#[test]
fn mixed_attempt_scores_one_of_three() {
    let questions = three_questions();
    let attempt: Attempt = [("q1", "b"), ("q2", "x")].into_iter().collect();

    let result = grade(&questions, &attempt, AnswerMatch::IgnoreCase);

    assert_eq!(result.total, 3);
    assert_eq!(result.correct, 1);
    assert_eq!(result.incorrect, 1);
    assert_eq!(result.unanswered, 1);
    assert_eq!(result.percentage, 33);

    assert_eq!(result.outcome_of("q1").unwrap().outcome, Outcome::Correct);
    let q2 = result.outcome_of("q2").unwrap();
    assert_eq!(q2.outcome, Outcome::Incorrect);
    assert_eq!(q2.correct, "a");
    assert_eq!(q2.chosen.as_deref(), Some("x"));
    let q3 = result.outcome_of("q3").unwrap();
    assert_eq!(q3.outcome, Outcome::Unanswered);
    assert!(q3.chosen.is_none());
}

#[test]
fn counts_always_add_up_to_total() {
    let questions = three_questions();
    let attempts: Vec<Attempt> = vec![
        Attempt::new(),
        [("q1", "b")].into_iter().collect(),
        [("q1", "a"), ("q2", "a"), ("q3", "a")].into_iter().collect(),
        [("q1", "b"), ("q2", "a"), ("q3", "c")].into_iter().collect(),
        [("q2", ""), ("nope", "b")].into_iter().collect(),
    ];

    for attempt in &attempts {
        let result = grade(&questions, attempt, AnswerMatch::Exact);
        assert_eq!(result.correct + result.incorrect + result.unanswered, result.total);
        assert_eq!(result.outcomes.len(), result.total);
        assert_eq!(result.percentage, percentage(result.correct, result.total));
    }
}

#[test]
fn percentage_rounds_to_nearest() {
    assert_eq!(percentage(1, 3), 33);
    assert_eq!(percentage(2, 3), 67);
    assert_eq!(percentage(1, 8), 13);
    assert_eq!(percentage(5, 5), 100);
    assert_eq!(percentage(0, 4), 0);
}

#[test]
fn empty_quiz_reports_zero_without_dividing() {
    let result = grade(&[], &Attempt::new(), AnswerMatch::IgnoreCase);

    assert_eq!(result.total, 0);
    assert_eq!(result.correct, 0);
    assert_eq!(result.percentage, 0);
    assert!(!result.is_perfect());
    assert_eq!(summary_line(&result), "Score: 0/0 (0%)");
}

#[test]
fn all_correct_is_a_full_score() {
    let questions = three_questions();
    let attempt: Attempt = [("q1", "b"), ("q2", "a"), ("q3", "c")].into_iter().collect();

    let result = grade(&questions, &attempt, AnswerMatch::IgnoreCase);

    assert_eq!(result.percentage, 100);
    assert!(result.is_perfect());
    assert_eq!(summary_line(&result), "Score: 3/3 (100%)");
}

#[test]
fn grading_is_idempotent() {
    let questions = three_questions();
    let attempt: Attempt = [("q1", "c"), ("q3", "C")].into_iter().collect();

    let first = grade(&questions, &attempt, AnswerMatch::IgnoreCase);
    let second = grade(&questions, &attempt, AnswerMatch::IgnoreCase);

    assert_eq!(first, second);
}

#[test]
fn case_policy_decides_mixed_case_tokens() {
    let q = question("q1", "b");

    let relaxed = grade_question(&q, Some(" B "), AnswerMatch::IgnoreCase);
    assert_eq!(relaxed.outcome, Outcome::Correct);

    let strict = grade_question(&q, Some("B"), AnswerMatch::Exact);
    assert_eq!(strict.outcome, Outcome::Incorrect);
}

#[test]
fn blank_token_counts_as_unanswered() {
    let q = question("q1", "b");

    let outcome = grade_question(&q, Some("   "), AnswerMatch::Exact);

    assert_eq!(outcome.outcome, Outcome::Unanswered);
    assert!(outcome.chosen.is_none());
}

#[test]
fn unanswered_questions_are_noted_in_summary() {
    let questions = three_questions();
    let attempt: Attempt = [("q1", "b"), ("q2", "x")].into_iter().collect();

    let result = grade(&questions, &attempt, AnswerMatch::IgnoreCase);

    assert_eq!(summary_line(&result), "Score: 1/3 (33%) — 1 unanswered");
}

#[test]
fn overview_table_lists_every_question() {
    let questions = three_questions();
    let attempt: Attempt = [("q1", "b")].into_iter().collect();

    let table = grade(&questions, &attempt, AnswerMatch::IgnoreCase).table();

    assert!(table.contains("Quiz Overview"));
    for id in ["q1", "q2", "q3"] {
        assert!(table.contains(id), "missing {id} in\n{table}");
    }
    assert!(table.contains("Score: 1/3 (33%)"));
}
