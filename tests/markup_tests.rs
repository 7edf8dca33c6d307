use std::{fs, path::PathBuf};

use quizmark::{
    AnswerMatch, AuthoringIssue,
    quiz::{load_quiz, parse_attempt, parse_quiz, parse_selection, validate},
};
use uuid::Uuid;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join("quizzes")
        .join(name)
}

fn temp_file(name: &str, contents: &str) -> PathBuf {
    let root = std::env::temp_dir().join(format!("quizmark-{}", Uuid::new_v4()));
    fs::create_dir_all(&root).expect("create temp root");
    let path = root.join(name);
    fs::write(&path, contents).expect("write temp file");
    path
}

#[test]
fn fixture_loads_in_display_order() {
    let quiz = load_quiz(fixture("week-01.json")).expect("load quiz");

    assert_eq!(quiz.title, "Week 1: What is GIS?");
    let ids: Vec<_> = quiz.questions.iter().map(|q| q.id()).collect();
    assert_eq!(ids, ["q1", "q2", "q3"]);

    let q1 = quiz.question("q1").unwrap();
    assert_eq!(q1.answer(), "b");
    assert_eq!(q1.correct_text(), "Raster");
    assert_eq!(q1.choices().len(), 3);
}

#[test]
fn missing_title_falls_back_to_file_stem() {
    let path = temp_file(
        "week-07.json",
        r#"{ "questions": [ { "id": "q1", "answer": "a", "choices": [ { "value": "a", "label": "A" } ] } ] }"#,
    );

    let quiz = load_quiz(&path).expect("load quiz");

    assert_eq!(quiz.title, "week-07");
    let _ = fs::remove_dir_all(path.parent().unwrap());
}

#[test]
fn missing_explanations_default_to_empty() {
    let quiz = parse_quiz(r#"{ "questions": [ { "id": "q1", "answer": "a" } ] }"#).unwrap();

    let q1 = &quiz.questions[0];
    assert_eq!(q1.why_correct(), "");
    assert_eq!(q1.why_wrong(), "");
    assert!(q1.choices().is_empty());
    assert_eq!(q1.title(0), "Question 1");
    assert_eq!(q1.correct_text(), "a");
}

#[test]
fn unreadable_quiz_reports_the_path() {
    let err = load_quiz(fixture("does-not-exist.json")).unwrap_err();

    assert!(format!("{err:#}").contains("does-not-exist.json"));
}

#[test]
fn malformed_quiz_is_an_error() {
    assert!(parse_quiz(r#"{ "questions": [ { "id": 3 } ] }"#).is_err());
}

#[test]
fn attempt_document_maps_ids_to_tokens() {
    let attempt = parse_attempt(r#"{ "q1": "b", "q3": "c" }"#).unwrap();

    assert_eq!(attempt.len(), 2);
    assert_eq!(attempt.chosen("q1"), Some("b"));
    assert_eq!(attempt.chosen("q2"), None);
}

#[test]
fn selections_parse_id_and_token() {
    assert_eq!(
        parse_selection(" q2 = a ").unwrap(),
        ("q2".to_string(), "a".to_string())
    );
    assert_eq!(parse_selection("q2=").unwrap(), ("q2".to_string(), String::new()));
    assert!(parse_selection("q2").is_err());
    assert!(parse_selection("=a").is_err());
}

#[test]
fn validation_lists_every_authoring_problem() {
    let quiz = load_quiz(fixture("broken.json")).unwrap();

    let issues = validate(&quiz, AnswerMatch::Exact);

    assert_eq!(
        issues,
        vec![
            AuthoringIssue::AnswerNotAChoice {
                question: "q1".to_string(),
                answer:   "d".to_string(),
            },
            AuthoringIssue::DuplicateQuestion("q1".to_string()),
            AuthoringIssue::NoChoices("q1".to_string()),
        ]
    );
}

#[test]
fn well_formed_quiz_has_no_issues() {
    let quiz = load_quiz(fixture("week-01.json")).unwrap();

    assert!(validate(&quiz, AnswerMatch::Exact).is_empty());
}

#[test]
fn empty_quiz_and_duplicate_choices_are_reported() {
    let empty = parse_quiz(r#"{ "title": "Nothing" }"#).unwrap();
    assert_eq!(validate(&empty, AnswerMatch::Exact), vec![AuthoringIssue::NoQuestions]);

    let dup = parse_quiz(
        r#"{ "questions": [ { "id": "q1", "answer": "A",
             "choices": [ { "value": "a", "label": "x" }, { "value": "a", "label": "y" } ] } ] }"#,
    )
    .unwrap();
    let issues = validate(&dup, AnswerMatch::IgnoreCase);
    assert_eq!(
        issues,
        vec![AuthoringIssue::DuplicateChoice {
            question: "q1".to_string(),
            token:    "a".to_string(),
        }]
    );

    let exact = validate(&dup, AnswerMatch::Exact);
    assert!(exact.contains(&AuthoringIssue::AnswerNotAChoice {
        question: "q1".to_string(),
        answer:   "A".to_string(),
    }));
}

#[test]
fn choices_differing_only_in_case_repeat_under_ignore_case() {
    let quiz = parse_quiz(
        r#"{ "questions": [ { "id": "q1", "answer": "a",
             "choices": [ { "value": "a", "label": "Lines" }, { "value": "A", "label": "Areas" } ] } ] }"#,
    )
    .unwrap();

    assert_eq!(
        validate(&quiz, AnswerMatch::IgnoreCase),
        vec![AuthoringIssue::DuplicateChoice {
            question: "q1".to_string(),
            token:    "A".to_string(),
        }]
    );
    assert!(validate(&quiz, AnswerMatch::Exact).is_empty());
}
