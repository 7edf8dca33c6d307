use quizmark::{
    AnswerMatch, Choice, GraderConfig, HtmlView, Question, Quiz, QuizSession, ValidationMode,
    config::Messages,
    constants::{BLANK_PROMPT, CLEARED_STATUS, CORRECT_ANSWER_LABEL, CORRECT_HEADING},
};

#[test]
fn defaults_are_lenient_and_ignore_case() {
    let config = GraderConfig::default();

    assert_eq!(config.answer_match(), AnswerMatch::IgnoreCase);
    assert_eq!(config.validation(), ValidationMode::Lenient);
    assert_eq!(config.messages().correct, CORRECT_HEADING);
    assert_eq!(config.messages().blank, BLANK_PROMPT);
    assert_eq!(config.messages().cleared_status, CLEARED_STATUS);
}

#[test]
fn builder_overrides_individual_fields() {
    let config = GraderConfig::builder()
        .answer_match(AnswerMatch::Exact)
        .messages(Messages::builder().correct("Right!").build())
        .build();

    assert_eq!(config.answer_match(), AnswerMatch::Exact);
    assert_eq!(config.validation(), ValidationMode::Lenient);
    assert_eq!(config.messages().correct, "Right!");
    assert_eq!(config.messages().blank, BLANK_PROMPT);
}

#[test]
fn answer_match_parses_from_text() {
    assert_eq!("exact".parse::<AnswerMatch>(), Ok(AnswerMatch::Exact));
    assert_eq!(" Ignore-Case ".parse::<AnswerMatch>(), Ok(AnswerMatch::IgnoreCase));
    assert!("fuzzy".parse::<AnswerMatch>().is_err());
    assert_eq!(AnswerMatch::Exact.to_string(), "exact");
}

#[test]
fn answer_match_policies_compare_tokens() {
    assert!(AnswerMatch::Exact.matches("b", "b"));
    assert!(!AnswerMatch::Exact.matches("B", "b"));
    assert!(!AnswerMatch::Exact.matches(" b", "b"));
    assert!(AnswerMatch::IgnoreCase.matches(" B ", "b"));
    assert!(!AnswerMatch::IgnoreCase.matches("c", "b"));
}

#[test]
fn correct_answer_label_is_configurable() {
    let quiz = Quiz::new(
        "Labels",
        [Question::builder()
            .id("q1")
            .answer("b")
            .choices(vec![Choice::new("a", "Lines"), Choice::new("b", "Polygons")])
            .build()],
    );
    let config = GraderConfig::builder()
        .messages(Messages::builder().correct_answer("Expected:").build())
        .build();
    assert_eq!(GraderConfig::default().messages().correct_answer, CORRECT_ANSWER_LABEL);

    let view = HtmlView::for_quiz(&quiz);
    let mut session = QuizSession::new(quiz, config, view).unwrap();
    session.select("q1", "a").unwrap();
    session.submit();

    let text = session.view().notices("q1")[0].plain_text();
    assert!(text.contains("Expected: Polygons"), "{text}");
    assert!(!text.contains(CORRECT_ANSWER_LABEL), "{text}");
}
