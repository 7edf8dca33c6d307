#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

//! # quizmark
//! ## Introduction
//!
//! Grades multiple-choice course quizzes from the command line.
//!
//! `quizmark grade week-01.json --answer q1=b --answer q2=a` prints the
//! per-question overview, each question's feedback and the score.
//! `quizmark check 'modules/**/*.json'` lists authoring problems.
//!
//! `QUIZMARK_MATCH` (`exact` or `ignore-case`) and `QUIZMARK_STRICT` may be set
//! in the environment or a `.env` file.

use anyhow::{Context, Result, bail};
use bpaf::*;
use colored::Colorize;
use dotenvy::dotenv;
use quizmark::{
    AnswerMatch, GraderConfig, HtmlView, Outcome, QuizSession, ValidationMode,
    grade::question_notice,
    mini::MiniQuiz,
    quiz::{self, load_attempt, load_quiz, parse_selection},
};
use tracing::{Level, metadata::LevelFilter};
use tracing_subscriber::{fmt, prelude::*, util::SubscriberInitExt};

/// Arguments of the `grade` command.
#[derive(Debug, Clone)]
struct GradeArgs {
    /// Path to the quiz document
    quiz:    String,
    /// Optional attempt document
    attempt: Option<String>,
    /// `ID=TOKEN` selections, applied after the attempt document
    answers: Vec<String>,
    /// Compare tokens exactly
    exact:   bool,
    /// Refuse quizzes with authoring problems
    strict:  bool,
    /// Print the result as JSON
    json:    bool,
    /// Print the rendered quiz as HTML
    html:    bool,
}

/// Top-level CLI commands.
#[derive(Debug, Clone)]
enum Cmd {
    /// Grade an attempt
    Grade(GradeArgs),
    /// Validate quiz documents
    Check(Vec<String>),
    /// Check a dropdown mini quiz
    Mini(String, Vec<String>),
}

/// Parse the command line arguments and return a `Cmd` enum
fn options() -> Cmd {
    /// parses `ID=TOKEN` selections
    fn answers() -> impl Parser<Vec<String>> {
        long("answer")
            .short('a')
            .help("Select TOKEN for question ID")
            .argument::<String>("ID=TOKEN")
            .many()
    }

    let quiz = positional::<String>("QUIZ").help("Path to a quiz document");
    let attempt = long("attempt")
        .help("Path to an attempt document")
        .argument::<String>("FILE")
        .optional();
    let answers = answers();
    let exact = long("exact")
        .help("Compare answer tokens exactly instead of ignoring case")
        .switch();
    let strict = long("strict")
        .help("Refuse quizzes with authoring problems")
        .switch();
    let json = long("json").help("Print the grade as JSON").switch();
    let html = long("html")
        .help("Print the graded quiz as HTML")
        .switch();

    let grade = construct!(GradeArgs {
        quiz,
        attempt,
        answers,
        exact,
        strict,
        json,
        html
    })
    .map(Cmd::Grade)
    .to_options()
    .command("grade")
    .help("Grade an attempt and show feedback");

    let check = positional::<String>("GLOB")
        .help("Quiz documents to validate")
        .some("At least one quiz document is required")
        .map(Cmd::Check)
        .to_options()
        .command("check")
        .help("Report authoring problems in quiz documents");

    let mini_file = positional::<String>("FILE").help("Path to a mini quiz document");
    let picks = long("pick")
        .short('p')
        .help("Pick VALUE for item N (0-based)")
        .argument::<String>("N=VALUE")
        .many();
    let mini = construct!(Cmd::Mini(mini_file, picks))
        .to_options()
        .command("mini")
        .help("Check a dropdown mini quiz");

    let cmd = construct!([grade, check, mini]);

    cmd.to_options()
        .descr("Grades multiple-choice quizzes and renders feedback")
        .run()
}

/// Runs the `grade` command.
fn run_grade(args: GradeArgs, base: GraderConfig) -> Result<()> {
    let mut config = base;
    if args.exact {
        config = config.with_answer_match(AnswerMatch::Exact);
    }
    if args.strict {
        config = config.with_validation(ValidationMode::Strict);
    }
    let policy = config.answer_match();
    let messages = config.messages().clone();

    let quiz = load_quiz(&args.quiz)?;
    let view = HtmlView::for_quiz(&quiz);
    let mut session = QuizSession::new(quiz, config, view)?;

    if let Some(path) = &args.attempt {
        session.load_attempt(load_attempt(path)?)?;
    }
    for raw in &args.answers {
        let (id, token) = parse_selection(raw)?;
        session.select(&id, token)?;
    }

    let graded = session.submit();
    let result = graded.result();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&graded)?);
        return Ok(());
    }
    if args.html {
        println!(
            "{}",
            session
                .view()
                .render(session.quiz(), session.attempt())
                .into_string()
        );
        return Ok(());
    }

    eprintln!("{}", result.table());
    for (idx, (question, outcome)) in session
        .quiz()
        .questions
        .iter()
        .zip(&result.outcomes)
        .enumerate()
    {
        let title = format!("{} {}", outcome.outcome.symbol(), question.title(idx));
        let title = match outcome.outcome {
            Outcome::Correct => title.as_str().green(),
            Outcome::Incorrect | Outcome::Unanswered => title.as_str().red(),
        };
        println!("{title}");
        let notice = question_notice(question, outcome, &messages, policy);
        for line in notice.plain_text().lines() {
            println!("    {line}");
        }
    }
    if let Some(status) = session.view().live_text() {
        println!("{}", status.bold());
    }

    Ok(())
}

/// Runs the `check` command; fails when any document has problems.
fn run_check(patterns: Vec<String>, config: GraderConfig) -> Result<()> {
    let mut checked = 0usize;
    let mut failing = 0usize;

    for pattern in &patterns {
        let paths =
            glob::glob(pattern).with_context(|| format!("Invalid glob pattern `{pattern}`"))?;
        for path in paths {
            let path = path.with_context(|| format!("Could not read a match of `{pattern}`"))?;
            let document = load_quiz(&path)?;
            let issues = quiz::validate(&document, config.answer_match());
            checked += 1;

            if issues.is_empty() {
                println!("{} {}", "ok".green(), path.display());
            } else {
                failing += 1;
                println!("{} {}", "problems".red(), path.display());
                for issue in issues {
                    println!("    - {issue}");
                }
            }
        }
    }

    if checked == 0 {
        bail!("No quiz documents matched {}", patterns.join(", "));
    }
    if failing > 0 {
        bail!("{failing} of {checked} quiz document(s) have authoring problems");
    }
    Ok(())
}

/// Runs the `mini` command.
fn run_mini(path: String, picks: Vec<String>, config: GraderConfig) -> Result<()> {
    let mut mini = MiniQuiz::load(&path, config.answer_match())?;

    for raw in &picks {
        let (idx, value) = parse_selection(raw)?;
        let idx = idx
            .parse::<usize>()
            .with_context(|| format!("`{idx}` is not an item number"))?;
        mini.select(idx, value)?;
    }

    let score = mini.check();
    for idx in 0..mini.len() {
        let prompt = mini.prompt(idx).unwrap_or_default();
        let value = mini.value(idx).unwrap_or_default();
        println!("{idx}: {} [{}]", prompt.bold(), value);
        if let Some(notice) = mini.feedback(idx) {
            println!("    {}", notice.plain_text());
        }
    }
    println!("{}", score.line().as_str().bold());
    Ok(())
}

fn main() -> Result<()> {
    dotenv().ok();

    let fmt = fmt::layer()
        .without_time()
        .with_file(false)
        .with_line_number(false);
    let filter_layer = LevelFilter::from_level(Level::INFO);
    tracing_subscriber::registry()
        .with(fmt)
        .with(filter_layer)
        .init();

    let config = GraderConfig::from_env();

    match options() {
        Cmd::Grade(args) => run_grade(args, config)?,
        Cmd::Check(patterns) => run_check(patterns, config)?,
        Cmd::Mini(path, picks) => run_mini(path, picks, config)?,
    };

    Ok(())
}
