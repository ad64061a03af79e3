use std::time::Duration;

use quiz_core::model::{Category, Difficulty, RawQuestion, SessionRequest};
use services::{FetchError, InMemoryQuestionSource};

use super::test_harness::{ViewKind, setup_view_harness};

const LONG_FEEDBACK: Duration = Duration::from_secs(60);
const SHORT_FEEDBACK: Duration = Duration::from_millis(20);

fn raw(question: &str, correct: &str, incorrect: &[&str]) -> RawQuestion {
    RawQuestion::new(
        question,
        correct,
        incorrect.iter().map(|s| (*s).to_string()).collect(),
    )
}

fn two_questions() -> InMemoryQuestionSource {
    InMemoryQuestionSource::with_questions(vec![
        raw("Capital of &quot;France&quot;?", "Paris", &["Rome", "Madrid", "Berlin"]),
        raw("The answer to everything?", "42", &["7", "13", "99"]),
    ])
}

fn quiz_query() -> String {
    "category=17&difficulty=easy&amount=2".to_string()
}

#[tokio::test(flavor = "current_thread")]
async fn setup_view_smoke_renders_choices() {
    let mut harness = setup_view_harness(
        ViewKind::Setup,
        InMemoryQuestionSource::with_questions(Vec::new()),
        LONG_FEEDBACK,
    );
    harness.rebuild();
    let html = harness.render();
    for label in ["General Knowledge", "Computers", "History", "Medium", "15 questions"] {
        assert!(html.contains(label), "missing {label} in {html}");
    }
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_renders_score_and_tier() {
    let mut harness = setup_view_harness(
        ViewKind::Results { score: 4, total: 5 },
        InMemoryQuestionSource::with_questions(Vec::new()),
        LONG_FEEDBACK,
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("4/5"), "missing score in {html}");
    assert!(html.contains("80% correct"), "missing percent in {html}");
    assert!(html.contains("Excellent work!"), "missing tier in {html}");
    assert!(html.contains("Start New Quiz"), "missing restart in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn results_view_smoke_handles_zero_total() {
    let mut harness = setup_view_harness(
        ViewKind::Results { score: 0, total: 0 },
        InMemoryQuestionSource::with_questions(Vec::new()),
        LONG_FEEDBACK,
    );
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("0% correct"), "missing percent in {html}");
    assert!(html.contains("Keep practicing!"), "missing tier in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_first_question() {
    let mut harness = setup_view_harness(ViewKind::Quiz(quiz_query()), two_questions(), LONG_FEEDBACK);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing header in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Paris"), "missing choice in {html}");
    assert_eq!(harness.source.calls(), 1);
    assert_eq!(
        harness.source.last_request(),
        Some(SessionRequest::new(Category::SCIENCE_AND_NATURE, Difficulty::Easy, 2).unwrap())
    );
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_shows_feedback_and_stays_put() {
    let mut harness = setup_view_harness(ViewKind::Quiz(quiz_query()), two_questions(), LONG_FEEDBACK);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    harness.choose("Paris");
    harness.choose("Rome");
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Score: 1"), "double click should score once: {html}");
    assert!(html.contains("choice correct"), "missing correct marker in {html}");
    assert!(!html.contains("choice incorrect"), "unexpected wrong marker in {html}");
    assert!(html.contains("Question 1 of 2"), "advanced before the delay: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_marks_wrong_pick() {
    let mut harness = setup_view_harness(ViewKind::Quiz(quiz_query()), two_questions(), LONG_FEEDBACK);
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    harness.choose("Berlin");
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("choice incorrect"), "missing wrong marker in {html}");
    assert!(html.contains("choice correct"), "missing correct marker in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_renders_no_questions() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(quiz_query()),
        InMemoryQuestionSource::failing(FetchError::NoQuestionsAvailable),
        LONG_FEEDBACK,
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("No questions found"), "missing message in {html}");
    assert!(html.contains("Go Back"), "missing back button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_passes_network_message_through() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(quiz_query()),
        InMemoryQuestionSource::failing(FetchError::NetworkFailure(
            "connection refused".into(),
        )),
        LONG_FEEDBACK,
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Could not load the quiz"), "missing title in {html}");
    assert!(html.contains("connection refused"), "missing message in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_rejects_bad_parameters() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz("amount=lots".to_string()),
        two_questions(),
        LONG_FEEDBACK,
    );
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Invalid quiz settings"), "missing error in {html}");
    assert_eq!(harness.source.calls(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_advances_after_feedback_delay() {
    let mut harness = setup_view_harness(ViewKind::Quiz(quiz_query()), two_questions(), SHORT_FEEDBACK);
    harness.rebuild();
    harness.drive_until("Question 1 of 2").await;

    harness.choose("Paris");
    let html = harness.drive_until("Question 2 of 2").await;

    assert!(html.contains("Question 2 of 2"), "did not advance: {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("The answer to everything?"), "missing prompt in {html}");
    assert!(!html.contains("choice correct"), "feedback leaked into next question: {html}");
    assert_eq!(harness.quiz_handles.elapsed_count(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_smoke_last_answer_navigates_to_results() {
    let mut harness = setup_view_harness(ViewKind::Quiz(quiz_query()), two_questions(), SHORT_FEEDBACK);
    harness.rebuild();
    harness.drive_until("Question 1 of 2").await;

    harness.choose("Paris");
    harness.drive_until("Question 2 of 2").await;
    harness.choose("42");
    let html = harness.drive_until("Excellent work!").await;

    assert!(html.contains("2/2"), "missing final score in {html}");
    assert!(html.contains("100% correct"), "missing percent in {html}");
    assert!(!html.contains("Question 2 of 2"), "quiz still on screen: {html}");
    assert_eq!(harness.quiz_handles.elapsed_count(), 2);
    assert_eq!(harness.source.calls(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_unmounted_mid_feedback_does_not_advance() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(quiz_query()),
        two_questions(),
        Duration::from_millis(100),
    );
    harness.rebuild();
    harness.drive_until("Question 1 of 2").await;

    harness.choose("Paris");
    harness.unmount();
    tokio::time::sleep(Duration::from_millis(250)).await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(!html.contains("Question"), "quiz still mounted: {html}");
    assert!(!html.contains("Excellent work!"), "navigated after unmount: {html}");
    assert_eq!(harness.quiz_handles.elapsed_count(), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_view_dropped_mid_feedback_does_not_advance() {
    let mut harness = setup_view_harness(
        ViewKind::Quiz(quiz_query()),
        two_questions(),
        Duration::from_millis(100),
    );
    harness.rebuild();
    harness.drive_until("Question 1 of 2").await;

    harness.choose("Paris");
    let handles = harness.quiz_handles.clone();
    drop(harness);
    tokio::time::sleep(Duration::from_millis(250)).await;

    assert_eq!(handles.elapsed_count(), 0);
}
