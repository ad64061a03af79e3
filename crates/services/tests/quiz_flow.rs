use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::{
    Advance, Category, Difficulty, QuizResult, QuizSession, RawQuestion, RejectReason,
    SessionRequest, SessionState,
};
use services::{
    AnswerResult, FetchError, InMemoryQuestionSource, QuizLoopService, QuizServiceError,
};

fn raw(question: &str, correct: &str, incorrect: &[&str]) -> RawQuestion {
    RawQuestion::new(
        question,
        correct,
        incorrect.iter().map(|s| (*s).to_string()).collect(),
    )
}

fn capitals_and_numbers() -> Vec<RawQuestion> {
    vec![
        raw("Capital of France?", "Paris", &["Rome", "Madrid", "Berlin"]),
        raw("The answer to everything?", "42", &["7", "13", "99"]),
    ]
}

async fn start(source: InMemoryQuestionSource) -> (QuizLoopService, QuizSession) {
    let service = QuizLoopService::new(Arc::new(source));
    let session = service
        .start_session(&SessionRequest::default())
        .await
        .expect("session starts");
    (service, session)
}

async fn answer_and_wait(
    service: &QuizLoopService,
    session: &mut QuizSession,
    answer: &str,
) -> (bool, Advance) {
    match service.answer_current(session, answer) {
        AnswerResult::Accepted { correct, pending } => {
            let ticket = pending.elapsed().await;
            (correct, service.finish_feedback(session, ticket))
        }
        AnswerResult::Ignored(reason) => panic!("answer ignored: {reason:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn two_correct_answers_finish_with_full_score() {
    let (service, mut session) =
        start(InMemoryQuestionSource::with_questions(capitals_and_numbers())).await;

    let (correct, advance) = answer_and_wait(&service, &mut session, "Paris").await;
    assert!(correct);
    assert_eq!(advance, Advance::Next { index: 1 });

    let (correct, advance) = answer_and_wait(&service, &mut session, "42").await;
    assert!(correct);
    assert_eq!(advance, Advance::Completed(QuizResult::new(2, 2)));
    assert_eq!(session.state(), SessionState::Complete);
}

#[tokio::test(start_paused = true)]
async fn single_wrong_answer_completes_after_delay() {
    let source = InMemoryQuestionSource::with_questions(vec![raw(
        "Largest planet?",
        "Jupiter",
        &["Mars", "Venus", "Mercury"],
    )]);
    let (service, mut session) = start(source).await;

    let AnswerResult::Accepted { correct, pending } =
        service.answer_current(&mut session, "Mars")
    else {
        panic!("first answer should be accepted");
    };
    assert!(!correct);
    assert!(session.is_feedback_active());
    assert!(!session.is_complete());

    let started = tokio::time::Instant::now();
    let ticket = pending.elapsed().await;
    assert!(started.elapsed() >= Duration::from_millis(1500));

    let advance = service.finish_feedback(&mut session, ticket);
    assert_eq!(advance, Advance::Completed(QuizResult::new(0, 1)));
    assert_eq!(session.result(), Some(QuizResult::new(0, 1)));
}

#[tokio::test(start_paused = true)]
async fn session_stays_on_question_until_delay_elapses() {
    let (service, mut session) =
        start(InMemoryQuestionSource::with_questions(capitals_and_numbers())).await;

    let AnswerResult::Accepted { pending, .. } = service.answer_current(&mut session, "Paris")
    else {
        panic!("answer should be accepted");
    };

    let early = tokio::time::timeout(Duration::from_millis(1499), pending.elapsed()).await;
    assert!(early.is_err(), "advance fired before the feedback delay");
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.pending_answer(), Some("Paris"));
    assert_eq!(session.score(), 1);
}

#[tokio::test]
async fn double_click_scores_once() {
    let (service, mut session) =
        start(InMemoryQuestionSource::with_questions(capitals_and_numbers())).await;

    let first = service.answer_current(&mut session, "Paris");
    let second = service.answer_current(&mut session, "Paris");

    assert!(matches!(first, AnswerResult::Accepted { correct: true, .. }));
    assert_eq!(second, AnswerResult::Ignored(RejectReason::FeedbackActive));
    assert_eq!(session.score(), 1);
    assert_eq!(session.current_index(), 0);
}

#[tokio::test]
async fn custom_feedback_delay_is_honoured() {
    let service = QuizLoopService::new(Arc::new(InMemoryQuestionSource::with_questions(
        capitals_and_numbers(),
    )))
    .with_feedback_delay(Duration::from_millis(5));
    let mut session = service
        .start_session(&SessionRequest::default())
        .await
        .unwrap();

    let (_, advance) = answer_and_wait(&service, &mut session, "Rome").await;
    assert_eq!(advance, Advance::Next { index: 1 });
    assert_eq!(session.score(), 0);
}

#[tokio::test]
async fn no_questions_response_never_builds_a_session() {
    let source = Arc::new(InMemoryQuestionSource::failing(
        FetchError::NoQuestionsAvailable,
    ));
    let service = QuizLoopService::new(source.clone());
    let request = SessionRequest::new(Category::SPORTS, Difficulty::Hard, 15).unwrap();

    let err = service.start_session(&request).await.unwrap_err();

    assert_eq!(err, QuizServiceError::Fetch(FetchError::NoQuestionsAvailable));
    assert!(err.is_no_questions());
    assert_eq!(source.calls(), 1);
    assert_eq!(source.last_request(), Some(request));
}

#[tokio::test]
async fn network_failure_message_is_passed_through() {
    let service = QuizLoopService::new(Arc::new(InMemoryQuestionSource::failing(
        FetchError::NetworkFailure("connection refused".into()),
    )));

    let err = service
        .start_session(&SessionRequest::default())
        .await
        .unwrap_err();

    assert!(!err.is_no_questions());
    assert_eq!(err.to_string(), "connection refused");
}

#[tokio::test]
async fn normalized_questions_reach_the_session_decoded() {
    let (_, session) = start(InMemoryQuestionSource::with_questions(vec![raw(
        "Who painted &quot;The Starry Night&quot;?",
        "Vincent van Gogh",
        &["Claude Monet", "Pablo Picasso", "Salvador Dal&iacute;"],
    )]))
    .await;

    let question = session.current_question().unwrap();
    assert_eq!(question.prompt(), "Who painted \"The Starry Night\"?");
    assert_eq!(question.answer_choices().len(), 4);
    assert!(
        question
            .answer_choices()
            .iter()
            .any(|choice| choice == "Salvador Dalí")
    );
}
