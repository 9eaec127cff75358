use std::io::Write;
use std::sync::Arc;

use newsbrief::core::action::{Action, Effect, update};
use newsbrief::core::content::{ContentError, ContentStore};
use newsbrief::core::quiz::QuestionOutcome;
use newsbrief::core::state::{App, Screen, View};

// ============================================================================
// Helper Functions
// ============================================================================

fn sample_app() -> App {
    App::new(Arc::new(ContentStore::sample()))
}

fn answer(question: usize, option: &str) -> Action {
    Action::RecordAnswer {
        question,
        option: option.to_string(),
    }
}

fn run(app: &mut App, actions: Vec<Action>) {
    for action in actions {
        assert_eq!(update(app, action), Effect::None);
    }
}

fn feed_ids(app: &App) -> Vec<u32> {
    match app.view() {
        View::Feed { articles, .. } => articles.iter().map(|a| a.id).collect(),
        other => panic!("expected feed view, got {other:?}"),
    }
}

// ============================================================================
// Reader flows
// ============================================================================

#[test]
fn test_technology_filter_on_sample_set() {
    let mut app = sample_app();
    run(&mut app, vec![Action::SelectCategory("technology".to_string())]);
    assert_eq!(feed_ids(&app), vec![2, 4, 5]);
}

#[test]
fn test_quantum_quiz_scores_one_of_two() {
    let mut app = sample_app();
    run(
        &mut app,
        vec![
            Action::SelectArticle(Some(2)),
            Action::StartQuiz,
            answer(0, "1000"),
            answer(1, "Lower cost"),
            Action::Submit,
        ],
    );

    match app.view() {
        View::Quiz {
            article,
            results: Some(results),
            ..
        } => {
            assert_eq!(article.title, "Breakthrough in Quantum Computing");
            assert_eq!(results.score, 1);
            assert_eq!(results.total, 2);
            assert_eq!(results.outcomes[0], QuestionOutcome::Correct);
            assert_eq!(
                results.outcomes[1],
                QuestionOutcome::Incorrect {
                    correct: "Faster calculations"
                }
            );
        }
        other => panic!("expected revealed quiz, got {other:?}"),
    }
}

#[test]
fn test_empty_submission_scores_zero() {
    let mut app = sample_app();
    run(
        &mut app,
        vec![Action::SelectArticle(Some(1)), Action::StartQuiz, Action::Submit],
    );
    assert_eq!(app.score(), Some(0));
    assert!(app.session().unwrap().results_revealed());
}

#[test]
fn test_select_then_back_returns_to_clean_feed() {
    let mut app = sample_app();
    run(&mut app, vec![Action::SelectArticle(Some(4)), Action::Back]);
    assert_eq!(app.screen(), &Screen::Feed);
    assert!(app.selected_article().is_none());
    assert!(app.session().is_none());
}

#[test]
fn test_reselecting_open_article_clears_answers() {
    let mut app = sample_app();
    run(
        &mut app,
        vec![
            Action::SelectArticle(Some(3)),
            Action::StartQuiz,
            answer(0, "Tackle inflation"),
            Action::Submit,
            Action::SelectArticle(Some(3)),
        ],
    );
    let session = app.session().unwrap();
    assert_eq!(session.answered_count(), 0);
    assert!(!session.results_revealed());
}

#[test]
fn test_perfect_score_then_back_to_feed() {
    let mut app = sample_app();
    run(
        &mut app,
        vec![
            Action::SelectCategory("environment".to_string()),
            Action::SelectArticle(Some(1)),
            Action::StartQuiz,
            answer(0, "195"),
            answer(1, "2050"),
            Action::Submit,
        ],
    );
    assert_eq!(app.score(), Some(2));

    run(&mut app, vec![Action::FinishToFeed]);
    assert_eq!(feed_ids(&app), vec![1]);
}

#[test]
fn test_machine_can_be_reentered_indefinitely() {
    let mut app = sample_app();
    for id in [1, 2, 3, 4, 5, 1] {
        run(
            &mut app,
            vec![
                Action::SelectArticle(Some(id)),
                Action::StartQuiz,
                Action::Back,
                Action::Back,
            ],
        );
        assert_eq!(app.screen(), &Screen::Feed);
    }
    assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
}

// ============================================================================
// Content files
// ============================================================================

#[test]
fn test_app_over_loaded_content() {
    let json = r#"{
        "categories": [
            { "id": "all", "label": "Everything" },
            { "id": "science", "label": "Science" }
        ],
        "articles": [{
            "id": 10,
            "title": "Comet Returns",
            "shortSummary": "Visible next week.",
            "fullText": "The comet will be visible to the naked eye next week.",
            "readTime": "1 min read",
            "category": "science",
            "quiz": [{
                "question": "When is it visible?",
                "options": ["Tonight", "Next week", "Next month", "Next year"],
                "correct": "Next week"
            }]
        }]
    }"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let store = ContentStore::from_json_file(file.path()).unwrap();
    assert_eq!(store.categories()[0].label, "Everything");

    let mut app = App::with_category(Arc::new(store), "science");
    assert_eq!(feed_ids(&app), vec![10]);

    run(
        &mut app,
        vec![
            Action::SelectArticle(Some(10)),
            Action::StartQuiz,
            answer(0, "Next week"),
            Action::Submit,
        ],
    );
    assert_eq!(app.score(), Some(1));
}

#[test]
fn test_invalid_content_file_is_reported() {
    let json = r#"{
        "articles": [{
            "id": 1,
            "title": "Broken",
            "shortSummary": "",
            "fullText": "",
            "readTime": "",
            "category": "technology",
            "quiz": [{
                "question": "?",
                "options": ["a", "b", "c", "d"],
                "correct": "e"
            }]
        }]
    }"#;
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(json.as_bytes()).unwrap();

    let err = ContentStore::from_json_file(file.path()).unwrap_err();
    assert!(matches!(err, ContentError::CorrectNotInOptions { .. }));
}
