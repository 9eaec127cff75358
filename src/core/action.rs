//! # Actions
//!
//! Everything that can happen in the reader becomes an `Action`.
//! User picks a category? That's `Action::SelectCategory(id)`.
//! User chooses an option? That's `Action::RecordAnswer { .. }`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` telling the adapter whether anything beyond redraw is needed.
//! No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State (+ Effect)
//! ```
//!
//! Every action is logged, so a session can be replayed from the log.

use log::{debug, warn};

use crate::core::content::ArticleId;
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SelectCategory(String),
    /// `None` clears the selection and returns to the feed.
    SelectArticle(Option<ArticleId>),
    StartQuiz,
    Back,
    RecordAnswer { question: usize, option: String },
    Submit,
    FinishToFeed,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("Action on {} screen: {:?}", app.screen().name(), action);
    match action {
        Action::SelectCategory(id) => app.select_category(&id),
        Action::SelectArticle(id) => app.select_article(id),
        Action::StartQuiz => app.start_quiz(),
        Action::Back => app.back(),
        Action::RecordAnswer { question, option } => {
            if let Err(e) = app.record_answer(question, &option) {
                warn!("Answer rejected: {}", e);
            }
        }
        Action::Submit => app.submit(),
        Action::FinishToFeed => app.finish_to_feed(),
        Action::Quit => return Effect::Quit,
    }
    Effect::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::Screen;
    use crate::test_support::test_app;

    fn answer(question: usize, option: &str) -> Action {
        Action::RecordAnswer {
            question,
            option: option.to_string(),
        }
    }

    #[test]
    fn test_quit_is_the_only_quitting_action() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
        assert_eq!(update(&mut app, Action::Back), Effect::None);
        assert_eq!(update(&mut app, Action::Submit), Effect::None);
    }

    #[test]
    fn test_full_quiz_flow() {
        let mut app = test_app();
        update(&mut app, Action::SelectCategory("technology".to_string()));
        update(&mut app, Action::SelectArticle(Some(2)));
        update(&mut app, Action::StartQuiz);
        update(&mut app, answer(0, "1000"));
        update(&mut app, answer(1, "Lower cost"));
        update(&mut app, Action::Submit);

        assert_eq!(app.score(), Some(1));

        update(&mut app, Action::FinishToFeed);
        assert_eq!(app.screen(), &Screen::Feed);
        assert_eq!(app.selected_category(), "technology");
    }

    #[test]
    fn test_rejected_answer_leaves_session_alone() {
        let mut app = test_app();
        update(&mut app, Action::SelectArticle(Some(1)));
        update(&mut app, Action::StartQuiz);
        update(&mut app, answer(0, "195"));
        update(&mut app, answer(0, "not an option"));
        update(&mut app, answer(9, "195"));

        let session = app.session().unwrap();
        assert_eq!(session.answer(0), Some("195"));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_record_answer_twice_is_idempotent() {
        let mut app = test_app();
        update(&mut app, Action::SelectArticle(Some(5)));
        update(&mut app, Action::StartQuiz);
        update(&mut app, answer(1, "Garden"));
        let after_first = app.session().cloned();
        update(&mut app, answer(1, "Garden"));
        assert_eq!(app.session().cloned(), after_first);
    }

    #[test]
    fn test_select_none_returns_to_feed() {
        let mut app = test_app();
        update(&mut app, Action::SelectArticle(Some(3)));
        update(&mut app, Action::SelectArticle(None));
        assert_eq!(app.screen(), &Screen::Feed);
    }
}
