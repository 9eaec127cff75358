//! # Application State
//!
//! Core reader state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── content: Arc<ContentStore>    // read-only articles + categories
//! ├── category: String              // feed filter, "all" by default
//! └── screen: Screen                // Feed | Reading(sel) | Quiz(sel)
//!                                   //   sel = article id + QuizSession
//! ```
//!
//! The selection and its quiz session live inside the `Reading` and `Quiz`
//! variants, so "a session exists iff an article is selected" holds by
//! construction.
//!
//! Transitions:
//!
//! ```text
//!   Feed ──select──▶ Reading ──start_quiz──▶ Quiz
//!    ▲                │   ▲                   │ │
//!    └──────back──────┘   └───────back────────┘ │
//!    ▲                                          │
//!    └─────────finish_to_feed (after submit)────┘
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! Transitions that don't apply to the current screen are no-ops.

use log::{debug, warn};
use std::sync::Arc;

use crate::core::content::{ALL_CATEGORY, Article, ArticleId, Category, ContentStore};
use crate::core::filter::filter;
use crate::core::quiz::{QuizError, QuizResults, QuizSession};

/// The selected article and the quiz session that belongs to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub article_id: ArticleId,
    pub session: QuizSession,
}

impl Selection {
    fn fresh(article_id: ArticleId) -> Self {
        Self {
            article_id,
            session: QuizSession::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Screen {
    #[default]
    Feed,
    Reading(Selection),
    Quiz(Selection),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Feed => "feed",
            Screen::Reading(_) => "reading",
            Screen::Quiz(_) => "quiz",
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            Screen::Feed => None,
            Screen::Reading(sel) | Screen::Quiz(sel) => Some(sel),
        }
    }
}

/// Read-only projection of the current screen for a rendering layer.
#[derive(Debug)]
pub enum View<'a> {
    Feed {
        category: &'a str,
        articles: Vec<&'a Article>,
    },
    Reading {
        article: &'a Article,
    },
    Quiz {
        article: &'a Article,
        session: &'a QuizSession,
        results: Option<QuizResults<'a>>,
    },
}

pub struct App {
    content: Arc<ContentStore>,
    category: String,
    screen: Screen,
}

impl App {
    pub fn new(content: Arc<ContentStore>) -> Self {
        Self {
            content,
            category: ALL_CATEGORY.to_string(),
            screen: Screen::Feed,
        }
    }

    /// Start on `category` instead of `all`.
    pub fn with_category(content: Arc<ContentStore>, category: &str) -> Self {
        let mut app = Self::new(content);
        app.select_category(category);
        app
    }

    pub fn categories(&self) -> &[Category] {
        self.content.categories()
    }

    pub fn selected_category(&self) -> &str {
        &self.category
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.screen
            .selection()
            .and_then(|sel| self.content.article(sel.article_id))
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.screen.selection().map(|sel| &sel.session)
    }

    /// Articles visible under the selected category.
    pub fn visible_articles(&self) -> Vec<&Article> {
        filter(self.content.articles(), &self.category)
    }

    /// Score of the open quiz, computable at any time while an article is selected.
    pub fn score(&self) -> Option<usize> {
        let article = self.selected_article()?;
        self.session().map(|s| s.score(&article.quiz))
    }

    pub fn view(&self) -> View<'_> {
        let selected = self
            .screen
            .selection()
            .and_then(|sel| Some((self.content.article(sel.article_id)?, &sel.session)));

        match (&self.screen, selected) {
            (Screen::Reading(_), Some((article, _))) => View::Reading { article },
            (Screen::Quiz(_), Some((article, session))) => View::Quiz {
                article,
                session,
                results: session.results(&article.quiz),
            },
            _ => View::Feed {
                category: &self.category,
                articles: self.visible_articles(),
            },
        }
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Change the feed filter. Allowed on every screen; the selection is untouched.
    pub fn select_category(&mut self, id: &str) {
        if self.content.category(id).is_none() {
            debug!("Selecting unlisted category {:?}; feed will be empty", id);
        }
        self.category = id.to_string();
    }

    /// Open an article with a fresh quiz session, or clear the selection with `None`.
    ///
    /// Re-selecting the article that is already open also starts a new session.
    pub fn select_article(&mut self, id: Option<ArticleId>) {
        match id {
            None => self.screen = Screen::Feed,
            Some(id) if self.content.article(id).is_some() => {
                self.screen = Screen::Reading(Selection::fresh(id));
            }
            Some(id) => warn!("Ignoring selection of unknown article {}", id),
        }
    }

    pub fn start_quiz(&mut self) {
        match std::mem::take(&mut self.screen) {
            Screen::Reading(sel) => self.screen = Screen::Quiz(sel),
            other => {
                warn!("start_quiz ignored on {} screen", other.name());
                self.screen = other;
            }
        }
    }

    /// Quiz → Reading (answers kept), Reading → Feed (session dropped).
    pub fn back(&mut self) {
        self.screen = match std::mem::take(&mut self.screen) {
            Screen::Quiz(sel) => Screen::Reading(sel),
            Screen::Reading(_) => Screen::Feed,
            Screen::Feed => {
                debug!("back ignored on feed screen");
                Screen::Feed
            }
        };
    }

    /// Leave a submitted quiz for the feed.
    pub fn finish_to_feed(&mut self) {
        let submitted =
            matches!(&self.screen, Screen::Quiz(sel) if sel.session.results_revealed());
        if submitted {
            self.screen = Screen::Feed;
        } else {
            warn!(
                "finish_to_feed ignored on {} screen before submission",
                self.screen.name()
            );
        }
    }

    pub fn record_answer(&mut self, question: usize, option: &str) -> Result<(), QuizError> {
        let content = &self.content;
        match &mut self.screen {
            Screen::Quiz(sel) => match content.article(sel.article_id) {
                Some(article) => sel.session.record_answer(&article.quiz, question, option),
                None => Ok(()),
            },
            other => {
                warn!("record_answer ignored on {} screen", other.name());
                Ok(())
            }
        }
    }

    pub fn submit(&mut self) {
        match &mut self.screen {
            Screen::Quiz(sel) => sel.session.submit(),
            other => warn!("submit ignored on {} screen", other.name()),
        }
    }
}
