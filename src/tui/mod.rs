//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm Event → TuiEvent → component state (FeedState, QuizState, ...)
//!                                  │
//!                                  ▼ component event
//!                             core::Action → update(app) → Effect
//! ```
//!
//! Global keys (quit, category cycling) are handled before the active
//! screen's component sees the event.
//!
//! ## Redraw Strategy
//!
//! Nothing animates, so the loop sleeps up to 250ms per poll and only draws
//! after an event (including terminal resize). All pending events are
//! drained before the next draw.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::{self, stdout};
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::{App, Screen};
use crate::tui::component::EventHandler;
use crate::tui::components::{
    FeedEvent, FeedState, QuizEvent, QuizState, ReadingEvent, ReadingState, cycle_category,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(250);

/// TUI-specific presentation state (not part of core business logic)
#[derive(Debug, Default)]
pub struct TuiState {
    pub feed: FeedState,
    pub reading: ReadingState,
    pub quiz: QuizState,
    /// Shown in the title bar until the next key press.
    pub status_message: String,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy the props component states depend on from the core.
    pub fn sync(&mut self, app: &App) {
        self.feed
            .sync(app.visible_articles().iter().map(|a| a.id).collect());
        if let Some(article) = app.selected_article() {
            self.quiz.sync(&article.quiz);
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> io::Result<Self> {
        execute!(stdout(), Hide)?;
        info!("Terminal modes enabled (hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), Show);
    }
}

/// Route one event through global keys and then the active screen.
pub fn handle_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    if matches!(event, TuiEvent::Resize) {
        return Effect::None;
    }
    tui.status_message.clear();
    tui.sync(app);

    match event {
        TuiEvent::ForceQuit | TuiEvent::InputChar('q') => return update(app, Action::Quit),
        TuiEvent::NextCategory | TuiEvent::PrevCategory => {
            let step = if matches!(event, TuiEvent::NextCategory) { 1 } else { -1 };
            let next = cycle_category(app.categories(), app.selected_category(), step)
                .map(str::to_string);
            return match next {
                Some(id) => update(app, Action::SelectCategory(id)),
                None => Effect::None,
            };
        }
        _ => {}
    }

    if matches!(app.screen(), Screen::Feed) {
        handle_feed_event(app, tui, event)
    } else if matches!(app.screen(), Screen::Reading(_)) {
        handle_reading_event(app, tui, event)
    } else {
        handle_quiz_event(app, tui, event)
    }
}

fn handle_feed_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match tui.feed.handle_event(event) {
        Some(FeedEvent::Open(id)) => {
            tui.reading = ReadingState::new();
            tui.quiz.reset();
            update(app, Action::SelectArticle(Some(id)))
        }
        Some(FeedEvent::Unavailable(format)) => {
            debug!("Inert {:?} tab activated", format);
            tui.status_message = format!("{} versions are not available yet", format.medium());
            Effect::None
        }
        None => Effect::None,
    }
}

fn handle_reading_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match tui.reading.handle_event(event) {
        Some(ReadingEvent::TakeQuiz) => update(app, Action::StartQuiz),
        Some(ReadingEvent::Back) => update(app, Action::Back),
        None => Effect::None,
    }
}

fn handle_quiz_event(app: &mut App, tui: &mut TuiState, event: &TuiEvent) -> Effect {
    match tui.quiz.handle_event(event) {
        Some(QuizEvent::Choose { question, option }) => {
            let chosen = app
                .selected_article()
                .and_then(|a| a.quiz.get(question))
                .and_then(|q| q.options.get(option))
                .cloned();
            match chosen {
                Some(option) => update(app, Action::RecordAnswer { question, option }),
                None => {
                    warn!("No option {} for question {}", option, question);
                    Effect::None
                }
            }
        }
        Some(QuizEvent::Submit) => {
            let effect = update(app, Action::Submit);
            if let (Some(score), Some(article)) = (app.score(), app.selected_article()) {
                info!("Quiz for article {} submitted: {}/{}", article.id, score, article.quiz.len());
                tui.status_message = format!("Score: {} / {}", score, article.quiz.len());
            }
            effect
        }
        Some(QuizEvent::Finish) => update(app, Action::FinishToFeed),
        Some(QuizEvent::Back) => update(app, Action::Back),
        None => Effect::None,
    }
}

pub fn run(app: App) -> io::Result<()> {
    let mut terminal = ratatui::try_init()?;
    let result = match TerminalModeGuard::new() {
        Ok(_guard) => event_loop(&mut terminal, app),
        Err(e) => {
            warn!("Failed to set terminal modes: {}", e);
            event_loop(&mut terminal, app)
        }
    };
    ratatui::restore();
    result
}

fn event_loop(terminal: &mut DefaultTerminal, mut app: App) -> io::Result<()> {
    let mut tui = TuiState::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            tui.sync(&app);
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let mut pending = poll_event_timeout(IDLE_POLL)?;
        if pending.is_some() {
            needs_redraw = true;
        }

        // Drain ALL pending events before next draw
        while let Some(event) = pending {
            if handle_event(&mut app, &mut tui, &event) == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            pending = poll_event_immediate()?;
        }
    }
}
