//! # Feed Component
//!
//! The filtered article list. Each article is a bordered card:
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │2 min read · Environment                      │
//! │Global Climate Summit Reaches Historic ...    │
//! │195 countries agree to accelerate ...         │
//! │                                              │
//! │ Read  Listen  Watch                          │
//! │Read full story ›                             │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `FeedState` lives in `TuiState` (focus, per-card tabs, scroll)
//! - `Feed` is created each frame with borrowed state and article props
//!
//! Each card keeps its own delivery tab; switching category doesn't reset them.

use std::collections::HashMap;

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::core::content::{Article, ArticleId};
use crate::core::format::DeliveryFormat;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::scroll::ScrollRegion;
use crate::tui::event::TuiEvent;

/// Persistent state for the feed.
#[derive(Debug, Default)]
pub struct FeedState {
    /// Index into `visible` of the focused card.
    pub selected: usize,
    /// Ids of the cards currently shown, synced from the core every frame.
    pub visible: Vec<ArticleId>,
    pub formats: HashMap<ArticleId, DeliveryFormat>,
    pub scroll: ScrollRegion,
}

/// Events emitted by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedEvent {
    Open(ArticleId),
    /// A Listen/Watch tab was activated.
    Unavailable(DeliveryFormat),
}

impl FeedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible ids. Focus returns to the top when the list changes.
    pub fn sync(&mut self, visible: Vec<ArticleId>) {
        if visible != self.visible {
            self.visible = visible;
            self.selected = 0;
            self.scroll.reset();
        }
    }

    pub fn selected_id(&self) -> Option<ArticleId> {
        self.visible.get(self.selected).copied()
    }

    pub fn format_of(&self, id: ArticleId) -> DeliveryFormat {
        self.formats.get(&id).copied().unwrap_or_default()
    }

    fn set_format(&mut self, f: impl Fn(DeliveryFormat) -> DeliveryFormat) {
        if let Some(id) = self.selected_id() {
            let next = f(self.format_of(id));
            self.formats.insert(id, next);
        }
    }
}

impl EventHandler for FeedState {
    type Event = FeedEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<FeedEvent> {
        match event {
            TuiEvent::CursorUp => {
                self.selected = self.selected.saturating_sub(1);
                self.scroll.scroll_to(self.selected);
                None
            }
            TuiEvent::CursorDown => {
                if !self.visible.is_empty() {
                    self.selected = (self.selected + 1).min(self.visible.len() - 1);
                    self.scroll.scroll_to(self.selected);
                }
                None
            }
            TuiEvent::CursorRight => {
                self.set_format(DeliveryFormat::next);
                None
            }
            TuiEvent::CursorLeft => {
                self.set_format(DeliveryFormat::prev);
                None
            }
            TuiEvent::Submit => {
                let id = self.selected_id()?;
                let format = self.format_of(id);
                if format.opens_article() {
                    Some(FeedEvent::Open(id))
                } else {
                    Some(FeedEvent::Unavailable(format))
                }
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the feed.
pub struct Feed<'a> {
    state: &'a mut FeedState,
    articles: &'a [&'a Article],
}

impl<'a> Feed<'a> {
    pub fn new(state: &'a mut FeedState, articles: &'a [&'a Article]) -> Self {
        Self { state, articles }
    }
}

impl Component for Feed<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if self.articles.is_empty() {
            let empty = Paragraph::new("No stories in this category.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            self.state.scroll.heights.clear();
            return;
        }

        let cards: Vec<Paragraph> = self
            .articles
            .iter()
            .enumerate()
            .map(|(i, article)| {
                card(
                    article,
                    self.state.format_of(article.id),
                    i == self.state.selected,
                )
            })
            .collect();

        self.state.scroll.render_blocks(frame, area, cards);
    }
}

fn card(article: &Article, format: DeliveryFormat, focused: bool) -> Paragraph<'_> {
    let mut tabs = Vec::with_capacity(DeliveryFormat::ALL.len() * 2);
    for f in DeliveryFormat::ALL {
        let style = if f == format {
            Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        tabs.push(Span::styled(format!(" {} ", f.label()), style));
        tabs.push(Span::raw(" "));
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(article.read_time.as_str(), Style::default().fg(Color::DarkGray)),
            Span::styled(" · ", Style::default().fg(Color::DarkGray)),
            Span::styled(capitalize(&article.category), Style::default().fg(Color::Blue)),
        ]),
        Line::from(Span::styled(
            article.title.as_str(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            article.short_summary.as_str(),
            Style::default().fg(Color::Gray),
        )),
        Line::default(),
        Line::from(tabs),
        Line::from(Span::styled(
            format!("{} ›", format.call_to_action()),
            Style::default().fg(Color::Blue),
        )),
    ];

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    Paragraph::new(lines)
        .block(Block::bordered().border_style(border_style))
        .wrap(Wrap { trim: true })
}

/// "technology" → "Technology"
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
