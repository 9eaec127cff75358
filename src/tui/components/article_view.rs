//! # Article View
//!
//! Full text of the selected article with a "Take Quiz" prompt underneath.
//! The text scrolls when it doesn't fit; the offset is clamped at render
//! time because the wrapped height depends on the terminal width.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::content::Article;
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

const PAGE: u16 = 10;

#[derive(Debug, Default)]
pub struct ReadingState {
    pub scroll: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadingEvent {
    TakeQuiz,
    Back,
}

impl ReadingState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for ReadingState {
    type Event = ReadingEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ReadingEvent> {
        match event {
            TuiEvent::CursorUp => self.scroll = self.scroll.saturating_sub(1),
            TuiEvent::CursorDown => self.scroll = self.scroll.saturating_add(1),
            TuiEvent::ScrollPageUp => self.scroll = self.scroll.saturating_sub(PAGE),
            TuiEvent::ScrollPageDown => self.scroll = self.scroll.saturating_add(PAGE),
            TuiEvent::Submit => return Some(ReadingEvent::TakeQuiz),
            TuiEvent::Escape | TuiEvent::Backspace => return Some(ReadingEvent::Back),
            _ => {}
        }
        None
    }
}

pub struct ArticleView<'a> {
    state: &'a mut ReadingState,
    article: &'a Article,
}

impl<'a> ArticleView<'a> {
    pub fn new(state: &'a mut ReadingState, article: &'a Article) -> Self {
        Self { state, article }
    }
}

impl Component for ArticleView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [text_area, button_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(3)]).areas(area);

        let lines = vec![
            Line::from(Span::styled(
                format!("{} · {}", self.article.read_time, self.article.category),
                Style::default().fg(Color::DarkGray),
            )),
            Line::default(),
            Line::from(self.article.full_text.as_str()),
        ];
        let paragraph = Paragraph::new(lines)
            .block(
                Block::bordered()
                    .title(Span::styled(
                        format!(" {} ", self.article.title),
                        Style::default().add_modifier(Modifier::BOLD),
                    ))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: true });

        let total = u16::try_from(paragraph.line_count(text_area.width)).unwrap_or(u16::MAX);
        let max_scroll = total.saturating_sub(text_area.height);
        self.state.scroll = self.state.scroll.min(max_scroll);

        frame.render_widget(paragraph.scroll((self.state.scroll, 0)), text_area);

        let button = Paragraph::new(Line::from(vec![
            Span::styled(
                " Take Quiz ",
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  Enter", Style::default().fg(Color::DarkGray)),
        ]))
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
        frame.render_widget(button, button_area);
    }
}
