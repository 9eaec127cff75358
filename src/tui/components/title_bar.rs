//! # TitleBar Component
//!
//! Top line showing the app name, the active screen and a transient status
//! message (e.g. "Audio versions are not available yet").
//!
//! TitleBar is purely presentational: it receives all data as props and has
//! no internal state.
//!
//! The title text changes based on state:
//!
//! 1. **Status message**: `"News Brief · Quiz | Score: 1 / 2"`
//! 2. **Default**: `"News Brief · Quiz"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Top status bar component.
pub struct TitleBar<'a> {
    /// Screen label (e.g. "Feed", "Article", "Quiz")
    pub screen_label: &'a str,
    /// Status message; empty string hides it
    pub status_message: &'a str,
}

impl<'a> TitleBar<'a> {
    pub fn new(screen_label: &'a str, status_message: &'a str) -> Self {
        Self {
            screen_label,
            status_message,
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled(
                "News Brief",
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" · {}", self.screen_label),
                Style::default().fg(Color::DarkGray),
            ),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::Yellow),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(screen: &str, status: &str) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 1)).unwrap();
        terminal
            .draw(|f| TitleBar::new(screen, status).render(f, f.area()))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_title_bar_with_status_message() {
        let text = render("Quiz", "Score: 1 / 2");
        assert!(text.contains("News Brief"));
        assert!(text.contains("Quiz"));
        assert!(text.contains("| Score: 1 / 2"));
    }

    #[test]
    fn test_title_bar_default_no_status() {
        let text = render("Feed", "");
        assert!(text.contains("News Brief"));
        assert!(text.contains("Feed"));
        assert!(!text.contains('|'));
    }
}
