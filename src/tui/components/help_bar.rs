//! # Help Bar
//!
//! Bottom line listing the keys that do something on the current screen.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use crate::core::state::Screen;
use crate::tui::component::Component;

pub struct HelpBar<'a> {
    pub screen: &'a Screen,
}

impl<'a> HelpBar<'a> {
    pub fn new(screen: &'a Screen) -> Self {
        Self { screen }
    }
}

/// Key bindings for a screen, as (keys, description) pairs.
pub fn key_bindings(screen: &Screen) -> Vec<(&'static str, &'static str)> {
    let mut bindings = match screen {
        Screen::Feed => vec![
            ("↑/↓", "Move"),
            ("←/→", "Format"),
            ("Enter", "Open"),
        ],
        Screen::Reading(_) => vec![
            ("↑/↓", "Scroll"),
            ("Enter", "Take quiz"),
            ("Esc", "Back to news"),
        ],
        Screen::Quiz(sel) if sel.session.results_revealed() => vec![
            ("↑/↓", "Move"),
            ("Enter", "Choose"),
            ("f", "Back to feed"),
            ("Esc", "Back to article"),
        ],
        Screen::Quiz(_) => vec![
            ("↑/↓", "Move"),
            ("Enter", "Choose"),
            ("s", "Submit"),
            ("Esc", "Back to article"),
        ],
    };
    bindings.push(("Tab", "Category"));
    bindings.push(("q", "Quit"));
    bindings
}

impl Component for HelpBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (keys, description) in key_bindings(self.screen) {
            spans.push(Span::styled(keys, Style::default().fg(Color::Cyan)));
            spans.push(Span::styled(
                format!(" {description}  "),
                Style::default().fg(Color::DarkGray),
            ));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
