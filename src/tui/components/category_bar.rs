//! # Category Bar
//!
//! One line of category pills under the title. Visible on every screen, the
//! same way the filter row stays on top while reading.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::content::Category;
use crate::tui::component::Component;

pub struct CategoryBar<'a> {
    pub categories: &'a [Category],
    pub selected: &'a str,
}

impl<'a> CategoryBar<'a> {
    pub fn new(categories: &'a [Category], selected: &'a str) -> Self {
        Self {
            categories,
            selected,
        }
    }
}

impl Component for CategoryBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::with_capacity(self.categories.len() * 2);
        for category in self.categories {
            let style = if category.id == self.selected {
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" {} ", category.label), style));
            spans.push(Span::raw(" "));
        }
        frame.render_widget(Line::from(spans), area);
    }
}

/// Category id `step` places away from `current`, wrapping around.
///
/// An unlisted current id (e.g. passed on the command line) restarts from
/// the first category.
pub fn cycle_category<'a>(categories: &'a [Category], current: &str, step: isize) -> Option<&'a str> {
    if categories.is_empty() {
        return None;
    }
    let len = categories.len() as isize;
    let next = match categories.iter().position(|c| c.id == current) {
        Some(pos) => (pos as isize + step).rem_euclid(len),
        None => 0,
    };
    Some(categories[next as usize].id.as_str())
}
