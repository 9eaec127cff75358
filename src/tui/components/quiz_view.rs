//! # Quiz View
//!
//! All questions of the open article stacked vertically, one block each,
//! followed by a footer block: the submit button before submission, the
//! score and a way back to the feed after it.
//!
//! The cursor walks the options of every question as one flat list, so
//! ↑/↓ crosses question boundaries. Choosing an option only emits an event;
//! the core decides whether the answer is recorded.
//!
//! After submission each question shows its own outcome line. Answers can
//! still be changed and the score follows them.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};

use crate::core::content::{Article, Question};
use crate::core::quiz::{QuestionOutcome, QuizResults, QuizSession};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::scroll::ScrollRegion;
use crate::tui::event::TuiEvent;

/// Persistent cursor + scroll state for the quiz screen.
#[derive(Debug, Default)]
pub struct QuizState {
    pub question: usize,
    pub option: usize,
    /// Option count per question, synced from the open article.
    pub option_counts: Vec<usize>,
    pub scroll: ScrollRegion,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizEvent {
    Choose { question: usize, option: usize },
    Submit,
    Finish,
    Back,
}

impl QuizState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the cursor at the first option of the first question.
    pub fn reset(&mut self) {
        self.question = 0;
        self.option = 0;
        self.scroll.reset();
    }

    pub fn sync(&mut self, quiz: &[Question]) {
        self.option_counts = quiz.iter().map(|q| q.options.len()).collect();
        if self.question >= self.option_counts.len() {
            self.question = 0;
            self.option = 0;
        }
    }

    fn move_down(&mut self) {
        let Some(&count) = self.option_counts.get(self.question) else {
            return;
        };
        if self.option + 1 < count {
            self.option += 1;
        } else if self.question + 1 < self.option_counts.len() {
            self.question += 1;
            self.option = 0;
        }
    }

    fn move_up(&mut self) {
        if self.option > 0 {
            self.option -= 1;
        } else if self.question > 0 {
            self.question -= 1;
            self.option = self.option_counts[self.question].saturating_sub(1);
        }
    }
}

impl EventHandler for QuizState {
    type Event = QuizEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<QuizEvent> {
        match event {
            TuiEvent::CursorDown => {
                self.move_down();
                self.scroll.scroll_to(self.question);
                None
            }
            TuiEvent::CursorUp => {
                self.move_up();
                self.scroll.scroll_to(self.question);
                None
            }
            TuiEvent::Submit | TuiEvent::InputChar(' ') => {
                if self.option_counts.get(self.question).is_some() {
                    Some(QuizEvent::Choose {
                        question: self.question,
                        option: self.option,
                    })
                } else {
                    None
                }
            }
            TuiEvent::InputChar('s') => Some(QuizEvent::Submit),
            TuiEvent::InputChar('f') => Some(QuizEvent::Finish),
            TuiEvent::Escape | TuiEvent::Backspace => Some(QuizEvent::Back),
            _ => None,
        }
    }
}

/// Transient render wrapper for the quiz screen.
pub struct QuizView<'a> {
    state: &'a mut QuizState,
    article: &'a Article,
    session: &'a QuizSession,
    results: Option<&'a QuizResults<'a>>,
}

impl<'a> QuizView<'a> {
    pub fn new(
        state: &'a mut QuizState,
        article: &'a Article,
        session: &'a QuizSession,
        results: Option<&'a QuizResults<'a>>,
    ) -> Self {
        Self {
            state,
            article,
            session,
            results,
        }
    }

    fn question_block(&self, index: usize, question: &'a Question) -> Paragraph<'a> {
        let answer = self.session.answer(index);
        let mut lines = vec![Line::from(Span::styled(
            format!("{}. {}", index + 1, question.question),
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        for (i, option) in question.options.iter().enumerate() {
            let chosen = answer == Some(option.as_str());
            let under_cursor = self.state.question == index && self.state.option == i;

            let marker = if chosen { "(•)" } else { "( )" };
            let pointer = if under_cursor { "› " } else { "  " };
            let mut style = if chosen {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            if under_cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::raw(pointer),
                Span::styled(format!("{marker} {option}"), style),
            ]));
        }

        if let Some(outcome) = self.results.and_then(|r| r.outcomes.get(index)) {
            lines.push(outcome_line(outcome));
        }

        Paragraph::new(lines)
            .block(
                Block::bordered()
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::horizontal(1)),
            )
            .wrap(Wrap { trim: false })
    }

    fn footer(&self) -> Paragraph<'a> {
        let lines = match self.results {
            None => vec![Line::from(vec![
                Span::styled(
                    " Submit Answers ",
                    Style::default()
                        .fg(Color::White)
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!(
                        "  s   {} of {} answered",
                        self.session.answered_count(),
                        self.article.quiz.len()
                    ),
                    Style::default().fg(Color::DarkGray),
                ),
            ])],
            Some(results) => vec![
                Line::from(Span::styled(
                    format!("Your Score: {} / {}", results.score, results.total),
                    Style::default().add_modifier(Modifier::BOLD),
                ))
                .centered(),
                Line::from(Span::styled(
                    "f  Back to News Feed",
                    Style::default().fg(Color::Blue),
                ))
                .centered(),
            ],
        };
        Paragraph::new(lines).block(Block::bordered().title(" Quick Quiz "))
    }
}

fn outcome_line(outcome: &QuestionOutcome<'_>) -> Line<'static> {
    match outcome {
        QuestionOutcome::Correct => Line::from(Span::styled(
            "✓ Correct!",
            Style::default().fg(Color::Green),
        )),
        QuestionOutcome::Incorrect { correct } | QuestionOutcome::Unanswered { correct } => {
            Line::from(Span::styled(
                format!("✗ Incorrect. Correct answer: {correct}"),
                Style::default().fg(Color::Red),
            ))
        }
    }
}

impl Component for QuizView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut blocks: Vec<Paragraph> = self
            .article
            .quiz
            .iter()
            .enumerate()
            .map(|(i, q)| self.question_block(i, q))
            .collect();
        blocks.push(self.footer());

        self.state.scroll.render_blocks(frame, area, blocks);
    }
}
