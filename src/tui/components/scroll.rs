//! # Scroll Region
//!
//! Scroll bookkeeping shared by the feed and the quiz: both render a stack
//! of variable-height blocks into a `ScrollView` and keep the focused block
//! on screen.
//!
//! Heights are measured during render (they depend on the terminal width),
//! so `scroll_to` works with whatever the previous frame measured.
//!
//! Offsets and heights are `usize`: a large content file can stack more rows
//! than a `u16` buffer holds. Only the blocks overlapping the viewport are
//! drawn into the `ScrollView` canvas, and the scrollbar is drawn separately
//! against the full height.

use std::ops::Range;

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

#[derive(Debug, Default)]
pub struct ScrollRegion {
    /// Height of each block, in render order.
    pub heights: Vec<usize>,
    pub viewport_height: usize,
    offset: usize,
}

impl ScrollRegion {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_height(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Top row of block `idx` within the full stack.
    pub fn top_of(&self, idx: usize) -> usize {
        self.heights.iter().take(idx).sum()
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// Clamp the offset so the view never scrolls past the last block.
    pub fn clamp(&mut self) {
        let max_y = self.total_height().saturating_sub(self.viewport_height);
        self.offset = self.offset.min(max_y);
    }

    /// Scroll so block `idx` is fully visible.
    /// If the block is taller than the viewport, align its top edge.
    pub fn scroll_to(&mut self, idx: usize) {
        if idx >= self.heights.len() {
            return;
        }
        let top = self.top_of(idx);
        let bottom = top + self.heights[idx];

        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset + self.viewport_height {
            self.offset = bottom.saturating_sub(self.viewport_height).min(top);
        }
    }

    /// Indices of the blocks overlapping the viewport.
    pub fn visible_range(&self) -> Range<usize> {
        let bottom = self.offset + self.viewport_height;
        let mut start = None;
        let mut top = 0;
        for (i, &height) in self.heights.iter().enumerate() {
            if top >= bottom {
                return start.unwrap_or(i)..i;
            }
            if start.is_none() && top + height > self.offset {
                start = Some(i);
            }
            top += height;
        }
        let len = self.heights.len();
        start.unwrap_or(len)..len
    }

    /// Measure `blocks` at the width of `area`, clamp, and draw the visible
    /// ones. The rightmost column is left for the scrollbar.
    pub fn render_blocks(&mut self, frame: &mut Frame, area: Rect, blocks: Vec<Paragraph<'_>>) {
        let content_width = area.width.saturating_sub(1);
        self.heights = blocks.iter().map(|b| b.line_count(content_width)).collect();
        self.viewport_height = usize::from(area.height);
        self.clamp();

        let window = self.visible_range();
        if window.is_empty() {
            return;
        }
        let window_top = self.top_of(window.start);
        let window_height: usize = self.heights[window.clone()].iter().sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, saturate(window_height)))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Never)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y = 0;
        let visible = blocks
            .into_iter()
            .zip(self.heights.iter())
            .skip(window.start)
            .take(window.len());
        for (block, &height) in visible {
            scroll_view.render_widget(
                block,
                Rect::new(0, saturate(y), content_width, saturate(height)),
            );
            y += height;
        }

        let mut view_state = ScrollViewState::default();
        view_state.set_offset(Position {
            x: 0,
            y: saturate(self.offset - window_top),
        });
        frame.render_stateful_widget(scroll_view, area, &mut view_state);

        self.render_scrollbar(frame, area);
    }

    fn render_scrollbar(&self, frame: &mut Frame, area: Rect) {
        let max_scroll = self.total_height().saturating_sub(self.viewport_height);
        if max_scroll == 0 || area.width == 0 {
            return;
        }

        // content_length is the max scrollable position, not the row count
        let mut scrollbar_state = ScrollbarState::default()
            .content_length(max_scroll)
            .position(self.offset);

        let scrollbar_area = Rect {
            x: area.x + area.width - 1,
            y: area.y,
            width: 1,
            height: area.height,
        };

        frame.render_stateful_widget(
            Scrollbar::new(ScrollbarOrientation::VerticalRight),
            scrollbar_area,
            &mut scrollbar_state,
        );
    }
}

/// Row counts past `u16::MAX` don't fit a ratatui `Rect`.
fn saturate(rows: usize) -> u16 {
    u16::try_from(rows).unwrap_or(u16::MAX)
}
