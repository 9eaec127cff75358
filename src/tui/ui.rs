use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};

use crate::core::state::{App, View};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ArticleView, CategoryBar, Feed, HelpBar, QuizView, TitleBar,
};

/// Draw one frame.
///
/// ```text
/// ┌ title bar ────────────────┐  1 line
/// │ category bar              │  1 line
/// │                           │
/// │ feed | article | quiz     │  rest
/// │                           │
/// └ help bar ─────────────────┘  1 line
/// ```
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [title_area, category_area, main_area, help_area] =
        Layout::vertical([Length(1), Length(1), Min(0), Length(1)]).areas(frame.area());

    let view = app.view();

    let screen_label = match &view {
        View::Feed { .. } => "Feed",
        View::Reading { .. } => "Article",
        View::Quiz { .. } => "Quiz",
    };
    TitleBar::new(screen_label, &tui.status_message).render(frame, title_area);
    CategoryBar::new(app.categories(), app.selected_category()).render(frame, category_area);

    match view {
        View::Feed { articles, .. } => {
            Feed::new(&mut tui.feed, &articles).render(frame, main_area);
        }
        View::Reading { article } => {
            ArticleView::new(&mut tui.reading, article).render(frame, main_area);
        }
        View::Quiz {
            article,
            session,
            results,
        } => {
            QuizView::new(&mut tui.quiz, article, session, results.as_ref())
                .render(frame, main_area);
        }
    }

    HelpBar::new(app.screen()).render(frame, help_area);
}
