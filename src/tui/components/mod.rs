//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as parameters:
//! - `TitleBar`: App name, active screen, status message
//! - `CategoryBar`: Category pills with the selected one highlighted
//! - `HelpBar`: Key hints for the active screen
//!
//! ### Stateful Components (Event-Driven)
//!
//! A persistent `*State` lives in `TuiState` and turns `TuiEvent`s into
//! component events; a transient wrapper borrows it each frame to render:
//! - `FeedState` / `Feed`: Article cards with per-card delivery tabs
//! - `ReadingState` / `ArticleView`: Full text of the open article
//! - `QuizState` / `QuizView`: Questions, outcomes and score
//!
//! Components receive core data as props and never call into `core::App`.
//! The event loop maps component events to `core::Action`s.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status line)
//! ├── category_bar.rs  (Category filter row)
//! ├── feed.rs          (Article cards)
//! ├── article_view.rs  (Reading screen)
//! ├── quiz_view.rs     (Quiz screen)
//! ├── help_bar.rs      (Key hints)
//! └── scroll.rs        (Shared scroll bookkeeping)
//! ```

pub mod article_view;
pub mod category_bar;
pub mod feed;
pub mod help_bar;
pub mod quiz_view;
pub mod scroll;
mod title_bar;

pub use article_view::{ArticleView, ReadingEvent, ReadingState};
pub use category_bar::{CategoryBar, cycle_category};
pub use feed::{Feed, FeedEvent, FeedState};
pub use help_bar::HelpBar;
pub use quiz_view::{QuizEvent, QuizState, QuizView};
pub use title_bar::TitleBar;
