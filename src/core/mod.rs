//! # Core Application Logic
//!
//! This module contains the reader's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Content (articles)   │
//!                    │  • State (screens)      │
//!                    │  • Quiz (scoring)       │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Pure.           │
//!                    └───────────┬─────────────┘
//!                                │
//!                         ┌──────┴─────┐
//!                         ▼            ▼
//!                  ┌────────────┐ ┌────────────┐
//!                  │    TUI     │ │   Other    │
//!                  │  Adapter   │ │  adapters  │
//!                  │ (ratatui)  │ │            │
//!                  └────────────┘ └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`content`]: Articles, questions, categories and the built-in data set
//! - [`filter`]: Category filtering of the feed
//! - [`format`]: Read / Listen / Watch delivery tabs
//! - [`quiz`]: The `QuizSession` and scoring
//! - [`state`]: The `App` struct and its screen state machine
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`config`]: Config file, env and CLI resolution

pub mod action;
pub mod config;
pub mod content;
pub mod filter;
pub mod format;
pub mod quiz;
pub mod state;
