//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use crate::core::content::ContentStore;
use crate::core::state::App;

/// Creates a test App over the built-in sample content.
pub fn test_app() -> App {
    App::new(Arc::new(ContentStore::sample()))
}

/// Collects every cell symbol of a rendered buffer into one string.
pub fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect()
}
