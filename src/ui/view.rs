//! Visual descriptions produced by components.
//!
//! Components describe what they look like as plain values instead of
//! drawing directly, so hosts and tests can inspect the output without
//! standing up a rendering surface.

use ratatui::style::Color;

/// A renderable visual description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// A static text label over a plain-colored background.
    Text { label: String, background: Color },
}
