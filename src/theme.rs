//! Decorated output glyphs and layout helpers

use colored::Colorize;

pub const PREFIX: &str = "⚡";
pub const BULLET: &str = "➤";
pub const SUCCESS: &str = "✓";
pub const ERROR: &str = "✖";
pub const PROMPT: &str = "❯";
pub const STAR: &str = "★";
pub const CIRCUIT: &str = "◎";
pub const KEY: &str = "⚿";
pub const DISK: &str = "💾";
pub const TERMINAL: &str = "🖥️";
pub const ROCKET: &str = "🚀";

const DEFAULT_DIVIDER_WIDTH: usize = 50;
const MAX_DIVIDER_WIDTH: usize = 80;

/// A horizontal divider sized to the terminal, capped for very wide windows.
pub fn divider() -> String {
    let width = terminal_size::terminal_size()
        .map(|(w, _)| (w.0 as usize).min(MAX_DIVIDER_WIDTH))
        .unwrap_or(DEFAULT_DIVIDER_WIDTH);
    "═".repeat(width).cyan().to_string()
}

pub fn success(glyph: &str) -> String {
    glyph.green().to_string()
}

pub fn error(glyph: &str) -> String {
    glyph.red().to_string()
}

pub fn accent(glyph: &str) -> String {
    glyph.cyan().to_string()
}
