//! Terminal integration (crossterm + ratatui). Kept apart from `kernel` so
//! the calculator core stays free of terminal crates.

pub mod osc52;
pub mod terminal_guard;
