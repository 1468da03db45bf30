//! Application layer: input routing, keypad model, theming and rendering.

pub mod calculator;
pub mod keymap;
pub mod keypad;
mod render;
pub mod settings;
pub mod theme;

pub use calculator::{CalculatorApp, EventResult};
pub use keymap::KeyCommand;
pub use theme::UiTheme;
