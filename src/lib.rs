//! zcalc - keypad calculator for the terminal
//!
//! Module structure:
//! - kernel: headless calculator engine (CalcState, Action, Effect, Store)
//! - core: input event types shared by the app layer
//! - app: keymap, keypad, theme, settings and rendering
//! - tui: terminal guard and OSC52 clipboard integration
//! - logging: tracing to a rolling log file

pub mod kernel;
pub mod logging;

#[cfg(feature = "tui")]
pub mod app;
#[cfg(feature = "tui")]
pub mod core;
#[cfg(feature = "tui")]
pub mod tui;
