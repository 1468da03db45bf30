//! Pure keyboard-to-action lookup. The input surface can change freely
//! without touching the reducer.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::core::event::Key;
use crate::kernel::{Action, Operation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Calc(Action),
    Quit,
}

pub fn lookup(key: Key) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(KeyCommand::Quit),
        KeyCode::Char('y') => Some(KeyCommand::Calc(Action::CopyDisplay)),
        KeyCode::Char(ch) => char_action(ch).map(KeyCommand::Calc),
        KeyCode::Enter => Some(KeyCommand::Calc(Action::Evaluate)),
        KeyCode::Esc | KeyCode::Delete => Some(KeyCommand::Calc(Action::Clear)),
        KeyCode::Backspace => Some(KeyCommand::Calc(Action::Backspace)),
        _ => None,
    }
}

/// The calculator subset of the keymap, also used for pasted text. `x` and
/// the typographic `×`/`÷` are accepted alongside `*` and `/`.
pub fn char_action(ch: char) -> Option<Action> {
    match ch {
        '0'..='9' => Some(Action::Digit(ch as u8 - b'0')),
        '.' => Some(Action::Decimal),
        '+' => Some(Action::Operator(Operation::Add)),
        '-' => Some(Action::Operator(Operation::Subtract)),
        '*' | 'x' | '×' => Some(Action::Operator(Operation::Multiply)),
        '/' | '÷' => Some(Action::Operator(Operation::Divide)),
        '=' => Some(Action::Evaluate),
        _ => None,
    }
}
