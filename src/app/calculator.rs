use crossterm::event::{KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};

use crate::core::event::{InputEvent, Key};
use crate::kernel::{Action, CalcState, Effect, Store};

use super::keymap::{self, KeyCommand};
use super::keypad::Keypad;
use super::settings;
use super::theme::UiTheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

/// The running application: store, theme and keypad geometry, plus the
/// effects queued by the most recent dispatches.
pub struct CalculatorApp {
    pub(super) store: Store,
    pub(super) theme: UiTheme,
    pub(super) keypad: Keypad,
    pending_effects: Vec<Effect>,
}

impl CalculatorApp {
    pub fn new() -> Self {
        let mut theme = UiTheme::default();
        if !cfg!(test) {
            let _ = settings::ensure_settings_file();
            if let Some(settings) = settings::load_settings() {
                theme.apply_settings(&settings.theme);
            }
        }

        Self {
            store: Store::new(CalcState::new()),
            theme,
            keypad: Keypad::default(),
            pending_effects: Vec::new(),
        }
    }

    pub fn state(&self) -> &CalcState {
        self.store.state()
    }

    /// Keypad geometry from the most recent render.
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    pub fn take_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.pending_effects)
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Paste(text) => self.handle_paste(text),
            InputEvent::Resize(_, _) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> EventResult {
        if key.kind == KeyEventKind::Release {
            return EventResult::Ignored;
        }
        match keymap::lookup(Key::from(*key)) {
            Some(KeyCommand::Quit) => EventResult::Quit,
            Some(KeyCommand::Calc(action)) => self.dispatch(action),
            None => EventResult::Ignored,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(button) = self.keypad.hit_test(mouse.column, mouse.row) {
                tracing::debug!(label = button.label, "keypad click");
                return self.dispatch(button.action);
            }
        }
        EventResult::Ignored
    }

    /// Feed pasted text through the calculator subset of the keymap, so
    /// pasting `12.5` types it digit by digit.
    fn handle_paste(&mut self, text: &str) -> EventResult {
        let mut changed = false;
        for action in text.chars().filter_map(keymap::char_action) {
            if let EventResult::Consumed = self.dispatch(action) {
                changed = true;
            }
        }
        if changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }

    fn dispatch(&mut self, action: Action) -> EventResult {
        let result = self.store.dispatch(action);
        self.pending_effects.extend(result.effects);
        if result.state_changed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}
