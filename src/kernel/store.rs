use super::{Action, CalcState, Effect};

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(state_changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed,
        }
    }
}

/// Owns the calculator state; the only mutation path is [`Store::dispatch`].
pub struct Store {
    state: CalcState,
}

impl Store {
    pub fn new(state: CalcState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CalcState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::Digit(d) => DispatchResult::changed(self.state.enter_digit(d)),
            Action::Decimal => DispatchResult::changed(self.state.enter_decimal()),
            Action::Operator(op) => DispatchResult::changed(self.state.enter_operation(op)),
            Action::Evaluate => DispatchResult::changed(self.state.evaluate()),
            Action::Clear => DispatchResult::changed(self.state.clear()),
            Action::Backspace => DispatchResult::changed(self.state.backspace()),
            Action::CopyDisplay => DispatchResult {
                effects: vec![Effect::SetClipboardText(self.state.display.clone())],
                state_changed: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::Operation;

    #[test]
    fn copy_display_emits_clipboard_effect_without_state_change() {
        let mut store = Store::new(CalcState::new());
        store.dispatch(Action::Digit(4));
        store.dispatch(Action::Digit(2));

        let result = store.dispatch(Action::CopyDisplay);
        assert!(!result.state_changed);
        assert_eq!(
            result.effects,
            vec![Effect::SetClipboardText("42".to_string())]
        );
    }

    #[test]
    fn arithmetic_actions_report_state_changes() {
        let mut store = Store::new(CalcState::new());
        assert!(store.dispatch(Action::Digit(2)).state_changed);
        assert!(store.dispatch(Action::Operator(Operation::Add)).state_changed);
        assert!(store.dispatch(Action::Digit(3)).state_changed);
        assert!(store.dispatch(Action::Evaluate).state_changed);
        assert_eq!(store.state().display, "5");
        // Evaluate with nothing pending is a no-op.
        assert!(!store.dispatch(Action::Evaluate).state_changed);
    }
}
