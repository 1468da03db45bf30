//! Pure transitions over [`CalcState`]. Each method returns whether the
//! state actually changed, which is what drives redraws upstream.

use super::state::{format_value, CalcError, CalcState, Operation, ERROR_MARKER};

impl CalcState {
    pub fn enter_digit(&mut self, digit: u8) -> bool {
        debug_assert!(digit <= 9);
        let digit = char::from(b'0' + digit.min(9));

        if self.has_error {
            self.display.clear();
            self.display.push(digit);
            self.has_error = false;
            true
        } else if self.waiting_for_new_value {
            self.display.clear();
            self.display.push(digit);
            self.waiting_for_new_value = false;
            true
        } else if self.display == "0" {
            // Replace a lone leading zero instead of concatenating.
            if digit == '0' {
                return false;
            }
            self.display.clear();
            self.display.push(digit);
            true
        } else {
            self.display.push(digit);
            true
        }
    }

    pub fn enter_decimal(&mut self) -> bool {
        if self.has_error {
            self.display.clear();
            self.display.push_str("0.");
            self.has_error = false;
            true
        } else if self.waiting_for_new_value {
            self.display.clear();
            self.display.push_str("0.");
            self.waiting_for_new_value = false;
            true
        } else if self.display.contains('.') {
            // Idempotent: a second point is a no-op.
            false
        } else {
            self.display.push('.');
            true
        }
    }

    pub fn enter_operation(&mut self, op: Operation) -> bool {
        if self.has_error {
            return false;
        }

        let current = self.current_operand();
        match self.pending() {
            None => {
                self.previous_value = Some(current);
            }
            // Chaining: evaluate the pending operation left-to-right before
            // recording the new operator.
            Some((previous, pending_op)) => match pending_op.apply(previous, current) {
                Ok(result) => {
                    self.previous_value = Some(result);
                    self.display = format_value(result);
                }
                Err(CalcError::DivideByZero) => {
                    self.enter_error_state();
                    return true;
                }
            },
        }

        self.operation = Some(op);
        self.waiting_for_new_value = true;
        true
    }

    pub fn evaluate(&mut self) -> bool {
        if self.has_error {
            return false;
        }
        let Some((previous, op)) = self.pending() else {
            return false;
        };

        match op.apply(previous, self.current_operand()) {
            Ok(result) => {
                self.display = format_value(result);
                self.previous_value = None;
                self.operation = None;
                // A following digit starts fresh; a following operator chains
                // from the shown result.
                self.waiting_for_new_value = true;
            }
            Err(CalcError::DivideByZero) => {
                self.enter_error_state();
            }
        }
        true
    }

    pub fn clear(&mut self) -> bool {
        let defaults = CalcState::default();
        if *self == defaults {
            return false;
        }
        *self = defaults;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if !self.has_error && self.display.chars().count() > 1 {
            self.display.pop();
            true
        } else if self.display != "0" {
            // Never truncate the error marker; fall back to a bare zero.
            // The error flag itself is only cleared by digit/decimal/clear.
            self.display = "0".to_string();
            true
        } else {
            false
        }
    }

    /// Divide-by-zero leaves the pending pair untouched so the state can be
    /// inspected, but shows the marker and suppresses further evaluation.
    fn enter_error_state(&mut self) {
        self.has_error = true;
        self.display = ERROR_MARKER.to_string();
        self.waiting_for_new_value = false;
    }
}
