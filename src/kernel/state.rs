/// Marker shown in `display` while the engine is in the error state.
pub const ERROR_MARKER: &str = "Error";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "×",
            Operation::Divide => "÷",
        }
    }

    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        match self {
            Operation::Add => Ok(a + b),
            Operation::Subtract => Ok(a - b),
            Operation::Multiply => Ok(a * b),
            Operation::Divide => {
                if b == 0.0 {
                    Err(CalcError::DivideByZero)
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalcError {
    DivideByZero,
}

impl std::fmt::Display for CalcError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalcError::DivideByZero => write!(f, "division by zero"),
        }
    }
}

impl std::error::Error for CalcError {}

/// The whole calculator state. Mutated only through [`crate::kernel::Store`].
#[derive(Debug, Clone, PartialEq)]
pub struct CalcState {
    /// Current operand as typed. Kept as a string so in-progress decimal
    /// entry like `"3."` survives a redraw.
    pub display: String,
    /// Left-hand operand of the pending operation, if any.
    pub previous_value: Option<f64>,
    pub operation: Option<Operation>,
    /// Set after an operator or equals; the next digit starts a fresh operand.
    pub waiting_for_new_value: bool,
    pub has_error: bool,
}

impl Default for CalcState {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            previous_value: None,
            operation: None,
            waiting_for_new_value: false,
            has_error: false,
        }
    }
}

impl CalcState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The operand currently shown. The display invariant guarantees a valid
    /// literal outside the error state; every mutating path checks
    /// `has_error` before calling this.
    pub fn current_operand(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// The pending `(left operand, operation)` pair, when one exists.
    pub fn pending(&self) -> Option<(f64, Operation)> {
        match (self.previous_value, self.operation) {
            (Some(value), Some(op)) => Some((value, op)),
            _ => None,
        }
    }
}

/// Shortest round-trip formatting, so `4.0` shows as `"4"` and `2.5` as `"2.5"`.
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}
