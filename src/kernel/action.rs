use crate::kernel::state::Operation;

/// Input events the engine understands. Produced by the keymap, the keypad
/// and the paste handler; consumed by [`crate::kernel::Store::dispatch`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A digit press, `0..=9`.
    Digit(u8),
    Decimal,
    Operator(Operation),
    Evaluate,
    Clear,
    Backspace,
    /// Copy the display string to the system clipboard.
    CopyDisplay,
}
