//! Button grid model. The layout mirrors the classic keypad: Clear spans two
//! columns, `=` spans two rows, `0` spans two columns.

use ratatui::layout::Rect;

use crate::kernel::{Action, Operation};

pub const GRID_COLS: u16 = 4;
pub const GRID_ROWS: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    Digit,
    Operator,
    Equals,
    Clear,
}

#[derive(Debug, Clone, Copy)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub kind: ButtonKind,
    pub action: Action,
    col: u16,
    row: u16,
    col_span: u16,
    row_span: u16,
}

const fn digit(label: &'static str, d: u8, col: u16, row: u16) -> ButtonSpec {
    ButtonSpec {
        label,
        kind: ButtonKind::Digit,
        action: Action::Digit(d),
        col,
        row,
        col_span: 1,
        row_span: 1,
    }
}

const fn operator(label: &'static str, op: Operation, col: u16, row: u16) -> ButtonSpec {
    ButtonSpec {
        label,
        kind: ButtonKind::Operator,
        action: Action::Operator(op),
        col,
        row,
        col_span: 1,
        row_span: 1,
    }
}

pub const BUTTONS: [ButtonSpec; 17] = [
    ButtonSpec {
        label: "Clear",
        kind: ButtonKind::Clear,
        action: Action::Clear,
        col: 0,
        row: 0,
        col_span: 2,
        row_span: 1,
    },
    operator("÷", Operation::Divide, 2, 0),
    operator("×", Operation::Multiply, 3, 0),
    digit("7", 7, 0, 1),
    digit("8", 8, 1, 1),
    digit("9", 9, 2, 1),
    operator("-", Operation::Subtract, 3, 1),
    digit("4", 4, 0, 2),
    digit("5", 5, 1, 2),
    digit("6", 6, 2, 2),
    operator("+", Operation::Add, 3, 2),
    digit("1", 1, 0, 3),
    digit("2", 2, 1, 3),
    digit("3", 3, 2, 3),
    ButtonSpec {
        label: "=",
        kind: ButtonKind::Equals,
        action: Action::Evaluate,
        col: 3,
        row: 3,
        col_span: 1,
        row_span: 2,
    },
    ButtonSpec {
        label: "0",
        kind: ButtonKind::Digit,
        action: Action::Digit(0),
        col: 0,
        row: 4,
        col_span: 2,
        row_span: 1,
    },
    ButtonSpec {
        label: ".",
        kind: ButtonKind::Digit,
        action: Action::Decimal,
        col: 2,
        row: 4,
        col_span: 1,
        row_span: 1,
    },
];

/// Keypad geometry for the most recent render, used for mouse hit testing.
#[derive(Debug, Default)]
pub struct Keypad {
    placed: Vec<(Rect, &'static ButtonSpec)>,
}

impl Keypad {
    /// Recompute button rectangles for `area`. Spans share the proportional
    /// column/row edges, so adjacent buttons never overlap or leave gaps.
    pub fn place(&mut self, area: Rect) {
        self.placed.clear();
        if area.width < GRID_COLS || area.height < GRID_ROWS {
            return;
        }

        let col_edge = |i: u16| area.x + (u32::from(area.width) * u32::from(i) / u32::from(GRID_COLS)) as u16;
        let row_edge = |i: u16| area.y + (u32::from(area.height) * u32::from(i) / u32::from(GRID_ROWS)) as u16;

        for button in &BUTTONS {
            let x = col_edge(button.col);
            let y = row_edge(button.row);
            let rect = Rect {
                x,
                y,
                width: col_edge(button.col + button.col_span) - x,
                height: row_edge(button.row + button.row_span) - y,
            };
            self.placed.push((rect, button));
        }
    }

    pub fn placed(&self) -> &[(Rect, &'static ButtonSpec)] {
        &self.placed
    }

    pub fn hit_test(&self, x: u16, y: u16) -> Option<&'static ButtonSpec> {
        self.placed
            .iter()
            .find(|(rect, _)| {
                x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
            })
            .map(|(_, button)| *button)
    }
}
