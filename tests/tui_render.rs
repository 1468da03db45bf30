#![cfg(feature = "tui")]

//! End-to-end checks through ratatui's TestBackend: what the user would see
//! on screen, and that mouse clicks land on the right keypad buttons.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use zcalc::app::{CalculatorApp, EventResult};
use zcalc::core::event::InputEvent;

fn draw(app: &mut CalculatorApp, terminal: &mut Terminal<TestBackend>) -> Vec<String> {
    terminal.draw(|frame| app.render(frame)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let mut rows = Vec::new();
    for y in 0..buffer.area.height {
        let mut row = String::with_capacity(width);
        for x in 0..buffer.area.width {
            row.push_str(buffer[(x, y)].symbol());
        }
        rows.push(row);
    }
    rows
}

fn type_key(app: &mut CalculatorApp, code: KeyCode) {
    app.handle_input(&InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE)));
}

fn click(app: &mut CalculatorApp, column: u16, row: u16) -> EventResult {
    app.handle_input(&InputEvent::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }))
}

fn button_center(app: &CalculatorApp, label: &str) -> (u16, u16) {
    let (rect, _) = app
        .keypad()
        .placed()
        .iter()
        .find(|(_, b)| b.label == label)
        .copied()
        .unwrap_or_else(|| panic!("button {label:?} not placed"));
    (rect.x + rect.width / 2, rect.y + rect.height / 2)
}

#[test]
fn typed_value_appears_right_aligned() {
    let mut terminal = Terminal::new(TestBackend::new(44, 20)).unwrap();
    let mut app = CalculatorApp::new();
    type_key(&mut app, KeyCode::Char('1'));
    type_key(&mut app, KeyCode::Char('2'));

    let rows = draw(&mut app, &mut terminal);
    let value_row = rows
        .iter()
        .find(|row| row.contains("12"))
        .expect("display value not rendered");
    // Right-aligned inside the bordered display block.
    let after = &value_row[value_row.find("12").unwrap() + 2..];
    assert!(after.trim_start_matches(' ').starts_with('│') || after.trim().is_empty());
}

#[test]
fn pending_operation_shows_indicator_line() {
    let mut terminal = Terminal::new(TestBackend::new(44, 20)).unwrap();
    let mut app = CalculatorApp::new();
    type_key(&mut app, KeyCode::Char('5'));
    type_key(&mut app, KeyCode::Char('+'));

    let rows = draw(&mut app, &mut terminal);
    assert!(
        rows.iter().any(|row| row.contains("5 +")),
        "running-total indicator missing"
    );
}

#[test]
fn keypad_labels_are_all_visible() {
    let mut terminal = Terminal::new(TestBackend::new(44, 20)).unwrap();
    let mut app = CalculatorApp::new();
    let rows = draw(&mut app, &mut terminal);
    let screen = rows.join("\n");
    for label in ["Clear", "÷", "×", "+", "-", "=", "7", "0", "."] {
        assert!(screen.contains(label), "missing keypad label {label:?}");
    }
}

#[test]
fn clicking_buttons_drives_the_engine() {
    let mut terminal = Terminal::new(TestBackend::new(44, 20)).unwrap();
    let mut app = CalculatorApp::new();
    draw(&mut app, &mut terminal);

    for label in ["7", "×", "8", "="] {
        let (x, y) = button_center(&app, label);
        assert_eq!(click(&mut app, x, y), EventResult::Consumed, "click {label}");
        draw(&mut app, &mut terminal);
    }
    assert_eq!(app.state().display, "56");

    let (x, y) = button_center(&app, "Clear");
    click(&mut app, x, y);
    assert_eq!(app.state().display, "0");
}

#[test]
fn divide_by_zero_shows_error_marker() {
    let mut terminal = Terminal::new(TestBackend::new(44, 20)).unwrap();
    let mut app = CalculatorApp::new();
    for code in ['7', '/', '0'] {
        type_key(&mut app, KeyCode::Char(code));
    }
    type_key(&mut app, KeyCode::Enter);

    let rows = draw(&mut app, &mut terminal);
    assert!(app.state().has_error);
    assert!(rows.iter().any(|row| row.contains("Error")));
}
