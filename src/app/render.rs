use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::kernel::state::format_value;
use crate::kernel::Action;

use super::calculator::CalculatorApp;
use super::keypad::{ButtonKind, ButtonSpec, GRID_ROWS};

const CARD_WIDTH: u16 = 44;
const DISPLAY_HEIGHT: u16 = 4;
const KEYPAD_ROW_HEIGHT: u16 = 3;
const HELP_HEIGHT: u16 = 1;
const HELP_TEXT: &str = "q quit · y copy · esc clear · keys work";

impl CalculatorApp {
    pub fn render(&mut self, frame: &mut Frame) {
        let card = centered_card(frame.area());
        let [display_area, keypad_area, help_area] = Layout::vertical([
            Constraint::Length(DISPLAY_HEIGHT),
            Constraint::Min(GRID_ROWS),
            Constraint::Length(HELP_HEIGHT),
        ])
        .areas(card);

        self.render_display(frame, display_area);
        self.keypad.place(keypad_area);
        self.render_keypad(frame);

        frame.render_widget(
            Paragraph::new(HELP_TEXT)
                .alignment(Alignment::Center)
                .style(Style::new().fg(self.theme.help_fg)),
            help_area,
        );
    }

    fn render_display(&self, frame: &mut Frame, area: Rect) {
        let state = self.store.state();
        let block = Block::bordered()
            .title(" zcalc ")
            .border_style(Style::new().fg(self.theme.border));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Running-total indicator while an operation is pending.
        if inner.height >= 2 {
            let indicator = state
                .pending()
                .map(|(value, op)| format!("{} {}", format_value(value), op.symbol()))
                .unwrap_or_default();
            frame.render_widget(
                Paragraph::new(indicator)
                    .alignment(Alignment::Right)
                    .style(Style::new().fg(self.theme.indicator_fg)),
                Rect { height: 1, ..inner },
            );
        }

        let value_fg = if state.has_error {
            self.theme.error_fg
        } else {
            self.theme.display_fg
        };
        let value_row = Rect {
            y: inner.y + inner.height.min(2) - 1,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(clip_right(&state.display, inner.width as usize))
                .alignment(Alignment::Right)
                .style(Style::new().fg(value_fg).add_modifier(Modifier::BOLD)),
            value_row,
        );
    }

    fn render_keypad(&self, frame: &mut Frame) {
        for &(rect, button) in self.keypad.placed() {
            self.render_button(frame, rect, button);
        }
    }

    fn render_button(&self, frame: &mut Frame, rect: Rect, button: &ButtonSpec) {
        let active = matches!(
            button.action,
            Action::Operator(op) if self.store.state().operation == Some(op)
        );
        let fg = match button.kind {
            ButtonKind::Digit => self.theme.digit_fg,
            ButtonKind::Operator if active => self.theme.operator_active_fg,
            ButtonKind::Operator => self.theme.operator_fg,
            ButtonKind::Equals => self.theme.equals_fg,
            ButtonKind::Clear => self.theme.clear_fg,
        };

        let mut border = Style::new().fg(if active { fg } else { self.theme.border });
        if active {
            border = border.add_modifier(Modifier::BOLD);
        }
        let block = Block::bordered().border_style(border);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let label_row = Rect {
            y: inner.y + (inner.height - 1) / 2,
            height: 1,
            ..inner
        };
        frame.render_widget(
            Paragraph::new(button.label)
                .alignment(Alignment::Center)
                .style(Style::new().fg(fg).add_modifier(Modifier::BOLD)),
            label_row,
        );
    }
}

/// Center the fixed-size card, shrinking to fit small terminals.
fn centered_card(area: Rect) -> Rect {
    let width = area.width.min(CARD_WIDTH);
    let height = area
        .height
        .min(DISPLAY_HEIGHT + GRID_ROWS * KEYPAD_ROW_HEIGHT + HELP_HEIGHT);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Keep the rightmost characters that fit, so long values lose their head
/// rather than their tail.
fn clip_right(text: &str, max_width: usize) -> &str {
    let mut width = 0;
    let mut start = text.len();
    for (idx, ch) in text.char_indices().rev() {
        width += ch.width().unwrap_or(0);
        if width > max_width {
            break;
        }
        start = idx;
    }
    &text[start..]
}
