//! UI theme: the configurable colors in one place instead of scattered
//! through the render code.

use ratatui::style::Color;

use super::settings::ThemeSettings;

#[derive(Debug, Clone)]
pub struct UiTheme {
    pub border: Color,
    pub display_fg: Color,
    pub error_fg: Color,
    pub indicator_fg: Color,
    pub digit_fg: Color,
    pub operator_fg: Color,
    pub operator_active_fg: Color,
    pub equals_fg: Color,
    pub clear_fg: Color,
    pub help_fg: Color,
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(8),    // DarkGray
            display_fg: Color::Reset,
            error_fg: Color::Indexed(9),  // Red
            indicator_fg: Color::Indexed(8),
            digit_fg: Color::Reset,
            operator_fg: Color::Indexed(4),       // Blue
            operator_active_fg: Color::Indexed(12), // BrightBlue
            equals_fg: Color::Indexed(2),  // Green
            clear_fg: Color::Indexed(1),   // Red
            help_fg: Color::Indexed(8),
        }
    }
}

impl UiTheme {
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        let slots: [(&Option<String>, &mut Color); 10] = [
            (&settings.border, &mut self.border),
            (&settings.display, &mut self.display_fg),
            (&settings.error, &mut self.error_fg),
            (&settings.indicator, &mut self.indicator_fg),
            (&settings.digit, &mut self.digit_fg),
            (&settings.operator, &mut self.operator_fg),
            (&settings.operator_active, &mut self.operator_active_fg),
            (&settings.equals, &mut self.equals_fg),
            (&settings.clear, &mut self.clear_fg),
            (&settings.help, &mut self.help_fg),
        ];
        for (value, slot) in slots {
            if let Some(color) = value.as_deref().and_then(parse_color) {
                *slot = color;
            }
        }
    }
}

/// Accepts `#rrggbb`, a 0-255 ANSI index, or a named base color.
pub fn parse_color(value: &str) -> Option<Color> {
    let value = value.trim();
    if let Some(hex) = value.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        return Some(Color::Rgb(r, g, b));
    }
    if let Ok(index) = value.parse::<u8>() {
        return Some(Color::Indexed(index));
    }

    match value.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        _ => None,
    }
}
