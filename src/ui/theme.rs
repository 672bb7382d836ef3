//! UI theme definition.

use ratatui::style::{Color, Modifier, Style};

/// Theme for the application UI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Basic styles
    pub normal_text: Style,
    pub block_style: Style,
    pub label_style: Style,
    pub value_style: Style,
    pub readout_style: Style,

    // Status styles
    pub error_style: Style,
    pub help_style: Style,
    pub key_style: Style,

    // Section tabs
    pub tab_style: Style,
    pub active_tab_style: Style,

    // Countdown and stopwatch states
    pub idle_style: Style,
    pub running_style: Style,
    pub paused_style: Style,
    pub expired_style: Style,

    // Form
    pub field_style: Style,
    pub focused_field_style: Style,

    // Dial
    pub dial_face: Color,
    pub hour_hand: Color,
    pub minute_hand: Color,
    pub second_hand: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            // Basic styles
            normal_text: Style::default().fg(Color::White),
            block_style: Style::default(),
            label_style: Style::default().fg(Color::Gray),
            value_style: Style::default().fg(Color::White),
            readout_style: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),

            // Status styles
            error_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            help_style: Style::default().fg(Color::Gray),
            key_style: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),

            // Section tabs
            tab_style: Style::default().fg(Color::Gray),
            active_tab_style: Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),

            // Countdown and stopwatch states
            idle_style: Style::default().fg(Color::Gray),
            running_style: Style::default().fg(Color::Green),
            paused_style: Style::default().fg(Color::Yellow),
            expired_style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),

            // Form
            field_style: Style::default().fg(Color::White),
            focused_field_style: Style::default().fg(Color::Black).bg(Color::Cyan),

            // Dial
            dial_face: Color::DarkGray,
            hour_hand: Color::White,
            minute_hand: Color::Cyan,
            second_hand: Color::Red,
        }
    }
}
