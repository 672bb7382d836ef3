//! Clock face: analog dial plus digital readout and date.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::state::{AppState, HourFormat};
use crate::ui::widgets::Dial;
use crate::ui::Theme;

/// Clock section.
pub struct ClockView;

impl ClockView {
    /// Render the clock section.
    pub fn render(area: Rect, buf: &mut Buffer, app_state: &AppState, theme: &Theme) {
        let chunks = split_dial(area);
        let hands = app_state.clock.hands();

        Dial::new()
            .block(Block::default().borders(Borders::ALL).title("Clock"))
            .face_color(theme.dial_face)
            .hand(hands.hour, 0.5, theme.hour_hand)
            .hand(hands.minute, 0.8, theme.minute_hand)
            .hand(hands.second, 0.9, theme.second_hand)
            .render(chunks[0], buf);

        let format = match app_state.clock.format() {
            HourFormat::Twelve => "12h",
            HourFormat::TwentyFour => "24h",
        };

        let date_preset = app_state
            .clock
            .date_formats()
            .iter()
            .position(|f| f == app_state.clock.date_format())
            .map_or_else(|| "-".to_string(), |index| (index + 1).to_string());

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(app_state.clock.readout(), theme.readout_style)),
            Line::from(""),
            Line::from(Span::styled(app_state.clock.date_line(), theme.label_style)),
            Line::from(""),
            Line::from(vec![
                Span::styled("f", theme.key_style),
                Span::styled(format!(" format ({})", format), theme.help_style),
            ]),
            Line::from(vec![
                Span::styled("d", theme.key_style),
                Span::styled(
                    format!(" date ({}/{})", date_preset, app_state.clock.date_formats().len()),
                    theme.help_style,
                ),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Time"))
            .render(chunks[1], buf);
    }
}

/// Split a panel into a dial on the left and text on the right. Narrow
/// terminals stack them instead.
pub(crate) fn split_dial(area: Rect) -> std::rc::Rc<[Rect]> {
    let (direction, constraints) = if area.width >= 60 {
        (
            Direction::Horizontal,
            [Constraint::Percentage(50), Constraint::Percentage(50)],
        )
    } else {
        (
            Direction::Vertical,
            [Constraint::Percentage(60), Constraint::Percentage(40)],
        )
    };

    Layout::default()
        .direction(direction)
        .constraints(constraints)
        .split(area)
}
