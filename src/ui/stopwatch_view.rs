//! Stopwatch section: sweeping second hand, readout and laps.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Widget};

use crate::state::{hand_angle, AppState, StopwatchStatus, TimeValue, SEXAGESIMAL};
use crate::ui::clock_view::split_dial;
use crate::ui::widgets::Dial;
use crate::ui::Theme;

/// Stopwatch section.
pub struct StopwatchView;

impl StopwatchView {
    /// Render the stopwatch section.
    pub fn render(area: Rect, buf: &mut Buffer, app_state: &AppState, theme: &Theme) {
        let stopwatch = &app_state.stopwatch;
        let elapsed = stopwatch.elapsed();
        let chunks = split_dial(area);

        Dial::new()
            .block(Block::default().borders(Borders::ALL).title("Stopwatch"))
            .face_color(theme.dial_face)
            .hand(hand_angle(elapsed.minutes as f64, SEXAGESIMAL as f64), 0.6, theme.minute_hand)
            .hand(hand_angle(elapsed.seconds, SEXAGESIMAL as f64), 0.9, theme.second_hand)
            .render(chunks[0], buf);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(3)])
            .split(chunks[1]);

        let status_style = status_style(stopwatch.status(), theme);
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(format_elapsed(&elapsed), theme.readout_style)),
            Line::from(""),
            Line::from(Span::styled(stopwatch.status().as_str().to_uppercase(), status_style)),
            Line::from(vec![
                Span::styled("space", theme.key_style),
                Span::styled(" start/pause  ", theme.help_style),
                Span::styled("l", theme.key_style),
                Span::styled(" lap  ", theme.help_style),
                Span::styled("r", theme.key_style),
                Span::styled(" reset", theme.help_style),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Elapsed"))
            .render(right[0], buf);

        let laps: Vec<ListItem> = stopwatch
            .laps()
            .iter()
            .enumerate()
            .rev()
            .map(|(index, lap)| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("Lap {:>2}  ", index + 1), theme.label_style),
                    Span::styled(format_elapsed(lap), theme.value_style),
                ]))
            })
            .collect();

        List::new(laps)
            .block(Block::default().borders(Borders::ALL).title("Laps"))
            .render(right[1], buf);
    }
}

/// `HH:MM:SS.cc`
pub fn format_elapsed(value: &TimeValue) -> String {
    format!("{}.{:02}", value, value.centiseconds())
}

fn status_style(status: StopwatchStatus, theme: &Theme) -> Style {
    match status {
        StopwatchStatus::Idle => theme.idle_style,
        StopwatchStatus::Running => theme.running_style,
        StopwatchStatus::Paused => theme.paused_style,
    }
}
