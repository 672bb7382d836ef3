//! Timer section: countdown dial, readout and eased fill bar.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::state::{hand_angle, AppState, TimerStatus, SEXAGESIMAL};
use crate::ui::clock_view::split_dial;
use crate::ui::widgets::{Dial, ProgressBar};
use crate::ui::Theme;

/// Timer section.
pub struct TimerView;

impl TimerView {
    /// Render the timer section.
    pub fn render(area: Rect, buf: &mut Buffer, app_state: &AppState, theme: &Theme) {
        let timer = &app_state.timer;
        let remaining = timer.remaining();
        let chunks = split_dial(area);

        Dial::new()
            .block(Block::default().borders(Borders::ALL).title("Timer"))
            .face_color(theme.dial_face)
            .hand(hand_angle(remaining.minutes as f64, SEXAGESIMAL as f64), 0.6, theme.minute_hand)
            .hand(hand_angle(remaining.whole_seconds() as f64, SEXAGESIMAL as f64), 0.9, theme.second_hand)
            .render(chunks[0], buf);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(7), Constraint::Length(3)])
            .split(chunks[1]);

        let status = timer.status();
        // Blink the banner a few times a second once time is up.
        let banner = if status == TimerStatus::Expired {
            if (app_state.animation_frame / 8) % 2 == 0 {
                Span::styled("TIME'S UP", theme.expired_style)
            } else {
                Span::raw("")
            }
        } else {
            Span::styled(status.as_str().to_uppercase(), status_style(status, theme))
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(remaining.to_string(), theme.readout_style)),
            Line::from(Span::styled(
                format!("of {}", timer.total()),
                theme.label_style,
            )),
            Line::from(banner),
            Line::from(vec![
                Span::styled("space", theme.key_style),
                Span::styled(" pause/resume  ", theme.help_style),
                Span::styled("r", theme.key_style),
                Span::styled(" reset  ", theme.help_style),
                Span::styled("a", theme.key_style),
                Span::styled(" new", theme.help_style),
            ]),
        ];

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Remaining"))
            .render(right[0], buf);

        let fill = timer.display_fill();
        ProgressBar::new(fill)
            .block(Block::default().borders(Borders::ALL))
            .style(status_style(status, theme))
            .empty_style(Style::default().fg(theme.dial_face))
            // Only a running countdown shades by remaining time
            .dynamic_style(status == TimerStatus::Running)
            .label(format!("{:3.0}%", fill * 100.0))
            .render(right[1], buf);
    }
}

fn status_style(status: TimerStatus, theme: &Theme) -> Style {
    match status {
        TimerStatus::Idle => theme.idle_style,
        TimerStatus::Running => theme.running_style,
        TimerStatus::Paused => theme.paused_style,
        TimerStatus::Expired => theme.expired_style,
    }
}
