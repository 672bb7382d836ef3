//! Help overlay showing keyboard shortcuts.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::state::Section;
use crate::ui::Theme;

/// Help overlay showing keyboard shortcuts and usage information.
pub struct HelpView;

impl HelpView {
    /// Render the help overlay
    pub fn render(frame: &mut Frame, area: Rect, theme: &Theme, current: Section) {
        let popup_area = Self::centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let help_block = Block::default()
            .title("Watch Help")
            .borders(Borders::ALL)
            .style(theme.block_style);

        let mut help_text = vec![
            Line::from(Span::styled(
                "Global Shortcuts",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        help_text.extend(Self::shortcuts(&GLOBAL_KEYS, theme));
        help_text.push(Line::from(""));
        help_text.push(Line::from(Span::styled(
            format!("{} Shortcuts", current.title()),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        help_text.push(Line::from(""));
        help_text.extend(Self::shortcuts(section_keys(current), theme));

        let help_widget = Paragraph::new(help_text)
            .block(help_block)
            .style(theme.normal_text)
            .alignment(Alignment::Left);

        frame.render_widget(help_widget, popup_area);
    }

    fn shortcuts<'a>(keys: &[(&'a str, &'a str)], theme: &Theme) -> Vec<Line<'a>> {
        keys.iter()
            .map(|(key, action)| {
                Line::from(vec![
                    Span::styled(*key, theme.key_style),
                    Span::raw(" - "),
                    Span::raw(*action),
                ])
            })
            .collect()
    }

    /// Helper function to create a centered rect using percentages
    fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_width = r.width * percent_x / 100;
        let popup_height = r.height * percent_y / 100;

        Rect {
            x: r.x + (r.width - popup_width) / 2,
            y: r.y + (r.height - popup_height) / 2,
            width: popup_width,
            height: popup_height,
        }
    }
}

const GLOBAL_KEYS: [(&str, &str); 6] = [
    ("q", "Quit"),
    ("?", "Toggle this help screen"),
    ("c / s / t / a", "Clock, stopwatch, timer, add countdown"),
    ("tab / shift-tab", "Next / previous section"),
    ("esc", "Close section"),
    ("ctrl-c", "Quit"),
];

fn section_keys(section: Section) -> &'static [(&'static str, &'static str)] {
    match section {
        Section::Clock => &[("f", "Toggle 12h / 24h"), ("d", "Next date format")],
        Section::Stopwatch => &[
            ("space", "Start / pause / resume"),
            ("l", "Record lap"),
            ("r", "Reset"),
        ],
        Section::Timer => &[
            ("space", "Pause / resume, or new countdown when idle"),
            ("r", "Reset"),
        ],
        Section::Add => &[
            ("0-9", "Edit focused field"),
            ("backspace", "Delete digit"),
            ("up / down", "Move between fields"),
            ("left / right", "Choose preset"),
            ("enter", "Start countdown"),
        ],
    }
}
