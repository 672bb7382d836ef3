//! Add section: countdown entry form with presets.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Tabs, Widget};

use crate::state::{preset_label, AppState, Field};
use crate::ui::Theme;

/// Add section.
pub struct AddView;

impl AddView {
    /// Render the countdown entry form.
    pub fn render(area: Rect, buf: &mut Buffer, app_state: &AppState, theme: &Theme) {
        let form = &app_state.add_form;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Presets
                Constraint::Length(3), // Fields
                Constraint::Min(3),    // Messages and keys
            ])
            .split(area);

        let presets: Vec<Line> = form
            .presets()
            .iter()
            .map(|secs| Line::from(preset_label(*secs)))
            .collect();
        let mut preset_tabs = Tabs::new(presets)
            .block(Block::default().borders(Borders::ALL).title("Presets"))
            .style(theme.tab_style)
            .highlight_style(theme.active_tab_style)
            .divider("|");
        if let Some(index) = form.selected_preset() {
            preset_tabs = preset_tabs.select(index);
        }
        preset_tabs.render(chunks[0], buf);

        let field_areas = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(chunks[1]);

        for (field, field_area) in Field::ALL.iter().zip(field_areas.iter()) {
            let style = if *field == form.focus() {
                theme.focused_field_style
            } else {
                theme.field_style
            };
            let text = form.text(*field);
            let shown = if text.is_empty() { "0" } else { text };

            Paragraph::new(Span::styled(shown.to_string(), style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).title(field.title()))
                .render(*field_area, buf);
        }

        let mut lines = Vec::new();
        if let Some(message) = &form.message {
            lines.push(Line::from(Span::styled(message.clone(), theme.error_style)));
        } else {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(vec![
            Span::styled("0-9", theme.key_style),
            Span::styled(" edit  ", theme.help_style),
            Span::styled("↑/↓", theme.key_style),
            Span::styled(" field  ", theme.help_style),
            Span::styled("←/→", theme.key_style),
            Span::styled(" preset  ", theme.help_style),
            Span::styled("enter", theme.key_style),
            Span::styled(" start", theme.help_style),
        ]));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("New countdown"))
            .render(chunks[2], buf);
    }
}
