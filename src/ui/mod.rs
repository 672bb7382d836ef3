//! UI components for the watch.
//!
//! One panel per section sits under a row of section tabs. Key presses are
//! translated into [`UpdateKind`] commands that the application applies to
//! state; edits to the Add form are applied here directly.

pub mod add_view;
pub mod clock_view;
pub mod help;
pub mod stopwatch_view;
pub mod theme;
pub mod timer_view;
pub mod widgets;

pub use add_view::AddView;
pub use clock_view::ClockView;
pub use help::HelpView;
pub use stopwatch_view::StopwatchView;
pub use theme::Theme;
pub use timer_view::TimerView;

use crossterm::event::{KeyCode, KeyEvent};
use eyre::Result;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::state::{AppState, Section, StopwatchStatus, TimerStatus};
use widgets::TabbedView;

/// The result of updating the UI in response to user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    /// Quit the application
    Quit,
    /// Toggle help overlay
    ToggleHelp,
    /// Show a section
    Open(Section),
    /// Close the visible section
    CloseSection,
    NextSection,
    PrevSection,
    /// Switch the clock between 12 and 24 hour display
    ToggleHourFormat,
    NextDateFormat,
    /// Start, pause or resume the stopwatch
    ToggleStopwatch,
    ResetStopwatch,
    Lap,
    /// Pause or resume the timer
    ToggleTimer,
    ResetTimer,
    /// Start a countdown from the Add form
    StartCountdown,
    /// Other update (no action needed)
    Other,
}

/// Main UI controller.
pub struct Ui {
    /// Whether to show help overlay
    show_help: bool,
    /// UI theme
    theme: Theme,
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl Ui {
    /// Create a new UI controller.
    pub fn new() -> Self {
        Self {
            show_help: false,
            theme: Theme::default(),
        }
    }

    /// Toggle help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Handle keyboard input.
    pub fn handle_key_event(&mut self, key: KeyEvent, app_state: &mut AppState) -> Result<UpdateKind> {
        // Help swallows everything but its own toggles
        if self.show_help {
            return Ok(match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') => UpdateKind::ToggleHelp,
                KeyCode::Char('q') => UpdateKind::Quit,
                _ => UpdateKind::Other,
            });
        }

        // Global shortcuts first
        match key.code {
            KeyCode::F(1) | KeyCode::Char('?') => return Ok(UpdateKind::ToggleHelp),
            KeyCode::Char('q') => return Ok(UpdateKind::Quit),
            KeyCode::Char('c') => return Ok(UpdateKind::Open(Section::Clock)),
            KeyCode::Char('s') => return Ok(UpdateKind::Open(Section::Stopwatch)),
            KeyCode::Char('t') => return Ok(UpdateKind::Open(Section::Timer)),
            KeyCode::Char('a') => return Ok(UpdateKind::Open(Section::Add)),
            KeyCode::Tab => return Ok(UpdateKind::NextSection),
            KeyCode::BackTab => return Ok(UpdateKind::PrevSection),
            KeyCode::Esc => return Ok(UpdateKind::CloseSection),
            _ => {}
        }

        // Delegate to section-specific handlers
        match app_state.navigator.active() {
            Section::Clock => Ok(self.handle_clock_input(key)),
            Section::Stopwatch => Ok(self.handle_stopwatch_input(key)),
            Section::Timer => Ok(self.handle_timer_input(key)),
            Section::Add => Ok(self.handle_add_input(key, app_state)),
        }
    }

    /// Render the UI.
    pub fn render(&self, frame: &mut Frame, app_state: &AppState) {
        let area = frame.size();
        if area.height < 2 {
            return;
        }

        let content_area = Rect::new(area.x, area.y, area.width, area.height - 1);
        let status_area = Rect::new(area.x, area.y + area.height - 1, area.width, 1);

        let navigator = &app_state.navigator;
        let titles: Vec<&str> = Section::ALL.iter().map(|s| navigator.label(*s)).collect();
        let theme = &self.theme;

        let view = TabbedView::new(|index: usize, area: Rect, buf: &mut Buffer| {
            Self::render_section(Section::ALL[index], area, buf, app_state, theme)
        })
        .titles(titles)
        .select(navigator.active().index())
        .tab_style(theme.tab_style)
        .selected_tab_style(theme.active_tab_style);

        frame.render_widget(view, content_area);

        // Help sits on top of the section
        if self.show_help {
            HelpView::render(frame, content_area, theme, navigator.active());
        }

        self.render_status_line(frame, status_area, app_state);
    }

    fn render_section(section: Section, area: Rect, buf: &mut Buffer, app_state: &AppState, theme: &Theme) {
        match section {
            Section::Clock => ClockView::render(area, buf, app_state, theme),
            Section::Stopwatch => StopwatchView::render(area, buf, app_state, theme),
            Section::Timer => TimerView::render(area, buf, app_state, theme),
            Section::Add => AddView::render(area, buf, app_state, theme),
        }
    }

    // Private methods for input handling

    fn handle_clock_input(&mut self, key: KeyEvent) -> UpdateKind {
        match key.code {
            KeyCode::Char('f') => UpdateKind::ToggleHourFormat,
            KeyCode::Char('d') => UpdateKind::NextDateFormat,
            _ => UpdateKind::Other,
        }
    }

    fn handle_stopwatch_input(&mut self, key: KeyEvent) -> UpdateKind {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => UpdateKind::ToggleStopwatch,
            KeyCode::Char('r') => UpdateKind::ResetStopwatch,
            KeyCode::Char('l') => UpdateKind::Lap,
            _ => UpdateKind::Other,
        }
    }

    fn handle_timer_input(&mut self, key: KeyEvent) -> UpdateKind {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => UpdateKind::ToggleTimer,
            KeyCode::Char('r') => UpdateKind::ResetTimer,
            _ => UpdateKind::Other,
        }
    }

    fn handle_add_input(&mut self, key: KeyEvent, app_state: &mut AppState) -> UpdateKind {
        let form = &mut app_state.add_form;
        match key.code {
            KeyCode::Enter => return UpdateKind::StartCountdown,
            KeyCode::Char(c) if c.is_ascii_digit() => form.push_char(c),
            KeyCode::Backspace => form.backspace(),
            KeyCode::Up => form.focus_prev(),
            KeyCode::Down => form.focus_next(),
            KeyCode::Left => form.prev_preset(),
            KeyCode::Right => form.next_preset(),
            _ => {}
        }
        UpdateKind::Other
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect, app_state: &AppState) {
        let stopwatch = match app_state.stopwatch.status() {
            StopwatchStatus::Idle => "idle".to_string(),
            _ => format!(
                "{} {}",
                app_state.stopwatch.elapsed(),
                app_state.stopwatch.status().as_str()
            ),
        };
        let timer = match app_state.timer.status() {
            TimerStatus::Idle => "idle".to_string(),
            status => format!("{} {}", app_state.timer.remaining(), status.as_str()),
        };

        let status_text = format!(
            "{} | SW {} | TM {} | ? help",
            app_state.clock.readout(),
            stopwatch,
            timer
        );

        let status_style = match app_state.timer.status() {
            TimerStatus::Expired => self.theme.expired_style,
            TimerStatus::Running => self.theme.running_style,
            _ => self.theme.help_style,
        };

        let status_widget = Paragraph::new(status_text)
            .style(status_style)
            .block(Block::default());

        frame.render_widget(status_widget, area);
    }
}
