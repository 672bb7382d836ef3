//! Application state and logic.
//!
//! Owns the watch state, the UI controller and the sound output, and runs
//! the draw / event / tick loop. Each refresh tick measures the time since
//! the previous one and feeds it to every component.

use std::time::Instant;

use chrono::{Local, NaiveDateTime};
use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use futures::{Stream, StreamExt};
use ratatui::backend::Backend;
use ratatui::Terminal;
use tracing::{debug, info};

use crate::chime::{Chime, Clip, SilentChime, TerminalBell};
use crate::config::AppConfig;
use crate::event::{Event, EventHandler};
use crate::state::{AppState, HourFormat, TickOutcome};
use crate::ui::{Ui, UpdateKind};

/// Main application.
pub struct App {
    /// Watch state
    state: AppState,
    /// Application configuration
    config: AppConfig,
    /// UI controller
    ui: Ui,
    /// Sound output
    chime: Box<dyn Chime>,
    /// When the previous tick was handled
    last_tick: Instant,
    /// Should the application exit?
    should_quit: bool,
}

impl App {
    /// Creates a new application instance.
    pub fn new(config: AppConfig) -> Self {
        let chime: Box<dyn Chime> = if config.bell {
            Box::new(TerminalBell)
        } else {
            Box::new(SilentChime)
        };
        Self::with_chime(config, chime, Local::now().naive_local())
    }

    /// Creates an application with a specific sound output and start time.
    pub fn with_chime(config: AppConfig, chime: Box<dyn Chime>, now: NaiveDateTime) -> Self {
        Self {
            state: AppState::new(&config, now),
            config,
            ui: Ui::new(),
            chime,
            last_tick: Instant::now(),
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Runs the application main loop.
    pub async fn run<B, S>(&mut self, terminal: &mut Terminal<B>, events: &mut S) -> Result<()>
    where
        B: Backend,
        S: Stream<Item = Event> + Unpin,
    {
        self.last_tick = Instant::now();

        while !self.should_quit {
            terminal.draw(|frame| self.ui.render(frame, &self.state))?;

            match events.next().await {
                Some(event) => self.handle_event(event)?,
                None => break,
            }
        }

        Ok(())
    }

    /// Runs the application main loop with Crossterm backend.
    pub async fn run_with_crossterm(&mut self) -> Result<()> {
        use ratatui::backend::CrosstermBackend;

        let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;
        let mut events = EventHandler::new(self.config.tick_rate());

        self.run(&mut terminal, &mut events).await
    }

    /// Handles input and other events.
    pub fn handle_event(&mut self, event: Event) -> Result<()> {
        match event {
            Event::Key(key) => self.handle_key_event(key),
            Event::Tick => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_tick).as_secs_f64();
                self.last_tick = now;
                self.tick(delta, Local::now().naive_local());
                Ok(())
            }
            Event::Resize(width, height) => {
                // Next draw picks up the new size
                debug!(width, height, "terminal resized");
                Ok(())
            }
        }
    }

    /// Advances every component by `delta` seconds.
    pub fn tick(&mut self, delta: f64, now: NaiveDateTime) {
        if self.state.tick(delta, now) == TickOutcome::Expired {
            info!("countdown finished");
            self.chime.play_once(Clip::Alarm);
        }
    }

    /// Handles keyboard input.
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return Ok(());
        }

        let update = self.ui.handle_key_event(key, &mut self.state)?;
        self.apply(update);
        Ok(())
    }

    /// Applies a command from the UI to the watch state.
    pub fn apply(&mut self, update: UpdateKind) {
        let result = match update {
            UpdateKind::Quit => {
                self.should_quit = true;
                Ok(())
            }
            UpdateKind::ToggleHelp => {
                self.ui.toggle_help();
                Ok(())
            }
            UpdateKind::Open(section) => {
                self.state.navigator.open(section);
                self.chime.play_once(Clip::Click);
                Ok(())
            }
            UpdateKind::CloseSection => {
                let active = self.state.navigator.active();
                self.state.navigator.close(active);
                self.chime.play_once(Clip::Click);
                Ok(())
            }
            UpdateKind::NextSection => {
                self.state.navigator.next();
                self.chime.play_once(Clip::Click);
                Ok(())
            }
            UpdateKind::PrevSection => {
                self.state.navigator.prev();
                self.chime.play_once(Clip::Click);
                Ok(())
            }
            UpdateKind::ToggleHourFormat => {
                let format = match self.state.clock.format() {
                    HourFormat::Twelve => HourFormat::TwentyFour,
                    HourFormat::TwentyFour => HourFormat::Twelve,
                };
                self.state.clock.set_format(format);
                Ok(())
            }
            UpdateKind::NextDateFormat => self.state.clock.next_date_format(),
            UpdateKind::ToggleStopwatch => self.state.stopwatch.toggle(),
            UpdateKind::ResetStopwatch => {
                self.state.stopwatch.reset();
                Ok(())
            }
            UpdateKind::Lap => self.state.stopwatch.lap(),
            UpdateKind::ToggleTimer => self.state.toggle_timer(),
            UpdateKind::ResetTimer => {
                self.state.timer.reset();
                Ok(())
            }
            UpdateKind::StartCountdown => self.state.start_countdown(),
            UpdateKind::Other => Ok(()),
        };

        if let Err(err) = result {
            debug!(?update, %err, "command ignored");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chime::MockChime;
    use crate::state::{Section, TimerStatus};
    use chrono::NaiveDate;
    use mockall::predicate::eq;
    use pretty_assertions::assert_eq;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 16)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn app_with(chime: MockChime) -> App {
        App::with_chime(AppConfig::default(), Box::new(chime), noon())
    }

    #[test]
    fn expiry_rings_alarm_exactly_once() {
        let mut chime = MockChime::new();
        chime.expect_play_once().with(eq(Clip::Alarm)).times(1).return_const(());
        let mut app = app_with(chime);

        app.state_mut().timer.start(0, 0, 5).unwrap();
        for _ in 0..20 {
            app.tick(0.5, noon());
        }
        assert_eq!(app.state().timer.status(), TimerStatus::Expired);
    }

    #[test]
    fn navigation_clicks() {
        let mut chime = MockChime::new();
        chime.expect_play_once().with(eq(Clip::Click)).times(3).return_const(());
        let mut app = app_with(chime);

        app.apply(UpdateKind::Open(Section::Stopwatch));
        app.apply(UpdateKind::NextSection);
        assert_eq!(app.state().navigator.active(), Section::Timer);
        app.apply(UpdateKind::CloseSection);
        assert_eq!(app.state().navigator.active(), Section::Clock);
    }

    #[test]
    fn rejected_commands_leave_state_alone() {
        let mut app = app_with(MockChime::new());

        app.apply(UpdateKind::Lap);
        app.apply(UpdateKind::StartCountdown);
        assert_eq!(app.state().timer.status(), TimerStatus::Idle);
        assert!(app.state().stopwatch.laps().is_empty());
        assert!(!app.should_quit());
    }

    #[test]
    fn date_format_key_cycles_clock_presets() {
        let mut app = app_with(MockChime::new());
        assert_eq!(app.state().clock.date_line(), "16 / 10 / 26");

        let key = KeyEvent::new(KeyCode::Char('d'), KeyModifiers::NONE);
        app.handle_event(Event::Key(key)).unwrap();
        assert_eq!(app.state().clock.date_line(), "10 / 16 / 26");

        app.handle_event(Event::Key(key)).unwrap();
        assert_eq!(app.state().clock.date_line(), "2026-10-16");
    }

    #[test]
    fn escape_on_clock_keeps_it_marked() {
        let mut chime = MockChime::new();
        chime.expect_play_once().with(eq(Clip::Click)).times(1).return_const(());
        let mut app = app_with(chime);

        app.apply(UpdateKind::CloseSection);
        assert_eq!(app.state().navigator.active(), Section::Clock);
        assert_eq!(app.state().navigator.label(Section::Clock), "▸ Clock");
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = app_with(MockChime::new());
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        app.handle_event(Event::Key(key)).unwrap();
        assert!(app.should_quit());
    }
}
