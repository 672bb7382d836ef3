//! Application state management.
//!
//! The clock, stopwatch and timer each keep their own time value and are
//! advanced together by [`AppState::tick`]. The navigator decides which of
//! them is on screen. Nothing here blocks or does I/O; the host loop owns
//! time and feeds it in.

mod add;
mod clock;
mod navigator;
mod stopwatch;
mod time;
mod timer;

pub use add::{preset_label, AddForm, Field};
pub use clock::{ClockHands, ClockState, HourFormat, DATE_FORMAT_PRESETS, DEFAULT_DATE_FORMAT};
pub use navigator::{Navigator, Section};
pub use stopwatch::{StopwatchState, StopwatchStatus, MAX_LAPS};
pub use time::{hand_angle, hand_endpoint, parse_or_zero, TimeValue, DIAL_HOURS, SEXAGESIMAL};
pub use timer::{TickOutcome, TimerState, TimerStatus, DEFAULT_FILL_SPEED, EXPIRY_EPSILON};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::config::AppConfig;
use crate::error::Result;

/// Application state.
pub struct AppState {
    pub clock: ClockState,
    pub stopwatch: StopwatchState,
    pub timer: TimerState,
    pub navigator: Navigator,
    pub add_form: AddForm,
    /// Ticks seen so far, used to blink the expired banner.
    pub animation_frame: usize,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: &AppConfig, now: NaiveDateTime) -> Self {
        Self {
            clock: ClockState::new(now, config.hour_format)
                .with_date_formats(&config.date_format, &config.date_formats),
            stopwatch: StopwatchState::new(),
            timer: TimerState::new(config.fill_speed),
            navigator: Navigator::new(),
            add_form: AddForm::new(config.presets.clone()),
            animation_frame: 0,
        }
    }

    /// Advance every component by `delta` seconds and refresh the clock.
    pub fn tick(&mut self, delta: f64, now: NaiveDateTime) -> TickOutcome {
        self.clock.update(now);
        self.stopwatch.tick(delta);
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.timer.tick(delta)
    }

    /// Start a countdown from the Add form and switch to the timer.
    ///
    /// A zero duration leaves the form open with a message.
    pub fn start_countdown(&mut self) -> Result<()> {
        let (hours, minutes, seconds) = self.add_form.values();
        if let Err(err) = self.timer.start(hours, minutes, seconds) {
            self.add_form.message = Some(err.to_string());
            return Err(err);
        }

        debug!(hours, minutes, seconds, "countdown started from form");
        self.add_form.clear();
        self.navigator.open(Section::Timer);
        Ok(())
    }

    /// Toggle the timer, or reopen the Add form when there is nothing to toggle.
    pub fn toggle_timer(&mut self) -> Result<()> {
        match self.timer.status() {
            TimerStatus::Idle | TimerStatus::Expired => {
                self.navigator.open(Section::Add);
                Ok(())
            }
            TimerStatus::Running | TimerStatus::Paused => self.timer.toggle(),
        }
    }
}
