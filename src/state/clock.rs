//! Wall-clock state.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{NaiveDateTime, Timelike};
use serde::Deserialize;
use tracing::{debug, warn};

use super::time::{hand_angle, TimeValue, DIAL_HOURS, SEXAGESIMAL};
use crate::error::{Result, WatchError};

/// Date line shown until another format is picked, e.g. `16 / 10 / 26`.
pub const DEFAULT_DATE_FORMAT: &str = "%d / %m / %y";

/// Date formats offered when none are configured, in strftime syntax.
pub const DATE_FORMAT_PRESETS: [&str; 4] = [
    DEFAULT_DATE_FORMAT,
    "%m / %d / %y",
    "%Y-%m-%d",
    "%A %-d %B %Y",
];

/// True when chrono can render `format` without error.
pub fn is_valid_date_format(format: &str) -> bool {
    !StrftimeItems::new(format).any(|item| matches!(item, Item::Error))
}

/// How the digital readout shows hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HourFormat {
    Twelve,
    #[default]
    TwentyFour,
}

/// Rotation of each clock hand, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClockHands {
    pub hour: f64,
    pub minute: f64,
    pub second: f64,
}

/// Clock state, refreshed from the host's wall-clock reading every tick.
#[derive(Debug, Clone)]
pub struct ClockState {
    now: NaiveDateTime,
    format: HourFormat,
    date_format: String,
    date_formats: Vec<String>,
}

impl ClockState {
    pub fn new(now: NaiveDateTime, format: HourFormat) -> Self {
        Self {
            now,
            format,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            date_formats: DATE_FORMAT_PRESETS.iter().map(|f| f.to_string()).collect(),
        }
    }

    /// Replace the date format presets and pick the starting format.
    /// Unrenderable entries are dropped; an unrenderable `current` leaves
    /// the default in place.
    pub fn with_date_formats(mut self, current: &str, presets: &[String]) -> Self {
        let presets: Vec<String> = presets
            .iter()
            .filter(|format| {
                let valid = is_valid_date_format(format);
                if !valid {
                    warn!(format = %format, "ignoring invalid date format preset");
                }
                valid
            })
            .cloned()
            .collect();
        if !presets.is_empty() {
            self.date_formats = presets;
        }
        if let Err(err) = self.set_date_format(current) {
            warn!(%err, "keeping default date format");
        }
        self
    }

    pub fn update(&mut self, now: NaiveDateTime) {
        self.now = now;
    }

    pub fn format(&self) -> HourFormat {
        self.format
    }

    pub fn set_format(&mut self, format: HourFormat) {
        self.format = format;
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    pub fn date_formats(&self) -> &[String] {
        &self.date_formats
    }

    /// Use `format` (strftime syntax) for the date line.
    pub fn set_date_format(&mut self, format: &str) -> Result<()> {
        if !is_valid_date_format(format) {
            return Err(WatchError::InvalidDateFormat(format.to_string()));
        }
        debug!(format, "date format changed");
        self.date_format = format.to_string();
        Ok(())
    }

    /// Pick a preset by index. Out-of-range indices are ignored.
    pub fn select_date_format(&mut self, index: usize) -> Result<()> {
        match self.date_formats.get(index).cloned() {
            Some(format) => self.set_date_format(&format),
            None => Ok(()),
        }
    }

    /// Move to the preset after the current format, wrapping around. A
    /// format outside the presets moves to the first one.
    pub fn next_date_format(&mut self) -> Result<()> {
        let next = self
            .date_formats
            .iter()
            .position(|format| *format == self.date_format)
            .map_or(0, |index| (index + 1) % self.date_formats.len());
        self.select_date_format(next)
    }

    /// Current reading, hours in 0..=23.
    pub fn time(&self) -> TimeValue {
        let sub_second = self.now.nanosecond().min(999_999_999) as f64 / 1e9;
        TimeValue {
            hours: self.now.hour(),
            minutes: self.now.minute(),
            seconds: self.now.second().min(SEXAGESIMAL - 1) as f64 + sub_second,
        }
    }

    /// Hand rotations. The hour and minute hands creep between marks.
    pub fn hands(&self) -> ClockHands {
        let time = self.time();
        let minutes = time.minutes as f64 + time.seconds / 60.0;
        let hours = (time.hours % 12) as f64 + minutes / 60.0;

        ClockHands {
            hour: hand_angle(hours, DIAL_HOURS),
            minute: hand_angle(minutes, SEXAGESIMAL as f64),
            second: hand_angle(time.whole_seconds() as f64, SEXAGESIMAL as f64),
        }
    }

    /// Digital readout, e.g. `14:05:09` or `2:05:09 PM`.
    pub fn readout(&self) -> String {
        let time = self.time();
        match self.format {
            HourFormat::TwentyFour => time.to_string(),
            HourFormat::Twelve => {
                let suffix = if time.hours < 12 { "AM" } else { "PM" };
                let hour = match time.hours % 12 {
                    0 => 12,
                    h => h,
                };
                format!(
                    "{}:{:02}:{:02} {}",
                    hour,
                    time.minutes,
                    time.whole_seconds(),
                    suffix
                )
            }
        }
    }

    /// Date line in the current format, e.g. `16 / 10 / 26`.
    pub fn date_line(&self) -> String {
        let mut line = String::new();
        if write!(line, "{}", self.now.format(&self.date_format)).is_err() {
            return self.now.format(DEFAULT_DATE_FORMAT).to_string();
        }
        line
    }
}
