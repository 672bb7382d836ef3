//! Stopwatch state.
//!
//! Accumulates elapsed time while running. Sub-second time collects in an
//! accumulator that carries into whole seconds once it reaches one second.

use tracing::debug;

use super::time::{TimeValue, SEXAGESIMAL};
use crate::error::{Result, WatchError};

/// Number of laps kept before new laps are ignored.
pub const MAX_LAPS: usize = 99;

/// Accumulator threshold, in seconds, for carrying into the seconds field.
const CARRY_THRESHOLD: f64 = 1.0;

/// Stopwatch status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StopwatchStatus {
    #[default]
    Idle,
    Running,
    Paused,
}

impl StopwatchStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StopwatchStatus::Idle => "idle",
            StopwatchStatus::Running => "running",
            StopwatchStatus::Paused => "paused",
        }
    }
}

/// Stopwatch state.
#[derive(Debug, Clone, Default)]
pub struct StopwatchState {
    status: StopwatchStatus,
    hours: u32,
    minutes: u32,
    seconds: u32,
    /// Sub-second accumulator, always below [`CARRY_THRESHOLD`].
    fraction: f64,
    laps: Vec<TimeValue>,
}

impl StopwatchState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> StopwatchStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == StopwatchStatus::Running
    }

    /// Current reading.
    pub fn elapsed(&self) -> TimeValue {
        TimeValue {
            hours: self.hours,
            minutes: self.minutes,
            seconds: self.seconds as f64 + self.fraction,
        }
    }

    /// Recorded laps, oldest first.
    pub fn laps(&self) -> &[TimeValue] {
        &self.laps
    }

    pub fn start(&mut self) -> Result<()> {
        self.transition("start", StopwatchStatus::Idle, StopwatchStatus::Running)
    }

    pub fn pause(&mut self) -> Result<()> {
        self.transition("pause", StopwatchStatus::Running, StopwatchStatus::Paused)
    }

    pub fn resume(&mut self) -> Result<()> {
        self.transition("resume", StopwatchStatus::Paused, StopwatchStatus::Running)
    }

    /// Start, pause or resume depending on the current status.
    pub fn toggle(&mut self) -> Result<()> {
        match self.status {
            StopwatchStatus::Idle => self.start(),
            StopwatchStatus::Running => self.pause(),
            StopwatchStatus::Paused => self.resume(),
        }
    }

    /// Zero every field and return to idle. Valid from any status.
    pub fn reset(&mut self) {
        debug!(from = self.status.as_str(), "stopwatch reset");
        *self = Self::default();
    }

    /// Record the current reading as a lap.
    pub fn lap(&mut self) -> Result<()> {
        if !self.is_running() {
            return Err(self.rejected("lap"));
        }
        if self.laps.len() < MAX_LAPS {
            self.laps.push(self.elapsed());
        }
        Ok(())
    }

    /// Advance by `delta` seconds. Only counts while running.
    pub fn tick(&mut self, delta: f64) {
        if !self.is_running() || !delta.is_finite() || delta <= 0.0 {
            return;
        }

        self.fraction += delta;
        if self.fraction < CARRY_THRESHOLD {
            return;
        }
        let whole = self.fraction.floor();
        self.fraction -= whole;
        // float-to-int casts saturate
        self.carry_seconds(whole as u64);
    }

    /// Fold `extra` whole seconds into the fields. Hours saturate.
    fn carry_seconds(&mut self, extra: u64) {
        let base = u64::from(SEXAGESIMAL);
        let total = (u64::from(self.minutes) * base + u64::from(self.seconds)).saturating_add(extra);

        self.seconds = (total % base) as u32;
        self.minutes = (total / base % base) as u32;
        let hours = u32::try_from(total / (base * base)).unwrap_or(u32::MAX);
        self.hours = self.hours.saturating_add(hours);
    }

    fn transition(
        &mut self,
        action: &'static str,
        from: StopwatchStatus,
        to: StopwatchStatus,
    ) -> Result<()> {
        if self.status != from {
            return Err(self.rejected(action));
        }
        debug!(from = from.as_str(), to = to.as_str(), "stopwatch {}", action);
        self.status = to;
        Ok(())
    }

    fn rejected(&self, action: &'static str) -> WatchError {
        WatchError::InvalidTransition {
            component: "stopwatch",
            action,
            state: self.status.as_str(),
        }
    }
}
