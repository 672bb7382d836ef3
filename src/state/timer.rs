//! Countdown timer state.
//!
//! Counts a user-supplied duration down to zero by borrowing from minutes
//! and hours as the seconds field runs out, and reports expiry exactly once.

use tracing::{debug, info, warn};

use super::time::{TimeValue, SEXAGESIMAL};
use crate::error::{Result, WatchError};

/// Seconds at or below this value count as exhausted.
pub const EXPIRY_EPSILON: f64 = 0.001;

/// Seconds added to the seconds field by each borrow.
const BORROW_SECONDS: f64 = 59.0;

/// Default easing rate of the displayed fill ratio, per second.
pub const DEFAULT_FILL_SPEED: f64 = 4.0;

/// Timer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimerStatus {
    #[default]
    Idle,
    Running,
    Paused,
    Expired,
}

impl TimerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerStatus::Idle => "idle",
            TimerStatus::Running => "running",
            TimerStatus::Paused => "paused",
            TimerStatus::Expired => "expired",
        }
    }
}

/// What a tick produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing noteworthy.
    Continue,
    /// The countdown reached zero on this tick.
    Expired,
}

/// Countdown timer state.
#[derive(Debug, Clone)]
pub struct TimerState {
    status: TimerStatus,
    remaining: TimeValue,
    /// Requested duration in seconds.
    total: f64,
    /// Eased fill ratio shown by the progress bar.
    display_fill: f64,
    fill_speed: f64,
}

impl Default for TimerState {
    fn default() -> Self {
        Self::new(DEFAULT_FILL_SPEED)
    }
}

impl TimerState {
    pub fn new(fill_speed: f64) -> Self {
        Self {
            status: TimerStatus::Idle,
            remaining: TimeValue::ZERO,
            total: 0.0,
            display_fill: 1.0,
            fill_speed: fill_speed.max(0.0),
        }
    }

    pub fn status(&self) -> TimerStatus {
        self.status
    }

    pub fn remaining(&self) -> TimeValue {
        self.remaining
    }

    /// Requested duration.
    pub fn total(&self) -> TimeValue {
        TimeValue::from_total_seconds(self.total)
    }

    /// Fraction of the duration still to run, unsmoothed.
    pub fn target_fill(&self) -> f64 {
        if self.total <= 0.0 {
            return match self.status {
                TimerStatus::Expired => 0.0,
                _ => 1.0,
            };
        }
        (self.remaining.total_seconds() / self.total).clamp(0.0, 1.0)
    }

    /// Fill ratio eased toward [`TimerState::target_fill`].
    pub fn display_fill(&self) -> f64 {
        self.display_fill
    }

    /// Begin counting down from the given fields.
    ///
    /// Fields are normalised so minutes and seconds stay below 60. A zero
    /// duration is rejected and leaves the timer untouched.
    pub fn start(&mut self, hours: u32, minutes: u32, seconds: u32) -> Result<()> {
        if matches!(self.status, TimerStatus::Running | TimerStatus::Paused) {
            return Err(self.rejected("start"));
        }

        let requested = TimeValue::new(hours, minutes, seconds as f64);
        if requested.is_zero() {
            warn!("rejected countdown of zero length");
            return Err(WatchError::ZeroDuration);
        }

        debug!(duration = %requested, "timer started");
        self.remaining = requested;
        self.total = requested.total_seconds();
        self.display_fill = 1.0;
        self.status = TimerStatus::Running;
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        if self.status != TimerStatus::Running {
            return Err(self.rejected("pause"));
        }
        debug!(remaining = %self.remaining, "timer paused");
        self.status = TimerStatus::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        if self.status != TimerStatus::Paused {
            return Err(self.rejected("resume"));
        }
        debug!(remaining = %self.remaining, "timer resumed");
        self.status = TimerStatus::Running;
        Ok(())
    }

    /// Pause or resume. Idle and expired timers have nothing to toggle.
    pub fn toggle(&mut self) -> Result<()> {
        match self.status {
            TimerStatus::Running => self.pause(),
            TimerStatus::Paused => self.resume(),
            TimerStatus::Idle | TimerStatus::Expired => Err(self.rejected("toggle")),
        }
    }

    /// Clear the countdown and return to idle. Valid from any status.
    pub fn reset(&mut self) {
        debug!(from = self.status.as_str(), "timer reset");
        *self = Self::new(self.fill_speed);
    }

    /// Advance by `delta` seconds.
    pub fn tick(&mut self, delta: f64) -> TickOutcome {
        let delta = if delta.is_finite() { delta.max(0.0) } else { 0.0 };
        let outcome = if self.status == TimerStatus::Running {
            self.count_down(delta)
        } else {
            TickOutcome::Continue
        };
        self.ease_fill(delta);
        outcome
    }

    fn count_down(&mut self, delta: f64) -> TickOutcome {
        let seconds = self.remaining.seconds - delta;
        if seconds > EXPIRY_EPSILON {
            self.remaining.seconds = seconds;
            return TickOutcome::Continue;
        }

        // Each borrow adds 59 seconds; an hour yields one borrow into a
        // fresh 59 minutes, so sixty borrows in all.
        let needed = ((EXPIRY_EPSILON - seconds) / BORROW_SECONDS).floor() as u64 + 1;
        let minutes = u64::from(self.remaining.minutes);
        let available = minutes + u64::from(self.remaining.hours) * u64::from(SEXAGESIMAL);
        if needed > available {
            self.remaining = TimeValue::ZERO;
            self.status = TimerStatus::Expired;
            info!(duration_secs = self.total, "timer expired");
            return TickOutcome::Expired;
        }

        let from_hours = needed.saturating_sub(minutes);
        if from_hours == 0 {
            self.remaining.minutes -= needed as u32;
        } else {
            let per_hour = u64::from(SEXAGESIMAL);
            self.remaining.hours -= ((from_hours + per_hour - 1) / per_hour) as u32;
            self.remaining.minutes = (per_hour - 1 - (from_hours - 1) % per_hour) as u32;
        }
        self.remaining.seconds = seconds + needed as f64 * BORROW_SECONDS;

        TickOutcome::Continue
    }

    fn ease_fill(&mut self, delta: f64) {
        let t = (self.fill_speed * delta).clamp(0.0, 1.0);
        self.display_fill += (self.target_fill() - self.display_fill) * t;
    }

    fn rejected(&self, action: &'static str) -> WatchError {
        WatchError::InvalidTransition {
            component: "timer",
            action,
            state: self.status.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn started(hours: u32, minutes: u32, seconds: u32) -> TimerState {
        let mut timer = TimerState::default();
        timer.start(hours, minutes, seconds).unwrap();
        timer
    }

    fn assert_non_negative(timer: &TimerState) {
        assert!(timer.remaining().seconds >= 0.0);
    }

    #[test]
    fn five_seconds_expires_once() {
        let mut timer = started(0, 0, 5);

        let outcomes: Vec<_> = (0..5).map(|_| timer.tick(1.0)).collect();
        assert_eq!(
            outcomes,
            vec![
                TickOutcome::Continue,
                TickOutcome::Continue,
                TickOutcome::Continue,
                TickOutcome::Continue,
                TickOutcome::Expired,
            ]
        );
        assert_eq!(timer.status(), TimerStatus::Expired);

        for _ in 0..10 {
            assert_eq!(timer.tick(1.0), TickOutcome::Continue);
        }
        assert_eq!(timer.remaining(), TimeValue::ZERO);
    }

    #[test]
    fn single_tick_of_whole_duration_expires() {
        let mut timer = started(0, 0, 5);
        assert_eq!(timer.tick(5.0), TickOutcome::Expired);
        assert_eq!(timer.status(), TimerStatus::Expired);
    }

    #[test]
    fn zero_duration_is_rejected() {
        let mut timer = TimerState::default();
        assert_eq!(timer.start(0, 0, 0), Err(WatchError::ZeroDuration));
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.tick(1.0), TickOutcome::Continue);
        assert_eq!(timer.status(), TimerStatus::Idle);
    }

    #[test]
    fn sub_second_remainder_expires_without_negative_fields() {
        let mut timer = TimerState::default();
        timer.start(0, 0, 1).unwrap();
        timer.tick(0.7);
        assert!((timer.remaining().seconds - 0.3).abs() < 1e-9);

        assert_eq!(timer.tick(0.4), TickOutcome::Expired);
        assert_eq!(timer.remaining(), TimeValue::ZERO);
        assert_non_negative(&timer);
    }

    #[test]
    fn borrows_a_minute() {
        let mut timer = started(0, 2, 0);
        timer.tick(0.5);

        let remaining = timer.remaining();
        assert_eq!(remaining.minutes, 1);
        assert!((remaining.seconds - 58.5).abs() < 1e-9);
        assert_non_negative(&timer);
    }

    #[test]
    fn borrows_an_hour_when_minutes_are_exhausted() {
        let mut timer = started(1, 0, 0);
        timer.tick(1.0);

        let remaining = timer.remaining();
        assert_eq!(remaining.hours, 0);
        assert_eq!(remaining.minutes, 59);
        assert!((remaining.seconds - 58.0).abs() < 1e-9);
    }

    #[test]
    fn long_tick_borrows_across_hours_at_once() {
        let mut timer = started(2, 0, 0);
        assert_eq!(timer.tick(3600.0), TickOutcome::Continue);

        let remaining = timer.remaining();
        assert_eq!((remaining.hours, remaining.minutes), (0, 58));
        assert!((remaining.seconds - 58.0).abs() < 1e-9);
    }

    #[test]
    fn huge_tick_on_huge_duration_expires() {
        let mut timer = started(1_000_000, 0, 0);
        assert_eq!(timer.tick(1e17), TickOutcome::Expired);
        assert_eq!(timer.remaining(), TimeValue::ZERO);
    }

    #[rstest]
    #[case(0, 0, 75, (0, 1, 15))]
    #[case(0, 90, 0, (1, 30, 0))]
    #[case(2, 0, 3600, (3, 0, 0))]
    fn start_normalises_fields(
        #[case] h: u32,
        #[case] m: u32,
        #[case] s: u32,
        #[case] expected: (u32, u32, u32),
    ) {
        let timer = started(h, m, s);
        let remaining = timer.remaining();
        assert_eq!(
            (remaining.hours, remaining.minutes, remaining.whole_seconds()),
            expected
        );
    }

    #[test]
    fn total_uses_full_hours() {
        let timer = started(1, 0, 0);
        assert_eq!(timer.total().total_seconds(), 3600.0);
    }

    #[test]
    fn pause_holds_and_resume_continues() {
        let mut timer = started(0, 0, 10);
        timer.tick(2.0);
        timer.pause().unwrap();
        timer.tick(5.0);
        assert_eq!(timer.remaining().whole_seconds(), 8);

        assert!(timer.start(0, 0, 3).is_err());
        timer.toggle().unwrap();
        assert_eq!(timer.status(), TimerStatus::Running);
        timer.tick(1.0);
        assert_eq!(timer.remaining().whole_seconds(), 7);
    }

    #[test]
    fn expired_timer_can_be_restarted() {
        let mut timer = started(0, 0, 1);
        assert_eq!(timer.tick(1.0), TickOutcome::Expired);
        assert!(timer.toggle().is_err());

        timer.start(0, 0, 2).unwrap();
        assert_eq!(timer.status(), TimerStatus::Running);
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut timer = started(0, 5, 0);
        timer.tick(3.0);
        timer.reset();

        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.remaining(), TimeValue::ZERO);
        assert_eq!(timer.display_fill(), 1.0);
    }

    #[test]
    fn fill_eases_toward_target() {
        let mut timer = TimerState::new(1.0);
        timer.start(0, 0, 10).unwrap();

        timer.tick(0.5);
        let target = timer.target_fill();
        assert!((target - 0.95).abs() < 1e-9);
        // Half-way from 1.0 toward 0.95.
        assert!((timer.display_fill() - 0.975).abs() < 1e-9);

        for _ in 0..50 {
            timer.pause().ok();
            timer.tick(0.5);
        }
        assert!((timer.display_fill() - target).abs() < 1e-6);
    }
}
