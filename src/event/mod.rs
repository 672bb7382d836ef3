//! Event handling for the watch.
//!
//! The [`EventDispatcher`] keeps a steady tick cadence: [`Event::Tick`] is
//! produced every tick rate no matter how much input arrives in between, and
//! terminal events the watch has no use for are dropped instead of waking the
//! clocks early.

pub mod handler;

pub use handler::EventHandler;

use std::time::{Duration, Instant};

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use eyre::Result;

/// Default refresh interval.
pub const DEFAULT_TICK_RATE: Duration = Duration::from_millis(50);

/// Application events
#[derive(Debug, Clone)]
pub enum Event {
    /// Key press or repeat
    Key(KeyEvent),
    /// Terminal resize event
    Resize(u16, u16),
    /// Refresh tick
    Tick,
}

/// Map a terminal event onto an application event. Key releases, mouse,
/// focus and paste events yield `None`.
pub fn translate(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Some(Event::Key(key)),
        CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
        _ => None,
    }
}

/// Polls the terminal and interleaves input with regular ticks.
pub struct EventDispatcher {
    tick_rate: Duration,
    next_tick: Instant,
}

impl EventDispatcher {
    pub fn with_tick_rate(tick_rate: Duration) -> Self {
        Self {
            tick_rate,
            next_tick: Instant::now() + tick_rate,
        }
    }

    /// Block until the next input event or the next tick, whichever is first.
    pub fn next(&mut self) -> Result<Event> {
        loop {
            let timeout = self.next_tick.saturating_duration_since(Instant::now());
            if !event::poll(timeout)? {
                self.schedule_next_tick(Instant::now());
                return Ok(Event::Tick);
            }
            if let Some(event) = translate(event::read()?) {
                return Ok(event);
            }
        }
    }

    fn schedule_next_tick(&mut self, now: Instant) {
        self.next_tick += self.tick_rate;
        // Late by more than a tick: resync rather than emit a burst
        if self.next_tick <= now {
            self.next_tick = now + self.tick_rate;
        }
    }
}
