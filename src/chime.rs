//! Sound cues.
//!
//! The watch asks for a sound and never waits on it. Implementations must
//! return immediately.

use std::io::Write;

use tracing::{trace, warn};

/// Sound cues the watch can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    /// Countdown finished.
    Alarm,
    /// A section was opened.
    Click,
}

/// Fire-and-forget sound output.
#[cfg_attr(test, mockall::automock)]
pub trait Chime {
    fn play_once(&mut self, clip: Clip);
}

/// Rings the terminal bell for alarms.
#[derive(Debug, Default)]
pub struct TerminalBell;

impl Chime for TerminalBell {
    fn play_once(&mut self, clip: Clip) {
        match clip {
            Clip::Alarm => {
                let mut stdout = std::io::stdout();
                if let Err(err) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
                    warn!(%err, "failed to ring terminal bell");
                }
            }
            Clip::Click => trace!("click"),
        }
    }
}

/// Plays nothing.
#[derive(Debug, Default)]
pub struct SilentChime;

impl Chime for SilentChime {
    fn play_once(&mut self, clip: Clip) {
        trace!(?clip, "chime muted");
    }
}
