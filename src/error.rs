//! Errors raised by the watch components.

use thiserror::Error;

/// Rejected commands. None of these are fatal; the host logs them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchError {
    /// A countdown of zero length was requested.
    #[error("countdown duration must be greater than zero")]
    ZeroDuration,

    /// A command does not apply in the component's current state.
    #[error("cannot {action} the {component} while it is {state}")]
    InvalidTransition {
        component: &'static str,
        action: &'static str,
        state: &'static str,
    },

    /// A date format string that chrono cannot render.
    #[error("invalid date format {0:?}")]
    InvalidDateFormat(String),
}

pub type Result<T, E = WatchError> = std::result::Result<T, E>;
