//! Custom widgets for the watch panels.

pub mod dial;
pub mod progress;
pub mod tabbed_view;

pub use dial::Dial;
pub use progress::ProgressBar;
pub use tabbed_view::{TabRenderer, TabbedView};
