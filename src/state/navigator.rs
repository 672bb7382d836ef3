//! Section navigation.
//!
//! Keeps exactly one section visible. Opening a section closes every other
//! one first; closing the visible section falls back to the clock.

use tracing::debug;

/// A mutually exclusive display mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Clock,
    Stopwatch,
    Timer,
    Add,
}

impl Section {
    /// Every section, in menu order.
    pub const ALL: [Section; 4] = [
        Section::Clock,
        Section::Stopwatch,
        Section::Timer,
        Section::Add,
    ];

    /// Section shown at startup and after the visible one is closed.
    pub const HOME: Section = Section::Clock;

    pub fn title(&self) -> &'static str {
        match self {
            Section::Clock => "Clock",
            Section::Stopwatch => "Stopwatch",
            Section::Timer => "Timer",
            Section::Add => "Add",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Section::Clock => 0,
            Section::Stopwatch => 1,
            Section::Timer => 2,
            Section::Add => 3,
        }
    }
}

#[derive(Debug, Clone)]
struct Panel {
    visible: bool,
    label: String,
}

impl Panel {
    fn closed(section: Section) -> Self {
        Self {
            visible: false,
            label: section.title().to_string(),
        }
    }
}

/// Tracks which section is visible and each section's menu label.
#[derive(Debug, Clone)]
pub struct Navigator {
    panels: [Panel; 4],
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        let mut navigator = Self {
            panels: Section::ALL.map(Panel::closed),
        };
        navigator.open(Section::HOME);
        navigator
    }

    /// The visible section.
    pub fn active(&self) -> Section {
        Section::ALL
            .into_iter()
            .find(|section| self.is_open(*section))
            .unwrap_or(Section::HOME)
    }

    pub fn is_open(&self, section: Section) -> bool {
        self.panels[section.index()].visible
    }

    /// Menu label of a section. The open section is marked.
    pub fn label(&self, section: Section) -> &str {
        &self.panels[section.index()].label
    }

    /// Number of visible sections. Always one.
    pub fn open_count(&self) -> usize {
        self.panels.iter().filter(|panel| panel.visible).count()
    }

    /// Show `section`, closing every other one first.
    pub fn open(&mut self, section: Section) {
        for other in Section::ALL {
            if other != section {
                self.hide(other);
            }
        }

        let panel = &mut self.panels[section.index()];
        panel.visible = true;
        panel.label = format!("▸ {}", section.title());
        debug!(section = section.title(), "section opened");
    }

    /// Reset the label of `section`. Closing the visible section returns to
    /// the home section, so closing home while it is visible reopens it.
    pub fn close(&mut self, section: Section) {
        let was_open = self.is_open(section);
        self.hide(section);
        if was_open {
            debug!(section = section.title(), "section closed");
            self.open(Section::HOME);
        }
    }

    /// Open the section after the visible one, wrapping around.
    pub fn next(&mut self) {
        let index = (self.active().index() + 1) % Section::ALL.len();
        self.open(Section::ALL[index]);
    }

    /// Open the section before the visible one, wrapping around.
    pub fn prev(&mut self) {
        let len = Section::ALL.len();
        let index = (self.active().index() + len - 1) % len;
        self.open(Section::ALL[index]);
    }

    fn hide(&mut self, section: Section) {
        self.panels[section.index()] = Panel::closed(section);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_clock() {
        let navigator = Navigator::new();
        assert_eq!(navigator.active(), Section::Clock);
        assert_eq!(navigator.open_count(), 1);
        assert_eq!(navigator.label(Section::Clock), "▸ Clock");
    }

    #[test]
    fn opening_closes_the_rest() {
        let mut navigator = Navigator::new();
        navigator.open(Section::Stopwatch);

        assert!(!navigator.is_open(Section::Clock));
        assert!(navigator.is_open(Section::Stopwatch));
        assert_eq!(navigator.open_count(), 1);
        assert_eq!(navigator.label(Section::Clock), "Clock");
        assert_eq!(navigator.label(Section::Stopwatch), "▸ Stopwatch");
    }

    #[test]
    fn exactly_one_open_after_any_sequence() {
        let mut navigator = Navigator::new();
        for section in [
            Section::Add,
            Section::Timer,
            Section::Timer,
            Section::Clock,
            Section::Stopwatch,
        ] {
            navigator.open(section);
            assert_eq!(navigator.active(), section);
            assert_eq!(navigator.open_count(), 1);
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut navigator = Navigator::new();
        navigator.open(Section::Timer);

        navigator.close(Section::Timer);
        assert_eq!(navigator.active(), Section::Clock);
        assert_eq!(navigator.label(Section::Timer), "Timer");

        navigator.close(Section::Timer);
        assert_eq!(navigator.active(), Section::Clock);
        assert_eq!(navigator.open_count(), 1);

        navigator.close(Section::Clock);
        navigator.close(Section::Clock);
        assert_eq!(navigator.open_count(), 1);
    }

    #[test]
    fn closing_visible_home_keeps_it_marked() {
        let mut navigator = Navigator::new();
        navigator.close(Section::Clock);

        assert_eq!(navigator.active(), Section::Clock);
        assert_eq!(navigator.label(Section::Clock), "▸ Clock");
        assert_eq!(navigator.open_count(), 1);
    }

    #[test]
    fn closing_hidden_section_keeps_active() {
        let mut navigator = Navigator::new();
        navigator.open(Section::Stopwatch);
        navigator.close(Section::Add);
        assert_eq!(navigator.active(), Section::Stopwatch);
    }

    #[test]
    fn cycles_in_menu_order() {
        let mut navigator = Navigator::new();
        navigator.prev();
        assert_eq!(navigator.active(), Section::Add);
        navigator.next();
        navigator.next();
        assert_eq!(navigator.active(), Section::Stopwatch);
    }
}
