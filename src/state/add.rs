//! Countdown entry form behind the Add section.
//!
//! Holds the raw text of the hour, minute and second fields exactly as
//! typed, plus a preset list the user can pick from by index.

use itertools::Itertools;

use super::time::{parse_or_zero, TimeValue};

/// Longest accepted text in a single field.
const MAX_FIELD_LEN: usize = 3;

/// Entry fields, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Hours,
    Minutes,
    Seconds,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Hours, Field::Minutes, Field::Seconds];

    pub fn title(&self) -> &'static str {
        match self {
            Field::Hours => "Hours",
            Field::Minutes => "Minutes",
            Field::Seconds => "Seconds",
        }
    }

    fn index(&self) -> usize {
        match self {
            Field::Hours => 0,
            Field::Minutes => 1,
            Field::Seconds => 2,
        }
    }
}

/// Raw form contents.
#[derive(Debug, Clone)]
pub struct AddForm {
    fields: [String; 3],
    focus: Field,
    presets: Vec<u32>,
    selected_preset: Option<usize>,
    /// Message shown under the form after a rejected start.
    pub message: Option<String>,
}

impl Default for AddForm {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl AddForm {
    /// Create a form offering the given preset durations, in seconds.
    pub fn new(presets: Vec<u32>) -> Self {
        Self {
            fields: Default::default(),
            focus: Field::Minutes,
            presets: presets.into_iter().filter(|secs| *secs > 0).collect(),
            selected_preset: None,
            message: None,
        }
    }

    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn text(&self, field: Field) -> &str {
        &self.fields[field.index()]
    }

    /// Replace a field's text, as a text-field edit callback would.
    pub fn set_text(&mut self, field: Field, raw: impl Into<String>) {
        self.fields[field.index()] = raw.into().chars().take(MAX_FIELD_LEN).collect();
        self.selected_preset = None;
        self.message = None;
    }

    /// Append a typed character to the focused field. Non-digits are ignored.
    pub fn push_char(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }
        let field = &mut self.fields[self.focus.index()];
        if field.chars().count() < MAX_FIELD_LEN {
            field.push(c);
            self.selected_preset = None;
            self.message = None;
        }
    }

    pub fn backspace(&mut self) {
        self.fields[self.focus.index()].pop();
        self.selected_preset = None;
        self.message = None;
    }

    pub fn focus_next(&mut self) {
        let index = (self.focus.index() + 1) % Field::ALL.len();
        self.focus = Field::ALL[index];
    }

    pub fn focus_prev(&mut self) {
        let len = Field::ALL.len();
        let index = (self.focus.index() + len - 1) % len;
        self.focus = Field::ALL[index];
    }

    pub fn presets(&self) -> &[u32] {
        &self.presets
    }

    pub fn selected_preset(&self) -> Option<usize> {
        self.selected_preset
    }

    /// Pick a preset by index and copy it into the fields. Out-of-range
    /// indices are ignored.
    pub fn select_preset(&mut self, index: usize) {
        let Some(&secs) = self.presets.get(index) else {
            return;
        };
        let value = TimeValue::from_total_seconds(secs as f64);
        self.fields = [
            value.hours.to_string(),
            value.minutes.to_string(),
            value.whole_seconds().to_string(),
        ];
        self.selected_preset = Some(index);
        self.message = None;
    }

    pub fn next_preset(&mut self) {
        if self.presets.is_empty() {
            return;
        }
        let index = self
            .selected_preset
            .map_or(0, |index| (index + 1) % self.presets.len());
        self.select_preset(index);
    }

    pub fn prev_preset(&mut self) {
        if self.presets.is_empty() {
            return;
        }
        let len = self.presets.len();
        let index = self
            .selected_preset
            .map_or(len - 1, |index| (index + len - 1) % len);
        self.select_preset(index);
    }

    /// Parsed `(hours, minutes, seconds)`; unparsable text counts as zero.
    pub fn values(&self) -> (u32, u32, u32) {
        (
            parse_or_zero(self.text(Field::Hours)),
            parse_or_zero(self.text(Field::Minutes)),
            parse_or_zero(self.text(Field::Seconds)),
        )
    }

    pub fn clear(&mut self) {
        self.fields = Default::default();
        self.selected_preset = None;
        self.message = None;
    }
}

/// Human-readable preset label, e.g. `5m` or `1h 30m`.
pub fn preset_label(secs: u32) -> String {
    let value = TimeValue::from_total_seconds(secs as f64);
    let parts = [
        (value.hours, "h"),
        (value.minutes, "m"),
        (value.whole_seconds(), "s"),
    ];
    let label = parts
        .iter()
        .filter(|(amount, _)| *amount > 0)
        .map(|(amount, unit)| format!("{}{}", amount, unit))
        .join(" ");
    if label.is_empty() {
        "0s".to_string()
    } else {
        label
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn typing_fills_the_focused_field() {
        let mut form = AddForm::default();
        assert_eq!(form.focus(), Field::Minutes);

        for c in "12x34".chars() {
            form.push_char(c);
        }
        assert_eq!(form.text(Field::Minutes), "123");

        form.backspace();
        form.focus_next();
        form.push_char('9');
        assert_eq!(form.values(), (0, 12, 9));
    }

    #[test]
    fn malformed_text_parses_as_zero() {
        let mut form = AddForm::default();
        form.set_text(Field::Hours, "x");
        form.set_text(Field::Minutes, "");
        form.set_text(Field::Seconds, "45");
        assert_eq!(form.values(), (0, 0, 45));
    }

    #[test]
    fn non_ascii_text_is_kept_whole_and_parses_as_zero() {
        let mut form = AddForm::default();
        form.set_text(Field::Hours, "éé");
        form.set_text(Field::Minutes, "ä1b2");
        assert_eq!(form.text(Field::Hours), "éé");
        assert_eq!(form.text(Field::Minutes), "ä1b");
        assert_eq!(form.values(), (0, 0, 0));
    }

    #[test]
    fn backspace_clears_stale_message() {
        let mut form = AddForm::default();
        form.push_char('5');
        form.message = Some("duration must be greater than zero".to_string());

        form.backspace();
        assert_eq!(form.message, None);
        assert_eq!(form.text(Field::Minutes), "");
    }

    #[test]
    fn presets_fill_fields_by_index() {
        let mut form = AddForm::new(vec![60, 0, 5400]);
        assert_eq!(form.presets(), &[60, 5400]);

        form.select_preset(1);
        assert_eq!(form.values(), (1, 30, 0));
        assert_eq!(form.selected_preset(), Some(1));

        form.select_preset(7);
        assert_eq!(form.selected_preset(), Some(1));

        form.next_preset();
        assert_eq!(form.values(), (0, 1, 0));
        form.prev_preset();
        assert_eq!(form.values(), (1, 30, 0));
    }

    #[test]
    fn editing_clears_preset_selection() {
        let mut form = AddForm::new(vec![300]);
        form.select_preset(0);
        form.push_char('1');
        assert_eq!(form.selected_preset(), None);
    }

    #[rstest]
    #[case(60, "1m")]
    #[case(300, "5m")]
    #[case(5400, "1h 30m")]
    #[case(45, "45s")]
    #[case(0, "0s")]
    fn labels_presets(#[case] secs: u32, #[case] expected: &str) {
        assert_eq!(preset_label(secs), expected);
    }
}
