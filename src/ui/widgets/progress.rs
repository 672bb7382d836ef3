//! Countdown fill bar.
//!
//! Shows how much of a countdown is left. The bar empties from the right
//! as time runs out and changes colour as it gets low.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Widget},
};
use unicode_width::UnicodeWidthStr;

/// Fill bar for a ratio in `0.0..=1.0`.
pub struct ProgressBar<'a> {
    /// Optional block to display around the bar
    block: Option<Block<'a>>,
    /// Fraction filled
    ratio: f64,
    /// Style for the filled portion
    style: Style,
    /// Style for the empty portion
    empty_style: Style,
    symbol_filled: &'a str,
    symbol_empty: &'a str,
    /// Optional label centred on the bar
    label: Option<String>,
    /// Colour by remaining fraction instead of `style`
    dynamic_style: bool,
}

impl<'a> Default for ProgressBar<'a> {
    fn default() -> Self {
        Self {
            block: None,
            ratio: 0.0,
            style: Style::default().fg(Color::Green),
            empty_style: Style::default().fg(Color::DarkGray),
            symbol_filled: "█",
            symbol_empty: "░",
            label: None,
            dynamic_style: false,
        }
    }
}

impl<'a> ProgressBar<'a> {
    /// Create a bar filled to `ratio`, clamped to `0.0..=1.0`.
    pub fn new(ratio: f64) -> Self {
        let ratio = if ratio.is_finite() { ratio.clamp(0.0, 1.0) } else { 0.0 };
        Self {
            ratio,
            ..Default::default()
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn empty_style(mut self, style: Style) -> Self {
        self.empty_style = style;
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn dynamic_style(mut self, enabled: bool) -> Self {
        self.dynamic_style = enabled;
        self
    }

    /// Style of the filled portion; turns yellow then red as the bar empties.
    fn fill_style(&self) -> Style {
        if !self.dynamic_style {
            return self.style;
        }

        match (self.ratio * 100.0).round() as u8 {
            0..=10 => Style::default().fg(Color::Red),
            11..=30 => Style::default().fg(Color::Yellow),
            _ => Style::default().fg(Color::Green),
        }
    }

    /// Number of filled cells in a bar `width` cells wide.
    fn filled_width(&self, width: u16) -> u16 {
        ((width as f64) * self.ratio).round() as u16
    }
}

impl<'a> Widget for ProgressBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height < 1 {
            return;
        }

        let render_area = match self.block {
            Some(ref block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        if render_area.width < 1 || render_area.height < 1 {
            return;
        }

        let filled_width = self.filled_width(render_area.width);
        let style = self.fill_style();
        let split = render_area.left().saturating_add(filled_width);

        for y in render_area.top()..render_area.bottom() {
            for x in render_area.left()..split {
                buf.get_mut(x, y).set_symbol(self.symbol_filled).set_style(style);
            }
            for x in split..render_area.right() {
                buf.get_mut(x, y).set_symbol(self.symbol_empty).set_style(self.empty_style);
            }
        }

        let Some(label) = &self.label else {
            return;
        };
        let label_width = label.width() as u16;
        if label_width >= render_area.width {
            return;
        }

        let text_x = render_area.left() + (render_area.width - label_width) / 2;
        let text_y = render_area.top() + render_area.height / 2;
        let text_style = Style::default().fg(Color::White).bg(Color::Black);
        buf.set_string(text_x, text_y, label, text_style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.5, 5)]
    #[case(1.0, 10)]
    #[case(2.0, 10)]
    #[case(-1.0, 0)]
    #[case(f64::NAN, 0)]
    fn fills_proportionally(#[case] ratio: f64, #[case] expected: u16) {
        assert_eq!(ProgressBar::new(ratio).filled_width(10), expected);
    }

    #[test]
    fn dynamic_style_warns_when_low() {
        let low = ProgressBar::new(0.05).dynamic_style(true).fill_style();
        let high = ProgressBar::new(0.9).dynamic_style(true).fill_style();
        assert_eq!(low.fg, Some(Color::Red));
        assert_eq!(high.fg, Some(Color::Green));
    }

    #[test]
    fn static_styles_apply_when_not_dynamic() {
        let area = Rect::new(0, 0, 4, 1);
        let mut buf = Buffer::empty(area);
        ProgressBar::new(0.5)
            .style(Style::default().fg(Color::Yellow))
            .empty_style(Style::default().fg(Color::Blue))
            .render(area, &mut buf);

        assert_eq!(buf.get(0, 0).fg, Color::Yellow);
        assert_eq!(buf.get(3, 0).fg, Color::Blue);
    }

    #[test]
    fn draws_label_in_the_middle() {
        let area = Rect::new(0, 0, 20, 1);
        let mut buf = Buffer::empty(area);
        ProgressBar::new(0.5).label("50%").render(area, &mut buf);

        let symbols: String = (0..20).map(|x| buf.get(x, 0).symbol().to_string()).collect();
        assert_eq!(symbols, "████████50%░░░░░░░░░");
    }
}
