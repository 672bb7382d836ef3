//! Analog dial widget.
//!
//! Draws a round face with hour marks and any number of hands on a braille
//! canvas. Each hand is given as a rotation in degrees, as produced by
//! [`crate::state::hand_angle`], and pivots on the dial centre.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Color,
    symbols::Marker,
    widgets::{
        canvas::{Canvas, Circle, Line, Points},
        Block, Widget,
    },
};

use crate::state::hand_endpoint;

/// Radius of the face in canvas units.
const FACE_RADIUS: f64 = 1.0;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// A single hand.
#[derive(Debug, Clone, Copy)]
pub struct Hand {
    /// Rotation in degrees, counter-clockwise from 12 o'clock.
    pub angle: f64,
    /// Length as a fraction of the face radius.
    pub length: f64,
    pub color: Color,
}

/// Analog dial with hands.
pub struct Dial<'a> {
    block: Option<Block<'a>>,
    hands: Vec<Hand>,
    face_color: Color,
}

impl<'a> Default for Dial<'a> {
    fn default() -> Self {
        Self {
            block: None,
            hands: Vec::new(),
            face_color: Color::DarkGray,
        }
    }
}

impl<'a> Dial<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn face_color(mut self, color: Color) -> Self {
        self.face_color = color;
        self
    }

    /// Add a hand. Later hands draw on top of earlier ones.
    pub fn hand(mut self, angle: f64, length: f64, color: Color) -> Self {
        self.hands.push(Hand {
            angle,
            length: length.clamp(0.0, 1.0),
            color,
        });
        self
    }
}

/// Tip positions of the twelve hour marks.
fn hour_marks() -> Vec<(f64, f64)> {
    (0..12)
        .map(|hour| hand_endpoint(hour as f64 * 30.0, FACE_RADIUS * 0.9))
        .collect()
}

/// Horizontal canvas span that keeps the face round in `area`.
fn x_span(area: Rect) -> f64 {
    if area.height == 0 {
        return FACE_RADIUS;
    }
    let ratio = area.width as f64 / (area.height as f64 * CELL_ASPECT);
    (FACE_RADIUS * 1.1 * ratio).max(FACE_RADIUS * 1.1)
}

impl<'a> Widget for Dial<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };

        if area.width < 2 || area.height < 2 {
            return;
        }

        let span = x_span(area);
        let marks = hour_marks();
        let face_color = self.face_color;
        let hands = self.hands;

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([-span, span])
            .y_bounds([-FACE_RADIUS * 1.1, FACE_RADIUS * 1.1])
            .paint(|ctx| {
                ctx.draw(&Circle {
                    x: 0.0,
                    y: 0.0,
                    radius: FACE_RADIUS,
                    color: face_color,
                });
                ctx.draw(&Points {
                    coords: &marks,
                    color: face_color,
                });
                for hand in &hands {
                    let (x, y) = hand_endpoint(hand.angle, hand.length * FACE_RADIUS);
                    ctx.draw(&Line {
                        x1: 0.0,
                        y1: 0.0,
                        x2: x,
                        y2: y,
                        color: hand.color,
                    });
                }
            })
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marks_sit_inside_face() {
        let marks = hour_marks();
        assert_eq!(marks.len(), 12);
        for (x, y) in marks {
            assert!((x * x + y * y).sqrt() <= FACE_RADIUS);
        }
    }

    #[test]
    fn span_widens_for_wide_areas() {
        assert!(x_span(Rect::new(0, 0, 80, 10)) > x_span(Rect::new(0, 0, 20, 10)));
        assert_eq!(x_span(Rect::new(0, 0, 10, 0)), FACE_RADIUS);
    }

    #[test]
    fn renders_something_into_the_buffer() {
        let area = Rect::new(0, 0, 30, 15);
        let mut buf = Buffer::empty(area);
        Dial::new().hand(270.0, 0.8, Color::Red).render(area, &mut buf);

        assert_ne!(buf, Buffer::empty(area));
    }
}
