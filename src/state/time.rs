//! Time values and the time-to-angle conversion shared by every dial.

use std::fmt;

/// Seconds per minute and minutes per hour.
pub const SEXAGESIMAL: u32 = 60;

/// Cycle length of the hour hand on a 12-hour dial.
pub const DIAL_HOURS: f64 = 12.0;

/// A duration or wall-clock reading split into display fields.
///
/// `seconds` carries the sub-second part as a fraction so that both the
/// stopwatch (which counts up) and the timer (which counts down by a
/// floating-point delta) can share the type. Minutes and whole seconds
/// always stay below 60.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimeValue {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: f64,
}

impl TimeValue {
    pub const ZERO: TimeValue = TimeValue {
        hours: 0,
        minutes: 0,
        seconds: 0.0,
    };

    /// Build a value from raw fields, carrying overflow upwards.
    pub fn new(hours: u32, minutes: u32, seconds: f64) -> Self {
        let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
        let carry_minutes = (seconds / SEXAGESIMAL as f64).floor();
        let seconds = seconds - carry_minutes * SEXAGESIMAL as f64;
        let minutes = minutes.saturating_add(carry_minutes as u32);

        Self {
            hours: hours.saturating_add(minutes / SEXAGESIMAL),
            minutes: minutes % SEXAGESIMAL,
            seconds,
        }
    }

    /// Decompose a number of seconds.
    pub fn from_total_seconds(total: f64) -> Self {
        Self::new(0, 0, total)
    }

    /// Total length in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.hours as f64 * 3600.0 + self.minutes as f64 * 60.0 + self.seconds
    }

    /// Whole seconds field, 0..=59.
    pub fn whole_seconds(&self) -> u32 {
        (self.seconds.floor() as u32).min(SEXAGESIMAL - 1)
    }

    /// Hundredths of a second, 0..=99.
    pub fn centiseconds(&self) -> u32 {
        ((self.seconds.fract() * 100.0).floor() as u32).min(99)
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() <= 0.0
    }
}

impl fmt::Display for TimeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours,
            self.minutes,
            self.whole_seconds()
        )
    }
}

/// Rotation of a hand showing `value` on a dial with `cycle` divisions.
///
/// Hands turn clockwise, so the angle is negative and then wrapped into
/// `[0, 360)`. A zero cycle yields zero.
pub fn hand_angle(value: f64, cycle: f64) -> f64 {
    if cycle <= 0.0 || !value.is_finite() {
        return 0.0;
    }

    let angle = (-360.0 * (value / cycle)).rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs,
    // and keeps the sign of -0.0.
    if angle >= 360.0 || angle == 0.0 {
        0.0
    } else {
        angle
    }
}

/// Offset of a hand tip from the dial anchor.
///
/// Zero degrees points at 12 o'clock and positive angles rotate
/// counter-clockwise, matching [`hand_angle`].
pub fn hand_endpoint(angle: f64, length: f64) -> (f64, f64) {
    let radians = angle.to_radians();
    (-radians.sin() * length, radians.cos() * length)
}

/// Parse a text field as a whole number, treating anything unparsable as zero.
pub fn parse_or_zero(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[rstest]
    #[case(0.0, 60.0, 0.0)]
    #[case(15.0, 60.0, 270.0)]
    #[case(30.0, 60.0, 180.0)]
    #[case(45.0, 60.0, 90.0)]
    #[case(3.0, 12.0, 270.0)]
    #[case(6.0, 12.0, 180.0)]
    #[case(1.0, 60.0, 354.0)]
    fn angle_runs_clockwise(#[case] t: f64, #[case] m: f64, #[case] expected: f64) {
        assert!(approx(hand_angle(t, m), expected), "{} != {}", hand_angle(t, m), expected);
    }

    #[test]
    fn angle_stays_in_range_for_whole_cycle() {
        for m in [12u32, 24, 60] {
            for t in 0..m {
                let angle = hand_angle(t as f64, m as f64);
                assert!((0.0..360.0).contains(&angle));
                let expected = (-360.0 * t as f64 / m as f64).rem_euclid(360.0);
                assert!(approx(angle, if expected >= 360.0 { 0.0 } else { expected }));
            }
        }
    }

    #[test]
    fn zero_angle_is_positive_zero() {
        let angle = hand_angle(0.0, 60.0);
        assert_eq!(angle.to_bits(), 0.0f64.to_bits());
        assert_eq!(hand_angle(60.0, 60.0), 0.0);
        assert_eq!(hand_angle(5.0, 0.0), 0.0);
    }

    #[test]
    fn endpoint_points_at_three_oclock() {
        let (x, y) = hand_endpoint(hand_angle(15.0, 60.0), 1.0);
        assert!(approx(x, 1.0));
        assert!(approx(y, 0.0));

        let (x, y) = hand_endpoint(0.0, 2.0);
        assert!(approx(x, 0.0));
        assert!(approx(y, 2.0));
    }

    #[test]
    fn new_carries_overflow() {
        let value = TimeValue::new(1, 75, 130.5);
        assert_eq!(value.hours, 2);
        assert_eq!(value.minutes, 17);
        assert!(approx(value.seconds, 10.5));
        assert_eq!(value.to_string(), "02:17:10");
    }

    #[test]
    fn total_seconds_uses_full_hours() {
        assert_eq!(TimeValue::new(1, 0, 0.0).total_seconds(), 3600.0);
        assert_eq!(TimeValue::new(0, 2, 5.0).total_seconds(), 125.0);
    }

    #[rstest]
    #[case("12", 12)]
    #[case(" 7 ", 7)]
    #[case("", 0)]
    #[case("abc", 0)]
    #[case("-3", 0)]
    fn parses_or_falls_back_to_zero(#[case] raw: &str, #[case] expected: u32) {
        assert_eq!(parse_or_zero(raw), expected);
    }
}
