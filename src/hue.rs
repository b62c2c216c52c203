//! Maps angular positions on the wheel to hues.

/// The full turn of the wheel, in degrees.
pub const FULL_TURN: f64 = 360.0;

/// The order in which the primary colors appear when walking the wheel counterclockwise.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Red, then blue, then green. The angle is only offset, never reflected.
    ///
    /// This is style `0`, and is the default.
    #[default]
    ClockwiseRbg,
    /// Red, then green, then blue. The angle is reflected about the red start before it is
    /// offset.
    ///
    /// This is style `1`.
    ClockwiseRgb,
}

impl Direction {
    /// Resolves a numeric style code. `1` is [`Direction::ClockwiseRgb`], every other code is
    /// [`Direction::ClockwiseRbg`].
    #[must_use]
    pub const fn from_style(style: u8) -> Self {
        match style {
            1 => Self::ClockwiseRgb,
            _ => Self::ClockwiseRbg,
        }
    }

    /// Returns the numeric style code of this direction.
    #[must_use]
    pub const fn style(&self) -> u8 {
        match self {
            Self::ClockwiseRbg => 0,
            Self::ClockwiseRgb => 1,
        }
    }
}

/// Wraps an angle in degrees into `[0, 360)`.
#[inline]
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let angle = angle.rem_euclid(FULL_TURN);

    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if angle >= FULL_TURN {
        0.0
    } else {
        angle
    }
}

/// Returns the hue, in degrees, of the point at polar angle `theta` on a wheel whose red is
/// centered at `red_start`.
///
/// Both angles are in degrees, measured counterclockwise from the positive x-axis, and may be
/// any finite value. A `theta` of exactly 0 is treated as 1.
///
/// The result is always in `[0, 360)`.
#[must_use]
pub fn get_hue(red_start: f64, theta: f64, direction: Direction) -> f64 {
    let theta = if theta == 0.0 { 1.0 } else { theta };

    let theta = match direction {
        Direction::ClockwiseRgb => normalize_degrees(FULL_TURN + 2.0 * red_start - theta),
        Direction::ClockwiseRbg => theta,
    };

    normalize_degrees(FULL_TURN + theta - red_start)
}
