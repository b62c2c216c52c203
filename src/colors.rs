//! Conversions between the HSL and RGB color models, plus a few named color constants.
//!
//! [`hsl_to_rgb`] is on the hot path of wheel rendering: it is called once for every pixel in
//! the ring. [`rgb_to_hsl`] is the inverse, quantized to steps of 5 so that converted values land
//! on a stable grid.

#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]

use crate::pixel::{Hsl, Rgb};

/// Represents the color `#ff0000`, also known as `red`.
pub const RED: Rgb = Rgb::new(255, 0, 0);

/// Represents the color `#00ff00`, also known as `lime`.
pub const GREEN: Rgb = Rgb::new(0, 255, 0);

/// Represents the color `#0000ff`, also known as `blue`.
pub const BLUE: Rgb = Rgb::new(0, 0, 255);

/// Represents the color `#000000`, also known as `black`.
pub const BLACK: Rgb = Rgb::black();

/// Represents the color `#ffffff`, also known as `white`.
pub const WHITE: Rgb = Rgb::white();

/// Step, in degrees or percent, that [`rgb_to_hsl`] snaps its output to.
pub const QUANTIZATION_STEP: f64 = 5.0;

/// Converts an HSL color into RGB.
///
/// `hue` is in degrees and should lie in `[0, 360]`. `saturation` and `lightness` should lie in
/// `[0, 1]`; values outside of that are accepted but produce meaningless colors. Hues in
/// `[360, 420)` reuse the magenta-to-red sector, which is exactly red at 360. Negative hues and
/// hues of 420 and beyond yield black.
///
/// Channels are truncated, not rounded, after scaling to `[0, 255]`.
#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = chroma * (1.0 - (h % 2.0 - 1.0).abs());
    let m = lightness - chroma / 2.0;

    let sector = h.floor();
    if !(0.0..=6.0).contains(&sector) {
        return BLACK;
    }

    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        // x is 0 at hue 360, so this is still red there
        _ => (chroma, 0.0, x),
    };

    // `as u8` saturates, so out of domain input clamps to [0, 255]
    let channel = |c: f64| ((c + m) * 255.0).floor() as u8;
    Rgb::new(channel(r), channel(g), channel(b))
}

/// Converts an RGB color into HSL.
///
/// The hue is snapped to the nearest multiple of 5 degrees, and saturation and lightness to the
/// nearest multiple of 5 percent, using [`round_half_up`]. A hue that snaps to 360 wraps to 0.
/// Achromatic colors have a hue of 0.
#[must_use]
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> Hsl {
    let r = f64::from(r) / 255.0;
    let g = f64::from(g) / 255.0;
    let b = f64::from(b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    let lightness = (max + min) / 2.0;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    let saturation = if max == 0.0 || min == 1.0 {
        0.0
    } else {
        (max - lightness) / lightness.min(1.0 - lightness)
    };

    Hsl::new(
        quantize(hue) % 360.0,
        quantize(saturation * 100.0) / 100.0,
        quantize(lightness * 100.0) / 100.0,
    )
}

fn quantize(value: f64) -> f64 {
    round_half_up(value / QUANTIZATION_STEP) as f64 * QUANTIZATION_STEP
}

/// Rounds `value` to an integer, moving the rounding boundary with `threshold`.
///
/// The value is rounded up when `value + (10 - threshold) / 10` reaches its ceiling, and down
/// otherwise. A threshold of 5 is ordinary round-half-up; larger thresholds round up less often.
#[must_use]
pub fn round_up(value: f64, threshold: f64) -> i64 {
    let add = (10.0 - threshold) / 10.0;
    let ceil = value.ceil();

    if value + add >= ceil {
        ceil as i64
    } else {
        value.floor() as i64
    }
}

/// Shorthand for [`round_up`] with a threshold of 5.
#[inline]
#[must_use]
pub fn round_half_up(value: f64) -> i64 {
    round_up(value, 5.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_up_threshold() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(2.49), 2);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(4.0), 4);

        // a higher threshold needs a larger fraction before rounding up
        assert_eq!(round_up(2.6, 7.0), 2);
        assert_eq!(round_up(2.7, 7.0), 3);
        assert_eq!(round_up(2.1, 1.0), 3);
    }

    #[test]
    fn test_sector_six_is_red() {
        assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), RED);
    }

    #[test]
    fn test_sector_six_continues_sector_five() {
        assert_eq!(hsl_to_rgb(390.0, 1.0, 0.5), Rgb::new(255, 0, 127));
        assert_eq!(hsl_to_rgb(390.0, 1.0, 0.5), hsl_to_rgb(330.0, 1.0, 0.5));
        assert_eq!(hsl_to_rgb(419.9, 1.0, 0.5).b, 254);
    }

    #[test]
    fn test_out_of_range_hue_is_black() {
        assert_eq!(hsl_to_rgb(-10.0, 1.0, 0.5), BLACK);
        assert_eq!(hsl_to_rgb(420.0, 1.0, 0.5), BLACK);
        assert_eq!(hsl_to_rgb(-0.01, 1.0, 0.5), BLACK);
    }

    #[test]
    fn test_achromatic() {
        assert_eq!(hsl_to_rgb(200.0, 0.0, 1.0), WHITE);
        assert_eq!(hsl_to_rgb(200.0, 0.0, 0.0), BLACK);

        let hsl = rgb_to_hsl(255, 255, 255);
        assert_eq!(hsl, Hsl::new(0.0, 0.0, 1.0));
        let hsl = rgb_to_hsl(0, 0, 0);
        assert_eq!(hsl, Hsl::new(0.0, 0.0, 0.0));
    }
}
