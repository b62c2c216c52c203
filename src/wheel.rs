//! Configuration and rasterization of hue wheels.
//!
//! A hue wheel is an annulus whose color at every point is determined by the point's polar angle,
//! at a fixed saturation and lightness. Rendering is a pure function of the [`WheelConfig`]: each
//! pixel only depends on its own coordinates, so rows may be rendered in any order, or in
//! parallel.

#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]

use crate::colors::hsl_to_rgb;
use crate::error::{Error, Result};
use crate::hue::{get_hue, normalize_degrees, Direction};
use crate::image::Image;
use crate::pixel::{Pixel, Rgba};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// The angle, in degrees, at which red is placed when no other angle is given.
pub const DEFAULT_RED_START: f64 = 90.0;

/// The saturation used when no other saturation is given.
pub const DEFAULT_SATURATION: f64 = 1.0;

/// The lightness used when no other lightness is given.
pub const DEFAULT_LIGHTNESS: f64 = 0.5;

/// The opacity used when no other opacity is given.
pub const DEFAULT_OPACITY: u8 = 255;

/// Describes a hue wheel to render.
///
/// The wheel is centered in a square buffer with a side length of `2 * outer_radius`, where
/// `outer_radius = inner_radius + thickness`. Radii are in device pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WheelConfig {
    /// The radius of the hole in the middle of the wheel. Must not be negative.
    pub inner_radius: f64,
    /// The width of the ring. Must be positive.
    pub thickness: f64,
    /// The angle in degrees, counterclockwise from the positive x-axis, at which the hue is 0
    /// (red). Any value is accepted and normalized. Defaults to [`DEFAULT_RED_START`].
    pub red_start: f64,
    /// The order in which hues progress around the wheel.
    pub direction: Direction,
    /// The saturation of every pixel, between 0.0 and 1.0. Defaults to 1.0.
    pub saturation: f64,
    /// The lightness of every pixel, between 0.0 and 1.0. Defaults to 0.5.
    pub lightness: f64,
    /// The alpha written to every pixel of the ring. Defaults to 255.
    pub opacity: u8,
}

impl WheelConfig {
    /// Creates a new configuration with the given radii. All other fields take their defaults.
    #[must_use]
    pub const fn new(inner_radius: f64, thickness: f64) -> Self {
        Self {
            inner_radius,
            thickness,
            red_start: DEFAULT_RED_START,
            direction: Direction::ClockwiseRbg,
            saturation: DEFAULT_SATURATION,
            lightness: DEFAULT_LIGHTNESS,
            opacity: DEFAULT_OPACITY,
        }
    }

    /// Sets the angle, in degrees, at which red is placed.
    #[must_use]
    pub const fn with_red_start(mut self, red_start: f64) -> Self {
        self.red_start = red_start;
        self
    }

    /// Sets the direction of the hue progression.
    #[must_use]
    pub const fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Sets the saturation of the wheel.
    #[must_use]
    pub const fn with_saturation(mut self, saturation: f64) -> Self {
        self.saturation = saturation;
        self
    }

    /// Sets the lightness of the wheel.
    #[must_use]
    pub const fn with_lightness(mut self, lightness: f64) -> Self {
        self.lightness = lightness;
        self
    }

    /// Sets the opacity of the ring.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: u8) -> Self {
        self.opacity = opacity;
        self
    }

    /// Returns the outer radius of the ring, `inner_radius + thickness`.
    #[inline]
    #[must_use]
    pub fn outer_radius(&self) -> f64 {
        self.inner_radius + self.thickness
    }

    /// Returns the side length, in pixels, of the square buffer the wheel is rendered into.
    #[inline]
    #[must_use]
    pub fn side_length(&self) -> u32 {
        (2.0 * self.outer_radius()).ceil() as u32
    }

    /// Returns the length, in bytes, of the RGBA buffer the wheel is rendered into.
    ///
    /// Saturates at `usize::MAX` for wheels too large to address, which [`Self::validate`]
    /// rejects.
    #[inline]
    #[must_use]
    pub fn buffer_len(&self) -> usize {
        self.checked_buffer_len().unwrap_or(usize::MAX)
    }

    /// Returns the length, in bytes, of the RGBA buffer the wheel is rendered into, or `None` if
    /// it does not fit in a `usize`.
    #[must_use]
    pub fn checked_buffer_len(&self) -> Option<usize> {
        let side = self.side_length() as usize;

        side.checked_mul(side)?.checked_mul(Rgba::CHANNELS)
    }

    /// Returns this configuration with both radii multiplied by `factor`, usually a display's
    /// device pixel ratio.
    #[must_use]
    pub fn scaled(mut self, factor: f64) -> Self {
        self.inner_radius *= factor;
        self.thickness *= factor;
        self
    }

    /// Checks that this configuration describes a ring.
    ///
    /// Saturation and lightness outside of `[0, 1]` are accepted, but produce colors that are
    /// not meaningful.
    ///
    /// # Errors
    /// * [`Error::InvalidConfig`] if the inner radius is negative, the thickness is not positive,
    ///   either is not finite, or the wheel is too large to be held in a buffer.
    pub fn validate(&self) -> Result<()> {
        if !self.inner_radius.is_finite() || self.inner_radius < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "inner radius must be a non-negative number, got {}",
                self.inner_radius
            )));
        }
        if !self.thickness.is_finite() || self.thickness <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "thickness must be a positive number, got {}",
                self.thickness
            )));
        }
        if 2.0 * self.outer_radius() > u32::MAX as f64 || self.checked_buffer_len().is_none() {
            return Err(Error::InvalidConfig(format!(
                "outer radius {} is too large to render",
                self.outer_radius()
            )));
        }
        if !(0.0..=1.0).contains(&self.saturation) || !(0.0..=1.0).contains(&self.lightness) {
            log::warn!(
                "saturation {} and lightness {} should be within [0, 1]",
                self.saturation,
                self.lightness
            );
        }

        Ok(())
    }

    /// Renders this wheel into a new, otherwise transparent image.
    ///
    /// # Errors
    /// * [`Error::InvalidConfig`] if the configuration is invalid. See [`Self::validate`].
    pub fn render_image(&self) -> Result<Image<Rgba>> {
        self.validate()?;

        let side = self.side_length();
        let mut buffer = vec![0; self.buffer_len()];
        rasterize(self, &mut buffer, side);

        Image::from_rgba_bytes(side, side, &buffer)
    }
}

/// Renders the wheel described by `config` into `buffer`.
///
/// `buffer` holds RGBA bytes, four per pixel, row-major, for a square of `side_length` pixels,
/// which must equal [`WheelConfig::side_length`]. Every pixel whose squared distance from the
/// center lies within `[inner_radius², outer_radius²]` is overwritten; all other pixels are left
/// untouched, so the buffer should be cleared beforehand if transparency is wanted.
///
/// # Errors
/// * [`Error::InvalidConfig`] if the configuration is invalid. See [`WheelConfig::validate`].
/// * [`Error::IncompatibleImageData`] if `side_length` or the length of `buffer` does not match
///   the configuration.
pub fn render(config: &WheelConfig, buffer: &mut [u8], side_length: u32) -> Result<()> {
    config.validate()?;

    let side = config.side_length();
    if side_length != side || buffer.len() != config.buffer_len() {
        return Err(Error::IncompatibleImageData {
            width: side_length,
            height: side_length,
            received: buffer.len(),
        });
    }
    rasterize(config, buffer, side);
    Ok(())
}

/// Runs the per-pixel loop over an already validated configuration and buffer.
pub(crate) fn rasterize(config: &WheelConfig, buffer: &mut [u8], side: u32) {
    if side == 0 {
        return;
    }

    let row_len = side as usize * Rgba::CHANNELS;

    #[cfg(feature = "rayon")]
    let written: usize = buffer
        .par_chunks_mut(row_len)
        .enumerate()
        .map(|(row, pixels)| render_row(config, row, pixels))
        .sum();

    #[cfg(not(feature = "rayon"))]
    let written: usize = buffer
        .chunks_mut(row_len)
        .enumerate()
        .map(|(row, pixels)| render_row(config, row, pixels))
        .sum();

    log::debug!(
        "rendered {side}x{side} wheel (inner radius {}, thickness {}): {written} pixels written",
        config.inner_radius,
        config.thickness
    );
}

/// Renders a single row of the buffer, returning the number of pixels written.
fn render_row(config: &WheelConfig, row: usize, pixels: &mut [u8]) -> usize {
    let outer = config.outer_radius();
    let outer_sq = outer * outer;
    let inner_sq = config.inner_radius * config.inner_radius;

    // rows grow downwards, so y is negated before taking the angle
    let y = row as f64 - outer;
    let mut written = 0;

    for (col, pixel) in pixels.chunks_exact_mut(Rgba::CHANNELS).enumerate() {
        let x = col as f64 - outer;
        let squared_d = x * x + y * y;
        if squared_d > outer_sq || squared_d < inner_sq {
            continue;
        }

        let theta = normalize_degrees(360.0 + (-y).atan2(x).to_degrees());
        let hue = get_hue(config.red_start, theta, config.direction);

        hsl_to_rgb(hue, config.saturation, config.lightness)
            .with_alpha(config.opacity)
            .write_to(pixel);
        written += 1;
    }

    written
}

/// Returns the number of pixels a wheel with this configuration covers, without rendering it.
#[must_use]
pub fn count_ring_pixels(config: &WheelConfig) -> usize {
    let outer = config.outer_radius();
    let outer_sq = outer * outer;
    let inner_sq = config.inner_radius * config.inner_radius;
    let side = config.side_length();

    (0..side)
        .map(|row| {
            let y = row as f64 - outer;

            (0..side)
                .filter(|&col| {
                    let x = col as f64 - outer;
                    let squared_d = x * x + y * y;

                    squared_d <= outer_sq && squared_d >= inner_sq
                })
                .count()
        })
        .sum()
}
