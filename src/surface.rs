//! The interface to whatever eventually displays a rendered wheel.
//!
//! Rendering itself never touches a surface. [`draw_wheel`] is the glue: it sizes the surface for
//! the display's pixel density, renders into a fresh buffer and commits that buffer.

use crate::error::{Error, Result};
use crate::image::Image;
use crate::pixel::Rgba;
use crate::wheel::{rasterize, WheelConfig};

/// A drawable surface that rendered wheels can be committed to.
pub trait Surface {
    /// The number of device pixels per logical pixel of this surface.
    fn device_pixel_ratio(&self) -> f64 {
        1.0
    }

    /// Resizes the surface, in device pixels.
    ///
    /// # Errors
    /// * If the surface cannot be resized.
    fn resize(&mut self, width: u32, height: u32) -> Result<()>;

    /// Copies RGBA bytes, four per pixel and row-major, onto the surface with their top-left
    /// corner at `(0, 0)`.
    ///
    /// # Errors
    /// * If the data cannot be committed, usually because its size does not match.
    fn put_image_data(&mut self, data: &[u8], width: u32, height: u32) -> Result<()>;
}

impl Surface for Image<Rgba> {
    fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        log::trace!("resizing image surface to {width}x{height}");

        *self = Self::new(width, height, Rgba::transparent());
        Ok(())
    }

    fn put_image_data(&mut self, data: &[u8], width: u32, height: u32) -> Result<()> {
        self.put_rgba_bytes(data, width, height)
    }
}

/// Draws the wheel described by `config`, whose radii are in logical pixels, onto `surface`.
///
/// The radii are scaled by the surface's device pixel ratio, the surface is resized to hold the
/// scaled wheel, and the rendered buffer is committed at `(0, 0)`.
///
/// # Errors
/// * [`Error::InvalidConfig`] if the configuration, or the device pixel ratio, is invalid.
/// * Any error raised by the surface.
pub fn draw_wheel<S: Surface + ?Sized>(surface: &mut S, config: &WheelConfig) -> Result<()> {
    let ratio = surface.device_pixel_ratio();
    if !ratio.is_finite() || ratio <= 0.0 {
        return Err(Error::InvalidConfig(format!(
            "device pixel ratio must be a positive number, got {ratio}"
        )));
    }

    let config = config.scaled(ratio);
    config.validate()?;

    let side = config.side_length();
    surface.resize(side, side)?;

    let mut buffer = vec![0; config.buffer_len()];
    rasterize(&config, &mut buffer, side);

    surface.put_image_data(&buffer, side, side)
}
