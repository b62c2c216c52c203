use crate::{Error, Image, Result, Rgba};

use std::io::Write;

/// A PNG encoder interface around [`png::Encoder`].
///
/// Images are always written as 8-bit RGBA, so transparency outside of a rendered ring is kept.
pub struct PngEncoder;

impl PngEncoder {
    /// Encodes the given image as a PNG into the given writer.
    ///
    /// # Errors
    /// * [`Error::EmptyImageError`] if the image has no pixels.
    /// * Any error raised by the underlying encoder or writer.
    pub fn encode<W: Write>(image: &Image<Rgba>, dest: W) -> Result<()> {
        if image.is_empty() {
            return Err(Error::EmptyImageError);
        }

        let mut encoder = png::Encoder::new(dest, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.to_bytes())?;
        writer.finish()?;

        Ok(())
    }
}
