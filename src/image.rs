use crate::error::{Error, Result};
use crate::pixel::{Pixel, Rgba};

#[cfg(feature = "png")]
use std::{fs::File, io::Write, path::Path};

/// A high-level, owned image representation.
///
/// Pixels are stored row-major with the origin at the top-left corner.
#[derive(Clone, Debug)]
pub struct Image<P: Pixel = Rgba> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<P>,
}

impl<P: Pixel> Image<P> {
    /// Creates a new image with the given width and height, with all pixels being set
    /// initially to `fill`.
    #[must_use]
    pub fn new(width: u32, height: u32, fill: P) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        }
    }

    #[inline]
    #[must_use]
    const fn resolve_coordinate(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Returns the width of the image.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Returns the height of the image.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions of the image.
    #[inline]
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the amount of pixels in the image.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Returns true if the image contains no pixels.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns a Vec of slices representing the pixels of the image.
    /// Each slice in the Vec is a row.
    #[must_use]
    pub fn pixels(&self) -> Vec<&[P]> {
        if self.width == 0 {
            return Vec::new();
        }

        self.data.chunks_exact(self.width as usize).collect()
    }

    /// Returns a reference of the pixel at the given coordinates.
    ///
    /// # Panics
    /// * If the coordinates are out of bounds.
    #[inline]
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> &P {
        &self.data[self.resolve_coordinate(x, y)]
    }

    /// Returns a reference of the pixel at the given coordinates, or `None` if they are out of
    /// bounds.
    #[inline]
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<&P> {
        if x >= self.width || y >= self.height {
            return None;
        }

        self.data.get(self.resolve_coordinate(x, y))
    }

    /// Returns the raw bytes of this image, [`Pixel::CHANNELS`] bytes per pixel.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = vec![0; self.data.len() * P::CHANNELS];

        for (pixel, out) in self.data.iter().zip(bytes.chunks_exact_mut(P::CHANNELS)) {
            pixel.write_to(out);
        }
        bytes
    }
}

impl Image<Rgba> {
    /// Creates an image from raw RGBA bytes, four per pixel, row-major.
    ///
    /// # Errors
    /// * [`Error::IncompatibleImageData`] if `bytes` does not hold exactly `width * height`
    ///   pixels.
    pub fn from_rgba_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        if bytes.len() != width as usize * height as usize * Rgba::CHANNELS {
            return Err(Error::IncompatibleImageData {
                width,
                height,
                received: bytes.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data: bytes
                .chunks_exact(Rgba::CHANNELS)
                .map(Rgba::from_bytes)
                .collect(),
        })
    }

    /// Copies raw RGBA bytes into this image with their top-left corner at `(0, 0)`.
    ///
    /// Bytes that fall outside of this image are ignored.
    ///
    /// # Errors
    /// * [`Error::IncompatibleImageData`] if `bytes` does not hold exactly `width * height`
    ///   pixels.
    pub fn put_rgba_bytes(&mut self, bytes: &[u8], width: u32, height: u32) -> Result<()> {
        if bytes.len() != width as usize * height as usize * Rgba::CHANNELS {
            return Err(Error::IncompatibleImageData {
                width,
                height,
                received: bytes.len(),
            });
        }
        if width == 0 {
            return Ok(());
        }

        let visible = width.min(self.width) as usize;
        for (y, row) in bytes
            .chunks_exact(width as usize * Rgba::CHANNELS)
            .take(self.height as usize)
            .enumerate()
        {
            let start = self.resolve_coordinate(0, y as u32);

            for (dst, src) in self.data[start..start + visible]
                .iter_mut()
                .zip(row.chunks_exact(Rgba::CHANNELS))
            {
                *dst = Rgba::from_bytes(src);
            }
        }

        Ok(())
    }

    /// Encodes this image as a PNG into the given writer.
    ///
    /// # Errors
    /// * [`Error::EmptyImageError`] if the image has no pixels.
    /// * Any encoding or IO error raised while writing.
    #[cfg(feature = "png")]
    pub fn encode(&self, dest: &mut impl Write) -> Result<()> {
        crate::encodings::png::PngEncoder::encode(self, dest)
    }

    /// Saves this image as a PNG file at the given path.
    ///
    /// # Errors
    /// * Same as [`Self::encode`], plus any error raised when creating the file.
    #[cfg(feature = "png")]
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;

        self.encode(&mut file)
    }
}
