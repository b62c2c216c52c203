use crate::colors::{hsl_to_rgb, rgb_to_hsl};

/// Represents any type of pixel that can be stored in an image.
pub trait Pixel: Copy + Clone + Default + PartialEq + Eq {
    /// The amount of bytes, or channels, this pixel occupies in a raw buffer.
    const CHANNELS: usize;

    /// Returns the alpha, or opacity level of the pixel.
    ///
    /// This is a value between 0 and 255.
    /// 0 is completely transparent, and 255 is completely opaque.
    fn alpha(&self) -> u8;

    /// Writes the channels of this pixel into the start of the given slice.
    ///
    /// # Panics
    /// * If `out` is shorter than [`Self::CHANNELS`].
    fn write_to(&self, out: &mut [u8]);
}

/// Represents an RGB pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// The red component of the pixel.
    pub r: u8,
    /// The green component of the pixel.
    pub g: u8,
    /// The blue component of the pixel.
    pub b: u8,
}

impl Pixel for Rgb {
    const CHANNELS: usize = 3;

    fn alpha(&self) -> u8 {
        255
    }

    fn write_to(&self, out: &mut [u8]) {
        out[..3].copy_from_slice(&[self.r, self.g, self.b]);
    }
}

impl Rgb {
    /// Creates a new RGB pixel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Creates a completely black pixel.
    #[must_use]
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Creates a completely white pixel.
    #[must_use]
    pub const fn white() -> Self {
        Self::new(255, 255, 255)
    }

    /// Attaches the given opacity to this color.
    #[must_use]
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba::new(self.r, self.g, self.b, a)
    }
}

/// Represents an RGBA pixel.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// The red component of the pixel.
    pub r: u8,
    /// The green component of the pixel.
    pub g: u8,
    /// The blue component of the pixel.
    pub b: u8,
    /// The alpha component of the pixel.
    pub a: u8,
}

impl Pixel for Rgba {
    const CHANNELS: usize = 4;

    fn alpha(&self) -> u8 {
        self.a
    }

    fn write_to(&self, out: &mut [u8]) {
        out[..4].copy_from_slice(&[self.r, self.g, self.b, self.a]);
    }
}

impl Rgba {
    /// Creates a new RGBA pixel.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque pixel from an RGB pixel.
    #[must_use]
    pub const fn from_rgb(Rgb { r, g, b }: Rgb) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Creates a completely transparent pixel.
    #[must_use]
    pub const fn transparent() -> Self {
        Self::new(0, 0, 0, 0)
    }

    /// Reads a pixel from the first four bytes of the given slice.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }
}

/// A color in the HSL (hue, saturation, lightness) model.
///
/// This is a transient value used for conversions, not a pixel that can be stored in an image.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Hsl {
    /// The hue in degrees, usually in the range `[0, 360)`.
    pub hue: f64,
    /// The saturation, between 0.0 and 1.0.
    pub saturation: f64,
    /// The lightness, between 0.0 and 1.0.
    pub lightness: f64,
}

impl Hsl {
    /// Creates a new HSL color.
    #[must_use]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl From<Hsl> for Rgb {
    fn from(Hsl { hue, saturation, lightness }: Hsl) -> Self {
        hsl_to_rgb(hue, saturation, lightness)
    }
}

impl From<Rgb> for Hsl {
    fn from(Rgb { r, g, b }: Rgb) -> Self {
        rgb_to_hsl(r, g, b)
    }
}

impl From<Rgb> for Rgba {
    fn from(rgb: Rgb) -> Self {
        Self::from_rgb(rgb)
    }
}
