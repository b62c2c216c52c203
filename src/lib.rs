pub mod colors;
pub mod encodings;
pub mod error;
pub mod hue;
pub mod image;
pub mod pixel;
pub mod surface;
pub mod wheel;

pub use colors::{hsl_to_rgb, rgb_to_hsl, round_half_up, round_up};
pub use error::{Error, Result};
pub use hue::{get_hue, Direction};
pub use image::Image;
pub use pixel::{Hsl, Pixel, Rgb, Rgba};
pub use surface::{draw_wheel, Surface};
pub use wheel::{count_ring_pixels, render, WheelConfig};

pub mod prelude {
    pub use super::{
        draw_wheel, get_hue, hsl_to_rgb, render, rgb_to_hsl, Direction, Hsl, Image, Pixel, Rgb,
        Rgba, Surface, WheelConfig,
    };
}
