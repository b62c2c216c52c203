#![allow(dead_code)]

use hue_wheel::prelude::*;

/// Hues at which the fully saturated wheel hits a primary or secondary color exactly.
pub const PRIMARY_HUES: [(f64, Rgb); 6] = [
    (0.0, Rgb::new(255, 0, 0)),
    (60.0, Rgb::new(255, 255, 0)),
    (120.0, Rgb::new(0, 255, 0)),
    (180.0, Rgb::new(0, 255, 255)),
    (240.0, Rgb::new(0, 0, 255)),
    (300.0, Rgb::new(255, 0, 255)),
];

/// Iterates the pixels of a rendered RGBA buffer as `(x, y, pixel)`.
pub fn pixels(buffer: &[u8], side: u32) -> impl Iterator<Item = (u32, u32, Rgba)> + '_ {
    buffer
        .chunks_exact(4)
        .zip(0..)
        .map(move |(p, i)| (i % side, i / side, Rgba::new(p[0], p[1], p[2], p[3])))
}

/// Returns the shortest distance between two angles in degrees.
pub fn angle_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).rem_euclid(360.0);

    d.min(360.0 - d)
}
