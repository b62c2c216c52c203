//! Encoders used to commit rendered images to a destination.

#[cfg(feature = "png")]
pub mod png;
