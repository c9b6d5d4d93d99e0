//! Errors

use std::path::PathBuf;
use thiserror::Error;

/// Why a layout cannot be drawn
///
/// Detected while planning, before a canvas is allocated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    #[error("ring divisions must be at least 1")]
    ZeroDivisions,

    #[error("radius must be positive and finite, got {0}")]
    NonPositiveRadius(f64),

    #[error("radius {radius} is smaller than {divisions} divisions, ring spacing would be zero")]
    DegenerateRingSpacing { radius: f64, divisions: u32 },

    #[error("radius {radius} does not fit inside the canvas (limit {limit})")]
    RadiusTooLarge { radius: f64, limit: f64 },

    #[error("radius {0} is too large for integer ring radii")]
    RingRadiusOverflow(f64),

    #[error("at least one spoke is required")]
    NoSpokes,

    #[error("canvas must have a non-zero width and height")]
    EmptyCanvas,
}

/// Errors produced while planning, rendering or writing an image
///
/// Pixels computed outside of the canvas are not an error, they are
///   clipped by [Canvas::copy_pixel](../canvas/struct.Canvas.html#method.copy_pixel)
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid layout: {0}")]
    InvalidLayout(#[from] LayoutError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode image: {0}")]
    Encode(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, Error>;
