//! Render configuration
//!
//! Every render function takes a [RadarConfig] explicitly, nothing is
//!   shared between renders.
//!
//!     use radar::{RadarConfig, Point};
//!
//!     let cfg = RadarConfig::default();
//!     assert_eq!(cfg.radius(), 102.0);
//!     assert_eq!(cfg.center(), Point::new(127, 127));
//!     assert!(cfg.validate().is_ok());
//!

use std::path::PathBuf;

use crate::color::Rgba8;
use crate::error::LayoutError;
use crate::math::Point;

/// Default canvas edge length in pixels
pub const DEFAULT_SIZE : usize = 255;
/// Default fraction of the half-width used for the radius
pub const DEFAULT_RADIUS_RATIO : f64 = 0.8;
/// Default number of ring subdivisions
pub const DEFAULT_DIVISIONS : u32 = 5;
/// Default output directory
pub const DEFAULT_OUTPUT_DIR : &str = "img";

/// The three fixed colors
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct Palette {
    /// Background, white
    pub background: Rgba8,
    /// Spokes, rings and labels, dark gray
    pub line: Rgba8,
    /// Radial fill, translucent red
    pub fill: Rgba8,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Rgba8::white(),
            line: Rgba8::gray(80),
            fill: Rgba8::new(255, 0, 0, 100),
        }
    }
}

/// Canvas size, radius formula, ring divisions, colors and output location
#[derive(Debug,Clone,PartialEq)]
pub struct RadarConfig {
    /// Canvas width in pixels
    pub width: usize,
    /// Canvas height in pixels
    pub height: usize,
    /// Radius as a fraction of half the width
    pub radius_ratio: f64,
    /// Number of ring subdivisions of the radius
    pub divisions: u32,
    /// Colors
    pub palette: Palette,
    /// Directory images are written into
    pub output_dir: PathBuf,
}

impl Default for RadarConfig {
    fn default() -> Self {
        RadarConfig {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            radius_ratio: DEFAULT_RADIUS_RATIO,
            divisions: DEFAULT_DIVISIONS,
            palette: Palette::default(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl RadarConfig {
    /// Set the canvas size
    pub fn size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }
    /// Set the radius ratio
    pub fn radius_ratio(mut self, ratio: f64) -> Self {
        self.radius_ratio = ratio;
        self
    }
    /// Set the number of ring subdivisions
    pub fn divisions(mut self, divisions: u32) -> Self {
        self.divisions = divisions;
        self
    }
    /// Set the output directory
    pub fn output_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.output_dir = dir.into();
        self
    }
    /// Radius of the diagram, `width * radius_ratio * 0.5`
    pub fn radius(&self) -> f64 {
        self.width as f64 * self.radius_ratio * 0.5
    }
    /// Center of the canvas, integer division of width and height
    pub fn center(&self) -> Point {
        Point::new((self.width / 2) as i64, (self.height / 2) as i64)
    }
    /// Check the canvas is non-empty and `0 < radius < width/2`
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.width == 0 || self.height == 0 {
            return Err(LayoutError::EmptyCanvas);
        }
        let r = self.radius();
        if !r.is_finite() || r <= 0.0 {
            return Err(LayoutError::NonPositiveRadius(r));
        }
        let limit = self.width as f64 / 2.0;
        if r >= limit {
            return Err(LayoutError::RadiusTooLarge { radius: r, limit });
        }
        Ok(())
    }
}
