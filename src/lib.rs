//! Radial grids and radar charts rendered to PNG
//!
//! How does this work
//!    cfg    = RadarConfig::default()
//!    layout = Layout::numbered(&cfg, n)     -- angles, anchors, ring radii
//!    pix    = Canvas::with_color(w, h, bg)
//!  Polar Operations
//!    draw_radial_fill()    -- every pixel within r of center
//!    draw_spoke_line()     -- 0.1 px radial steps, center to edge
//!      draw_label()        -- text::Label at the spoke end
//!    draw_ring_outline()   -- one circle per ring radius
//!      Pixel::copy_pixel() -- out of range points are dropped
//!  Write Image
//!    png::write_file(&pix, "img/line4.png")
//!
//! Each variant lives in [scenario](scenario/index.html):
//!
//!     use radar::{RadarConfig, Rgba8, scenario};
//!
//!     let cfg = RadarConfig::default();
//!     let pix = scenario::render_grid(&cfg, 4).unwrap();
//!     assert!(pix.count(Rgba8::new(255,0,0,100)) > 0);
//!

pub mod buffer;
pub mod color;
pub mod canvas;
pub mod config;
pub mod error;
pub mod gallery;
pub mod layout;
pub mod math;
pub mod png;
pub mod polar;
pub mod scenario;
pub mod text;

pub use crate::buffer::*;
pub use crate::color::*;
pub use crate::canvas::*;
pub use crate::config::*;
pub use crate::error::{Error, LayoutError};
pub use crate::layout::*;
pub use crate::math::*;
pub use crate::polar::*;
pub use crate::text::*;

/// Access to Color properties and components
pub trait Color: Copy {
    /// Get red value [0,1] as f64
    fn red(&self) -> f64;
    /// Get green value [0,1] as f64
    fn green(&self) -> f64;
    /// Get blue value [0,1] as f64
    fn blue(&self) -> f64;
    /// Get alpha value [0,1] as f64
    fn alpha(&self) -> f64;
    /// Get red value [0,255] as u8
    fn red8(&self) -> u8;
    /// Get green value [0,255] as u8
    fn green8(&self) -> u8;
    /// Get blue value [0,255] as u8
    fn blue8(&self) -> u8;
    /// Get alpha value [0,255] as u8
    fn alpha8(&self) -> u8;
}

/// Access Pixel source color
pub trait Source {
    fn get(&self, id: (usize, usize)) -> Rgba8;
}

/// Raw component data of an image
pub trait PixelData {
    fn pixeldata(&self) -> &[u8];
}

/// Drawing and pixel related routines
pub trait Pixel {
    /// Set the pixel at `id` to `c`, `id` must be inside of the image
    fn set<C: Color>(&mut self, id: (usize, usize), c: C);
    /// Bytes per pixel
    fn bpp() -> usize;
    /// Width of the image in pixels
    fn width(&self) -> usize;
    /// Height of the image in pixels
    fn height(&self) -> usize;
    /// Copies the [Color] `c` to pixel at (`x`,`y`)
    ///
    /// Locations outside of the region are ignored; returns whether the
    ///   pixel was written
    ///
    /// [Color]: trait.Color.html
    fn copy_pixel<C: Color>(&mut self, x: i64, y: i64, c: C) -> bool {
        if x < 0 || y < 0 || x as u64 >= self.width() as u64 || y as u64 >= self.height() as u64 {
            return false;
        }
        self.set((x as usize, y as usize), c);
        true
    }
}
