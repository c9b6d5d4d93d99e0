//! Canvas, a fixed size RGBA pixel image

use crate::buffer::RenderingBuffer;
use crate::color::Rgba8;

use crate::Color;
use crate::Pixel;
use crate::PixelData;
use crate::Source;

/// RGBA8 image, 4 bytes per pixel, origin at the top-left
///
/// Writes outside of the image are ignored
///
///     use radar::{Canvas,Pixel,Source,Rgba8};
///
///     let mut pix = Canvas::new(2,2);
///     let black = Rgba8::black();
///     assert!(pix.copy_pixel(1,0, black));
///     assert_eq!(pix.get((1,0)), black);
///     assert_eq!(pix.get((0,0)), Rgba8::new(0,0,0,0));
///
///     assert!(! pix.copy_pixel(-1,0, black)); // Ignored, outside of range
///     assert!(! pix.copy_pixel(2,2, black));  // Ignored, outside of range
///
#[derive(Debug,Clone,PartialEq)]
pub struct Canvas {
    rbuf: RenderingBuffer,
}

impl Canvas {
    /// Create new Canvas of width * height, transparent black
    pub fn new(width: usize, height: usize) -> Self {
        Self { rbuf: RenderingBuffer::new(width, height, Self::bpp()) }
    }
    /// Create new Canvas with every pixel set to `c`
    pub fn with_color<C: Color>(width: usize, height: usize, c: C) -> Self {
        let mut pix = Self::new(width, height);
        pix.fill(c);
        pix
    }
    /// Wrap a rendering buffer holding 4 byte RGBA pixels
    pub fn from_buffer(rbuf: RenderingBuffer) -> Option<Self> {
        if rbuf.bpp != Self::bpp() || rbuf.len() != rbuf.width * rbuf.height * rbuf.bpp {
            return None;
        }
        Some(Self { rbuf })
    }
    /// Underlying rendering buffer
    pub fn rbuf(&self) -> &RenderingBuffer {
        &self.rbuf
    }
    /// Size of Rendering Buffer in bytes; width * height * 4
    pub fn size(&self) -> usize {
        self.rbuf.len()
    }
    /// Set every pixel to `c`
    pub fn fill<C: Color>(&mut self, c: C) {
        let c = Rgba8::from_trait(c).to_array();
        for px in self.rbuf.data.chunks_exact_mut(Self::bpp()) {
            px.copy_from_slice(&c);
        }
    }
    /// Drawable region as `(min_x, min_y, max_x, max_y)`, max values exclusive
    pub fn bounds(&self) -> (i64,i64,i64,i64) {
        (0, 0, self.rbuf.width as i64, self.rbuf.height as i64)
    }
    /// Whether (`x`,`y`) lies within [bounds](#method.bounds)
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (x1,y1,x2,y2) = self.bounds();
        x >= x1 && x < x2 && y >= y1 && y < y2
    }
    /// Number of pixels holding exactly the color `c`
    pub fn count(&self, c: Rgba8) -> usize {
        let c = c.to_array();
        self.rbuf.data.chunks_exact(Self::bpp()).filter(|px| *px == &c[..]).count()
    }
    /// Locations of all pixels holding exactly the color `c`, row by row
    pub fn pixels_with(&self, c: Rgba8) -> Vec<(usize,usize)> {
        let c = c.to_array();
        let w = self.rbuf.width;
        self.rbuf.data.chunks_exact(Self::bpp())
            .enumerate()
            .filter(|(_,px)| *px == &c[..])
            .map(|(i,_)| (i % w, i / w))
            .collect()
    }
}

impl PixelData for Canvas {
    fn pixeldata(&self) -> &[u8] {
        & self.rbuf.data
    }
}

impl Source for Canvas {
    fn get(&self, id: (usize, usize)) -> Rgba8 {
        Rgba8::from_slice(&self.rbuf[id])
    }
}

impl Pixel for Canvas {
    fn bpp() -> usize { 4 }
    /// Height of rendering buffer in pixels
    fn height(&self) -> usize {
        self.rbuf.height
    }
    /// Width of rendering buffer in pixels
    fn width(&self) -> usize {
        self.rbuf.width
    }
    fn set<C: Color>(&mut self, id: (usize, usize), c: C) {
        let c = Rgba8::from_trait(c);
        self.rbuf[id].copy_from_slice(&c.to_array());
    }
}
