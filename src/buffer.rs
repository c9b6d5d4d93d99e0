//! Rendering buffer

use std::ops::Index;
use std::ops::IndexMut;

/// Rendering Buffer
///
/// Data is stored as row-major order (C-format), `bpp` bytes per pixel
#[derive(Debug,Default,Clone,PartialEq)]
pub struct RenderingBuffer {
    /// Pixel / Component level data of Image
    pub data: Vec<u8>,
    /// Image Width in pixels
    pub width: usize,
    /// Image Height in pixels
    pub height: usize,
    /// Bytes per pixel or number of color components
    pub bpp: usize,
}

impl RenderingBuffer {
    /// Create a new buffer of width, height, and bpp
    ///
    /// Data for the Image is allocated and zeroed
    pub fn new(width: usize, height: usize, bpp: usize) -> Self {
        RenderingBuffer {
            width, height, bpp, data: vec![0u8; width * height * bpp]
        }
    }
    /// Wrap existing component data
    ///
    /// Returns None if `data` is not exactly `width * height * bpp` long
    pub fn from_raw(data: Vec<u8>, width: usize, height: usize, bpp: usize) -> Option<Self> {
        if data.len() != width * height * bpp {
            return None;
        }
        Some(RenderingBuffer { data, width, height, bpp })
    }
    /// Size of underlying Rendering Buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Buffer holds no pixels
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl Index<(usize,usize)> for RenderingBuffer {
    type Output = [u8];
    fn index(&self, index: (usize, usize)) -> &[u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &self.data[i .. i + self.bpp]
    }
}
impl IndexMut<(usize,usize)> for RenderingBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut [u8] {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        let i = ((index.1 * self.width) + index.0) * self.bpp;
        &mut self.data[i .. i + self.bpp]
    }
}

#[cfg(test)]
mod tests {
    use super::RenderingBuffer;

    #[test]
    fn buffer_layout() {
        let mut rbuf = RenderingBuffer::new(3, 2, 4);
        assert_eq!(rbuf.len(), 24);

        rbuf[(1,1)].copy_from_slice(&[1,2,3,4]);
        assert_eq!(&rbuf.data[16..20], &[1,2,3,4]);
        assert_eq!(rbuf[(1,1)].len(), 4);
    }

    #[test]
    fn buffer_from_raw() {
        assert!(RenderingBuffer::from_raw(vec![0;8], 2, 1, 4).is_some());
        assert!(RenderingBuffer::from_raw(vec![0;7], 2, 1, 4).is_none());
    }

    #[test]
    #[should_panic]
    fn buffer_index_outside() {
        let rbuf = RenderingBuffer::new(3, 2, 4);
        let _ = &rbuf[(3,0)];
    }
}
