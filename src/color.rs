//! Colors

use crate::Color;

fn color_u8_to_f64(x: u8) -> f64 {
    f64::from(x) / 255.0
}

/// Color as Red, Green, Blue, and Alpha
///
/// Alpha is stored as-is (not pre-multiplied) and is never blended;
///   writing a color replaces whatever the pixel held
#[derive(Debug,Default,Copy,Clone,PartialEq,Eq,Hash)]
pub struct Rgba8 {
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
    /// Alpha
    pub a: u8,
}

impl Rgba8 {
    /// White Color (255,255,255,255)
    pub fn white() -> Self {
        Self::new(255,255,255,255)
    }
    /// Black Color (0,0,0,255)
    pub fn black() -> Self {
        Self::new(0,0,0,255)
    }
    /// Opaque gray with all components set to `g`
    pub fn gray(g: u8) -> Self {
        Self::new(g,g,g,255)
    }
    /// Create new color
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Rgba8 { r, g, b, a }
    }
    /// Create a color from any other [Color]
    ///
    /// [Color]: ../trait.Color.html
    pub fn from_trait<C: Color>(c: C) -> Self {
        Self::new(c.red8(), c.green8(), c.blue8(), c.alpha8())
    }
    /// Components as an array, in storage order
    pub fn to_array(self) -> [u8;4] {
        [self.r, self.g, self.b, self.a]
    }
    /// Create a color from a slice of at least 4 components
    pub fn from_slice(p: &[u8]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }
}

impl Color for Rgba8 {
    fn   red(&self) -> f64 { color_u8_to_f64(self.r) }
    fn green(&self) -> f64 { color_u8_to_f64(self.g) }
    fn  blue(&self) -> f64 { color_u8_to_f64(self.b) }
    fn alpha(&self) -> f64 { color_u8_to_f64(self.a) }
    fn alpha8(&self) -> u8 { self.a }
    fn red8(&self) -> u8   { self.r }
    fn green8(&self) -> u8 { self.g }
    fn blue8(&self) -> u8  { self.b }
}

impl From<[u8;4]> for Rgba8 {
    fn from(c: [u8;4]) -> Rgba8 {
        Rgba8::new(c[0], c[1], c[2], c[3])
    }
}
impl From<Rgba8> for [u8;4] {
    fn from(c: Rgba8) -> [u8;4] {
        c.to_array()
    }
}

#[cfg(test)]
mod tests {
    use crate::Color;
    use crate::Rgba8;

    #[test]
    fn rgba8_components() {
        let c = Rgba8::new(255,0,0,100);
        assert_eq!(c.red8(), 255);
        assert_eq!(c.alpha8(), 100);
        assert!((c.red() - 1.0).abs() < 1e-12);
        assert!((c.alpha() - 100.0/255.0).abs() < 1e-12);
        assert_eq!(Rgba8::from_trait(c), c);
        assert_eq!(Rgba8::from(c.to_array()), c);
        assert_eq!(Rgba8::gray(80), Rgba8::new(80,80,80,255));
    }
}
