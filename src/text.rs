//! Text labels using a fixed 8x8 bitmap font
//!
//! Glyphs come from [font8x8](https://docs.rs/font8x8). Each character is
//!   8 pixels wide; there is no kerning, wrapping or scaling. Characters
//!   without a glyph advance the cursor without drawing.

use font8x8::{UnicodeFonts, BASIC_FONTS};
use tracing::debug;

use crate::color::Rgba8;
use crate::math::Point;
use crate::Color;
use crate::Pixel;

/// Glyph width and horizontal advance in pixels
pub const GLYPH_WIDTH : i64 = 8;
/// Glyph height in pixels
pub const GLYPH_HEIGHT : i64 = 8;
/// Distance from the top of a glyph to the baseline
pub const GLYPH_BASELINE : i64 = 7;

/// Horizontal alignment of a label relative to its x position
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum XAlign {
    Left,
    Center,
    Right,
}
/// Vertical alignment of a label relative to its y position
#[derive(Debug,Copy,Clone,PartialEq)]
pub enum YAlign {
    Top,
    Center,
    Baseline,
    Bottom,
}

/// Single line of text
///
///     use radar::{Canvas,Label,XAlign,Rgba8};
///
///     let mut pix = Canvas::with_color(40, 20, Rgba8::white());
///     let label = Label::new("ATK", 20, 5).xalign(XAlign::Center);
///     assert_eq!(label.width(), 24);
///     label.draw(&mut pix);
///     assert!(pix.count(Rgba8::black()) > 0);
///
#[derive(Debug,Clone,PartialEq)]
pub struct Label {
    text: String,
    x: i64,
    y: i64,
    xalign: XAlign,
    yalign: YAlign,
    color: Rgba8,
}

impl Label {
    /// Create a new label at (`x`,`y`), left and top aligned, black
    pub fn new<S: Into<String>>(text: S, x: i64, y: i64) -> Self {
        Self { text: text.into(), x, y,
               xalign: XAlign::Left, yalign: YAlign::Top,
               color: Rgba8::black() }
    }
    /// Set the horizontal alignment
    pub fn xalign(mut self, xalign: XAlign) -> Self {
        self.xalign = xalign;
        self
    }
    /// Set the vertical alignment
    pub fn yalign(mut self, yalign: YAlign) -> Self {
        self.yalign = yalign;
        self
    }
    /// Set the color
    pub fn color<C: Color>(mut self, color: C) -> Self {
        self.color = Rgba8::from_trait(color);
        self
    }
    /// Text of the label
    pub fn text(&self) -> &str {
        &self.text
    }
    /// Width in pixels
    pub fn width(&self) -> i64 {
        self.text.chars().count() as i64 * GLYPH_WIDTH
    }
    /// Top-left corner of the first glyph after alignment
    pub fn origin(&self) -> Point {
        let x = match self.xalign {
            XAlign::Left   => self.x,
            XAlign::Center => self.x.saturating_sub(self.width() / 2),
            XAlign::Right  => self.x.saturating_sub(self.width()),
        };
        let y = match self.yalign {
            YAlign::Top      => self.y,
            YAlign::Center   => self.y.saturating_sub(GLYPH_HEIGHT / 2),
            YAlign::Baseline => self.y.saturating_sub(GLYPH_BASELINE),
            YAlign::Bottom   => self.y.saturating_sub(GLYPH_HEIGHT),
        };
        Point::new(x, y)
    }
    /// Draw the label, pixels outside of the image are dropped
    pub fn draw<T: Pixel>(&self, pix: &mut T) {
        let origin = self.origin();
        let mut written = 0;
        let (w, h) = (pix.width() as i64, pix.height() as i64);
        if origin.y >= h || origin.y.saturating_add(GLYPH_HEIGHT) <= 0 {
            debug!("LABEL {:?} at {},{} outside", self.text, origin.x, origin.y);
            return;
        }
        for (i, ch) in self.text.chars().enumerate() {
            let x0 = origin.x.saturating_add((i as i64).saturating_mul(GLYPH_WIDTH));
            if x0 >= w {
                break;
            }
            if x0.saturating_add(GLYPH_WIDTH) <= 0 {
                continue;
            }
            let glyph = match BASIC_FONTS.get(ch) {
                Some(glyph) => glyph,
                None => continue,
            };
            for (row, &bits) in glyph.iter().enumerate() {
                for col in 0 .. GLYPH_WIDTH {
                    if bits & (1u8 << col) != 0
                        && pix.copy_pixel(x0 + col, origin.y + row as i64, self.color) {
                        written += 1;
                    }
                }
            }
        }
        debug!("LABEL {:?} at {},{} written {}", self.text, origin.x, origin.y, written);
    }
}

/// Draw `text` with its top-left corner at (`x`,`y`)
pub fn draw_text<T: Pixel, C: Color>(pix: &mut T, text: &str, x: i64, y: i64, c: C) {
    Label::new(text, x, y).color(c).draw(pix);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Canvas;

    #[test]
    fn alignment() {
        let l = Label::new("ABCD", 100, 50);
        assert_eq!(l.origin(), Point::new(100, 50));
        let l = l.xalign(XAlign::Center).yalign(YAlign::Center);
        assert_eq!(l.origin(), Point::new(84, 46));
        let l = l.xalign(XAlign::Right).yalign(YAlign::Baseline);
        assert_eq!(l.origin(), Point::new(68, 43));
        let l = l.yalign(YAlign::Bottom);
        assert_eq!(l.origin(), Point::new(68, 42));
        assert_eq!(l.text(), "ABCD");
    }

    #[test]
    fn glyph_box() {
        let gray = Rgba8::gray(80);
        let mut pix = Canvas::with_color(64, 16, Rgba8::white());
        draw_text(&mut pix, "Hello Go", 0, 4, gray);
        let on = pix.pixels_with(gray);
        assert!(!on.is_empty());
        for (x,y) in on {
            assert!(x < 64);
            assert!(y >= 4 && y < 12);
        }
        // Only the label color and the background are present
        assert_eq!(pix.count(gray) + pix.count(Rgba8::white()), 64 * 16);
    }

    #[test]
    fn space_and_unknown_draw_nothing() {
        let mut pix = Canvas::with_color(32, 8, Rgba8::white());
        draw_text(&mut pix, " \u{1F600} ", 0, 0, Rgba8::black());
        assert_eq!(pix.count(Rgba8::black()), 0);
    }

    #[test]
    fn clipped_text() {
        let mut pix = Canvas::with_color(8, 8, Rgba8::white());
        draw_text(&mut pix, "MMMM", -4, -4, Rgba8::black());
        draw_text(&mut pix, "MMMM", 4, 4, Rgba8::black());
        assert!(pix.count(Rgba8::black()) > 0);
    }

    #[test]
    fn extreme_positions() {
        let mut pix = Canvas::with_color(8, 8, Rgba8::white());
        draw_text(&mut pix, "MMMM", i64::MAX - 3, i64::MAX - 3, Rgba8::black());
        draw_text(&mut pix, "MMMM", i64::MAX, 0, Rgba8::black());
        draw_text(&mut pix, "MMMM", i64::MIN, 0, Rgba8::black());
        draw_text(&mut pix, "MMMM", 0, i64::MIN, Rgba8::black());
        let l = Label::new("MMMM", i64::MIN, i64::MIN)
            .xalign(XAlign::Right)
            .yalign(YAlign::Bottom);
        assert_eq!(l.origin(), Point::new(i64::MIN, i64::MIN));
        l.draw(&mut pix);
        assert_eq!(pix.count(Rgba8::white()), 64);
    }
}
