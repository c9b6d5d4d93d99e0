//! Polar rasterizer
//!
//! Points are generated in polar coordinates and written one pixel at a
//!   time through [Pixel::copy_pixel](../trait.Pixel.html#method.copy_pixel);
//!   points that land outside of the image are dropped.
//!
//! Spokes and fills only generate points near the clip box
//!   `(min_x, min_y, max_x, max_y)`, max values exclusive, so the work done
//!   depends on the image size and not on the radius.

use std::f64::consts::PI;

use tracing::debug;

use crate::math::Point;
use crate::text::Label;
use crate::Color;
use crate::Pixel;

const TAU : f64 = 2.0 * PI;

/// Radial distance between consecutive points along a spoke
pub const RADIAL_STEP : f64 = 0.1;
/// Largest angular step used when sweeping a ring
pub const MAX_ANGULAR_STEP : f64 = 0.1;
/// Largest distance in pixels between consecutive points of a ring
const RING_SPACING : f64 = 0.5;

/// Clip box of an image, see [Canvas::bounds](../canvas/struct.Canvas.html#method.bounds)
pub type ClipBox = (i64,i64,i64,i64);

fn clip_box<T: Pixel>(pix: &T) -> ClipBox {
    (0, 0, pix.width() as i64, pix.height() as i64)
}

/// Range of `t` where `c + t * d` lies strictly between `lo` and `hi`
fn slab(c: f64, d: f64, lo: f64, hi: f64) -> Option<(f64,f64)> {
    if d == 0.0 {
        return if c > lo && c < hi {
            Some((f64::NEG_INFINITY, f64::INFINITY))
        } else {
            None
        };
    }
    let (t0, t1) = ((lo - c) / d, (hi - c) / d);
    Some((t0.min(t1), t0.max(t1)))
}

/// Distances along `angle` from `center` whose truncated pixel may fall
///   inside `clip`, padded by a pixel on both ends
fn ray_span(center: Point, angle: f64, clip: ClipBox) -> Option<(f64,f64)> {
    let (x1,y1,x2,y2) = clip;
    let (dy, dx) = angle.sin_cos();
    // Truncation maps (min - 1, max) onto the pixels min ..= max - 1
    let (tx0, tx1) = slab(center.x as f64, dx, x1 as f64 - 1.0, x2 as f64)?;
    let (ty0, ty1) = slab(center.y as f64, dy, y1 as f64 - 1.0, y2 as f64)?;
    let (t0, t1) = (tx0.max(ty0), tx1.min(ty1));
    if t0 > t1 {
        return None;
    }
    Some((t0 - 1.0, t1 + 1.0))
}

/// Points from `center` outward along `angle`, every 0.1 px while `r < max_radius`
///
/// Only the stretch of the spoke that can land inside `clip` is generated.
///   Consecutive points often map to the same pixel
pub fn spoke_points(center: Point, angle: f64, max_radius: f64, clip: ClipBox) -> impl Iterator<Item=Point> {
    let max_radius = if max_radius.is_finite() { max_radius } else { 0.0 };
    let (lo, hi) = ray_span(center, angle, clip).unwrap_or((0.0, -1.0));
    let first = (lo.max(0.0) / RADIAL_STEP).floor() as u64;
    (first ..)
        .map(|i| i as f64 * RADIAL_STEP)
        .take_while(move |&rr| rr < max_radius && rr <= hi)
        .map(move |rr| Point::from_polar(center, angle, rr))
}

/// Number of samples used to sweep a ring of `radius` over [0,2π)
///
/// The angular step is at most 0.1 radians and small enough that
///   neighboring samples are no more than half a pixel apart
pub fn ring_steps(radius: f64) -> usize {
    if !radius.is_finite() || radius <= 0.0 {
        return 1;
    }
    let step = (RING_SPACING / radius).min(MAX_ANGULAR_STEP);
    (TAU / step).ceil() as usize
}

/// Points of a circle of `radius` about `center`, angles evenly spread over [0,2π)
///
/// A radius of zero yields the center only
pub fn ring_points(center: Point, radius: f64) -> impl Iterator<Item=Point> {
    let n = ring_steps(radius);
    let radius = if radius.is_finite() { radius } else { 0.0 };
    (0 .. n).map(move |i| {
        let angle = TAU * i as f64 / n as f64;
        Point::from_polar(center, angle, radius)
    })
}

/// Every pixel inside `clip` whose distance to `center` is at most `radius`,
///   each once, row by row
///
/// Negative or NaN radii produce nothing
pub fn disk_points(center: Point, radius: f64, clip: ClipBox) -> impl Iterator<Item=Point> {
    let (x1,y1,x2,y2) = clip;
    let r = if radius >= 0.0 { radius.floor() as i64 } else { -1 };
    let r2 = radius * radius;
    let (xa, xb) = (center.x.saturating_sub(r).max(x1), center.x.saturating_add(r).min(x2 - 1));
    let (ya, yb) = (center.y.saturating_sub(r).max(y1), center.y.saturating_add(r).min(y2 - 1));
    let rows = if r < 0 { 1 ..= 0 } else { ya ..= yb };
    rows.flat_map(move |y| (xa ..= xb).map(move |x| Point::new(x, y)))
        .filter(move |p| {
            let dx = i128::from(p.x) - i128::from(center.x);
            let dy = i128::from(p.y) - i128::from(center.y);
            ((dx * dx + dy * dy) as f64) <= r2
        })
}

/// Write `c` at every point, returns (written, clipped)
fn plot<T, C, I>(pix: &mut T, points: I, c: C) -> (usize, usize)
    where T: Pixel, C: Color, I: Iterator<Item=Point>
{
    let (mut written, mut clipped) = (0, 0);
    for p in points {
        if pix.copy_pixel(p.x, p.y, c) {
            written += 1;
        } else {
            clipped += 1;
        }
    }
    (written, clipped)
}

/// Fill the disk of `max_radius` about `center` with `c`
///
///     use radar::{Canvas,Point,Rgba8,Source,draw_radial_fill};
///     let mut pix = Canvas::with_color(9, 9, Rgba8::white());
///     draw_radial_fill(&mut pix, Point::new(4,4), 2.0, Rgba8::black());
///     assert_eq!(pix.count(Rgba8::black()), 13);
///     assert_eq!(pix.get((6,4)), Rgba8::black());
///     assert_eq!(pix.get((6,5)), Rgba8::white());
///
pub fn draw_radial_fill<T: Pixel, C: Color>(pix: &mut T, center: Point, max_radius: f64, c: C) {
    let clip = clip_box(pix);
    let (written, clipped) = plot(pix, disk_points(center, max_radius, clip), c);
    debug!("RADIAL FILL center {},{} radius {} written {} clipped {}",
           center.x, center.y, max_radius, written, clipped);
}

/// Draw a dense dotted line from `center` to `max_radius` along `angle`
pub fn draw_spoke_line<T: Pixel, C: Color>(pix: &mut T, center: Point, angle: f64, max_radius: f64, c: C) {
    let clip = clip_box(pix);
    let (written, clipped) = plot(pix, spoke_points(center, angle, max_radius, clip), c);
    debug!("SPOKE LINE angle {:.4} radius {} written {} clipped {}",
           angle, max_radius, written, clipped);
}

/// Draw one circle outline per radius in `ring_radii`
///
/// A radius of zero draws nothing, nor does a ring that cannot touch the image
pub fn draw_ring_outline<T: Pixel, C: Color>(pix: &mut T, center: Point, ring_radii: &[u32], c: C) {
    let (x1,y1,x2,y2) = clip_box(pix);
    let (cx, cy) = (center.x as f64, center.y as f64);
    // Nearest and farthest distance from the center to the image
    let nx = cx - cx.max(x1 as f64).min(x2 as f64);
    let ny = cy - cy.max(y1 as f64).min(y2 as f64);
    let near = nx.hypot(ny);
    let far = (cx - x1 as f64).abs().max((cx - x2 as f64).abs())
        .hypot((cy - y1 as f64).abs().max((cy - y2 as f64).abs()));
    for &r in ring_radii {
        let rf = f64::from(r);
        if r == 0 || rf < near - 2.0 || rf > far + 2.0 {
            debug!("RING OUTLINE radius {} skipped", r);
            continue;
        }
        let (written, clipped) = plot(pix, ring_points(center, rf), c);
        debug!("RING OUTLINE radius {} written {} clipped {}", r, written, clipped);
    }
}

/// Draw `text` with its top-left corner at `anchor`
pub fn draw_label<T: Pixel, C: Color>(pix: &mut T, anchor: Point, text: &str, c: C) {
    Label::new(text, anchor.x, anchor.y).color(c).draw(pix);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Canvas, Rgba8, Source};
    use std::collections::HashSet;

    #[test]
    fn spoke_sampling() {
        let clip = (0, 0, 10, 10);
        let pts : Vec<_> = spoke_points(Point::new(0,0), 0.0, 1.0, clip).collect();
        assert_eq!(pts.len(), 10);
        assert!(pts.iter().all(|p| *p == Point::new(0,0)));
        assert_eq!(spoke_points(Point::new(0,0), 0.0, f64::INFINITY, clip).count(), 0);
        assert_eq!(spoke_points(Point::new(0,0), 0.0, f64::NAN, clip).count(), 0);
        assert_eq!(spoke_points(Point::new(0,0), 0.0, -3.0, clip).count(), 0);
    }

    #[test]
    fn ring_sampling() {
        assert_eq!(ring_steps(0.0), 1);
        assert_eq!(ring_points(Point::new(5,5), 0.0).collect::<Vec<_>>(), vec![Point::new(5,5)]);
        // Small rings use the 0.1 radian step
        assert_eq!(ring_steps(1.0), 63);
        assert_eq!(ring_steps(100.0), 1257);
        let c = Point::new(127,127);
        for p in ring_points(c, 20.0) {
            assert!((p.distance(c) - 20.0).abs() <= 1.5, "{:?}", p);
        }
    }

    #[test]
    fn ring_is_continuous() {
        // Every pair of consecutive samples touches (8-connected)
        let c = Point::new(127,127);
        let pts : Vec<_> = ring_points(c, 100.0).collect();
        for w in pts.windows(2) {
            assert!((w[0].x - w[1].x).abs() <= 1 && (w[0].y - w[1].y).abs() <= 1,
                    "gap {:?} {:?}", w[0], w[1]);
        }
    }

    #[test]
    fn spoke_stays_near_the_image() {
        let clip = (0, 0, 10, 10);
        // Only the part crossing the image is sampled
        let n = spoke_points(Point::new(5,5), 0.0, 1e7, clip).count();
        assert!(n > 40 && n < 100, "{}", n);
        let pts : Vec<_> = spoke_points(Point::new(-10_000_000,5), 0.0, 2e7, clip).collect();
        assert!(!pts.is_empty() && pts.len() < 200, "{}", pts.len());
        assert!(pts.iter().any(|p| p.x == 0) && pts.iter().any(|p| p.x == 9));
        // Misses the image entirely
        assert_eq!(spoke_points(Point::new(5,50), 0.0, 1e7, clip).count(), 0);

        let mut pix = Canvas::with_color(10, 10, Rgba8::white());
        draw_spoke_line(&mut pix, Point::new(5,5), 0.0, 1e9, Rgba8::black());
        assert_eq!(pix.pixels_with(Rgba8::black()), vec![(5,5),(6,5),(7,5),(8,5),(9,5)]);
    }

    #[test]
    fn disk_limited_to_clip() {
        let clip = (0, 0, 10, 10);
        assert_eq!(disk_points(Point::new(5,5), 3000.0, clip).count(), 100);
        assert_eq!(disk_points(Point::new(0,0), 1e12, clip).count(), 100);
        assert_eq!(disk_points(Point::new(i64::MAX,0), 1e30, clip).count(), 100);
        assert_eq!(disk_points(Point::new(-500,-500), 102.0, clip).count(), 0);
    }

    #[test]
    fn disk_exact() {
        let c = Point::new(0,0);
        let clip = (-10, -10, 10, 10);
        let pts : HashSet<_> = disk_points(c, 3.0, clip).collect();
        assert_eq!(pts.len(), disk_points(c, 3.0, clip).count());
        for y in -5 ..= 5 {
            for x in -5 ..= 5 {
                let inside = x * x + y * y <= 9;
                assert_eq!(pts.contains(&Point::new(x,y)), inside, "{} {}", x, y);
            }
        }
        assert_eq!(disk_points(c, 0.0, clip).collect::<Vec<_>>(), vec![c]);
        assert_eq!(disk_points(c, -1.0, clip).count(), 0);
        assert_eq!(disk_points(c, f64::NAN, clip).count(), 0);
    }

    #[test]
    fn clipped_at_edges() {
        let mut pix = Canvas::with_color(10, 10, Rgba8::white());
        let black = Rgba8::black();
        draw_radial_fill(&mut pix, Point::new(0,0), 30.0, black);
        assert_eq!(pix.count(black), 100);

        let mut pix = Canvas::with_color(10, 10, Rgba8::white());
        draw_ring_outline(&mut pix, Point::new(-50,-50), &[5, 10], black);
        draw_spoke_line(&mut pix, Point::new(20,20), 0.0, 50.0, black);
        assert_eq!(pix.count(Rgba8::white()), 100);
    }

    #[test]
    fn zero_ring_draws_nothing() {
        let mut pix = Canvas::with_color(10, 10, Rgba8::white());
        draw_ring_outline(&mut pix, Point::new(5,5), &[0], Rgba8::black());
        assert_eq!(pix.count(Rgba8::white()), 100);
        draw_ring_outline(&mut pix, Point::new(5,5), &[0, 3], Rgba8::black());
        assert_eq!(pix.get((5,5)), Rgba8::white());
        assert!(pix.count(Rgba8::black()) > 0);
    }

    #[test]
    fn label_at_anchor() {
        let mut pix = Canvas::with_color(20, 20, Rgba8::white());
        draw_label(&mut pix, Point::new(2,3), "I", Rgba8::black());
        // Nothing above or left of the anchor
        for &(x,y) in &pix.pixels_with(Rgba8::black()) {
            assert!(x >= 2 && y >= 3);
            assert!(x < 10 && y < 11);
        }
        assert!(pix.count(Rgba8::black()) > 0);
        assert_eq!(pix.get((0,0)), Rgba8::white());
    }
}
