//! Layout of spokes and rings
//!
//! Everything here is pure computation; a [Layout] is planned completely
//!   before a canvas exists, so an invalid request never produces a
//!   partial image.

use std::f64::consts::{FRAC_PI_2, PI};

use crate::config::RadarConfig;
use crate::error::{LayoutError, Result};
use crate::math::Point;

const TAU : f64 = 2.0 * PI;

/// Rotation added to every spoke so the first spoke points up
///
/// `2π - 2π/total - π/2`
pub fn rotation_offset(total: usize) -> f64 {
    let step = TAU / total as f64;
    TAU - step - FRAC_PI_2
}

/// Angle in radians of spoke `index` (zero based) of `total`
///
/// Spokes are numbered from one in the angle formula,
///   `2π/total * (index + 1) + rotation_offset(total)`, so spoke 0 always
///   points straight up (12 o'clock) and the rest follow clockwise
///
///     use radar::{spoke_angle, Point};
///     let a = spoke_angle(0, 4).unwrap();
///     let p = Point::from_polar(Point::new(100,100), a, 50.0);
///     assert_eq!(p.y, 50);
///
pub fn spoke_angle(index: usize, total: usize) -> Result<f64> {
    if total == 0 {
        return Err(LayoutError::NoSpokes.into());
    }
    let step = TAU / total as f64;
    Ok(step * (index + 1) as f64 + rotation_offset(total))
}

/// Pixel at `radius` along `angle` from `center`
pub fn anchor(angle: f64, radius: f64, center: Point) -> Point {
    Point::from_polar(center, angle, radius)
}

/// Integer radii of the concentric rings, `0, m, 2m, ...` below `ceil(r)`
///
/// The ring spacing is `m = floor(r) / divisions` (integer division). A
///   radius smaller than the number of divisions would make the spacing
///   zero and is rejected, as is a radius whose rings do not fit in a `u32`
///
///     use radar::ring_radii;
///     assert_eq!(ring_radii(102.0, 5).unwrap(), vec![0,20,40,60,80,100]);
///     assert!(ring_radii(4.0, 5).is_err());
///
pub fn ring_radii(r: f64, divisions: u32) -> Result<Vec<u32>> {
    if divisions == 0 {
        return Err(LayoutError::ZeroDivisions.into());
    }
    if !r.is_finite() || r <= 0.0 {
        return Err(LayoutError::NonPositiveRadius(r).into());
    }
    let m = r.trunc() as u64 / u64::from(divisions);
    if m == 0 {
        return Err(LayoutError::DegenerateRingSpacing { radius: r, divisions }.into());
    }
    if r.ceil() > f64::from(u32::MAX) {
        return Err(LayoutError::RingRadiusOverflow(r).into());
    }
    let end = r.ceil() as u64;
    Ok((0 .. end).step_by(m as usize).map(|v| v as u32).collect())
}

/// A single spoke of the diagram
#[derive(Debug,Clone,PartialEq)]
pub struct Spoke {
    /// Angle in radians, image convention (clockwise)
    pub angle: f64,
    /// End of the spoke at the full radius, where the label is drawn
    pub anchor: Point,
    /// Text drawn at the anchor
    pub label: Option<String>,
}

/// Planned geometry of one diagram
#[derive(Debug,Clone,PartialEq)]
pub struct Layout {
    /// Center of all spokes and rings
    pub center: Point,
    /// Full radius
    pub radius: f64,
    /// Spokes, first one pointing up
    pub spokes: Vec<Spoke>,
    /// Ring radii, see [ring_radii](fn.ring_radii.html)
    pub rings: Vec<u32>,
}

impl Layout {
    /// Center and radius only, no spokes or rings
    pub fn disk(cfg: &RadarConfig) -> Result<Self> {
        cfg.validate()?;
        Ok(Layout { center: cfg.center(), radius: cfg.radius(),
                    spokes: vec![], rings: vec![] })
    }
    /// `n` spokes labeled with their number, "1.000000", "2.000000", ...
    pub fn numbered(cfg: &RadarConfig, n: usize) -> Result<Self> {
        let labels : Vec<String> = (1 ..= n).map(|i| format!("{:.6}", i as f64)).collect();
        Self::labeled(cfg, &labels)
    }
    /// One spoke per label
    pub fn labeled<S: AsRef<str>>(cfg: &RadarConfig, labels: &[S]) -> Result<Self> {
        let disk = Self::disk(cfg)?;
        if labels.is_empty() {
            return Err(LayoutError::NoSpokes.into());
        }
        let rings = ring_radii(disk.radius, cfg.divisions)?;
        let spokes = labels.iter().enumerate()
            .map(|(i, label)| {
                let angle = spoke_angle(i, labels.len())?;
                Ok(Spoke { angle,
                           anchor: anchor(angle, disk.radius, disk.center),
                           label: Some(label.as_ref().to_string()) })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Layout { spokes, rings, ..disk })
    }
}

/// Area, arc length and angle of one sector of a circle split into
///   `divisions` equal parts
#[derive(Debug,Copy,Clone,PartialEq)]
pub struct SectorMetrics {
    pub radius: f64,
    pub divisions: u32,
    /// `πr² / divisions`
    pub area: f64,
    /// `2πr / divisions`
    pub arc: f64,
    /// `arc / r`, radians
    pub theta: f64,
}

impl SectorMetrics {
    pub fn new(radius: f64, divisions: u32) -> Result<Self> {
        if divisions == 0 {
            return Err(LayoutError::ZeroDivisions.into());
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(LayoutError::NonPositiveRadius(radius).into());
        }
        let div = f64::from(divisions);
        let area = PI * radius * radius / div;
        let arc = TAU * radius / div;
        Ok(SectorMetrics { radius, divisions, area, arc, theta: arc / radius })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn offset_formula() {
        assert!(close(rotation_offset(4), PI));
        assert!(close(rotation_offset(3), TAU - TAU / 3.0 - FRAC_PI_2));
        assert!(close(spoke_angle(0, 4).unwrap(), 3.0 * FRAC_PI_2));
        assert!(close(spoke_angle(1, 4).unwrap(), TAU));
    }

    #[test]
    fn no_spokes() {
        assert!(matches!(spoke_angle(0, 0), Err(Error::InvalidLayout(LayoutError::NoSpokes))));
        let cfg = RadarConfig::default();
        let empty : [&str; 0] = [];
        assert!(matches!(Layout::labeled(&cfg, &empty),
                         Err(Error::InvalidLayout(LayoutError::NoSpokes))));
    }

    #[test]
    fn ring_guards() {
        assert!(matches!(ring_radii(10.0, 0),
                         Err(Error::InvalidLayout(LayoutError::ZeroDivisions))));
        assert!(matches!(ring_radii(0.0, 5),
                         Err(Error::InvalidLayout(LayoutError::NonPositiveRadius(_)))));
        assert!(matches!(ring_radii(f64::NAN, 5),
                         Err(Error::InvalidLayout(LayoutError::NonPositiveRadius(_)))));
        assert!(matches!(ring_radii(4.9, 5),
                         Err(Error::InvalidLayout(LayoutError::DegenerateRingSpacing { divisions: 5, .. }))));
        assert_eq!(ring_radii(5.0, 5).unwrap(), vec![0,1,2,3,4]);
        assert_eq!(ring_radii(5.5, 5).unwrap(), vec![0,1,2,3,4,5]);
        assert_eq!(ring_radii(1.0, 1).unwrap(), vec![0]);
    }

    #[test]
    fn ring_radii_stay_increasing() {
        assert!(matches!(ring_radii(1e10, 5),
                         Err(Error::InvalidLayout(LayoutError::RingRadiusOverflow(_)))));
        let max = f64::from(u32::MAX);
        assert!(ring_radii(max + 1.0, 5).is_err());
        let rings = ring_radii(max, 5).unwrap();
        assert_eq!(rings.len(), 5);
        assert_eq!(rings[0], 0);
        assert!(rings.windows(2).all(|w| w[0] < w[1]), "{:?}", rings);
    }

    #[test]
    fn numbered_labels() {
        let cfg = RadarConfig::default();
        let layout = Layout::numbered(&cfg, 3).unwrap();
        let labels : Vec<_> = layout.spokes.iter().map(|s| s.label.clone().unwrap()).collect();
        assert_eq!(labels, vec!["1.000000", "2.000000", "3.000000"]);
        assert_eq!(layout.rings, vec![0,20,40,60,80,100]);
        assert_eq!(layout.center, Point::new(127,127));
        assert_eq!(layout.spokes[0].anchor, Point::new(126,25));
    }

    #[test]
    fn sector_metrics() {
        let m = SectorMetrics::new(2.0, 4).unwrap();
        assert!(close(m.area, PI));
        assert!(close(m.arc, PI));
        assert!(close(m.theta, FRAC_PI_2));
        assert!(SectorMetrics::new(2.0, 0).is_err());
        assert!(SectorMetrics::new(-1.0, 1).is_err());
    }
}
