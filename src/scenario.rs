//! Render variants and the batch that writes them
//!
//! Each render plans its [Layout](../layout/struct.Layout.html) before
//!   allocating a canvas, so a bad configuration fails without producing
//!   an image.

use std::path::PathBuf;

use tracing::{error, info};

use crate::canvas::Canvas;
use crate::config::RadarConfig;
use crate::error::{Error, Result};
use crate::layout::Layout;
use crate::polar::{draw_label, draw_radial_fill, draw_ring_outline, draw_spoke_line};
use crate::png;
use crate::text::{Label, YAlign};

/// Spoke counts drawn by the default batch
pub const GRID_SPOKES : std::ops::RangeInclusive<usize> = 3 ..= 6;

/// Named value placed on a chart spoke
///
/// Only the label is drawn
#[derive(Debug,Clone,PartialEq)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
}

impl DataPoint {
    pub fn new<S: Into<String>>(label: S, value: f64) -> Self {
        DataPoint { label: label.into(), value }
    }
}

/// Default chart data
pub fn default_points() -> Vec<DataPoint> {
    vec![DataPoint::new("ATK", 100.0),
         DataPoint::new("DEF", 60.0),
         DataPoint::new("MAT", 5.0)]
}

fn blank(cfg: &RadarConfig) -> Canvas {
    Canvas::with_color(cfg.width, cfg.height, cfg.palette.background)
}

fn draw_spokes(pix: &mut Canvas, layout: &Layout, cfg: &RadarConfig) {
    for spoke in &layout.spokes {
        draw_spoke_line(pix, layout.center, spoke.angle, layout.radius, cfg.palette.line);
        if let Some(label) = &spoke.label {
            draw_label(pix, spoke.anchor, label, cfg.palette.line);
        }
    }
}

/// Radial fill, `n` numbered spokes and the ring grid
pub fn render_grid(cfg: &RadarConfig, n: usize) -> Result<Canvas> {
    let layout = Layout::numbered(cfg, n)?;
    let mut pix = blank(cfg);
    draw_radial_fill(&mut pix, layout.center, layout.radius, cfg.palette.fill);
    draw_spokes(&mut pix, &layout, cfg);
    draw_ring_outline(&mut pix, layout.center, &layout.rings, cfg.palette.line);
    Ok(pix)
}

/// One labeled spoke per data point and the ring grid, no fill
pub fn render_chart(cfg: &RadarConfig, points: &[DataPoint]) -> Result<Canvas> {
    let labels : Vec<&str> = points.iter().map(|p| p.label.as_str()).collect();
    let layout = Layout::labeled(cfg, &labels)?;
    let mut pix = blank(cfg);
    draw_spokes(&mut pix, &layout, cfg);
    draw_ring_outline(&mut pix, layout.center, &layout.rings, cfg.palette.line);
    Ok(pix)
}

/// A single line of text with its baseline starting at (`x`,`y`)
pub fn render_text(cfg: &RadarConfig, text: &str, x: i64, y: i64) -> Result<Canvas> {
    cfg.validate()?;
    let mut pix = blank(cfg);
    Label::new(text, x, y)
        .yalign(YAlign::Baseline)
        .color(cfg.palette.line)
        .draw(&mut pix);
    Ok(pix)
}

/// Only the radial fill
pub fn render_fill(cfg: &RadarConfig) -> Result<Canvas> {
    let layout = Layout::disk(cfg)?;
    let mut pix = blank(cfg);
    draw_radial_fill(&mut pix, layout.center, layout.radius, cfg.palette.fill);
    Ok(pix)
}

/// One image to render
#[derive(Debug,Clone,PartialEq)]
pub enum Scenario {
    /// Fill, `spokes` numbered spokes and rings
    Grid { spokes: usize },
    /// Labeled spokes and rings
    Chart { points: Vec<DataPoint> },
    /// Text only
    Text { text: String, x: i64, y: i64 },
    /// Fill only
    FillBackground,
}

impl Scenario {
    /// Short name used in logs
    pub fn name(&self) -> String {
        match self {
            Scenario::Grid { spokes }  => format!("line{}", spokes),
            Scenario::Chart { points } => format!("chart{}", points.len()),
            Scenario::Text { .. }      => "text".to_string(),
            Scenario::FillBackground   => "fill_background".to_string(),
        }
    }
    /// Output file name, `line4.png`, `chart3.png`, `text.png`, ...
    pub fn file_name(&self) -> String {
        format!("{}.png", self.name())
    }
    /// Render into a new canvas
    pub fn render(&self, cfg: &RadarConfig) -> Result<Canvas> {
        match self {
            Scenario::Grid { spokes }      => render_grid(cfg, *spokes),
            Scenario::Chart { points }     => render_chart(cfg, points),
            Scenario::Text { text, x, y }  => render_text(cfg, text, *x, *y),
            Scenario::FillBackground       => render_fill(cfg),
        }
    }
    /// Render and write to `cfg.output_dir`, returning the written path
    pub fn write(&self, cfg: &RadarConfig) -> Result<PathBuf> {
        let pix = self.render(cfg)?;
        let path = cfg.output_dir.join(self.file_name());
        png::write_file(&pix, &path)?;
        Ok(path)
    }
}

/// Grids with 3 to 6 spokes, the ATK/DEF/MAT chart, a text image and
///   a fill-only image
pub fn default_scenarios() -> Vec<Scenario> {
    let mut v : Vec<_> = GRID_SPOKES.map(|spokes| Scenario::Grid { spokes }).collect();
    v.push(Scenario::Chart { points: default_points() });
    v.push(Scenario::Text { text: "Hello Go".to_string(), x: 20, y: 30 });
    v.push(Scenario::FillBackground);
    v
}

/// Outcome of a batch
#[derive(Debug,Default)]
pub struct RunReport {
    /// Files written
    pub written: Vec<PathBuf>,
    /// Scenario name and the error that stopped it
    pub failed: Vec<(String, Error)>,
}

impl RunReport {
    /// True when every scenario was written
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Render and write every scenario in order
///
/// A failing scenario is recorded and the rest still run
pub fn run(cfg: &RadarConfig, scenarios: &[Scenario]) -> RunReport {
    let mut report = RunReport::default();
    for scenario in scenarios {
        match scenario.write(cfg) {
            Ok(path) => {
                info!("{}: {}", scenario.name(), path.display());
                report.written.push(path);
            }
            Err(err) => {
                error!("{}: {}", scenario.name(), err);
                report.failed.push((scenario.name(), err));
            }
        }
    }
    report
}
