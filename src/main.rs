//! Render every default scenario into `img/`

use std::process::ExitCode;

use radar::scenario;
use radar::{RadarConfig, SectorMetrics};
use tracing::{error, info, warn};

/// Radius and division pairs reported alongside the images
const SECTORS : [(f64, u32); 6] = [(1.0, 1), (2.0, 1), (50.0, 1),
                                   (1.0, 4), (2.0, 4), (50.0, 4)];

fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let cfg = RadarConfig::default();
    if let Err(err) = std::fs::create_dir_all(&cfg.output_dir) {
        error!("cannot create {}: {}", cfg.output_dir.display(), err);
        return ExitCode::FAILURE;
    }

    let report = scenario::run(&cfg, &scenario::default_scenarios());

    for &(r, div) in SECTORS.iter() {
        match SectorMetrics::new(r, div) {
            Ok(m) => info!("radius {:.6} area {:.6} arc {:.6} theta {:.6}",
                           m.radius, m.area, m.arc, m.theta),
            Err(err) => warn!("radius {} divisions {}: {}", r, div, err),
        }
    }

    info!("{} images written, {} failed", report.written.len(), report.failed.len());
    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
