//! Replay a Mines-format log through CoreSLAM.
//!
//! Prints one `x_mm y_mm theta_degrees` line per scan and optionally writes
//! the final map as raw row-major bytes (viewable as a square PGM body).
//!
//! # Usage
//!
//! ```bash
//! coreslam-replay exp2.dat --seed 9999 --map-out exp2.raw
//! coreslam-replay exp2.dat --config configs/coreslam.toml --deterministic
//! ```

use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use coreslam::config::CoreSlamConfig;
use coreslam::engine::{PoseEstimator, SearchStrategy};
use coreslam::io::MinesLog;
use coreslam::sensors::odometry::WheelOdometry;

#[derive(Parser)]
#[command(name = "coreslam-replay")]
#[command(about = "Run CoreSLAM over a recorded Mines log")]
struct Args {
    /// Input log file
    log: PathBuf,

    /// TOML configuration (defaults to the Mines rover setup)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Trust odometry instead of running RMHC
    #[arg(long)]
    deterministic: bool,

    /// Seed for the RMHC random source
    #[arg(long)]
    seed: Option<u64>,

    /// Ignore wheel encoders and run scan-only
    #[arg(long)]
    no_odometry: bool,

    /// Write the final map here
    #[arg(long)]
    map_out: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> coreslam::Result<()> {
    let mut config = match &args.config {
        Some(path) => CoreSlamConfig::load(path)?,
        None => CoreSlamConfig::default(),
    };
    if args.deterministic {
        config.estimator.strategy = SearchStrategy::Deterministic;
    }
    if args.seed.is_some() {
        config.search.seed = args.seed;
    }

    let log = MinesLog::load(&args.log, config.sensor.ray_count)?;
    let mut slam = PoseEstimator::from_config(&config)?;
    let mut odometry = WheelOdometry::new(config.robot, config.encoder)?;

    let started = Instant::now();
    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (index, record) in log.records().iter().enumerate() {
        let delta = if args.no_odometry {
            None
        } else {
            Some(odometry.integrate(
                record.timestamp as f64,
                record.left_ticks as f64,
                record.right_ticks as f64,
            ))
        };

        let pose = slam.update(&record.ranges, delta)?;
        writeln!(out, "{:.3} {:.3} {:.3}", pose.x_mm, pose.y_mm, pose.theta_degrees)?;

        if (index + 1) % 100 == 0 {
            log::info!("Processed {}/{} scans", index + 1, log.len());
        }
    }
    out.flush()?;

    let elapsed = started.elapsed().as_secs_f64();
    log::info!(
        "{} scans in {:.2} s ({:.1} scans/s, {} search)",
        log.len(),
        elapsed,
        log.len() as f64 / elapsed.max(f64::EPSILON),
        slam.search_name()
    );

    if let Some(path) = &args.map_out {
        let size = slam.grid().size_pixels();
        std::fs::write(path, slam.export_map())?;
        log::info!("Wrote {}x{} map to {}", size, size, path.display());
    }

    Ok(())
}
