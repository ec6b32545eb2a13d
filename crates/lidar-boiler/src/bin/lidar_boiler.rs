use std::{
    error::Error,
    path::{Path, PathBuf},
};

use clap::Parser;
use lidar_boiler::io::{load_params, BoilerReport, LidarBoilerIoError, SegmentFrame};
use lidar_boiler::{Alliance, BoilerDetector, BoilerParams};

/// Locate the boiler in fitted lidar segment frames.
#[derive(Debug, Parser)]
#[command(author, version, about = "Locate the boiler relative to the lidar head")]
struct Args {
    /// Frame files (JSON with a `segments` array), processed in order.
    #[arg(required = true)]
    frames: Vec<PathBuf>,

    /// Alliance whose boiler face is targeted: `blue` or `red`.
    #[arg(long, short)]
    alliance: Alliance,

    /// Optional JSON detector parameters. Defaults are used if omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Segment index the corner scan starts from.
    #[arg(long, default_value_t = 0)]
    start: usize,

    /// Print one JSON report per frame instead of `delta_x,delta_y` lines.
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    if let Err(err) = try_main() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn try_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    init_logging(args.verbose)?;

    let params = match &args.config {
        Some(path) => load_params(path)?,
        None => BoilerParams::default(),
    };
    let detector = BoilerDetector::new(params)?;

    for path in &args.frames {
        if let Some(line) = process_frame(&detector, path, &args)? {
            println!("{line}");
        }
    }
    Ok(())
}

fn process_frame(
    detector: &BoilerDetector,
    path: &Path,
    args: &Args,
) -> Result<Option<String>, LidarBoilerIoError> {
    let frame = SegmentFrame::load_json(path)?;
    let detection = match frame.ring() {
        Ok(ring) => detector.detect_from(&ring, args.start, args.alliance),
        Err(err) => {
            log::warn!("{}: {err}", path.display());
            None
        }
    };
    log::info!(
        "{}: {} segments, boiler {}",
        path.display(),
        frame.segments.len(),
        if detection.is_some() { "found" } else { "not found" }
    );

    if args.json {
        let report = BoilerReport::new(args.alliance, detection.as_ref())
            .with_frame(path.display().to_string());
        return Ok(Some(serde_json::to_string(&report)?));
    }
    Ok(detection.map(|found| format!("{},{}", found.location.delta_x, found.location.delta_y)))
}

#[cfg(feature = "tracing")]
fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    lidar_boiler::core::init_tracing(verbose)?;
    Ok(())
}

#[cfg(not(feature = "tracing"))]
fn init_logging(verbose: u8) -> Result<(), Box<dyn Error>> {
    lidar_boiler::core::init_from_verbosity(verbose)?;
    Ok(())
}
