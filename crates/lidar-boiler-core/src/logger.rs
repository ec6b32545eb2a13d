//! Frame-oriented stderr logging for the command-line front end.
//!
//! Library code only emits through the `log` facade. Binaries pick a sink once
//! at startup from their `-v` count: [`init_from_verbosity`] installs the
//! plain `[elapsed LEVEL target] message` logger, and with the `tracing`
//! feature [`init_tracing`] installs a `tracing-subscriber` that also reports
//! span timings of the scan.

use std::io::Write;
use std::time::Instant;

use log::{LevelFilter, Log, Metadata, Record};

#[cfg(feature = "tracing")]
use tracing_subscriber::fmt::format::FmtSpan;
#[cfg(feature = "tracing")]
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
#[cfg(feature = "tracing")]
use tracing_subscriber::{fmt, EnvFilter};

/// 0 = warn, 1 = info, 2 = debug, 3+ = trace.
fn verbosity_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

struct FrameLogger {
    level: LevelFilter,
    started: Instant,
}

impl FrameLogger {
    fn new(verbosity: u8) -> Self {
        Self {
            level: verbosity_filter(verbosity),
            started: Instant::now(),
        }
    }

    fn write_record(&self, out: &mut impl Write, record: &Record) -> std::io::Result<()> {
        writeln!(
            out,
            "[{:7.3}s {:>5} {}] {}",
            self.started.elapsed().as_secs_f64(),
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for FrameLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = self.write_record(&mut std::io::stderr().lock(), record);
        }
    }

    fn flush(&self) {
        let _ = std::io::stderr().flush();
    }
}

/// Install the stderr frame logger for a `-v` count.
///
/// Fails if another logger was installed first.
pub fn init_from_verbosity(verbosity: u8) -> Result<(), log::SetLoggerError> {
    let logger = FrameLogger::new(verbosity);
    let level = logger.level;
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(level);
    Ok(())
}

/// Install a `tracing` subscriber with span-close timings.
///
/// `RUST_LOG` wins when set; otherwise the level follows the `-v` count.
#[cfg(feature = "tracing")]
pub fn init_tracing(verbosity: u8) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(verbosity_filter(verbosity).to_string().to_ascii_lowercase())
    });
    fmt()
        .with_env_filter(filter)
        .with_span_events(FmtSpan::CLOSE)
        .with_timer(fmt::time::Uptime::default())
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn verbosity_saturates_at_trace() {
        assert_eq!(verbosity_filter(0), LevelFilter::Warn);
        assert_eq!(verbosity_filter(2), LevelFilter::Debug);
        assert_eq!(verbosity_filter(9), LevelFilter::Trace);
    }

    #[test]
    fn quiet_logger_drops_info() {
        let logger = FrameLogger::new(0);
        let info = Metadata::builder().level(Level::Info).build();
        let warn = Metadata::builder().level(Level::Warn).build();
        assert!(!logger.enabled(&info));
        assert!(logger.enabled(&warn));
    }

    #[test]
    fn record_line_carries_level_and_target() {
        let logger = FrameLogger::new(1);
        let mut out = Vec::new();
        logger
            .write_record(
                &mut out,
                &Record::builder()
                    .level(Level::Info)
                    .target("lidar_boiler")
                    .args(format_args!("frame.json: 2 segments"))
                    .build(),
            )
            .expect("write");
        let line = String::from_utf8(out).expect("utf8");
        assert!(line.starts_with('['));
        assert!(line.ends_with(" INFO lidar_boiler] frame.json: 2 segments\n"));
    }
}
