//! Generic logger utility functions

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

// External imports
use colored::{ColoredString, Colorize};
use fern;
use log::{self, info};
use thiserror::Error;

// Internal imports
use crate::session;

// Re-exports
pub use log::LevelFilter;

// ---------------------------------------------------------------------------
// ENUMERATIONS
// ---------------------------------------------------------------------------

/// Errors associated with initialising the logger.
#[derive(Debug, Error)]
pub enum LoggerInitError {
    #[error("Expected a log level of at least `INFO`, found `{0}`")]
    InvalidMinLogLevel(log::LevelFilter),

    #[error("Error initialising the log file: {0}")]
    LogFileInitError(std::io::Error),

    #[error("An error occured while setting up the logger: {0}")]
    FernInitError(log::SetLoggerError),
}

// ---------------------------------------------------------------------------
// PUBLIC FUNCTIONS
// ---------------------------------------------------------------------------

/// Initialise the logger for this execution.
///
/// The terminal shows messages at `min_level` and above. The session log file always keeps
/// `Debug` detail as well, so override engagement and input events can be reviewed after a run
/// without flooding the terminal at 50 Hz. File lines carry no colour codes.
///
/// # Notes
///
/// - `min_level` must be `Info` or more verbose, mode changes are reported at `Info` and must
///   never be filtered out.
///
/// # Safety
///
/// - This function must only be called once to prevent corrupting logs.
pub fn logger_init(
    min_level: self::LevelFilter,
    session: &session::Session,
) -> Result<(), LoggerInitError> {
    if min_level < log::Level::Info {
        return Err(LoggerInitError::InvalidMinLogLevel(min_level));
    }

    let file_level = file_level(min_level);

    let log_file =
        fern::log_file(session.log_file_path.clone()).map_err(LoggerInitError::LogFileInitError)?;

    let terminal = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(
                    session::get_elapsed_seconds(),
                    record.level(),
                    record.target(),
                    message,
                    true
                )
            ))
        })
        .level(min_level)
        .chain(std::io::stdout());

    let file = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{}",
                format_line(
                    session::get_elapsed_seconds(),
                    record.level(),
                    record.target(),
                    message,
                    false
                )
            ))
        })
        .level(file_level)
        .chain(log_file);

    fern::Dispatch::new()
        .level(file_level)
        .chain(terminal)
        .chain(file)
        .apply()
        .map_err(LoggerInitError::FernInitError)?;

    info!("Logging initialised");
    info!("    Session epoch: {}", session::get_epoch());
    info!("    Terminal log level: {:?}", min_level);
    info!("    File log level: {:?}", file_level);
    info!("    Log file path: {:?}", session.log_file_path);

    Ok(())
}

// ---------------------------------------------------------------------------
// PRIVATE FUNCTIONS
// ---------------------------------------------------------------------------

/// The level the session log file is written at, never less verbose than `Debug`.
fn file_level(min_level: LevelFilter) -> LevelFilter {
    std::cmp::max(min_level, LevelFilter::Debug)
}

/// Format one log line.
///
/// Debug and trace lines include the target module so per-cycle detail can be traced back.
fn format_line(
    elapsed_s: f64,
    level: log::Level,
    target: &str,
    message: &std::fmt::Arguments,
    colour: bool,
) -> String {
    let tag = if colour {
        level_to_str(level).to_string()
    } else {
        level_to_plain_str(level).to_string()
    };

    if level > log::Level::Info {
        format!("[{:10.6} {}] {}: {}", elapsed_s, tag, target, message)
    } else {
        format!("[{:10.6} {}] {}", elapsed_s, tag, message)
    }
}

/// Get the coloured representation of a log level
fn level_to_str(level: log::Level) -> ColoredString {
    let tag = level_to_plain_str(level);
    match level {
        log::Level::Trace => tag.dimmed().italic(),
        log::Level::Debug => tag.dimmed(),
        log::Level::Info => tag.normal(),
        log::Level::Warn => tag.yellow(),
        log::Level::Error => tag.red().bold(),
    }
}

/// Get the uncoloured representation of a log level
fn level_to_plain_str(level: log::Level) -> &'static str {
    match level {
        log::Level::Trace => "TRC",
        log::Level::Debug => "DBG",
        log::Level::Info => "INF",
        log::Level::Warn => "WRN",
        log::Level::Error => "ERR",
    }
}
