//! Logging setup.
//!
//! Records always go to a log file since the interactive form owns the
//! terminal. One-shot runs can additionally echo warnings to stderr.

use std::io::stderr;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

use crate::error::LoggerError;

static INIT_LOCK: Mutex<()> = Mutex::new(());

static LOGGER_INITIALIZED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "passform.log";

/// Initialize logging into `log_dir`, creating the directory if needed.
///
/// Safe to call more than once; once a call succeeds, later calls log a
/// warning and return Ok. A failed call leaves the logger uninstalled so a
/// later call can retry.
pub fn initialize(
    log_dir: &Path,
    level: LevelFilter,
    echo_stderr: bool,
) -> Result<(), LoggerError> {
    let _lock = INIT_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());

    if LOGGER_INITIALIZED.load(Ordering::SeqCst) {
        warn!("Logger already initialized");
        return Ok(());
    }

    initialize_internal(log_dir, level, echo_stderr)?;
    LOGGER_INITIALIZED.store(true, Ordering::SeqCst);
    info!("Logger initialized with level: {level:?}");
    Ok(())
}

fn initialize_internal(
    log_dir: &Path,
    level: LevelFilter,
    echo_stderr: bool,
) -> Result<(), LoggerError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);
    let file_error = |source| LoggerError::File {
        path: log_file_path.display().to_string(),
        source,
    };

    std::fs::create_dir_all(log_dir).map_err(file_error)?;
    let log_file = fern::log_file(&log_file_path).map_err(file_error)?;

    let file_dispatch = Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(log_file);

    let mut base_dispatch = Dispatch::new().level(level).chain(file_dispatch);

    if echo_stderr {
        let colors = ColoredLevelConfig::new()
            .debug(Blue)
            .info(Green)
            .warn(Yellow)
            .error(Red)
            .trace(Magenta);

        base_dispatch = base_dispatch.chain(
            Dispatch::new()
                .level(LevelFilter::Warn)
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{level}] {message}",
                        level = colors.color(record.level()),
                    ))
                })
                .chain(stderr()),
        );
    }

    base_dispatch.apply()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    #[test]
    #[serial]
    fn failed_initialize_can_be_retried() {
        let failed = initialize(Path::new("/dev/null/passform"), LevelFilter::Debug, false);
        assert!(
            matches!(failed, Err(LoggerError::File { .. })),
            "unwritable dir should fail: {failed:?}"
        );
        assert!(!LOGGER_INITIALIZED.load(Ordering::SeqCst));

        let dir = tempfile::tempdir().unwrap();
        let first = initialize(dir.path(), LevelFilter::Debug, false);
        let second = initialize(dir.path(), LevelFilter::Debug, false);

        assert!(first.is_ok(), "retry should succeed: {first:?}");
        assert!(second.is_ok(), "second initialization should be a no-op");
        assert!(LOGGER_INITIALIZED.load(Ordering::SeqCst));
        assert!(dir.path().join(LOG_FILE_NAME).exists());
    }

    #[test]
    #[serial]
    fn unwritable_dir_is_reported() {
        let err = initialize_internal(Path::new("/dev/null/passform"), LevelFilter::Info, false)
            .unwrap_err();
        assert!(matches!(err, LoggerError::File { .. }), "got {err:?}");
    }
}
