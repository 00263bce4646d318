//! File logging bootstrap.
//!
//! # Responsibility
//! - Route `log` macro output to a rotating file in a caller-chosen
//!   directory.
//!
//! # Invariants
//! - One logger configuration per process: the first successful init wins
//!   and every later call must repeat it.
//! - Setup problems are reported as readable strings, never panics.

use flexi_logger::{
    Cleanup, Criterion, DeferredNow, FileSpec, Logger, LoggerHandle, Naming, WriteMode,
};
use log::{info, LevelFilter, Record};
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "ticklist";
const ROTATE_AT_BYTES: u64 = 5 * 1024 * 1024;
const KEEP_ROTATED_FILES: usize = 3;

static ACTIVE: OnceCell<ActiveLogging> = OnceCell::new();

struct ActiveLogging {
    filter: LevelFilter,
    dir: PathBuf,
    _handle: LoggerHandle,
}

/// Starts file logging, or confirms an earlier identical start.
///
/// `level` accepts `trace|debug|info|warn|error` in any case. The first
/// successful call fixes the configuration for the process; repeating it
/// is fine, changing it returns an error.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let filter = parse_level(level)?;
    let dir = log_dir.trim();
    if dir.is_empty() {
        return Err("log directory must not be blank".to_string());
    }
    let dir = PathBuf::from(dir);

    let active = ACTIVE.get_or_try_init(|| start_file_logger(filter, dir.clone()))?;
    if active.filter == filter && active.dir == dir {
        return Ok(());
    }
    Err(format!(
        "logging is already running at level {} in `{}`; a different setup needs a new process",
        spec_str(active.filter),
        active.dir.display()
    ))
}

/// Level and directory of the running logger, if any.
pub fn active_logging() -> Option<(LevelFilter, &'static Path)> {
    ACTIVE.get().map(|state| (state.filter, state.dir.as_path()))
}

/// Level used when the environment does not name one.
pub fn default_log_level() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "info"
    }
}

fn start_file_logger(filter: LevelFilter, dir: PathBuf) -> Result<ActiveLogging, String> {
    std::fs::create_dir_all(&dir)
        .map_err(|err| format!("cannot create log directory `{}`: {err}", dir.display()))?;

    let handle = Logger::try_with_str(spec_str(filter))
        .map_err(|err| format!("log spec rejected: {err}"))?
        .log_to_file(
            FileSpec::default()
                .directory(dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(ROTATE_AT_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(KEEP_ROTATED_FILES),
        )
        .append()
        .write_mode(WriteMode::BufferAndFlush)
        .format_for_files(format_line)
        .start()
        .map_err(|err| format!("logger failed to start: {err}"))?;

    let profile = if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    };
    info!(
        "event=logging_init module=core status=ok level={} dir={} build={profile} version={}",
        spec_str(filter),
        dir.display(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogging {
        filter,
        dir,
        _handle: handle,
    })
}

// Timestamp, level, module path, then the event line itself.
fn format_line(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record<'_>,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} {:<5} [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("?"),
        record.args()
    )
}

fn parse_level(raw: &str) -> Result<LevelFilter, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "trace" => Ok(LevelFilter::Trace),
        "debug" => Ok(LevelFilter::Debug),
        "info" => Ok(LevelFilter::Info),
        "warn" | "warning" => Ok(LevelFilter::Warn),
        "error" => Ok(LevelFilter::Error),
        other => Err(format!(
            "`{other}` is not a log level; use trace, debug, info, warn or error"
        )),
    }
}

fn spec_str(filter: LevelFilter) -> &'static str {
    match filter {
        LevelFilter::Off => "off",
        LevelFilter::Error => "error",
        LevelFilter::Warn => "warn",
        LevelFilter::Info => "info",
        LevelFilter::Debug => "debug",
        LevelFilter::Trace => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::{active_logging, init_logging, parse_level};
    use log::LevelFilter;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("ticklist-log-test-{}-{tag}", std::process::id()))
    }

    #[test]
    fn parse_level_is_case_insensitive() {
        assert_eq!(parse_level("WARN"), Ok(LevelFilter::Warn));
        assert_eq!(parse_level(" Error "), Ok(LevelFilter::Error));
        assert_eq!(parse_level("warning"), Ok(LevelFilter::Warn));
    }

    #[test]
    fn parse_level_rejects_unknown_names() {
        assert!(parse_level("loud").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn blank_log_dir_is_rejected() {
        assert!(init_logging("info", "   ").is_err());
    }

    #[test]
    fn second_init_must_repeat_the_first() {
        let dir = scratch_dir("primary");
        let dir_str = dir.to_string_lossy().into_owned();

        init_logging("warn", &dir_str).expect("initial setup");
        init_logging("WARN", &dir_str).expect("repeating the setup is accepted");

        let err = init_logging("info", &dir_str).expect_err("level change must be rejected");
        assert!(err.contains("already running"));

        let other = scratch_dir("other").to_string_lossy().into_owned();
        let err = init_logging("warn", &other).expect_err("directory change must be rejected");
        assert!(err.contains("already running"));

        let (filter, active_dir) = active_logging().expect("logger should be active");
        assert_eq!(filter, LevelFilter::Warn);
        assert_eq!(active_dir, dir.as_path());
    }
}
