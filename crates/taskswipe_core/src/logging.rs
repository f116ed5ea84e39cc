//! Rolling file logging for the core.
//!
//! # Responsibility
//! - Start the file logger at most once per process.
//! - Resolve logging configuration from host input or environment.
//!
//! # Invariants
//! - Repeating init with the same level and directory is a no-op.
//! - Switching level or directory after init is rejected.
//! - Init never panics.
//! - Events carry ids and counters only; task titles are never logged.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::{error, info};
use once_cell::sync::OnceCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Environment variable holding an absolute log directory.
pub const LOG_DIR_ENV: &str = "TASKSWIPE_LOG_DIR";
/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "TASKSWIPE_LOG_LEVEL";

const LOG_FILE_BASENAME: &str = "taskswipe";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;
const MAX_PANIC_PAYLOAD_CHARS: usize = 160;

static ACTIVE: OnceCell<ActiveLogger> = OnceCell::new();
static PANIC_HOOK: OnceCell<()> = OnceCell::new();

struct ActiveLogger {
    config: LogConfig,
    _handle: LoggerHandle,
}

/// Supported log levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Parses a case-insensitive level name; `warning` is accepted for `warn`.
    pub fn parse(value: &str) -> Result<Self, LoggingError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            other => Err(LoggingError::UnsupportedLevel(other.to_string())),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// `debug` in debug builds, `info` in release builds.
    pub fn build_default() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Info
        }
    }
}

/// Logging setup failure.
#[derive(Debug)]
pub enum LoggingError {
    UnsupportedLevel(String),
    InvalidDirectory(String),
    CreateDirectory { dir: PathBuf, source: std::io::Error },
    Backend(String),
    AlreadyInitialized { active: LogConfig, requested: LogConfig },
}

impl Display for LoggingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsupportedLevel(level) => write!(
                f,
                "unsupported log level `{level}`; expected trace|debug|info|warn|error"
            ),
            Self::InvalidDirectory(message) => write!(f, "{message}"),
            Self::CreateDirectory { dir, source } => write!(
                f,
                "failed to create log directory `{}`: {source}",
                dir.display()
            ),
            Self::Backend(message) => write!(f, "failed to start logger: {message}"),
            Self::AlreadyInitialized { active, requested } => write!(
                f,
                "logging already initialized with {}; refusing to switch to {}",
                active, requested
            ),
        }
    }
}

impl Error for LoggingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::CreateDirectory { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Resolved logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub dir: PathBuf,
}

impl Display for LogConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "level `{}` at `{}`", self.level.as_str(), self.dir.display())
    }
}

impl LogConfig {
    /// Validates raw host input.
    ///
    /// # Errors
    /// - `UnsupportedLevel` for unknown level names.
    /// - `InvalidDirectory` when `dir` is empty or relative.
    pub fn new(level: &str, dir: &str) -> Result<Self, LoggingError> {
        Ok(Self {
            level: LogLevel::parse(level)?,
            dir: normalize_log_dir(dir)?,
        })
    }

    /// Reads `TASKSWIPE_LOG_DIR` / `TASKSWIPE_LOG_LEVEL`.
    ///
    /// Returns `Ok(None)` when no directory is configured; the level falls
    /// back to the build default.
    pub fn from_env() -> Result<Option<Self>, LoggingError> {
        let Ok(dir) = std::env::var(LOG_DIR_ENV) else {
            return Ok(None);
        };
        let level = match std::env::var(LOG_LEVEL_ENV) {
            Ok(value) => LogLevel::parse(&value)?,
            Err(_) => LogLevel::build_default(),
        };
        Ok(Some(Self {
            level,
            dir: normalize_log_dir(&dir)?,
        }))
    }
}

/// Starts file logging with `config`.
///
/// Idempotent for an identical config; any other config after the first
/// successful init is rejected with `AlreadyInitialized`.
pub fn init_logging(config: &LogConfig) -> Result<(), LoggingError> {
    let active = ACTIVE.get_or_try_init(|| start_logger(config))?;
    if &active.config != config {
        return Err(LoggingError::AlreadyInitialized {
            active: active.config.clone(),
            requested: config.clone(),
        });
    }
    Ok(())
}

/// Returns the active logging config, if logging was started.
pub fn logging_status() -> Option<LogConfig> {
    ACTIVE.get().map(|active| active.config.clone())
}

fn start_logger(config: &LogConfig) -> Result<ActiveLogger, LoggingError> {
    std::fs::create_dir_all(&config.dir).map_err(|source| LoggingError::CreateDirectory {
        dir: config.dir.clone(),
        source,
    })?;

    let handle = Logger::try_with_str(config.level.as_str())
        .map_err(|err| LoggingError::Backend(err.to_string()))?
        .log_to_file(
            FileSpec::default()
                .directory(config.dir.as_path())
                .basename(LOG_FILE_BASENAME),
        )
        .rotate(
            Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
            Naming::Numbers,
            Cleanup::KeepLogFiles(MAX_LOG_FILES),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .append()
        // [YYYY-MM-DD HH:MM:SS.ffffff TZ] LEVEL [module] file:line: message
        .format_for_files(flexi_logger::detailed_format)
        .start()
        .map_err(|err| LoggingError::Backend(err.to_string()))?;

    install_panic_hook_once();

    info!(
        "event=core_init module=core status=ok platform={} level={} version={}",
        std::env::consts::OS,
        config.level.as_str(),
        env!("CARGO_PKG_VERSION")
    );

    Ok(ActiveLogger {
        config: config.clone(),
        _handle: handle,
    })
}

fn normalize_log_dir(dir: &str) -> Result<PathBuf, LoggingError> {
    let trimmed = dir.trim();
    if trimmed.is_empty() {
        return Err(LoggingError::InvalidDirectory(
            "log directory cannot be empty".to_string(),
        ));
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(LoggingError::InvalidDirectory(format!(
            "log directory must be an absolute path, got `{trimmed}`"
        )));
    }
    Ok(path.to_path_buf())
}

fn install_panic_hook_once() {
    if PANIC_HOOK.set(()).is_err() {
        return;
    }

    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        // Payload may echo task titles; keep it to one capped line.
        let location = info
            .location()
            .map(|loc| format!("{}:{}", loc.file(), loc.line()))
            .unwrap_or_else(|| "unknown".to_string());
        let payload = info
            .payload()
            .downcast_ref::<&str>()
            .map(|message| (*message).to_string())
            .or_else(|| info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "non-string panic payload".to_string());
        error!(
            "event=panic_captured module=core status=error location={} payload={}",
            location,
            single_line(&payload, MAX_PANIC_PAYLOAD_CHARS)
        );
        previous(info);
    }));
}

fn single_line(value: &str, max_chars: usize) -> String {
    let flattened = value.replace(['\n', '\r'], " ");
    let mut capped: String = flattened.chars().take(max_chars).collect();
    if flattened.chars().count() > max_chars {
        capped.push_str("...");
    }
    capped
}

#[cfg(test)]
mod tests {
    use super::{init_logging, logging_status, single_line, LogConfig, LogLevel, LoggingError};
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_temp_dir(suffix: &str) -> String {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time should be after unix epoch")
            .as_nanos();
        std::env::temp_dir()
            .join(format!("taskswipe-logging-{suffix}-{}-{nanos}", std::process::id()))
            .to_str()
            .expect("temp dir should be valid UTF-8")
            .to_string()
    }

    #[test]
    fn level_parse_accepts_aliases_and_case() {
        assert_eq!(LogLevel::parse("INFO").expect("INFO"), LogLevel::Info);
        assert_eq!(LogLevel::parse(" warning ").expect("warning"), LogLevel::Warn);
        assert!(matches!(
            LogLevel::parse("loud"),
            Err(LoggingError::UnsupportedLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn config_rejects_relative_directory() {
        let err = LogConfig::new("info", "logs/dev").expect_err("relative dir must fail");
        assert!(err.to_string().contains("absolute"));
    }

    #[test]
    fn single_line_flattens_and_caps() {
        let line = single_line("line1\nline2\rline3", 8);
        assert!(!line.contains('\n'));
        assert!(!line.contains('\r'));
        assert!(line.ends_with("..."));
    }

    #[test]
    fn init_is_idempotent_and_rejects_reconfiguration() {
        let first = LogConfig::new("info", &unique_temp_dir("same")).expect("config");
        let other_dir = LogConfig::new("info", &unique_temp_dir("other")).expect("config");
        let other_level = LogConfig {
            level: LogLevel::Debug,
            ..first.clone()
        };

        init_logging(&first).expect("first init should succeed");
        init_logging(&first).expect("same config should be idempotent");

        let err = init_logging(&other_level).expect_err("level switch should fail");
        assert!(err.to_string().contains("refusing to switch"));
        let err = init_logging(&other_dir).expect_err("dir switch should fail");
        assert!(matches!(err, LoggingError::AlreadyInitialized { .. }));

        assert_eq!(logging_status(), Some(first));
    }
}
