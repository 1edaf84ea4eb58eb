use crate::error::{Result as ServerErrorResult, ServerError};

use std::path::PathBuf;
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{LevelFilter, info};

/// Install the global fern logger.
///
/// Writes to `log_file` when given (never colored), otherwise to stdout,
/// colored when `colored` is set. `sqlx` statement logging is capped at warn.
pub fn initialize(
    log_level: emp_config::LogLevel,
    log_file: Option<PathBuf>,
    colored: bool,
) -> ServerErrorResult<()> {
    let level_filter = log_level.0;
    let colors = (colored && log_file.is_none()).then(|| {
        ColoredLevelConfig::new()
            .debug(Color::Blue)
            .info(Color::Green)
            .warn(Color::Yellow)
            .error(Color::Red)
    });

    let mut dispatch = Dispatch::new()
        .level(level_filter)
        .level_for("sqlx", LevelFilter::Warn)
        .format(move |out, message, record| {
            let level = match colors {
                Some(colors) => colors.color(record.level()).to_string(),
                None => record.level().to_string(),
            };
            out.finish(format_args!(
                "[{} - {}] {} [{}:{}]",
                humantime::format_rfc3339(SystemTime::now()),
                level,
                message,
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
            ))
        });

    dispatch = match log_file {
        Some(ref path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = fern::log_file(path).map_err(|e| ServerError::LogFile {
                path: path.display().to_string(),
                source: e,
            })?;
            dispatch.chain(file)
        }
        None => dispatch.chain(std::io::stdout()),
    };

    dispatch.apply().map_err(|e| ServerError::Logger {
        message: format!("Failed to initialize logger: {e}"),
    })?;

    match log_file {
        Some(path) => info!("Logger initialized: level={level_filter:?}, file={}", path.display()),
        None => info!("Logger initialized: level={level_filter:?}, stdout"),
    }

    Ok(())
}
