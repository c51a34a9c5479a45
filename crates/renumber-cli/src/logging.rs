use std::env;
use std::ffi::OsStr;
use std::path::Path;
use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Console diagnostics go to stderr so stdout carries only the progress lines.
///
/// Returns the file writer guard, which must live until exit. When the log
/// file cannot be opened only the stderr layer is installed.
pub fn init_logger() -> Option<WorkerGuard> {
    let console_filter = env::var("TRACING_LEVEL").unwrap_or_else(|_| "warn".to_string());
    let file_filter = env::var("FILE_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let log_file_path =
        env::var("LOG_FILE_PATH").unwrap_or_else(|_| "./logs/renumber.log".to_string());

    let (file_layer, guard) = match build_file_appender(Path::new(&log_file_path)) {
        Ok(file_appender) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_filter(EnvFilter::new(file_filter));
            (Some(layer), Some(guard))
        }
        Err(err) => {
            eprintln!(
                "Warning: file logging disabled, cannot open {}: {}",
                log_file_path, err
            );
            (None, None)
        }
    };

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_file(false)
                .without_time()
                .with_ansi(true)
                .with_filter(EnvFilter::new(console_filter)),
        )
        .with(file_layer)
        .init();

    debug!("Tracing is configured for stderr and file logging.");

    guard
}

/// Non-rotating appender writing to `path`, creating its directory.
pub fn build_file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let log_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let log_file_name = path
        .file_name()
        .unwrap_or_else(|| OsStr::new("renumber.log"));

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(log_file_name.to_string_lossy())
        .build(log_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_file_appender_creates_log_directory() {
        let tmp = tempdir().unwrap();
        let path = tmp.path().join("logs").join("renumber.log");

        build_file_appender(&path).unwrap();

        assert!(tmp.path().join("logs").is_dir());
    }

    #[test]
    fn test_file_appender_reports_unusable_directory() {
        let tmp = tempdir().unwrap();
        let blocker = tmp.path().join("not_a_dir");
        fs::write(&blocker, "").unwrap();

        let result = build_file_appender(&blocker.join("logs").join("renumber.log"));

        assert!(result.is_err());
    }
}
