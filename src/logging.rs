use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Where log lines go. The TUI owns the terminal, so it logs to a file.
pub(crate) enum LogTarget<'a> {
    File(&'a Path),
    Stderr,
}

/// `RUST_LOG` wins over the configured level.
fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub(crate) fn init(target: LogTarget<'_>, default_level: &str) -> Result<()> {
    let (writer, ansi) = match target {
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            (BoxMakeWriter::new(Mutex::new(file)), false)
        }
        LogTarget::Stderr => (BoxMakeWriter::new(std::io::stderr), true),
    };

    let fmt_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(ansi)
        .with_target(true);

    tracing_subscriber::registry()
        .with(build_filter(default_level))
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise logging: {e}"))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn test_build_filter_falls_back_on_garbage() {
        // An unparseable level must not panic.
        let filter = build_filter("not a [valid filter");
        assert!(!filter.to_string().is_empty());
    }

    #[test]
    fn test_init_creates_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("finboard.log");
        // Another test may already have set the global subscriber. That is
        // the only failure tolerated here.
        if let Err(e) = init(LogTarget::File(&path), "debug") {
            assert!(
                e.to_string().starts_with("Failed to initialise logging"),
                "unexpected error: {e:#}"
            );
        }
        assert!(path.exists());
    }

    #[test]
    fn test_init_reports_unopenable_log_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("finboard.log");
        let err = init(LogTarget::File(&path), "info").unwrap_err();
        assert!(err.to_string().starts_with("Failed to open log file"));
    }
}
