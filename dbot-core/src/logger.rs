//! Tracing initialization: fmt layer (level, target, thread ids) on stdout, optionally tee'd to a log file.

use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry,
};

/// Initializes the global tracing subscriber.
///
/// Log level comes from `RUST_LOG` (e.g. info, debug); defaults to info. Load `.env` before calling,
/// otherwise `RUST_LOG` from the file is not seen. When `log_file_path` is set, the same output is
/// appended to that file (parent directory is created).
pub fn init_tracing(log_file_path: Option<&str>) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let base = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_file(false)
        .with_line_number(false);

    let registry = Registry::default().with(env_filter);

    let installed = match log_file_path {
        Some(path) => {
            let file = Arc::new(open_log_file(path)?);
            registry
                .with(base.with_writer(io::stdout.and(file)))
                .try_init()
        }
        None => registry.with(base.with_writer(io::stdout)).try_init(),
    };
    installed.map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

fn open_log_file(path: &str) -> io::Result<std::fs::File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)
}
