//! Tracing setup shared by the CLI and any other front end.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use std::sync::Arc;

use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Filter used when `RUST_LOG` is unset. HTTP internals only report warnings.
const DEFAULT_FILTER: &str = "info,hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn";

/// Installs the global tracing subscriber.
///
/// One fmt layer writes every event both to stderr and to `log_file_path` (appended,
/// parent directories created). Stdout is left to command output. Load `.env` before
/// calling this so `RUST_LOG` is honoured.
pub fn init_tracing(log_file_path: &str) -> anyhow::Result<()> {
    let log_file = open_log_file(Path::new(log_file_path))?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr.and(log_file))
        .with_ansi(false)
        .with_target(true)
        .compact();

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set global subscriber: {}", e))?;

    Ok(())
}

fn open_log_file(path: &Path) -> io::Result<Arc<File>> {
    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(Arc::new(file))
}
