//! Logging init: append to a file under the XDG state dir, or to stderr.
//!
//! Both paths share one subscriber setup; only the writer differs. The filter
//! comes from `RUST_LOG`, defaulting to `info` with debug for pagecheck crates.

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,pagecheck=debug,pagecheck_core=debug";
const LOG_FILE: &str = "pagecheck.log";

fn install(writer: BoxMakeWriter) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("{e}"))
}

/// Creates `dir` if needed and opens `dir/pagecheck.log` for appending.
fn open_log_file(dir: &Path) -> Result<(PathBuf, fs::File)> {
    fs::create_dir_all(dir)?;
    let path = dir.join(LOG_FILE);
    let file = fs::OpenOptions::new().create(true).append(true).open(&path)?;
    Ok((path, file))
}

/// Log to `~/.local/state/pagecheck/pagecheck.log`.
/// On failure (e.g. log dir unwritable), returns Err so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pagecheck")?;
    let (path, file) = open_log_file(&xdg_dirs.get_state_home().join("pagecheck"))?;

    // `&File` is `Write`, so every event writes through the one shared handle.
    install(BoxMakeWriter::new(Arc::new(file)))?;
    tracing::info!("pagecheck logging initialized at {}", path.display());
    Ok(())
}

/// Log to stderr. Use when `init_logging()` fails so the CLI still runs.
pub fn init_logging_stderr() {
    let _ = install(BoxMakeWriter::new(std::io::stderr));
}
