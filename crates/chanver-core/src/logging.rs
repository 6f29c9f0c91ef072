//! Process-wide tracing setup.
//!
//! Logs go to `$XDG_STATE_HOME/chanver/chanver.log` when that file can be
//! opened, otherwise to stderr. `RUST_LOG` overrides [`DEFAULT_FILTER`].

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_FILTER: &str = "info,chanver=debug,chanver_core=debug";

const LOG_FILE: &str = "chanver.log";

/// Where [`init`] ended up sending log records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    File(PathBuf),
    Stderr,
}

/// Path of the log file under the XDG state dir (not created).
pub fn log_file_path() -> Result<PathBuf> {
    let dirs = xdg::BaseDirectories::with_prefix("chanver").context("resolve XDG dirs")?;
    Ok(dirs.get_state_home().join(LOG_FILE))
}

/// Install the global subscriber. A log file that cannot be opened falls back
/// to stderr with a warning; a second call leaves the first subscriber in place.
pub fn init() -> LogDestination {
    match log_file_path().and_then(|path| open_log_file(&path).map(|f| (path, f))) {
        Ok((path, file)) => {
            install(Mutex::new(file));
            tracing::info!(path = %path.display(), "logging initialized");
            LogDestination::File(path)
        }
        Err(err) => {
            install(std::io::stderr);
            tracing::warn!("file logging unavailable: {err:#}");
            LogDestination::Stderr
        }
    }
}

fn open_log_file(path: &std::path::Path) -> Result<File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open {}", path.display()))
}

fn install<W>(writer: W)
where
    W: for<'a> tracing_subscriber::fmt::MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_parses() {
        assert!(EnvFilter::try_new(DEFAULT_FILTER).is_ok());
    }

    #[test]
    fn log_file_is_named_after_package() {
        if let Ok(path) = log_file_path() {
            assert!(path.ends_with("chanver/chanver.log"));
        }
    }

    #[test]
    fn open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state/chanver/chanver.log");
        open_log_file(&path).unwrap();
        assert!(path.is_file());
    }
}
