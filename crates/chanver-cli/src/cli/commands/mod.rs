//! CLI command handlers. Each command is in its own file for clarity and line limit.

mod channels;
mod checksum;
mod docs;
mod files;
mod list;
mod release;
mod verify;

use anyhow::{Context, Result};
use chanver_core::config::ChanverConfig;
use chanver_core::messages::TracingSink;
use chanver_core::release::{HttpReleaseSource, ReleaseInformer};
use std::sync::Arc;

pub use channels::run_channels;
pub use checksum::run_checksum;
pub use docs::{run_completions, run_man};
pub use files::run_files;
pub use list::run_list;
pub use release::run_release;
pub use verify::run_verify;

/// Live informer for the configured repository and channel precedence.
fn informer(cfg: &ChanverConfig) -> Result<ReleaseInformer<HttpReleaseSource>> {
    let source = HttpReleaseSource::from_config(&cfg.repository)?;
    let channels = cfg.channel_order()?;
    Ok(ReleaseInformer::new(source, channels).with_sink(Arc::new(TracingSink)))
}

/// Run blocking core work (curl, file hashing) off the async runtime.
async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> chanver_core::Result<T> + Send + 'static,
    T: Send + 'static,
{
    Ok(tokio::task::spawn_blocking(f)
        .await
        .context("worker task join")??)
}

#[cfg(test)]
pub(crate) use channels::format_index;
#[cfg(test)]
pub(crate) use files::format_files;
