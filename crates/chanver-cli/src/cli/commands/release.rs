//! `chanver release <version> <channel>` – resolve a channel to a release.

use anyhow::Result;
use chanver_core::config::ChanverConfig;
use chanver_core::release::AvailableReleases;

use super::{blocking, informer};

pub async fn run_release(cfg: &ChanverConfig, version: String, channel: String) -> Result<()> {
    let informer = informer(cfg)?;
    let release = blocking(move || informer.release(&version, &channel)).await?;
    println!("{release}");
    Ok(())
}
