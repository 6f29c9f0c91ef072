//! `chanver list` – known MAJOR.MINOR versions.

use anyhow::Result;
use chanver_core::config::ChanverConfig;
use chanver_core::release::AvailableReleases;

use super::{blocking, informer};

pub async fn run_list(cfg: &ChanverConfig) -> Result<()> {
    let informer = informer(cfg)?;
    let versions = blocking(move || informer.major_minor_releases()).await?;
    if versions.is_empty() {
        println!("No versions available.");
    }
    for v in versions {
        println!("{v}");
    }
    Ok(())
}
