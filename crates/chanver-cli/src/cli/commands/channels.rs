//! `chanver channels <version>` – channel/release index.

use anyhow::Result;
use chanver_core::config::ChanverConfig;
use chanver_core::release::{AvailableReleases, ChannelReleaseIndex};

use super::{blocking, informer};

pub async fn run_channels(cfg: &ChanverConfig, version: String, json: bool) -> Result<()> {
    let informer = informer(cfg)?;
    let index = blocking(move || informer.all_channels_releases(&version)).await?;
    if json {
        println!("{}", index.to_json_pretty()?);
    } else {
        print!("{}", format_index(&index));
    }
    Ok(())
}

/// One row per channel (precedence order) with the releases it holds,
/// then one row per release with its channels.
pub(crate) fn format_index(index: &ChannelReleaseIndex) -> String {
    if index.is_empty() {
        return "No releases found.\n".to_string();
    }
    let mut out = format!("{:<12} {}\n", "CHANNEL", "RELEASES");
    for ch in index.ordered_channels().iter() {
        let releases: Vec<&str> = index.releases_in(ch).collect();
        let shown = if releases.is_empty() {
            "-".to_string()
        } else {
            releases.join(", ")
        };
        out.push_str(&format!("{:<12} {}\n", ch, shown));
    }
    out.push('\n');
    out.push_str(&format!("{:<24} {}\n", "RELEASE", "CHANNELS"));
    for release in index.ordered_releases() {
        let chans = index.channels_of(release);
        let shown = if chans.is_empty() {
            "-".to_string()
        } else {
            chans.join(", ")
        };
        out.push_str(&format!("{:<24} {}\n", release, shown));
    }
    out
}
