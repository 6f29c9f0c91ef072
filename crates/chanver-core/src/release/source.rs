//! The repository collaborator: where raw release/channel data comes from.

use std::collections::BTreeMap;

use crate::error::Result;

use super::order::ReleaseOrder;

/// Raw per-version data as the repository reports it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReleaseListing {
    /// Releases of the version, in the repository's order.
    pub ordered_releases: Vec<String>,
    /// Release -> channels it currently satisfies.
    pub channels: BTreeMap<String, Vec<String>>,
}

/// Query surface required from a release repository.
///
/// Implementations report every failure as [`crate::Error::Upstream`].
pub trait ReleaseSource: Send + Sync {
    /// Releases of `version` and their channel membership.
    fn releases(&self, version: &str) -> Result<ReleaseListing>;

    /// The release the repository designates as latest for `channel`, if any.
    fn latest_release(&self, version: &str, channel: &str) -> Result<Option<String>>;
}

/// In-memory repository.
///
/// "Latest" for a channel is the newest release (per [`ReleaseOrder`]) whose
/// channel set contains it.
#[derive(Debug, Clone, Default)]
pub struct StaticReleaseSource {
    versions: BTreeMap<String, ReleaseListing>,
}

impl StaticReleaseSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `release` under `version`, satisfying `channels`.
    pub fn with_release<I, S>(mut self, version: &str, release: &str, channels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let listing = self.versions.entry(version.to_string()).or_default();
        if !listing.ordered_releases.iter().any(|r| r == release) {
            listing.ordered_releases.push(release.to_string());
        }
        listing
            .channels
            .entry(release.to_string())
            .or_default()
            .extend(channels.into_iter().map(Into::into));
        self
    }
}

impl ReleaseSource for StaticReleaseSource {
    fn releases(&self, version: &str) -> Result<ReleaseListing> {
        Ok(self.versions.get(version).cloned().unwrap_or_default())
    }

    fn latest_release(&self, version: &str, channel: &str) -> Result<Option<String>> {
        let Some(listing) = self.versions.get(version) else {
            return Ok(None);
        };
        let mut candidates: Vec<String> = listing
            .channels
            .iter()
            .filter(|(_, chans)| chans.iter().any(|c| c == channel))
            .map(|(release, _)| release.clone())
            .collect();
        ReleaseOrder::NewestFirst.sort(&mut candidates);
        Ok(candidates.into_iter().next())
    }
}
