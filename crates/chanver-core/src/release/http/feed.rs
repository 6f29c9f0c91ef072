//! JSON channel feed: per MAJOR.MINOR group, the release each channel points at.
//!
//! ```json
//! {"groups":[{"name":"1.1","channels":[{"name":"stable","version":"v1.1.1"}]}]}
//! ```

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::release::order::ReleaseOrder;
use crate::release::source::ReleaseListing;

#[derive(Debug, Deserialize)]
pub(crate) struct ChannelFeed {
    #[serde(default)]
    pub groups: Vec<FeedGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedGroup {
    pub name: String,
    #[serde(default)]
    pub channels: Vec<FeedChannel>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeedChannel {
    pub name: String,
    pub version: String,
}

impl ChannelFeed {
    pub(crate) fn parse(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| Error::upstream(format!("malformed channel feed: {e}")))
    }

    fn group(&self, version: &str) -> Option<&FeedGroup> {
        self.groups.iter().find(|g| g.name == version)
    }

    /// Invert the group's channel -> release pointers into membership sets.
    pub(crate) fn listing(&self, version: &str) -> ReleaseListing {
        let mut channels: BTreeMap<String, Vec<String>> = BTreeMap::new();
        if let Some(group) = self.group(version) {
            for ch in &group.channels {
                let set = channels.entry(ch.version.clone()).or_default();
                if !set.contains(&ch.name) {
                    set.push(ch.name.clone());
                }
            }
        }
        let mut ordered_releases: Vec<String> = channels.keys().cloned().collect();
        ReleaseOrder::NewestFirst.sort(&mut ordered_releases);
        ReleaseListing {
            ordered_releases,
            channels,
        }
    }

    /// Release the feed points `channel` at; the first entry wins on repeats.
    pub(crate) fn latest(&self, version: &str, channel: &str) -> Option<String> {
        self.group(version)?
            .channels
            .iter()
            .find(|c| c.name == channel)
            .map(|c| c.version.clone())
    }
}
