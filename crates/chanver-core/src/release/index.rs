//! `ChannelReleaseIndex`: channels, releases and membership for one version.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::messages::{ActionMessage, MessageSink};

use super::channel::ChannelOrder;
use super::order::ReleaseOrder;
use super::source::ReleaseListing;

/// Three views over one version's releases.
///
/// Every key of `releases` appears exactly once in `ordered_releases`, and
/// every channel listed for a release is a member of `ordered_channels`.
/// Serialized with the camelCase field names listing UIs expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelReleaseIndex {
    ordered_channels: ChannelOrder,
    ordered_releases: Vec<String>,
    releases: BTreeMap<String, Vec<String>>,
}

impl ChannelReleaseIndex {
    /// Build the index from raw repository data.
    ///
    /// Channels outside `order` are dropped (with a warning to `sink`), each
    /// release's channels are listed in precedence order, and releases are
    /// ordered by `policy`. Releases known only from membership data are
    /// included; releases with no known channel keep an empty set.
    pub fn assemble(
        order: &ChannelOrder,
        policy: ReleaseOrder,
        listing: ReleaseListing,
        sink: &dyn MessageSink,
    ) -> Self {
        let mut releases: BTreeMap<String, Vec<String>> = BTreeMap::new();

        for release in &listing.ordered_releases {
            releases.entry(release.clone()).or_default();
        }

        for (release, chans) in listing.channels {
            let mut known: Vec<String> = Vec::with_capacity(chans.len());
            for ch in chans {
                if !order.contains(&ch) {
                    tracing::warn!(release = %release, channel = %ch, "dropping unknown channel");
                    sink.emit(ActionMessage::warn(format!(
                        "release {release} lists unknown channel '{ch}', ignored"
                    )));
                    continue;
                }
                if !known.contains(&ch) {
                    known.push(ch);
                }
            }
            releases.entry(release).or_default().extend(known);
        }

        for chans in releases.values_mut() {
            chans.sort_by_key(|c| order.position(c));
        }

        let mut ordered_releases: Vec<String> = releases.keys().cloned().collect();
        policy.sort(&mut ordered_releases);

        Self {
            ordered_channels: order.clone(),
            ordered_releases,
            releases,
        }
    }

    pub fn ordered_channels(&self) -> &ChannelOrder {
        &self.ordered_channels
    }

    pub fn ordered_releases(&self) -> &[String] {
        &self.ordered_releases
    }

    pub fn releases(&self) -> &BTreeMap<String, Vec<String>> {
        &self.releases
    }

    /// Channels `release` satisfies, in precedence order.
    pub fn channels_of(&self, release: &str) -> &[String] {
        self.releases.get(release).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Releases satisfying `channel`, in `ordered_releases` order.
    pub fn releases_in<'a>(&'a self, channel: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.ordered_releases
            .iter()
            .filter(move |r| self.channels_of(r).iter().any(|c| c == channel))
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.ordered_releases.is_empty()
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
