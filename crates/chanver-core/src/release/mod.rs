//! Release channel resolution.
//!
//! Given a MAJOR.MINOR version, the informer asks a [`ReleaseSource`] which
//! releases exist and which channels each satisfies, and answers the three
//! questions the CLI needs: known versions, the full channel/release index,
//! and the release a channel currently points at. Channel precedence is
//! passed in at construction and only affects presentation order.

mod channel;
mod http;
mod index;
mod order;
mod source;

use std::sync::Arc;

use crate::error::{Error, Result};
use crate::messages::{ActionMessage, MessageSink, NullSink};

pub use channel::{ChannelOrder, DEFAULT_CHANNELS, STABLE};
pub use http::HttpReleaseSource;
pub use index::ChannelReleaseIndex;
pub use order::{parse_release, ReleaseOrder};
pub use source::{ReleaseListing, ReleaseSource, StaticReleaseSource};

/// Capability set consumed by `list`/`use`/`update` style commands.
///
/// Any implementation (remote-backed or a fixture) is substitutable.
pub trait AvailableReleases {
    /// Known MAJOR.MINOR lines.
    fn major_minor_releases(&self) -> Result<Vec<String>>;

    /// Channel precedence, releases and membership for `version`.
    fn all_channels_releases(&self, version: &str) -> Result<ChannelReleaseIndex>;

    /// The release `channel` currently resolves to for `version`.
    fn release(&self, version: &str, channel: &str) -> Result<String>;
}

/// [`AvailableReleases`] over a [`ReleaseSource`].
pub struct ReleaseInformer<S> {
    source: S,
    channels: ChannelOrder,
    order: ReleaseOrder,
    sink: Arc<dyn MessageSink>,
}

impl<S: ReleaseSource> ReleaseInformer<S> {
    pub fn new(source: S, channels: ChannelOrder) -> Self {
        Self {
            source,
            channels,
            order: ReleaseOrder::default(),
            sink: Arc::new(NullSink),
        }
    }

    /// Send progress messages to `sink` instead of dropping them.
    pub fn with_sink(mut self, sink: Arc<dyn MessageSink>) -> Self {
        self.sink = sink;
        self
    }
}

impl<S: ReleaseSource> AvailableReleases for ReleaseInformer<S> {
    /// Placeholder: the repository exposes no version listing yet, so this
    /// is always empty.
    fn major_minor_releases(&self) -> Result<Vec<String>> {
        Ok(Vec::new())
    }

    fn all_channels_releases(&self, version: &str) -> Result<ChannelReleaseIndex> {
        self.sink.emit(ActionMessage::info(format!(
            "fetching channel data for {version}"
        )));
        let listing = self.source.releases(version)?;
        let index = ChannelReleaseIndex::assemble(&self.channels, self.order, listing, &*self.sink);
        tracing::debug!(version, releases = index.ordered_releases().len(), "channel index assembled");
        Ok(index)
    }

    fn release(&self, version: &str, channel: &str) -> Result<String> {
        let not_found = || Error::ChannelNotFound {
            version: version.to_string(),
            channel: channel.to_string(),
        };
        if !self.channels.contains(channel) {
            tracing::debug!(channel, "channel not in configured precedence list");
            return Err(not_found());
        }

        self.sink.emit(ActionMessage::info(format!(
            "fetching latest {version} release in channel '{channel}'"
        )));
        let release = self
            .source
            .latest_release(version, channel)?
            .ok_or_else(not_found)?;
        tracing::info!(version, channel, release = %release, "release resolved");
        Ok(release)
    }
}
