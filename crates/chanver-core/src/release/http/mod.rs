//! Release source backed by a JSON channel feed fetched over HTTP.
//!
//! Uses the curl crate (libcurl). Every query fetches the feed again so
//! answers reflect the repository's current state; no retries are made here.
//! Runs in the current thread; call from `spawn_blocking` if used from async code.

mod feed;

use std::time::Duration;

use url::Url;

use crate::config::RepositoryConfig;
use crate::error::{Error, Result};

use super::source::{ReleaseListing, ReleaseSource};

use feed::ChannelFeed;

/// Live repository client.
#[derive(Debug, Clone)]
pub struct HttpReleaseSource {
    feed_url: Url,
    connect_timeout: Duration,
    timeout: Duration,
}

impl HttpReleaseSource {
    pub fn new(feed_url: Url) -> Self {
        Self {
            feed_url,
            connect_timeout: Duration::from_secs(15),
            timeout: Duration::from_secs(30),
        }
    }

    /// Build from `[repository]` config: `base_url` joined with `feed_path`.
    pub fn from_config(cfg: &RepositoryConfig) -> Result<Self> {
        let feed_url = feed_url(&cfg.base_url, &cfg.feed_path)?;
        Ok(Self {
            feed_url,
            connect_timeout: Duration::from_secs(cfg.connect_timeout_secs),
            timeout: Duration::from_secs(cfg.timeout_secs),
        })
    }

    pub fn feed_url(&self) -> &Url {
        &self.feed_url
    }

    fn fetch(&self) -> Result<ChannelFeed> {
        let url = self.feed_url.as_str();
        tracing::debug!(url, "fetching channel feed");
        let fail = |e: curl::Error| Error::upstream(format!("GET {url}: {e}"));

        let mut body: Vec<u8> = Vec::new();
        let mut easy = curl::easy::Easy::new();
        easy.url(url).map_err(fail)?;
        easy.follow_location(true).map_err(fail)?;
        easy.connect_timeout(self.connect_timeout).map_err(fail)?;
        easy.timeout(self.timeout).map_err(fail)?;

        {
            let mut transfer = easy.transfer();
            transfer
                .write_function(|data| {
                    body.extend_from_slice(data);
                    Ok(data.len())
                })
                .map_err(fail)?;
            transfer.perform().map_err(fail)?;
        }

        // file:// transfers report no HTTP status.
        if self.feed_url.scheme() != "file" {
            let code = easy.response_code().map_err(fail)?;
            if !(200..300).contains(&code) {
                return Err(Error::upstream(format!("GET {url} returned HTTP {code}")));
            }
        }

        tracing::debug!(url, bytes = body.len(), "channel feed fetched");
        ChannelFeed::parse(&body)
    }
}

impl ReleaseSource for HttpReleaseSource {
    fn releases(&self, version: &str) -> Result<ReleaseListing> {
        Ok(self.fetch()?.listing(version))
    }

    fn latest_release(&self, version: &str, channel: &str) -> Result<Option<String>> {
        Ok(self.fetch()?.latest(version, channel))
    }
}

/// Join `base` and `path`, treating `base` as a directory.
fn feed_url(base: &str, path: &str) -> Result<Url> {
    let invalid = |e: url::ParseError| Error::InvalidConfig {
        reason: format!("repository url '{base}' / '{path}': {e}"),
    };
    let mut base = base.to_string();
    if !base.ends_with('/') {
        base.push('/');
    }
    Url::parse(&base)
        .and_then(|b| b.join(path.trim_start_matches('/')))
        .map_err(invalid)
}
