//! Channel precedence: the closed, stable-first set of channel names.

use serde::Serialize;

use crate::error::{Error, Result};

/// Most stable channel; always first in a [`ChannelOrder`].
pub const STABLE: &str = "stable";

/// Precedence used when the config does not override it.
pub const DEFAULT_CHANNELS: [&str; 4] = [STABLE, "ea", "beta", "alpha"];

/// Ordered, duplicate-free channel list starting with [`STABLE`].
///
/// Used for presentation and iteration order only; it never decides which
/// release a channel resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ChannelOrder(Vec<String>);

impl ChannelOrder {
    /// Validate a precedence list: non-empty, no duplicates, `stable` first.
    pub fn new<I, S>(channels: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = Vec::new();
        for ch in channels {
            let ch = ch.into().trim().to_string();
            if ch.is_empty() {
                return Err(invalid("empty channel name"));
            }
            if list.contains(&ch) {
                return Err(invalid(format!("duplicate channel '{ch}'")));
            }
            list.push(ch);
        }
        match list.first() {
            None => Err(invalid("channel list is empty")),
            Some(first) if first != STABLE => Err(invalid(format!(
                "channel list must start with '{STABLE}', found '{first}'"
            ))),
            Some(_) => Ok(Self(list)),
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn contains(&self, channel: &str) -> bool {
        self.position(channel).is_some()
    }

    /// Precedence rank of `channel` (0 = stable).
    pub fn position(&self, channel: &str) -> Option<usize> {
        self.0.iter().position(|c| c == channel)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for ChannelOrder {
    fn default() -> Self {
        Self(DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect())
    }
}

fn invalid(reason: impl Into<String>) -> Error {
    Error::InvalidConfig {
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_stable_first() {
        let order = ChannelOrder::default();
        assert_eq!(order.as_slice()[0], STABLE);
        assert_eq!(order.position("alpha"), Some(3));
        assert!(!order.contains("nightly"));
    }

    #[test]
    fn accepts_custom_order() {
        let order = ChannelOrder::new(["stable", "rock-solid", "ea"]).unwrap();
        assert_eq!(order.iter().collect::<Vec<_>>(), ["stable", "rock-solid", "ea"]);
    }

    #[test]
    fn rejects_duplicates() {
        assert!(ChannelOrder::new(["stable", "ea", "ea"]).is_err());
    }

    #[test]
    fn rejects_non_stable_first() {
        let err = ChannelOrder::new(["ea", "stable"]).unwrap_err();
        assert!(err.to_string().contains("must start with 'stable'"));
    }

    #[test]
    fn rejects_empty() {
        assert!(ChannelOrder::new(Vec::<String>::new()).is_err());
        assert!(ChannelOrder::new(["stable", " "]).is_err());
    }
}
