use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::release::{ChannelOrder, DEFAULT_CHANNELS};

/// Where the channel feed lives (`[repository]` section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryConfig {
    /// Base URL of the release repository.
    pub base_url: String,
    /// Feed path relative to `base_url`.
    #[serde(default = "default_feed_path")]
    pub feed_path: String,
    /// Connect timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_feed_path() -> String {
    "channels.json".to_string()
}

fn default_connect_timeout() -> u64 {
    15
}

fn default_timeout() -> u64 {
    30
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://releases.chanver.dev/".to_string(),
            feed_path: default_feed_path(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Global configuration loaded from `~/.config/chanver/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChanverConfig {
    /// Channel precedence, most stable first. Must start with "stable".
    #[serde(default = "default_channels")]
    pub channels: Vec<String>,
    /// Package name used in release artifact names.
    #[serde(default = "default_package")]
    pub package: String,
    #[serde(default)]
    pub repository: RepositoryConfig,
}

fn default_channels() -> Vec<String> {
    DEFAULT_CHANNELS.iter().map(|c| c.to_string()).collect()
}

fn default_package() -> String {
    "chanver".to_string()
}

impl Default for ChanverConfig {
    fn default() -> Self {
        Self {
            channels: default_channels(),
            package: default_package(),
            repository: RepositoryConfig::default(),
        }
    }
}

impl ChanverConfig {
    /// Validated channel precedence.
    pub fn channel_order(&self) -> crate::Result<ChannelOrder> {
        ChannelOrder::new(self.channels.iter().cloned())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("chanver")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ChanverConfig> {
    load_or_init_at(&config_path()?)
}

/// Like [`load_or_init`] with an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<ChanverConfig> {
    if !path.exists() {
        let default_cfg = ChanverConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: ChanverConfig = toml::from_str(&data)?;
    cfg.channel_order()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = ChanverConfig::default();
        assert_eq!(cfg.channels, ["stable", "ea", "beta", "alpha"]);
        assert_eq!(cfg.package, "chanver");
        assert_eq!(cfg.repository.feed_path, "channels.json");
        assert_eq!(cfg.repository.connect_timeout_secs, 15);
        assert_eq!(cfg.repository.timeout_secs, 30);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ChanverConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ChanverConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.channels, cfg.channels);
        assert_eq!(parsed.package, cfg.package);
        assert_eq!(parsed.repository.base_url, cfg.repository.base_url);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            channels = ["stable", "rock-solid", "ea"]
            package = "werf"

            [repository]
            base_url = "https://mirror.example.org/releases"
            timeout_secs = 5
        "#;
        let cfg: ChanverConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.package, "werf");
        assert_eq!(cfg.repository.base_url, "https://mirror.example.org/releases");
        assert_eq!(cfg.repository.timeout_secs, 5);
        assert_eq!(cfg.repository.connect_timeout_secs, 15);
        let order = cfg.channel_order().unwrap();
        assert_eq!(order.position("rock-solid"), Some(1));
    }

    #[test]
    fn empty_toml_uses_defaults() {
        let cfg: ChanverConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.channels.len(), 4);
        assert!(cfg.channel_order().is_ok());
    }

    #[test]
    fn load_or_init_creates_then_reads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let created = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        let loaded = load_or_init_at(&path).unwrap();
        assert_eq!(loaded.channels, created.channels);
    }

    #[test]
    fn load_rejects_bad_precedence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "channels = [\"beta\", \"stable\"]\n").unwrap();
        let err = load_or_init_at(&path).unwrap_err();
        assert!(err.to_string().contains("must start with 'stable'"));
    }
}
