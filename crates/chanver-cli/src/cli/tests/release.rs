//! Tests for list, channels, release and files subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_list() {
    match parse(&["chanver", "list"]) {
        CliCommand::List => {}
        _ => panic!("expected List"),
    }
}

#[test]
fn cli_parse_channels() {
    match parse(&["chanver", "channels", "1.1"]) {
        CliCommand::Channels { version, json } => {
            assert_eq!(version, "1.1");
            assert!(!json);
        }
        _ => panic!("expected Channels"),
    }
}

#[test]
fn cli_parse_channels_json() {
    match parse(&["chanver", "channels", "1.1", "--json"]) {
        CliCommand::Channels { json, .. } => assert!(json),
        _ => panic!("expected Channels with --json"),
    }
}

#[test]
fn cli_parse_release() {
    match parse(&["chanver", "release", "1.1", "beta"]) {
        CliCommand::Release { version, channel } => {
            assert_eq!(version, "1.1");
            assert_eq!(channel, "beta");
        }
        _ => panic!("expected Release"),
    }
}

#[test]
fn cli_release_requires_channel() {
    assert!(Cli::try_parse_from(["chanver", "release", "1.1"]).is_err());
}

#[test]
fn cli_parse_files_os_arch() {
    match parse(&["chanver", "files", "v1.1.1", "--os-arch", "windows-amd64"]) {
        CliCommand::Files { version, os_arch } => {
            assert_eq!(version, "v1.1.1");
            assert_eq!(os_arch.as_deref(), Some("windows-amd64"));
        }
        _ => panic!("expected Files"),
    }
}

#[test]
fn cli_global_config_flag() {
    let cli = Cli::try_parse_from(["chanver", "release", "1.1", "stable", "--config", "/tmp/c.toml"])
        .unwrap();
    assert_eq!(cli.config.as_deref(), Some(std::path::Path::new("/tmp/c.toml")));
}
