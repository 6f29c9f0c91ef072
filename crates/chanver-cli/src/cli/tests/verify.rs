//! Tests for verify, checksum, completions and man subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_verify_defaults_manifest() {
    match parse(&["chanver", "verify", "/downloads", "chanver-linux-amd64-v1.1.1"]) {
        CliCommand::Verify {
            dir,
            targets,
            manifest,
        } => {
            assert_eq!(dir, std::path::PathBuf::from("/downloads"));
            assert_eq!(targets, ["chanver-linux-amd64-v1.1.1"]);
            assert_eq!(manifest, "SHA256SUMS");
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_parse_verify_many_targets_custom_manifest() {
    match parse(&["chanver", "verify", ".", "a", "b", "--manifest", "SUMS"]) {
        CliCommand::Verify {
            targets, manifest, ..
        } => {
            assert_eq!(targets, ["a", "b"]);
            assert_eq!(manifest, "SUMS");
        }
        _ => panic!("expected Verify"),
    }
}

#[test]
fn cli_verify_requires_target() {
    assert!(Cli::try_parse_from(["chanver", "verify", "."]).is_err());
}

#[test]
fn cli_parse_checksum() {
    match parse(&["chanver", "checksum", "/tmp/file.bin"]) {
        CliCommand::Checksum { path } => {
            assert_eq!(path, std::path::PathBuf::from("/tmp/file.bin"));
        }
        _ => panic!("expected Checksum"),
    }
}

#[test]
fn cli_parse_completions() {
    match parse(&["chanver", "completions", "bash"]) {
        CliCommand::Completions { shell } => assert_eq!(shell, clap_complete::Shell::Bash),
        _ => panic!("expected Completions"),
    }
}

#[test]
fn cli_parse_man() {
    match parse(&["chanver", "man"]) {
        CliCommand::Man => {}
        _ => panic!("expected Man"),
    }
}

#[test]
fn cli_definition_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
