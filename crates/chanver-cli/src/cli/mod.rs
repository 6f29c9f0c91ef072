//! CLI for the chanver version manager helper.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use chanver_core::config;
use chanver_core::manifest::MANIFEST_FILE;
use std::path::PathBuf;

use commands::{
    run_channels, run_checksum, run_completions, run_files, run_list, run_man, run_release,
    run_verify,
};

/// Top-level CLI for chanver.
#[derive(Debug, Parser)]
#[command(name = "chanver")]
#[command(about = "chanver: resolve release channels and verify downloaded binaries", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/chanver/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List known MAJOR.MINOR versions.
    List,

    /// Show channels, releases and channel membership for a MAJOR.MINOR version.
    Channels {
        /// MAJOR.MINOR version, e.g. 1.1.
        version: String,
        /// Print the index as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the release a channel currently resolves to.
    Release {
        /// MAJOR.MINOR version, e.g. 1.1.
        version: String,
        /// Channel name, e.g. stable.
        channel: String,
    },

    /// Print the release file names for a version.
    Files {
        /// Release version, e.g. v1.1.1.
        version: String,
        /// Target platform (default: this machine), e.g. linux-amd64.
        #[arg(long, value_name = "OS-ARCH")]
        os_arch: Option<String>,
    },

    /// Verify downloaded files against the hash manifest in DIR.
    Verify {
        /// Directory holding the manifest and the files.
        dir: PathBuf,
        /// File names (relative to DIR) to verify.
        #[arg(required = true)]
        targets: Vec<String>,
        /// Manifest file name inside DIR.
        #[arg(long, default_value = MANIFEST_FILE)]
        manifest: String,
    },

    /// Compute SHA-256 of a file (manifest line format).
    Checksum {
        /// Path to the file.
        path: PathBuf,
    },

    /// Generate shell completions on stdout.
    Completions {
        /// Target shell.
        shell: clap_complete::Shell,
    },

    /// Generate a man page on stdout.
    Man,
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = match &cli.config {
            Some(path) => config::load_or_init_at(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::List => run_list(&cfg).await?,
            CliCommand::Channels { version, json } => run_channels(&cfg, version, json).await?,
            CliCommand::Release { version, channel } => {
                run_release(&cfg, version, channel).await?
            }
            CliCommand::Files { version, os_arch } => run_files(&cfg, &version, os_arch.as_deref()),
            CliCommand::Verify {
                dir,
                targets,
                manifest,
            } => run_verify(dir, targets, manifest).await?,
            CliCommand::Checksum { path } => run_checksum(path).await?,
            CliCommand::Completions { shell } => run_completions(shell),
            CliCommand::Man => run_man()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
