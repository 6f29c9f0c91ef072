//! Checksum command: compute SHA-256 of a file.

use anyhow::Result;
use chanver_core::checksum;
use std::path::PathBuf;

use super::blocking;

/// Compute and print SHA-256 of the given file as a manifest line.
pub async fn run_checksum(path: PathBuf) -> Result<()> {
    let digest = {
        let path = path.clone();
        blocking(move || checksum::sha256_path(&path)).await?
    };
    println!("{}  {}", digest, path.display());
    Ok(())
}
