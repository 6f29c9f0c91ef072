//! `chanver verify <dir> <target>...` – check files against the hash manifest.

use anyhow::{Context, Result};
use chanver_core::checksum::ChunkedHasher;
use chanver_core::messages::TracingSink;
use chanver_core::paths;
use chanver_core::verify::{IntegrityVerifier, VerificationOutcome};
use std::path::PathBuf;
use std::sync::Arc;

/// Verify each target on its own blocking task; fails if any is not verified.
pub async fn run_verify(dir: PathBuf, targets: Vec<String>, manifest: String) -> Result<()> {
    let dir = paths::expand_path(&dir.to_string_lossy())
        .with_context(|| format!("expand {}", dir.display()))?;
    if !paths::dir_exists(&dir)? {
        tracing::warn!("{} is not a directory", dir.display());
    }
    let outcomes = verify_all(dir, targets, manifest).await?;
    let total = outcomes.len();
    let mut failed = 0usize;
    for (target, outcome) in &outcomes {
        println!("{:<40} {}", target, outcome);
        if !outcome.is_verified() {
            failed += 1;
        }
    }
    if failed > 0 {
        anyhow::bail!("{failed} of {total} file(s) not verified");
    }
    Ok(())
}

pub(crate) async fn verify_all(
    dir: PathBuf,
    targets: Vec<String>,
    manifest: String,
) -> Result<Vec<(String, VerificationOutcome)>> {
    let verifier = Arc::new(IntegrityVerifier::new(
        ChunkedHasher::default(),
        Arc::new(TracingSink),
    ));
    let dir = Arc::new(dir);
    let manifest = Arc::new(manifest);

    let tasks: Vec<_> = targets
        .into_iter()
        .map(|target| {
            let verifier = Arc::clone(&verifier);
            let dir = Arc::clone(&dir);
            let manifest = Arc::clone(&manifest);
            tokio::task::spawn_blocking(move || {
                let outcome = verifier.verify(&dir, &manifest, &target);
                (target, outcome)
            })
        })
        .collect();

    let mut results = Vec::with_capacity(tasks.len());
    for task in tasks {
        let (target, outcome) = task.await.context("verify task join")?;
        let outcome = outcome.with_context(|| format!("verify {target}"))?;
        results.push((target, outcome));
    }
    Ok(results)
}
