//! Integrity verification of a downloaded artifact against a hash manifest.
//!
//! The check is a straight line: manifest present, target present, manifest
//! lists the target, digest matches. Each "cannot verify yet" step ends in a
//! [`VerificationOutcome`]; only I/O failures other than not-found are errors.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::checksum::ChunkedHasher;
use crate::error::{Error, Result};
use crate::manifest::{self, HashManifest};
use crate::messages::{ActionMessage, MessageSink, NullSink};
use crate::paths;

/// Terminal result of one verification call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationOutcome {
    HashManifestMissing,
    TargetFileMissing,
    HashEntryMissing,
    Mismatch,
    Verified,
}

impl VerificationOutcome {
    pub fn is_verified(self) -> bool {
        self == VerificationOutcome::Verified
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VerificationOutcome::HashManifestMissing => "hash manifest missing",
            VerificationOutcome::TargetFileMissing => "target file missing",
            VerificationOutcome::HashEntryMissing => "no hash entry for target",
            VerificationOutcome::Mismatch => "hash mismatch",
            VerificationOutcome::Verified => "verified",
        };
        f.write_str(s)
    }
}

/// Verifies files against manifests. Holds no per-call state, so one
/// verifier can serve concurrent calls.
#[derive(Clone)]
pub struct IntegrityVerifier {
    hasher: ChunkedHasher,
    sink: Arc<dyn MessageSink>,
}

impl Default for IntegrityVerifier {
    fn default() -> Self {
        Self::new(ChunkedHasher::default(), Arc::new(NullSink))
    }
}

impl IntegrityVerifier {
    pub fn new(hasher: ChunkedHasher, sink: Arc<dyn MessageSink>) -> Self {
        Self { hasher, sink }
    }

    /// Verify `dir/target` against the manifest file `dir/manifest_name`.
    pub fn verify(&self, dir: &Path, manifest_name: &str, target: &str) -> Result<VerificationOutcome> {
        if !exists(dir, manifest_name)? {
            tracing::debug!(dir = %dir.display(), manifest = manifest_name, "hash manifest not found");
            return Ok(VerificationOutcome::HashManifestMissing);
        }
        if !exists(dir, target)? {
            tracing::debug!(dir = %dir.display(), file = target, "target file not found");
            return Ok(VerificationOutcome::TargetFileMissing);
        }
        // The manifest may vanish between the check and the open.
        let Some(manifest) = manifest::load_manifest_file(dir, manifest_name)? else {
            return Ok(VerificationOutcome::HashManifestMissing);
        };
        self.match_entry(dir, &manifest, target)
    }

    /// Verify `dir/target` against an already parsed manifest.
    pub fn verify_with_manifest(
        &self,
        dir: &Path,
        manifest: &HashManifest,
        target: &str,
    ) -> Result<VerificationOutcome> {
        if !exists(dir, target)? {
            tracing::debug!(dir = %dir.display(), file = target, "target file not found");
            return Ok(VerificationOutcome::TargetFileMissing);
        }
        self.match_entry(dir, manifest, target)
    }

    fn match_entry(
        &self,
        dir: &Path,
        manifest: &HashManifest,
        target: &str,
    ) -> Result<VerificationOutcome> {
        let Some(expected) = manifest.get(target) else {
            self.sink
                .emit(ActionMessage::warn(format!("no hash entry for {target}")));
            return Ok(VerificationOutcome::HashEntryMissing);
        };

        let actual = self.hasher.sha256_path(&dir.join(target))?;
        if actual != expected {
            tracing::info!(file = target, %expected, %actual, "hash mismatch");
            self.sink
                .emit(ActionMessage::warn(format!("hash mismatch for {target}")));
            return Ok(VerificationOutcome::Mismatch);
        }

        tracing::info!(file = target, "hash verified");
        Ok(VerificationOutcome::Verified)
    }
}

fn exists(dir: &Path, name: &str) -> Result<bool> {
    paths::file_exists(dir, name).map_err(|e| Error::io(dir.join(name), e))
}
