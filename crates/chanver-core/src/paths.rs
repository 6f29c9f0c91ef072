//! Small filesystem helpers: existence checks and `~` expansion.

use std::io;
use std::path::{Path, PathBuf};

/// True if `dir/name` exists and is a regular file. Not-found is `Ok(false)`;
/// any other stat failure is returned.
pub fn file_exists(dir: &Path, name: &str) -> io::Result<bool> {
    match std::fs::metadata(dir.join(name)) {
        Ok(meta) => Ok(meta.is_file()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// True if `path` exists and is a directory.
pub fn dir_exists(path: &Path) -> io::Result<bool> {
    match std::fs::metadata(path) {
        Ok(meta) => Ok(meta.is_dir()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e),
    }
}

/// Replace a leading `~` with `$HOME`.
pub fn expand_tilde(path: &str) -> io::Result<PathBuf> {
    let Some(rest) = path.strip_prefix('~') else {
        return Ok(PathBuf::from(path));
    };
    let home = std::env::var_os("HOME")
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "HOME is not set"))?;
    let rest = rest.trim_start_matches(['/', '\\']);
    Ok(PathBuf::from(home).join(rest))
}

/// Expand `~` and make the result absolute (relative to the current dir).
pub fn expand_path(path: &str) -> io::Result<PathBuf> {
    let expanded = expand_tilde(path)?;
    if expanded.is_absolute() {
        return Ok(expanded);
    }
    Ok(std::env::current_dir()?.join(expanded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_exists_distinguishes_files_and_dirs() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("f"), b"x").unwrap();
        std::fs::create_dir(dir.path().join("d")).unwrap();
        assert!(file_exists(dir.path(), "f").unwrap());
        assert!(!file_exists(dir.path(), "d").unwrap());
        assert!(!file_exists(dir.path(), "missing").unwrap());
    }

    #[test]
    fn dir_exists_checks_kind() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("f"), b"x").unwrap();
        assert!(dir_exists(dir.path()).unwrap());
        assert!(!dir_exists(&dir.path().join("f")).unwrap());
        assert!(!dir_exists(&dir.path().join("missing")).unwrap());
    }

    #[test]
    fn no_tilde_is_unchanged() {
        assert_eq!(expand_tilde("/opt/x").unwrap(), PathBuf::from("/opt/x"));
    }

    #[test]
    fn expand_path_is_absolute() {
        assert!(expand_path("relative/dir").unwrap().is_absolute());
        if std::env::var_os("HOME").is_some() {
            assert!(expand_path("~/bin").unwrap().ends_with("bin"));
        }
    }
}
